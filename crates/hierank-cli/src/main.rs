use hierank::{Agony, dot, reader};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct RankReport {
    agony: i64,
    ranks: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Read(reader::ReadError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Read(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<reader::ReadError> for CliError {
    fn from(value: reader::ReadError) -> Self {
        Self::Read(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

const USAGE: &str = "\
Usage: hierank-cli <command> [options] <input>

Commands:
  rank    Compute a minimum-agony hierarchy ranking of the input graph
  dot     Render the input graph as DOT for external visualization

Options:
  --adjacency        Treat the input as an adjacency list (duplicates collapse)
  --format <f>       Output format for `rank`: tsv (default) or json
  -o <file>          Write output to <file> instead of stdout

The input file holds one edge per line: `source target`, separated by spaces
or tabs. Malformed lines are skipped.";

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Rank,
    Dot,
}

#[derive(Debug, Clone, Copy, Default)]
enum Format {
    #[default]
    Tsv,
    Json,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: String,
    adjacency: bool,
    format: Format,
    out: Option<String>,
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut rest = argv.iter().skip(1);

    args.command = match rest.next().map(String::as_str) {
        Some("rank") => Command::Rank,
        Some("dot") => Command::Dot,
        _ => return Err(CliError::Usage(USAGE)),
    };

    let mut input: Option<String> = None;
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--adjacency" => args.adjacency = true,
            "--format" => {
                args.format = match rest.next().map(String::as_str) {
                    Some("tsv") => Format::Tsv,
                    Some("json") => Format::Json,
                    _ => return Err(CliError::Usage("--format expects `tsv` or `json`")),
                };
            }
            "-o" => {
                let Some(path) = rest.next() else {
                    return Err(CliError::Usage("-o expects a file path"));
                };
                args.out = Some(path.clone());
            }
            _ if input.is_none() && !arg.starts_with('-') => input = Some(arg.clone()),
            _ => return Err(CliError::Usage(USAGE)),
        }
    }

    let Some(input) = input else {
        return Err(CliError::Usage(USAGE));
    };
    args.input = input;
    Ok(args)
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Rank => {
            let ranking = if args.adjacency {
                Agony::from_adjacency(reader::read_adjacency(&args.input)?).solve()
            } else {
                Agony::from_edges(reader::read_edges(&args.input)?).solve()
            };

            let mut rows: Vec<(&String, i32)> = ranking.iter().collect();
            rows.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

            let rendered = match args.format {
                Format::Tsv => {
                    eprintln!("agony: {}", ranking.agony());
                    let mut out = String::new();
                    for (label, rank) in rows {
                        out.push_str(label);
                        out.push('\t');
                        out.push_str(&rank.to_string());
                        out.push('\n');
                    }
                    out
                }
                Format::Json => {
                    let mut ranks = serde_json::Map::new();
                    for (label, rank) in rows {
                        ranks.insert(label.clone(), serde_json::Value::from(rank));
                    }
                    let report = RankReport {
                        agony: ranking.agony(),
                        ranks,
                    };
                    let mut text = serde_json::to_string_pretty(&report)?;
                    text.push('\n');
                    text
                }
            };
            write_output(args.out.as_deref(), &rendered)?;
        }
        Command::Dot => {
            let edges = reader::read_edges(&args.input)?;
            let rendered = dot::to_dot(&edges, |label| dot::quoted_node_id(label), &[]);
            write_output(args.out.as_deref(), &rendered)?;
        }
    }
    Ok(())
}

fn write_output(out: Option<&str>, text: &str) -> std::io::Result<()> {
    match out {
        Some(path) => std::fs::write(path, text),
        None => std::io::stdout().lock().write_all(text.as_bytes()),
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(args) => args,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
