use assert_cmd::Command;
use std::io::Write;

fn graph_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn cli() -> Command {
    Command::cargo_bin("hierank-cli").expect("binary builds")
}

#[test]
fn ranks_a_chain_as_tsv() {
    let file = graph_file("a b\nb c\n");
    let assert = cli().arg("rank").arg(file.path()).assert().success();
    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "a\t0\nb\t1\nc\t2\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("agony: 0"));
}

#[test]
fn ranks_a_cycle_as_json() {
    let file = graph_file("a b\nb a\n");
    let assert = cli()
        .arg("rank")
        .arg("--format")
        .arg("json")
        .arg(file.path())
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let doc: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(doc["agony"], 2);
    assert_eq!(doc["ranks"]["a"], 0);
    assert_eq!(doc["ranks"]["b"], 0);
}

#[test]
fn adjacency_mode_collapses_duplicate_lines() {
    let file = graph_file("a b\na b\nb c\n");
    let assert = cli()
        .arg("rank")
        .arg("--adjacency")
        .arg(file.path())
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout, "a\t0\nb\t1\nc\t2\n");
}

#[test]
fn writes_output_to_a_file() {
    let file = graph_file("a b\n");
    let out = tempfile::NamedTempFile::new().expect("create temp file");
    cli()
        .arg("rank")
        .arg("-o")
        .arg(out.path())
        .arg(file.path())
        .assert()
        .success();
    let written = std::fs::read_to_string(out.path()).expect("output written");
    assert_eq!(written, "a\t0\nb\t1\n");
}

#[test]
fn renders_dot_output() {
    let file = graph_file("a b\n");
    let assert = cli().arg("dot").arg(file.path()).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout, "digraph D {\n    \"a\" -> \"b\";\n}");
}

#[test]
fn missing_command_is_a_usage_error() {
    cli().assert().failure().code(2);
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let file = graph_file("a b\n");
    cli()
        .arg("rank")
        .arg("--bogus")
        .arg(file.path())
        .assert()
        .failure()
        .code(2);
}

#[test]
fn missing_input_file_fails_cleanly() {
    cli()
        .arg("rank")
        .arg("/nonexistent/graph.txt")
        .assert()
        .failure()
        .code(1);
}
