//! Line-oriented readers for whitespace-separated edge files.
//!
//! Each line names one edge as `source<TAB or SPACE>target`; extra fields are
//! ignored. Lines with fewer than two fields are skipped with a warning;
//! malformed content never aborts a load, only failing to read the file does.

use indexmap::{IndexMap, IndexSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub type Result<T> = std::result::Result<T, ReadError>;

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("could not read graph file: {0}")]
    Io(#[from] std::io::Error),
}

/// Read an edge list, preserving duplicates and line order.
pub fn read_edges(path: impl AsRef<Path>) -> Result<Vec<(String, String)>> {
    let mut edges: Vec<(String, String)> = Vec::new();
    for_each_edge(path.as_ref(), |source, target| {
        edges.push((source.to_string(), target.to_string()));
    })?;
    Ok(edges)
}

/// Read an adjacency mapping. Successors accumulate as a set, so duplicate
/// lines collapse; both maps keep insertion order, which makes downstream id
/// assignment deterministic.
pub fn read_adjacency(path: impl AsRef<Path>) -> Result<IndexMap<String, IndexSet<String>>> {
    let mut adjacency: IndexMap<String, IndexSet<String>> = IndexMap::new();
    for_each_edge(path.as_ref(), |source, target| {
        adjacency
            .entry(source.to_string())
            .or_default()
            .insert(target.to_string());
    })?;
    Ok(adjacency)
}

fn for_each_edge(path: &Path, mut emit: impl FnMut(&str, &str)) -> Result<()> {
    let reader = BufReader::new(File::open(path)?);
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split([' ', '\t']).collect();
        if fields.len() < 2 {
            tracing::warn!(line = number + 1, "line has fewer than two fields, skipping");
            continue;
        }
        emit(fields[0], fields[1]);
    }
    Ok(())
}
