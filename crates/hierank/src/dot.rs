//! DOT rendering of a directed graph, for external visualization.
//!
//! The output can be turned into an image with `dot -Tpng -o out.png file.dot`.

use indexmap::{IndexMap, IndexSet};
use std::hash::Hash;
use std::io::Write;
use std::path::Path;

/// Render `digraph D { ... }` for the given edges. `node_id` maps a label to
/// its DOT identifier; labels mapped to `None` are dropped together with
/// their edges. Duplicate edges collapse. `graph_attributes` are emitted
/// verbatim, one line each, before the edges.
pub fn to_dot<L: Eq + Hash>(
    edges: &[(L, L)],
    node_id: impl Fn(&L) -> Option<String>,
    graph_attributes: &[&str],
) -> String {
    let mut adjacency: IndexMap<&L, IndexSet<&L>> = IndexMap::new();
    for (source, target) in edges {
        adjacency.entry(source).or_default().insert(target);
    }

    let mut out = String::from("digraph D {\n");
    for attr in graph_attributes {
        out.push_str(attr);
        out.push('\n');
    }
    for (source, targets) in &adjacency {
        let Some(source_id) = node_id(source) else {
            continue;
        };
        for &target in targets {
            let Some(target_id) = node_id(target) else {
                continue;
            };
            out.push_str("    ");
            out.push_str(&source_id);
            out.push_str(" -> ");
            out.push_str(&target_id);
            out.push_str(";\n");
        }
    }
    out.push('}');
    out
}

/// [`to_dot`] straight to a file.
pub fn write_dot_file<L: Eq + Hash>(
    path: impl AsRef<Path>,
    edges: &[(L, L)],
    node_id: impl Fn(&L) -> Option<String>,
    graph_attributes: &[&str],
) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(to_dot(edges, node_id, graph_attributes).as_bytes())
}

/// Default node identifier: the label quoted, with backslashes and quotation
/// marks escaped. Blank labels yield `None` (the node is dropped).
pub fn quoted_node_id(label: &str) -> Option<String> {
    if label.trim().is_empty() {
        return None;
    }
    Some(format!(
        "\"{}\"",
        label.replace('\\', "\\\\").replace('"', "\\\"")
    ))
}
