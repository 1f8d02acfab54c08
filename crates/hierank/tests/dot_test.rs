use hierank::dot::{quoted_node_id, to_dot};

#[test]
fn renders_a_digraph_with_quoted_ids() {
    let edges = [("a", "b"), ("b", "c")];
    let rendered = to_dot(&edges, |l| quoted_node_id(l), &[]);
    assert_eq!(
        rendered,
        "digraph D {\n    \"a\" -> \"b\";\n    \"b\" -> \"c\";\n}"
    );
}

#[test]
fn duplicate_edges_collapse() {
    let edges = [("a", "b"), ("a", "b")];
    let rendered = to_dot(&edges, |l| quoted_node_id(l), &[]);
    assert_eq!(rendered.matches("->").count(), 1);
}

#[test]
fn graph_attributes_come_first() {
    let edges = [("a", "b")];
    let rendered = to_dot(&edges, |l| quoted_node_id(l), &["rankdir=BT;"]);
    assert!(rendered.starts_with("digraph D {\nrankdir=BT;\n"));
}

#[test]
fn nodes_without_an_id_are_dropped() {
    let edges = [("a", ""), ("a", "b"), ("", "b")];
    let rendered = to_dot(&edges, |l| quoted_node_id(l), &[]);
    assert_eq!(rendered.matches("->").count(), 1);
    assert!(rendered.contains("\"a\" -> \"b\";"));
}

#[test]
fn quoting_escapes_backslashes_and_quotes() {
    assert_eq!(quoted_node_id("plain"), Some("\"plain\"".to_string()));
    assert_eq!(
        quoted_node_id("say \"hi\""),
        Some("\"say \\\"hi\\\"\"".to_string())
    );
    assert_eq!(
        quoted_node_id("back\\slash"),
        Some("\"back\\\\slash\"".to_string())
    );
    assert_eq!(quoted_node_id("   "), None);
    assert_eq!(quoted_node_id(""), None);
}
