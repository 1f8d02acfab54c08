use hierank_graphlib::Graph;

fn sorted(mut v: Vec<usize>) -> Vec<usize> {
    v.sort_unstable();
    v
}

#[test]
fn bind_records_endpoints_and_adjacency() {
    let mut g = Graph::new(3, 2);
    g.bind(0, 0, 1);
    g.bind(1, 1, 2);

    assert_eq!(g.source(0), 0);
    assert_eq!(g.target(0), 1);
    assert_eq!(g.out_edges(0), &[0]);
    assert_eq!(g.in_edges(1), &[0]);
    assert_eq!(g.out_edges(1), &[1]);
    assert_eq!(g.in_edges(2), &[1]);
    assert!(g.is_bound(0));
    assert!(g.is_bound(1));
}

#[test]
fn unbind_detaches_from_both_lists() {
    let mut g = Graph::new(2, 1);
    g.bind(0, 0, 1);
    g.unbind(0);

    assert!(!g.is_bound(0));
    assert!(g.out_edges(0).is_empty());
    assert!(g.in_edges(1).is_empty());
}

#[test]
fn unbind_keeps_sibling_positions_consistent() {
    // Three parallel-ish edges out of node 0; removing the first one
    // swap-moves the last into its slot, which must stay unbindable.
    let mut g = Graph::new(4, 3);
    g.bind(0, 0, 1);
    g.bind(1, 0, 2);
    g.bind(2, 0, 3);

    g.unbind(0);
    assert_eq!(sorted(g.out_edges(0).to_vec()), vec![1, 2]);

    g.unbind(2);
    assert_eq!(g.out_edges(0), &[1]);

    g.unbind(1);
    assert!(g.out_edges(0).is_empty());
}

#[test]
fn rebinding_a_released_edge_works() {
    let mut g = Graph::new(3, 1);
    g.bind(0, 0, 1);
    g.unbind(0);
    g.bind(0, 1, 2);

    assert_eq!(g.source(0), 1);
    assert_eq!(g.target(0), 2);
    assert_eq!(g.out_edges(1), &[0]);
    assert_eq!(g.in_edges(2), &[0]);
}

#[test]
fn unbind_node_detaches_every_incident_edge() {
    let mut g = Graph::new(3, 4);
    g.bind(0, 0, 1);
    g.bind(1, 1, 2);
    g.bind(2, 2, 1);
    g.bind(3, 1, 1);

    g.unbind_node(1);
    for e in 0..4 {
        assert!(!g.is_bound(e), "edge {e} should be detached");
    }
    assert!(g.out_edges(0).is_empty());
    assert!(g.in_edges(2).is_empty());
}

#[test]
fn self_loops_appear_in_both_lists() {
    let mut g = Graph::new(1, 1);
    g.bind(0, 0, 0);
    assert_eq!(g.out_edges(0), &[0]);
    assert_eq!(g.in_edges(0), &[0]);

    g.unbind(0);
    assert!(g.out_edges(0).is_empty());
    assert!(g.in_edges(0).is_empty());
}

#[test]
fn clones_are_independent_views() {
    let mut original = Graph::new(2, 2);
    original.bind(0, 0, 1);
    original.bind(1, 1, 0);

    let mut view = original.clone();
    view.unbind(0);

    assert!(original.is_bound(0));
    assert!(!view.is_bound(0));
    assert_eq!(original.out_edges(0), &[0]);
    assert!(view.out_edges(0).is_empty());
}

#[test]
fn first_out_follows_the_current_list_head() {
    let mut g = Graph::new(3, 2);
    assert_eq!(g.first_out(0), None);
    g.bind(0, 0, 1);
    g.bind(1, 0, 2);
    assert_eq!(g.first_out(0), Some(0));
    g.unbind(0);
    assert_eq!(g.first_out(0), Some(1));
}

#[test]
fn degrees_track_bindings() {
    let mut g = Graph::new(3, 3);
    g.bind(0, 0, 1);
    g.bind(1, 2, 1);
    g.bind(2, 1, 2);

    assert_eq!(g.in_degree(1), 2);
    assert_eq!(g.out_degree(1), 1);
    g.unbind(1);
    assert_eq!(g.in_degree(1), 1);
}
