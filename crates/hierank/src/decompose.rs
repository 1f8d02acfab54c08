//! Cycle-breaking decomposition: split the edge set into an acyclic part and
//! a union of directed cycles.

use crate::solver::Solver;
use hierank_graphlib::LazyQueue;

/// Iterative DFS over a scratch copy of the graph. Whenever an edge closes
/// back onto the active parent chain (or the seed of the current pass), every
/// tree edge between the current node and that ancestor, plus the closing
/// edge itself, is marked Eulerian and consumed; the chain is unwound back to
/// the ancestor and the search resumes there.
///
/// Marking the whole cycle (not just the closing edge) keeps the Eulerian
/// part in-out balanced at every node, which is what makes the Eulerian edge
/// count a lower bound on the achievable agony. Edges are unbound from the
/// scratch copy as they are consumed and nodes are unbound once exhausted, so
/// every edge is visited exactly once.
pub(crate) fn break_cycles(solver: &mut Solver) {
    let n = solver.node_count();
    let mut dfs = solver.graph.clone();
    let mut active: LazyQueue = (0..n).collect();
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut parent_edge: Vec<usize> = vec![0; n];

    while let Some(seed) = active.peek() {
        parent[seed] = None;
        let mut head = Some(seed);
        while let Some(u) = head {
            match dfs.first_out(u) {
                None => {
                    // Exhausted: drop the node (and its unexplored in-edges)
                    // and resume from its parent.
                    active.remove(u);
                    dfs.unbind_node(u);
                    head = parent[u];
                }
                Some(e) => {
                    let v = dfs.target(e);
                    if parent[v].is_none() && v != seed {
                        parent[v] = Some(u);
                        parent_edge[v] = e;
                        head = Some(v);
                    } else {
                        // `v` is on the chain: the tree edges v -> .. -> u
                        // plus the closing edge form a directed cycle.
                        let mut w = u;
                        while w != v {
                            let pe = parent_edge[w];
                            solver.eulerian[pe] = true;
                            dfs.unbind(pe);
                            w = parent[w].expect("chain must lead back to the closing target");
                        }
                        solver.eulerian[e] = true;
                        dfs.unbind(e);

                        let mut w = u;
                        while w != v {
                            let next = parent[w].expect("chain must lead back to the closing target");
                            parent[w] = None;
                            w = next;
                        }
                        head = Some(v);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::break_cycles;
    use crate::solver::Solver;

    fn eulerian_count(solver: &Solver) -> usize {
        solver.eulerian.iter().filter(|&&e| e).count()
    }

    /// Within the Eulerian part, every node has equal in- and out-degree.
    fn assert_balanced(solver: &Solver) {
        let mut in_deg = vec![0usize; solver.node_count()];
        let mut out_deg = vec![0usize; solver.node_count()];
        for e in 0..solver.edge_count() {
            if solver.eulerian[e] {
                out_deg[solver.graph.source(e)] += 1;
                in_deg[solver.graph.target(e)] += 1;
            }
        }
        assert_eq!(in_deg, out_deg);
    }

    #[test]
    fn acyclic_input_marks_nothing() {
        let mut solver = Solver::new(4, &[(0, 1), (1, 2), (1, 3), (0, 3)]);
        break_cycles(&mut solver);
        assert_eq!(eulerian_count(&solver), 0);
    }

    #[test]
    fn a_two_cycle_is_marked_whole() {
        let mut solver = Solver::new(2, &[(0, 1), (1, 0)]);
        break_cycles(&mut solver);
        assert_eq!(eulerian_count(&solver), 2);
        assert_balanced(&solver);
    }

    #[test]
    fn a_self_loop_is_eulerian() {
        let mut solver = Solver::new(2, &[(0, 0), (0, 1)]);
        break_cycles(&mut solver);
        assert!(solver.eulerian[0]);
        assert!(!solver.eulerian[1]);
    }

    #[test]
    fn the_remaining_edges_form_a_dag() {
        // Two overlapping cycles sharing node 1.
        let edges = [(0, 1), (1, 2), (2, 0), (1, 3), (3, 4), (4, 1), (0, 4)];
        let mut solver = Solver::new(5, &edges);
        break_cycles(&mut solver);
        assert_balanced(&solver);

        // Kahn over the unmarked edges must consume every node.
        let n = solver.node_count();
        let mut indeg = vec![0usize; n];
        let mut out: Vec<Vec<usize>> = vec![Vec::new(); n];
        for (e, &(s, t)) in edges.iter().enumerate() {
            if !solver.eulerian[e] {
                indeg[t] += 1;
                out[s].push(t);
            }
        }
        let mut stack: Vec<usize> = (0..n).filter(|&v| indeg[v] == 0).collect();
        let mut seen = 0;
        while let Some(v) = stack.pop() {
            seen += 1;
            for &w in &out[v] {
                indeg[w] -= 1;
                if indeg[w] == 0 {
                    stack.push(w);
                }
            }
        }
        assert_eq!(seen, n, "DAG view still contains a cycle");
    }
}
