//! Solver state shared by the solve phases.

use crate::slack::SlackBuckets;
use hierank_graphlib::Graph;

/// Per-node exploration scratch. `newrank` mirrors `rank` between relief
/// calls; `diff == 0` means "not queued in the current exploration"; `parent`
/// records how a node was reached (parent node, connecting edge) and is
/// cleared for every touched node at the end of each relief call, so no
/// exploration state leaks from one call into the next.
#[derive(Debug)]
pub(crate) struct Scratch {
    pub(crate) newrank: Vec<i32>,
    pub(crate) diff: Vec<i32>,
    pub(crate) parent: Vec<Option<(usize, usize)>>,
}

impl Scratch {
    fn new(node_count: usize) -> Self {
        Self {
            newrank: vec![0; node_count],
            diff: vec![0; node_count],
            parent: vec![None; node_count],
        }
    }
}

/// All state of one solve: the three graph views, the edge partition, the
/// committed ranks, the slack buckets, and the primal/dual cost counters.
///
/// Invariants, once [`split_views`](Solver::split_views) has run:
/// - every edge is bound in exactly one of `dag` / `euler`, and `dag` is
///   acyclic;
/// - `euler` is in-out balanced at every node (a union of directed cycles);
/// - `primal == dual + sum of cached slacks of Eulerian edges`, and `primal`
///   never increases.
#[derive(Debug)]
pub(crate) struct Solver {
    pub(crate) graph: Graph,
    pub(crate) dag: Graph,
    pub(crate) euler: Graph,

    /// Partition flag per edge: `true` = Eulerian view, `false` = DAG view.
    pub(crate) eulerian: Vec<bool>,
    /// Cached slack per edge, maintained only while the edge is Eulerian.
    pub(crate) slack: Vec<i32>,

    pub(crate) rank: Vec<i32>,
    pub(crate) scratch: Scratch,
    pub(crate) buckets: SlackBuckets,

    pub(crate) dual: i64,
    pub(crate) primal: i64,
}

impl Solver {
    pub(crate) fn new(node_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Graph::new(node_count, edges.len());
        for (e, &(source, target)) in edges.iter().enumerate() {
            graph.bind(e, source, target);
        }
        Self {
            graph,
            dag: Graph::default(),
            euler: Graph::default(),
            eulerian: vec![false; edges.len()],
            slack: vec![0; edges.len()],
            rank: vec![0; node_count],
            scratch: Scratch::new(node_count),
            buckets: SlackBuckets::new(),
            dual: 0,
            primal: 0,
        }
    }

    pub(crate) fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Derive the DAG and Eulerian views from the partition flags set by the
    /// cycle-breaking decomposition. Seeds `dual` (Eulerian edge count) and
    /// `primal` (slacks are all still uncounted at this point).
    pub(crate) fn split_views(&mut self) {
        self.dag = self.graph.clone();
        self.euler = self.graph.clone();
        for e in 0..self.edge_count() {
            if self.eulerian[e] {
                self.dag.unbind(e);
                self.dual += 1;
            } else {
                self.euler.unbind(e);
            }
        }
        self.primal = self.dual;
    }

    /// Slack of a `source -> target` edge under the committed ranks.
    pub(crate) fn slack_between(&self, source: usize, target: usize) -> i32 {
        if self.rank[target] > self.rank[source] + 1 {
            self.rank[target] - self.rank[source] - 1
        } else {
            0
        }
    }

    /// Slack of a `source -> target` edge under the in-progress `newrank`s.
    pub(crate) fn projected_slack_between(&self, source: usize, target: usize) -> i32 {
        let newrank = &self.scratch.newrank;
        if newrank[target] > newrank[source] + 1 {
            newrank[target] - newrank[source] - 1
        } else {
            0
        }
    }

    pub(crate) fn edge_slack(&self, e: usize) -> i32 {
        self.slack_between(self.graph.source(e), self.graph.target(e))
    }
}
