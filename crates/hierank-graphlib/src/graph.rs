//! Mutable directed-graph view over a dense node/edge id space.

#[derive(Debug, Clone, Default)]
struct NodeSlot {
    out: Vec<usize>,
    inc: Vec<usize>,
}

#[derive(Debug, Clone, Copy)]
struct EdgeSlot {
    source: usize,
    target: usize,
    // Positions of this edge inside `source.out` / `target.inc`, kept in sync
    // by the swap-remove in `unbind`. Only meaningful while `bound`.
    out_pos: usize,
    in_pos: usize,
    bound: bool,
}

impl Default for EdgeSlot {
    fn default() -> Self {
        Self {
            source: 0,
            target: 0,
            out_pos: 0,
            in_pos: 0,
            bound: false,
        }
    }
}

/// A directed graph whose nodes are `0..node_count` and whose edges are
/// `0..edge_count`, with O(1) attach/detach of individual edges.
///
/// Edge slots exist from construction; an edge participates in adjacency only
/// between a `bind` and the next `unbind`. Cloning a view clones the current
/// binding state, which is how the solver derives its DAG/feedback views and
/// the scratch copy consumed by the cycle-breaking DFS.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<NodeSlot>,
    edges: Vec<EdgeSlot>,
}

impl Graph {
    pub fn new(node_count: usize, edge_count: usize) -> Self {
        Self {
            nodes: vec![NodeSlot::default(); node_count],
            edges: vec![EdgeSlot::default(); edge_count],
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_bound(&self, e: usize) -> bool {
        self.edges[e].bound
    }

    /// Source node of a bound edge.
    pub fn source(&self, e: usize) -> usize {
        debug_assert!(self.edges[e].bound, "edge {e} is not bound");
        self.edges[e].source
    }

    /// Target node of a bound edge.
    pub fn target(&self, e: usize) -> usize {
        debug_assert!(self.edges[e].bound, "edge {e} is not bound");
        self.edges[e].target
    }

    pub fn out_edges(&self, v: usize) -> &[usize] {
        &self.nodes[v].out
    }

    pub fn in_edges(&self, v: usize) -> &[usize] {
        &self.nodes[v].inc
    }

    pub fn out_degree(&self, v: usize) -> usize {
        self.nodes[v].out.len()
    }

    pub fn in_degree(&self, v: usize) -> usize {
        self.nodes[v].inc.len()
    }

    pub fn first_out(&self, v: usize) -> Option<usize> {
        self.nodes[v].out.first().copied()
    }

    /// Attach edge `e` as `source -> target` to both adjacency lists.
    pub fn bind(&mut self, e: usize, source: usize, target: usize) {
        let slot = &mut self.edges[e];
        debug_assert!(!slot.bound, "edge {e} is already bound");
        slot.source = source;
        slot.target = target;
        slot.bound = true;
        slot.out_pos = self.nodes[source].out.len();
        slot.in_pos = self.nodes[target].inc.len();
        self.nodes[source].out.push(e);
        self.nodes[target].inc.push(e);
    }

    /// Detach edge `e` from both adjacency lists.
    pub fn unbind(&mut self, e: usize) {
        let slot = self.edges[e];
        debug_assert!(slot.bound, "edge {e} is not bound");
        self.edges[e].bound = false;

        let Graph { nodes, edges } = self;
        let out = &mut nodes[slot.source].out;
        out.swap_remove(slot.out_pos);
        if let Some(&moved) = out.get(slot.out_pos) {
            edges[moved].out_pos = slot.out_pos;
        }
        let inc = &mut nodes[slot.target].inc;
        inc.swap_remove(slot.in_pos);
        if let Some(&moved) = inc.get(slot.in_pos) {
            edges[moved].in_pos = slot.in_pos;
        }
    }

    /// Detach every edge still incident to `v`.
    pub fn unbind_node(&mut self, v: usize) {
        while let Some(&e) = self.nodes[v].out.first() {
            self.unbind(e);
        }
        while let Some(&e) = self.nodes[v].inc.first() {
            self.unbind(e);
        }
    }
}
