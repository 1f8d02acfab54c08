//! Dense-id graph container APIs used by `hierank`.
//!
//! The solver keeps several *views* of one edge set alive at the same time
//! (the original graph, its acyclic part, its feedback part). Every view is a
//! separate [`Graph`] instance over the same node/edge id space; an edge is
//! attached to a view with [`Graph::bind`] and detached with
//! [`Graph::unbind`], both O(1).

mod graph;
mod queue;

pub use graph::Graph;
pub use queue::LazyQueue;
