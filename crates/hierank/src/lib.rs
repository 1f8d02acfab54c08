//! Minimum-agony hierarchy ranking of directed graphs that may contain cycles.
//!
//! Every vertex is assigned an integer rank so that the total *agony*, the
//! sum over all edges of `max(0, rank(source) - rank(target) + 1)`, is
//! minimized. This is an implementation of the paper
//! *Faster way to agony - Discovering hierarchies in directed graphs* by
//! Nikolaj Tatti (an improved version of *Hierarchies in directed networks*).
//!
//! The solver maintains a partition of the edge set into an acyclic part and
//! a union of directed cycles, and iteratively relaxes rank violations until
//! the tracked upper bound meets the lower bound, which certifies optimality.
//!
//! ```
//! use hierank::Agony;
//!
//! let ranking = Agony::from_edges([("a", "b"), ("b", "c")]).solve();
//! assert_eq!(ranking.agony(), 0);
//! assert_eq!(ranking.rank(&"a"), Some(0));
//! assert_eq!(ranking.rank(&"c"), Some(2));
//! ```

pub use hierank_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod agony;
mod decompose;
mod rank;
mod relief;
mod slack;
mod solver;

pub mod dot;
pub mod reader;

pub use agony::{Agony, Ranking};
