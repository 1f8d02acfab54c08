//! Public entry point: generic labels in, compacted ranks out.

use crate::solver::Solver;
use crate::{decompose, rank, relief};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::BTreeMap;
use std::hash::Hash;

/// A minimum-agony ranking problem over labels of type `L`.
///
/// Labels are interned into dense integer ids (in first-seen order) at
/// construction; the solve itself never touches a label again. Construction
/// accepts either an explicit edge-pair list (duplicates kept verbatim; each
/// parallel edge counts on its own) or an adjacency mapping, whose successor
/// collections are taken as given. Self-loops are accepted: one always ends
/// up in the Eulerian part with slack 0 and contributes exactly 1 to the
/// final cost.
pub struct Agony<L> {
    labels: Vec<L>,
    solver: Solver,
}

impl<L: Eq + Hash + Clone> Agony<L> {
    /// Build from `(source, target)` pairs.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (L, L)>,
    {
        let mut index: FxHashMap<L, usize> = FxHashMap::default();
        let mut labels: Vec<L> = Vec::new();
        let mut pairs: Vec<(usize, usize)> = Vec::new();
        for (source, target) in edges {
            let s = intern(&mut index, &mut labels, source);
            let t = intern(&mut index, &mut labels, target);
            pairs.push((s, t));
        }
        let solver = Solver::new(labels.len(), &pairs);
        Self { labels, solver }
    }

    /// Build from an adjacency mapping (label to successors). Every key is
    /// interned before its successors, so id assignment follows the mapping's
    /// iteration order.
    pub fn from_adjacency<I, S>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (L, S)>,
        S: IntoIterator<Item = L>,
    {
        let mut index: FxHashMap<L, usize> = FxHashMap::default();
        let mut labels: Vec<L> = Vec::new();
        let mut pairs: Vec<(usize, usize)> = Vec::new();
        for (source, successors) in adjacency {
            let s = intern(&mut index, &mut labels, source);
            for target in successors {
                let t = intern(&mut index, &mut labels, target);
                pairs.push((s, t));
            }
        }
        let solver = Solver::new(labels.len(), &pairs);
        Self { labels, solver }
    }

    /// Run the solve: decompose, rank, minimize, compact. Total and
    /// deterministic for any finite input; the returned cost is the exact
    /// minimum total agony.
    pub fn solve(mut self) -> Ranking<L> {
        decompose::break_cycles(&mut self.solver);
        self.solver.split_views();
        rank::init_ranks(&mut self.solver);
        tracing::info!(
            primal = self.solver.primal,
            dual = self.solver.dual,
            "starting agony minimization"
        );
        relief::minimize(&mut self.solver);
        tracing::info!(agony = self.solver.primal, "agony minimization finished");
        self.compact()
    }

    /// Compress the committed ranks into a dense `0..k` sequence and pair
    /// them back up with the labels.
    fn compact(self) -> Ranking<L> {
        let mut order: BTreeMap<i32, i32> = BTreeMap::new();
        for &r in &self.solver.rank {
            order.insert(r, 0);
        }
        for (dense, (_, slot)) in order.iter_mut().enumerate() {
            *slot = dense as i32;
        }

        let mut ranks: FxHashMap<L, i32> = FxHashMap::default();
        for (id, label) in self.labels.into_iter().enumerate() {
            ranks.insert(label, order[&self.solver.rank[id]]);
        }
        Ranking {
            ranks,
            agony: self.solver.primal,
        }
    }
}

fn intern<L: Eq + Hash + Clone>(
    index: &mut FxHashMap<L, usize>,
    labels: &mut Vec<L>,
    label: L,
) -> usize {
    if let Some(&id) = index.get(&label) {
        return id;
    }
    let id = labels.len();
    labels.push(label.clone());
    index.insert(label, id);
    id
}

/// Result of a solve: a dense, consecutive, 0-based rank per label, plus the
/// minimized total agony of the input graph under those ranks.
#[derive(Debug, Clone, Serialize)]
pub struct Ranking<L: Eq + Hash> {
    ranks: FxHashMap<L, i32>,
    agony: i64,
}

impl<L: Eq + Hash> Ranking<L> {
    pub fn rank(&self, label: &L) -> Option<i32> {
        self.ranks.get(label).copied()
    }

    /// The minimized total agony.
    pub fn agony(&self) -> i64 {
        self.agony
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&L, i32)> {
        self.ranks.iter().map(|(label, &rank)| (label, rank))
    }

    pub fn into_ranks(self) -> FxHashMap<L, i32> {
        self.ranks
    }
}
