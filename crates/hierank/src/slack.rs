//! Slack buckets: amortized O(1) access to a maximum-slack Eulerian edge.

use crate::solver::Solver;
use hierank_graphlib::LazyQueue;

/// Bucket array of lazy-deletion queues, indexed by `slack - 1` (only edges
/// with positive slack are queued). A downward-moving cursor tracks the
/// highest bucket worth probing; inserts raise it again when an edge lands
/// above it, and the array grows on demand, so slacks larger than anything
/// seen so far are handled rather than silently missed.
#[derive(Debug, Default)]
pub(crate) struct SlackBuckets {
    buckets: Vec<LazyQueue>,
    cur: i64,
}

impl SlackBuckets {
    pub(crate) fn new() -> Self {
        Self {
            buckets: Vec::new(),
            cur: -1,
        }
    }

    /// Raise the cursor for a slack value observed outside the buckets.
    /// Used once, while seeding: the original ranks may leave wide gaps on
    /// DAG edges, and a later repartition can turn such an edge Eulerian.
    pub(crate) fn observe(&mut self, slack: i32) {
        self.cur = self.cur.max(i64::from(slack));
    }

    pub(crate) fn insert(&mut self, e: usize, slack: i32) {
        debug_assert!(slack > 0, "only positive slack is bucketed");
        let idx = (slack - 1) as usize;
        if idx >= self.buckets.len() {
            self.buckets.resize_with(idx + 1, LazyQueue::new);
        }
        self.buckets[idx].push(e);
        self.cur = self.cur.max(idx as i64);
    }

    pub(crate) fn remove(&mut self, e: usize, slack: i32) {
        debug_assert!(slack > 0);
        self.buckets[(slack - 1) as usize].remove(e);
    }

    /// An edge from the highest non-empty bucket, or `None` once every bucket
    /// has drained, which is the convergence condition of the whole solve.
    pub(crate) fn peek_max(&mut self) -> Option<usize> {
        if self.cur >= self.buckets.len() as i64 {
            self.cur = self.buckets.len() as i64 - 1;
        }
        while self.cur >= 0 && self.buckets[self.cur as usize].is_empty() {
            self.cur -= 1;
        }
        if self.cur < 0 {
            return None;
        }
        self.buckets[self.cur as usize].peek()
    }
}

impl Solver {
    /// Recompute and cache the slack of Eulerian edge `e`, queue it if
    /// positive, and account for it in the primal bound.
    pub(crate) fn add_slack(&mut self, e: usize) {
        let t = self.edge_slack(e);
        self.slack[e] = t;
        if t > 0 {
            self.buckets.insert(e, t);
        }
        self.primal += i64::from(t);
    }

    /// Remove Eulerian edge `e` from its bucket (if queued) and discount its
    /// cached slack from the primal bound.
    pub(crate) fn delete_slack(&mut self, e: usize) {
        let t = self.slack[e];
        if t > 0 {
            self.buckets.remove(e, t);
        }
        self.primal -= i64::from(t);
    }
}
