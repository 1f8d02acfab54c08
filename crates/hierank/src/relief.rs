//! Relief minimization: the main loop that drives every Eulerian slack to
//! zero, repartitioning edges between the DAG and Eulerian views on the way.

use crate::solver::Solver;
use hierank_graphlib::LazyQueue;

/// Repeatedly pick an Eulerian edge with maximum outstanding slack and run a
/// relief on it. Terminates once every bucket has drained; at that point all
/// Eulerian slacks are zero, so `primal == dual` and the upper bound meets
/// the lower bound.
pub(crate) fn minimize(solver: &mut Solver) {
    debug_assert_dag_order(solver);
    while let Some(e) = solver.buckets.peek_max() {
        relief(solver, e);
        tracing::debug!(primal = solver.primal, dual = solver.dual, "relief step");
    }
}

/// Bounded priority exploration around Eulerian edge `p -> s`, prioritized by
/// required rank shift.
///
/// `p` seeds the exploration with its full slack as required shift. Popping
/// always takes a node with the largest outstanding shift; a popped node
/// tentatively commits `newrank = rank + shift` and relaxes its DAG
/// successors (which must stay strictly above it) and its Eulerian
/// predecessors (whose slack must not grow). Reaching `s` raises `bound`,
/// which cuts the remaining exploration; the probe stopping at `probe` means
/// every committed node is shifted back down by `probe + 1`, so nodes whose
/// requirement did not clear the floor end up not moving at all.
///
/// The probe level never increases, and a required shift never exceeds the
/// current probe level (asserted); together these guarantee a node popped
/// once is never re-queued within the same call.
fn relief(solver: &mut Solver, eid: usize) {
    let p = solver.euler.source(eid);
    let s = solver.euler.target(eid);

    solver.scratch.parent[p] = None;
    let diff = solver.slack_between(p, s);
    debug_assert!(diff > 0, "relieved edge must carry positive slack");
    solver.scratch.diff[p] = diff;

    let mut work = Exploration {
        solver: &mut *solver,
        queue: (0..diff).map(|_| LazyQueue::new()).collect(),
        touched: vec![p],
        visited: Vec::new(),
        bound: 0,
        probe: diff - 1,
        target: s,
    };
    work.queue[diff as usize - 1].push(p);
    work.explore();

    let Exploration {
        probe,
        touched,
        visited,
        ..
    } = work;

    if probe >= 0 {
        let shift = probe + 1;
        for &v in &visited {
            solver.scratch.newrank[v] -= shift;
        }
    }

    commit(solver, &touched);

    if solver.slack_between(p, s) != 0 {
        extract_cycle(solver, eid);
    }

    for &v in &touched {
        solver.scratch.parent[v] = None;
    }
}

struct Exploration<'a> {
    solver: &'a mut Solver,
    /// Per-call bucket array: a node requiring shift `t` sits in bucket
    /// `t - 1`.
    queue: Vec<LazyQueue>,
    /// Every node ever queued, in first-touch order.
    touched: Vec<usize>,
    /// The popped (tentatively committed) subset of `touched`.
    visited: Vec<usize>,
    bound: i32,
    probe: i32,
    target: usize,
}

impl Exploration<'_> {
    fn explore(&mut self) {
        loop {
            while self.probe >= 0 && self.queue[self.probe as usize].is_empty() {
                self.probe -= 1;
            }
            if self.probe < self.bound {
                break;
            }
            let u = self.queue[self.probe as usize]
                .pop()
                .expect("probed bucket is non-empty");
            self.solver.scratch.newrank[u] = self.solver.rank[u] + self.solver.scratch.diff[u];
            self.solver.scratch.diff[u] = 0;
            self.visited.push(u);
            if u == self.target {
                break;
            }

            for i in 0..self.solver.dag.out_degree(u) {
                let e = self.solver.dag.out_edges(u)[i];
                let v = self.solver.dag.target(e);
                debug_assert!(self.solver.rank[u] < self.solver.rank[v]);
                if self.solver.scratch.newrank[v] <= self.solver.scratch.newrank[u] {
                    let t = self.solver.scratch.newrank[u] + 1 - self.solver.scratch.newrank[v];
                    self.relax(v, u, e, t);
                }
            }

            for i in 0..self.solver.euler.in_degree(u) {
                let e = self.solver.euler.in_edges(u)[i];
                let v = self.solver.euler.source(e);
                let grown =
                    self.solver.projected_slack_between(v, u) - self.solver.slack_between(v, u);
                if grown > 0 {
                    self.relax(v, u, e, grown);
                }
            }
        }
    }

    /// Queue `v` with required shift `t` (or raise its pending requirement),
    /// remembering `via` and `edge` as the way it was reached. Reaching the
    /// relief target only tightens the exploration bound.
    fn relax(&mut self, v: usize, via: usize, edge: usize, t: i32) {
        debug_assert!(
            t - 1 <= self.probe,
            "a required shift may not exceed the probe level"
        );
        if v == self.target {
            self.bound = self.bound.max(t);
        }
        let pending = self.solver.scratch.diff[v];
        if t > pending {
            if pending > 0 {
                self.queue[pending as usize - 1].remove(v);
            } else {
                self.touched.push(v);
            }
            self.solver.scratch.diff[v] = t;
            self.queue[t as usize - 1].push(v);
            self.solver.scratch.parent[v] = Some((via, edge));
        }
    }
}

/// Commit the shifted ranks and restore the slack caches and bucket
/// memberships of every Eulerian edge leaving a moved node, keeping the
/// primal bound in step.
fn commit(solver: &mut Solver, touched: &[usize]) {
    for &v in touched {
        solver.rank[v] = solver.scratch.newrank[v];
        solver.scratch.diff[v] = 0;
    }
    for &u in touched {
        for i in 0..solver.euler.out_degree(u) {
            let e = solver.euler.out_edges(u)[i];
            let v = solver.euler.target(e);
            if solver.slack_between(u, v) != solver.slack[e] {
                solver.delete_slack(e);
                solver.add_slack(e);
            }
        }
    }
}

/// The relief left residual slack on `p -> s`: re-partition along the parent
/// chain recorded by the exploration. Walking from `s` back to `p`, Eulerian
/// chain edges move into the DAG view and DAG chain edges move into the
/// Eulerian view, with the dual/primal counters following each move; the
/// treated edge itself always ends up in the DAG view. Orientations never
/// flip, so the Eulerian view stays a union of directed cycles.
fn extract_cycle(solver: &mut Solver, eid: usize) {
    let p = solver.euler.source(eid);
    let s = solver.euler.target(eid);

    let mut u = s;
    while u != p {
        let (parent, pe) = solver.scratch.parent[u].expect("relief recorded a chain to the seed");
        if solver.eulerian[pe] {
            solver.eulerian[pe] = false;
            solver.euler.unbind(pe);
            debug_assert!(solver.rank[u] < solver.rank[parent]);
            solver.dag.bind(pe, u, parent);
            solver.delete_slack(pe);
            solver.dual -= 1;
            solver.primal -= 1;
        } else {
            solver.eulerian[pe] = true;
            solver.dag.unbind(pe);
            solver.euler.bind(pe, parent, u);
            solver.add_slack(pe);
            solver.dual += 1;
            solver.primal += 1;
        }
        u = parent;
    }

    solver.eulerian[eid] = false;
    solver.euler.unbind(eid);
    solver.dag.bind(eid, p, s);
    solver.dual -= 1;
    solver.primal -= 1;
    solver.delete_slack(eid);
}

/// Every DAG edge must point strictly upward before minimization starts; a
/// violation here means the decomposition or rank initialization is broken.
fn debug_assert_dag_order(solver: &Solver) {
    if cfg!(debug_assertions) {
        for v in 0..solver.node_count() {
            for &e in solver.dag.out_edges(v) {
                debug_assert!(
                    solver.rank[solver.dag.source(e)] < solver.rank[solver.dag.target(e)],
                    "DAG edge {e} violates rank order"
                );
            }
        }
    }
}
