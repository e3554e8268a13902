//! `MinParametricQ` - the constrained dual of `MaxParametric`.
//!
//! Same parametric structure as [`crate::parametric::MaxParametric`],
//! but built on [`crate::constrained::ConstrainedNegCycleFinder`] so it
//! can alternate predecessor and successor relaxation: the direction
//! flag starts at "successor" and toggles after every pass, which
//! exposes cycles a restrictive `update_ok` would otherwise hide from
//! a single direction. Where `MaxParametric` tracks a descending
//! `r_min` and stops when `r_min >= r_opt`, this solver tracks an
//! ascending `r_max` and stops when `r_max <= ratio` -- both express
//! "no cycle further tightens the parameter", just from opposite sides.

use std::hash::Hash;
use std::ops::{Add, Sub};

use num::traits::Zero;
use petgraph::graph::{DiGraph, EdgeReference};
use petgraph::visit::IntoNodeIdentifiers;

use crate::constrained::ConstrainedNegCycleFinder;
use crate::distance::DistanceMap;

/// Supplies the problem-specific functions `MinParametricQ` needs.
/// `update_ok` defaults to accepting every relaxation; override it to
/// restrict which relaxations the underlying finder is allowed to make.
pub trait MinParametricAPI<E, R>
where
    R: Copy + PartialOrd,
    E: Clone,
{
    fn distance(&self, ratio: &R, edge: &EdgeReference<E>) -> R;
    fn zero_cancel(&self, cycle: &[EdgeReference<E>]) -> R;

    fn update_ok(&self, _old: R, _new: R) -> bool {
        true
    }
}

/// Constrained parametric driver: alternates predecessor/successor
/// relaxation while pushing `ratio` up to the largest value at which
/// some cycle still improves it.
#[derive(Debug)]
pub struct MinParametricQ<'a, V, E, R, P>
where
    R: Copy + PartialOrd,
    E: Clone,
    V: Eq + Hash + Clone,
    P: MinParametricAPI<E, R>,
{
    digraph: &'a DiGraph<V, E>,
    ncf: ConstrainedNegCycleFinder<'a, V, E>,
    omega: P,
    max_iters: Option<usize>,
    pick_one_only: bool,
    _marker: std::marker::PhantomData<R>,
}

impl<'a, V, E, R, P> MinParametricQ<'a, V, E, R, P>
where
    R: Copy + PartialOrd + Add<Output = R> + Sub<Output = R> + Zero,
    E: Clone,
    V: Eq + Hash + Clone,
    P: MinParametricAPI<E, R>,
{
    pub fn new(digraph: &'a DiGraph<V, E>, omega: P) -> Self {
        Self {
            digraph,
            ncf: ConstrainedNegCycleFinder::new(digraph),
            omega,
            max_iters: None,
            pick_one_only: false,
            _marker: std::marker::PhantomData,
        }
    }

    /// Bounds the number of outer (direction-alternating) iterations.
    /// `None` (the default) runs until convergence.
    pub fn with_max_iters(mut self, max_iters: Option<usize>) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// When set, each pass stops collecting cycles after the first one
    /// that strictly improves `r_max`, instead of scanning the whole pass.
    pub fn with_pick_one_only(mut self, pick_one_only: bool) -> Self {
        self.pick_one_only = pick_one_only;
        self
    }

    /// Runs the solver starting from `ratio`, returning `(r*, critical_cycle)`.
    /// Direction starts at "successor" and toggles after every pass.
    pub fn run<DM>(&mut self, dist: &mut DM, ratio: R) -> (R, Vec<EdgeReference<'a, E>>)
    where
        DM: DistanceMap<R> + ?Sized,
    {
        let mut ratio = ratio;
        let mut cycle = Vec::new();
        let mut use_succ = true;
        let mut iters = 0usize;

        loop {
            if let Some(limit) = self.max_iters {
                if iters >= limit {
                    break;
                }
            }
            iters += 1;

            for node in self.digraph.node_identifiers() {
                dist.set(node, R::zero());
            }

            let mut r_max = ratio;
            let mut c_max: Option<Vec<EdgeReference<'a, E>>> = None;

            if use_succ {
                for c in self.ncf.howard_succ(
                    dist,
                    |e| self.omega.distance(&ratio, &e),
                    |old, new| self.omega.update_ok(old, new),
                ) {
                    let r = self.omega.zero_cancel(&c);
                    if r > r_max {
                        r_max = r;
                        c_max = Some(c);
                        if self.pick_one_only {
                            break;
                        }
                    }
                }
            } else {
                for c in self.ncf.howard_pred(
                    dist,
                    |e| self.omega.distance(&ratio, &e),
                    |old, new| self.omega.update_ok(old, new),
                ) {
                    let r = self.omega.zero_cancel(&c);
                    if r > r_max {
                        r_max = r;
                        c_max = Some(c);
                        if self.pick_one_only {
                            break;
                        }
                    }
                }
            }

            match c_max {
                Some(c) if r_max > ratio => {
                    ratio = r_max;
                    cycle = c;
                    use_succ = !use_succ;
                }
                _ => break,
            }
        }

        (ratio, cycle)
    }
}
