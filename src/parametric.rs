//! `MaxParametric` - drives a scalar parameter downward via `NegCycleFinder`.
//!
//! Given a starting parameter `r_opt`, a weight functor monotone in
//! `r`, and a `zero_cancel` function mapping a cycle to the parameter
//! value that would make its total weight vanish, repeatedly finds the
//! cycle with the smallest `zero_cancel` under the current weights and
//! lowers `r_opt` to match, until no cycle improves further.

use std::hash::Hash;
use std::ops::Add;

use num::traits::Zero;
use petgraph::graph::{DiGraph, EdgeReference};
use petgraph::visit::IntoNodeIdentifiers;

use crate::distance::DistanceMap;
use crate::neg_cycle::NegCycleFinder;

/// Supplies the two problem-specific functions `MaxParametric` needs:
/// the parametric edge weight (in the ratio/parameter domain `R`) and
/// the value of `r` that cancels a cycle's total weight. `E` is the
/// edge payload type of the underlying graph and may differ from `R`
/// (e.g. `E = CostTime<D>`, `R = Ratio<D>` for cycle-ratio problems).
///
/// # Example
/// ```rust
/// use petgraph::graph::EdgeReference;
/// use digraphx_rs::parametric::ParametricAPI;
/// use num::rational::Ratio;
///
/// struct MyAPI;
///
/// impl ParametricAPI<Ratio<i32>, Ratio<i32>> for MyAPI {
///     fn distance(&self, ratio: &Ratio<i32>, _edge: &EdgeReference<Ratio<i32>>) -> Ratio<i32> {
///         *ratio
///     }
///
///     fn zero_cancel(&self, _cycle: &[EdgeReference<Ratio<i32>>]) -> Ratio<i32> {
///         Ratio::new(0, 1)
///     }
/// }
/// ```
pub trait ParametricAPI<E, R>
where
    R: Copy + PartialOrd,
    E: Clone,
{
    fn distance(&self, ratio: &R, edge: &EdgeReference<E>) -> R;
    fn zero_cancel(&self, cycle: &[EdgeReference<E>]) -> R;
}

/// Drives `r_opt` down to the minimum value at which no cycle of the
/// graph, weighted by `omega.distance(r_opt, _)`, is negative.
#[derive(Debug)]
pub struct MaxParametric<'a, V, E, R, P>
where
    R: Copy + PartialOrd,
    E: Clone,
    V: Eq + Hash + Clone,
    P: ParametricAPI<E, R>,
{
    digraph: &'a DiGraph<V, E>,
    ncf: NegCycleFinder<'a, V, E>,
    omega: P,
    max_iters: Option<usize>,
    _marker: std::marker::PhantomData<R>,
}

impl<'a, V, E, R, P> MaxParametric<'a, V, E, R, P>
where
    R: Copy + PartialOrd + Add<Output = R> + Zero,
    E: Clone,
    V: Eq + Hash + Clone,
    P: ParametricAPI<E, R>,
{
    pub fn new(digraph: &'a DiGraph<V, E>, omega: P) -> Self {
        Self {
            digraph,
            ncf: NegCycleFinder::new(digraph),
            omega,
            max_iters: None,
            _marker: std::marker::PhantomData,
        }
    }

    /// Bounds the number of outer iterations (relevant for numeric
    /// types, such as floating point, that are not guaranteed to make
    /// discrete progress). `None` (the default) runs until convergence.
    pub fn with_max_iters(mut self, max_iters: Option<usize>) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Runs the parametric driver, updating `ratio` in place and
    /// returning the critical cycle (empty if `ratio` was already
    /// optimal).
    pub fn run<DM>(&mut self, dist: &mut DM, ratio: &mut R) -> Vec<EdgeReference<'a, E>>
    where
        DM: DistanceMap<R> + ?Sized,
    {
        let mut cycle = Vec::new();
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

            let mut r_min = *ratio;
            let mut c_min: Option<Vec<EdgeReference<'a, E>>> = None;
            for c in self.ncf.howard(dist, |e| self.omega.distance(ratio, &e)) {
                let r = self.omega.zero_cancel(&c);
                if r < r_min {
                    r_min = r;
                    c_min = Some(c);
                }
            }
            match c_min {
                Some(c) if r_min < *ratio => {
                    *ratio = r_min;
                    cycle = c;
                }
                _ => break,
            }
        }
        cycle
    }
}
