//! `MinCycleRatio` - minimum cost/time ratio over directed cycles.
//!
//! Specializes [`crate::parametric::MaxParametric`] to the cost/time
//! ratio problem: `distance(r, e) = cost(e) - r * time(e)`,
//! `zero_cancel(cycle) = sum(cost) / sum(time)`. The returned `r*`
//! equals the minimum of `sum(cost)/sum(time)` over all directed
//! cycles, and the returned cycle realizes it.

use std::hash::Hash;
use std::ops::{Add, Div, Mul, Sub};

use num::traits::Zero;
use petgraph::graph::{DiGraph, EdgeReference};

use crate::distance::DistanceMap;
use crate::parametric::{MaxParametric, ParametricAPI};

/// Edge payload for cycle-ratio problems: a cost and a time, both in
/// the same numeric domain `D`. `time` must sum to a positive value
/// over any cycle for the ratio to be well defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostTime<D> {
    pub cost: D,
    pub time: D,
}

impl<D> CostTime<D> {
    pub fn new(cost: D, time: D) -> Self {
        CostTime { cost, time }
    }
}

/// The cycle-ratio instantiation of [`ParametricAPI`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleRatioOmega;

impl<D> ParametricAPI<CostTime<D>, D> for CycleRatioOmega
where
    D: Copy + PartialOrd + Add<Output = D> + Sub<Output = D> + Mul<Output = D> + Div<Output = D> + Zero,
{
    fn distance(&self, ratio: &D, edge: &EdgeReference<CostTime<D>>) -> D {
        let ct = edge.weight();
        ct.cost - *ratio * ct.time
    }

    fn zero_cancel(&self, cycle: &[EdgeReference<CostTime<D>>]) -> D {
        let mut total_cost = D::zero();
        let mut total_time = D::zero();
        for edge in cycle {
            let ct = edge.weight();
            total_cost = total_cost + ct.cost;
            total_time = total_time + ct.time;
        }
        total_cost / total_time
    }
}

/// Minimum cycle-ratio solver: wraps `MaxParametric` with
/// `CycleRatioOmega` so callers only deal in `CostTime` edges and a
/// starting ratio.
#[derive(Debug)]
pub struct MinCycleRatio<'a, V, D>
where
    D: Copy + PartialOrd,
    V: Eq + Hash + Clone,
{
    solver: MaxParametric<'a, V, CostTime<D>, D, CycleRatioOmega>,
}

impl<'a, V, D> MinCycleRatio<'a, V, D>
where
    D: Copy + PartialOrd + Add<Output = D> + Sub<Output = D> + Mul<Output = D> + Div<Output = D> + Zero,
    V: Eq + Hash + Clone,
{
    pub fn new(digraph: &'a DiGraph<V, CostTime<D>>) -> Self {
        Self {
            solver: MaxParametric::new(digraph, CycleRatioOmega),
        }
    }

    /// Runs the solver starting from ratio `r0`, returning `(r*, critical_cycle)`.
    pub fn run<DM>(&mut self, dist: &mut DM, r0: D) -> (D, Vec<EdgeReference<'a, CostTime<D>>>)
    where
        DM: DistanceMap<D> + ?Sized,
    {
        let mut ratio = r0;
        let cycle = self.solver.run(dist, &mut ratio);
        (ratio, cycle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s5_min_cycle_ratio_triangle() {
        let digraph = DiGraph::<(), CostTime<f64>>::from_edges([
            (0, 1, CostTime::new(5.0, 1.0)),
            (0, 2, CostTime::new(1.0, 1.0)),
            (1, 0, CostTime::new(1.0, 1.0)),
            (1, 2, CostTime::new(1.0, 1.0)),
            (2, 1, CostTime::new(1.0, 1.0)),
            (2, 0, CostTime::new(1.0, 1.0)),
        ]);
        let mut solver = MinCycleRatio::new(&digraph);
        let mut dist = [0.0f64; 3];
        let (ratio, cycle) = solver.run(&mut dist, 100.0);
        assert_eq!(ratio, 1.0);
        assert!(!cycle.is_empty());
    }

    #[test]
    fn p8_ratio_equals_best_cycle_mean() {
        let digraph = DiGraph::<(), CostTime<f64>>::from_edges([
            (0, 1, CostTime::new(2.0, 1.0)),
            (1, 0, CostTime::new(2.0, 1.0)),
        ]);
        let mut solver = MinCycleRatio::new(&digraph);
        let mut dist = [0.0f64; 2];
        let (ratio, cycle) = solver.run(&mut dist, 100.0);
        assert_eq!(ratio, 2.0);
        assert_eq!(cycle.len(), 2);
    }
}
