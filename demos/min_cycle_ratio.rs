//! Minimum cycle-ratio example: cheapest cost/time loop in a small network.

use digraphx_rs::min_cycle_ratio::{CostTime, MinCycleRatio};
use petgraph::graph::DiGraph;

fn main() {
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

    println!("Minimum cost/time ratio: {ratio}");
    println!("Critical cycle has {} edge(s)", cycle.len());
}
