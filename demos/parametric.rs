//! Parametric algorithm example: minimum mean cycle via `MaxParametric`.

use digraphx_rs::parametric::{MaxParametric, ParametricAPI};
use num::rational::Ratio;
use petgraph::graph::{DiGraph, EdgeReference};

#[derive(Debug)]
struct MeanRatio;

impl ParametricAPI<Ratio<i32>, Ratio<i32>> for MeanRatio {
    fn distance(&self, ratio: &Ratio<i32>, edge: &EdgeReference<Ratio<i32>>) -> Ratio<i32> {
        *edge.weight() - *ratio
    }

    fn zero_cancel(&self, cycle: &[EdgeReference<Ratio<i32>>]) -> Ratio<i32> {
        let mut total_weight = Ratio::new(0, 1);
        for edge in cycle {
            total_weight += *edge.weight();
        }
        total_weight / Ratio::from_integer(cycle.len() as i32)
    }
}

fn main() {
    let digraph = DiGraph::<(), Ratio<i32>>::from_edges([
        (0, 1, Ratio::new(1, 1)),
        (1, 2, Ratio::new(1, 1)),
        (2, 0, Ratio::new(1, 1)),
    ]);

    let mut solver = MaxParametric::new(&digraph, MeanRatio);
    let mut dist = [Ratio::new(0, 1), Ratio::new(0, 1), Ratio::new(0, 1)];
    let mut ratio = Ratio::new(1_000_000, 1);
    let cycle = solver.run(&mut dist, &mut ratio);

    println!("Minimum mean cycle ratio found: {ratio}");
    println!("Critical cycle has {} edge(s)", cycle.len());

    println!("\n=== Example with a more negative cycle ===");
    let digraph_neg = DiGraph::<(), Ratio<i32>>::from_edges([
        (0, 1, Ratio::new(1, 1)),
        (1, 2, Ratio::new(-5, 1)),
        (2, 0, Ratio::new(1, 1)),
    ]);

    let mut solver2 = MaxParametric::new(&digraph_neg, MeanRatio);
    let mut dist2 = [Ratio::new(0, 1), Ratio::new(0, 1), Ratio::new(0, 1)];
    let mut ratio2 = Ratio::new(1_000_000, 1);
    let cycle2 = solver2.run(&mut dist2, &mut ratio2);

    println!("Minimum mean cycle ratio found: {ratio2}");
    println!("Critical cycle has {} edge(s)", cycle2.len());
}
