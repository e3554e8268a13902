//! Negative cycle detection example
//!
//! `NegCycleFinder::howard` is a lazy iterator: each cycle is produced
//! on demand rather than collected up front.

use digraphx_rs::neg_cycle::NegCycleFinder;
use petgraph::prelude::*;

fn main() {
    println!("=== Example 1: Graph with a negative cycle ===");
    let g_with_cycle =
        DiGraph::<(), f64>::from_edges([(0, 1, 1.0), (1, 2, 1.0), (2, 0, -3.0)]);
    let mut ncf = NegCycleFinder::new(&g_with_cycle);
    let mut dist = vec![0.0; g_with_cycle.node_count()];
    match ncf.howard(&mut dist, |e| *e.weight()).next() {
        Some(cycle) => {
            let total: f64 = cycle.iter().map(|e| *e.weight()).sum();
            println!("Negative cycle found, {} edge(s), total weight {total}", cycle.len());
        }
        None => println!("No negative cycle found."),
    }

    println!("\n=== Example 2: Graph without a negative cycle ===");
    let g_no_cycle = DiGraph::<(), f64>::from_edges([(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]);
    let mut ncf = NegCycleFinder::new(&g_no_cycle);
    let mut dist = vec![0.0; g_no_cycle.node_count()];
    match ncf.howard(&mut dist, |e| *e.weight()).next() {
        Some(_) => println!("Negative cycle found."),
        None => println!("No negative cycle found. All edge weights sum to non-negative."),
    }

    println!("\n=== Example 3: Simple two-node negative cycle ===");
    let g_simple = DiGraph::<(), f64>::from_edges([(0, 1, 1.0), (1, 0, -2.0)]);
    let mut ncf = NegCycleFinder::new(&g_simple);
    let mut dist = vec![0.0; g_simple.node_count()];
    let cycles: Vec<_> = ncf.howard(&mut dist, |e| *e.weight()).collect();
    println!("Found {} negative cycle(s)", cycles.len());
}
