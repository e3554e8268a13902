//! # digraphx-rs
//!
//! Graph-algorithmic primitives for weighted directed graphs, built on
//! [`petgraph`]: Howard's policy-iteration method for negative-cycle
//! detection, a constrained variant with pluggable relaxation filters and
//! both predecessor/successor traversal, a maximum-parametric network
//! solver, and a minimum cycle-ratio solver built on top of it.
//!
//! ## Modules
//!
//! - [`neg_cycle`] — `NegCycleFinder`, Howard's policy-iteration method.
//! - [`constrained`] — `ConstrainedNegCycleFinder`, with an `update_ok` filter
//!   and both predecessor and successor relaxation.
//! - [`parametric`] — `MaxParametric`, the parameter-driving solver.
//! - [`min_cycle_ratio`] — `MinCycleRatio`, the cost/time ratio specialization.
//! - [`min_parametric_q`] — `MinParametricQ`, the constrained parametric driver.
//! - [`distance`] — the `DistanceMap` capability every finder is generic over.
//! - [`array_adapter`] — builds a graph view from a plain adjacency array.
//! - [`error`] — errors raised by the glue/adapter layer.
//!
//! ## Quick start
//!
//! ```rust
//! use digraphx_rs::neg_cycle::NegCycleFinder;
//! use petgraph::prelude::*;
//!
//! let digraph = DiGraph::<(), i32>::from_edges([(0, 1, 1), (1, 2, -3), (2, 0, 1)]);
//! let mut ncf = NegCycleFinder::new(&digraph);
//! let mut dist = [0, 0, 0];
//! let cycles: Vec<_> = ncf.howard(&mut dist, |e| *e.weight()).collect();
//! assert_eq!(cycles.len(), 1);
//! ```

pub mod array_adapter;
pub mod constrained;
pub mod distance;
pub mod error;
pub mod min_cycle_ratio;
pub mod min_parametric_q;
pub mod neg_cycle;
pub mod parametric;

pub mod prelude;
