//! Convenient glob import of the crate's public surface.
//!
//! ```rust
//! use digraphx_rs::prelude::*;
//! use petgraph::graph::DiGraph;
//!
//! let digraph: DiGraph<(), i32> = DiGraph::new();
//! let mut ncf = NegCycleFinder::new(&digraph);
//! let mut dist: Vec<i32> = Vec::new();
//! assert!(ncf.howard(&mut dist, |e| *e.weight()).next().is_none());
//! ```

pub use crate::array_adapter::array_digraph;
pub use crate::constrained::ConstrainedNegCycleFinder;
pub use crate::distance::DistanceMap;
pub use crate::error::GraphViewError;
pub use crate::min_cycle_ratio::{CostTime, MinCycleRatio};
pub use crate::min_parametric_q::{MinParametricAPI, MinParametricQ};
pub use crate::neg_cycle::NegCycleFinder;
pub use crate::parametric::{MaxParametric, ParametricAPI};

pub use petgraph::visit::EdgeRef;
