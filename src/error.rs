//! Error types for the glue/adapter layer.
//!
//! The core algorithms (`neg_cycle`, `constrained`, `parametric`,
//! `min_cycle_ratio`, `min_parametric_q`) have no recoverable error
//! conditions of their own: a malformed graph view or a distance map
//! missing an entry are programmer errors, not `Result`s. The one
//! fallible operation in this crate is building a graph view from a
//! caller-supplied adjacency array, since that input can name an
//! out-of-range target node.

use thiserror::Error;

/// Errors raised while constructing a graph view from external data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphViewError {
    /// An edge in the input adjacency list targets a node index that
    /// does not exist in the graph being built.
    #[error("edge from node {from} targets out-of-range node {target} (graph has {node_count} nodes)")]
    TargetOutOfRange {
        from: usize,
        target: usize,
        node_count: usize,
    },
}
