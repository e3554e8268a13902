//! Integer-indexed-sequence adapter.
//!
//! Presents a contiguous sequence `0..n-1` of outgoing-edge lists as a
//! [`petgraph::graph::DiGraph`] graph view, so callers who already have
//! their graph as `Vec<Vec<(usize, E)>>` (outgoing edges per index) do
//! not need to build node handles themselves. Node identifiers are the
//! integer indices and iteration visits indices in ascending order,
//! matching `petgraph::graph::NodeIndex::new(i)`.

use petgraph::graph::DiGraph;

use crate::error::GraphViewError;

/// Builds a [`DiGraph`] from an adjacency array where `edges[u]` lists
/// the `(target_index, payload)` pairs for node `u`'s outgoing edges.
///
/// Node `u` becomes `NodeIndex::new(u)`. Returns
/// [`GraphViewError::TargetOutOfRange`] if any edge names a target
/// index `>= edges.len()`.
///
/// # Examples
/// ```
/// use digraphx_rs::array_adapter::array_digraph;
///
/// let digraph = array_digraph(vec![
///     vec![(1, 1.0)],
///     vec![(2, 1.0)],
///     vec![(0, -3.0)],
/// ]).unwrap();
/// assert_eq!(digraph.node_count(), 3);
/// assert_eq!(digraph.edge_count(), 3);
/// ```
pub fn array_digraph<E>(edges: Vec<Vec<(usize, E)>>) -> Result<DiGraph<(), E>, GraphViewError> {
    let node_count = edges.len();
    for (from, outgoing) in edges.iter().enumerate() {
        for &(target, _) in outgoing {
            if target >= node_count {
                return Err(GraphViewError::TargetOutOfRange {
                    from,
                    target,
                    node_count,
                });
            }
        }
    }

    let mut digraph = DiGraph::with_capacity(node_count, 0);
    let nodes: Vec<_> = (0..node_count).map(|_| digraph.add_node(())).collect();
    for (from, outgoing) in edges.into_iter().enumerate() {
        for (target, payload) in outgoing {
            digraph.add_edge(nodes[from], nodes[target], payload);
        }
    }
    Ok(digraph)
}
