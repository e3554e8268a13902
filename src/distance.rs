//! The distance-map capability the finders are generic over.
//!
//! Per the data model: a distance map is a mutable mapping from every
//! node in the graph view to a numeric distance, owned by the caller.
//! The core does not distinguish between an array indexed by small
//! integer node ids and a hash mapping keyed by arbitrary node
//! identity -- both are supplied here, matching the two shapes named
//! in the external-interfaces glossary entry.

use petgraph::graph::NodeIndex;
use std::collections::HashMap;

/// Read/write access to per-node distances, addressed by node identity.
///
/// A node that was not written by the caller is a contract violation
/// (see the error-handling design notes); implementations are free to
/// panic in that case rather than return a `Result`, since the core
/// algorithms never call `get` for a node the graph view itself didn't
/// report.
pub trait DistanceMap<D> {
    fn get(&self, node: NodeIndex) -> D;
    fn set(&mut self, node: NodeIndex, value: D);
}

impl<D: Copy> DistanceMap<D> for [D] {
    fn get(&self, node: NodeIndex) -> D {
        self[node.index()]
    }

    fn set(&mut self, node: NodeIndex, value: D) {
        self[node.index()] = value;
    }
}

impl<D: Copy> DistanceMap<D> for Vec<D> {
    fn get(&self, node: NodeIndex) -> D {
        self.as_slice()[node.index()]
    }

    fn set(&mut self, node: NodeIndex, value: D) {
        self.as_mut_slice()[node.index()] = value;
    }
}

impl<D: Copy> DistanceMap<D> for HashMap<NodeIndex, D> {
    fn get(&self, node: NodeIndex) -> D {
        *self
            .get(&node)
            .expect("distance map has no entry for node; caller must initialize every node")
    }

    fn set(&mut self, node: NodeIndex, value: D) {
        self.insert(node, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_distance_map_roundtrip() {
        let mut dist = [0i32, 0, 0];
        DistanceMap::set(dist.as_mut_slice(), NodeIndex::new(1), 7);
        assert_eq!(DistanceMap::get(dist.as_slice(), NodeIndex::new(1)), 7);
    }

    #[test]
    fn hashmap_distance_map_roundtrip() {
        let mut dist: HashMap<NodeIndex, i32> = HashMap::new();
        dist.insert(NodeIndex::new(0), 0);
        DistanceMap::set(&mut dist, NodeIndex::new(0), 5);
        assert_eq!(DistanceMap::get(&dist, NodeIndex::new(0)), 5);
    }

    #[test]
    #[should_panic]
    fn hashmap_distance_map_missing_entry_panics() {
        let dist: HashMap<NodeIndex, i32> = HashMap::new();
        let _ = DistanceMap::get(&dist, NodeIndex::new(0));
    }
}
