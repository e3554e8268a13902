//! `NegCycleFinder` - Negative Cycle Finder by Howard's method.
//!
//! Howard's policy-iteration method alternates a relaxation pass (which
//! tightens a predecessor policy the way Bellman-Ford does) with a
//! cycle search over that policy. A cycle in the policy graph
//! witnesses a negative cycle in the original graph. `howard` exposes
//! this as a lazy iterator of cycles rather than collecting them all
//! up front: the search suspends after each cycle and resumes only
//! when the caller asks for the next one.

use std::collections::HashMap;
use std::ops::Add;

use log::trace;
use petgraph::graph::{DiGraph, EdgeReference, NodeIndex};
use petgraph::visit::{EdgeRef, IntoNodeIdentifiers};

use crate::distance::DistanceMap;

/// Negative-cycle finder by Howard's policy-iteration method.
///
/// `V` is the caller's node-weight type (opaque to the finder); `E` is
/// the edge payload type, interpreted only by the weight functor
/// passed to [`NegCycleFinder::howard`].
#[derive(Debug)]
pub struct NegCycleFinder<'a, V, E> {
    digraph: &'a DiGraph<V, E>,
    pred: HashMap<NodeIndex, (NodeIndex, EdgeReference<'a, E>)>,
}

impl<'a, V, E> NegCycleFinder<'a, V, E> {
    /// Creates a finder around a graph view. The finder borrows the
    /// graph for its own lifetime but owns no distances; those are
    /// supplied fresh to each `howard` call.
    pub fn new(digraph: &'a DiGraph<V, E>) -> Self {
        NegCycleFinder {
            digraph,
            pred: HashMap::new(),
        }
    }

    /// Every node that starts a cycle in the current predecessor
    /// policy, in graph node-iteration order.
    ///
    /// A node is visited at most once across all seeds: the predecessor
    /// graph has at most one outgoing edge per node, so everything
    /// reachable from a seed is either a simple path into an
    /// already-classified node or a single new cycle, and marking a
    /// node visited the moment it's reached (before following its
    /// predecessor) makes each node's classification final the first
    /// time it's reached from any seed.
    fn find_cycle(&self) -> Vec<NodeIndex> {
        let mut visited: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut entries = Vec::new();

        for vtx in self.digraph.node_identifiers() {
            if visited.contains_key(&vtx) {
                continue;
            }
            let mut utx = vtx;
            visited.insert(utx, vtx);
            while let Some(&(ptx, _)) = self.pred.get(&utx) {
                utx = ptx;
                if let Some(&root) = visited.get(&utx) {
                    if root == vtx {
                        entries.push(utx);
                    }
                    break;
                }
                visited.insert(utx, vtx);
            }
        }
        entries
    }

    /// One relaxation pass: for every edge `(u -> v, e)`, tighten
    /// `dist[v]` if `dist[u] + weight(e)` improves it. Returns whether
    /// any distance changed.
    fn relax<D, DM, F>(&mut self, dist: &mut DM, get_weight: &F) -> bool
    where
        D: Copy + PartialOrd + Add<Output = D>,
        DM: DistanceMap<D> + ?Sized,
        F: Fn(EdgeReference<'a, E>) -> D,
    {
        let mut changed = false;
        for utx in self.digraph.node_identifiers() {
            for edge in self.digraph.edges(utx) {
                let vtx = edge.target();
                let distance = dist.get(utx) + get_weight(edge);
                if dist.get(vtx) > distance {
                    dist.set(vtx, distance);
                    self.pred.insert(vtx, (utx, edge));
                    changed = true;
                }
            }
        }
        changed
    }

    /// Reconstructs the cycle reachable from `handle` by walking the
    /// predecessor policy back to `handle`.
    fn cycle_list(&self, handle: NodeIndex) -> Vec<EdgeReference<'a, E>> {
        let mut vtx = handle;
        let mut cycle = Vec::new();
        loop {
            let (utx, edge) = self.pred[&vtx];
            cycle.push(edge);
            vtx = utx;
            if vtx == handle {
                break;
            }
        }
        cycle
    }

    /// Whether the cycle reachable from `handle` has negative total
    /// weight, i.e. whether the triangle inequality is violated
    /// somewhere along it. Asserted as a precondition before a cycle
    /// is yielded to the caller.
    fn is_negative<D, DM, F>(&self, handle: NodeIndex, dist: &DM, get_weight: &F) -> bool
    where
        D: Copy + PartialOrd + Add<Output = D>,
        DM: DistanceMap<D> + ?Sized,
        F: Fn(EdgeReference<'a, E>) -> D,
    {
        let mut vtx = handle;
        loop {
            let (utx, edge) = self.pred[&vtx];
            if dist.get(vtx) > dist.get(utx) + get_weight(edge) {
                return true;
            }
            vtx = utx;
            if vtx == handle {
                return false;
            }
        }
    }

    /// Howard's method: a lazy, possibly empty sequence of negative
    /// cycles under `get_weight`. Clears the predecessor policy, then
    /// relaxes and searches for cycles; a relaxation pass that finds
    /// one or more cycles ends the call once those cycles have all
    /// been yielded.
    ///
    /// # Examples
    /// ```
    /// use petgraph::prelude::*;
    /// use digraphx_rs::neg_cycle::NegCycleFinder;
    ///
    /// let digraph = DiGraph::<(), i32>::from_edges([
    ///     (0, 1, 1),
    ///     (0, 2, 1),
    ///     (0, 3, 1),
    ///     (1, 3, 1),
    ///     (2, 1, 1),
    ///     (3, 2, -3),
    /// ]);
    /// let mut ncf = NegCycleFinder::new(&digraph);
    /// let mut dist = [0, 0, 0, 0];
    /// let cycles: Vec<_> = ncf.howard(&mut dist, |e| *e.weight()).collect();
    /// assert_eq!(cycles.len(), 1);
    /// ```
    pub fn howard<'b, D, DM, F>(
        &'b mut self,
        dist: &'b mut DM,
        get_weight: F,
    ) -> HowardCycles<'a, 'b, V, E, D, DM, F>
    where
        D: Copy + PartialOrd + Add<Output = D>,
        DM: DistanceMap<D> + ?Sized,
        F: Fn(EdgeReference<'a, E>) -> D,
    {
        self.pred.clear();
        HowardCycles {
            finder: self,
            dist,
            get_weight,
            pending: Vec::new().into_iter(),
            done: false,
            _marker: std::marker::PhantomData,
        }
    }
}

/// Lazy iterator of negative cycles produced by [`NegCycleFinder::howard`].
///
/// Suspends between cycles: only `next()` advances the relaxation /
/// cycle-search state machine, and it does only as much work as needed
/// to produce (or rule out) the next cycle.
pub struct HowardCycles<'a, 'b, V, E, D, DM: ?Sized, F> {
    finder: &'b mut NegCycleFinder<'a, V, E>,
    dist: &'b mut DM,
    get_weight: F,
    pending: std::vec::IntoIter<NodeIndex>,
    done: bool,
    _marker: std::marker::PhantomData<fn() -> D>,
}

impl<'a, 'b, V, E, D, DM, F> Iterator for HowardCycles<'a, 'b, V, E, D, DM, F>
where
    D: Copy + PartialOrd + Add<Output = D>,
    DM: DistanceMap<D> + ?Sized,
    F: Fn(EdgeReference<'a, E>) -> D,
{
    type Item = Vec<EdgeReference<'a, E>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(vtx) = self.pending.next() {
                assert!(
                    self.finder.is_negative(vtx, self.dist, &self.get_weight),
                    "cycle-search handle did not witness a negative cycle"
                );
                return Some(self.finder.cycle_list(vtx));
            }
            if self.done {
                return None;
            }
            if !self.finder.relax(self.dist, &self.get_weight) {
                trace!("relaxation converged with no negative cycle");
                self.done = true;
                return None;
            }
            let entries = self.finder.find_cycle();
            if entries.is_empty() {
                continue;
            }
            trace!("relaxation pass found {} cycle entry node(s)", entries.len());
            self.done = true;
            self.pending = entries.into_iter();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::rational::Ratio;
    use petgraph::graph::DiGraph;
    use std::collections::HashMap;

    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }

    #[test]
    fn test_neg_cycle1() {
        let digraph = DiGraph::<(), Ratio<i32>>::from_edges([
            (0, 1, Ratio::new(1, 1)),
            (0, 2, Ratio::new(1, 1)),
            (0, 3, Ratio::new(1, 1)),
            (1, 3, Ratio::new(1, 1)),
            (2, 1, Ratio::new(1, 1)),
            (3, 2, Ratio::new(-3, 1)),
        ]);

        let mut ncf = NegCycleFinder::new(&digraph);
        let mut dist = [
            Ratio::new(0, 1),
            Ratio::new(0, 1),
            Ratio::new(0, 1),
            Ratio::new(0, 1),
        ];
        let cycles: Vec<_> = ncf.howard(&mut dist, |e| *e.weight()).collect();
        assert_eq!(cycles.len(), 1);
    }

    #[test]
    fn test_neg_cycle2_no_cycle() {
        let mut graph = DiGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let c = graph.add_node("c");
        let d = graph.add_node("d");
        let e = graph.add_node("e");
        let f = graph.add_node("f");
        let g = graph.add_node("g");
        let h = graph.add_node("h");
        let i = graph.add_node("i");
        graph.add_edge(a, b, Ratio::new(1, 1));
        graph.add_edge(a, c, Ratio::new(1, 1));
        graph.add_edge(b, d, Ratio::new(1, 1));
        graph.add_edge(c, d, Ratio::new(1, 1));
        graph.add_edge(d, e, Ratio::new(-3, 1));
        graph.add_edge(d, f, Ratio::new(1, 1));
        graph.add_edge(e, g, Ratio::new(1, 1));
        graph.add_edge(f, g, Ratio::new(1, 1));
        graph.add_edge(g, h, Ratio::new(1, 1));
        graph.add_edge(h, i, Ratio::new(1, 1));
        graph.add_edge(i, f, Ratio::new(1, 1));

        let mut ncf = NegCycleFinder::new(&graph);
        let mut dist = vec![Ratio::new(0, 1); 9];
        let cycles: Vec<_> = ncf.howard(&mut dist, |e| *e.weight()).collect();
        assert!(cycles.is_empty());
    }

    // S1 - positive-weight triangle with parallel edges: howard yields none.
    #[test]
    fn s1_positive_triangle_with_parallel_edges_yields_none() {
        let digraph = DiGraph::<(), i32>::from_edges([
            (0, 1, 7),
            (0, 2, 5),
            (1, 0, 0),
            (1, 2, 3),
            (2, 1, 1),
            (2, 0, 2),
            (2, 0, 1),
        ]);
        let mut ncf = NegCycleFinder::new(&digraph);
        let mut dist = [0, 0, 0];
        assert!(ncf.howard(&mut dist, |e| *e.weight()).next().is_none());
    }

    // S2 - plain negative cycle: one cycle, sum of weights -1.
    #[test]
    fn s2_plain_negative_cycle() {
        let digraph = DiGraph::<(), i32>::from_edges([(0, 1, 1), (1, 2, -3), (2, 0, 1)]);
        let mut ncf = NegCycleFinder::new(&digraph);
        let mut dist = [0, 0, 0];
        let cycles: Vec<_> = ncf.howard(&mut dist, |e| *e.weight()).collect();
        assert_eq!(cycles.len(), 1);
        let total: i32 = cycles[0].iter().map(|e| *e.weight()).sum();
        assert_eq!(total, -1);
    }

    // S3 - negative self-loop: one cycle of one edge (P4).
    #[test]
    fn s3_negative_self_loop() {
        let digraph = DiGraph::<(), i32>::from_edges([(0, 0, -1)]);
        let mut ncf = NegCycleFinder::new(&digraph);
        let mut dist = [0];
        let cycles: Vec<_> = ncf.howard(&mut dist, |e| *e.weight()).collect();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), 1);
    }

    // P4 - positive self-loop yields nothing.
    #[test]
    fn p4_positive_self_loop_yields_nothing() {
        let digraph = DiGraph::<(), i32>::from_edges([(0, 0, 1)]);
        let mut ncf = NegCycleFinder::new(&digraph);
        let mut dist = [0];
        assert!(ncf.howard(&mut dist, |e| *e.weight()).next().is_none());
    }

    // S4 - DAG with negative edges but no cycle.
    #[test]
    fn s4_dag_with_negative_edges_yields_none() {
        let digraph =
            DiGraph::<(), i32>::from_edges([(0, 1, -5), (1, 2, -3), (2, 3, -1), (3, 4, -10)]);
        let mut ncf = NegCycleFinder::new(&digraph);
        let mut dist = [0, 0, 0, 0, 0];
        assert!(ncf.howard(&mut dist, |e| *e.weight()).next().is_none());
    }

    // P3 - no false positive on a nonnegative graph.
    #[test]
    fn p3_nonnegative_graph_yields_nothing() {
        let digraph = DiGraph::<(), u32>::from_edges([(0, 1, 3), (1, 2, 0), (2, 0, 5)]);
        let mut ncf = NegCycleFinder::new(&digraph);
        let mut dist = [0u32, 0, 0];
        assert!(ncf.howard(&mut dist, |e| *e.weight()).next().is_none());
    }

    // P5 - the yes/no result does not depend on dist's initial contents.
    #[test]
    fn p5_distance_init_irrelevant_to_yes_no_result() {
        let digraph = DiGraph::<(), i32>::from_edges([(0, 1, 1), (1, 2, -3), (2, 0, 1)]);

        let mut ncf_a = NegCycleFinder::new(&digraph);
        let mut dist_a = [0, 0, 0];
        let found_a = ncf_a.howard(&mut dist_a, |e| *e.weight()).next().is_some();

        let mut ncf_b = NegCycleFinder::new(&digraph);
        let mut dist_b = [1000, -500, 42];
        let found_b = ncf_b.howard(&mut dist_b, |e| *e.weight()).next().is_some();

        assert_eq!(found_a, found_b);
        assert!(found_a);
    }

    // P6 - idempotence: two fresh invocations agree on cycle count.
    #[test]
    fn p6_repeated_invocation_same_cycle_count() {
        let digraph = DiGraph::<(), i32>::from_edges([(0, 1, 1), (1, 2, -3), (2, 0, 1)]);

        let mut ncf = NegCycleFinder::new(&digraph);
        let mut dist1 = [0, 0, 0];
        let n1 = ncf.howard(&mut dist1, |e| *e.weight()).count();

        let mut dist2 = [0, 0, 0];
        let n2 = ncf.howard(&mut dist2, |e| *e.weight()).count();

        assert_eq!(n1, n2);
    }

    #[test]
    fn howard_works_with_hashmap_distance_map() {
        let digraph = DiGraph::<(), i32>::from_edges([(0, 1, 1), (1, 2, -3), (2, 0, 1)]);
        let mut ncf = NegCycleFinder::new(&digraph);
        let mut dist: HashMap<NodeIndex, i32> = digraph.node_indices().map(|n| (n, 0)).collect();
        let cycles: Vec<_> = ncf.howard(&mut dist, |e| *e.weight()).collect();
        assert_eq!(cycles.len(), 1);
    }
}
