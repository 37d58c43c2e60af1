/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// A directed graph over nodes `0..num_nodes` providing random access to the
/// successors of each node.
///
/// Successors are returned in a graph-defined order; for mutable
/// implementations such as [`VecGraph`](crate::graphs::vec_graph::VecGraph)
/// the order is the arc-insertion order. Duplicate successors and self-loops
/// are permitted.
///
/// Implementations are expected to be immutable while shared, so a graph can
/// be read concurrently by several visits.
pub trait RandomAccessGraph {
    /// The type of the iterator over the successors of a node.
    type Successors<'succ>: IntoIterator<Item = usize>
    where
        Self: 'succ;

    /// Returns the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs in the graph.
    fn num_arcs(&self) -> u64;

    /// Returns the number of successors of a node.
    fn outdegree(&self, node: usize) -> usize;

    /// Returns the successors of a node.
    fn successors(&self, node: usize) -> Self::Successors<'_>;

    /// Returns whether there is an arc from `src` to `dst`.
    ///
    /// The default implementation scans the successors of `src`.
    fn has_arc(&self, src: usize, dst: usize) -> bool {
        self.successors(src).into_iter().any(|succ| succ == dst)
    }
}

impl<G: RandomAccessGraph + ?Sized> RandomAccessGraph for &G {
    type Successors<'succ>
        = G::Successors<'succ>
    where
        Self: 'succ;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        (**self).num_arcs()
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        (**self).outdegree(node)
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        (**self).successors(node)
    }

    #[inline(always)]
    fn has_arc(&self, src: usize, dst: usize) -> bool {
        (**self).has_arc(src, dst)
    }
}
