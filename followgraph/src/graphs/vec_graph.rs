/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::NodeOutOfRange;
use crate::traits::RandomAccessGraph;

/// A [`RandomAccessGraph`] implementation based on a vector of vectors.
///
/// The number of nodes is fixed at creation. Arcs are appended with
/// [`add_arc`](VecGraph::add_arc) and successors are returned in insertion
/// order; duplicate arcs and self-loops are permitted. Endpoints outside
/// `[0, num_nodes)` are rejected with [`NodeOutOfRange`].
///
/// Once built, the graph is meant to be read only: all accessors take `&self`,
/// so a graph can be shared freely between visits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VecGraph {
    /// The number of arcs in the graph.
    num_arcs: u64,
    /// For each node, its list of successors, in insertion order.
    succ: Vec<Vec<usize>>,
}

impl VecGraph {
    /// Creates a new empty graph with `n` nodes.
    pub fn empty(n: usize) -> Self {
        Self {
            num_arcs: 0,
            succ: Vec::from_iter((0..n).map(|_| Vec::new())),
        }
    }

    /// Adds an arc to the graph, appending `v` to the successors of `u`.
    ///
    /// # Errors
    ///
    /// Returns [`NodeOutOfRange`] if one of the endpoints is greater than or
    /// equal to the number of nodes in the graph.
    pub fn add_arc(&mut self, u: usize, v: usize) -> Result<(), NodeOutOfRange> {
        let num_nodes = self.succ.len();
        let max = u.max(v);
        if max >= num_nodes {
            return Err(NodeOutOfRange {
                node: max,
                num_nodes,
            });
        }
        self.succ[u].push(v);
        self.num_arcs += 1;
        Ok(())
    }

    /// Creates a new graph with `n` nodes from an [`IntoIterator`] of arcs.
    ///
    /// The items must be pairs of the form `(usize, usize)` specifying an arc.
    ///
    /// # Errors
    ///
    /// Returns [`NodeOutOfRange`] on the first arc with an endpoint greater
    /// than or equal to `n`.
    pub fn from_arcs(
        n: usize,
        arcs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, NodeOutOfRange> {
        let mut graph = Self::empty(n);
        for (u, v) in arcs {
            graph.add_arc(u, v)?;
        }
        Ok(graph)
    }

    /// Builds a graph directly from successor lists.
    ///
    /// Callers must guarantee that every entry is smaller than `succ.len()`.
    pub(crate) fn from_successors(succ: Vec<Vec<usize>>) -> Self {
        let num_arcs = succ.iter().map(|s| s.len() as u64).sum();
        Self { num_arcs, succ }
    }

    /// Shrinks the capacity of the graph to fit its current size.
    pub fn shrink_to_fit(&mut self) {
        self.succ.shrink_to_fit();
        for s in self.succ.iter_mut() {
            s.shrink_to_fit();
        }
    }
}

impl RandomAccessGraph for VecGraph {
    type Successors<'succ> = core::iter::Copied<core::slice::Iter<'succ, usize>>;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        self.num_arcs
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.succ[node].iter().copied()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_insertion_order() -> Result<(), NodeOutOfRange> {
        let mut g = VecGraph::empty(3);
        g.add_arc(0, 2)?;
        g.add_arc(0, 1)?;
        g.add_arc(0, 2)?;
        g.add_arc(1, 1)?;

        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.num_arcs(), 4);
        assert_eq!(g.outdegree(0), 3);
        // Duplicates and self-loops are kept, in insertion order.
        assert_eq!(g.successors(0).collect::<Vec<_>>(), vec![2, 1, 2]);
        assert_eq!(g.successors(1).collect::<Vec<_>>(), vec![1]);
        assert!(g.successors(2).next().is_none());
        Ok(())
    }

    #[test]
    fn test_out_of_range() {
        let mut g = VecGraph::empty(2);
        assert_eq!(
            g.add_arc(0, 2),
            Err(NodeOutOfRange {
                node: 2,
                num_nodes: 2
            })
        );
        assert_eq!(
            g.add_arc(5, 0),
            Err(NodeOutOfRange {
                node: 5,
                num_nodes: 2
            })
        );
        // The graph is left untouched by rejected arcs.
        assert_eq!(g.num_arcs(), 0);

        assert!(VecGraph::from_arcs(2, [(0, 1), (1, 2)]).is_err());
    }

    #[test]
    fn test_has_arc() -> Result<(), NodeOutOfRange> {
        let g = VecGraph::from_arcs(3, [(0, 1), (1, 2)])?;
        assert!(g.has_arc(0, 1));
        assert!(!g.has_arc(1, 0));
        assert!(!g.has_arc(2, 2));
        Ok(())
    }

    #[test]
    fn test_empty() {
        let g = VecGraph::empty(0);
        assert_eq!(g.num_nodes(), 0);
        assert_eq!(g.num_arcs(), 0);
    }
}
