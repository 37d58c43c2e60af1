/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Algorithms used to compute and work with strongly connected components.
//!
//! There are two implementations: [Tarjan's algorithm](tarjan) and
//! [Kosaraju's algorithm](kosaraju). The former is to be preferred in almost
//! all cases: Kosaraju's algorithm performs two visits and requires the
//! transpose of the graph—it is mainly useful for testing and debugging.
//!
//! Both algorithms return the same node-to-component partition, and both list
//! components in reverse topological order of the condensation of the graph.
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use followgraph::prelude::*;
//! use followgraph_algo::sccs;
//!
//! # fn main() -> Result<(), NodeOutOfRange> {
//! let graph = VecGraph::from_arcs(4, [(0, 1), (1, 2), (2, 0), (1, 3)])?;
//!
//! let sccs = sccs::tarjan(&graph, no_logging![]);
//!
//! assert_eq!(sccs.num_components(), 2);
//! // The cycle is upstream of the singleton, so it is listed last.
//! assert_eq!(sccs.component(3), 0);
//! assert_eq!(sccs.component(0), 1);
//! assert_eq!(sccs.component(1), 1);
//! assert_eq!(sccs.component(2), 1);
//! # Ok(())
//! # }
//! ```

mod tarjan;
pub use tarjan::*;

mod kosaraju;
pub use kosaraju::*;

/// Strongly connected components.
///
/// An instance of this structure stores the components of a graph as an
/// ordered list in reverse topological order of the condensation (downstream
/// components first), each component being the list of its nodes in the order
/// in which the computing algorithm discovered them. It also stores, [for each
/// node, the index of the component](Sccs::node_components) it belongs to.
///
/// Instances are created by the decomposition algorithms; the constructor
/// checks that the components partition the node set exactly, and a failure
/// of that check is treated as fatal, as it can only be caused by a bug in
/// the algorithm that produced the components.
pub struct Sccs {
    components: Vec<Vec<usize>>,
    node_component: Box<[usize]>,
}

impl Sccs {
    /// Unassigned marker used while building the node-to-component map.
    const UNASSIGNED: usize = usize::MAX;

    /// Creates a new instance from the list of components of a graph with
    /// `num_nodes` nodes.
    ///
    /// # Panics
    ///
    /// Panics if the components do not cover every node in `[0, num_nodes)`
    /// exactly once.
    pub fn new(num_nodes: usize, components: Vec<Vec<usize>>) -> Self {
        let mut node_component = vec![Self::UNASSIGNED; num_nodes].into_boxed_slice();
        let mut assigned = 0;
        for (index, component) in components.iter().enumerate() {
            for &node in component {
                assert!(
                    node_component[node] == Self::UNASSIGNED,
                    "node {node} belongs to more than one component"
                );
                node_component[node] = index;
                assigned += 1;
            }
        }
        assert!(
            assigned == num_nodes,
            "the components cover {assigned} nodes out of {num_nodes}"
        );
        Sccs {
            components,
            node_component,
        }
    }

    /// Returns the number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    /// Returns the components, in reverse topological order of the
    /// condensation of the graph.
    #[inline(always)]
    pub fn components(&self) -> &[Vec<usize>] {
        &self.components
    }

    /// Returns the index of the component a node belongs to.
    #[inline(always)]
    pub fn component(&self, node: usize) -> usize {
        self.node_component[node]
    }

    /// Returns a slice containing, for each node, the index of the component
    /// it belongs to.
    #[inline(always)]
    pub fn node_components(&self) -> &[usize] {
        &self.node_component
    }

    /// Returns the sizes of all components.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        self.components
            .iter()
            .map(|component| component.len())
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_accessors() {
        let sccs = Sccs::new(5, vec![vec![4], vec![3], vec![1, 2, 0]]);
        assert_eq!(sccs.num_components(), 3);
        assert_eq!(sccs.component(4), 0);
        assert_eq!(sccs.component(1), 2);
        assert_eq!(sccs.node_components(), &[2, 2, 2, 1, 0]);
        assert_eq!(sccs.compute_sizes(), vec![1, 1, 3].into_boxed_slice());
    }

    #[test]
    #[should_panic(expected = "more than one component")]
    fn test_duplicated_node() {
        Sccs::new(2, vec![vec![0, 1], vec![1]]);
    }

    #[test]
    #[should_panic(expected = "cover 1 nodes out of 2")]
    fn test_missing_node() {
        Sccs::new(2, vec![vec![0]]);
    }
}
