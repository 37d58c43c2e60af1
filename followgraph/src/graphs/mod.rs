/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph implementations.

use thiserror::Error;

pub mod random;
pub mod vec_graph;

pub mod prelude {
    pub use super::NodeOutOfRange;
    pub use super::random::ErdosRenyi;
    pub use super::vec_graph::VecGraph;
}

/// A node identifier outside the range fixed at graph creation.
///
/// The node count of a graph is a construction parameter, so receiving a node
/// greater than or equal to it is a caller contract violation; it is reported
/// to the caller at the offending call, never clamped or ignored.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("node {node} out of range (the graph has {num_nodes} nodes)")]
pub struct NodeOutOfRange {
    /// The offending node.
    pub node: usize,
    /// The number of nodes of the graph.
    pub num_nodes: usize,
}
