/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::vec_graph::VecGraph;
use crate::traits::RandomAccessGraph;

/// Returns a new graph with the same nodes and every arc of `graph` reversed.
///
/// This is a pure function: the original graph is not touched. The successors
/// of each node of the transpose are in order of source node, then of
/// position in the source's successor list, so the result is fully determined
/// by the input.
pub fn transpose(graph: &impl RandomAccessGraph) -> VecGraph {
    let num_nodes = graph.num_nodes();
    let mut succ = vec![Vec::new(); num_nodes];
    for node in 0..num_nodes {
        for s in graph.successors(node) {
            succ[s].push(node);
        }
    }
    VecGraph::from_successors(succ)
}
