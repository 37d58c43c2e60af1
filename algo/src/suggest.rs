/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Follow suggestions derived from strongly connected components.
//!
//! Two users belonging to the same component already follow each other
//! through some chain; any such pair without a direct arc is a suggestion
//! candidate. Suggestions are listed in the internal order of the component,
//! with the queried node skipped; there is no ranking and no randomization,
//! so the output is fully determined by the graph and its decomposition.
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use followgraph::prelude::*;
//! use followgraph_algo::{sccs, suggest};
//!
//! # fn main() -> Result<(), NodeOutOfRange> {
//! let graph = VecGraph::from_arcs(5, [(0, 2), (2, 1), (1, 0), (0, 3), (3, 4)])?;
//! let sccs = sccs::tarjan(&graph, no_logging![]);
//!
//! // 0, 1 and 2 follow each other in a cycle; 0 already follows 2 directly,
//! // so the only suggestion for 0 is 1.
//! assert_eq!(suggest::suggest(&graph, &sccs, 0)?, vec![1]);
//! // 3 is a singleton component.
//! assert!(suggest::suggest(&graph, &sccs, 3)?.is_empty());
//! # Ok(())
//! # }
//! ```

use crate::sccs::Sccs;
use dsi_progress_logger::ProgressLog;
use followgraph::graphs::NodeOutOfRange;
use followgraph::traits::RandomAccessGraph;
use sux::prelude::BitVec;

/// Returns the follow suggestions for a node: the nodes of its component,
/// other than the node itself, that it does not already follow directly, in
/// component order.
///
/// # Errors
///
/// Returns [`NodeOutOfRange`] if `node` is greater than or equal to the
/// number of nodes of the graph.
pub fn suggest(
    graph: impl RandomAccessGraph,
    sccs: &Sccs,
    node: usize,
) -> Result<Vec<usize>, NodeOutOfRange> {
    let num_nodes = graph.num_nodes();
    if node >= num_nodes {
        return Err(NodeOutOfRange { node, num_nodes });
    }

    let mut follows = BitVec::new(num_nodes);
    for succ in graph.successors(node) {
        follows.set(succ, true);
    }

    let component = &sccs.components()[sccs.component(node)];
    Ok(component
        .iter()
        .copied()
        .filter(|&candidate| candidate != node && !follows[candidate])
        .collect())
}

/// Returns the follow suggestions for every node; the entry for each node is
/// the same list [`suggest`] returns for it.
///
/// The suggestion map holds no state of its own: it is recomputed from the
/// graph and the decomposition on every call.
pub fn suggest_all(
    graph: impl RandomAccessGraph,
    sccs: &Sccs,
    pl: &mut impl ProgressLog,
) -> Vec<Vec<usize>> {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing follow suggestions...");

    let mut follows = BitVec::new(num_nodes);
    let mut suggestions = Vec::with_capacity(num_nodes);

    for node in 0..num_nodes {
        for succ in graph.successors(node) {
            follows.set(succ, true);
        }

        let component = &sccs.components()[sccs.component(node)];
        suggestions.push(
            component
                .iter()
                .copied()
                .filter(|&candidate| candidate != node && !follows[candidate])
                .collect(),
        );

        // Unset the bits one by one instead of reallocating the bit vector.
        for succ in graph.successors(node) {
            follows.set(succ, false);
        }
        pl.light_update();
    }

    pl.done();
    suggestions
}
