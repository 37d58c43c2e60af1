/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use dsi_progress_logger::ProgressLog;
use followgraph::traits::RandomAccessGraph;
use followgraph::visits::{
    Sequential,
    depth_first::{EventPred, SeqPred},
};
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// Returns the nodes of the graph in reverse finish order of a depth-first
/// visit, which is a topological order of the condensation of the graph.
///
/// If the graph is acyclic, the result is a topological sort of the graph
/// itself.
pub fn top_sort(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Box<[usize]> {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing topological sort");

    let mut visit = SeqPred::new(&graph);
    let mut finish_order = Vec::with_capacity(num_nodes);

    visit
        .visit(0..num_nodes, |event| {
            match event {
                EventPred::Previsit { .. } => {
                    pl.light_update();
                }
                EventPred::Postvisit { node, .. } => {
                    finish_order.push(node);
                }
                _ => (),
            }
            Continue(())
        })
        .continue_value_no_break();

    pl.done();
    finish_order.reverse();
    finish_order.into_boxed_slice()
}
