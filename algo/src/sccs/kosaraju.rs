/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use crate::top_sort;
use dsi_progress_logger::ProgressLog;
use followgraph::traits::RandomAccessGraph;
use followgraph::visits::{
    Sequential,
    depth_first::{EventNoPred, SeqNoPred},
};
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// Kosaraju's algorithm for strongly connected components.
///
/// The first pass computes the reverse finish order of a depth-first visit of
/// the forward graph ([`top_sort`]); the second pass visits the transpose in
/// that order, and each visit tree is exactly one component, collected in
/// discovery order.
///
/// The extraction order of the second pass is a topological order of the
/// condensation of the graph, so the component list is reversed before being
/// returned: the emission contract is then the same as [`tarjan`](super::tarjan)'s.
///
/// # Arguments
///
/// * `graph`: the graph.
///
/// * `transpose`: the transpose of `graph`.
///
/// * `pl`: a progress logger.
pub fn kosaraju(
    graph: impl RandomAccessGraph,
    transpose: impl RandomAccessGraph,
    pl: &mut impl ProgressLog,
) -> Sccs {
    let num_nodes = graph.num_nodes();
    debug_assert_eq!(num_nodes, transpose.num_nodes());
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing strongly connected components...");

    let top_sort = top_sort(&graph, pl);

    let mut visit = SeqNoPred::new(&transpose);
    let mut components: Vec<Vec<usize>> = Vec::new();
    let mut component = Vec::new();

    visit
        .visit(top_sort, |event| {
            match event {
                EventNoPred::Previsit { node, .. } => {
                    pl.light_update();
                    component.push(node);
                }
                EventNoPred::Done { .. } => {
                    components.push(std::mem::take(&mut component));
                }
                _ => (),
            }
            Continue(())
        })
        .continue_value_no_break();

    components.reverse();

    pl.done();
    Sccs::new(num_nodes, components)
}
