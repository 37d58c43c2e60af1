/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use dsi_progress_logger::ProgressLog;
use followgraph::traits::RandomAccessGraph;
use followgraph::visits::{
    Sequential,
    depth_first::{EventPred, SeqPred},
};
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;
use sux::prelude::BitVec;

/// Unassigned discovery index.
const UNASSIGNED: usize = usize::MAX;

/// Tarjan's algorithm for strongly connected components.
///
/// A single depth-first visit of the graph computes, for every node, a
/// discovery index and a low link, the smallest discovery index reachable
/// from the node through tree arcs plus at most one arc towards a node still
/// on the component stack. A node whose low link equals its own index is the
/// root of a component, which is then popped off the component stack, root
/// last.
///
/// Components are emitted in reverse topological order of the condensation of
/// the graph.
pub fn tarjan(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Sccs {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing strongly connected components...");

    let mut visit = SeqPred::new(&graph);
    let mut index_of = vec![UNASSIGNED; num_nodes].into_boxed_slice();
    let mut low_link = vec![0; num_nodes].into_boxed_slice();
    // Nodes whose component has not been emitted yet, in discovery order. The
    // bit vector provides the membership test: an arc towards a node that has
    // already been popped must not tighten the low link.
    let mut component_stack = Vec::with_capacity(16);
    let mut on_stack = BitVec::new(num_nodes);
    let mut components = Vec::new();
    let mut next_index = 0;

    visit
        .visit(0..num_nodes, |event| {
            match event {
                EventPred::Previsit { node, .. } => {
                    pl.light_update();
                    index_of[node] = next_index;
                    low_link[node] = next_index;
                    next_index += 1;
                    component_stack.push(node);
                    on_stack.set(node, true);
                }
                EventPred::Revisit { node, pred, .. } => {
                    if on_stack[node] {
                        low_link[pred] = low_link[pred].min(index_of[node]);
                    }
                }
                EventPred::Postvisit { node, pred, .. } => {
                    if low_link[node] == index_of[node] {
                        // node is the root of a component: pop the stack down
                        // to and including it.
                        let mut component = Vec::new();
                        loop {
                            // Safe: node itself is still on the stack
                            let popped = component_stack.pop().unwrap();
                            on_stack.set(popped, false);
                            component.push(popped);
                            if popped == node {
                                break;
                            }
                        }
                        components.push(component);
                    } else if node != pred {
                        // Retreating from a tree arc: propagate the low link
                        // to the parent.
                        low_link[pred] = low_link[pred].min(low_link[node]);
                    }
                }
                _ => {}
            }
            Continue(())
        })
        .continue_value_no_break();

    pl.done();
    Sccs::new(num_nodes, components)
}
