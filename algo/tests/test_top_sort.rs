/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::prelude::*;
use followgraph::prelude::*;
use followgraph_algo::top_sort;

/// Checks that `order` is a permutation of the nodes in which every arc goes
/// from an earlier node to a later one.
fn assert_topological(graph: &VecGraph, order: &[usize]) {
    let mut position = vec![usize::MAX; graph.num_nodes()];
    for (pos, &node) in order.iter().enumerate() {
        assert_eq!(position[node], usize::MAX, "node {node} appears twice");
        position[node] = pos;
    }
    for node in 0..graph.num_nodes() {
        for succ in graph.successors(node) {
            assert!(
                position[node] < position[succ],
                "arc {node} -> {succ} violates the order"
            );
        }
    }
}

#[test]
fn test_chain() -> Result<()> {
    let graph = VecGraph::from_arcs(4, [(1, 2), (2, 3), (0, 1)])?;

    let order = top_sort(&graph, no_logging![]);

    assert_eq!(order, vec![0, 1, 2, 3].into_boxed_slice());

    Ok(())
}

#[test]
fn test_dag() -> Result<()> {
    let graph = VecGraph::from_arcs(
        6,
        [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (5, 2), (5, 4)],
    )?;

    let order = top_sort(&graph, no_logging![]);

    assert_eq!(order.len(), graph.num_nodes());
    assert_topological(&graph, &order);

    Ok(())
}

#[test]
fn test_no_arcs() -> Result<()> {
    let graph = VecGraph::empty(3);

    let order = top_sort(&graph, no_logging![]);

    assert_eq!(order.len(), 3);
    assert_topological(&graph, &order);

    Ok(())
}

#[test]
fn test_cyclic_graph_is_total() -> Result<()> {
    // On a cyclic graph the result is no longer a topological sort, but it is
    // still a permutation of the nodes.
    let graph = VecGraph::from_arcs(4, [(0, 1), (1, 2), (2, 0), (2, 3)])?;

    let order = top_sort(&graph, no_logging![]);

    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1, 2, 3]);

    Ok(())
}
