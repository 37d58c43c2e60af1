/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use followgraph::prelude::*;
use followgraph::visits::{Sequential, StoppedWhenDone, depth_first};
use no_break::NoBreak;
use std::ops::ControlFlow::{Break, Continue};

#[test]
fn test_previsit_order_on_chain() -> Result<()> {
    let graph = VecGraph::from_arcs(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)])?;
    let mut order = Vec::new();
    depth_first::SeqNoPred::new(&graph)
        .visit([0], |event| {
            if let depth_first::EventNoPred::Previsit { node, .. } = event {
                order.push(node);
            }
            Continue(())
        })
        .continue_value_no_break();

    assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    Ok(())
}

#[test]
fn test_postvisit_is_stack_like() -> Result<()> {
    let graph = VecGraph::from_arcs(7, [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)])?;
    let mut pre = Vec::new();
    let mut post = Vec::new();
    depth_first::SeqPred::new(&graph)
        .visit(0..graph.num_nodes(), |event| {
            match event {
                depth_first::EventPred::Previsit { node, .. } => pre.push(node),
                depth_first::EventPred::Postvisit { node, .. } => post.push(node),
                _ => (),
            }
            Continue(())
        })
        .continue_value_no_break();

    assert_eq!(pre, vec![0, 1, 3, 4, 2, 5, 6]);
    assert_eq!(post, vec![3, 4, 1, 5, 6, 2, 0]);
    Ok(())
}

#[test]
fn test_predecessors() -> Result<()> {
    let graph = VecGraph::from_arcs(4, [(0, 1), (1, 2), (0, 3)])?;
    depth_first::SeqPred::new(&graph)
        .visit([0], |event| {
            if let depth_first::EventPred::Previsit { node, pred, root } = event {
                assert_eq!(root, 0);
                match node {
                    0 => assert_eq!(pred, 0),
                    1 => assert_eq!(pred, 0),
                    2 => assert_eq!(pred, 1),
                    3 => assert_eq!(pred, 0),
                    _ => unreachable!(),
                }
            }
            Continue(())
        })
        .continue_value_no_break();
    Ok(())
}

#[test]
fn test_revisit_on_back_arc() -> Result<()> {
    let graph = VecGraph::from_arcs(3, [(0, 1), (1, 2), (2, 0)])?;
    let mut visit = depth_first::SeqPred::new(&graph);

    // The only non-tree arc is the back arc closing the cycle.
    let interrupted = visit.visit(0..graph.num_nodes(), |event| {
        if let depth_first::EventPred::Revisit { node, pred, .. } = event {
            assert_eq!((node, pred), (0, 2));
            return Break(StoppedWhenDone);
        }
        Continue(())
    });
    assert!(interrupted.is_break());
    Ok(())
}

#[test]
fn test_done_per_visit_tree() -> Result<()> {
    let graph = VecGraph::from_arcs(5, [(0, 1), (2, 3)])?;
    let mut roots = Vec::new();
    depth_first::SeqNoPred::new(&graph)
        .visit(0..graph.num_nodes(), |event| {
            if let depth_first::EventNoPred::Done { root } = event {
                roots.push(root);
            }
            Continue(())
        })
        .continue_value_no_break();

    // 1 and 3 are reached from earlier roots and start no tree of their own.
    assert_eq!(roots, vec![0, 2, 4]);
    Ok(())
}

#[test]
fn test_reset() -> Result<()> {
    let graph = VecGraph::from_arcs(2, [(0, 1)])?;
    let mut visit = depth_first::SeqNoPred::new(&graph);
    let mut count = |visit: &mut depth_first::SeqNoPred<'_, VecGraph>| {
        let mut previsits = 0;
        visit
            .visit(0..graph.num_nodes(), |event| {
                if matches!(event, depth_first::EventNoPred::Previsit { .. }) {
                    previsits += 1;
                }
                Continue(())
            })
            .continue_value_no_break();
        previsits
    };

    assert_eq!(count(&mut visit), 2);
    // Without a reset every node is already known.
    assert_eq!(count(&mut visit), 0);
    visit.reset();
    assert_eq!(count(&mut visit), 2);
    Ok(())
}

#[test]
fn test_self_loops_and_duplicates() -> Result<()> {
    let graph = VecGraph::from_arcs(2, [(0, 0), (0, 1), (0, 1)])?;
    let mut previsits = 0;
    let mut revisits = 0;
    depth_first::SeqNoPred::new(&graph)
        .visit([0], |event| {
            match event {
                depth_first::EventNoPred::Previsit { .. } => previsits += 1,
                depth_first::EventNoPred::Revisit { .. } => revisits += 1,
                _ => (),
            }
            Continue(())
        })
        .continue_value_no_break();

    assert_eq!(previsits, 2);
    // The self-loop and the duplicate arc are both revisits.
    assert_eq!(revisits, 2);
    Ok(())
}
