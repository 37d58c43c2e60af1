/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::RandomAccessGraph;
use crate::visits::Sequential;
use crate::visits::depth_first::{EventNoPred, EventPred};
use std::ops::ControlFlow::{self, Continue};
use sux::prelude::BitVec;

/// A depth-first visit which does not keep track of predecessors.
pub type SeqNoPred<'a, G> = SeqIter<'a, G, (), false>;

/// A depth-first visit which keeps track of predecessors.
pub type SeqPred<'a, G> = SeqIter<'a, G, usize, true>;

/// Sequential depth-first visits.
///
/// This is an iterative implementation that does not need a large stack size:
/// the visit path is kept on the heap, so the depth of the visit is bounded
/// only by available memory, never by the call stack.
///
/// There are two versions of the visit, which are type aliases to the same
/// common implementation: [`SeqNoPred`] and [`SeqPred`] (the generic
/// implementation should not be instantiated by the user).
///
/// * [`SeqNoPred`] does not keep track of predecessors; it can be used, for
///   example, to compute reachability information.
/// * [`SeqPred`] keeps track of predecessors; it can be used, for example, to
///   compute the finish order of the nodes.
///
/// Both visits use one bit per node to remember known nodes, and a stack of
/// `(successor iterator, predecessor)` pairs, one for each node on the visit
/// path. The visits differ in the type of events they generate:
///
/// * [`SeqNoPred`] generates events of type [`EventNoPred`].
/// * [`SeqPred`] generates events of type [`EventPred`], which provide the
///   predecessor of the current node and a
///   [postvisit event](EventPred::Postvisit).
///
/// # Examples
///
/// Let's compute the reverse of a finish order:
///
/// ```
/// use followgraph::prelude::*;
/// use followgraph::visits::Sequential;
/// use std::ops::ControlFlow::Continue;
/// use no_break::NoBreak;
///
/// # fn main() -> Result<(), NodeOutOfRange> {
/// let graph = VecGraph::from_arcs(4, [(0, 1), (1, 2), (1, 3), (0, 3)])?;
/// let mut visit = depth_first::SeqPred::new(&graph);
/// let mut finish_order = Vec::with_capacity(graph.num_nodes());
///
/// visit
///     .visit(0..graph.num_nodes(), |event| {
///         if let depth_first::EventPred::Postvisit { node, .. } = event {
///             finish_order.push(node);
///         }
///         Continue(())
///     })
///     .continue_value_no_break();
///
/// assert_eq!(finish_order, vec![2, 3, 1, 0]);
/// # Ok(())
/// # }
/// ```
pub struct SeqIter<'a, G: RandomAccessGraph, P, const PRED: bool> {
    graph: &'a G,
    /// Entries on this stack represent the iterator on the successors of a
    /// node and the parent of the node. This approach makes it possible to
    /// avoid storing both the current and the parent node in the stack.
    stack: Vec<(<G::Successors<'a> as IntoIterator>::IntoIter, P)>,
    known: BitVec,
}

impl<'a, G: RandomAccessGraph, P, const PRED: bool> SeqIter<'a, G, P, PRED> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    ///
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> SeqIter<'a, G, P, PRED> {
        Self {
            graph,
            stack: Vec::with_capacity(16),
            known: BitVec::new(graph.num_nodes()),
        }
    }
}

impl<G: RandomAccessGraph> Sequential<EventPred> for SeqIter<'_, G, usize, true> {
    fn visit_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, EventPred) -> ControlFlow<E, ()>,
    >(
        &mut self,
        roots: R,
        mut init: T,
        mut callback: C,
    ) -> ControlFlow<E, ()> {
        for root in roots {
            if self.known[root] {
                // The node has been visited by an earlier root.
                continue;
            }

            callback(&mut init, EventPred::Init { root })?;

            self.known.set(root, true);
            callback(
                &mut init,
                EventPred::Previsit {
                    node: root,
                    pred: root,
                    root,
                },
            )?;

            self.stack
                .push((self.graph.successors(root).into_iter(), root));

            // This variable keeps track of the current node being visited; the
            // parent node is derived at each iteration of the 'recurse loop.
            let mut curr = root;

            'recurse: loop {
                let Some((iter, parent)) = self.stack.last_mut() else {
                    callback(&mut init, EventPred::Done { root })?;
                    break;
                };

                for succ in iter {
                    if self.known[succ] {
                        // The node has already been discovered.
                        callback(
                            &mut init,
                            EventPred::Revisit {
                                node: succ,
                                pred: curr,
                                root,
                            },
                        )?;
                    } else {
                        // First time seeing the node.
                        self.known.set(succ, true);
                        callback(
                            &mut init,
                            EventPred::Previsit {
                                node: succ,
                                pred: curr,
                                root,
                            },
                        )?;
                        // curr is the parent of succ.
                        self.stack
                            .push((self.graph.successors(succ).into_iter(), curr));

                        // At the next iteration, succ will be the current node.
                        curr = succ;

                        continue 'recurse;
                    }
                }

                callback(
                    &mut init,
                    EventPred::Postvisit {
                        node: curr,
                        pred: *parent,
                        root,
                    },
                )?;

                // We're going up one stack level, so the next current node
                // is the current parent.
                curr = *parent;
                self.stack.pop();
            }
        }

        Continue(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.known = BitVec::new(self.graph.num_nodes());
    }
}

impl<G: RandomAccessGraph> Sequential<EventNoPred> for SeqIter<'_, G, (), false> {
    fn visit_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, EventNoPred) -> ControlFlow<E, ()>,
    >(
        &mut self,
        roots: R,
        mut init: T,
        mut callback: C,
    ) -> ControlFlow<E, ()> {
        for root in roots {
            if self.known[root] {
                // The node has been visited by an earlier root.
                continue;
            }

            callback(&mut init, EventNoPred::Init { root })?;

            self.known.set(root, true);
            callback(&mut init, EventNoPred::Previsit { node: root, root })?;

            self.stack
                .push((self.graph.successors(root).into_iter(), ()));

            'recurse: loop {
                let Some((iter, _)) = self.stack.last_mut() else {
                    callback(&mut init, EventNoPred::Done { root })?;
                    break;
                };

                for succ in iter {
                    if self.known[succ] {
                        // The node has already been discovered.
                        callback(&mut init, EventNoPred::Revisit { node: succ, root })?;
                    } else {
                        // First time seeing the node.
                        self.known.set(succ, true);
                        callback(&mut init, EventNoPred::Previsit { node: succ, root })?;
                        self.stack
                            .push((self.graph.successors(succ).into_iter(), ()));

                        continue 'recurse;
                    }
                }

                self.stack.pop();
            }
        }

        Continue(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.known = BitVec::new(self.graph.num_nodes());
    }
}
