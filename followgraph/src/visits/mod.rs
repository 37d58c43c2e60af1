/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on graphs.
//!
//! A [sequential visit](Sequential) is parameterized by an event type `A`; it
//! provides visit methods accepting a callback function with argument `A` and
//! returning a `ControlFlow<E, ()>`, where `E` is a type parameter of the
//! visit method: for example, `E` might be [`StoppedWhenDone`] when completing
//! early.
//!
//! If a callback returns a [`Break`](ControlFlow::Break), the visit will be
//! interrupted, and the [`Break`](ControlFlow::Break) value will be the return
//! value of the visit method; for uninterruptible visits we suggest to use the
//! [`no-break`](https://crates.io/crates/no-break) crate and its
//! [`continue_value_no_break`](no_break::NoBreak::continue_value_no_break)
//! method on the result to let type inference run smoothly.
//!
//! Note that an interruption does not necessarily denote an error condition
//! (see, e.g., [`StoppedWhenDone`]).
//!
//! Visits must provide a `reset` method that makes it possible to reuse them.

pub mod depth_first;

use std::ops::ControlFlow;
use thiserror::Error;

#[derive(Error, Debug)]
/// The result of the visit was computed without completing the visit.
#[error("Stopped when done")]
pub struct StoppedWhenDone;

/// A sequential visit.
///
/// Implementations of this trait must provide the
/// [`visit_with`](Sequential::visit_with) method, which should perform a visit
/// of a graph starting from a given list of nodes: nodes already known when
/// their turn comes are skipped.
pub trait Sequential<A> {
    /// Visits the graph from the specified nodes with an initialization value.
    ///
    /// See the [module documentation](crate::visits) for more information on
    /// the return value.
    ///
    /// # Arguments
    ///
    /// * `roots`: the nodes from which to start visits, in order.
    ///
    /// * `init`: a value that will be passed to the callback function.
    ///
    /// * `callback`: the callback function.
    fn visit_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, A) -> ControlFlow<E, ()>,
    >(
        &mut self,
        roots: R,
        init: T,
        callback: C,
    ) -> ControlFlow<E, ()>;

    /// Visits the graph from the specified nodes.
    ///
    /// See the [module documentation](crate::visits) for more information on
    /// the return value.
    ///
    /// # Arguments
    ///
    /// * `roots`: the nodes from which to start visits, in order.
    ///
    /// * `callback`: the callback function.
    fn visit<R: IntoIterator<Item = usize>, E, C: FnMut(A) -> ControlFlow<E, ()>>(
        &mut self,
        roots: R,
        mut callback: C,
    ) -> ControlFlow<E, ()> {
        self.visit_with(roots, (), |(), a| callback(a))
    }

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
