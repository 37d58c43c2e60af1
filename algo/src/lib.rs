/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Algorithms for the `followgraph` framework: strongly connected components
//! and the follow suggestions derived from them.

mod top_sort;
pub use top_sort::top_sort;

pub mod sccs;
pub mod suggest;

pub mod prelude {
    pub use crate::sccs;
    pub use crate::suggest;
    pub use crate::top_sort;
}
