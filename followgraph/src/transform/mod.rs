/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph transformations.

mod transpose;
pub use transpose::*;
