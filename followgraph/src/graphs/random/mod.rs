/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Random graph models, mainly used for property testing.

mod er;
pub use er::*;
