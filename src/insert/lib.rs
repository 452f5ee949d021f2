/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Random placement of new atoms between two reference groups of a periodic structure.
//!
//! The structure is split by a [`Classify`] into a *low* group (e.g. a slab)
//! and a *high* group (e.g. a solvent layer).  Candidates are drawn uniformly from
//! a [`Window`] spanning the footprint of the structure, and between the top of the
//! low group and the top of the high group.  Each candidate is wrapped into the cell
//! and accepted only if its minimum image distance to every atom (including those
//! accepted earlier in the same run) is at least the requested minimum distance.

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[cfg(test)] #[macro_use] extern crate isrt_assert_close;

mod classify;
mod window;
mod request;
mod sampler;

pub use crate::classify::{Reference, Classify, SpeciesSet};
pub use crate::window::{Interval, Window};
pub use crate::request::{Request, ConfigurationError};
pub use crate::sampler::{place, insert, Placement};
