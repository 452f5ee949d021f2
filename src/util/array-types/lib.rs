/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-size linear algebra types used throughout isrt.
//!
//! Matrices are row-based.  A vector is multiplied against a matrix from
//! the left (`v * m`), which is the natural order for lists of positions
//! stored as rows.

#[cfg_attr(test, macro_use)]
extern crate isrt_assert_close;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

mod types;
mod ops;
mod methods_v;
mod methods_m;
mod conv;
mod close;

pub use crate::types::{V3, M3, M33};
pub use crate::methods_v::dot;
pub use crate::methods_m::{mat, inv};
pub use crate::conv::{Envee, Unvee};

/// Functions for constructing vectors.
pub mod vee {
    pub use crate::methods_v::from_fn;
}
