/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Periodic structure types: lattices, coordinates and elements.

#[macro_use] extern crate failure;
#[macro_use] extern crate lazy_static;
#[cfg_attr(test, macro_use)] extern crate isrt_assert_close;
#[cfg(test)] extern crate rand;

/// Operations under periodic boundary conditions.
pub mod periodic {
    pub use crate::algo::periodic::{
        wrap_cart,
        wrap_frac,
        min_image_cart,
        min_image_distance,
        WRAP_EPS,
    };
}

mod core;
mod algo;
mod element;

//---------------------------
// public reexports; API

pub use crate::core::lattice::Lattice;
pub use crate::core::coords::CoordsKind;
pub use crate::core::structure::Coords;

pub use crate::element::{Element, ElementParseError};
pub use crate::element::consts;
