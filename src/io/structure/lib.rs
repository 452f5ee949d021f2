/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! File formats for periodic structures.

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[cfg(test)] #[macro_use] extern crate isrt_assert_close;

pub type FailResult<T> = Result<T, failure::Error>;

pub mod poscar;
pub mod xyz;
mod file_type;

pub use crate::poscar::{Poscar, PoscarCoords};
pub use crate::xyz::{Xyz, ExtXyz};
pub use crate::file_type::StructureFileType;
