/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The high-level parts of isrt: file handling, config, logging and the binaries.
//!
//! Library crates do not print anything themselves; everything user-facing lives here.

#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;
#[macro_use] extern crate failure;

pub type FailResult<T> = Result<T, failure::Error>;

mod ui;
mod util;
mod cmd;
pub mod entry_points;

pub use crate::cmd::{run_insert, run_convert, read_structure, write_structure};
pub use crate::cmd::StructureData;
pub use crate::ui::cfg_merging::ConfigSources;
pub use crate::ui::logging::GlobalLogger;
pub use isrt_tasks_config::Settings;
