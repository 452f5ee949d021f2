/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#![allow(dead_code)]

use std::path::PathBuf;

use isrt_tasks::{ConfigSources, Settings};

pub fn resource(name: &str) -> PathBuf
{ PathBuf::from("tests/resources").join(name) }

/// `tests/resources/insert.yaml`, followed by extra `--config` arguments.
pub fn settings(extra: &[&str]) -> Settings
{
    let mut args = vec![resource("insert.yaml").to_string_lossy().into_owned()];
    args.extend(extra.iter().map(|s| s.to_string()));
    ConfigSources::resolve_from_args(args).unwrap().into_settings().unwrap()
}

pub fn read_text(path: impl Into<PathBuf>) -> String
{
    use path_abs::FileRead;
    FileRead::open(path.into()).unwrap().read_string().unwrap()
}
