/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The structure formats isrt can read or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureFileType {
    Poscar,
    Xyz,
    ExtXyz,
}

impl StructureFileType {
    /// Guess a format from a file name.
    ///
    /// `.vasp`, `.poscar` and names beginning with `POSCAR` or `CONTCAR` are POSCARs.
    pub fn guess(path: impl AsRef<Path>) -> Option<Self>
    {
        let path = path.as_ref();
        let name = path.file_name()?.to_string_lossy();
        let extension = path.extension().map(|s| s.to_string_lossy().to_ascii_lowercase());

        match extension.as_ref().map(|s| &s[..]) {
            Some("vasp") | Some("poscar") => return Some(StructureFileType::Poscar),
            Some("xyz") => return Some(StructureFileType::Xyz),
            Some("extxyz") => return Some(StructureFileType::ExtXyz),
            _ => {},
        }
        if name.starts_with("POSCAR") || name.starts_with("CONTCAR") {
            return Some(StructureFileType::Poscar);
        }
        None
    }

    /// Values accepted by `from_str`.
    pub const NAMES: &'static [&'static str] = &["poscar", "xyz", "extxyz"];

    pub fn name(self) -> &'static str
    {
        match self {
            StructureFileType::Poscar => "poscar",
            StructureFileType::Xyz => "xyz",
            StructureFileType::ExtXyz => "extxyz",
        }
    }
}

impl fmt::Display for StructureFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Display::fmt(self.name(), f) }
}

impl FromStr for StructureFileType {
    type Err = failure::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match &s.to_ascii_lowercase()[..] {
            "poscar" | "vasp" => Ok(StructureFileType::Poscar),
            "xyz" => Ok(StructureFileType::Xyz),
            "extxyz" => Ok(StructureFileType::ExtXyz),
            _ => bail!("unknown structure format {:?} (expected one of {:?})", s, Self::NAMES),
        }
    }
}
