/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use std::io::prelude::*;
use std::borrow::Borrow;

use itertools::Itertools;

use isrt_structure::{Element, Coords};
use isrt_array_types::V3;

//--------------------------------------------------------------------------------------
// public API

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz<
    Title = String,
    Carts = Vec<V3>,
    Elements = Vec<Element>,
> {
    pub title: Title,
    pub carts: Carts,
    pub elements: Elements,
}

impl<Title, Carts, Elements> Xyz<Title, Carts, Elements>
where
    Title: AsRef<str>,
    Carts: AsRef<[V3]>,
    Elements: AsRef<[Element]>,
{
    /// Writes an XYZ frame to an open file.
    ///
    /// You can freely call this multiple times on the same file
    /// to write an animation, since XYZ animations are simply
    /// concatenated XYZ files.
    pub fn to_writer(&self, mut w: impl Write) -> FailResult<()> {
        dump(&mut w, self.title.as_ref(), self.carts.as_ref(), self.elements.as_ref())
    }
}

/// An extended XYZ frame, which also records the cell.
///
/// `info` holds extra `key=value` pairs for the comment line.
/// Values containing whitespace are quoted.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtXyz<
    Coord = Coords,
    Elements = Vec<Element>,
> {
    pub coords: Coord,
    pub elements: Elements,
    pub info: Vec<(String, String)>,
}

impl<Coord, Elements> ExtXyz<Coord, Elements>
where
    Coord: Borrow<Coords>,
    Elements: AsRef<[Element]>,
{
    /// Writes one frame.  Like [`Xyz`], frames can be concatenated.
    pub fn to_writer(&self, mut w: impl Write) -> FailResult<()> {
        dump_ext(&mut w, self.coords.borrow(), self.elements.as_ref(), &self.info)
    }
}

//--------------------------------------------------------------------------------------
// implementation

fn dump(w: &mut dyn Write, title: &str, carts: &[V3], types: &[Element]) -> FailResult<()>
{
    ensure!(!title.contains('\n') && !title.contains('\r'), "XYZ title must be a single line");
    ensure!(
        carts.len() == types.len(),
        "cannot write XYZ: {} elements for {} positions", types.len(), carts.len(),
    );

    writeln!(w, "{}", carts.len())?;
    writeln!(w, "{}", title)?;
    write_atoms(w, carts, types)
}

fn dump_ext(w: &mut dyn Write, coords: &Coords, types: &[Element], info: &[(String, String)]) -> FailResult<()>
{
    ensure!(
        coords.num_atoms() == types.len(),
        "cannot write extended XYZ: {} elements for {} positions", types.len(), coords.num_atoms(),
    );

    let lattice = coords.lattice().vectors().iter()
        .flat_map(|v| v.iter().map(|x| x.to_string()))
        .join(" ");

    let mut comment = format!(r#"Lattice="{}" Properties=species:S:1:pos:R:3"#, lattice);
    for (key, value) in info {
        ensure!(!key.is_empty() && !key.contains(char::is_whitespace), "bad extended XYZ key: {:?}", key);
        ensure!(!value.contains('"') && !value.contains('\n'), "bad extended XYZ value: {:?}", value);
        match value.contains(char::is_whitespace) {
            true => comment += &format!(r#" {}="{}""#, key, value),
            false => comment += &format!(" {}={}", key, value),
        }
    }
    comment += r#" pbc="T T T""#;

    writeln!(w, "{}", types.len())?;
    writeln!(w, "{}", comment)?;
    write_atoms(w, &coords.to_carts(), types)
}

fn write_atoms(w: &mut dyn Write, carts: &[V3], types: &[Element]) -> FailResult<()>
{
    for (V3([x, y, z]), typ) in carts.iter().zip(types) {
        writeln!(w, " {:>2} {} {} {}", typ.symbol(), x, y, z)?;
    }
    Ok(())
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use isrt_structure::{Lattice, CoordsKind};
    use isrt_structure::consts::*;

    #[test]
    fn plain_frame() {
        let mut buf = vec![];
        Xyz {
            title: "water",
            carts: vec![V3([0.0, 0.0, 0.0]), V3([0.5, 0.75, 0.0])],
            elements: vec![OXYGEN, HYDROGEN],
        }.to_writer(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "2\nwater\n  O 0 0 0\n  H 0.5 0.75 0\n");
    }

    #[test]
    fn multiline_title_is_rejected() {
        let xyz = Xyz { title: "a\nb", carts: Vec::<V3>::new(), elements: Vec::<Element>::new() };
        assert!(xyz.to_writer(Vec::<u8>::new()).is_err());
    }

    #[test]
    fn extended_frame() {
        let coords = Coords::new(
            Lattice::orthorhombic(2.0, 3.0, 4.0),
            CoordsKind::Fracs(vec![V3([0.5, 0.5, 0.5])]),
        );
        let frame = ExtXyz {
            coords: &coords,
            elements: vec![FLUORINE],
            info: vec![("source".to_string(), "isrt insert".to_string())],
        };

        // two frames appended back to back
        let mut buf = vec![];
        frame.to_writer(&mut buf).unwrap();
        frame.to_writer(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "1");
        assert_eq!(lines[1], r#"Lattice="2 0 0 0 3 0 0 0 4" Properties=species:S:1:pos:R:3 source="isrt insert" pbc="T T T""#);
        assert_eq!(lines[2], "  F 1 1.5 2");
        assert_eq!(&lines[3..], &lines[..3]);
    }
}
