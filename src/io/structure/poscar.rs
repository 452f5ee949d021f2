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

use isrt_structure::{Element, Coords, Lattice, CoordsKind};
use isrt_array_types::{Envee, Unvee};

use vasp_poscar as imp;

//--------------------------------------------------------------------------------------
// public API

#[derive(Debug, Clone, PartialEq)]
pub struct Poscar<
    Comment = String,
    Coord = Coords,
    Elements = Vec<Element>,
> {
    pub comment: Comment,
    pub coords: Coord,
    pub elements: Elements,
    /// Per-atom `Selective dynamics` flags (`true` means free to move along that axis).
    pub dynamics: Option<Vec<[bool; 3]>>,
}

/// Which coordinate block to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoscarCoords {
    /// A `Cartesian` block, in the units of the lattice.
    Cart,
    /// A `Direct` block of fractional coordinates.
    Frac,
}

impl Default for PoscarCoords {
    fn default() -> Self { PoscarCoords::Frac }
}

impl<Comment, Coord, Elements> Poscar<Comment, Coord, Elements>
where
    Comment: AsRef<str>,
    Coord: Borrow<Coords>,
    Elements: AsRef<[Element]>,
{
    /// Writes a VASP 5 POSCAR with cartesian coordinates.
    pub fn to_writer(&self, w: impl Write) -> FailResult<()> {
        self.to_writer_as(w, PoscarCoords::Cart)
    }

    /// Writes a VASP 5 POSCAR.
    ///
    /// Runs of equal consecutive elements share one group in the
    /// symbols line.  An element that reappears later starts a new group.
    pub fn to_writer_as(&self, mut w: impl Write, kind: PoscarCoords) -> FailResult<()> {
        dump(
            &mut w,
            self.comment.as_ref(),
            self.coords.borrow(),
            self.elements.as_ref(),
            self.dynamics.as_ref().map(|d| &d[..]),
            kind,
        )
    }
}

impl Poscar {
    /// Reads a POSCAR from an open file.
    ///
    /// This forcibly reads to EOF because it must construct a BufReader.
    pub fn from_reader(mut f: impl Read) -> FailResult<Self> {
        let out = load_txt(&mut std::io::BufReader::new(&mut f))?;
        f.read_to_end(&mut vec![])?;
        Ok(out)
    }

    /// Reads a POSCAR from an open file.
    pub fn from_buf_reader(mut f: impl BufRead) -> FailResult<Self> {
        load_txt(&mut f)
    }
}

//--------------------------------------------------------------------------------------
// implementation

// monomorphic
fn dump(
    w: &mut dyn Write,
    title: &str,
    coords: &Coords,
    elements: &[Element],
    dynamics: Option<&[[bool; 3]]>,
    kind: PoscarCoords,
) -> FailResult<()>
{
    ensure!(
        elements.len() == coords.num_atoms(),
        "cannot write POSCAR: {} elements for {} positions", elements.len(), coords.num_atoms(),
    );
    if let Some(dynamics) = dynamics {
        ensure!(
            dynamics.len() == coords.num_atoms(),
            "cannot write POSCAR: {} selective dynamics flags for {} positions",
            dynamics.len(), coords.num_atoms(),
        );
    }
    // the title must stay on one line or it eats the scale factor
    let title = title.lines().next().unwrap_or("");

    let positions = match kind {
        PoscarCoords::Cart => imp::Coords::Cart(coords.to_carts().unvee()),
        PoscarCoords::Frac => imp::Coords::Frac(coords.to_fracs().unvee()),
    };
    let mut builder = imp::Builder::new();
    builder
        .comment(title)
        .lattice_vectors(&coords.lattice().matrix().into_array())
        .positions(positions)
        .site_symbols(elements.iter().map(|&elem| elem.symbol()));
    if let Some(dynamics) = dynamics {
        builder.dynamics(dynamics.to_vec());
    }
    write!(w, "{}", builder.build()?)?;
    Ok(())
}

fn load_txt(f: &mut dyn BufRead) -> FailResult<Poscar>
{
    use vasp_poscar::failure::ResultExt;
    let poscar = imp::Poscar::from_reader(f).compat()?;

    let comment = poscar.comment().to_string();
    let lattice = Lattice::from(&poscar.scaled_lattice_vectors());
    let coords = match poscar.scaled_positions() {
        imp::Coords::Cart(p) => CoordsKind::Carts(p.to_vec().envee()),
        imp::Coords::Frac(p) => CoordsKind::Fracs(p.to_vec().envee()),
    };

    let group_elems = {
        // Prior to VASP 5 the symbols were not part of the format, and tools
        // such as ASE and phonopy still put them in the comment line.
        let group_symbols = match poscar.group_symbols() {
            Some(iter) => iter.map(|s| s.to_string()).collect(),
            None => {
                let symbols = poscar.comment().split_whitespace()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>();
                ensure!(
                    symbols.len() == poscar.group_counts().len(),
                    "POSCAR has no symbols line, and the comment does not name {} species",
                    poscar.group_counts().len(),
                );
                debug!("reading POSCAR species from the comment line: {:?}", symbols);
                symbols
            },
        };
        group_symbols.iter()
            .map(|sym| Element::from_potcar_label(sym))
            .collect::<Result<Vec<Element>, _>>()?
    };

    let elements = poscar.group_counts().zip_eq(group_elems)
        .flat_map(|(c, elem)| std::iter::repeat(elem).take(c))
        .collect::<Vec<_>>();

    ensure!(
        elements.len() == coords.len(),
        "POSCAR group counts sum to {} but there are {} positions", elements.len(), coords.len(),
    );
    let coords = Coords::new(lattice, coords);
    let dynamics = poscar.into_raw().dynamics;
    Ok(Poscar { comment, coords, elements, dynamics })
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use isrt_array_types::V3;
    use isrt_structure::consts::*;

    const MOS2_POSCAR: &str = "\
MoS2 with water
   1.0
     3.19 0.0 0.0
    -1.595 2.7626 0.0
     0.0 0.0 20.0
   Mo S O H
   1 2 1 2
Direct
  0.0 0.0 0.5
  0.33333333 0.66666667 0.578
  0.33333333 0.66666667 0.422
  0.5 0.5 0.7
  0.55 0.5 0.72
  0.45 0.5 0.72
";

    #[test]
    fn read_symbols_line() {
        let poscar = Poscar::from_reader(MOS2_POSCAR.as_bytes()).unwrap();
        assert_eq!(poscar.comment, "MoS2 with water");
        assert_eq!(poscar.elements, vec![MOLYBDENUM, SULFUR, SULFUR, OXYGEN, HYDROGEN, HYDROGEN]);
        assert_eq!(poscar.coords.num_atoms(), 6);
        let carts = poscar.coords.to_carts();
        assert_close!(carts[0], V3([0.0, 0.0, 10.0]));
    }

    #[test]
    fn read_symbols_from_comment() {
        let text = "\
O H
1.0
10.0 0.0 0.0
0.0 10.0 0.0
0.0 0.0 10.0
1 2
Cartesian
5.0 5.0 5.0
5.9 5.0 5.0
4.7 5.9 5.0
";
        let poscar = Poscar::from_reader(text.as_bytes()).unwrap();
        assert_eq!(poscar.elements, vec![OXYGEN, HYDROGEN, HYDROGEN]);
    }

    #[test]
    fn missing_symbols_is_an_error() {
        let text = "\
water
1.0
10.0 0.0 0.0
0.0 10.0 0.0
0.0 0.0 10.0
1 2
Cartesian
5.0 5.0 5.0
5.9 5.0 5.0
4.7 5.9 5.0
";
        assert!(Poscar::from_reader(text.as_bytes()).is_err());
    }

    #[test]
    fn write_then_read() {
        let original = Poscar::from_reader(MOS2_POSCAR.as_bytes()).unwrap();

        for &kind in &[PoscarCoords::Cart, PoscarCoords::Frac] {
            let mut buf = vec![];
            original.to_writer_as(&mut buf, kind).unwrap();
            let text = String::from_utf8(buf).unwrap();
            match kind {
                PoscarCoords::Cart => assert!(text.contains("Cartesian")),
                PoscarCoords::Frac => assert!(text.contains("Direct")),
            }

            let read = Poscar::from_reader(text.as_bytes()).unwrap();
            assert_eq!(read.elements, original.elements);
            assert_close!(abs=1e-9, read.coords.to_carts(), original.coords.to_carts());
        }
    }

    #[test]
    fn write_repeated_groups() {
        let coords = Coords::new(
            Lattice::cubic(10.0),
            CoordsKind::Fracs(vec![V3([0.1; 3]), V3([0.2; 3]), V3([0.3; 3])]),
        );
        let poscar = Poscar {
            comment: "F then O then F",
            coords: &coords,
            elements: &[FLUORINE, OXYGEN, FLUORINE][..],
            dynamics: None,
        };
        let mut buf = vec![];
        poscar.to_writer_as(&mut buf, PoscarCoords::Frac).unwrap();

        let read = Poscar::from_reader(&buf[..]).unwrap();
        assert_eq!(read.elements, vec![FLUORINE, OXYGEN, FLUORINE]);
    }

    const FIXED_SLAB_POSCAR: &str = "\
slab with a fixed bottom layer
   1.0
    10.0 0.0 0.0
    0.0 10.0 0.0
    0.0 0.0 20.0
   Mo O
   2 1
Selective dynamics
Direct
  0.0 0.0 0.1 F F F
  0.5 0.5 0.2 T T F
  0.5 0.5 0.6 T T T
";

    #[test]
    fn selective_dynamics_survive() {
        let original = Poscar::from_reader(FIXED_SLAB_POSCAR.as_bytes()).unwrap();
        let expected = vec![[false; 3], [true, true, false], [true; 3]];
        assert_eq!(original.dynamics, Some(expected.clone()));

        let mut buf = vec![];
        original.to_writer_as(&mut buf, PoscarCoords::Frac).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Selective Dynamics"), "{}", text);

        let read = Poscar::from_reader(text.as_bytes()).unwrap();
        assert_eq!(read.dynamics, Some(expected));
        assert_eq!(read.elements, original.elements);
    }

    #[test]
    fn no_dynamics_section_without_flags() {
        let poscar = Poscar::from_reader(MOS2_POSCAR.as_bytes()).unwrap();
        assert_eq!(poscar.dynamics, None);

        let mut buf = vec![];
        poscar.to_writer(&mut buf).unwrap();
        assert!(!String::from_utf8(buf).unwrap().contains("Selective"));
    }

    #[test]
    fn dynamics_must_cover_every_atom() {
        let mut poscar = Poscar::from_reader(FIXED_SLAB_POSCAR.as_bytes()).unwrap();
        poscar.dynamics = Some(vec![[false; 3]]);
        assert!(poscar.to_writer(vec![]).is_err());
    }
}
