/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use isrt_array_types::V3;

use crate::{Lattice, CoordsKind};

/// Pairs [`CoordsKind`] together with their [`Lattice`].
///
/// Metadata such as elements is stored separately by whoever needs it;
/// see e.g. `Poscar` in `isrt-structure-io`.
///
/// [`CoordsKind`]: enum.CoordsKind.html
/// [`Lattice`]: struct.Lattice.html
#[derive(Debug, Clone, PartialEq)]
pub struct Coords {
    pub(crate) lattice: Lattice,
    pub(crate) coords: CoordsKind,
}

impl Coords {
    pub fn new(lattice: Lattice, coords: CoordsKind) -> Self
    { Self { lattice, coords } }

    pub fn num_atoms(&self) -> usize { self.coords.len() }
    pub fn lattice(&self) -> &Lattice { &self.lattice }

    /// Borrow the coordinates in whichever form they are currently stored.
    pub fn coords_kind(&self) -> &CoordsKind { &self.coords }

    /// Append atoms to the end of the structure.
    ///
    /// The new coordinates may be given in either form; they are converted
    /// to match the storage of the existing coordinates.
    pub fn extend(&mut self, coords: CoordsKind)
    {
        let (my_tag, my_coords) = self.coords.as_mut_vec();
        my_coords.extend(coords.into_tag(my_tag, &self.lattice));
    }
}

impl Coords {
    // NOTE: We can produce `Vec<_>`, but not `&[_]` because the data might not be present.
    pub fn to_carts(&self) -> Vec<V3> { self.coords.to_carts(&self.lattice) }
    pub fn to_fracs(&self) -> Vec<V3> { self.coords.to_fracs(&self.lattice) }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn extend_matches_storage() {
        let lattice = Lattice::cubic(4.0);
        let mut coords = Coords::new(lattice, CoordsKind::Fracs(vec![V3([0.25, 0.25, 0.25])]));

        coords.extend(CoordsKind::Carts(vec![V3([2.0, 0.0, 1.0])]));
        assert_eq!(coords.num_atoms(), 2);
        assert_eq!(coords.coords_kind(), &CoordsKind::Fracs(vec![
            V3([0.25, 0.25, 0.25]),
            V3([0.5, 0.0, 0.25]),
        ]));
        assert_eq!(coords.to_carts()[0], V3([1.0, 1.0, 1.0]));
    }
}
