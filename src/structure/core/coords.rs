/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use isrt_array_types::V3;

use crate::Lattice;

/// Wrapper type for coordinates used as input to some APIs.
///
/// This allows a function to support either cartesian coordinates,
/// or fractional coordinates with respect to some lattice.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordsKind {
    Carts(Vec<V3>),
    Fracs(Vec<V3>),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Tag { Cart, Frac }

impl CoordsKind {
    pub fn len(&self) -> usize
    { self.as_slice().1.len() }

    pub fn is_empty(&self) -> bool
    { self.len() == 0 }

    pub(crate) fn as_slice(&self) -> (Tag, &[V3])
    { match *self {
        CoordsKind::Carts(ref c) => (Tag::Cart, c),
        CoordsKind::Fracs(ref c) => (Tag::Frac, c),
    }}

    pub(crate) fn as_mut_vec(&mut self) -> (Tag, &mut Vec<V3>)
    { match *self {
        CoordsKind::Carts(ref mut c) => (Tag::Cart, c),
        CoordsKind::Fracs(ref mut c) => (Tag::Frac, c),
    }}
}

// conversions
impl CoordsKind {
    pub fn into_carts(self, lattice: &Lattice) -> Vec<V3>
    { match self {
        CoordsKind::Carts(c) => c,
        CoordsKind::Fracs(c) => c.iter().map(|v| v * lattice).collect(),
    }}

    pub fn into_fracs(self, lattice: &Lattice) -> Vec<V3>
    { match self {
        CoordsKind::Carts(c) => c.iter().map(|v| v / lattice).collect(),
        CoordsKind::Fracs(c) => c,
    }}

    pub fn to_carts(&self, lattice: &Lattice) -> Vec<V3>
    { match *self {
        CoordsKind::Carts(ref c) => c.clone(),
        CoordsKind::Fracs(ref c) => c.iter().map(|v| v * lattice).collect(),
    }}

    pub fn to_fracs(&self, lattice: &Lattice) -> Vec<V3>
    { match *self {
        CoordsKind::Carts(ref c) => c.iter().map(|v| v / lattice).collect(),
        CoordsKind::Fracs(ref c) => c.clone(),
    }}

    pub(crate) fn into_tag(self, tag: Tag, lattice: &Lattice) -> Vec<V3>
    { match tag {
        Tag::Cart => self.into_carts(lattice),
        Tag::Frac => self.into_fracs(lattice),
    }}
}
