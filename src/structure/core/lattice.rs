/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Mul, Div};
use std::sync::Arc;

use isrt_array_types::{V3, M33, M3, mat, inv};
use isrt_assert_close::{CheckClose, Tolerances, CheckCloseError};

/// Defines a vector basis for periodic boundary conditions in three dimensions.
///
/// A lattice is a linear transformation between "fractional" data and
/// "cartesian" data.  See [`CoordsKind`] for definitions.
///
/// The inverse is computed once on construction.  Construction never fails;
/// a degenerate lattice simply has a non-finite inverse, and code that needs
/// a usable cell should test [`Lattice::is_degenerate`] first.
///
/// [`CoordsKind`]: enum.CoordsKind.html
/// [`Lattice::is_degenerate`]: #method.is_degenerate
#[derive(Debug, Clone)]
pub struct Lattice {
    matrix: Arc<M33>,
    inverse: Arc<M33>,
}

// Manual impl that doesn't compare the inverse.
impl PartialEq<Lattice> for Lattice {
    fn eq(&self, other: &Lattice) -> bool {
        // deconstruct to get errors when new fields are added
        let Lattice { ref matrix, inverse: _ } = *self;
        matrix == &other.matrix
    }
}

impl Lattice {
    /// Create a lattice from a matrix where the rows are lattice vectors.
    #[inline]
    pub fn new(matrix: &M33) -> Self {
        let inverse = Arc::new(inv(matrix));
        let matrix = Arc::new(*matrix);
        Self { matrix, inverse }
    }

    #[inline(always)]
    pub fn from_vectors(vectors: &[V3; 3]) -> Self {
        Self::new(&M3(*vectors))
    }

    /// Matrix where lattice vectors are rows.
    #[inline]
    pub fn matrix(&self) -> &M33
    { &self.matrix }

    /// Get the (precomputed) inverse of the matrix where lattice vectors are rows.
    #[inline]
    pub fn inverse_matrix(&self) -> &M33
    { &self.inverse }

    #[inline]
    pub fn vectors(&self) -> &[V3; 3]
    { &self.matrix().0 }

    pub fn norms(&self) -> [f64; 3]
    {
        let [a, b, c] = *self.vectors();
        [a.norm(), b.norm(), c.norm()]
    }

    /// Get the (positive) volume of the lattice cell.
    pub fn volume(&self) -> f64
    { self.matrix().det().abs() }

    /// Test whether the lattice vectors fail to span three dimensions.
    ///
    /// The volume is compared against the product of the vector norms, so that
    /// `rel_tol` is a dimensionless measure of how flat the cell may be.  (it is
    /// the sine of the smallest angle that counts as non-degenerate, roughly)
    ///
    /// Lattices with non-finite elements are always degenerate.
    pub fn is_degenerate(&self, rel_tol: f64) -> bool
    {
        if !self.matrix.is_finite() || !self.inverse.is_finite() {
            return true;
        }
        let [a, b, c] = self.norms();
        self.volume() <= rel_tol * a * b * c
    }
}

/// Helper constructors
impl Lattice {
    /// A cubic lattice ((a, a, a), (90, 90, 90))
    #[inline]
    pub fn cubic(a: f64) -> Self { Self::orthorhombic(a, a, a) }

    /// An orthorhombic lattice ((a, b, c), (90, 90, 90))
    #[inline]
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self
    { Self::from(&[[a, 0., 0.], [0., b, 0.], [0., 0., c]]) }
}

impl<'a> From<&'a [[f64; 3]; 3]> for Lattice {
    #[inline(always)]
    fn from(m: &'a [[f64; 3]; 3]) -> Self
    { Lattice::new(&mat::from_array(*m)) }
}

// fractional to cartesian
impl<'a, 'b> Mul<&'b Lattice> for &'a V3 {
    type Output = V3;

    fn mul(self, other: &'b Lattice) -> V3 {
        self * other.matrix()
    }
}

impl<'b> Mul<&'b Lattice> for V3 {
    type Output = V3;

    fn mul(self, other: &'b Lattice) -> V3 {
        self * other.matrix()
    }
}

// cartesian to fractional
impl<'a, 'b> Div<&'b Lattice> for &'a V3 {
    type Output = V3;

    fn div(self, other: &'b Lattice) -> V3 {
        self * other.inverse_matrix()
    }
}

impl<'b> Div<&'b Lattice> for V3 {
    type Output = V3;

    fn div(self, other: &'b Lattice) -> V3 {
        self * other.inverse_matrix()
    }
}

impl CheckClose for Lattice {
    fn check_close(&self, other: &Lattice, tol: Tolerances) -> Result<(), CheckCloseError> {
        self.matrix().check_close(other.matrix(), tol)
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn inverse_is_precomputed() {
        let lattice = Lattice::from(&[
            [2.0, 2.0, 0.0],
            [0.0, 4.0, 0.0],
            [0.0, 0.0, 2.0],
        ]);
        assert_eq!(lattice.inverse_matrix(), &mat::from_array([
            [0.5, -0.25, 0.0],
            [0.0,  0.25, 0.0],
            [0.0,   0.0, 0.5],
        ]));
        assert_eq!(lattice.volume(), 16.0);
    }

    // make sure the library correctly chooses whether to use the
    // regular matrix, the inverse matrix, or no matrix
    #[test]
    fn div_vs_mul() {
        let lattice = Lattice::cubic(2.0);
        assert_eq!(V3([1.0, 0.0, 0.0]) * &lattice, V3([2.0, 0.0, 0.0]));
        assert_eq!(V3([1.0, 0.0, 0.0]) / &lattice, V3([0.5, 0.0, 0.0]));
    }

    #[test]
    fn degeneracy() {
        assert!(!Lattice::cubic(10.0).is_degenerate(1e-8));
        assert!(!Lattice::from(&[
            [3.0, 0.0, 0.0],
            [-1.5, 2.598076211353316, 0.0],
            [0.0, 0.0, 20.0],
        ]).is_degenerate(1e-8));

        // coplanar vectors
        assert!(Lattice::from(&[
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
        ]).is_degenerate(1e-8));
        // zero vector
        assert!(Lattice::orthorhombic(4.0, 0.0, 4.0).is_degenerate(1e-8));
        // garbage
        assert!(Lattice::cubic(std::f64::NAN).is_degenerate(1e-8));
    }

    #[test]
    fn equality_ignores_inverse() {
        let a = Lattice::cubic(3.0);
        let b = Lattice::from_vectors(&[
            V3([3.0, 0.0, 0.0]),
            V3([0.0, 3.0, 0.0]),
            V3([0.0, 0.0, 3.0]),
        ]);
        assert_eq!(a, b);
        assert_close!(a, b);
    }
}
