/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{V3, M3, M33};

/// Functions for constructing matrices.
pub mod mat {
    use super::*;

    /// Construct a matrix from an array of rows.
    #[inline(always)]
    pub fn from_array(arr: [[f64; 3]; 3]) -> M33
    { M3([V3(arr[0]), V3(arr[1]), V3(arr[2])]) }

    /// Construct a matrix from a function of `(row, col)`.
    #[inline(always)]
    pub fn from_fn<F>(mut f: F) -> M33
    where F: FnMut(usize, usize) -> f64,
    {
        M3([
            V3([f(0, 0), f(0, 1), f(0, 2)]),
            V3([f(1, 0), f(1, 1), f(1, 2)]),
            V3([f(2, 0), f(2, 1), f(2, 2)]),
        ])
    }

    pub fn eye() -> M33
    { from_fn(|r, c| if r == c { 1.0 } else { 0.0 }) }
}

/// Matrix inverse.
///
/// No check is made for singularity; a singular matrix produces
/// non-finite elements.  Callers that care should check `det()` first.
pub fn inv(m: &M33) -> M33
{
    let cof = |r0: usize, r1: usize, c0: usize, c1: usize| {
        m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0]
    };

    let det = m.det();
    // adjugate (transpose of the cofactor matrix)
    let adj = mat::from_array([
        [ cof(1, 2, 1, 2), -cof(0, 2, 1, 2),  cof(0, 1, 1, 2)],
        [-cof(1, 2, 0, 2),  cof(0, 2, 0, 2), -cof(0, 1, 0, 2)],
        [ cof(1, 2, 0, 1), -cof(0, 2, 0, 1),  cof(0, 1, 0, 1)],
    ]);
    M3([adj[0] / det, adj[1] / det, adj[2] / det])
}

impl M33 {
    #[inline]
    pub fn eye() -> Self
    { mat::eye() }

    #[inline]
    pub fn inv(&self) -> Self
    { inv(self) }

    /// Determinant.  For a matrix of row vectors this is their triple product.
    pub fn det(&self) -> f64
    { self[0].dot(&self[1].cross(&self[2])) }

    #[inline]
    pub fn into_array(self) -> [[f64; 3]; 3]
    { [self[0].0, self[1].0, self[2].0] }

    /// True if all elements are finite.
    pub fn is_finite(&self) -> bool
    { self.iter().all(|row| row.is_finite()) }
}
