/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::V3;

/// Construct a vector from a function of the index.
#[inline(always)]
pub fn from_fn<X, F>(mut f: F) -> V3<X>
where F: FnMut(usize) -> X,
{ V3([f(0), f(1), f(2)]) }

impl<X> V3<X> {
    /// Apply a function to each element.
    #[inline(always)]
    pub fn map<B, F>(self, mut f: F) -> V3<B>
    where F: FnMut(X) -> B,
    {
        let V3([a, b, c]) = self;
        V3([f(a), f(b), f(c)])
    }
}

impl V3 {
    #[inline(always)]
    pub fn zero() -> Self
    { V3([0.0; 3]) }

    #[inline(always)]
    pub fn dot(&self, other: &V3) -> f64
    { self[0] * other[0] + self[1] * other[1] + self[2] * other[2] }

    #[inline(always)]
    pub fn sqnorm(&self) -> f64
    { self.dot(self) }

    #[inline(always)]
    pub fn norm(&self) -> f64
    { self.sqnorm().sqrt() }

    pub fn cross(&self, other: &V3) -> V3
    {
        V3([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ])
    }

    /// True if all elements are finite.
    pub fn is_finite(&self) -> bool
    { self.iter().all(|x| x.is_finite()) }
}

/// Dot product of two vectors.
#[inline(always)]
pub fn dot(a: &V3, b: &V3) -> f64
{ a.dot(b) }
