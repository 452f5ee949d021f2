/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, Neg, Mul, Div};
use std::ops::{AddAssign, SubAssign, MulAssign, DivAssign};

use crate::{V3, M33};
use crate::vee;

// NOTE: Operator impls are only provided for f64.  Nothing in isrt
//       does linear algebra on any other scalar type.

// Generates an impl for every combination of owned and borrowed operands.
macro_rules! impl_binop_refs {
    (impl $Trait:ident<$B:ty> for $A:ty { fn $method:ident -> $Out:ty = $body:expr }) => {
        impl $Trait<$B> for $A {
            type Output = $Out;
            #[inline]
            fn $method(self, other: $B) -> $Out { ($body)(&self, &other) }
        }
        impl<'a> $Trait<&'a $B> for $A {
            type Output = $Out;
            #[inline]
            fn $method(self, other: &'a $B) -> $Out { ($body)(&self, other) }
        }
        impl<'a> $Trait<$B> for &'a $A {
            type Output = $Out;
            #[inline]
            fn $method(self, other: $B) -> $Out { ($body)(self, &other) }
        }
        impl<'a, 'b> $Trait<&'b $B> for &'a $A {
            type Output = $Out;
            #[inline]
            fn $method(self, other: &'b $B) -> $Out { ($body)(self, other) }
        }
    };
}

// ---------------------------------------------------------------------------
// vector-vector ops

impl_binop_refs!{
    impl Add<V3> for V3 {
        fn add -> V3 = |a: &V3, b: &V3| vee::from_fn(|k| a[k] + b[k])
    }
}

impl_binop_refs!{
    impl Sub<V3> for V3 {
        fn sub -> V3 = |a: &V3, b: &V3| vee::from_fn(|k| a[k] - b[k])
    }
}

impl Neg for V3 {
    type Output = V3;

    #[inline]
    fn neg(self) -> V3
    { self.map(|x| -x) }
}

impl<'a> Neg for &'a V3 {
    type Output = V3;

    #[inline]
    fn neg(self) -> V3
    { self.map(|x| -x) }
}

impl AddAssign<V3> for V3 {
    #[inline]
    fn add_assign(&mut self, other: V3)
    { *self = *self + other; }
}

impl SubAssign<V3> for V3 {
    #[inline]
    fn sub_assign(&mut self, other: V3)
    { *self = *self - other; }
}

// ---------------------------------------------------------------------------
// vector-scalar ops

impl_binop_refs!{
    impl Mul<f64> for V3 {
        fn mul -> V3 = |a: &V3, s: &f64| a.map(|x| x * *s)
    }
}

impl_binop_refs!{
    impl Div<f64> for V3 {
        fn div -> V3 = |a: &V3, s: &f64| a.map(|x| x / *s)
    }
}

impl Mul<V3> for f64 {
    type Output = V3;

    #[inline(always)]
    fn mul(self, vector: V3) -> V3
    { vector * self }
}

impl MulAssign<f64> for V3 {
    #[inline]
    fn mul_assign(&mut self, scalar: f64)
    { *self = *self * scalar; }
}

impl DivAssign<f64> for V3 {
    #[inline]
    fn div_assign(&mut self, scalar: f64)
    { *self = *self / scalar; }
}

// ---------------------------------------------------------------------------
// vector-matrix and matrix-matrix ops

// row vector times matrix
impl_binop_refs!{
    impl Mul<M33> for V3 {
        fn mul -> V3 = |v: &V3, m: &M33| {
            vee::from_fn(|c| (0..3).map(|r| v[r] * m[r][c]).sum::<f64>())
        }
    }
}

impl_binop_refs!{
    impl Mul<M33> for M33 {
        fn mul -> M33 = |a: &M33, b: &M33| {
            crate::M3([a[0] * b, a[1] * b, a[2] * b])
        }
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::mat;

    #[test]
    fn vector_arith() {
        let a = V3([1.0, 2.0, 3.0]);
        let b = V3([0.5, -1.0, 4.0]);
        assert_eq!(a + b, V3([1.5, 1.0, 7.0]));
        assert_eq!(&a - &b, V3([0.5, 3.0, -1.0]));
        assert_eq!(-a, V3([-1.0, -2.0, -3.0]));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, V3([0.5, 1.0, 1.5]));

        let mut c = a;
        c += b;
        c -= b;
        assert_eq!(c, a);
    }

    // make sure the vector multiplies from the left
    #[test]
    fn multiplication_order() {
        // a matrix not equal to its transpose
        let m = mat::from_array([
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 0.0],
        ]);
        assert_eq!(V3([1.0, 0.0, 0.0]) * &m, V3([0.0, 1.0, 0.0]));
        assert_eq!(V3([0.0, 0.0, 1.0]) * &m, V3([1.0, 0.0, 0.0]));

        let a = mat::from_array([
            [2.0, 2.0, 0.0],
            [0.0, 4.0, 0.0],
            [0.0, 0.0, 2.0],
        ]);
        let b = mat::from_array([
            [0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
        ]);
        assert_eq!(&a * &b, mat::from_array([
            [2.0, 2.0, 0.0],
            [4.0, 0.0, 0.0],
            [0.0, 0.0, 2.0],
        ]));
        assert_eq!(&b * &a, mat::from_array([
            [0.0, 4.0, 0.0],
            [2.0, 2.0, 0.0],
            [0.0, 0.0, 2.0],
        ]));
    }
}
