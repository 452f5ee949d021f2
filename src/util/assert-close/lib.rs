/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Approximate equality assertions for floating point data.
//!
//! ```
//! # #[macro_use] extern crate isrt_assert_close;
//! # fn main() {
//! assert_close!(abs=1e-12, 0.1 + 0.2, 0.3);
//! assert_close!(rel=1e-9, vec![1.0, 2.0], vec![1.0, 2.0 + 1e-12]);
//! # }
//! ```

#[macro_use]
extern crate failure;

use std::fmt;

/// Relative tolerance used when none is given.
pub const DEFAULT_REL_TOL: f64 = 1e-9;

/// Asserts that two values are close, panicking with both values if not.
///
/// Tolerances may be given as leading `abs=` and/or `rel=` arguments.
/// Unless specified, `rel` is [`DEFAULT_REL_TOL`] and `abs` is zero.
#[macro_export]
macro_rules! assert_close {
    (abs=$abs:expr, rel=$rel:expr, $($rest:tt)+) => {
        $crate::__assert_close_args!{[$abs, $rel] $($rest)+}
    };
    (rel=$rel:expr, abs=$abs:expr, $($rest:tt)+) => {
        $crate::__assert_close_args!{[$abs, $rel] $($rest)+}
    };
    (abs=$abs:expr, $($rest:tt)+) => {
        $crate::__assert_close_args!{[$abs, $crate::DEFAULT_REL_TOL] $($rest)+}
    };
    (rel=$rel:expr, $($rest:tt)+) => {
        $crate::__assert_close_args!{[0.0, $rel] $($rest)+}
    };
    ($($rest:tt)+) => {
        $crate::__assert_close_args!{[0.0, $crate::DEFAULT_REL_TOL] $($rest)+}
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_close_args {
    ([$abs:expr, $rel:expr] $a:expr, $b:expr $(,)*) => {
        $crate::__assert_close_args!{[$abs, $rel] $a, $b, "not nearly equal!"}
    };
    ([$abs:expr, $rel:expr] $a:expr, $b:expr, $($fmt:tt)+) => {{
        let tol = $crate::Tolerances { abs: $abs, rel: $rel };
        let (a, b) = (&$a, &$b);
        if let Err(e) = $crate::CheckClose::check_close(a, b, tol) {
            panic!(
                "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                format!($($fmt)+), tol.rel, tol.abs, a, b, e,
            );
        }
    }};
}

/// Test closeness of two floats.  (the algorithm of Python's `math.isclose`)
#[doc(hidden)]
#[inline]
pub fn is_close(a: f64, b: f64, tol: Tolerances) -> bool {
    assert!(tol.rel >= 0.0);
    assert!(tol.abs >= 0.0);

    // catch infinities of same sign
    if a == b { return true; }

    // catch infinities of opposite sign, avoiding infinite relative tolerance
    if a.is_infinite() || b.is_infinite() { return false; }

    // case for general values and NaN.
    (a - b).abs() <= tol.abs.max(tol.rel * a.abs()).max(tol.rel * b.abs())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

/// The first pair of elements found to differ.
#[derive(Debug, Fail)]
pub struct CheckCloseError {
    pub values: (f64, f64),
    pub tol: Tolerances,
}

impl fmt::Display for CheckCloseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, right) = self.values;
        write!(f, "failed at:\n  left: {:?}\n right: {:?}\n   tol: {:?}", left, right, self.tol)
    }
}

pub trait CheckClose {
    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError>
    {
        match is_close(*self, *other, tol) {
            true => Ok(()),
            false => Err(CheckCloseError { values: (*self, *other), tol }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { T::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError>
    {
        assert_eq!(self.len(), other.len(), "length mismatch in check_close");
        self.iter().zip(other)
            .map(|(a, b)| a.check_close(b, tol))
            .collect()
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Vec<T>, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose for [T; 3] {
    fn check_close(&self, other: &[T; 3], tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose for Option<T> {
    fn check_close(&self, other: &Option<T>, tol: Tolerances) -> Result<(), CheckCloseError>
    {
        match (self, other) {
            (Some(a), Some(b)) => a.check_close(b, tol),
            (None, None) => Ok(()),
            // no meaningful values to report
            _ => Err(CheckCloseError { values: (std::f64::NAN, std::f64::NAN), tol }),
        }
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn macro_output_can_compile() {
        assert_close!(1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0);
        assert_close!(abs=1e-8, rel=1e-8, 1.0, 1.0,);
        assert_close!(abs=1e-8, 1.0, 1.0, "with a {}", "message");
    }

    #[test]
    fn method_chains_parse() {
        #[derive(Debug)] struct S;
        impl S { fn x(self) -> S { self } }
        impl CheckClose for S {
            fn check_close(&self, _: &S, _: Tolerances) -> Result<(), CheckCloseError> { Ok(()) }
        }
        assert_close!(
            abs=1e-10,
            S.x().x().x(),
            S.x().x().x(),
        );
    }

    #[test]
    fn sequences() {
        assert_close!(abs=1e-3, vec![1.0, 2.0], vec![1.0005, 1.9995]);
        assert_close!([0.0, 0.0, 1.0], [0.0, 0.0, 1.0 + 1e-12]);
        assert_close!(Some(2.0), Some(2.0));
    }

    #[test]
    #[should_panic(expected = "not nearly equal")]
    fn not_close() {
        assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }

    #[test]
    #[should_panic]
    fn zero_needs_abs() {
        // relative tolerance alone can never accept a difference from zero
        assert_close!(0.0, 1e-300);
    }
}
