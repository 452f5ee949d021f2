/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use ansi_term::Style;

// hack for type inference issues
pub fn paint<T>(style: Style, value: T) -> Wrapper<T, T>
{ gpaint(style, value) }

pub fn gpaint<U, T>(style: Style, value: U) -> Wrapper<U, T>
{ Wrapper { style, value, _target: PhantomData } }

/// A wrapper for colorizing `Display` and `Debug` output.
///
/// It has two parameters so that it can `borrow()` `U` as `T` when it wants to.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Wrapper<U, T=U> {
    style: Style,
    value: U,
    _target: PhantomData<T>,
}

macro_rules! derive_fmt_impl {
    ($Trait:path) => {
        impl<U, T> $Trait for Wrapper<U, T>
        where
            U: Borrow<T>,
            T: $Trait,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.style.prefix())?;
                T::fmt(self.value.borrow(), f)?;
                write!(f, "{}", self.style.suffix())?;
                Ok(())
            }
        }
    };
}

derive_fmt_impl!{fmt::Display}
derive_fmt_impl!{fmt::LowerExp}
