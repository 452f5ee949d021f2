/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::V3;

/// Conversions from arrays (and sequences of arrays) into `V3`s.
pub trait Envee {
    type En;

    fn envee(self) -> Self::En;
}

/// Conversions from `V3`s (and sequences of them) back into arrays.
pub trait Unvee {
    type Un;

    fn unvee(self) -> Self::Un;
}

impl Envee for [f64; 3] {
    type En = V3;

    #[inline(always)]
    fn envee(self) -> V3 { V3(self) }
}

impl Unvee for V3 {
    type Un = [f64; 3];

    #[inline(always)]
    fn unvee(self) -> [f64; 3] { self.0 }
}

impl Envee for Vec<[f64; 3]> {
    type En = Vec<V3>;

    fn envee(self) -> Vec<V3>
    { self.into_iter().map(V3).collect() }
}

impl Unvee for Vec<V3> {
    type Un = Vec<[f64; 3]>;

    fn unvee(self) -> Vec<[f64; 3]>
    { self.into_iter().map(|v| v.0).collect() }
}

impl<'a> Envee for &'a [[f64; 3]] {
    type En = Vec<V3>;

    fn envee(self) -> Vec<V3>
    { self.iter().cloned().map(V3).collect() }
}

impl<'a> Unvee for &'a [V3] {
    type Un = Vec<[f64; 3]>;

    fn unvee(self) -> Vec<[f64; 3]>
    { self.iter().map(|v| v.0).collect() }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn there_and_back() {
        let arrays = vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let vees = arrays.clone().envee();
        assert_eq!(vees[1], V3([4.0, 5.0, 6.0]));
        assert_eq!(vees.unvee(), arrays);
        assert_eq!((&arrays[..]).envee()[0].unvee(), arrays[0]);
    }
}
