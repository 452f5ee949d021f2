/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use isrt_array_types::V3;

use crate::Lattice;

/// Width of the margin below zero that is considered part of the unit cell.
///
/// Fractional coordinates are wrapped into `[-WRAP_EPS, 1 - WRAP_EPS)`.
/// Without the margin, a site sitting exactly on a cell face would flip to the
/// opposite face whenever roundoff pushes it slightly negative.
pub const WRAP_EPS: f64 = 1e-7;

/// Wraps fractional coordinates into the canonical image.
#[inline]
pub fn wrap_frac(frac: V3) -> V3
{
    frac.map(|x| {
        let x = x + WRAP_EPS;
        let x = x - x.floor(); // -> [0.0, 1.0]
        let x = x - x.floor(); // -> [0.0, 1.0)
        x - WRAP_EPS
    })
}

/// Wraps a cartesian position into the canonical image of the unit cell.
///
/// Applying this twice is the same as applying it once.
#[inline]
pub fn wrap_cart(lattice: &Lattice, cart: V3) -> V3
{ wrap_frac(cart / lattice) * lattice }

/// Reduces a cartesian displacement to its minimum image.
///
/// Each fractional component is reduced into `[-0.5, 0.5]` by subtracting
/// the nearest integer.  For strongly skewed cells this is not always the
/// shortest vector among all images, but it is the convention the insertion
/// code is defined in terms of.
#[inline]
pub fn min_image_cart(lattice: &Lattice, diff: V3) -> V3
{
    let frac = diff / lattice;
    diff - frac.map(f64::round) * lattice
}

/// Distance between two cartesian points under the minimum image convention.
#[inline]
pub fn min_image_distance(lattice: &Lattice, a: &V3, b: &V3) -> f64
{ min_image_cart(lattice, a - b).norm() }

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, StdRng};

    fn random_v3(rng: &mut impl Rng, max: f64) -> V3
    { V3([rng.gen_range(-max, max), rng.gen_range(-max, max), rng.gen_range(-max, max)]) }

    fn seeded_rng() -> StdRng
    { StdRng::from_seed(&[0x1537_usize][..]) }

    fn skewed() -> Lattice {
        Lattice::from(&[
            [3.0, 0.0, 0.0],
            [-1.5, 2.598076211353316, 0.0],
            [0.4, 0.3, 12.0],
        ])
    }

    #[test]
    fn wrap_into_cell() {
        let lattice = Lattice::cubic(10.0);
        assert_close!(abs=1e-12, wrap_cart(&lattice, V3([12.0, -3.0, 5.0])), V3([2.0, 7.0, 5.0]));
        assert_close!(abs=1e-12, wrap_cart(&lattice, V3([-20.0, 30.0, 9.5])), V3([0.0, 0.0, 9.5]));
    }

    #[test]
    fn wrap_keeps_face_sites() {
        let lattice = Lattice::cubic(10.0);
        // slightly negative due to roundoff; must not jump to the far face
        let v = V3([-1e-12, 0.0, 5.0]);
        assert_close!(abs=1e-9, wrap_cart(&lattice, v), v);
    }

    #[test]
    fn wrap_is_idempotent() {
        let mut rng = seeded_rng();
        let lattice = skewed();
        for _ in 0..200 {
            let v = random_v3(&mut rng, 30.0);
            let once = wrap_cart(&lattice, v);
            let twice = wrap_cart(&lattice, once);
            assert_close!(abs=1e-9, once, twice);

            // differs from the input by a lattice vector
            let frac_shift = (v - once) / &lattice;
            assert_close!(abs=1e-9, frac_shift, frac_shift.map(f64::round));
        }
    }

    #[test]
    fn wrap_noop_inside_cell() {
        let lattice = skewed();
        let v = V3([0.1, 0.5, 0.9]) * &lattice;
        assert_close!(abs=1e-12, wrap_cart(&lattice, v), v);
    }

    #[test]
    fn min_image_across_faces() {
        let lattice = Lattice::cubic(10.0);
        let a = V3([0.5, 5.0, 5.0]);
        let b = V3([9.5, 5.0, 5.0]);
        assert_close!((a - b).norm(), 9.0);
        assert_close!(abs=1e-12, min_image_distance(&lattice, &a, &b), 1.0);
        assert_close!(abs=1e-12, min_image_cart(&lattice, a - b), V3([1.0, 0.0, 0.0]));
    }

    #[test]
    fn min_image_is_symmetric() {
        let mut rng = seeded_rng();
        let lattice = skewed();
        for _ in 0..200 {
            let a = random_v3(&mut rng, 20.0);
            let b = random_v3(&mut rng, 20.0);
            let ab = min_image_distance(&lattice, &a, &b);
            let ba = min_image_distance(&lattice, &b, &a);
            assert_close!(abs=1e-9, ab, ba);
            assert!(ab <= (a - b).norm() + 1e-9);

            // invariant under translating either point by a lattice vector
            let shifted = a + V3([2.0, -1.0, 3.0]) * &lattice;
            assert_close!(abs=1e-9, min_image_distance(&lattice, &shifted, &b), ab);
        }
    }
}
