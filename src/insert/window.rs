/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;

use itertools::{Itertools, MinMaxResult};
use rand::Rng;

use isrt_array_types::V3;
use isrt_structure::Element;

use crate::{Classify, Reference, ConfigurationError};

/// A closed range of one cartesian coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    pub fn new(lo: f64, hi: f64) -> Self
    { Interval { lo, hi } }

    /// An inverted interval (`lo > hi`) contains nothing.
    pub fn is_empty(&self) -> bool
    { self.lo > self.hi }

    pub fn contains(&self, x: f64) -> bool
    { self.lo <= x && x <= self.hi }

    pub fn width(&self) -> f64
    { self.hi - self.lo }

    /// Draw uniformly from `[lo, hi)` (or exactly `lo` if the width is zero).
    ///
    /// Must not be called on an empty interval.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64
    {
        debug_assert!(!self.is_empty());
        self.lo + self.width() * rng.gen::<f64>()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { write!(f, "[{}, {}]", self.lo, self.hi) }
}

/// Axis-aligned box that candidates are drawn from, before wrapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Window {
    /// Derive the window from the current positions.
    ///
    /// * `x` and `y` span the bounding box of every atom.
    /// * `z` runs from `dist_from_low` above the highest low atom
    ///   to `dist_from_high` below the highest high atom.
    ///
    /// Fails if either reference group has no atoms.  An inverted `z` is not an error.
    pub fn from_structure<C: Classify + ?Sized>(
        carts: &[V3],
        elements: &[Element],
        classifier: &C,
        dist_from_low: f64,
        dist_from_high: f64,
    ) -> Result<Self, ConfigurationError>
    {
        if carts.len() != elements.len() {
            return Err(ConfigurationError::LengthMismatch {
                positions: carts.len(),
                elements: elements.len(),
            });
        }

        let top_of = |group: Reference| {
            carts.iter().zip_eq(elements)
                .filter(|&(_, &elem)| classifier.classify(elem) == group)
                .map(|(v, _)| v[2])
                .fold(None, |acc: Option<f64>, z| Some(acc.map_or(z, |acc| acc.max(z))))
                .ok_or(ConfigurationError::EmptyGroup(group))
        };
        let low_top = top_of(Reference::Low)?;
        let high_top = top_of(Reference::High)?;

        Ok(Window {
            x: bounds(carts.iter().map(|v| v[0])),
            y: bounds(carts.iter().map(|v| v[1])),
            z: Interval::new(low_top + dist_from_low, high_top - dist_from_high),
        })
    }

    pub fn is_empty(&self) -> bool
    { self.x.is_empty() || self.y.is_empty() || self.z.is_empty() }

    pub fn contains(&self, v: &V3) -> bool
    { self.x.contains(v[0]) && self.y.contains(v[1]) && self.z.contains(v[2]) }

    /// Draw a point, in the order x, y, z.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> V3
    {
        let x = self.x.sample(rng);
        let y = self.y.sample(rng);
        let z = self.z.sample(rng);
        V3([x, y, z])
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { write!(f, "x: {}, y: {}, z: {}", self.x, self.y, self.z) }
}

// callers guarantee at least one value
fn bounds(values: impl Iterator<Item=f64>) -> Interval
{
    match values.minmax_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)) {
        MinMaxResult::NoElements => Interval::new(0.0, 0.0),
        MinMaxResult::OneElement(x) => Interval::new(x, x),
        MinMaxResult::MinMax(lo, hi) => Interval::new(lo, hi),
    }
}
