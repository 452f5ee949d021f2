/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use isrt_structure::{Element, consts};

use crate::Reference;

/// Parameters of one insertion run.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Species of the inserted atoms.
    pub element: Element,
    /// Number of atoms to insert.
    pub count: usize,
    /// Smallest allowed minimum image distance to any other atom.
    pub min_distance: f64,
    /// Number of candidates to draw before giving up.
    pub max_iterations: usize,
    /// Gap between the top of the low group and the bottom of the window.
    pub dist_from_low: f64,
    /// Gap between the top of the window and the top of the high group.
    pub dist_from_high: f64,
}

impl Request {
    /// A request for a single atom of the given species, with default distances.
    pub fn new(element: Element) -> Self
    {
        Request {
            element,
            count: 1,
            min_distance: 1.8,
            max_iterations: 1000,
            dist_from_low: 2.0,
            dist_from_high: 3.0,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError>
    {
        if !(self.min_distance.is_finite() && self.min_distance > 0.0) {
            return Err(ConfigurationError::BadMinDistance(self.min_distance));
        }
        if self.count == 0 {
            return Err(ConfigurationError::ZeroCount);
        }
        if self.max_iterations == 0 {
            return Err(ConfigurationError::ZeroIterations);
        }
        for &(name, value) in &[("dist-from-low", self.dist_from_low), ("dist-from-high", self.dist_from_high)] {
            if !value.is_finite() {
                return Err(ConfigurationError::NonFiniteOffset { name, value });
            }
        }
        Ok(())
    }
}

impl Default for Request {
    fn default() -> Self { Request::new(consts::FLUORINE) }
}

/// The inputs to an insertion run cannot produce a meaningful result.
///
/// Running out of iterations is not one of these; see `Placement::shortfall`.
#[derive(Debug, Fail, Clone, PartialEq)]
pub enum ConfigurationError {
    #[fail(display = "the lattice is degenerate (volume {})", volume)]
    DegenerateCell { volume: f64 },

    #[fail(display = "the structure has no {} atoms to bound the insertion window", _0)]
    EmptyGroup(Reference),

    #[fail(display = "min-distance must be positive and finite (got {})", _0)]
    BadMinDistance(f64),

    #[fail(display = "the number of atoms to insert must be at least 1")]
    ZeroCount,

    #[fail(display = "max-iterations must be at least 1")]
    ZeroIterations,

    #[fail(display = "{} must be finite (got {})", name, value)]
    NonFiniteOffset { name: &'static str, value: f64 },

    #[fail(display = "structure has {} positions but {} elements", positions, elements)]
    LengthMismatch { positions: usize, elements: usize },
}
