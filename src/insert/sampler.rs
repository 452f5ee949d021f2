/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use rand::Rng;

use isrt_array_types::V3;
use isrt_structure::{Coords, CoordsKind, Element, Lattice};
use isrt_structure::periodic::{wrap_cart, min_image_distance};

use crate::{Classify, ConfigurationError, Request, Window};

/// Cells with `volume <= DEGENERATE_CELL_TOL * |a| |b| |c|` are rejected.
const DEGENERATE_CELL_TOL: f64 = 1e-8;

/// Outcome of an insertion run.
///
/// Placing fewer atoms than requested is not an error; check [`Placement::shortfall`].
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub element: Element,
    /// Accepted positions, wrapped into the cell, in order of acceptance.
    pub accepted: Vec<V3>,
    /// The same candidates as drawn from the window, before wrapping.
    pub proposed: Vec<V3>,
    /// Number of candidates drawn.
    pub attempts: usize,
    pub requested: usize,
    pub window: Window,
}

impl Placement {
    /// Number of requested atoms that could not be placed.
    pub fn shortfall(&self) -> usize
    { self.requested - self.accepted.len() }

    pub fn is_complete(&self) -> bool
    { self.shortfall() == 0 }
}

/// Find positions for `request.count` new atoms by rejection sampling.
///
/// `coords` and `elements` describe the existing structure; `classifier` splits it
/// into the groups that bound the window.  Each accepted atom is added to the set of
/// atoms that later candidates are checked against, so accepted atoms also keep
/// `min_distance` from each other.
///
/// The structure itself is not modified; see [`insert`].
pub fn place<C, R>(
    coords: &Coords,
    elements: &[Element],
    classifier: &C,
    request: &Request,
    rng: &mut R,
) -> Result<Placement, ConfigurationError>
where
    C: Classify + ?Sized,
    R: Rng,
{
    request.validate()?;
    let lattice = coords.lattice();
    if lattice.is_degenerate(DEGENERATE_CELL_TOL) {
        return Err(ConfigurationError::DegenerateCell { volume: lattice.volume() });
    }

    let mut existing = coords.to_carts();
    let window = Window::from_structure(
        &existing, elements, classifier,
        request.dist_from_low, request.dist_from_high,
    )?;
    debug!("insertion window: {}", window);

    let mut placement = Placement {
        element: request.element,
        accepted: vec![],
        proposed: vec![],
        attempts: 0,
        requested: request.count,
        window,
    };

    if window.z.is_empty() {
        warn!(
            "The insertion window is empty (z from {} to {}); no {} can be placed. \
            Try smaller values for dist-from-low and dist-from-high.",
            window.z.lo, window.z.hi, request.element,
        );
    } else {
        while placement.accepted.len() < request.count && placement.attempts < request.max_iterations {
            placement.attempts += 1;

            let proposed = window.sample(rng);
            let candidate = wrap_cart(lattice, proposed);
            let nearest = nearest_distance(lattice, &existing, &candidate);
            trace!("iteration {}: candidate {:?}, nearest atom at {}", placement.attempts, candidate, nearest);

            if nearest >= request.min_distance {
                debug!("{} added at {:?} (iteration {})", request.element, candidate, placement.attempts);
                existing.push(candidate);
                placement.accepted.push(candidate);
                placement.proposed.push(proposed);
            }
        }
    }

    info!(
        "Placed {} of {} {} atoms in {} iterations.",
        placement.accepted.len(), request.count, request.element, placement.attempts,
    );
    if !placement.is_complete() {
        warn!(
            "Could not place {} {} atoms due to lack of space.",
            placement.shortfall(), request.element,
        );
    }
    Ok(placement)
}

/// Append the atoms of a placement to the end of a structure.
///
/// Nothing is modified if `coords` and `elements` disagree in length.
pub fn insert(
    coords: &mut Coords,
    elements: &mut Vec<Element>,
    placement: &Placement,
) -> Result<(), ConfigurationError>
{
    if coords.num_atoms() != elements.len() {
        return Err(ConfigurationError::LengthMismatch {
            positions: coords.num_atoms(),
            elements: elements.len(),
        });
    }
    coords.extend(CoordsKind::Carts(placement.accepted.clone()));
    elements.extend(placement.accepted.iter().map(|_| placement.element));
    Ok(())
}

// Smallest minimum image distance from `candidate` to any atom in `existing`.
fn nearest_distance(lattice: &Lattice, existing: &[V3], candidate: &V3) -> f64
{
    existing.iter()
        .map(|v| min_image_distance(lattice, candidate, v))
        .fold(std::f64::INFINITY, f64::min)
}
