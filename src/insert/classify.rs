/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::collections::BTreeSet;
use std::fmt;

use isrt_structure::{Element, consts};

/// Which reference group an atom belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Reference {
    /// The group whose top bounds the window from below (e.g. a slab).
    Low,
    /// The group whose top bounds the window from above (e.g. water).
    High,
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Reference::Low => write!(f, "reference-low"),
            Reference::High => write!(f, "reference-high"),
        }
    }
}

/// Assigns each species of the input structure to a reference group.
pub trait Classify {
    fn classify(&self, element: Element) -> Reference;
}

impl<F> Classify for F
where F: Fn(Element) -> Reference,
{
    fn classify(&self, element: Element) -> Reference
    { self(element) }
}

/// Classifies the listed species as [`Reference::High`], and everything else as low.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesSet {
    high: BTreeSet<Element>,
}

impl SpeciesSet {
    pub fn new(high: impl IntoIterator<Item=Element>) -> Self
    { SpeciesSet { high: high.into_iter().collect() } }

    /// Hydrogen and oxygen, i.e. a slab under water.
    pub fn water() -> Self
    { Self::new(vec![consts::HYDROGEN, consts::OXYGEN]) }

    pub fn contains(&self, element: Element) -> bool
    { self.high.contains(&element) }

    pub fn iter(&self) -> impl Iterator<Item=Element> + '_
    { self.high.iter().cloned() }
}

impl Default for SpeciesSet {
    fn default() -> Self { SpeciesSet::water() }
}

impl Classify for SpeciesSet {
    fn classify(&self, element: Element) -> Reference
    {
        match self.contains(element) {
            true => Reference::High,
            false => Reference::Low,
        }
    }
}
