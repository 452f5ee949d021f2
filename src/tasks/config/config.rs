/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#![allow(non_snake_case)]

// NOTE: Please make sure to use the YamlRead trait when deserializing these types!

use isrt_structure::Element;
use isrt_structure::consts::{FLUORINE, HYDROGEN, OXYGEN};

use crate::YamlRead;

/// Root settings object.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    #[serde(default)]
    pub insert: InsertSettings,

    #[serde(default)]
    pub output: OutputSettings,
}
derive_yaml_read!{Settings}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct InsertSettings {
    /// Species to insert.
    #[serde(default="_insert__element")]
    pub element: Element,

    /// Number of atoms to insert.
    #[serde(default="_insert__count")]
    pub count: usize,

    /// Smallest allowed distance (minimum image) from an inserted atom to any other atom.
    #[serde(default="_insert__min_distance")]
    pub min_distance: f64,

    /// Number of random candidates to try before giving up.
    #[serde(default="_insert__max_iterations")]
    pub max_iterations: usize,

    /// The bottom of the insertion window sits this far above the highest
    /// atom that is not one of `high-species`.
    #[serde(default="_insert__dist_from_low")]
    pub dist_from_low: f64,

    /// The top of the insertion window sits this far below the highest
    /// atom of `high-species`.
    #[serde(default="_insert__dist_from_high")]
    pub dist_from_high: f64,

    /// Species that form the upper reference group (by default, water).
    #[serde(default="_insert__high_species")]
    pub high_species: Vec<Element>,

    /// Seed for the random number generator.  `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Treat a shortfall (fewer atoms placed than requested) as an error.
    #[serde(default)]
    pub fail_on_shortfall: bool,
}
fn _insert__element() -> Element { FLUORINE }
fn _insert__count() -> usize { 1 }
fn _insert__min_distance() -> f64 { 1.8 }
fn _insert__max_iterations() -> usize { 1000 }
fn _insert__dist_from_low() -> f64 { 2.0 }
fn _insert__dist_from_high() -> f64 { 3.0 }
fn _insert__high_species() -> Vec<Element> { vec![HYDROGEN, OXYGEN] }

impl Default for InsertSettings {
    fn default() -> Self {
        InsertSettings {
            element: _insert__element(),
            count: _insert__count(),
            min_distance: _insert__min_distance(),
            max_iterations: _insert__max_iterations(),
            dist_from_low: _insert__dist_from_low(),
            dist_from_high: _insert__dist_from_high(),
            high_species: _insert__high_species(),
            seed: None,
            fail_on_shortfall: false,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct OutputSettings {
    /// Coordinate block used when writing a POSCAR.
    #[serde(default)]
    pub coords: CoordsChoice,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CoordsChoice {
    Frac,
    Cart,
}

impl Default for CoordsChoice {
    fn default() -> Self { CoordsChoice::Frac }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use isrt_structure::consts::SULFUR;

    #[test]
    fn empty_is_default() {
        let settings = Settings::from_reader("{}".as_bytes()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.insert.element, FLUORINE);
        assert_eq!(settings.insert.high_species, vec![HYDROGEN, OXYGEN]);
        assert_eq!(settings.output.coords, CoordsChoice::Frac);
    }

    #[test]
    fn kebab_case_keys() {
        let text = "\
insert:
  element: s
  count: 4
  min-distance: 2.5
  max-iterations: 50
  dist-from-low: 1.0
  dist-from-high: 0.5
  high-species: [O]
  seed: 42
  fail-on-shortfall: true
output:
  coords: cart
";
        let settings = Settings::from_reader(text.as_bytes()).unwrap();
        let insert = settings.insert;
        assert_eq!(insert.element, SULFUR);
        assert_eq!(insert.count, 4);
        assert_eq!(insert.min_distance, 2.5);
        assert_eq!(insert.max_iterations, 50);
        assert_eq!(insert.dist_from_low, 1.0);
        assert_eq!(insert.dist_from_high, 0.5);
        assert_eq!(insert.high_species, vec![OXYGEN]);
        assert_eq!(insert.seed, Some(42));
        assert!(insert.fail_on_shortfall);
        assert_eq!(settings.output.coords, CoordsChoice::Cart);
    }

    #[test]
    fn bad_values() {
        assert!(Settings::from_reader("insert: {element: Xq}".as_bytes()).is_err());
        assert!(Settings::from_reader("output: {coords: polar}".as_bytes()).is_err());
        assert!(Settings::from_reader("insert: {count: -1}".as_bytes()).is_err());
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        // (they are logged as warnings)
        let settings = Settings::from_reader("insert: {min-distnace: 1.0}".as_bytes()).unwrap();
        assert_eq!(settings.insert.min_distance, 1.8);
    }

    #[test]
    fn echo() {
        let settings = Settings::default();
        let text = crate::to_yaml_string(&settings).unwrap();
        let value = crate::value_from_str(&text).unwrap();
        assert_eq!(Settings::from_value(value).unwrap(), settings);
    }
}
