/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::collections::HashMap;
use std::fmt;
use std::str;

/// A chemical element, identified by atomic number.
///
/// Only the 118 named elements are representable, so that `symbol` and `name`
/// can hand out `&'static str`s.
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Element(u16);

pub const MAX_ATOMIC_NUMBER: u32 = 118;

#[derive(Debug, Fail)]
#[fail(display = "unable to parse {}: {:?}", kind, text)]
pub struct ElementParseError {
    text: String,
    kind: &'static str, // "element", "element symbol", "POTCAR label"
}

impl ElementParseError {
    fn new(kind: &'static str, s: &str) -> Self
    { ElementParseError { text: s.to_string(), kind } }
}

impl Element {
    pub fn from_atomic_number(n: u32) -> Option<Self>
    {
        if Self::is_valid_number(n) { Some(Element(n as u16)) }
        else { None }
    }

    fn is_valid_number(n: u32) -> bool
    { 1 <= n && n <= MAX_ATOMIC_NUMBER }

    /// Look up an element by its exact (case-sensitive) symbol.
    pub fn from_symbol(s: &str) -> Result<Self, ElementParseError>
    {
        let &n = SYMBOL_TO_NUMBER.get(s).ok_or_else(|| ElementParseError::new("element symbol", s))?;
        debug_assert!(Self::is_valid_number(n.into()));
        Ok(Element(n))
    }

    /// Parse a symbol in the style written by VASP in POSCAR and OUTCAR files.
    ///
    /// These may carry a pseudopotential suffix (`"Mo_pv"`, `"O_h"`) or a hash
    /// (`"Fe/3d7a"`).  Everything from the first `_` or `/` is ignored.
    pub fn from_potcar_label(label: &str) -> Result<Self, ElementParseError>
    {
        let trimmed = label.trim();
        let symbol = trimmed.split(|c| c == '_' || c == '/').next().unwrap_or(trimmed);
        Element::from_symbol(symbol).map_err(|_| ElementParseError::new("POTCAR label", label))
    }

    pub fn atomic_number(&self) -> u32
    { self.0.into() }

    pub fn symbol(&self) -> &'static str
    { ELEMENT_TABLE[self.index()].1 }

    pub fn name(&self) -> &'static str
    { ELEMENT_TABLE[self.index()].2 }

    fn index(&self) -> usize
    { usize::from(self.0) - 1 }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Display::fmt(self.symbol(), f) }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match f.alternate() {
            false => fmt::Debug::fmt(self.symbol(), f),
            true  => fmt::Debug::fmt(self.name(), f),
        }
    }
}

/// Accepts a symbol or a name, in any case.
impl str::FromStr for Element {
    type Err = ElementParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        let &n = LOOSE_TO_NUMBER.get(&canonicalize(s)).ok_or_else(|| ElementParseError::new("element", s))?;
        debug_assert!(Self::is_valid_number(n.into()));
        Ok(Element(n))
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Serialize, Deserialize, ser, de};

    impl Serialize for Element {
        fn serialize<S: ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.symbol().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Element {
        fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            // owned, because YAML documents don't always hand out borrowed strs
            let raw = String::deserialize(deserializer)?;
            raw.parse().map_err(|_| {
                de::Error::invalid_value(de::Unexpected::Str(&raw), &"an element name or symbol")
            })
        }
    }
}

fn canonicalize(s: &str) -> String {
    let mut s = s.trim().to_string();
    s.make_ascii_lowercase();
    s
}

lazy_static!{
    static ref SYMBOL_TO_NUMBER: HashMap<&'static str, u16> = {
        ELEMENT_TABLE.iter()
            .map(|&(num, sym, _)| (sym, num))
            .collect()
    };

    static ref LOOSE_TO_NUMBER: HashMap<String, u16> = {
        let mut map = HashMap::new();
        for &(num, sym, name) in ELEMENT_TABLE {
            map.insert(canonicalize(sym), num);
            map.insert(canonicalize(name), num);
        }
        // common alternate spellings
        map.insert("aluminium".to_string(), 13);
        map.insert("cesium".to_string(), 55);
        map.insert("sulphur".to_string(), 16);
        map
    };
}

// (atomic number, symbol, name), indexed by atomic number - 1
const ELEMENT_TABLE: &[(u16, &str, &str)] = &[
    (  1,  "H", "Hydrogen"),
    (  2, "He", "Helium"),
    (  3, "Li", "Lithium"),
    (  4, "Be", "Beryllium"),
    (  5,  "B", "Boron"),
    (  6,  "C", "Carbon"),
    (  7,  "N", "Nitrogen"),
    (  8,  "O", "Oxygen"),
    (  9,  "F", "Fluorine"),
    ( 10, "Ne", "Neon"),
    ( 11, "Na", "Sodium"),
    ( 12, "Mg", "Magnesium"),
    ( 13, "Al", "Aluminum"),
    ( 14, "Si", "Silicon"),
    ( 15,  "P", "Phosphorus"),
    ( 16,  "S", "Sulfur"),
    ( 17, "Cl", "Chlorine"),
    ( 18, "Ar", "Argon"),
    ( 19,  "K", "Potassium"),
    ( 20, "Ca", "Calcium"),
    ( 21, "Sc", "Scandium"),
    ( 22, "Ti", "Titanium"),
    ( 23,  "V", "Vanadium"),
    ( 24, "Cr", "Chromium"),
    ( 25, "Mn", "Manganese"),
    ( 26, "Fe", "Iron"),
    ( 27, "Co", "Cobalt"),
    ( 28, "Ni", "Nickel"),
    ( 29, "Cu", "Copper"),
    ( 30, "Zn", "Zinc"),
    ( 31, "Ga", "Gallium"),
    ( 32, "Ge", "Germanium"),
    ( 33, "As", "Arsenic"),
    ( 34, "Se", "Selenium"),
    ( 35, "Br", "Bromine"),
    ( 36, "Kr", "Krypton"),
    ( 37, "Rb", "Rubidium"),
    ( 38, "Sr", "Strontium"),
    ( 39,  "Y", "Yttrium"),
    ( 40, "Zr", "Zirconium"),
    ( 41, "Nb", "Niobium"),
    ( 42, "Mo", "Molybdenum"),
    ( 43, "Tc", "Technetium"),
    ( 44, "Ru", "Ruthenium"),
    ( 45, "Rh", "Rhodium"),
    ( 46, "Pd", "Palladium"),
    ( 47, "Ag", "Silver"),
    ( 48, "Cd", "Cadmium"),
    ( 49, "In", "Indium"),
    ( 50, "Sn", "Tin"),
    ( 51, "Sb", "Antimony"),
    ( 52, "Te", "Tellurium"),
    ( 53,  "I", "Iodine"),
    ( 54, "Xe", "Xenon"),
    ( 55, "Cs", "Caesium"),
    ( 56, "Ba", "Barium"),
    ( 57, "La", "Lanthanum"),
    ( 58, "Ce", "Cerium"),
    ( 59, "Pr", "Praseodymium"),
    ( 60, "Nd", "Neodymium"),
    ( 61, "Pm", "Promethium"),
    ( 62, "Sm", "Samarium"),
    ( 63, "Eu", "Europium"),
    ( 64, "Gd", "Gadolinium"),
    ( 65, "Tb", "Terbium"),
    ( 66, "Dy", "Dysprosium"),
    ( 67, "Ho", "Holmium"),
    ( 68, "Er", "Erbium"),
    ( 69, "Tm", "Thulium"),
    ( 70, "Yb", "Ytterbium"),
    ( 71, "Lu", "Lutetium"),
    ( 72, "Hf", "Hafnium"),
    ( 73, "Ta", "Tantalum"),
    ( 74,  "W", "Tungsten"),
    ( 75, "Re", "Rhenium"),
    ( 76, "Os", "Osmium"),
    ( 77, "Ir", "Iridium"),
    ( 78, "Pt", "Platinum"),
    ( 79, "Au", "Gold"),
    ( 80, "Hg", "Mercury"),
    ( 81, "Tl", "Thallium"),
    ( 82, "Pb", "Lead"),
    ( 83, "Bi", "Bismuth"),
    ( 84, "Po", "Polonium"),
    ( 85, "At", "Astatine"),
    ( 86, "Rn", "Radon"),
    ( 87, "Fr", "Francium"),
    ( 88, "Ra", "Radium"),
    ( 89, "Ac", "Actinium"),
    ( 90, "Th", "Thorium"),
    ( 91, "Pa", "Protactinium"),
    ( 92,  "U", "Uranium"),
    ( 93, "Np", "Neptunium"),
    ( 94, "Pu", "Plutonium"),
    ( 95, "Am", "Americium"),
    ( 96, "Cm", "Curium"),
    ( 97, "Bk", "Berkelium"),
    ( 98, "Cf", "Californium"),
    ( 99, "Es", "Einsteinium"),
    (100, "Fm", "Fermium"),
    (101, "Md", "Mendelevium"),
    (102, "No", "Nobelium"),
    (103, "Lr", "Lawrencium"),
    (104, "Rf", "Rutherfordium"),
    (105, "Db", "Dubnium"),
    (106, "Sg", "Seaborgium"),
    (107, "Bh", "Bohrium"),
    (108, "Hs", "Hassium"),
    (109, "Mt", "Meitnerium"),
    (110, "Ds", "Darmstadtium"),
    (111, "Rg", "Roentgenium"),
    (112, "Cn", "Copernicium"),
    (113, "Nh", "Nihonium"),
    (114, "Fl", "Flerovium"),
    (115, "Mc", "Moscovium"),
    (116, "Lv", "Livermorium"),
    (117, "Ts", "Tennessine"),
    (118, "Og", "Oganesson"),
];

macro_rules! define_consts {
    (
        pub mod $consts:ident {
            $( pub const $NAME:ident: Element = Element($num:expr); )+
        }
    ) => {
        impl Element {
            $( pub const $NAME: Element = Element($num); )+
        }

        /// Every element as a constant, for unqualified imports.
        pub mod $consts {
            use super::*;

            $( pub const $NAME: Element = Element::$NAME; )+
        }
    };
}

define_consts! {
    pub mod consts {
        pub const HYDROGEN: Element = Element(1);
        pub const HELIUM: Element = Element(2);
        pub const LITHIUM: Element = Element(3);
        pub const BERYLLIUM: Element = Element(4);
        pub const BORON: Element = Element(5);
        pub const CARBON: Element = Element(6);
        pub const NITROGEN: Element = Element(7);
        pub const OXYGEN: Element = Element(8);
        pub const FLUORINE: Element = Element(9);
        pub const NEON: Element = Element(10);
        pub const SODIUM: Element = Element(11);
        pub const MAGNESIUM: Element = Element(12);
        pub const ALUMINUM: Element = Element(13);
        pub const SILICON: Element = Element(14);
        pub const PHOSPHORUS: Element = Element(15);
        pub const SULFUR: Element = Element(16);
        pub const CHLORINE: Element = Element(17);
        pub const ARGON: Element = Element(18);
        pub const POTASSIUM: Element = Element(19);
        pub const CALCIUM: Element = Element(20);
        pub const SCANDIUM: Element = Element(21);
        pub const TITANIUM: Element = Element(22);
        pub const VANADIUM: Element = Element(23);
        pub const CHROMIUM: Element = Element(24);
        pub const MANGANESE: Element = Element(25);
        pub const IRON: Element = Element(26);
        pub const COBALT: Element = Element(27);
        pub const NICKEL: Element = Element(28);
        pub const COPPER: Element = Element(29);
        pub const ZINC: Element = Element(30);
        pub const GALLIUM: Element = Element(31);
        pub const GERMANIUM: Element = Element(32);
        pub const ARSENIC: Element = Element(33);
        pub const SELENIUM: Element = Element(34);
        pub const BROMINE: Element = Element(35);
        pub const KRYPTON: Element = Element(36);
        pub const RUBIDIUM: Element = Element(37);
        pub const STRONTIUM: Element = Element(38);
        pub const YTTRIUM: Element = Element(39);
        pub const ZIRCONIUM: Element = Element(40);
        pub const NIOBIUM: Element = Element(41);
        pub const MOLYBDENUM: Element = Element(42);
        pub const TECHNETIUM: Element = Element(43);
        pub const RUTHENIUM: Element = Element(44);
        pub const RHODIUM: Element = Element(45);
        pub const PALLADIUM: Element = Element(46);
        pub const SILVER: Element = Element(47);
        pub const CADMIUM: Element = Element(48);
        pub const INDIUM: Element = Element(49);
        pub const TIN: Element = Element(50);
        pub const ANTIMONY: Element = Element(51);
        pub const TELLURIUM: Element = Element(52);
        pub const IODINE: Element = Element(53);
        pub const XENON: Element = Element(54);
        pub const CAESIUM: Element = Element(55);
        pub const BARIUM: Element = Element(56);
        pub const LANTHANUM: Element = Element(57);
        pub const CERIUM: Element = Element(58);
        pub const PRASEODYMIUM: Element = Element(59);
        pub const NEODYMIUM: Element = Element(60);
        pub const PROMETHIUM: Element = Element(61);
        pub const SAMARIUM: Element = Element(62);
        pub const EUROPIUM: Element = Element(63);
        pub const GADOLINIUM: Element = Element(64);
        pub const TERBIUM: Element = Element(65);
        pub const DYSPROSIUM: Element = Element(66);
        pub const HOLMIUM: Element = Element(67);
        pub const ERBIUM: Element = Element(68);
        pub const THULIUM: Element = Element(69);
        pub const YTTERBIUM: Element = Element(70);
        pub const LUTETIUM: Element = Element(71);
        pub const HAFNIUM: Element = Element(72);
        pub const TANTALUM: Element = Element(73);
        pub const TUNGSTEN: Element = Element(74);
        pub const RHENIUM: Element = Element(75);
        pub const OSMIUM: Element = Element(76);
        pub const IRIDIUM: Element = Element(77);
        pub const PLATINUM: Element = Element(78);
        pub const GOLD: Element = Element(79);
        pub const MERCURY: Element = Element(80);
        pub const THALLIUM: Element = Element(81);
        pub const LEAD: Element = Element(82);
        pub const BISMUTH: Element = Element(83);
        pub const POLONIUM: Element = Element(84);
        pub const ASTATINE: Element = Element(85);
        pub const RADON: Element = Element(86);
        pub const FRANCIUM: Element = Element(87);
        pub const RADIUM: Element = Element(88);
        pub const ACTINIUM: Element = Element(89);
        pub const THORIUM: Element = Element(90);
        pub const PROTACTINIUM: Element = Element(91);
        pub const URANIUM: Element = Element(92);
        pub const NEPTUNIUM: Element = Element(93);
        pub const PLUTONIUM: Element = Element(94);
        pub const AMERICIUM: Element = Element(95);
        pub const CURIUM: Element = Element(96);
        pub const BERKELIUM: Element = Element(97);
        pub const CALIFORNIUM: Element = Element(98);
        pub const EINSTEINIUM: Element = Element(99);
        pub const FERMIUM: Element = Element(100);
        pub const MENDELEVIUM: Element = Element(101);
        pub const NOBELIUM: Element = Element(102);
        pub const LAWRENCIUM: Element = Element(103);
        pub const RUTHERFORDIUM: Element = Element(104);
        pub const DUBNIUM: Element = Element(105);
        pub const SEABORGIUM: Element = Element(106);
        pub const BOHRIUM: Element = Element(107);
        pub const HASSIUM: Element = Element(108);
        pub const MEITNERIUM: Element = Element(109);
        pub const DARMSTADTIUM: Element = Element(110);
        pub const ROENTGENIUM: Element = Element(111);
        pub const COPERNICIUM: Element = Element(112);
        pub const NIHONIUM: Element = Element(113);
        pub const FLEROVIUM: Element = Element(114);
        pub const MOSCOVIUM: Element = Element(115);
        pub const LIVERMORIUM: Element = Element(116);
        pub const TENNESSINE: Element = Element(117);
        pub const OGANESSON: Element = Element(118);
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use super::consts::*;

    #[test]
    fn table_is_indexed_by_number() {
        for (i, &(num, _, _)) in ELEMENT_TABLE.iter().enumerate() {
            assert_eq!(usize::from(num), i + 1);
        }
        assert_eq!(ELEMENT_TABLE.len() as u32, MAX_ATOMIC_NUMBER);
    }

    #[test]
    fn lookups() {
        assert_eq!(Element::from_symbol("Mo").unwrap(), MOLYBDENUM);
        assert_eq!(Element::from_atomic_number(9), Some(FLUORINE));
        assert_eq!(Element::from_atomic_number(0), None);
        assert_eq!(Element::from_atomic_number(119), None);
        assert_eq!(OGANESSON.symbol(), "Og");
        assert_eq!(HYDROGEN.name(), "Hydrogen");
        assert_eq!(SULFUR.atomic_number(), 16);

        // exact symbols are case sensitive
        assert!(Element::from_symbol("MO").is_err());
        assert!(Element::from_symbol("Xx").is_err());
    }

    #[test]
    fn parse_loose() {
        assert_eq!("mo".parse::<Element>().unwrap(), MOLYBDENUM);
        assert_eq!("OXYGEN".parse::<Element>().unwrap(), OXYGEN);
        assert_eq!(" f ".parse::<Element>().unwrap(), FLUORINE);
        assert_eq!("aluminium".parse::<Element>().unwrap(), ALUMINUM);
        assert!("unobtainium".parse::<Element>().is_err());
    }

    #[test]
    fn potcar_labels() {
        assert_eq!(Element::from_potcar_label("Mo_pv").unwrap(), MOLYBDENUM);
        assert_eq!(Element::from_potcar_label("O_h").unwrap(), OXYGEN);
        assert_eq!(Element::from_potcar_label("Fe/3d7a").unwrap(), IRON);
        assert_eq!(Element::from_potcar_label("S").unwrap(), SULFUR);
        assert!(Element::from_potcar_label("_pv").is_err());
    }

    #[test]
    fn formatting() {
        assert_eq!(format!("{}", CARBON), "C");
        assert_eq!(format!("{:?}", CARBON), "\"C\"");
        assert_eq!(format!("{:#?}", CARBON), "\"Carbon\"");
    }
}
