//! Element data used by the parser and the descriptor layer.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Static per-element record. `valences` lists the standard valences in
/// ascending order; an empty list means the element never receives implicit
/// hydrogens (bracket-only atoms such as metals).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementData {
    pub symbol: &'static str,
    pub atomic_number: u8,
    pub atomic_weight: f64,
    pub valences: &'static [u8],
}

/// Standard average atomic weights (IUPAC 2021, rounded).
static ELEMENTS: &[ElementData] = &[
    ElementData { symbol: "H", atomic_number: 1, atomic_weight: 1.008, valences: &[1] },
    ElementData { symbol: "He", atomic_number: 2, atomic_weight: 4.003, valences: &[] },
    ElementData { symbol: "Li", atomic_number: 3, atomic_weight: 6.94, valences: &[] },
    ElementData { symbol: "Be", atomic_number: 4, atomic_weight: 9.012, valences: &[] },
    ElementData { symbol: "B", atomic_number: 5, atomic_weight: 10.81, valences: &[3] },
    ElementData { symbol: "C", atomic_number: 6, atomic_weight: 12.011, valences: &[4] },
    ElementData { symbol: "N", atomic_number: 7, atomic_weight: 14.007, valences: &[3, 5] },
    ElementData { symbol: "O", atomic_number: 8, atomic_weight: 15.999, valences: &[2] },
    ElementData { symbol: "F", atomic_number: 9, atomic_weight: 18.998, valences: &[1] },
    ElementData { symbol: "Na", atomic_number: 11, atomic_weight: 22.990, valences: &[] },
    ElementData { symbol: "Mg", atomic_number: 12, atomic_weight: 24.305, valences: &[] },
    ElementData { symbol: "Al", atomic_number: 13, atomic_weight: 26.982, valences: &[] },
    ElementData { symbol: "Si", atomic_number: 14, atomic_weight: 28.085, valences: &[4] },
    ElementData { symbol: "P", atomic_number: 15, atomic_weight: 30.974, valences: &[3, 5] },
    ElementData { symbol: "S", atomic_number: 16, atomic_weight: 32.06, valences: &[2, 4, 6] },
    ElementData { symbol: "Cl", atomic_number: 17, atomic_weight: 35.45, valences: &[1] },
    ElementData { symbol: "K", atomic_number: 19, atomic_weight: 39.098, valences: &[] },
    ElementData { symbol: "Ca", atomic_number: 20, atomic_weight: 40.078, valences: &[] },
    ElementData { symbol: "Fe", atomic_number: 26, atomic_weight: 55.845, valences: &[] },
    ElementData { symbol: "Cu", atomic_number: 29, atomic_weight: 63.546, valences: &[] },
    ElementData { symbol: "Zn", atomic_number: 30, atomic_weight: 65.38, valences: &[] },
    ElementData { symbol: "As", atomic_number: 33, atomic_weight: 74.922, valences: &[3, 5] },
    ElementData { symbol: "Se", atomic_number: 34, atomic_weight: 78.971, valences: &[2, 4, 6] },
    ElementData { symbol: "Br", atomic_number: 35, atomic_weight: 79.904, valences: &[1] },
    ElementData { symbol: "Ag", atomic_number: 47, atomic_weight: 107.868, valences: &[] },
    ElementData { symbol: "Sn", atomic_number: 50, atomic_weight: 118.710, valences: &[] },
    ElementData { symbol: "I", atomic_number: 53, atomic_weight: 126.904, valences: &[1] },
    ElementData { symbol: "Pt", atomic_number: 78, atomic_weight: 195.084, valences: &[] },
    ElementData { symbol: "Au", atomic_number: 79, atomic_weight: 196.967, valences: &[] },
    ElementData { symbol: "Hg", atomic_number: 80, atomic_weight: 200.592, valences: &[] },
];

static BY_SYMBOL: Lazy<HashMap<&'static str, &'static ElementData>> =
    Lazy::new(|| ELEMENTS.iter().map(|e| (e.symbol, e)).collect());

pub fn element_by_symbol(symbol: &str) -> Option<&'static ElementData> {
    BY_SYMBOL.get(symbol).copied()
}

pub fn element_by_number(atomic_number: u8) -> Option<&'static ElementData> {
    ELEMENTS.iter().find(|e| e.atomic_number == atomic_number)
}

/// Elements that may be written without brackets in SMILES.
pub fn in_organic_subset(atomic_number: u8) -> bool {
    matches!(atomic_number, 5 | 6 | 7 | 8 | 9 | 15 | 16 | 17 | 35 | 53)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_symbol() {
        assert_eq!(element_by_symbol("C").unwrap().atomic_number, 6);
        assert_eq!(element_by_symbol("Cl").unwrap().atomic_number, 17);
        assert!(element_by_symbol("Xx").is_none());
    }

    #[test]
    fn lookup_by_number() {
        assert_eq!(element_by_number(8).unwrap().symbol, "O");
        assert!(element_by_number(119).is_none());
    }

    #[test]
    fn organic_subset_membership() {
        assert!(in_organic_subset(6));
        assert!(in_organic_subset(35));
        assert!(!in_organic_subset(26));
    }
}
