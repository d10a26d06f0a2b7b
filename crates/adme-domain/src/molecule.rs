//! Molecular graph produced by the SMILES parser.
//!
//! The graph is the capability surface the descriptor layer works against:
//! atom/bond iteration, degree and adjacency queries, ring membership (see
//! [`crate::rings`]). Atoms carry implicit hydrogen counts assigned at parse
//! time, so no structure mutation happens after construction.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Bond order in half-units (single = 2, aromatic = 3), so that valence
    /// sums stay in integer arithmetic.
    pub fn half_units(self) -> u32 {
        match self {
            BondOrder::Single => 2,
            BondOrder::Double => 4,
            BondOrder::Triple => 6,
            BondOrder::Aromatic => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub atomic_number: u8,
    pub is_aromatic: bool,
    pub formal_charge: i8,
    pub implicit_hydrogens: u8,
    pub isotope: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    pub atom1: usize,
    pub atom2: usize,
    pub order: BondOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    /// adjacency[i] lists (neighbor atom index, bond index) pairs.
    pub adjacency: Vec<Vec<(usize, usize)>>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Heavy-atom degree of atom `i` (implicit hydrogens not counted).
    pub fn degree(&self, i: usize) -> usize {
        self.adjacency[i].len()
    }

    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.adjacency.push(Vec::new());
        self.atoms.len() - 1
    }

    pub fn add_bond(&mut self, atom1: usize, atom2: usize, order: BondOrder) -> usize {
        let idx = self.bonds.len();
        self.bonds.push(Bond { atom1, atom2, order });
        self.adjacency[atom1].push((atom2, idx));
        self.adjacency[atom2].push((atom1, idx));
        idx
    }

    /// Whether atom `i` participates in any double or triple bond.
    pub fn has_multiple_bond(&self, i: usize) -> bool {
        self.adjacency[i]
            .iter()
            .any(|&(_, b)| matches!(self.bonds[b].order, BondOrder::Double | BondOrder::Triple))
    }

    /// Total hydrogen count across all atoms (implicit plus explicit [H]).
    pub fn total_hydrogens(&self) -> usize {
        self.atoms
            .iter()
            .map(|a| {
                let implicit = a.implicit_hydrogens as usize;
                if a.atomic_number == 1 { implicit + 1 } else { implicit }
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carbon() -> Atom {
        Atom { atomic_number: 6, is_aromatic: false, formal_charge: 0, implicit_hydrogens: 0, isotope: 0 }
    }

    #[test]
    fn adjacency_tracks_bonds() {
        let mut mol = Molecule::new();
        let a = mol.add_atom(carbon());
        let b = mol.add_atom(carbon());
        let c = mol.add_atom(carbon());
        mol.add_bond(a, b, BondOrder::Single);
        mol.add_bond(b, c, BondOrder::Double);
        assert_eq!(mol.degree(a), 1);
        assert_eq!(mol.degree(b), 2);
        assert!(mol.has_multiple_bond(b));
        assert!(!mol.has_multiple_bond(a));
    }
}
