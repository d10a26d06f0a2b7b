use std::collections::HashMap;

use crate::element::element_by_number;
use crate::error::ParseError;
use crate::molecule::{Atom, BondOrder, Molecule};
use crate::smiles::tokenizer::Token;

/// Assemble the molecular graph from the token stream, then assign implicit
/// hydrogens to organic-subset atoms.
pub fn build_molecule(tokens: &[Token]) -> Result<Molecule, ParseError> {
    let mut mol = Molecule::new();
    // Parallel record: which atoms came from bracket notation (their hydrogen
    // count is already explicit).
    let mut bracket_atom = Vec::new();

    let mut prev: Option<usize> = None;
    let mut branch_stack: Vec<usize> = Vec::new();
    let mut pending_bond: Option<BondOrder> = None;
    let mut open_rings: HashMap<u16, (usize, Option<BondOrder>)> = HashMap::new();

    for token in tokens {
        match token {
            Token::Atom(spec) => {
                let idx = mol.add_atom(Atom {
                    atomic_number: spec.atomic_number,
                    is_aromatic: spec.aromatic,
                    formal_charge: spec.charge,
                    implicit_hydrogens: spec.explicit_h.unwrap_or(0),
                    isotope: spec.isotope,
                });
                bracket_atom.push(spec.explicit_h.is_some());
                if let Some(p) = prev {
                    let order = bond_order(pending_bond.take(), &mol, p, idx);
                    mol.add_bond(p, idx, order);
                }
                prev = Some(idx);
            }
            Token::Bond { order, pos } => {
                if prev.is_none() {
                    return Err(ParseError::DanglingBond { pos: *pos });
                }
                pending_bond = Some(*order);
            }
            Token::Ring { digit, pos } => {
                let current = prev.ok_or(ParseError::DanglingBond { pos: *pos })?;
                match open_rings.remove(digit) {
                    Some((partner, opening_bond)) => {
                        if partner == current {
                            return Err(ParseError::SelfRingBond { digit: *digit });
                        }
                        let explicit = pending_bond.take().or(opening_bond);
                        let order = bond_order(explicit, &mol, partner, current);
                        mol.add_bond(partner, current, order);
                    }
                    None => {
                        open_rings.insert(*digit, (current, pending_bond.take()));
                    }
                }
            }
            Token::Open(pos) => {
                let current = prev.ok_or(ParseError::UnmatchedParen { pos: *pos })?;
                branch_stack.push(current);
            }
            Token::Close(pos) => {
                prev = Some(branch_stack.pop().ok_or(ParseError::UnmatchedParen { pos: *pos })?);
            }
            Token::Dot(pos) => {
                if pending_bond.is_some() {
                    return Err(ParseError::DanglingBond { pos: *pos });
                }
                prev = None;
            }
        }
    }

    if let Some((&digit, _)) = open_rings.iter().next() {
        return Err(ParseError::UnclosedRing { digit });
    }
    if !branch_stack.is_empty() {
        return Err(ParseError::UnmatchedParen { pos: 0 });
    }

    assign_implicit_hydrogens(&mut mol, &bracket_atom);
    Ok(mol)
}

/// An unmarked bond between two aromatic atoms is aromatic, otherwise single.
fn bond_order(explicit: Option<BondOrder>, mol: &Molecule, a: usize, b: usize) -> BondOrder {
    explicit.unwrap_or({
        if mol.atoms[a].is_aromatic && mol.atoms[b].is_aromatic {
            BondOrder::Aromatic
        } else {
            BondOrder::Single
        }
    })
}

/// Implicit hydrogen counts per OpenSMILES semantics: organic-subset atoms
/// fill up to the lowest standard valence that accommodates the bond-order
/// sum; aromatic atoms use the lowest valence only. Bracket atoms keep their
/// explicit count.
fn assign_implicit_hydrogens(mol: &mut Molecule, bracket_atom: &[bool]) {
    for i in 0..mol.atom_count() {
        if bracket_atom[i] {
            continue;
        }
        let half_units: u32 = mol.adjacency[i]
            .iter()
            .map(|&(_, b)| mol.bonds[b].order.half_units())
            .sum();
        let used = half_units.div_ceil(2) as u8;

        let valences = element_by_number(mol.atoms[i].atomic_number)
            .map(|e| e.valences)
            .unwrap_or(&[]);
        let h = if mol.atoms[i].is_aromatic {
            valences.first().map_or(0, |&v| v.saturating_sub(used))
        } else {
            valences
                .iter()
                .find(|&&v| v >= used)
                .map_or(0, |&v| v - used)
        };
        mol.atoms[i].implicit_hydrogens = h;
    }
}
