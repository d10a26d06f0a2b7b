//! Aromaticity perception for kekulized input.
//!
//! Lowercase SMILES notation marks aromatic atoms directly, but the same
//! ring can arrive written with alternating single/double bonds. Perception
//! runs once after parsing: every SSSR ring that passes an electron-counting
//! Hückel check gets its atoms flagged aromatic, so both spellings of a
//! molecule present identical flags downstream.

use std::collections::BTreeSet;

use crate::molecule::{BondOrder, Molecule};
use crate::rings::find_sssr;

const SP2_CAPABLE: [u8; 9] = [5, 6, 7, 8, 15, 16, 33, 34, 52];

pub fn perceive_aromaticity(mol: &mut Molecule) {
    let mut aromatic = vec![false; mol.atom_count()];
    for ring in find_sssr(mol) {
        let members: BTreeSet<usize> = ring.iter().copied().collect();
        if ring.iter().all(|&i| mol.atoms[i].is_aromatic) {
            continue;
        }
        if is_aromatic_ring(mol, &members) {
            for &i in &ring {
                aromatic[i] = true;
            }
        }
    }
    for (i, &flag) in aromatic.iter().enumerate() {
        if flag {
            mol.atoms[i].is_aromatic = true;
        }
    }
}

fn is_aromatic_ring(mol: &Molecule, ring: &BTreeSet<usize>) -> bool {
    if ring.len() < 3 {
        return false;
    }
    if ring.iter().any(|&i| !SP2_CAPABLE.contains(&mol.atoms[i].atomic_number)) {
        return false;
    }
    // A triple bond inside the ring rules it out.
    let in_ring_triple = mol.bonds.iter().any(|b| {
        b.order == BondOrder::Triple && ring.contains(&b.atom1) && ring.contains(&b.atom2)
    });
    if in_ring_triple {
        return false;
    }

    let mut pi_total: u32 = 0;
    for &i in ring {
        match pi_electrons(mol, i, ring) {
            Some(e) => pi_total += e,
            None => return false,
        }
    }
    pi_total >= 2 && (pi_total - 2) % 4 == 0
}

/// Electrons the atom contributes to the ring π system; `None` when the atom
/// cannot take part at all (e.g. an sp3 carbon).
fn pi_electrons(mol: &Molecule, i: usize, ring: &BTreeSet<usize>) -> Option<u32> {
    let atom = &mol.atoms[i];
    let has_double = mol.adjacency[i]
        .iter()
        .any(|&(_, b)| mol.bonds[b].order == BondOrder::Double);
    let has_double_in_ring = mol.adjacency[i]
        .iter()
        .any(|&(n, b)| ring.contains(&n) && mol.bonds[b].order == BondOrder::Double);
    let ring_degree = mol.adjacency[i].iter().filter(|&&(n, _)| ring.contains(&n)).count();
    let total_degree = mol.degree(i) + atom.implicit_hydrogens as usize;

    match atom.atomic_number {
        6 => match atom.formal_charge {
            0 => has_double.then_some(1),
            -1 => Some(2),
            1 => Some(u32::from(has_double)),
            _ => None,
        },
        7 => match atom.formal_charge {
            0 => {
                if has_double {
                    Some(1)
                } else if ring_degree == 2 && total_degree <= 3 {
                    // Pyrrole-type nitrogen donating its lone pair.
                    Some(2)
                } else {
                    None
                }
            }
            1 => has_double_in_ring.then_some(1),
            _ => None,
        },
        8 | 16 | 34 => {
            if has_double_in_ring {
                Some(1)
            } else if ring_degree == 2 {
                Some(2)
            } else {
                None
            }
        }
        5 => Some(u32::from(has_double)),
        15 | 33 => {
            if has_double {
                Some(1)
            } else if ring_degree == 2 && total_degree <= 3 {
                Some(2)
            } else {
                None
            }
        }
        _ => None,
    }
}
