//! Physicochemical descriptor extraction.
//!
//! All descriptors are pure functions of the molecular graph: topological
//! polar surface area follows Ertl's fragment contributions, logP and molar
//! refractivity use an atom-additive scheme in the Wildman-Crippen style, and
//! QED is the weighted geometric mean of per-property desirability curves.

use std::collections::BTreeMap;

use adme_domain::element::element_by_number;
use adme_domain::molecule::{BondOrder, Molecule};
use adme_domain::rings::{cyclomatic_number, find_sssr, ring_bond_flags};
use serde::{Deserialize, Serialize};

use crate::errors::DescriptorComputationError;

/// Full descriptor record for a single molecule. Continuous values are f64,
/// counts are plain integers; the record is the sole input to the rule
/// evaluator and the prediction heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoleculeDescriptors {
    pub smiles: String,
    pub molecular_formula: String,
    pub molecular_weight: f64,
    #[serde(rename = "logP")]
    pub log_p: f64,
    pub tpsa: f64,
    pub h_bond_donors: usize,
    pub h_bond_acceptors: usize,
    pub rotatable_bonds: usize,
    pub fraction_csp3: f64,
    pub ring_count: usize,
    pub aromatic_ring_count: usize,
    pub heavy_atom_count: usize,
    pub heteroatom_count: usize,
    pub carbon_count: usize,
    pub molar_refractivity: f64,
    pub qed: f64,
}

pub fn compute_descriptors(
    mol: &Molecule,
    smiles: &str,
) -> Result<MoleculeDescriptors, DescriptorComputationError> {
    let ring_count = cyclomatic_number(mol);
    let aromatic_ring_count = count_aromatic_rings(mol);
    let (log_p, molar_refractivity) = crippen_contributions(mol);
    let tpsa = topological_polar_surface_area(mol);
    let h_bond_donors = hydrogen_bond_donors(mol);
    let h_bond_acceptors = hydrogen_bond_acceptors(mol);
    let rotatable_bonds = count_rotatable_bonds(mol);
    let molecular_weight = molecular_weight(mol)?;

    let heavy_atom_count = mol.atoms.iter().filter(|a| a.atomic_number != 1).count();
    let carbon_count = mol.atoms.iter().filter(|a| a.atomic_number == 6).count();
    let heteroatom_count = mol
        .atoms
        .iter()
        .filter(|a| a.atomic_number != 1 && a.atomic_number != 6)
        .count();

    let qed = quantitative_druglikeness(
        molecular_weight,
        log_p,
        h_bond_acceptors,
        h_bond_donors,
        tpsa,
        rotatable_bonds,
        aromatic_ring_count,
    );

    Ok(MoleculeDescriptors {
        smiles: smiles.to_string(),
        molecular_formula: molecular_formula(mol)?,
        molecular_weight,
        log_p,
        tpsa,
        h_bond_donors,
        h_bond_acceptors,
        rotatable_bonds,
        fraction_csp3: fraction_csp3(mol),
        ring_count,
        aromatic_ring_count,
        heavy_atom_count,
        heteroatom_count,
        carbon_count,
        molar_refractivity,
        qed,
    })
}

/// Average molecular weight from standard atomic weights, implicit hydrogens
/// included.
fn molecular_weight(mol: &Molecule) -> Result<f64, DescriptorComputationError> {
    let mut weight = 0.0;
    for atom in &mol.atoms {
        let element = element_by_number(atom.atomic_number).ok_or(
            DescriptorComputationError::MissingElementData { atomic_number: atom.atomic_number },
        )?;
        weight += element.atomic_weight;
        weight += atom.implicit_hydrogens as f64 * 1.008;
    }
    Ok(weight)
}

/// Hill-order formula: carbon first, hydrogen second, remaining elements
/// alphabetical by symbol.
fn molecular_formula(mol: &Molecule) -> Result<String, DescriptorComputationError> {
    let mut carbons = 0usize;
    let mut hydrogens = 0usize;
    let mut others: BTreeMap<&'static str, usize> = BTreeMap::new();
    for atom in &mol.atoms {
        hydrogens += atom.implicit_hydrogens as usize;
        match atom.atomic_number {
            1 => hydrogens += 1,
            6 => carbons += 1,
            n => {
                let element = element_by_number(n)
                    .ok_or(DescriptorComputationError::MissingElementData { atomic_number: n })?;
                *others.entry(element.symbol).or_insert(0) += 1;
            }
        }
    }

    let mut formula = String::new();
    let mut push = |symbol: &str, count: usize| {
        if count == 0 {
            return;
        }
        formula.push_str(symbol);
        if count > 1 {
            formula.push_str(&count.to_string());
        }
    };
    push("C", carbons);
    push("H", hydrogens);
    for (symbol, count) in others {
        push(symbol, count);
    }
    Ok(formula)
}

/// Hydrogens sitting on atom `i`, implicit plus explicitly drawn [H]
/// neighbors.
fn hydrogens_on(mol: &Molecule, i: usize) -> usize {
    let explicit = mol.adjacency[i]
        .iter()
        .filter(|&&(n, _)| mol.atoms[n].atomic_number == 1)
        .count();
    mol.atoms[i].implicit_hydrogens as usize + explicit
}

/// Heavy-atom degree, explicit [H] neighbors excluded.
fn heavy_degree(mol: &Molecule, i: usize) -> usize {
    mol.adjacency[i]
        .iter()
        .filter(|&&(n, _)| mol.atoms[n].atomic_number != 1)
        .count()
}

fn has_double_bond(mol: &Molecule, i: usize) -> bool {
    mol.adjacency[i]
        .iter()
        .any(|&(_, b)| mol.bonds[b].order == BondOrder::Double)
}

fn has_triple_bond(mol: &Molecule, i: usize) -> bool {
    mol.adjacency[i]
        .iter()
        .any(|&(_, b)| mol.bonds[b].order == BondOrder::Triple)
}

/// Lipinski donor count: N or O bearing at least one hydrogen.
fn hydrogen_bond_donors(mol: &Molecule) -> usize {
    mol.atoms
        .iter()
        .enumerate()
        .filter(|(i, a)| matches!(a.atomic_number, 7 | 8) && hydrogens_on(mol, *i) > 0)
        .count()
}

/// Lipinski acceptor count: every N and O.
fn hydrogen_bond_acceptors(mol: &Molecule) -> usize {
    mol.atoms
        .iter()
        .filter(|a| matches!(a.atomic_number, 7 | 8))
        .count()
}

/// Single non-ring bonds between two non-terminal heavy atoms, with amide
/// C-N bonds excluded.
fn count_rotatable_bonds(mol: &Molecule) -> usize {
    let in_ring = ring_bond_flags(mol);
    mol.bonds
        .iter()
        .enumerate()
        .filter(|(b, bond)| {
            bond.order == BondOrder::Single
                && !in_ring[*b]
                && heavy_degree(mol, bond.atom1) >= 2
                && heavy_degree(mol, bond.atom2) >= 2
                && !is_amide_bond(mol, bond.atom1, bond.atom2)
        })
        .count()
}

fn is_amide_bond(mol: &Molecule, a: usize, b: usize) -> bool {
    is_carbonyl_carbon(mol, a) && mol.atoms[b].atomic_number == 7
        || is_carbonyl_carbon(mol, b) && mol.atoms[a].atomic_number == 7
}

fn is_carbonyl_carbon(mol: &Molecule, i: usize) -> bool {
    mol.atoms[i].atomic_number == 6
        && mol.adjacency[i].iter().any(|&(n, b)| {
            mol.atoms[n].atomic_number == 8 && mol.bonds[b].order == BondOrder::Double
        })
}

/// Fraction of carbons that are sp3 (non-aromatic, no multiple bond). Zero
/// for carbon-free molecules.
fn fraction_csp3(mol: &Molecule) -> f64 {
    let carbons: Vec<usize> = mol
        .atoms
        .iter()
        .enumerate()
        .filter(|(_, a)| a.atomic_number == 6)
        .map(|(i, _)| i)
        .collect();
    if carbons.is_empty() {
        return 0.0;
    }
    let sp3 = carbons
        .iter()
        .filter(|&&i| !mol.atoms[i].is_aromatic && !mol.has_multiple_bond(i))
        .count();
    sp3 as f64 / carbons.len() as f64
}

/// Rings from the SSSR whose atoms are all aromatic. Bounded above by the
/// total ring count by construction.
fn count_aromatic_rings(mol: &Molecule) -> usize {
    find_sssr(mol)
        .iter()
        .filter(|ring| ring.iter().all(|&i| mol.atoms[i].is_aromatic))
        .count()
}

/// Ertl fragment-contribution TPSA over N, O, S and P atoms.
fn topological_polar_surface_area(mol: &Molecule) -> f64 {
    let mut tpsa = 0.0;
    for (i, atom) in mol.atoms.iter().enumerate() {
        let h = hydrogens_on(mol, i);
        let degree = heavy_degree(mol, i);
        let double = has_double_bond(mol, i);
        let triple = has_triple_bond(mol, i);
        tpsa += match atom.atomic_number {
            7 => {
                if atom.is_aromatic {
                    if h > 0 {
                        15.79
                    } else if degree == 3 {
                        4.41
                    } else {
                        12.89
                    }
                } else if atom.formal_charge > 0 {
                    match h {
                        3 => 27.64,
                        2 => 16.61,
                        1 => 4.44,
                        _ => 0.0,
                    }
                } else if triple {
                    23.79
                } else if double {
                    if h > 0 {
                        23.85
                    } else {
                        12.36
                    }
                } else {
                    match h {
                        0 => 3.24,
                        1 => 12.03,
                        _ => 26.02,
                    }
                }
            }
            8 => {
                if atom.is_aromatic {
                    13.14
                } else if atom.formal_charge < 0 {
                    23.06
                } else if double {
                    17.07
                } else if h > 0 {
                    20.23
                } else {
                    9.23
                }
            }
            16 => {
                if atom.is_aromatic {
                    28.24
                } else if double {
                    32.09
                } else if h > 0 {
                    38.80
                } else {
                    25.30
                }
            }
            15 => {
                if double {
                    9.81
                } else if h > 0 {
                    23.47
                } else {
                    13.59
                }
            }
            _ => 0.0,
        };
    }
    tpsa
}

/// Atom-additive logP and molar refractivity. One pass classifies each heavy
/// atom into a contribution class; hydrogens contribute per attached heavy
/// atom.
fn crippen_contributions(mol: &Molecule) -> (f64, f64) {
    let mut log_p = 0.0;
    let mut mr = 0.0;
    for (i, atom) in mol.atoms.iter().enumerate() {
        if atom.atomic_number == 1 {
            continue;
        }
        let hetero_neighbor = mol.adjacency[i]
            .iter()
            .any(|&(n, _)| !matches!(mol.atoms[n].atomic_number, 1 | 6));
        let (p, r) = match atom.atomic_number {
            6 => {
                let p = if atom.is_aromatic {
                    if hetero_neighbor {
                        0.2713
                    } else if mol.adjacency[i].iter().any(|&(n, _)| {
                        mol.atoms[n].atomic_number == 6 && !mol.atoms[n].is_aromatic
                    }) {
                        0.1360
                    } else {
                        0.1581
                    }
                } else if mol.has_multiple_bond(i) {
                    if hetero_neighbor {
                        0.0506
                    } else {
                        0.0800
                    }
                } else {
                    0.1441
                };
                (p, 3.509)
            }
            7 => {
                let p = if atom.is_aromatic {
                    -0.3187
                } else if atom.formal_charge > 0 {
                    -1.0190
                } else if mol.has_multiple_bond(i) {
                    -0.5262
                } else {
                    -0.4458
                };
                let r = if atom.is_aromatic { 2.188 } else { 2.262 };
                (p, r)
            }
            8 => {
                let p = if atom.formal_charge < 0 {
                    -1.1890
                } else if atom.is_aromatic {
                    0.1552
                } else if has_double_bond(mol, i) {
                    -0.1053
                } else if heavy_degree(mol, i) >= 2 {
                    -0.0684
                } else {
                    -0.2893
                };
                (p, 1.476)
            }
            9 => (0.4202, 1.108),
            15 => (0.2836, 6.920),
            16 => {
                let p = if atom.formal_charge != 0 {
                    -0.5188
                } else if has_double_bond(mol, i) {
                    -0.1084
                } else {
                    0.6237
                };
                (p, 7.365)
            }
            17 => (0.6895, 5.853),
            35 => (0.8813, 8.927),
            53 => (1.0500, 13.940),
            _ => (0.0, 0.0),
        };
        log_p += p;
        mr += r;

        let h = hydrogens_on(mol, i) as f64;
        log_p += h * if atom.atomic_number == 6 { 0.1230 } else { -0.2677 };
        mr += h * 1.057;
    }
    (log_p, mr)
}

/// Asymmetric Gaussian desirability: separate widths below and above the
/// preferred center.
fn desirability(x: f64, center: f64, sigma_left: f64, sigma_right: f64) -> f64 {
    let sigma = if x <= center { sigma_left } else { sigma_right };
    let z = (x - center) / sigma;
    (-0.5 * z * z).exp().max(1e-6)
}

/// QED-style score: weighted geometric mean of seven property desirability
/// curves, clamped to [0, 1].
fn quantitative_druglikeness(
    weight: f64,
    log_p: f64,
    acceptors: usize,
    donors: usize,
    tpsa: f64,
    rotatable: usize,
    aromatic_rings: usize,
) -> f64 {
    let terms = [
        (0.66, desirability(weight, 300.0, 120.0, 200.0)),
        (0.46, desirability(log_p, 2.5, 2.5, 2.5)),
        (0.05, desirability(acceptors as f64, 4.0, 4.0, 6.0)),
        (0.61, desirability(donors as f64, 1.0, 1.0, 4.0)),
        (0.06, desirability(tpsa, 60.0, 40.0, 80.0)),
        (0.65, desirability(rotatable as f64, 3.0, 3.0, 7.0)),
        (0.48, desirability(aromatic_rings as f64, 2.0, 2.0, 2.0)),
    ];
    let weight_sum: f64 = terms.iter().map(|(w, _)| w).sum();
    let log_sum: f64 = terms.iter().map(|(w, d)| w * d.ln()).sum();
    (log_sum / weight_sum).exp().clamp(0.0, 1.0)
}
