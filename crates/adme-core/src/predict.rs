//! Pharmacokinetic absorption heuristics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::descriptors::MoleculeDescriptors;
use crate::rules::{evaluate, RuleFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GiAbsorption {
    High,
    Low,
}

impl fmt::Display for GiAbsorption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GiAbsorption::High => "High",
            GiAbsorption::Low => "Low",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BbbPermeation {
    Permeant,
    NonPermeant,
}

impl fmt::Display for BbbPermeation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BbbPermeation::Permeant => "Permeant",
            BbbPermeation::NonPermeant => "Non-permeant",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub gi_absorption: GiAbsorption,
    pub bbb_permeation: BbbPermeation,
}

/// Gastrointestinal absorption is high exactly when the Veber filter passes;
/// blood-brain barrier permeation uses a four-descriptor window.
pub fn predict(d: &MoleculeDescriptors) -> PredictionResult {
    let gi_absorption = if evaluate(d, RuleFilter::Veber).passes {
        GiAbsorption::High
    } else {
        GiAbsorption::Low
    };

    let bbb_permeant = d.tpsa <= 90.0
        && d.molecular_weight <= 450.0
        && (-0.5..=6.0).contains(&d.log_p)
        && d.h_bond_donors <= 3;
    let bbb_permeation =
        if bbb_permeant { BbbPermeation::Permeant } else { BbbPermeation::NonPermeant };

    PredictionResult { gi_absorption, bbb_permeation }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptors() -> MoleculeDescriptors {
        MoleculeDescriptors {
            smiles: String::new(),
            molecular_formula: String::new(),
            molecular_weight: 300.0,
            log_p: 2.0,
            tpsa: 50.0,
            h_bond_donors: 1,
            h_bond_acceptors: 3,
            rotatable_bonds: 4,
            fraction_csp3: 0.4,
            ring_count: 2,
            aromatic_ring_count: 1,
            heavy_atom_count: 22,
            heteroatom_count: 4,
            carbon_count: 18,
            molar_refractivity: 85.0,
            qed: 0.8,
        }
    }

    #[test]
    fn compact_polar_profile_is_permeant() {
        let result = predict(&descriptors());
        assert_eq!(result.gi_absorption, GiAbsorption::High);
        assert_eq!(result.bbb_permeation, BbbPermeation::Permeant);
    }

    #[test]
    fn gi_follows_veber() {
        let mut d = descriptors();
        d.rotatable_bonds = 11;
        assert_eq!(predict(&d).gi_absorption, GiAbsorption::Low);

        d.rotatable_bonds = 4;
        d.tpsa = 141.0;
        assert_eq!(predict(&d).gi_absorption, GiAbsorption::Low);
    }

    #[test]
    fn bbb_window_bounds() {
        let mut d = descriptors();
        d.tpsa = 90.0;
        d.molecular_weight = 450.0;
        d.log_p = -0.5;
        d.h_bond_donors = 3;
        assert_eq!(predict(&d).bbb_permeation, BbbPermeation::Permeant);

        d.tpsa = 90.1;
        assert_eq!(predict(&d).bbb_permeation, BbbPermeation::NonPermeant);
    }

    #[test]
    fn high_donor_count_blocks_bbb() {
        let mut d = descriptors();
        d.h_bond_donors = 4;
        assert_eq!(predict(&d).bbb_permeation, BbbPermeation::NonPermeant);
    }
}
