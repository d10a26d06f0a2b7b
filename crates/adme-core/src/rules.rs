//! Drug-likeness rule filters.
//!
//! Every filter evaluates all of its sub-conditions, never short-circuiting,
//! so a verdict always carries the full pass/fail breakdown. `evaluate_all`
//! returns the filters in their canonical order.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::descriptors::MoleculeDescriptors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleFilter {
    Lipinski,
    Ghose,
    Veber,
    Egan,
    Muegge,
}

impl RuleFilter {
    pub const ALL: [RuleFilter; 5] = [
        RuleFilter::Lipinski,
        RuleFilter::Ghose,
        RuleFilter::Veber,
        RuleFilter::Egan,
        RuleFilter::Muegge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RuleFilter::Lipinski => "Lipinski",
            RuleFilter::Ghose => "Ghose",
            RuleFilter::Veber => "Veber",
            RuleFilter::Egan => "Egan",
            RuleFilter::Muegge => "Muegge",
        }
    }
}

impl fmt::Display for RuleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One threshold check inside a filter, with the observed value kept for
/// reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleCondition {
    pub name: &'static str,
    pub passed: bool,
    pub observed: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleVerdict {
    pub filter: RuleFilter,
    pub passes: bool,
    pub conditions: Vec<RuleCondition>,
}

impl RuleVerdict {
    fn new(filter: RuleFilter, conditions: Vec<RuleCondition>) -> Self {
        let passes = conditions.iter().all(|c| c.passed);
        Self { filter, passes, conditions }
    }

    /// Number of failed sub-conditions.
    pub fn violations(&self) -> usize {
        self.conditions.iter().filter(|c| !c.passed).count()
    }
}

fn condition(name: &'static str, passed: bool, observed: impl fmt::Display) -> RuleCondition {
    RuleCondition { name, passed, observed: observed.to_string() }
}

fn fmt2(x: f64) -> String {
    format!("{x:.2}")
}

pub fn evaluate(d: &MoleculeDescriptors, filter: RuleFilter) -> RuleVerdict {
    let conditions = match filter {
        RuleFilter::Lipinski => vec![
            condition("weight < 500", d.molecular_weight < 500.0, fmt2(d.molecular_weight)),
            condition("logP < 5", d.log_p < 5.0, fmt2(d.log_p)),
            condition("H-bond donors < 5", d.h_bond_donors < 5, d.h_bond_donors),
            condition("H-bond acceptors < 10", d.h_bond_acceptors < 10, d.h_bond_acceptors),
        ],
        RuleFilter::Ghose => vec![
            condition(
                "160 <= weight <= 480",
                (160.0..=480.0).contains(&d.molecular_weight),
                fmt2(d.molecular_weight),
            ),
            condition("-0.4 <= logP <= 5.6", (-0.4..=5.6).contains(&d.log_p), fmt2(d.log_p)),
            condition(
                "20 <= heavy atoms <= 70",
                (20..=70).contains(&d.heavy_atom_count),
                d.heavy_atom_count,
            ),
            condition(
                "40 <= molar refractivity <= 130",
                (40.0..=130.0).contains(&d.molar_refractivity),
                fmt2(d.molar_refractivity),
            ),
        ],
        RuleFilter::Veber => vec![
            condition("rotatable bonds <= 10", d.rotatable_bonds <= 10, d.rotatable_bonds),
            condition("TPSA <= 140", d.tpsa <= 140.0, fmt2(d.tpsa)),
        ],
        RuleFilter::Egan => vec![
            condition("TPSA <= 132", d.tpsa <= 132.0, fmt2(d.tpsa)),
            condition("-1 <= logP <= 6", (-1.0..=6.0).contains(&d.log_p), fmt2(d.log_p)),
        ],
        RuleFilter::Muegge => vec![
            condition(
                "200 <= weight <= 600",
                (200.0..=600.0).contains(&d.molecular_weight),
                fmt2(d.molecular_weight),
            ),
            condition("-2 <= logP <= 5", (-2.0..=5.0).contains(&d.log_p), fmt2(d.log_p)),
            condition("TPSA >= 75", d.tpsa >= 75.0, fmt2(d.tpsa)),
            condition("rings >= 1", d.ring_count >= 1, d.ring_count),
            condition("carbons >= 7", d.carbon_count >= 7, d.carbon_count),
            condition("heteroatoms >= 2", d.heteroatom_count >= 2, d.heteroatom_count),
            condition("rotatable bonds <= 15", d.rotatable_bonds <= 15, d.rotatable_bonds),
        ],
    };
    RuleVerdict::new(filter, conditions)
}

/// Evaluates every filter in canonical order. The map iterates in insertion
/// order, so serialized output is deterministic.
pub fn evaluate_all(d: &MoleculeDescriptors) -> IndexMap<RuleFilter, RuleVerdict> {
    RuleFilter::ALL.iter().map(|&f| (f, evaluate(d, f))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptors_with(weight: f64, log_p: f64) -> MoleculeDescriptors {
        MoleculeDescriptors {
            smiles: String::new(),
            molecular_formula: String::new(),
            molecular_weight: weight,
            log_p,
            tpsa: 60.0,
            h_bond_donors: 1,
            h_bond_acceptors: 3,
            rotatable_bonds: 2,
            fraction_csp3: 0.5,
            ring_count: 1,
            aromatic_ring_count: 1,
            heavy_atom_count: 25,
            heteroatom_count: 4,
            carbon_count: 21,
            molar_refractivity: 80.0,
            qed: 0.7,
        }
    }

    #[test]
    fn lipinski_two_violations() {
        let d = descriptors_with(700.0, 7.0);
        let verdict = evaluate(&d, RuleFilter::Lipinski);
        assert!(!verdict.passes);
        assert_eq!(verdict.violations(), 2);
        let failed: Vec<&str> =
            verdict.conditions.iter().filter(|c| !c.passed).map(|c| c.name).collect();
        assert_eq!(failed, vec!["weight < 500", "logP < 5"]);
    }

    #[test]
    fn lipinski_passes_in_range() {
        let d = descriptors_with(350.0, 2.0);
        let verdict = evaluate(&d, RuleFilter::Lipinski);
        assert!(verdict.passes);
        assert_eq!(verdict.violations(), 0);
        assert_eq!(verdict.conditions.len(), 4);
    }

    #[test]
    fn all_conditions_reported_even_after_failure() {
        // Muegge fails on weight; the remaining six conditions still appear.
        let d = descriptors_with(150.0, 2.0);
        let verdict = evaluate(&d, RuleFilter::Muegge);
        assert!(!verdict.passes);
        assert_eq!(verdict.conditions.len(), 7);
    }

    #[test]
    fn boundary_values_honor_inclusivity() {
        // Lipinski bounds are strict, Veber and Ghose bounds are inclusive.
        let mut d = descriptors_with(500.0, 5.0);
        let verdict = evaluate(&d, RuleFilter::Lipinski);
        assert_eq!(verdict.violations(), 2);

        d.molecular_weight = 480.0;
        d.log_p = 5.6;
        assert!(evaluate(&d, RuleFilter::Ghose).passes);

        d.rotatable_bonds = 10;
        d.tpsa = 140.0;
        assert!(evaluate(&d, RuleFilter::Veber).passes);
    }

    #[test]
    fn evaluate_all_preserves_order() {
        let d = descriptors_with(300.0, 2.0);
        let verdicts = evaluate_all(&d);
        let order: Vec<RuleFilter> = verdicts.keys().copied().collect();
        assert_eq!(order.as_slice(), RuleFilter::ALL.as_slice());
    }

    #[test]
    fn filter_names_serialize_as_strings() {
        let d = descriptors_with(300.0, 2.0);
        let json = serde_json::to_string(&evaluate_all(&d)).unwrap();
        assert!(json.contains("\"Lipinski\""));
        assert!(json.contains("\"Muegge\""));
    }
}
