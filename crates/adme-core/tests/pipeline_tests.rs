//! End-to-end pipeline coverage: SMILES in, verdicts and predictions out.

use adme_core::predict::{BbbPermeation, GiAbsorption};
use adme_core::rules::RuleFilter;
use adme_core::{analyze_smiles, process_batch, RowResult};

const ASPIRIN: &str = "CC(=O)OC1=CC=CC=C1C(=O)O";

#[test]
fn aspirin_full_profile() {
    let analysis = analyze_smiles(ASPIRIN).unwrap();
    let d = &analysis.descriptors;

    assert!((d.molecular_weight - 180.16).abs() < 0.01);
    assert!(d.log_p > 1.0 && d.log_p < 2.0);
    assert_eq!(d.h_bond_donors, 1);
    assert!((3..=4).contains(&d.h_bond_acceptors));

    assert!(analysis.verdicts[&RuleFilter::Lipinski].passes);
    assert!(analysis.verdicts[&RuleFilter::Veber].passes);
    assert_eq!(analysis.predictions.gi_absorption, GiAbsorption::High);
    assert_eq!(analysis.predictions.bbb_permeation, BbbPermeation::Permeant);
}

#[test]
fn spelling_variants_give_identical_verdicts() {
    let kekulized = analyze_smiles(ASPIRIN).unwrap();
    let aromatic = analyze_smiles("CC(=O)Oc1ccccc1C(=O)O").unwrap();
    for filter in RuleFilter::ALL {
        assert_eq!(
            kekulized.verdicts[&filter].passes,
            aromatic.verdicts[&filter].passes,
            "{filter}"
        );
    }
    assert_eq!(kekulized.predictions, aromatic.predictions);
}

#[test]
fn mixed_batch_isolates_failures() {
    let rows = [ASPIRIN, "invalid_smiles_!!!", "CCO", "", "c1ccccc1"];
    let results = process_batch(&rows);
    assert_eq!(results.len(), 5);

    let failed: Vec<usize> = results
        .iter()
        .enumerate()
        .filter(|(_, r)| !r.is_ok())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(failed, vec![1, 3]);

    match &results[1] {
        RowResult::Failed { input, .. } => assert_eq!(input, "invalid_smiles_!!!"),
        RowResult::Ok(_) => panic!("expected failure"),
    }

    // Surviving rows carry exactly what a standalone run produces.
    for (row, result) in rows.iter().zip(&results) {
        if let RowResult::Ok(analysis) = result {
            let standalone = analyze_smiles(row).unwrap();
            assert_eq!(**analysis, standalone, "{row}");
        }
    }
}

#[test]
fn analysis_serializes_to_json() {
    let analysis = analyze_smiles(ASPIRIN).unwrap();
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["descriptors"]["molecular_formula"], "C9H8O4");
    assert!(json["descriptors"]["logP"].is_number());
    assert_eq!(json["verdicts"]["Lipinski"]["passes"], true);
    assert_eq!(json["predictions"]["gi_absorption"], "High");
}

#[test]
fn every_filter_reports_all_conditions() {
    let analysis = analyze_smiles(ASPIRIN).unwrap();
    let expected = [
        (RuleFilter::Lipinski, 4),
        (RuleFilter::Ghose, 4),
        (RuleFilter::Veber, 2),
        (RuleFilter::Egan, 2),
        (RuleFilter::Muegge, 7),
    ];
    for (filter, count) in expected {
        assert_eq!(analysis.verdicts[&filter].conditions.len(), count, "{filter}");
    }
}
