//! CSV input/output around the batch orchestrator.
//!
//! Input columns pass through untouched; analysis columns are appended on
//! the right. Rows with an empty SMILES cell are carried through with status
//! `skipped`, malformed rows with `failed: <reason>`; neither aborts the run.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use adme_core::{process_batch, MoleculeAnalysis, RowResult, RuleFilter};

/// Analysis columns appended after the input columns.
const OUTPUT_COLUMNS: &[&str] = &[
    "status",
    "molecular_formula",
    "molecular_weight",
    "logP",
    "tpsa",
    "h_bond_donors",
    "h_bond_acceptors",
    "rotatable_bonds",
    "fraction_csp3",
    "ring_count",
    "aromatic_ring_count",
    "heavy_atom_count",
    "heteroatom_count",
    "carbon_count",
    "molar_refractivity",
    "qed",
    "lipinski",
    "lipinski_violations",
    "ghose",
    "ghose_violations",
    "veber",
    "veber_violations",
    "egan",
    "egan_violations",
    "muegge",
    "muegge_violations",
    "gi_absorption",
    "bbb_permeation",
];

/// Rows analyzed per progress log line.
const PROGRESS_CHUNK: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Reads `input`, analyzes the column named `smiles_column` row by row and
/// writes the annotated table to `output`.
pub fn process_csv(input: &Path, output: &Path, smiles_column: &str) -> Result<BatchReport> {
    let mut reader = csv::Reader::from_path(input)
        .with_context(|| format!("cannot open input file {}", input.display()))?;
    let headers = reader.headers().context("cannot read CSV header")?.clone();
    let Some(smiles_idx) = headers.iter().position(|h| h == smiles_column) else {
        bail!("column '{smiles_column}' not found in {}", input.display());
    };

    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("malformed CSV in {}", input.display()))?;
    let smiles: Vec<String> = records
        .iter()
        .map(|r| r.get(smiles_idx).unwrap_or("").trim().to_string())
        .collect();

    let nonempty: Vec<(usize, &str)> = smiles
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.is_empty())
        .map(|(i, s)| (i, s.as_str()))
        .collect();

    let mut by_row: HashMap<usize, RowResult> = HashMap::with_capacity(nonempty.len());
    for chunk in nonempty.chunks(PROGRESS_CHUNK) {
        let inputs: Vec<&str> = chunk.iter().map(|&(_, s)| s).collect();
        let batch = process_batch(&inputs);
        by_row.extend(chunk.iter().map(|&(i, _)| i).zip(batch));
        info!(rows = by_row.len(), total = nonempty.len(), "batch progress");
    }

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("cannot create output file {}", output.display()))?;
    let mut out_headers: Vec<&str> = headers.iter().collect();
    out_headers.extend(OUTPUT_COLUMNS);
    writer.write_record(&out_headers).context("cannot write CSV header")?;

    let mut report = BatchReport { processed: 0, failed: 0, skipped: 0 };
    for (i, record) in records.iter().enumerate() {
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        match by_row.remove(&i) {
            None => {
                report.skipped += 1;
                row.push("skipped".to_string());
                row.extend(blank_columns());
            }
            Some(RowResult::Ok(analysis)) => {
                report.processed += 1;
                row.push("ok".to_string());
                row.extend(analysis_columns(&analysis));
            }
            Some(RowResult::Failed { reason, .. }) => {
                report.failed += 1;
                row.push(format!("failed: {reason}"));
                row.extend(blank_columns());
            }
        }
        writer.write_record(&row).context("cannot write CSV row")?;
    }
    writer.flush().context("cannot flush CSV output")?;

    info!(
        processed = report.processed,
        failed = report.failed,
        skipped = report.skipped,
        "batch complete"
    );
    Ok(report)
}

fn blank_columns() -> Vec<String> {
    vec![String::new(); OUTPUT_COLUMNS.len() - 1]
}

fn analysis_columns(analysis: &MoleculeAnalysis) -> Vec<String> {
    let d = &analysis.descriptors;
    let mut cols = vec![
        d.molecular_formula.clone(),
        format!("{:.4}", d.molecular_weight),
        format!("{:.4}", d.log_p),
        format!("{:.2}", d.tpsa),
        d.h_bond_donors.to_string(),
        d.h_bond_acceptors.to_string(),
        d.rotatable_bonds.to_string(),
        format!("{:.4}", d.fraction_csp3),
        d.ring_count.to_string(),
        d.aromatic_ring_count.to_string(),
        d.heavy_atom_count.to_string(),
        d.heteroatom_count.to_string(),
        d.carbon_count.to_string(),
        format!("{:.4}", d.molar_refractivity),
        format!("{:.4}", d.qed),
    ];
    for filter in RuleFilter::ALL {
        let verdict = &analysis.verdicts[&filter];
        cols.push(if verdict.passes { "pass" } else { "fail" }.to_string());
        cols.push(verdict.violations().to_string());
    }
    cols.push(analysis.predictions.gi_absorption.to_string());
    cols.push(analysis.predictions.bbb_permeation.to_string());
    cols
}
