//! Single-molecule analysis and parallel batch orchestration.
//!
//! Rows are independent: each one parses, computes and evaluates in
//! isolation, and one malformed SMILES never disturbs its neighbors. The
//! batch runs on the rayon thread pool and `collect` keeps input order.

use indexmap::IndexMap;
use rayon::prelude::*;
use serde::Serialize;

use adme_domain::parse_smiles;

use crate::descriptors::{compute_descriptors, MoleculeDescriptors};
use crate::errors::AdmeError;
use crate::predict::{predict, PredictionResult};
use crate::rules::{evaluate_all, RuleFilter, RuleVerdict};

/// Complete analysis for one molecule: descriptors, all rule verdicts and
/// the absorption predictions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoleculeAnalysis {
    pub descriptors: MoleculeDescriptors,
    pub verdicts: IndexMap<RuleFilter, RuleVerdict>,
    pub predictions: PredictionResult,
}

/// Outcome of one batch row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowResult {
    Ok(Box<MoleculeAnalysis>),
    Failed { input: String, reason: AdmeError },
}

impl RowResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, RowResult::Ok(_))
    }
}

/// Batch tallies, reported once at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

pub fn analyze_smiles(smiles: &str) -> Result<MoleculeAnalysis, AdmeError> {
    let mol = parse_smiles(smiles)?;
    let descriptors = compute_descriptors(&mol, smiles)?;
    let verdicts = evaluate_all(&descriptors);
    let predictions = predict(&descriptors);
    Ok(MoleculeAnalysis { descriptors, verdicts, predictions })
}

/// Analyzes every row in parallel, preserving input order in the output.
pub fn process_batch<S: AsRef<str> + Sync>(rows: &[S]) -> Vec<RowResult> {
    rows.par_iter()
        .map(|row| {
            let input = row.as_ref();
            match analyze_smiles(input) {
                Ok(analysis) => RowResult::Ok(Box::new(analysis)),
                Err(reason) => {
                    tracing::warn!(smiles = input, %reason, "row failed");
                    RowResult::Failed { input: input.to_string(), reason }
                }
            }
        })
        .collect()
}

pub fn summarize(results: &[RowResult]) -> BatchSummary {
    let failed = results.iter().filter(|r| !r.is_ok()).count();
    BatchSummary { processed: results.len() - failed, failed }
}
