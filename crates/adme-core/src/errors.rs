use adme_domain::ParseError;
use thiserror::Error;

/// Defensive error for the descriptor extractor: every successfully parsed
/// molecule should carry full element data, so this surfaces a gap in the
/// element tables rather than a user-input problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorComputationError {
    #[error("no element data for atomic number {atomic_number}")]
    MissingElementData { atomic_number: u8 },
}

/// Row-level error taxonomy: callers can tell bad input (`Parse`) apart from
/// an internal gap (`Descriptor`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdmeError {
    #[error("invalid SMILES: {0}")]
    Parse(#[from] ParseError),
    #[error("descriptor computation failed: {0}")]
    Descriptor(#[from] DescriptorComputationError),
}
