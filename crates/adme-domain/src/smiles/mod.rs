//! SMILES parsing: string → [`Molecule`].
//!
//! Covers the subset needed for drug-like organic molecules: organic-subset
//! and bracket atoms, aromatic lowercase notation, branches, ring closures
//! (including `%nn`), explicit bonds and dot disconnections. Tetrahedral and
//! cis/trans stereo marks are accepted and discarded; this crate models
//! topology only.

mod builder;
mod tokenizer;

use crate::aromaticity::perceive_aromaticity;
use crate::error::ParseError;
use crate::molecule::Molecule;

pub fn parse_smiles(input: &str) -> Result<Molecule, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let tokens = tokenizer::tokenize(trimmed)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let mut mol = builder::build_molecule(&tokens)?;
    perceive_aromaticity(&mut mol);
    Ok(mol)
}
