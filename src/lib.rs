//! admeflow-rust library crate.
//!
//! Thin I/O layer over [`adme_core`]: CSV reading and writing for batch
//! runs. All chemistry lives in the member crates; this crate only moves
//! rows in and out.

pub mod io;

pub use adme_core::{analyze_smiles, process_batch, MoleculeAnalysis, RowResult};
pub use adme_domain::parse_smiles;
