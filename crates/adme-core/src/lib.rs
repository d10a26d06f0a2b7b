// adme-core library entry point
pub mod batch;
pub mod descriptors;
pub mod errors;
pub mod predict;
pub mod rules;

pub use batch::{analyze_smiles, process_batch, summarize, BatchSummary, MoleculeAnalysis, RowResult};
pub use descriptors::{compute_descriptors, MoleculeDescriptors};
pub use errors::{AdmeError, DescriptorComputationError};
pub use predict::{predict, BbbPermeation, GiAbsorption, PredictionResult};
pub use rules::{evaluate_all, RuleFilter, RuleVerdict};
