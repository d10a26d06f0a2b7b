// adme-domain library entry point
pub mod aromaticity;
pub mod element;
pub mod error;
pub mod molecule;
pub mod rings;
pub mod smiles;

pub use error::ParseError;
pub use molecule::{Atom, Bond, BondOrder, Molecule};
pub use smiles::parse_smiles;
