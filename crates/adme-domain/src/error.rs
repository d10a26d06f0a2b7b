use thiserror::Error;

/// Errors produced while parsing a SMILES string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty SMILES string")]
    EmptyInput,
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { pos: usize, ch: char },
    #[error("unknown element symbol '{text}' at position {pos}")]
    UnknownElement { pos: usize, text: String },
    #[error("unclosed bracket atom starting at position {pos}")]
    UnclosedBracket { pos: usize },
    #[error("unmatched parenthesis at position {pos}")]
    UnmatchedParen { pos: usize },
    #[error("ring bond {digit} opened but never closed")]
    UnclosedRing { digit: u16 },
    #[error("ring bond {digit} reopened on the same atom")]
    SelfRingBond { digit: u16 },
    #[error("bond symbol with no atom to attach to at position {pos}")]
    DanglingBond { pos: usize },
    #[error("invalid charge specifier at position {pos}")]
    InvalidCharge { pos: usize },
}
