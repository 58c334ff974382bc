use thiserror::Error;

/// Validation failures raised by the sequence analysis core.
///
/// Every variant describes a bad request; none are transient, and an error
/// aborts the whole analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("DNA sequence is empty")]
    EmptySequence,

    #[error("DNA contains invalid base '{character}' at position {position} (allowed: A, C, G, T, N)")]
    InvalidCharacter { character: char, position: usize },

    /// Carries the rejected frame as supplied, which need not be an integer
    #[error("Frame must be 1, 2, or 3 (got {0})")]
    InvalidFrame(String),

    #[error("Motif cannot be empty")]
    EmptyMotif,

    #[error("Unsupported motif symbol '{character}' at position {position} (allowed IUPAC codes: ACGTNRYSWKMBDHV)")]
    InvalidMotif { character: char, position: usize },
}

impl AnalysisError {
    /// Stable machine-readable code for this error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptySequence => "empty_sequence",
            Self::InvalidCharacter { .. } => "invalid_character",
            Self::InvalidFrame(_) => "invalid_frame",
            Self::EmptyMotif => "empty_motif",
            Self::InvalidMotif { .. } => "invalid_motif",
        }
    }
}
