use serde::{Deserialize, Serialize};

use crate::core::error::AnalysisError;

/// Reading frame (1, 2 or 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Frame(u8);

impl Frame {
    pub const FIRST: Self = Self(1);

    /// Validate a caller-supplied frame number.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidFrame` unless `frame` is 1, 2 or 3.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Range checked below
    pub fn new(frame: i64) -> Result<Self, AnalysisError> {
        match frame {
            1..=3 => Ok(Self(frame as u8)),
            _ => Err(AnalysisError::InvalidFrame(frame.to_string())),
        }
    }

    #[must_use]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Number of leading bases skipped before the first codon.
    #[must_use]
    pub fn offset(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<i64> for Frame {
    type Error = AnalysisError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Frame> for u8 {
    fn from(frame: Frame) -> Self {
        frame.0
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
