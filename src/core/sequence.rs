//! Normalization and validation of nucleotide input.

use serde::{Deserialize, Serialize};

use crate::core::error::AnalysisError;

/// Bases permitted in a canonical sequence.
pub const DNA_ALPHABET: &[u8] = b"ACGTN";

/// A validated, uppercase nucleotide sequence over {A, C, G, T, N}.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DnaSequence(String);

impl DnaSequence {
    /// Normalize raw text into a canonical sequence.
    ///
    /// All whitespace (including internal newlines) is removed and the
    /// remaining characters are uppercased.
    ///
    /// # Examples
    ///
    /// ```
    /// use dna_motif_finder::DnaSequence;
    ///
    /// let seq = DnaSequence::parse("  atg aaa\ntga ").unwrap();
    /// assert_eq!(seq.as_str(), "ATGAAATGA");
    /// assert!(DnaSequence::parse("ATGU").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::EmptySequence` if nothing remains after removing
    /// whitespace, or `AnalysisError::InvalidCharacter` for the first character
    /// outside the alphabet (position counted in the whitespace-free sequence).
    pub fn parse(raw: &str) -> Result<Self, AnalysisError> {
        let mut canonical = String::with_capacity(raw.len());

        for character in raw.chars().filter(|c| !c.is_whitespace()) {
            let upper = character.to_ascii_uppercase();
            if !is_dna_base(upper) {
                return Err(AnalysisError::InvalidCharacter {
                    character,
                    position: canonical.len(),
                });
            }
            canonical.push(upper);
        }

        if canonical.is_empty() {
            return Err(AnalysisError::EmptySequence);
        }

        Ok(Self(canonical))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a parsed sequence; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reverse the sequence and complement each base (A<->T, C<->G, N->N).
    #[must_use]
    pub fn reverse_complement(&self) -> Self {
        let complemented = self
            .0
            .bytes()
            .rev()
            .map(|b| char::from(complement(b)))
            .collect();
        Self(complemented)
    }
}

impl std::fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DnaSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for DnaSequence {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Normalize raw text into a canonical sequence. See [`DnaSequence::parse`].
///
/// # Errors
///
/// Returns `AnalysisError::EmptySequence` or `AnalysisError::InvalidCharacter`.
pub fn normalize_dna(raw: &str) -> Result<DnaSequence, AnalysisError> {
    DnaSequence::parse(raw)
}

#[inline]
fn is_dna_base(c: char) -> bool {
    c.is_ascii() && DNA_ALPHABET.contains(&(c as u8))
}

/// Complement a single canonical base.
#[inline]
#[must_use]
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        _ => b'N',
    }
}
