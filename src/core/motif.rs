//! IUPAC motif parsing and overlapping motif search.
//!
//! Each IUPAC code expands to a set of concrete bases, stored as a 4-bit
//! mask (A=1, C=2, G=4, T=8). A sequence `N` has an empty mask and so is
//! never matched, not even by a motif `N`.

use crate::core::error::AnalysisError;
use crate::core::sequence::DnaSequence;

const A: u8 = 0b0001;
const C: u8 = 0b0010;
const G: u8 = 0b0100;
const T: u8 = 0b1000;

/// IUPAC nucleotide codes and the concrete bases each one stands for
pub static IUPAC_CODES: &[(u8, &str)] = &[
    (b'A', "A"),
    (b'C', "C"),
    (b'G', "G"),
    (b'T', "T"),
    (b'R', "AG"),
    (b'Y', "CT"),
    (b'S', "CG"),
    (b'W', "AT"),
    (b'K', "GT"),
    (b'M', "AC"),
    (b'B', "CGT"),
    (b'D', "AGT"),
    (b'H', "ACT"),
    (b'V', "ACG"),
    (b'N', "ACGT"),
];

/// Mask of concrete bases matched by an uppercase IUPAC code
#[inline]
fn iupac_mask(code: u8) -> Option<u8> {
    let mask = match code {
        b'A' => A,
        b'C' => C,
        b'G' => G,
        b'T' => T,
        b'R' => A | G,
        b'Y' => C | T,
        b'S' => C | G,
        b'W' => A | T,
        b'K' => G | T,
        b'M' => A | C,
        b'B' => C | G | T,
        b'D' => A | G | T,
        b'H' => A | C | T,
        b'V' => A | C | G,
        b'N' => A | C | G | T,
        _ => return None,
    };
    Some(mask)
}

/// Mask of a sequence base; only concrete bases are non-zero
#[inline]
fn base_mask(base: u8) -> u8 {
    match base {
        b'A' => A,
        b'C' => C,
        b'G' => G,
        b'T' => T,
        _ => 0,
    }
}

/// A validated IUPAC motif
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    pattern: String,
    masks: Vec<u8>,
}

impl Motif {
    /// Parse and validate a raw motif string.
    ///
    /// Surrounding whitespace is ignored and the motif is uppercased.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::EmptyMotif` for an empty motif, or
    /// `AnalysisError::InvalidMotif` naming the first non-IUPAC character.
    pub fn parse(raw: &str) -> Result<Self, AnalysisError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::EmptyMotif);
        }

        let mut pattern = String::with_capacity(trimmed.len());
        let mut masks = Vec::with_capacity(trimmed.len());

        for (position, character) in trimmed.chars().enumerate() {
            let upper = character.to_ascii_uppercase();
            let mask = u8::try_from(upper)
                .ok()
                .and_then(iupac_mask)
                .ok_or(AnalysisError::InvalidMotif {
                    character,
                    position,
                })?;
            pattern.push(upper);
            masks.push(mask);
        }

        Ok(Self { pattern, masks })
    }

    /// The normalized (uppercase) motif
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    /// Always false for a parsed motif
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// Check whether the motif matches `window`, which must be `self.len()` long
    #[must_use]
    pub fn matches(&self, window: &[u8]) -> bool {
        window.len() == self.masks.len()
            && window
                .iter()
                .zip(&self.masks)
                .all(|(&base, &mask)| base_mask(base) & mask != 0)
    }

    /// All zero-based offsets where the motif matches, overlapping, ascending.
    ///
    /// ```
    /// use dna_motif_finder::{DnaSequence, Motif};
    ///
    /// let seq = DnaSequence::parse("AAAA").unwrap();
    /// let motif = Motif::parse("AAR").unwrap();
    /// assert_eq!(motif.find_in(&seq), vec![0, 1]);
    /// ```
    #[must_use]
    pub fn find_in(&self, sequence: &DnaSequence) -> Vec<usize> {
        sequence
            .as_bytes()
            .windows(self.len())
            .enumerate()
            .filter(|(_, window)| self.matches(window))
            .map(|(offset, _)| offset)
            .collect()
    }
}

impl std::fmt::Display for Motif {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

impl std::str::FromStr for Motif {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Validate `motif` and return every overlapping match position in `sequence`.
///
/// # Errors
///
/// Returns `AnalysisError::EmptyMotif` or `AnalysisError::InvalidMotif`.
pub fn find_motifs(sequence: &DnaSequence, motif: &str) -> Result<Vec<usize>, AnalysisError> {
    Ok(Motif::parse(motif)?.find_in(sequence))
}
