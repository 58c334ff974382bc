//! The single analysis entry point shared by the CLI and the web service.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::AnalysisError;
use crate::core::motif::Motif;
use crate::core::sequence::DnaSequence;
use crate::core::translate::translate_in_frame;
use crate::core::types::Frame;

/// Options controlling a single analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Reading frame; anything other than 1, 2 or 3 is rejected
    pub frame: i64,
    /// Translate the reverse complement instead of the forward strand
    pub reverse_complement: bool,
    /// End translation after the first stop codon
    pub stop_at_stop: bool,
    /// Optional IUPAC motif to search for in the forward sequence
    pub motif: Option<String>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            frame: 1,
            reverse_complement: false,
            stop_at_stop: false,
            motif: None,
        }
    }
}

/// Result of analyzing one sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub dna: DnaSequence,
    pub protein: String,
    pub frame: Frame,
    pub reverse_complement: bool,
    pub stop_at_stop: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motif: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motif_positions: Option<Vec<usize>>,
}

impl AnalysisResult {
    /// Number of motif hits, zero when no motif was searched
    #[must_use]
    pub fn motif_count(&self) -> usize {
        self.motif_positions.as_ref().map_or(0, Vec::len)
    }
}

/// Normalize, translate and (optionally) motif-search a raw sequence.
///
/// Inputs are validated in order: frame, sequence, motif.
/// The motif is searched in the canonical forward sequence regardless of
/// `reverse_complement`, which only affects translation. A supplied motif
/// that is blank is an error; pass `None` to skip the search.
///
/// # Examples
///
/// ```
/// use dna_motif_finder::{analyze, AnalysisOptions};
///
/// let options = AnalysisOptions {
///     stop_at_stop: true,
///     motif: Some("aar".to_string()),
///     ..AnalysisOptions::default()
/// };
/// let result = analyze("atgaaatga", &options).unwrap();
/// assert_eq!(result.protein, "MK*");
/// assert_eq!(result.motif.as_deref(), Some("AAR"));
/// assert_eq!(result.motif_positions, Some(vec![3]));
/// ```
///
/// # Errors
///
/// Returns the first `AnalysisError` encountered; no partial result is produced.
pub fn analyze(raw_sequence: &str, options: &AnalysisOptions) -> Result<AnalysisResult, AnalysisError> {
    let frame = Frame::new(options.frame)?;
    let dna = DnaSequence::parse(raw_sequence)?;
    let motif = options.motif.as_deref().map(Motif::parse).transpose()?;

    let protein = translate_in_frame(
        &dna,
        frame,
        options.reverse_complement,
        options.stop_at_stop,
    );
    let motif_positions = motif.as_ref().map(|m| m.find_in(&dna));

    let result = AnalysisResult {
        dna,
        protein,
        frame,
        reverse_complement: options.reverse_complement,
        stop_at_stop: options.stop_at_stop,
        motif: motif.map(|m| m.pattern().to_string()),
        motif_positions,
    };

    debug!(
        bases = result.dna.len(),
        residues = result.protein.len(),
        frame = frame.number(),
        reverse_complement = options.reverse_complement,
        motif_hits = result.motif_count(),
        "Analyzed sequence"
    );

    Ok(result)
}
