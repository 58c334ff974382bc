//! Input size limits shared by the CLI and the web service.

/// Maximum number of bytes read from a sequence file or stdin
pub const MAX_INPUT_BYTES: usize = 64 * 1024 * 1024;

/// Default maximum number of bases accepted per web request (DOS protection)
pub const DEFAULT_MAX_SEQUENCE_LENGTH: usize = 1_000_000;

/// Maximum motif length accepted
pub const MAX_MOTIF_LENGTH: usize = 1_000;

/// Input limit violations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Sequence too long: {length} bases exceeds maximum of {max}")]
    SequenceTooLong { length: usize, max: usize },
    #[error("Motif too long: {length} characters exceeds maximum of {max}")]
    MotifTooLong { length: usize, max: usize },
}

/// Count the characters that would survive normalization's whitespace removal.
///
/// # Examples
///
/// ```
/// use dna_motif_finder::utils::validation::sequence_length;
///
/// assert_eq!(sequence_length("ATG AAA\nTGA"), 9);
/// ```
#[must_use]
pub fn sequence_length(raw: &str) -> usize {
    raw.chars().filter(|c| !c.is_whitespace()).count()
}

/// Check a request's sequence and motif against size limits.
///
/// Call this before [`analyze`](crate::core::analysis::analyze) so oversized
/// input is rejected without being normalized.
///
/// # Errors
///
/// Returns `ValidationError::SequenceTooLong` or `ValidationError::MotifTooLong`.
pub fn check_input_limits(
    sequence: &str,
    motif: Option<&str>,
    max_sequence_length: usize,
) -> Result<(), ValidationError> {
    let length = sequence_length(sequence);
    if length > max_sequence_length {
        return Err(ValidationError::SequenceTooLong {
            length,
            max: max_sequence_length,
        });
    }

    if let Some(motif) = motif {
        let length = motif.trim().chars().count();
        if length > MAX_MOTIF_LENGTH {
            return Err(ValidationError::MotifTooLong {
                length,
                max: MAX_MOTIF_LENGTH,
            });
        }
    }

    Ok(())
}
