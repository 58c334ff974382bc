//! Codon translation under the standard genetic code.
//!
//! The code table is NCBI translation table 1, stored as a 64-byte string
//! indexed in TCAG order (first codon position varies slowest). Codons that
//! contain `N` cannot be resolved to a single residue and translate to
//! [`UNKNOWN_RESIDUE`].

use crate::core::error::AnalysisError;
use crate::core::sequence::DnaSequence;
use crate::core::types::Frame;

/// Residue emitted for codons that cannot be resolved unambiguously
pub const UNKNOWN_RESIDUE: char = 'X';

/// Marker emitted for stop codons
pub const STOP_MARKER: char = '*';

const CODON_LENGTH: usize = 3;

static STANDARD_CODE: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

#[inline]
fn base_index(base: u8) -> Option<usize> {
    match base {
        b'T' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

/// Translate a single codon.
///
/// Returns [`UNKNOWN_RESIDUE`] for anything that is not three concrete
/// uppercase bases.
///
/// ```
/// use dna_motif_finder::core::translate::translate_codon;
///
/// assert_eq!(translate_codon(b"ATG"), 'M');
/// assert_eq!(translate_codon(b"TGA"), '*');
/// assert_eq!(translate_codon(b"AAN"), 'X');
/// ```
#[must_use]
pub fn translate_codon(codon: &[u8]) -> char {
    let [b0, b1, b2] = codon else {
        return UNKNOWN_RESIDUE;
    };

    match (base_index(*b0), base_index(*b1), base_index(*b2)) {
        (Some(i), Some(j), Some(k)) => char::from(STANDARD_CODE[i * 16 + j * 4 + k]),
        _ => UNKNOWN_RESIDUE,
    }
}

/// Translate a canonical sequence into a protein sequence.
///
/// The sequence is reverse complemented first when `reverse_complement` is
/// set, then read in consecutive codons starting at `frame - 1`. Trailing
/// bases that do not fill a codon are ignored. With `stop_at_stop`, the
/// first stop codon is emitted as [`STOP_MARKER`] and translation ends there.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidFrame` if `frame` is not 1, 2 or 3.
pub fn translate(
    sequence: &DnaSequence,
    frame: i64,
    reverse_complement: bool,
    stop_at_stop: bool,
) -> Result<String, AnalysisError> {
    let frame = Frame::new(frame)?;
    Ok(translate_in_frame(
        sequence,
        frame,
        reverse_complement,
        stop_at_stop,
    ))
}

/// Translate with an already validated [`Frame`].
#[must_use]
pub fn translate_in_frame(
    sequence: &DnaSequence,
    frame: Frame,
    reverse_complement: bool,
    stop_at_stop: bool,
) -> String {
    let reversed;
    let working = if reverse_complement {
        reversed = sequence.reverse_complement();
        reversed.as_bytes()
    } else {
        sequence.as_bytes()
    };

    let Some(in_frame) = working.get(frame.offset()..) else {
        return String::new();
    };

    let mut protein = String::with_capacity(in_frame.len() / CODON_LENGTH);
    for codon in in_frame.chunks_exact(CODON_LENGTH) {
        let residue = translate_codon(codon);
        protein.push(residue);
        if stop_at_stop && residue == STOP_MARKER {
            break;
        }
    }

    protein
}
