//! Sequence input from FASTA files, gzip-compressed FASTA, or plain text.
//!
//! Supported extensions for compressed input:
//! - `.gz` (gzip)
//! - `.bgz` (bgzip)

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::{debug, warn};

use crate::parsing::ParseError;
use crate::utils::validation::MAX_INPUT_BYTES;

/// Raw sequence text with the FASTA record name, if there was one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceInput {
    pub name: Option<String>,
    pub sequence: String,
}

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    let stripped = path_str
        .strip_suffix(".gz")
        .or_else(|| path_str.strip_suffix(".bgz"))
        .unwrap_or(&path_str);

    matches!(
        Path::new(stripped)
            .extension()
            .and_then(OsStr::to_str),
        Some("fa" | "fasta" | "fna" | "ffn")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read sequence input from a file.
///
/// FASTA content (plain or gzip-compressed) yields its first record; any
/// other content is returned as raw text. A file named as FASTA (see
/// [`is_fasta_file`]) must start with a `>` definition line.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read,
/// `ParseError::InputTooLarge` past [`MAX_INPUT_BYTES`],
/// `ParseError::InvalidFormat` if a FASTA-named file has no definition line,
/// or a FASTA error from [`extract_sequence_text`].
pub fn read_sequence_file(path: &Path) -> Result<SequenceInput, ParseError> {
    let file = File::open(path)?;

    let reader: Box<dyn Read> = if is_gzipped(path) {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let text = read_limited(reader)?;
    debug!("Read {} bytes from {}", text.len(), path.display());
    if is_fasta_file(path) && !text.trim_start().starts_with('>') {
        return Err(ParseError::InvalidFormat(format!(
            "{} has a FASTA extension but no '>' definition line",
            path.display()
        )));
    }
    extract_sequence_text(&text)
}

/// Read sequence input from any reader (e.g. stdin).
///
/// # Errors
///
/// See [`read_sequence_file`].
pub fn read_sequence<R: Read>(reader: R) -> Result<SequenceInput, ParseError> {
    let text = read_limited(reader)?;
    extract_sequence_text(&text)
}

fn read_limited<R: Read>(reader: R) -> Result<String, ParseError> {
    let limit = u64::try_from(MAX_INPUT_BYTES).unwrap_or(u64::MAX);
    let mut bytes = Vec::new();
    BufReader::new(reader).take(limit + 1).read_to_end(&mut bytes)?;

    // Checked before decoding; the cut may split a multibyte character
    if bytes.len() > MAX_INPUT_BYTES {
        return Err(ParseError::InputTooLarge(MAX_INPUT_BYTES));
    }

    String::from_utf8(bytes)
        .map_err(|e| ParseError::InvalidFormat(format!("Input is not valid UTF-8: {e}")))
}

/// Extract sequence input from in-memory text.
///
/// If the first non-blank line is a FASTA definition line (`>`), the
/// sequence of the first record is returned with its name. Otherwise the
/// text is returned unchanged.
///
/// # Errors
///
/// Returns `ParseError::Noodles` if the FASTA record is malformed or
/// `ParseError::InvalidFormat` if it has no sequence.
pub fn extract_sequence_text(text: &str) -> Result<SequenceInput, ParseError> {
    let trimmed = text.trim_start();
    if !trimmed.starts_with('>') {
        return Ok(SequenceInput {
            name: None,
            sequence: text.to_string(),
        });
    }

    let mut reader = fasta::io::Reader::new(trimmed.as_bytes());
    parse_first_record(&mut reader)
}

/// Take the first record from a noodles FASTA reader
fn parse_first_record<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<SequenceInput, ParseError> {
    let mut records = reader.records();

    let record = records
        .next()
        .ok_or_else(|| ParseError::InvalidFormat("No records found in FASTA input".to_string()))?
        .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

    let name = String::from_utf8_lossy(record.name()).to_string();
    let sequence = String::from_utf8_lossy(record.sequence().as_ref()).to_string();

    if sequence.trim().is_empty() {
        return Err(ParseError::InvalidFormat(format!(
            "FASTA record '{name}' has no sequence"
        )));
    }

    if records.next().is_some() {
        warn!("FASTA input has multiple records; using only the first ('{name}')");
    }

    Ok(SequenceInput {
        name: Some(name),
        sequence,
    })
}
