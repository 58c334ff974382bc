//! Readers that turn files and pasted text into raw sequence input.
//!
//! Input may be:
//!
//! - **FASTA**: The first record is used; its sequence lines are joined
//! - **Gzip-compressed FASTA**: `.gz` / `.bgz` files are decompressed first
//! - **Plain text**: Anything without a `>` definition line is passed through
//!
//! Nothing here validates bases; that is the job of
//! [`DnaSequence::parse`](crate::core::sequence::DnaSequence::parse).
//!
//! ## Example
//!
//! ```rust
//! use dna_motif_finder::parsing::fasta::extract_sequence_text;
//!
//! let input = extract_sequence_text(">seq1 test\nATGAAA\nTGA\n").unwrap();
//! assert_eq!(input.name.as_deref(), Some("seq1"));
//! assert_eq!(input.sequence, "ATGAAATGA");
//! ```

use thiserror::Error;

pub mod fasta;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Input too large: exceeds maximum of {0} bytes")]
    InputTooLarge(usize),
}
