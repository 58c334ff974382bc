//! # dna-motif-finder
//!
//! A library for translating DNA sequences and finding IUPAC motifs.
//!
//! Given a raw nucleotide sequence, `dna-motif-finder` normalizes it, translates it into
//! protein under a chosen reading frame (optionally on the reverse complement and
//! optionally stopping at the first stop codon), and reports every position where an
//! IUPAC motif matches, overlapping matches included.
//!
//! ## Features
//!
//! - **Normalization**: Case-insensitive input, whitespace and line breaks ignored
//! - **Translation**: Standard genetic code, frames 1-3, reverse complement
//! - **Stop handling**: Stop codons shown as `*`, optionally ending translation
//! - **Ambiguity**: Codons containing `N` translate to `X`
//! - **Motif search**: All 15 IUPAC nucleotide codes, overlapping hits
//!
//! ## Example
//!
//! ```rust
//! use dna_motif_finder::{analyze, AnalysisOptions};
//!
//! let options = AnalysisOptions {
//!     frame: 1,
//!     stop_at_stop: true,
//!     motif: Some("GGN".to_string()),
//!     ..AnalysisOptions::default()
//! };
//!
//! let result = analyze("ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG", &options).unwrap();
//! assert_eq!(result.protein, "MAIVMGR*");
//! assert_eq!(result.motif_positions, Some(vec![2, 14, 15, 26, 27]));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Normalization, translation, motif search and the `analyze` entry point
//! - [`parsing`]: FASTA and plain-text sequence input
//! - [`utils`]: Input size limits
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server for browser-based analysis

pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::core::analysis::{analyze, AnalysisOptions, AnalysisResult};
pub use crate::core::error::AnalysisError;
pub use crate::core::motif::{find_motifs, Motif};
pub use crate::core::sequence::{normalize_dna, DnaSequence};
pub use crate::core::translate::translate;
pub use crate::core::types::Frame;
