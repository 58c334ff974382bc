//! Sequence analysis core: normalization, translation and motif search.
//!
//! This module provides the fundamental types and operations used by both
//! the command-line tool and the web service:
//!
//! - [`DnaSequence`]: A validated, uppercase sequence over {A, C, G, T, N}
//! - [`Frame`]: A reading frame (1, 2 or 3)
//! - [`Motif`]: A validated IUPAC motif with overlapping search
//! - [`analyze`]: The single entry point combining all three
//!
//! ## IUPAC Codes
//!
//! | Code | Bases | Code | Bases |
//! |------|-------|------|-------|
//! | R    | A, G  | M    | A, C  |
//! | Y    | C, T  | B    | C, G, T |
//! | S    | C, G  | D    | A, G, T |
//! | W    | A, T  | H    | A, C, T |
//! | K    | G, T  | V    | A, C, G |
//! | N    | A, C, G, T | | |
//!
//! All operations are pure and the genetic code and IUPAC tables are
//! `static`, so concurrent callers share nothing mutable.

pub mod analysis;
pub mod error;
pub mod motif;
pub mod sequence;
pub mod translate;
pub mod types;

pub use analysis::{analyze, AnalysisOptions, AnalysisResult};
pub use error::AnalysisError;
pub use motif::{find_motifs, Motif};
pub use sequence::{normalize_dna, DnaSequence};
pub use translate::translate;
pub use types::Frame;
