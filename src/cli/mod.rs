//! Command-line interface for dna-motif-finder.
//!
//! This module implements the CLI using clap. Modes:
//!
//! - **analyze** (default): Translate a sequence given as an argument or file
//! - **interactive**: Prompt for each field when no sequence is given
//! - **serve**: Start the web interface
//!
//! ## Usage
//!
//! ```text
//! # Translate a sequence and search for a motif
//! dna-motif-finder ATGAAATGA --stop-at-stop --motif AAR
//!
//! # Read the first record of a FASTA file, second frame, reverse strand
//! dna-motif-finder --input gene.fa --frame 2 --reverse-complement
//!
//! # Pipe a sequence in
//! cat gene.fa | dna-motif-finder --input -
//!
//! # JSON output for scripting
//! dna-motif-finder ATGAAATGA --format json
//!
//! # Prompt for everything
//! dna-motif-finder
//!
//! # Start web UI
//! dna-motif-finder serve --port 8080 --open
//! ```

use clap::{Parser, Subcommand};

use crate::utils::validation::DEFAULT_MAX_SEQUENCE_LENGTH;

pub mod analyze;
pub mod interactive;

#[derive(Parser)]
#[command(name = "dna-motif-finder")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Translate DNA and find IUPAC motifs")]
#[command(
    long_about = "dna-motif-finder translates a DNA sequence into protein and searches it for motifs.\n\nIt supports:\n- Reading frames 1-3 and reverse-complement translation\n- Stopping at the first stop codon\n- IUPAC ambiguity codes in motifs, reporting every overlapping match\n\nRun without a sequence to be prompted for each option."
)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub analyze: analyze::AnalyzeArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,

    /// Maximum sequence length (bases) accepted per request
    #[arg(long, default_value_t = DEFAULT_MAX_SEQUENCE_LENGTH)]
    pub max_sequence_length: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
