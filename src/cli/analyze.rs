use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::analysis::{analyze, AnalysisOptions, AnalysisResult};
use crate::parsing::fasta::{read_sequence, read_sequence_file, SequenceInput};

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// DNA sequence (A, C, G, T, N; case-insensitive, whitespace ignored)
    #[arg(conflicts_with = "input")]
    pub sequence: Option<String>,

    /// Read the sequence from a FASTA (optionally gzipped) or plain text file.
    /// Use '-' for stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Reading frame
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(i64).range(1..=3))]
    pub frame: i64,

    /// Use the reverse complement for translation
    #[arg(long)]
    pub reverse_complement: bool,

    /// Stop translation at the first stop codon
    #[arg(long)]
    pub stop_at_stop: bool,

    /// Motif to find (supports IUPAC ambiguity codes)
    #[arg(long)]
    pub motif: Option<String>,
}

impl AnalyzeArgs {
    /// Whether a sequence was supplied on the command line
    #[must_use]
    pub fn has_input(&self) -> bool {
        self.sequence.is_some() || self.input.is_some()
    }

    #[must_use]
    pub fn options(&self) -> AnalysisOptions {
        AnalysisOptions {
            frame: self.frame,
            reverse_complement: self.reverse_complement,
            stop_at_stop: self.stop_at_stop,
            motif: self.motif.clone(),
        }
    }
}

/// Execute a flag-driven analysis
///
/// # Errors
///
/// Returns an error if the input cannot be read or fails validation.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AnalyzeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let input = load_input(&args)?;

    if verbose {
        if let Some(name) = &input.name {
            eprintln!("Read FASTA record '{name}'");
        }
    }

    let result = analyze(&input.sequence, &args.options())?;

    if verbose {
        eprintln!(
            "Translated {} bases into {} residues",
            result.dna.len(),
            result.protein.len()
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, &result, format)?;
    out.flush()?;

    Ok(())
}

fn load_input(args: &AnalyzeArgs) -> anyhow::Result<SequenceInput> {
    if let Some(sequence) = &args.sequence {
        return Ok(SequenceInput {
            name: None,
            sequence: sequence.clone(),
        });
    }

    match &args.input {
        Some(path) if path.to_string_lossy() == "-" => Ok(read_sequence(io::stdin().lock())?),
        Some(path) => Ok(read_sequence_file(path)?),
        None => anyhow::bail!("No sequence given: pass a SEQUENCE argument or --input"),
    }
}

/// Write an analysis result in the requested format
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_result<W: Write>(
    out: &mut W,
    result: &AnalysisResult,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, result)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, result)?;
            writeln!(out)?;
        }
        OutputFormat::Tsv => write_tsv(out, result)?,
    }
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn join_positions(positions: &[usize], separator: &str) -> String {
    positions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

fn write_text<W: Write>(out: &mut W, result: &AnalysisResult) -> io::Result<()> {
    writeln!(out, "DNA:      {}", result.dna)?;
    writeln!(out, "Protein:  {}", result.protein)?;
    writeln!(out, "Frame:    {}", result.frame)?;
    writeln!(out, "Reverse complement: {}", yes_no(result.reverse_complement))?;
    writeln!(out, "Stop at stop: {}", yes_no(result.stop_at_stop))?;

    if let (Some(motif), Some(positions)) = (&result.motif, &result.motif_positions) {
        if positions.is_empty() {
            writeln!(out, "Motif '{motif}' not found.")?;
        } else {
            writeln!(
                out,
                "Motif '{motif}' found at positions (0-based): {}",
                join_positions(positions, ", ")
            )?;
        }
    }

    Ok(())
}

fn write_tsv<W: Write>(out: &mut W, result: &AnalysisResult) -> io::Result<()> {
    writeln!(
        out,
        "dna\tprotein\tframe\treverse_complement\tstop_at_stop\tmotif\tmotif_positions"
    )?;
    writeln!(
        out,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        result.dna,
        result.protein,
        result.frame,
        result.reverse_complement,
        result.stop_at_stop,
        result.motif.as_deref().unwrap_or(""),
        result
            .motif_positions
            .as_deref()
            .map(|p| join_positions(p, ","))
            .unwrap_or_default(),
    )
}
