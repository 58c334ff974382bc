//! Line-by-line prompts used when no sequence is given on the command line.
//!
//! Prompts and validation messages go to the prompt writer (stderr in the
//! binary) so the result written to `out` stays machine-readable.

use std::io::{self, BufRead, Write};

use crate::cli::analyze::write_result;
use crate::cli::OutputFormat;
use crate::core::analysis::{analyze, AnalysisOptions};
use crate::core::motif::Motif;
use crate::core::sequence::DnaSequence;
use crate::core::types::Frame;

struct Prompter<R, P> {
    input: R,
    prompts: P,
}

impl<R: BufRead, P: Write> Prompter<R, P> {
    /// Print `prompt` and read one trimmed line; EOF is an error
    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.prompts, "{prompt}")?;
        self.prompts.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            anyhow::bail!("Input closed before all prompts were answered");
        }
        Ok(line.trim().to_string())
    }

    fn complain(&mut self, message: impl std::fmt::Display) -> anyhow::Result<()> {
        writeln!(self.prompts, "Error: {message}")?;
        Ok(())
    }

    fn ask_sequence(&mut self) -> anyhow::Result<String> {
        loop {
            let answer = self.ask("DNA sequence: ")?;
            match DnaSequence::parse(&answer) {
                Ok(_) => return Ok(answer),
                Err(e) => self.complain(e)?,
            }
        }
    }

    fn ask_frame(&mut self) -> anyhow::Result<i64> {
        loop {
            let answer = self.ask("Reading frame (1-3) [1]: ")?;
            if answer.is_empty() {
                return Ok(i64::from(Frame::FIRST.number()));
            }
            match answer.parse::<i64>() {
                Ok(n) => match Frame::new(n) {
                    Ok(frame) => return Ok(i64::from(frame.number())),
                    Err(e) => self.complain(e)?,
                },
                Err(_) => self.complain(format!("'{answer}' is not a number"))?,
            }
        }
    }

    fn ask_yes_no(&mut self, prompt: &str) -> anyhow::Result<bool> {
        loop {
            let answer = self.ask(prompt)?;
            match parse_yes_no(&answer) {
                Some(flag) => return Ok(flag),
                None => self.complain("Please answer y or n")?,
            }
        }
    }

    fn ask_motif(&mut self) -> anyhow::Result<Option<String>> {
        loop {
            let answer = self.ask("Motif (IUPAC codes, blank to skip): ")?;
            if answer.is_empty() {
                return Ok(None);
            }
            match Motif::parse(&answer) {
                Ok(_) => return Ok(Some(answer)),
                Err(e) => self.complain(e)?,
            }
        }
    }
}

/// Interpret a y/n answer; blank means no
fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.to_ascii_lowercase().as_str() {
        "" | "n" | "no" => Some(false),
        "y" | "yes" => Some(true),
        _ => None,
    }
}

/// Prompt for a sequence and options, re-asking on invalid answers.
///
/// # Errors
///
/// Returns an error if reading or writing fails or input ends early.
pub fn collect_request<R: BufRead, P: Write>(
    input: R,
    prompts: P,
) -> anyhow::Result<(String, AnalysisOptions)> {
    let mut prompter = Prompter { input, prompts };

    let sequence = prompter.ask_sequence()?;
    let frame = prompter.ask_frame()?;
    let reverse_complement = prompter.ask_yes_no("Use reverse complement? [y/N]: ")?;
    let stop_at_stop = prompter.ask_yes_no("Stop at first stop codon? [y/N]: ")?;
    let motif = prompter.ask_motif()?;

    Ok((
        sequence,
        AnalysisOptions {
            frame,
            reverse_complement,
            stop_at_stop,
            motif,
        },
    ))
}

/// Run one interactive session: prompt, analyze, write the result to `out`.
///
/// # Errors
///
/// Returns an error if prompting fails or the analysis is rejected.
pub fn run_session<R: BufRead, P: Write, O: Write>(
    input: R,
    prompts: P,
    out: &mut O,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let (sequence, options) = collect_request(input, prompts)?;
    let result = analyze(&sequence, &options)?;
    write_result(out, &result, format)?;
    out.flush()?;
    Ok(())
}

/// Execute interactive mode on the terminal
///
/// # Errors
///
/// Returns an error if prompting fails or the analysis is rejected.
pub fn run(format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if verbose {
        eprintln!("No sequence given; entering interactive mode");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), io::stderr(), &mut stdout.lock(), format)
}
