//! End-to-end tests for the command-line tool.
//!
//! These drive the compiled binary with flags, files, stdin and the
//! interactive prompt, checking stdout, stderr and exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    Command::cargo_bin("dna-motif-finder").expect("binary should build")
}

#[test]
fn test_translate_with_stop_at_stop() {
    cmd()
        .args(["ATGAAATGA", "--stop-at-stop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DNA:      ATGAAATGA"))
        .stdout(predicate::str::contains("Protein:  MK*"))
        .stdout(predicate::str::contains("Stop at stop: yes"));
}

#[test]
fn test_lowercase_input_is_normalized() {
    cmd()
        .args(["atg aaa tga"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DNA:      ATGAAATGA"));
}

#[test]
fn test_motif_positions_reported() {
    cmd()
        .args([
            "ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG",
            "--motif",
            "ggn",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Motif 'GGN' found at positions (0-based): 2, 14, 15, 26, 27",
        ));
}

#[test]
fn test_motif_not_found() {
    cmd()
        .args(["AAAA", "--motif", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Motif 'C' not found."));
}

#[test]
fn test_reverse_complement_and_frame() {
    cmd()
        .args(["TCATTTCAT", "--reverse-complement", "--frame", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Protein:  HF"))
        .stdout(predicate::str::contains("Reverse complement: yes"));
}

#[test]
fn test_json_output() {
    let output = cmd()
        .args(["ATGAAATGA", "--motif", "AAR", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["dna"], "ATGAAATGA");
    assert_eq!(json["protein"], "MK*");
    assert_eq!(json["frame"], 1);
    assert_eq!(json["motif"], "AAR");
    assert_eq!(json["motif_positions"], serde_json::json!([3]));
}

#[test]
fn test_tsv_output() {
    cmd()
        .args(["ATG", "-f", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("dna\tprotein\tframe"))
        .stdout(predicate::str::contains("ATG\tM\t1\tfalse\tfalse\t\t"));
}

#[test]
fn test_invalid_base_fails() {
    cmd()
        .args(["ATGXAA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid base 'X'"));
}

#[test]
fn test_invalid_motif_fails() {
    cmd()
        .args(["ATGAAA", "--motif", "AZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported motif symbol 'Z'"));
}

#[test]
fn test_empty_motif_fails() {
    cmd()
        .args(["ATGAAA", "--motif", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Motif cannot be empty"));
}

#[test]
fn test_frame_out_of_range_is_a_usage_error() {
    cmd()
        .args(["ATGAAA", "--frame", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--frame"));
}

#[test]
fn test_fasta_file_input() {
    let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
    temp.write_all(b">orf1 test record\nATGAAA\nTGA\n").unwrap();
    temp.flush().unwrap();

    cmd()
        .arg("--input")
        .arg(temp.path())
        .arg("--stop-at-stop")
        .assert()
        .success()
        .stdout(predicate::str::contains("Protein:  MK*"));
}

#[test]
fn test_stdin_input() {
    cmd()
        .args(["--input", "-"])
        .write_stdin(">seq\nATGGGG\nTAA\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Protein:  MG*"));
}

#[test]
fn test_missing_file_fails() {
    cmd()
        .args(["--input", "/nonexistent/sequence.fa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_interactive_mode() {
    cmd()
        .write_stdin("ATGAAATGA\n1\nn\ny\nAAR\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("DNA sequence: "))
        .stdout(predicate::str::contains("Protein:  MK*"))
        .stdout(predicate::str::contains(
            "Motif 'AAR' found at positions (0-based): 3",
        ));
}

#[test]
fn test_interactive_mode_reprompts() {
    cmd()
        .write_stdin("ATGU\nATG\n9\n1\n\n\n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid base 'U'"))
        .stderr(predicate::str::contains("Frame must be 1, 2, or 3"))
        .stdout(predicate::str::contains("Protein:  M"));
}

#[test]
fn test_interactive_mode_eof_fails() {
    cmd().write_stdin("").assert().failure();
}
