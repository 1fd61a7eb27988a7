#![allow(dead_code)]

use assert_cmd::Command;

pub const FASTA_FIXTURE: &str = "tests/data/genes.fasta";
pub const FLAT_FIXTURE: &str = "tests/data/genes.txt";

/// Runs the codon-usage CLI with given arguments and returns its stdout.
pub fn run_codon_usage(args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("codon-usage")?;
    cmd.arg("-q").args(args);

    let output = cmd.assert().success().get_output().stdout.clone();
    Ok(String::from_utf8(output)?)
}

/// Runs the codon-usage CLI writing to `output_file` with the given format and mode.
pub fn run_codon_usage_to_file(
    input_file: &str,
    output_file: &str,
    format: &str,
    mode: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("codon-usage")?;
    cmd.arg("-i")
        .arg(input_file)
        .arg("-o")
        .arg(output_file)
        .arg("-f")
        .arg(format)
        .arg("-p")
        .arg(mode)
        .arg("-q");

    cmd.assert().success();
    Ok(())
}

/// Lines of a report that carry a non-zero count, ratio or percentage.
pub fn nonzero_rows(report: &str) -> Vec<&str> {
    report
        .lines()
        .filter(|line| !line.starts_with('#') && !line.starts_with('>'))
        .filter(|line| line.split_whitespace().skip(2).any(|f| f != "0" && f != "0.00" && f != "0.0"))
        .collect()
}

/// Compute a quick line-based similarity (ratio 0..1) for two strings.
pub fn similarity(a: &str, b: &str) -> f32 {
    similar::TextDiff::from_lines(a, b).ratio()
}
