//! # codon-usage - Command-Line Codon Usage Reports
//!
//! Counts codons in protein-coding sequences and reports synonymous codon
//! ratios and codon percentages, per gene or for a whole genome.
//!
//! ## Usage
//!
//! ```bash
//! # Per-gene reports
//! codon-usage -i genes.fasta -o usage.txt
//!
//! # Genome-wide usage as XML
//! codon-usage -i genes.fasta -p genome -f xml -o whole_genome_usage.xml
//!
//! # Flat corpus (identifier and sequence per line) with bias detection
//! codon-usage -i seq_file.txt --input-format flat -p genome -b -f tsv
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: Input corpus (default: stdin)
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-f, --format <FORMAT>`: Output format: text, tsv, xml, json (default: text)
//! - `-p, --mode <MODE>`: Analysis mode: gene or genome (default: gene)
//! - `--input-format <FORMAT>`: Input layout: fasta or flat (default: fasta)
//! - `-b, --bias`: Compare every gene with the genome (genome mode only)
//! - `--threshold <X>`: Minimum ratio difference for bias (default: 0.5)
//! - `--symmetric`: Flag bias in both directions
//! - `-j, --threads <N>`: Worker threads (default: all cores)
//! - `-q, --quiet`: Suppress progress messages

use clap::{Arg, ArgAction, Command};
use codon_usage_core::bias::BiasMode;
use codon_usage_core::config::{AnalysisMode, CodonUsageConfig, InputFormat, OutputFormat};
use codon_usage_core::constants::VERSION;
use codon_usage_core::output::write_all_results;
use codon_usage_core::results::UsageResults;
use codon_usage_core::sequence::{GeneRecord, parse_fasta, parse_flat_corpus};
use codon_usage_core::{CodonUsageAnalyzer, CodonUsageError};
use log::{Level, info};
use simple_logger::init_with_level;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

/// Main entry point for the codon-usage CLI application.
///
/// Parses command-line arguments, configures the analyzer, reads the input
/// corpus, and writes reports in the requested format.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("codon-usage")
        .version(VERSION)
        .about("Codon usage statistics for genes and whole genomes")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Input corpus file (default: stdin)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: text, tsv, xml, json")
                .default_value("text"),
        )
        .arg(
            Arg::new("mode")
                .short('p')
                .long("mode")
                .value_name("MODE")
                .help("Analysis mode: gene or genome")
                .default_value("gene"),
        )
        .arg(
            Arg::new("input-format")
                .long("input-format")
                .value_name("FORMAT")
                .help("Input layout: fasta or flat (identifier and sequence per line)")
                .default_value("fasta"),
        )
        .arg(
            Arg::new("bias")
                .short('b')
                .long("bias")
                .action(ArgAction::SetTrue)
                .help("Report codons each gene over-uses relative to the genome"),
        )
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .value_name("X")
                .help("Minimum gene/genome ratio difference for bias (default: 0.5)"),
        )
        .arg(
            Arg::new("symmetric")
                .long("symmetric")
                .action(ArgAction::SetTrue)
                .help("Flag codons used less than the genome as well"),
        )
        .arg(
            Arg::new("threads")
                .short('j')
                .long("threads")
                .value_name("N")
                .help("Number of worker threads (default: all cores)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
        .get_matches();

    let quiet = matches.get_flag("quiet");
    init_with_level(if quiet { Level::Warn } else { Level::Info })?;
    let start = Instant::now();

    // Parse options
    let mut options = CodonUsageConfig {
        detect_bias: matches.get_flag("bias"),
        quiet,
        ..Default::default()
    };

    options.output_format = match matches.get_one::<String>("format").map(String::as_str) {
        Some("text") | Some("txt") => OutputFormat::Text,
        Some("tsv") => OutputFormat::Tsv,
        Some("xml") => OutputFormat::Xml,
        Some("json") => OutputFormat::Json,
        _ => return Err("Invalid output format".into()),
    };

    options.mode = match matches.get_one::<String>("mode").map(String::as_str) {
        Some("gene") => AnalysisMode::Gene,
        Some("genome") => AnalysisMode::Genome,
        _ => return Err("Invalid analysis mode".into()),
    };

    options.input_format = match matches.get_one::<String>("input-format").map(String::as_str) {
        Some("fasta") | Some("fa") => InputFormat::Fasta,
        Some("flat") => InputFormat::Flat,
        _ => return Err("Invalid input format".into()),
    };

    if options.detect_bias && options.mode != AnalysisMode::Genome {
        return Err("Bias detection requires genome mode (-p genome)".into());
    }

    if let Some(threshold) = matches.get_one::<String>("threshold") {
        options.bias_threshold = threshold
            .parse()
            .map_err(|_| "Invalid bias threshold")?;
    }
    if matches.get_flag("symmetric") {
        options.bias_mode = BiasMode::Absolute;
    }

    if let Some(threads) = matches.get_one::<String>("threads") {
        let threads: usize = threads
            .parse()
            .map_err(|_| "Invalid number of threads")?;
        options.num_threads = Some(threads);
    }

    let analyzer = CodonUsageAnalyzer::with_config(options)?;
    let genes = if let Some(input_file) = matches.get_one::<String>("input") {
        analyzer.read_corpus(input_file)?
    } else {
        read_stdin(analyzer.config.input_format)?
    };

    let results: Vec<UsageResults> = match analyzer.config.mode {
        AnalysisMode::Gene => analyzer.analyze_records(&genes),
        AnalysisMode::Genome => analyzer.analyze_genome(&genes)?.iter().cloned().collect(),
    };

    // Write output
    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    write_all_results(&mut writer, &results, analyzer.config.output_format)?;
    writer.flush()?;

    info!(
        "Analysis complete! Wrote {} reports for {} sequences in {:.2?}.",
        results.len(),
        genes.len(),
        start.elapsed()
    );

    Ok(())
}

fn read_stdin(format: InputFormat) -> Result<Vec<GeneRecord>, CodonUsageError> {
    let stdin = io::stdin();
    match format {
        InputFormat::Fasta => parse_fasta(stdin.lock()),
        InputFormat::Flat => parse_flat_corpus(stdin.lock()),
    }
}
