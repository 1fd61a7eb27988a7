use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use codon_usage_core::bias::BiasMode;
use codon_usage_core::config::{AnalysisMode, CodonUsageConfig, InputFormat, OutputFormat};
use codon_usage_core::engine::CodonUsageAnalyzer;
use codon_usage_core::output::write_all_results;
use codon_usage_core::results::UsageResults;
use codon_usage_core::sequence::{GeneRecord, parse_fasta, parse_flat_corpus};
use codon_usage_core::usage::gene_usage;
use codon_usage_core::CodonUsageError;

/// Options for configuring codon usage analysis
#[pyclass]
#[derive(Clone)]
pub struct CodonUsageOptions {
    #[pyo3(get, set)]
    /// Analysis mode: "gene" for one report per sequence, "genome" for the corpus aggregate
    pub mode: String,

    #[pyo3(get, set)]
    /// Output format: "text", "tsv", "xml" or "json"
    pub format: String,

    #[pyo3(get, set)]
    /// Input layout: "fasta" or "flat" (identifier and sequence per line)
    pub input_format: String,

    #[pyo3(get, set)]
    /// Compare every gene with the genome aggregate (genome mode only)
    pub bias: bool,

    #[pyo3(get, set)]
    /// Minimum gene/genome ratio difference for a codon to be biased
    pub threshold: f64,

    #[pyo3(get, set)]
    /// Flag codons used less than the genome as well as more
    pub symmetric: bool,

    #[pyo3(get, set)]
    /// Number of threads to use (None for default)
    pub num_threads: Option<usize>,

    #[pyo3(get, set)]
    /// Suppress informational output
    pub quiet: bool,
}

impl Default for CodonUsageOptions {
    fn default() -> Self {
        let config = CodonUsageConfig::default();
        CodonUsageOptions {
            mode: "gene".to_string(),
            format: "text".to_string(),
            input_format: "fasta".to_string(),
            bias: config.detect_bias,
            threshold: config.bias_threshold,
            symmetric: false,
            num_threads: None,
            quiet: true,
        }
    }
}

#[pymethods]
impl CodonUsageOptions {
    #[new]
    #[pyo3(signature = (
        mode="gene",
        format="text",
        input_format="fasta",
        bias=false,
        threshold=0.5,
        symmetric=false,
        num_threads=None,
        quiet=true
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        mode: &str,
        format: &str,
        input_format: &str,
        bias: bool,
        threshold: f64,
        symmetric: bool,
        num_threads: Option<usize>,
        quiet: bool,
    ) -> PyResult<Self> {
        Ok(CodonUsageOptions {
            mode: mode.to_string(),
            format: format.to_string(),
            input_format: input_format.to_string(),
            bias,
            threshold,
            symmetric,
            num_threads,
            quiet,
        })
    }

    fn __repr__(&self) -> String {
        format!(
            "CodonUsageOptions(mode='{}', format='{}', input_format='{}', bias={}, threshold={}, symmetric={}, num_threads={:?}, quiet={})",
            self.mode, self.format, self.input_format, self.bias,
            self.threshold, self.symmetric, self.num_threads, self.quiet
        )
    }
}

/// Result from codon usage analysis
#[pyclass]
pub struct CodonUsageResult {
    #[pyo3(get)]
    /// The formatted report (text, TSV, XML or JSON)
    pub output: String,

    #[pyo3(get)]
    /// Number of sequences read
    pub sequence_count: usize,

    #[pyo3(get)]
    /// Number of reports written
    pub report_count: usize,

    #[pyo3(get)]
    /// Total number of codons counted across the input
    pub codon_count: u64,
}

#[pymethods]
impl CodonUsageResult {
    fn __repr__(&self) -> String {
        format!(
            "CodonUsageResult(sequence_count={}, report_count={}, codon_count={}, output_length={})",
            self.sequence_count,
            self.report_count,
            self.codon_count,
            self.output.len()
        )
    }
}

fn to_py_err(error: CodonUsageError) -> PyErr {
    match error {
        CodonUsageError::IoError(e) => PyIOError::new_err(e.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

/// Convert CodonUsageOptions to CodonUsageConfig
fn options_to_config(options: &CodonUsageOptions) -> PyResult<CodonUsageConfig> {
    let mode = match options.mode.as_str() {
        "gene" => AnalysisMode::Gene,
        "genome" => AnalysisMode::Genome,
        _ => {
            return Err(PyValueError::new_err(
                "Invalid mode. Must be 'gene' or 'genome'",
            ))
        }
    };

    let output_format = match options.format.as_str() {
        "text" | "txt" => OutputFormat::Text,
        "tsv" => OutputFormat::Tsv,
        "xml" => OutputFormat::Xml,
        "json" => OutputFormat::Json,
        _ => {
            return Err(PyValueError::new_err(
                "Invalid output format. Must be one of: text, tsv, xml, json",
            ))
        }
    };

    let input_format = match options.input_format.as_str() {
        "fasta" | "fa" => InputFormat::Fasta,
        "flat" => InputFormat::Flat,
        _ => {
            return Err(PyValueError::new_err(
                "Invalid input format. Must be 'fasta' or 'flat'",
            ))
        }
    };

    if options.bias && mode != AnalysisMode::Genome {
        return Err(PyValueError::new_err(
            "Bias detection requires mode='genome'",
        ));
    }

    if !options.threshold.is_finite() || options.threshold < 0.0 {
        return Err(PyValueError::new_err(
            "Invalid threshold. Must be a finite, non-negative number",
        ));
    }

    Ok(CodonUsageConfig {
        mode,
        output_format,
        input_format,
        bias_threshold: options.threshold,
        bias_mode: if options.symmetric {
            BiasMode::Absolute
        } else {
            BiasMode::OneSided
        },
        detect_bias: options.bias,
        // Python callers get a private pool per call instead of the global one
        num_threads: None,
        quiet: options.quiet,
    })
}

fn parse_content(content: &str, format: InputFormat) -> PyResult<Vec<GeneRecord>> {
    let genes = match format {
        InputFormat::Fasta => parse_fasta(content.as_bytes()),
        InputFormat::Flat => parse_flat_corpus(content.as_bytes()),
    }
    .map_err(to_py_err)?;

    if genes.is_empty() {
        return Err(PyValueError::new_err("No sequences found in input"));
    }
    Ok(genes)
}

fn run_analysis(analyzer: &CodonUsageAnalyzer, genes: &[GeneRecord]) -> PyResult<Vec<UsageResults>> {
    match analyzer.config.mode {
        AnalysisMode::Gene => Ok(analyzer.analyze_records(genes)),
        AnalysisMode::Genome => {
            let results = analyzer.analyze_genome(genes).map_err(to_py_err)?;
            Ok(results.iter().cloned().collect())
        }
    }
}

/// Analyze codon usage of one or more sequences
///
/// Args:
///     content (str): FASTA records, or a flat corpus when input_format="flat"
///     options (CodonUsageOptions, optional): Configuration options for the analysis
///
/// Returns:
///     CodonUsageResult: Object containing the formatted report and statistics
///
/// Example:
///     >>> import codon_usage
///     >>> result = codon_usage.analyze_sequence(">gene1\\nATGAAAAAGTAA")
///     >>> print(result.codon_count)
#[pyfunction]
#[pyo3(signature = (content, options=None))]
fn analyze_sequence(content: &str, options: Option<CodonUsageOptions>) -> PyResult<CodonUsageResult> {
    let options = options.unwrap_or_default();
    let config = options_to_config(&options)?;
    let genes = parse_content(content, config.input_format)?;
    let analyzer = CodonUsageAnalyzer::new(config);

    let results = match options.num_threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| PyValueError::new_err(format!("Failed to configure thread pool: {}", e)))?
            .install(|| run_analysis(&analyzer, &genes))?,
        None => run_analysis(&analyzer, &genes)?,
    };

    let mut output = Vec::new();
    write_all_results(&mut output, &results, analyzer.config.output_format)
        .map_err(|e| PyIOError::new_err(format!("Output error: {}", e)))?;

    let output_str = String::from_utf8(output)
        .map_err(|e| PyValueError::new_err(format!("UTF-8 conversion error: {}", e)))?;

    let codon_count = match analyzer.config.mode {
        AnalysisMode::Gene => results.iter().map(|r| r.sequence_info.codon_count).sum(),
        AnalysisMode::Genome => results
            .first()
            .map_or(0, |genome| genome.sequence_info.codon_count),
    };

    Ok(CodonUsageResult {
        output: output_str,
        sequence_count: genes.len(),
        report_count: results.len(),
        codon_count,
    })
}

/// Analyze codon usage of the sequences in a file
///
/// Args:
///     file_path (str): Path to a FASTA file or flat corpus
///     options (CodonUsageOptions, optional): Configuration options for the analysis
///
/// Returns:
///     CodonUsageResult: Object containing the formatted report and statistics
#[pyfunction]
#[pyo3(signature = (file_path, options=None))]
fn analyze_file(file_path: &str, options: Option<CodonUsageOptions>) -> PyResult<CodonUsageResult> {
    let content = std::fs::read_to_string(file_path)
        .map_err(|e| PyIOError::new_err(format!("Failed to read file '{}': {}", file_path, e)))?;

    analyze_sequence(&content, options)
}

/// Codon usage of a single coding sequence
///
/// Args:
///     sequence (str): Nucleotide sequence read in frame from its first base
///
/// Returns:
///     tuple[dict[str, list[str]], dict[str, tuple[float, float]]]: the
///     synonymous codon table keyed by amino acid symbol, and each codon's
///     (ratio, percent)
///
/// Example:
///     >>> import codon_usage
///     >>> table, usage = codon_usage.codon_usage("ATGAAAAAGTAA")
///     >>> usage["AAA"]
///     (0.5, 25.0)
#[pyfunction]
fn codon_usage<'py>(
    py: Python<'py>,
    sequence: &str,
) -> PyResult<(Bound<'py, PyDict>, Bound<'py, PyDict>)> {
    let report = gene_usage(sequence);

    let table = PyDict::new_bound(py);
    for (amino_acid, codons) in report.synonymous_codons().iter() {
        let codons: Vec<&str> = codons.iter().map(|codon| codon.as_str()).collect();
        table.set_item(amino_acid.symbol().to_string(), codons)?;
    }

    let usage = PyDict::new_bound(py);
    for entry in report.iter() {
        usage.set_item(entry.codon.as_str(), (entry.ratio, entry.percent))?;
    }

    Ok((table, usage))
}

/// codon_usage - Codon usage statistics for genes and whole genomes
///
/// This module provides Python bindings for counting codons, computing
/// synonymous codon ratios and percentages, and detecting codon bias.
#[pymodule]
#[pyo3(name = "codon_usage")]
fn codon_usage_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<CodonUsageOptions>()?;
    m.add_class::<CodonUsageResult>()?;
    m.add_function(wrap_pyfunction!(analyze_sequence, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_file, m)?)?;
    m.add_function(wrap_pyfunction!(codon_usage, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("__doc__", "Codon usage statistics for genes and whole genomes")?;

    Ok(())
}
