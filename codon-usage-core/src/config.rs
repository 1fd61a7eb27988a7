use serde::Serialize;

use crate::bias::BiasMode;
use crate::constants::DEFAULT_BIAS_THRESHOLD;

/// Which codon usage table is produced for an input corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AnalysisMode {
    /// One report per input sequence.
    #[default]
    Gene,
    /// A single report for the sum of every sequence in the corpus.
    Genome,
}

/// Output format options for codon usage reports.
///
/// # Formats
///
/// - **Text**: Human readable table grouped by amino acid
/// - **TSV**: One tab-separated row per codon, with raw counts
/// - **XML**: `<gene>`/`<genome>` document with frequency, ratio and percent sections
/// - **JSON**: One JSON object per report and line
///
/// # Examples
///
/// ```rust
/// use codon_usage_core::config::{CodonUsageConfig, OutputFormat};
///
/// let config = CodonUsageConfig {
///     output_format: OutputFormat::Tsv,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum OutputFormat {
    /// Amino acid, codon, ratio and percent rows under a sequence header.
    #[default]
    Text,

    /// Tab-delimited rows: amino acid, codon, count, ratio, percent.
    ///
    /// Easy to load into spreadsheets and data frames.
    Tsv,

    /// XML document with `codon_freq`, `codon_ratio` and `codon_percent`
    /// sections, one element per codon.
    Xml,

    /// Serialized results, one object per line.
    Json,
}

/// Layout of the input corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum InputFormat {
    /// FASTA records, one coding sequence each.
    #[default]
    Fasta,
    /// One gene per line: identifier, whitespace, sequence.
    Flat,
}

/// Configuration settings for codon usage analysis.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use codon_usage_core::config::CodonUsageConfig;
///
/// let config = CodonUsageConfig::default();
/// assert_eq!(config.bias_threshold, 0.5);
/// ```
///
/// ## Genome aggregate of a flat corpus with symmetric bias detection
///
/// ```rust
/// use codon_usage_core::bias::BiasMode;
/// use codon_usage_core::config::{AnalysisMode, CodonUsageConfig, InputFormat};
///
/// let config = CodonUsageConfig {
///     mode: AnalysisMode::Genome,
///     input_format: InputFormat::Flat,
///     bias_mode: BiasMode::Absolute,
///     num_threads: Some(4),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodonUsageConfig {
    /// Per-gene reports or a genome aggregate.
    ///
    /// **Default**: [`AnalysisMode::Gene`]
    pub mode: AnalysisMode,

    /// Format of written reports. See [`OutputFormat`].
    ///
    /// **Default**: [`OutputFormat::Text`]
    pub output_format: OutputFormat,

    /// Layout of corpus files read by the analyzer.
    ///
    /// **Default**: [`InputFormat::Fasta`]
    pub input_format: InputFormat,

    /// Minimum ratio difference for a codon to count as biased.
    ///
    /// Must be finite and non-negative.
    ///
    /// **Default**: `0.5`
    pub bias_threshold: f64,

    /// Direction of the bias comparison.
    ///
    /// **Default**: [`BiasMode::OneSided`] (gene above genome only)
    pub bias_mode: BiasMode,

    /// Attach per-gene biased codons to genome mode results.
    ///
    /// **Default**: `false`
    pub detect_bias: bool,

    /// Number of threads to use for parallel processing.
    ///
    /// When set, configures the Rayon global thread pool used to count
    /// genes. Set to `None` for automatic detection.
    ///
    /// **Default**: `None` (use all available cores)
    pub num_threads: Option<usize>,

    /// Suppress informational output during processing.
    ///
    /// **Default**: `false`
    pub quiet: bool,
}

impl Default for CodonUsageConfig {
    fn default() -> Self {
        Self {
            mode: AnalysisMode::Gene,
            output_format: OutputFormat::Text,
            input_format: InputFormat::Fasta,
            bias_threshold: DEFAULT_BIAS_THRESHOLD,
            bias_mode: BiasMode::OneSided,
            detect_bias: false,
            num_threads: None,
            quiet: false,
        }
    }
}
