use std::path::Path;

use log::{debug, info};
use rayon::prelude::*;

use crate::{
    CodonUsageError,
    bias::BiasDetector,
    config::{AnalysisMode, CodonUsageConfig},
    constants::{DEFAULT_SEQUENCE_HEADER, GENOME_HEADER},
    genome::{GenomeAggregate, GenomeAggregator, aggregate_parallel},
    results::{GenomeResults, SequenceInfo, UsageResults},
    sequence::{GeneRecord, read_corpus, read_fasta_sequences},
    usage::CodonStatistics,
};

/// High-level codon usage analyzer.
///
/// Wraps the counting, ratio, percentage, aggregation and bias stages behind
/// a single configuration, and provides convenient methods for analyzing
/// sequences from various sources (files, strings, byte slices).
///
/// # Modes
///
/// - **Gene** (default): one report per sequence
/// - **Genome**: one aggregate report for the whole corpus, optionally with
///   every gene compared against it
///
/// # Examples
///
/// ## Analyze a sequence string
///
/// ```rust
/// use codon_usage_core::{CodonUsageAnalyzer, config::CodonUsageConfig};
///
/// let analyzer = CodonUsageAnalyzer::new(CodonUsageConfig::default());
/// let results = analyzer.analyze_sequence("ATGAAAAAGTAA", Some("gene1".to_string()));
///
/// assert_eq!(results.sequence_info.codon_count, 4);
/// assert_eq!(results.statistics.report.ratio("AAA".parse()?), Some(0.5));
/// # Ok::<(), codon_usage_core::types::CodonUsageError>(())
/// ```
///
/// ## Genome aggregate with bias detection
///
/// ```rust,no_run
/// use codon_usage_core::{CodonUsageAnalyzer, config::{AnalysisMode, CodonUsageConfig, InputFormat}};
///
/// let config = CodonUsageConfig {
///     mode: AnalysisMode::Genome,
///     input_format: InputFormat::Flat,
///     detect_bias: true,
///     num_threads: Some(4),
///     ..Default::default()
/// };
///
/// let analyzer = CodonUsageAnalyzer::with_config(config)?;
/// let genes = analyzer.read_corpus("seq_file.txt")?;
/// let results = analyzer.analyze_genome(&genes)?;
///
/// for gene in &results.genes {
///     println!("{}: {:?}", gene.sequence_info.header, gene.biased_codons);
/// }
/// # Ok::<(), codon_usage_core::types::CodonUsageError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CodonUsageAnalyzer {
    /// Configuration options for codon usage analysis
    pub config: CodonUsageConfig,
}

impl Default for CodonUsageAnalyzer {
    fn default() -> Self {
        Self::new(CodonUsageConfig::default())
    }
}

impl CodonUsageAnalyzer {
    /// Creates a new analyzer with the specified configuration.
    ///
    /// The configuration is used as given; see [`Self::with_config`] for a
    /// validating constructor that also sizes the thread pool.
    pub const fn new(config: CodonUsageConfig) -> Self {
        Self { config }
    }

    /// Creates a new analyzer after validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CodonUsageError::InvalidConfig`] if:
    /// - The bias threshold is negative or not finite
    /// - The thread count is zero
    /// - The global thread pool cannot be configured
    ///
    /// # Examples
    ///
    /// ```rust
    /// use codon_usage_core::{CodonUsageAnalyzer, config::CodonUsageConfig};
    ///
    /// let config = CodonUsageConfig {
    ///     bias_threshold: -1.0,
    ///     ..Default::default()
    /// };
    /// assert!(CodonUsageAnalyzer::with_config(config).is_err());
    /// ```
    pub fn with_config(config: CodonUsageConfig) -> Result<Self, CodonUsageError> {
        if !config.bias_threshold.is_finite() || config.bias_threshold < 0.0 {
            return Err(CodonUsageError::InvalidConfig(format!(
                "bias threshold must be a finite, non-negative number, got {}",
                config.bias_threshold
            )));
        }

        if let Some(num_threads) = config.num_threads {
            if num_threads == 0 {
                return Err(CodonUsageError::InvalidConfig(
                    "number of threads must be at least 1".to_string(),
                ));
            }
            rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build_global()
                .map_err(|e| {
                    CodonUsageError::InvalidConfig(format!(
                        "Failed to configure thread pool: {}",
                        e
                    ))
                })?;
        }

        Ok(Self { config })
    }

    /// Bias detector built from the configured threshold and mode.
    pub fn bias_detector(&self) -> BiasDetector {
        BiasDetector::new(self.config.bias_threshold, self.config.bias_mode)
    }

    /// Reads a corpus file in the configured input format.
    pub fn read_corpus<P: AsRef<Path>>(&self, path: P) -> Result<Vec<GeneRecord>, CodonUsageError> {
        let genes = read_corpus(path, self.config.input_format)?;
        if !self.config.quiet {
            info!("Read {} sequences", genes.len());
        }
        Ok(genes)
    }

    /// Analyzes every sequence of a FASTA file as an individual gene.
    ///
    /// # Errors
    ///
    /// Returns [`CodonUsageError`] if the file cannot be read or is not
    /// valid FASTA.
    pub fn analyze_fasta_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<UsageResults>, CodonUsageError> {
        let genes = read_fasta_sequences(path)?;
        Ok(self.analyze_records(&genes))
    }

    /// Reads a corpus file and analyzes it according to the configured mode.
    ///
    /// Gene mode yields one result per sequence. Genome mode yields the
    /// aggregate first, followed by per-gene results when bias detection is
    /// enabled.
    pub fn analyze_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<UsageResults>, CodonUsageError> {
        let genes = self.read_corpus(path)?;
        match self.config.mode {
            AnalysisMode::Gene => Ok(self.analyze_records(&genes)),
            AnalysisMode::Genome => {
                let results = self.analyze_genome(&genes)?;
                Ok(results.iter().cloned().collect())
            }
        }
    }

    /// Analyzes a single sequence from a string.
    ///
    /// The header defaults to `CodonUsage_Seq_1`.
    pub fn analyze_sequence(&self, sequence: &str, header: Option<String>) -> UsageResults {
        let header = header.unwrap_or_else(|| DEFAULT_SEQUENCE_HEADER.to_string());
        self.analyze_sequence_bytes(sequence.as_bytes(), header, None)
    }

    /// Analyzes a single sequence from raw bytes.
    ///
    /// A sequence without any canonical codon is not an error: the result
    /// carries zero ratios and an empty percentage table.
    pub fn analyze_sequence_bytes(
        &self,
        sequence: &[u8],
        header: String,
        description: Option<String>,
    ) -> UsageResults {
        let statistics = CodonStatistics::from_sequence(sequence);
        debug!(
            "{}: {} codons in {} bp",
            header,
            statistics.frequencies.total(),
            sequence.len()
        );

        UsageResults {
            sequence_info: SequenceInfo {
                header,
                description,
                length: sequence.len(),
                codon_count: statistics.frequencies.total(),
                num_genes: 1,
            },
            scope: AnalysisMode::Gene,
            statistics,
            biased_codons: None,
        }
    }

    pub fn analyze_record(&self, record: &GeneRecord) -> UsageResults {
        self.analyze_sequence_bytes(
            &record.sequence,
            record.id.clone(),
            record.description.clone(),
        )
    }

    /// Analyzes each record independently on the rayon thread pool.
    ///
    /// Results keep the order of `records`.
    pub fn analyze_records(&self, records: &[GeneRecord]) -> Vec<UsageResults> {
        records
            .par_iter()
            .map(|record| self.analyze_record(record))
            .collect()
    }

    /// Aggregates a corpus into genome-wide codon usage.
    ///
    /// When bias detection is enabled, every gene is also analyzed and its
    /// report compared with the aggregate. The aggregate is then summed from
    /// those per-gene tables, so each gene is counted once.
    ///
    /// # Errors
    ///
    /// Returns [`CodonUsageError::EmptyCorpus`] if `records` is empty.
    pub fn analyze_genome(&self, records: &[GeneRecord]) -> Result<GenomeResults, CodonUsageError> {
        if records.is_empty() {
            return Err(CodonUsageError::EmptyCorpus);
        }

        let (aggregate, genes) = if self.config.detect_bias {
            let mut genes = self.analyze_records(records);
            let mut aggregator = GenomeAggregator::new();
            for gene in &genes {
                aggregator
                    .add_frequencies(&gene.statistics.frequencies, gene.sequence_info.length);
            }
            let aggregate = aggregator.finish();

            let detector = self.bias_detector();
            for gene in &mut genes {
                gene.biased_codons =
                    Some(detector.detect(&gene.statistics.report, aggregate.report()));
            }
            let flagged = genes
                .iter()
                .filter(|gene| gene.biased_codons.as_ref().is_some_and(|c| !c.is_empty()))
                .count();
            if !self.config.quiet {
                info!("{} of {} genes have biased codons", flagged, genes.len());
            }
            (aggregate, genes)
        } else {
            (aggregate_parallel(records), Vec::new())
        };
        if !self.config.quiet {
            info!(
                "Aggregated {} genes ({} codons)",
                aggregate.gene_count,
                aggregate.frequencies().total()
            );
        }

        Ok(GenomeResults {
            genome: genome_results(aggregate),
            genes,
        })
    }
}

fn genome_results(aggregate: GenomeAggregate) -> UsageResults {
    UsageResults {
        sequence_info: SequenceInfo {
            header: GENOME_HEADER.to_string(),
            description: None,
            length: aggregate.total_length,
            codon_count: aggregate.frequencies().total(),
            num_genes: aggregate.gene_count,
        },
        scope: AnalysisMode::Genome,
        statistics: aggregate.statistics,
        biased_codons: None,
    }
}
