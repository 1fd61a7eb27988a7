use serde::Serialize;

use crate::codon::Codon;
use crate::config::AnalysisMode;
use crate::usage::CodonStatistics;

/// Codon usage results for one gene or one genome aggregate.
///
/// # Fields
///
/// - `sequence_info`: Metadata about the analyzed sequence or corpus
/// - `scope`: Whether the statistics describe a gene or a genome
/// - `statistics`: Frequencies, ratios, percentages and the merged report
/// - `biased_codons`: Codons flagged against the genome aggregate, if bias
///   detection ran
///
/// # Examples
///
/// ```rust,no_run
/// use codon_usage_core::{CodonUsageAnalyzer, config::CodonUsageConfig, config::OutputFormat};
/// use codon_usage_core::output::write_results;
///
/// let analyzer = CodonUsageAnalyzer::new(CodonUsageConfig::default());
/// let results = analyzer.analyze_sequence("ATGGCTGCCAAATTTTAA", None);
///
/// println!("Sequence: {}", results.sequence_info.header);
/// println!("Codons: {}", results.sequence_info.codon_count);
///
/// let mut output = std::fs::File::create("usage.tsv")?;
/// write_results(&mut output, &results, OutputFormat::Tsv)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageResults {
    pub sequence_info: SequenceInfo,

    pub scope: AnalysisMode,

    pub statistics: CodonStatistics,

    /// Codons whose gene ratio departs from the genome ratio.
    ///
    /// `None` when bias detection was not requested, which is always the
    /// case for genome aggregates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biased_codons: Option<Vec<Codon>>,
}

/// Information about a processed sequence or corpus.
///
/// # Examples
///
/// ```rust
/// # use codon_usage_core::results::SequenceInfo;
/// let info = SequenceInfo {
///     header: "AB000381".to_string(),
///     description: None,
///     length: 1_206,
///     codon_count: 402,
///     num_genes: 1,
/// };
///
/// println!("{}: {} bp, {} codons", info.header, info.length, info.codon_count);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceInfo {
    /// Sequence identifier, or `total` for a genome aggregate.
    pub header: String,

    /// Free text following the identifier in the FASTA header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Length in base pairs, summed over all genes for an aggregate.
    pub length: usize,

    /// Number of canonical codons counted.
    pub codon_count: u64,

    /// Number of genes folded into the statistics.
    pub num_genes: usize,
}

/// Genome aggregate together with the per-gene results it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenomeResults {
    pub genome: UsageResults,
    /// Per-gene results in corpus order. Empty unless bias detection ran.
    pub genes: Vec<UsageResults>,
}

impl GenomeResults {
    /// Genome aggregate first, then each gene.
    pub fn iter(&self) -> impl Iterator<Item = &UsageResults> {
        std::iter::once(&self.genome).chain(self.genes.iter())
    }
}
