//! Genome-wide codon usage.
//!
//! A genome aggregate is the element-wise sum of the codon frequency tables
//! of every gene in a corpus, with ratios and percentages derived once from
//! the merged table. Addition is commutative and associative, so the order
//! of the corpus does not matter and the counting step can run in parallel.

use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use crate::codon::CodonFrequencyTable;
use crate::sequence::GeneRecord;
use crate::usage::{CodonStatistics, UsageReport};

/// Codon usage of a whole corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenomeAggregate {
    /// Number of genes folded into the aggregate
    pub gene_count: usize,
    /// Combined length of every gene sequence in bases
    pub total_length: usize,
    pub statistics: CodonStatistics,
}

impl GenomeAggregate {
    pub fn frequencies(&self) -> &CodonFrequencyTable {
        &self.statistics.frequencies
    }

    /// Genome-wide report, shaped like a single-gene report.
    pub fn report(&self) -> &UsageReport {
        &self.statistics.report
    }
}

/// Running total of per-gene codon frequencies.
///
/// # Examples
///
/// ```rust
/// use codon_usage_core::genome::GenomeAggregator;
///
/// let mut aggregator = GenomeAggregator::new();
/// aggregator.add_gene("gene1", b"ATGAAA");
/// aggregator.add_gene("gene2", b"ATGGGG");
/// let genome = aggregator.finish();
///
/// assert_eq!(genome.gene_count, 2);
/// assert_eq!(genome.frequencies().count("ATG".parse()?), 2);
/// assert_eq!(genome.report().ratio("ATG".parse()?), Some(1.0));
/// # Ok::<(), codon_usage_core::types::CodonUsageError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GenomeAggregator {
    total: CodonFrequencyTable,
    gene_count: usize,
    total_length: usize,
}

impl GenomeAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one gene and add it to the running total.
    ///
    /// Returns the gene's own frequency table.
    pub fn add_gene(&mut self, id: &str, sequence: &[u8]) -> CodonFrequencyTable {
        let frequencies = CodonFrequencyTable::from_sequence(sequence);
        debug!("{}: {} codons counted", id, frequencies.total());
        self.add_frequencies(&frequencies, sequence.len());
        frequencies
    }

    /// Add an already counted gene of `length` bases.
    pub fn add_frequencies(&mut self, frequencies: &CodonFrequencyTable, length: usize) {
        self.total += frequencies;
        self.gene_count += 1;
        self.total_length += length;
    }

    pub fn gene_count(&self) -> usize {
        self.gene_count
    }

    /// Derive genome-wide ratios and percentages from the accumulated total.
    pub fn finish(self) -> GenomeAggregate {
        debug!(
            "Aggregated {} genes ({} codons)",
            self.gene_count,
            self.total.total()
        );
        GenomeAggregate {
            gene_count: self.gene_count,
            total_length: self.total_length,
            statistics: CodonStatistics::from_frequencies(self.total),
        }
    }
}

/// Aggregate a corpus sequentially.
pub fn aggregate<'a, I>(genes: I) -> GenomeAggregate
where
    I: IntoIterator<Item = &'a GeneRecord>,
{
    let mut aggregator = GenomeAggregator::new();
    for gene in genes {
        aggregator.add_gene(&gene.id, &gene.sequence);
    }
    aggregator.finish()
}

/// Aggregate a corpus, counting genes on the rayon thread pool.
///
/// Produces exactly the same aggregate as [`aggregate`].
pub fn aggregate_parallel(genes: &[GeneRecord]) -> GenomeAggregate {
    let (total, total_length) = genes
        .par_iter()
        .map(|gene| {
            (
                CodonFrequencyTable::from_sequence(&gene.sequence),
                gene.sequence.len(),
            )
        })
        .reduce(
            || (CodonFrequencyTable::new(), 0),
            |(a, len_a), (b, len_b)| (a + b, len_a + len_b),
        );

    let mut aggregator = GenomeAggregator::new();
    aggregator.total = total;
    aggregator.gene_count = genes.len();
    aggregator.total_length = total_length;
    aggregator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codon::{Codon, count_codons};

    fn codon(s: &str) -> Codon {
        s.parse().unwrap()
    }

    fn corpus() -> Vec<GeneRecord> {
        vec![
            GeneRecord::new("A", "ATGAAAAAGTTTTAA"),
            GeneRecord::new("B", "ATGGGGGGCTTCTGA"),
            GeneRecord::new("C", "atgaaaaaannntag"),
        ]
    }

    #[test]
    fn test_aggregate_is_sum_of_genes() {
        let genes = corpus();
        let genome = aggregate(&genes);
        let expected: CodonFrequencyTable = genes
            .iter()
            .map(|g| CodonFrequencyTable::from_sequence(&g.sequence))
            .sum();
        assert_eq!(genome.frequencies(), &expected);
        assert_eq!(genome.gene_count, 3);
        assert_eq!(genome.total_length, 45);
        assert_eq!(genome.frequencies().count(codon("ATG")), 3);
        assert_eq!(genome.frequencies().count(codon("AAA")), 3);
    }

    #[test]
    fn test_aggregate_order_independent() {
        let genes = corpus();
        let reordered = vec![genes[2].clone(), genes[0].clone(), genes[1].clone()];
        assert_eq!(aggregate(&genes), aggregate(&reordered));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let genes = corpus();
        assert_eq!(aggregate_parallel(&genes), aggregate(&genes));
    }

    #[test]
    fn test_genome_report_shape_matches_gene_report() {
        let genes = corpus();
        let genome = aggregate(&genes);
        let gene = CodonStatistics::from_sequence(&genes[0].sequence);
        assert_eq!(genome.report().len(), gene.report.len());
        assert_eq!(genome.report().ratio(codon("AAA")), Some(0.75));
        assert_eq!(genome.report().ratio(codon("AAG")), Some(0.25));
    }

    #[test]
    fn test_empty_corpus() {
        let genes: Vec<GeneRecord> = Vec::new();
        let genome = aggregate(&genes);
        assert_eq!(genome.gene_count, 0);
        assert!(genome.frequencies().is_empty());
        assert!(genome.report().is_empty());
        assert_eq!(aggregate_parallel(&genes), genome);
    }

    #[test]
    fn test_aggregator_returns_gene_table() {
        let mut aggregator = GenomeAggregator::new();
        let table = aggregator.add_gene("x", b"TTTTTC");
        assert_eq!(table, count_codons("TTTTTC"));
        assert_eq!(aggregator.gene_count(), 1);
    }
}
