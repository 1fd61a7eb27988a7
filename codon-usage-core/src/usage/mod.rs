//! Codon usage statistics derived from a frequency table.
//!
//! The pipeline is: count codons, then independently compute synonymous
//! codon ratios ([`usage_ratios`]) and codon percentages
//! ([`codon_percentages`]) from the same table, then merge both into a
//! per-codon [`UsageReport`]. [`CodonStatistics`] keeps every stage so
//! report sinks can print the raw frequencies alongside the derived values.

use serde::Serialize;

use crate::codon::{CodonFrequencyTable, count_codons};

pub mod percent;
pub mod ratio;
pub mod report;

pub use percent::{PercentTable, codon_percentages};
pub use ratio::{AminoAcidRatios, RatioTable, usage_ratios};
pub use report::{UsageEntry, UsageReport};

/// Frequencies, ratios, percentages and the merged report for one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodonStatistics {
    pub frequencies: CodonFrequencyTable,
    pub ratios: RatioTable,
    pub percentages: PercentTable,
    pub report: UsageReport,
}

impl CodonStatistics {
    /// Derive ratios, percentages and the report from counted codons.
    pub fn from_frequencies(frequencies: CodonFrequencyTable) -> Self {
        let ratios = usage_ratios(&frequencies);
        let percentages = codon_percentages(&frequencies);
        let report = UsageReport::from_tables(&ratios, &percentages);
        Self {
            frequencies,
            ratios,
            percentages,
            report,
        }
    }

    pub fn from_sequence(sequence: &[u8]) -> Self {
        Self::from_frequencies(CodonFrequencyTable::from_sequence(sequence))
    }

    /// `true` when the percent stage found no codons to report.
    pub fn has_data(&self) -> bool {
        !self.percentages.is_empty()
    }
}

/// Codon usage report for a single coding sequence.
///
/// # Examples
///
/// ```rust
/// use codon_usage_core::usage::gene_usage;
///
/// let report = gene_usage("TTTTTCTTTTTC");
/// let ttt = report.get("TTT".parse()?).unwrap();
/// assert_eq!((ttt.ratio, ttt.percent), (0.5, 50.0));
/// # Ok::<(), codon_usage_core::types::CodonUsageError>(())
/// ```
pub fn gene_usage(sequence: &str) -> UsageReport {
    CodonStatistics::from_frequencies(count_codons(sequence)).report
}
