use log::warn;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::codon::{Codon, CodonFrequencyTable};
use crate::constants::PERCENT_DECIMALS;
use crate::types::round_to;

/// Share of each codon among all codons counted, as a percentage.
///
/// A table computed from an all-zero frequency table holds no entries at
/// all: this is the "sequence not found" state and is a valid result,
/// check [`PercentTable::is_empty`] before relying on individual values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PercentTable {
    percents: Vec<(Codon, f64)>,
}

impl PercentTable {
    pub fn percent(&self, codon: Codon) -> Option<f64> {
        self.percents
            .iter()
            .find(|(c, _)| *c == codon)
            .map(|&(_, percent)| percent)
    }

    /// `(codon, percent)` in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Codon, f64)> + '_ {
        self.percents.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.percents.len()
    }

    /// `true` when no codons were counted.
    pub fn is_empty(&self) -> bool {
        self.percents.is_empty()
    }

    /// Sum of the rounded percentages.
    pub fn percent_sum(&self) -> f64 {
        self.percents.iter().map(|(_, percent)| percent).sum()
    }
}

impl Serialize for PercentTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.percents.len()))?;
        for (codon, percent) in &self.percents {
            map.serialize_entry(codon, percent)?;
        }
        map.end()
    }
}

/// Compute the percentage of all codons taken by each codon.
///
/// Percentages are rounded to one decimal. When the table is empty the
/// condition is logged as a warning and an empty [`PercentTable`] returned.
///
/// # Examples
///
/// ```rust
/// use codon_usage_core::codon::count_codons;
/// use codon_usage_core::usage::codon_percentages;
///
/// let percents = codon_percentages(&count_codons("ATGATGATG"));
/// assert_eq!(percents.percent("ATG".parse()?), Some(100.0));
/// assert_eq!(percents.percent("TTT".parse()?), Some(0.0));
///
/// assert!(codon_percentages(&count_codons("")).is_empty());
/// # Ok::<(), codon_usage_core::types::CodonUsageError>(())
/// ```
pub fn codon_percentages(frequencies: &CodonFrequencyTable) -> PercentTable {
    let total = frequencies.total();
    if total == 0 {
        warn!("Sequence not found: no codons counted");
        return PercentTable::default();
    }

    let percents = frequencies
        .iter()
        .map(|(codon, count)| {
            let percent = count as f64 / total as f64 * 100.0;
            (codon, round_to(percent, PERCENT_DECIMALS))
        })
        .collect();

    PercentTable { percents }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codon::count_codons;
    use crate::constants::NUM_CODONS;

    fn codon(s: &str) -> Codon {
        s.parse().unwrap()
    }

    #[test]
    fn test_single_codon() {
        let percents = codon_percentages(&count_codons("ATGATGATG"));
        assert_eq!(percents.len(), NUM_CODONS);
        assert_eq!(percents.percent(codon("ATG")), Some(100.0));
        assert!(
            percents
                .iter()
                .filter(|(c, _)| *c != codon("ATG"))
                .all(|(_, p)| p == 0.0)
        );
    }

    #[test]
    fn test_two_codons() {
        let percents = codon_percentages(&count_codons("TTTTTCTTTTTC"));
        assert_eq!(percents.percent(codon("TTT")), Some(50.0));
        assert_eq!(percents.percent(codon("TTC")), Some(50.0));
    }

    #[test]
    fn test_empty_is_no_data() {
        let percents = codon_percentages(&count_codons(""));
        assert!(percents.is_empty());
        assert_eq!(percents.percent(codon("ATG")), None);
        assert_eq!(percents.percent_sum(), 0.0);
    }

    #[test]
    fn test_only_malformed_is_no_data() {
        let percents = codon_percentages(&count_codons("NNNNNN"));
        assert!(percents.is_empty());
    }

    #[test]
    fn test_rounding_to_one_place() {
        // ATG, AAA, GGG -> 33.3 each
        let percents = codon_percentages(&count_codons("ATGAAAGGG"));
        assert_eq!(percents.percent(codon("AAA")), Some(33.3));
        assert_eq!(percents.percent(codon("GGG")), Some(33.3));
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let sequence = "ATGGCTGCCGCAGCGAAATTTTTCCTGCTGTTAAGCAGTTCTGGAGGCTAAGATGACGAAAGG";
        let frequencies = count_codons(sequence);
        let percents = codon_percentages(&frequencies);
        let observed = frequencies.iter().filter(|&(_, n)| n > 0).count();
        let tolerance = 0.05 * observed as f64 + 1e-9;
        assert!((percents.percent_sum() - 100.0).abs() <= tolerance);
    }

    #[test]
    fn test_report_order() {
        let percents = codon_percentages(&count_codons("GGG"));
        let first: Vec<String> = percents.iter().take(3).map(|(c, _)| c.to_string()).collect();
        assert_eq!(first, vec!["TTT", "TTC", "TTA"]);
    }
}
