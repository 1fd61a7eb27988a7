//! Codon bias of a gene relative to its genome.

use serde::Serialize;

use crate::codon::Codon;
use crate::constants::DEFAULT_BIAS_THRESHOLD;
use crate::usage::UsageReport;

/// How the gene/genome ratio difference is compared to the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BiasMode {
    /// Flag only codons the gene uses more than the genome does.
    #[default]
    OneSided,
    /// Flag codons whose usage differs in either direction. Amino acids the
    /// gene never uses are skipped.
    Absolute,
}

/// Flags codons whose usage ratio in a gene departs from the genome-wide ratio.
///
/// # Examples
///
/// ```rust
/// use codon_usage_core::bias::{BiasDetector, BiasMode};
///
/// let detector = BiasDetector::default();
/// assert!(detector.is_biased(0.9, 0.3));
/// assert!(!detector.is_biased(0.3, 0.9));
///
/// let symmetric = BiasDetector::new(0.5, BiasMode::Absolute);
/// assert!(symmetric.is_biased(0.3, 0.9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BiasDetector {
    pub threshold: f64,
    pub mode: BiasMode,
}

impl Default for BiasDetector {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_BIAS_THRESHOLD,
            mode: BiasMode::OneSided,
        }
    }
}

impl BiasDetector {
    pub const fn new(threshold: f64, mode: BiasMode) -> Self {
        Self { threshold, mode }
    }

    pub fn is_biased(&self, gene_ratio: f64, genome_ratio: f64) -> bool {
        let delta = gene_ratio - genome_ratio;
        match self.mode {
            BiasMode::OneSided => delta >= self.threshold,
            BiasMode::Absolute => delta.abs() >= self.threshold,
        }
    }

    /// Codons flagged as biased, in the gene report's order.
    ///
    /// Codons missing from either report are skipped. In [`BiasMode::Absolute`]
    /// so are codons of amino acids absent from the gene, whose 0.0 ratio is
    /// a placeholder rather than an observed preference.
    pub fn detect(&self, gene: &UsageReport, genome: &UsageReport) -> Vec<Codon> {
        gene.iter()
            .filter(|entry| self.mode == BiasMode::OneSided || entry.group_observed())
            .filter_map(|entry| {
                let genome_ratio = genome.ratio(entry.codon)?;
                self.is_biased(entry.ratio, genome_ratio)
                    .then_some(entry.codon)
            })
            .collect()
    }
}

/// Detect biased codons with the default one-sided 0.5 threshold.
pub fn detect_bias(gene: &UsageReport, genome: &UsageReport) -> Vec<Codon> {
    BiasDetector::default().detect(gene, genome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usage::{UsageEntry, gene_usage};

    fn codon(s: &str) -> Codon {
        s.parse().unwrap()
    }

    fn entry(c: &str, ratio: f64) -> UsageEntry {
        UsageEntry {
            codon: codon(c),
            ratio,
            percent: 0.0,
            group_total: 1,
        }
    }

    #[test]
    fn test_gene_higher_than_genome_is_flagged() {
        let gene = UsageReport::from_entries(vec![entry("AAA", 0.9)]);
        let genome = UsageReport::from_entries(vec![entry("AAA", 0.3)]);
        assert_eq!(detect_bias(&gene, &genome), vec![codon("AAA")]);
    }

    #[test]
    fn test_gene_lower_than_genome_is_not_flagged() {
        let gene = UsageReport::from_entries(vec![entry("AAA", 0.3)]);
        let genome = UsageReport::from_entries(vec![entry("AAA", 0.9)]);
        assert!(detect_bias(&gene, &genome).is_empty());
    }

    #[test]
    fn test_absolute_mode_flags_both_directions() {
        let detector = BiasDetector::new(0.5, BiasMode::Absolute);
        let gene = UsageReport::from_entries(vec![entry("AAA", 0.3), entry("GGG", 0.9)]);
        let genome = UsageReport::from_entries(vec![entry("AAA", 0.9), entry("GGG", 0.3)]);
        assert_eq!(
            detector.detect(&gene, &genome),
            vec![codon("AAA"), codon("GGG")]
        );
    }

    #[test]
    fn test_absolute_mode_skips_unused_amino_acids() {
        let detector = BiasDetector::new(0.5, BiasMode::Absolute);
        // Gene has no Gly, genome splits GGT/GGC evenly.
        let gene = gene_usage("ATGAAAAAAAAATAA");
        let genome = gene_usage("ATGAAGAAGGGTGGCTAA");
        assert_eq!(gene.ratio(codon("GGT")), Some(0.0));
        assert_eq!(genome.ratio(codon("GGT")), Some(0.5));

        let flagged = detector.detect(&gene, &genome);
        assert!(!flagged.contains(&codon("GGT")));
        assert!(!flagged.contains(&codon("GGC")));
        assert_eq!(flagged, vec![codon("AAA"), codon("AAG")]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let detector = BiasDetector::default();
        assert!(detector.is_biased(1.0, 0.5));
        assert!(detector.is_biased(0.5, 0.0));
        assert!(!detector.is_biased(0.49, 0.0));
    }

    #[test]
    fn test_missing_codons_skipped() {
        let gene = UsageReport::from_entries(vec![entry("AAA", 1.0), entry("CCC", 1.0)]);
        let genome = UsageReport::from_entries(vec![entry("CCC", 0.0)]);
        assert_eq!(detect_bias(&gene, &genome), vec![codon("CCC")]);

        let empty = UsageReport::from_entries(vec![]);
        assert!(detect_bias(&gene, &empty).is_empty());
        assert!(detect_bias(&empty, &gene).is_empty());
    }

    #[test]
    fn test_output_follows_gene_order() {
        let gene = UsageReport::from_entries(vec![entry("GGG", 1.0), entry("AAA", 1.0)]);
        let genome = UsageReport::from_entries(vec![entry("AAA", 0.0), entry("GGG", 0.0)]);
        assert_eq!(detect_bias(&gene, &genome), vec![codon("GGG"), codon("AAA")]);
    }

    #[test]
    fn test_reports_from_sequences() {
        // Lys: gene uses only AAA, genome splits AAG 3 : AAA 1.
        let gene = gene_usage("AAAAAAAAA");
        let genome = gene_usage("AAAAAGAAGAAG");
        assert_eq!(genome.ratio(codon("AAA")), Some(0.25));
        assert_eq!(detect_bias(&gene, &genome), vec![codon("AAA")]);
        assert_eq!(detect_bias(&genome, &gene), vec![codon("AAG")]);
    }
}
