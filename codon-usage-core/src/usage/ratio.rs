use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::codon::{AminoAcid, Codon, CodonFrequencyTable, SYNONYMOUS_CODONS};
use crate::constants::RATIO_DECIMALS;
use crate::types::round_to;

/// Usage ratios of one amino acid's synonymous codons.
#[derive(Debug, Clone, PartialEq)]
pub struct AminoAcidRatios {
    pub amino_acid: AminoAcid,
    /// Combined count of every codon in the group
    pub total: u64,
    /// `(codon, ratio)` in synonymous table order
    pub ratios: Vec<(Codon, f64)>,
}

impl AminoAcidRatios {
    pub fn ratio(&self, codon: Codon) -> Option<f64> {
        self.ratios
            .iter()
            .find(|(c, _)| *c == codon)
            .map(|&(_, ratio)| ratio)
    }

    /// Sum of the rounded ratios; 1.0 within rounding when `total > 0`.
    pub fn ratio_sum(&self) -> f64 {
        self.ratios.iter().map(|(_, ratio)| ratio).sum()
    }
}

impl Serialize for AminoAcidRatios {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.ratios.len()))?;
        for (codon, ratio) in &self.ratios {
            map.serialize_entry(codon, ratio)?;
        }
        map.end()
    }
}

/// Per amino acid, each synonymous codon's share of that amino acid's usage.
///
/// Always holds all 21 groups in [`AminoAcid::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioTable {
    groups: Vec<AminoAcidRatios>,
}

impl RatioTable {
    pub fn get(&self, amino_acid: AminoAcid) -> &AminoAcidRatios {
        &self.groups[amino_acid.to_index()]
    }

    /// Ratio of `codon` within its amino acid group.
    pub fn ratio(&self, codon: Codon) -> Option<f64> {
        self.get(codon.amino_acid()).ratio(codon)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AminoAcidRatios> {
        self.groups.iter()
    }

    /// All `(codon, ratio)` pairs, group by group.
    pub fn flatten(&self) -> impl Iterator<Item = (Codon, f64)> + '_ {
        self.groups
            .iter()
            .flat_map(|group| group.ratios.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for RatioTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.amino_acid, group)?;
        }
        map.end()
    }
}

/// Compute synonymous codon usage ratios from a frequency table.
///
/// For each amino acid the ratio of a codon is its count divided by the
/// group's total count, rounded to two decimals. A group that was never
/// observed gets 0.0 for every codon.
///
/// # Examples
///
/// ```rust
/// use codon_usage_core::codon::{AminoAcid, count_codons};
/// use codon_usage_core::usage::usage_ratios;
///
/// let ratios = usage_ratios(&count_codons("TTTTTCTTTTTC"));
/// assert_eq!(ratios.ratio("TTT".parse()?), Some(0.5));
/// assert_eq!(ratios.get(AminoAcid::Met).total, 0);
/// # Ok::<(), codon_usage_core::types::CodonUsageError>(())
/// ```
pub fn usage_ratios(frequencies: &CodonFrequencyTable) -> RatioTable {
    let groups = SYNONYMOUS_CODONS
        .iter()
        .map(|(amino_acid, codons)| {
            let total: u64 = codons.iter().map(|&c| frequencies.count(c)).sum();
            let ratios = codons
                .iter()
                .map(|&codon| {
                    let ratio = if total == 0 {
                        0.0
                    } else {
                        round_to(frequencies.count(codon) as f64 / total as f64, RATIO_DECIMALS)
                    };
                    (codon, ratio)
                })
                .collect();
            AminoAcidRatios {
                amino_acid,
                total,
                ratios,
            }
        })
        .collect();

    RatioTable { groups }
}
