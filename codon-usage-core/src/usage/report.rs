use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use super::{PercentTable, RatioTable};
use crate::codon::{Codon, SYNONYMOUS_CODONS, SynonymousCodonTable};

/// Ratio and percentage of one codon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UsageEntry {
    #[serde(skip)]
    pub codon: Codon,
    pub ratio: f64,
    pub percent: f64,
    /// Codons counted for the amino acid this codon encodes; 0 means the
    /// ratio is the unobserved-group placeholder.
    #[serde(skip)]
    pub group_total: u64,
}

impl UsageEntry {
    /// Whether the codon's amino acid occurs at all in the sequence.
    pub fn group_observed(&self) -> bool {
        self.group_total > 0
    }
}

/// Per-codon `(ratio, percent)` report for a gene or a whole genome.
///
/// The report carries a reference to the shared synonymous codon table so
/// that consumers can group codons by amino acid without their own copy.
/// Gene and genome reports have the same shape.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageReport {
    synonymous_codons: &'static SynonymousCodonTable,
    entries: Vec<UsageEntry>,
}

impl UsageReport {
    /// Merge a ratio table and a percent table into one report.
    ///
    /// A codon is reported only when it has both a ratio and a percentage,
    /// so a percent table in the "no data" state yields an empty report.
    pub fn from_tables(ratios: &RatioTable, percentages: &PercentTable) -> Self {
        let entries = percentages
            .iter()
            .filter_map(|(codon, percent)| {
                let group = ratios.get(codon.amino_acid());
                group.ratio(codon).map(|ratio| UsageEntry {
                    codon,
                    ratio,
                    percent,
                    group_total: group.total,
                })
            })
            .collect();

        Self {
            synonymous_codons: &SYNONYMOUS_CODONS,
            entries,
        }
    }

    /// Build a report from precomputed entries, e.g. values loaded from an
    /// earlier run. Entries keep the order given.
    pub fn from_entries(entries: Vec<UsageEntry>) -> Self {
        Self {
            synonymous_codons: &SYNONYMOUS_CODONS,
            entries,
        }
    }

    pub fn synonymous_codons(&self) -> &'static SynonymousCodonTable {
        self.synonymous_codons
    }

    pub fn get(&self, codon: Codon) -> Option<&UsageEntry> {
        self.entries.iter().find(|entry| entry.codon == codon)
    }

    pub fn ratio(&self, codon: Codon) -> Option<f64> {
        self.get(codon).map(|entry| entry.ratio)
    }

    pub fn percent(&self, codon: Codon) -> Option<f64> {
        self.get(codon).map(|entry| entry.percent)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UsageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct EntryMap<'a>(&'a [UsageEntry]);

impl Serialize for EntryMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(&entry.codon, entry)?;
        }
        map.end()
    }
}

impl Serialize for UsageReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("UsageReport", 2)?;
        state.serialize_field("synonymous_codons", self.synonymous_codons)?;
        state.serialize_field("usage", &EntryMap(&self.entries))?;
        state.end()
    }
}
