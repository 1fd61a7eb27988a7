use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::{CODONS, Codon};
use crate::constants::{CODON_LENGTH, NUM_CODONS};

/// Count of every codon in one sequence or corpus.
///
/// All 64 codons are always present; codons that never occur count zero.
///
/// # Examples
///
/// ```rust
/// use codon_usage_core::codon::{CodonFrequencyTable, count_codons};
///
/// let table = count_codons("ATGATGATG");
/// assert_eq!(table.count("ATG".parse()?), 3);
/// assert_eq!(table.total(), 3);
///
/// let mut genome = CodonFrequencyTable::new();
/// genome += &table;
/// genome += &count_codons("atgTAA");
/// assert_eq!(genome.count("ATG".parse()?), 4);
/// # Ok::<(), codon_usage_core::types::CodonUsageError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonFrequencyTable {
    counts: [u64; NUM_CODONS],
}

impl Default for CodonFrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CodonFrequencyTable {
    /// A table with every codon at zero.
    pub const fn new() -> Self {
        Self {
            counts: [0; NUM_CODONS],
        }
    }

    /// Count codons in reading frame 0 of `sequence`.
    ///
    /// The sequence is read in consecutive non-overlapping windows of three
    /// bases. A trailing fragment shorter than a codon is dropped, as is any
    /// window that is not a canonical codon (for example one containing `N`).
    pub fn from_sequence(sequence: &[u8]) -> Self {
        let mut table = Self::new();
        for codon in sequence
            .chunks_exact(CODON_LENGTH)
            .filter_map(Codon::from_bytes)
        {
            table.increment(codon);
        }
        table
    }

    pub fn increment(&mut self, codon: Codon) {
        self.counts[codon.index()] += 1;
    }

    /// Occurrences of `codon`.
    pub fn count(&self, codon: Codon) -> u64 {
        self.counts[codon.index()]
    }

    /// Sum of all 64 counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `true` when no codon was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Add every count of `other` into this table.
    pub fn merge(&mut self, other: &Self) {
        for (count, extra) in self.counts.iter_mut().zip(other.counts.iter()) {
            *count += extra;
        }
    }

    /// `(codon, count)` pairs for all 64 codons in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Codon, u64)> + '_ {
        CODONS
            .into_iter()
            .map(move |codon| (codon, self.count(codon)))
    }
}

impl AddAssign<&CodonFrequencyTable> for CodonFrequencyTable {
    fn add_assign(&mut self, rhs: &CodonFrequencyTable) {
        self.merge(rhs);
    }
}

impl Add for CodonFrequencyTable {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self.merge(&rhs);
        self
    }
}

impl Sum for CodonFrequencyTable {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Add::add)
    }
}

impl<'a> Sum<&'a CodonFrequencyTable> for CodonFrequencyTable {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::new(), |mut acc, table| {
            acc.merge(table);
            acc
        })
    }
}

impl Serialize for CodonFrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(NUM_CODONS))?;
        for (codon, count) in self.iter() {
            map.serialize_entry(&codon, &count)?;
        }
        map.end()
    }
}

/// Count codons in a coding sequence given as text.
///
/// Windows are taken over characters, so a non-ASCII character occupies a
/// single position and simply spoils the codon it falls in.
pub fn count_codons(sequence: &str) -> CodonFrequencyTable {
    if sequence.is_ascii() {
        return CodonFrequencyTable::from_sequence(sequence.as_bytes());
    }
    let bases: Vec<u8> = sequence
        .chars()
        .map(|ch| if ch.is_ascii() { ch as u8 } else { b'?' })
        .collect();
    CodonFrequencyTable::from_sequence(&bases)
}
