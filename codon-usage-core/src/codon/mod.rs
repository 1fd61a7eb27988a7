//! Codons, the standard synonymous codon table, and codon counting.
//!
//! A [`Codon`] is one of the 64 trinucleotides over `{A, C, G, T}`. Codons are
//! stored uppercase; parsing is case-insensitive and anything outside the
//! canonical alphabet is rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::constants::{CODON_LENGTH, NUM_CODONS};
use crate::types::CodonUsageError;

pub mod counter;
pub mod table;

pub use counter::{CodonFrequencyTable, count_codons};
pub use table::{AminoAcid, SYNONYMOUS_CODONS, SynonymousCodonTable};

/// A canonical DNA codon.
///
/// # Examples
///
/// ```rust
/// use codon_usage_core::codon::Codon;
///
/// let codon: Codon = "atg".parse()?;
/// assert_eq!(codon.as_str(), "ATG");
/// assert_eq!(codon.amino_acid().symbol(), 'M');
/// # Ok::<(), codon_usage_core::types::CodonUsageError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codon([u8; CODON_LENGTH]);

const fn base_index(base: u8) -> Option<usize> {
    match base {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

const fn digit(base: u8) -> usize {
    match base_index(base) {
        Some(i) => i,
        None => 0,
    }
}

impl Codon {
    /// Build a codon from three uppercase bases known to be canonical.
    ///
    /// Only used for the compile-time tables in this crate.
    pub(crate) const fn new(bases: &[u8; CODON_LENGTH]) -> Self {
        Self(*bases)
    }

    /// Parse a three-base window, ignoring case.
    ///
    /// Returns `None` for windows that are not exactly three bases long or
    /// that contain anything other than `A`, `C`, `G` or `T`.
    pub fn from_bytes(window: &[u8]) -> Option<Self> {
        let [a, b, c] = <[u8; CODON_LENGTH]>::try_from(window).ok()?;
        let bases = [
            a.to_ascii_uppercase(),
            b.to_ascii_uppercase(),
            c.to_ascii_uppercase(),
        ];
        if bases.iter().all(|&base| base_index(base).is_some()) {
            Some(Self(bases))
        } else {
            None
        }
    }

    /// Dense index in `0..64` (A=0, C=1, G=2, T=3, first base most significant).
    #[must_use]
    pub const fn index(self) -> usize {
        let [a, b, c] = self.0;
        digit(a) * 16 + digit(b) * 4 + digit(c)
    }

    /// The codon's bases.
    #[must_use]
    pub const fn bases(&self) -> &[u8; CODON_LENGTH] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("NNN")
    }

    /// Amino acid (or stop) encoded by this codon in the standard code.
    pub fn amino_acid(self) -> AminoAcid {
        SYNONYMOUS_CODONS.amino_acid_of(self)
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Codon {
    type Err = CodonUsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes()).ok_or_else(|| CodonUsageError::InvalidCodon(s.to_string()))
    }
}

impl Serialize for Codon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// All 64 codons in report order.
///
/// Reports, frequency listings and bias results iterate codons in this order.
#[rustfmt::skip]
pub const CODONS: [Codon; NUM_CODONS] = [
    Codon::new(b"TTT"), Codon::new(b"TTC"), Codon::new(b"TTA"), Codon::new(b"TTG"),
    Codon::new(b"CTT"), Codon::new(b"CTC"), Codon::new(b"CTA"), Codon::new(b"CTG"),
    Codon::new(b"ATT"), Codon::new(b"ATC"), Codon::new(b"ATA"), Codon::new(b"ATG"),
    Codon::new(b"GTT"), Codon::new(b"GTC"), Codon::new(b"GTA"), Codon::new(b"GTG"),
    Codon::new(b"TAT"), Codon::new(b"TAC"), Codon::new(b"TAA"), Codon::new(b"TAG"),
    Codon::new(b"CAT"), Codon::new(b"CAC"), Codon::new(b"CAA"), Codon::new(b"CAG"),
    Codon::new(b"AAT"), Codon::new(b"AAC"), Codon::new(b"AAA"), Codon::new(b"AAG"),
    Codon::new(b"GAT"), Codon::new(b"GAC"), Codon::new(b"GAA"), Codon::new(b"GAG"),
    Codon::new(b"TCT"), Codon::new(b"TCC"), Codon::new(b"TCA"), Codon::new(b"TCG"),
    Codon::new(b"CCT"), Codon::new(b"CCC"), Codon::new(b"CCA"), Codon::new(b"CCG"),
    Codon::new(b"ACT"), Codon::new(b"ACC"), Codon::new(b"ACA"), Codon::new(b"ACG"),
    Codon::new(b"GCT"), Codon::new(b"GCC"), Codon::new(b"GCA"), Codon::new(b"GCG"),
    Codon::new(b"TGT"), Codon::new(b"TGC"), Codon::new(b"TGA"), Codon::new(b"TGG"),
    Codon::new(b"CGT"), Codon::new(b"CGC"), Codon::new(b"CGA"), Codon::new(b"CGG"),
    Codon::new(b"AGT"), Codon::new(b"AGC"), Codon::new(b"AGA"), Codon::new(b"AGG"),
    Codon::new(b"GGT"), Codon::new(b"GGC"), Codon::new(b"GGA"), Codon::new(b"GGG"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_from_bytes_uppercases() {
        let codon = Codon::from_bytes(b"aTg").unwrap();
        assert_eq!(codon.as_str(), "ATG");
        assert_eq!(codon.bases(), b"ATG");
    }

    #[test]
    fn test_from_bytes_rejects_non_canonical() {
        assert!(Codon::from_bytes(b"ANG").is_none());
        assert!(Codon::from_bytes(b"AUG").is_none());
        assert!(Codon::from_bytes(b"AT").is_none());
        assert!(Codon::from_bytes(b"ATGC").is_none());
        assert!(Codon::from_bytes(b"").is_none());
    }

    #[test]
    fn test_from_str() {
        let codon: Codon = "ggc".parse().unwrap();
        assert_eq!(codon.to_string(), "GGC");

        match "NNN".parse::<Codon>() {
            Err(CodonUsageError::InvalidCodon(text)) => assert_eq!(text, "NNN"),
            other => panic!("Expected InvalidCodon, got {:?}", other),
        }
    }

    #[test]
    fn test_index_is_dense_and_unique() {
        let indices: HashSet<usize> = CODONS.iter().map(|c| c.index()).collect();
        assert_eq!(indices.len(), NUM_CODONS);
        assert!(indices.iter().all(|&i| i < NUM_CODONS));
        assert_eq!(Codon::new(b"AAA").index(), 0);
        assert_eq!(Codon::new(b"TTT").index(), 63);
        assert_eq!(Codon::new(b"ACG").index(), 6);
    }

    #[test]
    fn test_codons_are_distinct() {
        let unique: HashSet<Codon> = CODONS.iter().copied().collect();
        assert_eq!(unique.len(), NUM_CODONS);
        assert_eq!(CODONS[0].as_str(), "TTT");
        assert_eq!(CODONS[63].as_str(), "GGG");
    }

    #[test]
    fn test_serialize_as_string() {
        let codon = Codon::new(b"TGA");
        assert_eq!(serde_json::to_string(&codon).unwrap(), "\"TGA\"");
    }
}
