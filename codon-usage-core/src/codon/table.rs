//! The standard nuclear code as groups of synonymous codons.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::Codon;
use crate::constants::{NUM_AMINO_ACIDS, STOP_SYMBOL};
use crate::types::CodonUsageError;

/// The 20 standard amino acids plus the stop signal.
///
/// Variants are declared in report order, which is also the order of
/// [`AminoAcid::ALL`] and of the groups in [`SYNONYMOUS_CODONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AminoAcid {
    Cys,
    Asp,
    Ser,
    Gln,
    Met,
    Asn,
    Pro,
    Lys,
    Thr,
    Phe,
    Ala,
    Gly,
    Ile,
    Leu,
    His,
    Arg,
    Trp,
    Val,
    Glu,
    Tyr,
    /// Stop codons (TAG, TGA, TAA)
    Stop,
}

impl AminoAcid {
    /// Every group, in report order.
    pub const ALL: [AminoAcid; NUM_AMINO_ACIDS] = [
        Self::Cys,
        Self::Asp,
        Self::Ser,
        Self::Gln,
        Self::Met,
        Self::Asn,
        Self::Pro,
        Self::Lys,
        Self::Thr,
        Self::Phe,
        Self::Ala,
        Self::Gly,
        Self::Ile,
        Self::Leu,
        Self::His,
        Self::Arg,
        Self::Trp,
        Self::Val,
        Self::Glu,
        Self::Tyr,
        Self::Stop,
    ];

    /// One-letter symbol; `_` for stop.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Cys => 'C',
            Self::Asp => 'D',
            Self::Ser => 'S',
            Self::Gln => 'Q',
            Self::Met => 'M',
            Self::Asn => 'N',
            Self::Pro => 'P',
            Self::Lys => 'K',
            Self::Thr => 'T',
            Self::Phe => 'F',
            Self::Ala => 'A',
            Self::Gly => 'G',
            Self::Ile => 'I',
            Self::Leu => 'L',
            Self::His => 'H',
            Self::Arg => 'R',
            Self::Trp => 'W',
            Self::Val => 'V',
            Self::Glu => 'E',
            Self::Tyr => 'Y',
            Self::Stop => STOP_SYMBOL,
        }
    }

    /// Look up a group by its one-letter symbol (case-insensitive).
    ///
    /// Both `_` and `*` are accepted for stop.
    pub fn from_symbol(symbol: char) -> Result<Self, CodonUsageError> {
        let upper = symbol.to_ascii_uppercase();
        if upper == '*' {
            return Ok(Self::Stop);
        }
        Self::ALL
            .into_iter()
            .find(|aa| aa.symbol() == upper)
            .ok_or(CodonUsageError::InvalidAminoAcid(symbol))
    }

    /// Position of this group in [`AminoAcid::ALL`].
    #[must_use]
    pub const fn to_index(self) -> usize {
        self as usize
    }

    /// The synonymous codons of this group in the standard code.
    pub fn synonymous_codons(self) -> &'static [Codon] {
        SYNONYMOUS_CODONS.codons(self)
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for AminoAcid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.symbol())
    }
}

/// Mapping from each amino acid group to its ordered synonymous codons.
///
/// There is exactly one instance, [`SYNONYMOUS_CODONS`]; ratio tables and
/// usage reports hold a `&'static` reference to it rather than a copy.
#[derive(Debug, PartialEq, Eq)]
pub struct SynonymousCodonTable {
    groups: [&'static [Codon]; NUM_AMINO_ACIDS],
}

const fn c(bases: &[u8; 3]) -> Codon {
    Codon::new(bases)
}

/// The standard nuclear genetic code.
pub static SYNONYMOUS_CODONS: SynonymousCodonTable = SynonymousCodonTable {
    groups: [
        &[c(b"TGT"), c(b"TGC")],
        &[c(b"GAT"), c(b"GAC")],
        &[c(b"TCT"), c(b"TCG"), c(b"TCA"), c(b"TCC"), c(b"AGC"), c(b"AGT")],
        &[c(b"CAA"), c(b"CAG")],
        &[c(b"ATG")],
        &[c(b"AAC"), c(b"AAT")],
        &[c(b"CCT"), c(b"CCG"), c(b"CCA"), c(b"CCC")],
        &[c(b"AAG"), c(b"AAA")],
        &[c(b"ACC"), c(b"ACA"), c(b"ACG"), c(b"ACT")],
        &[c(b"TTT"), c(b"TTC")],
        &[c(b"GCA"), c(b"GCC"), c(b"GCG"), c(b"GCT")],
        &[c(b"GGT"), c(b"GGG"), c(b"GGA"), c(b"GGC")],
        &[c(b"ATC"), c(b"ATA"), c(b"ATT")],
        &[c(b"TTA"), c(b"TTG"), c(b"CTC"), c(b"CTT"), c(b"CTG"), c(b"CTA")],
        &[c(b"CAT"), c(b"CAC")],
        &[c(b"CGA"), c(b"CGC"), c(b"CGG"), c(b"CGT"), c(b"AGG"), c(b"AGA")],
        &[c(b"TGG")],
        &[c(b"GTA"), c(b"GTC"), c(b"GTG"), c(b"GTT")],
        &[c(b"GAG"), c(b"GAA")],
        &[c(b"TAT"), c(b"TAC")],
        &[c(b"TAG"), c(b"TGA"), c(b"TAA")],
    ],
};

impl SynonymousCodonTable {
    /// The standard code, shared by every computation.
    pub fn standard() -> &'static Self {
        &SYNONYMOUS_CODONS
    }

    pub fn codons(&self, amino_acid: AminoAcid) -> &'static [Codon] {
        self.groups[amino_acid.to_index()]
    }

    /// Group that `codon` belongs to.
    ///
    /// Every canonical codon belongs to exactly one group, so the fallback
    /// is never reached for a value of type [`Codon`].
    pub fn amino_acid_of(&self, codon: Codon) -> AminoAcid {
        AminoAcid::ALL
            .into_iter()
            .find(|&aa| self.codons(aa).contains(&codon))
            .unwrap_or(AminoAcid::Stop)
    }

    /// Iterate `(amino acid, codons)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (AminoAcid, &'static [Codon])> + '_ {
        AminoAcid::ALL
            .into_iter()
            .map(move |aa| (aa, self.codons(aa)))
    }

    /// Number of groups (always 21).
    pub const fn len(&self) -> usize {
        NUM_AMINO_ACIDS
    }

    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Serialize for SynonymousCodonTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (aa, codons) in self.iter() {
            map.serialize_entry(&aa, codons)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codon::CODONS;
    use crate::constants::NUM_CODONS;
    use std::collections::HashSet;

    #[test]
    fn test_groups_cover_all_codons_once() {
        let mut seen = HashSet::new();
        let mut total = 0;
        for (_, codons) in SYNONYMOUS_CODONS.iter() {
            for codon in codons {
                assert!(seen.insert(*codon), "{} appears twice", codon);
                total += 1;
            }
        }
        assert_eq!(total, NUM_CODONS);
        for codon in CODONS {
            assert!(seen.contains(&codon), "{} missing", codon);
        }
    }

    #[test]
    fn test_group_sizes() {
        let sizes: Vec<usize> = SYNONYMOUS_CODONS.iter().map(|(_, c)| c.len()).collect();
        assert_eq!(
            sizes,
            vec![2, 2, 6, 2, 1, 2, 4, 2, 4, 2, 4, 4, 3, 6, 2, 6, 1, 4, 2, 2, 3]
        );
    }

    #[test]
    fn test_amino_acid_of() {
        let table = SynonymousCodonTable::standard();
        assert_eq!(table.amino_acid_of("ATG".parse().unwrap()), AminoAcid::Met);
        assert_eq!(table.amino_acid_of("TGG".parse().unwrap()), AminoAcid::Trp);
        assert_eq!(table.amino_acid_of("AGA".parse().unwrap()), AminoAcid::Arg);
        assert_eq!(table.amino_acid_of("TGA".parse().unwrap()), AminoAcid::Stop);
        assert_eq!(table.amino_acid_of("AAA".parse().unwrap()), AminoAcid::Lys);
    }

    #[test]
    fn test_symbols_round_trip() {
        for aa in AminoAcid::ALL {
            assert_eq!(AminoAcid::from_symbol(aa.symbol()).unwrap(), aa);
        }
        assert_eq!(AminoAcid::from_symbol('*').unwrap(), AminoAcid::Stop);
        assert_eq!(AminoAcid::from_symbol('m').unwrap(), AminoAcid::Met);
        assert!(matches!(
            AminoAcid::from_symbol('B'),
            Err(CodonUsageError::InvalidAminoAcid('B'))
        ));
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, aa) in AminoAcid::ALL.into_iter().enumerate() {
            assert_eq!(aa.to_index(), i);
        }
        assert_eq!(AminoAcid::Stop.to_string(), "_");
    }

    #[test]
    fn test_serialize_table() {
        let json = serde_json::to_value(SynonymousCodonTable::standard()).unwrap();
        assert_eq!(json["M"], serde_json::json!(["ATG"]));
        assert_eq!(json["_"], serde_json::json!(["TAG", "TGA", "TAA"]));
        assert_eq!(json.as_object().unwrap().len(), NUM_AMINO_ACIDS);
    }
}
