//! Gene records and corpus readers.
//!
//! Coding sequences reach the library as [`GeneRecord`]s: an identifier, an
//! optional description and the raw nucleotide bytes. Sequences are taken
//! as given; anything that is not a canonical codon is dropped later by the
//! codon counter.
//!
//! ## Modules
//!
//! - [`io`]: FASTA and flat identifier/sequence corpus readers
//!
//! ## Examples
//!
//! ```rust
//! use codon_usage_core::sequence::parse_flat_corpus;
//!
//! let corpus = "AB000381 ATGAAATAA\nAB000382 ATGGGGTGA\n";
//! let genes = parse_flat_corpus(corpus.as_bytes())?;
//!
//! assert_eq!(genes.len(), 2);
//! assert_eq!(genes[1].id, "AB000382");
//! # Ok::<(), codon_usage_core::types::CodonUsageError>(())
//! ```

use serde::Serialize;

pub mod io;

pub use io::*;

/// One coding sequence of a corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneRecord {
    /// Accession number or other identifier
    pub id: String,
    /// Free text following the identifier, if any
    pub description: Option<String>,
    #[serde(skip)]
    pub sequence: Vec<u8>,
}

impl GeneRecord {
    /// Record without a description.
    pub fn new(id: impl Into<String>, sequence: impl AsRef<[u8]>) -> Self {
        Self {
            id: id.into(),
            description: None,
            sequence: sequence.as_ref().to_vec(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Length of the sequence in bases.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gene_record_new() {
        let record = GeneRecord::new("AB000381.1", "ATGAAA");
        assert_eq!(record.id, "AB000381.1");
        assert_eq!(record.description, None);
        assert_eq!(record.sequence, b"ATGAAA".to_vec());
        assert_eq!(record.len(), 6);
        assert!(!record.is_empty());
    }

    #[test]
    fn test_gene_record_with_description() {
        let record = GeneRecord::new("g1", b"").with_description("hypothetical protein");
        assert_eq!(record.description.as_deref(), Some("hypothetical protein"));
        assert!(record.is_empty());
    }
}
