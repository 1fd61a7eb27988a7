use thiserror::Error;

/// Error types for codon usage analysis.
///
/// The statistics themselves never fail: empty sequences, empty amino acid
/// groups and malformed codons all degrade to well-defined values. These
/// errors cover the surrounding I/O, parsing and configuration.
#[derive(Debug, Error)]
pub enum CodonUsageError {
    /// Text that is not one of the 64 canonical codons
    #[error("Invalid codon: {0}")]
    InvalidCodon(String),
    /// Unknown amino acid symbol
    #[error("Invalid amino acid symbol: {0}")]
    InvalidAminoAcid(char),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing a FASTA input
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Malformed line in a flat identifier/sequence corpus
    #[error("Invalid corpus line {line}: {reason}")]
    InvalidCorpusLine { line: usize, reason: String },
    /// A corpus with no genes cannot be aggregated
    #[error("Corpus contains no sequences")]
    EmptyCorpus,
    /// Configuration value rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// JSON serialization failed
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CodonUsageError>;

/// Round `value` to `decimals` places.
///
/// Rounds the exact binary value, so `0.975` (stored just below the half)
/// goes down. Only true halves such as `0.125` are resolved to even.
pub(crate) fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}
