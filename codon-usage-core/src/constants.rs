// =============================================================================
// =============================================================================

/// Version string for codon-usage
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// =============================================================================

/// Length of a codon in base pairs
pub const CODON_LENGTH: usize = 3;

/// Number of distinct codons over {A, C, G, T}
pub const NUM_CODONS: usize = 64;

/// Number of amino acid groups, including the stop group
pub const NUM_AMINO_ACIDS: usize = 21;

/// Symbol used for the stop codon group
pub const STOP_SYMBOL: char = '_';

// =============================================================================
// =============================================================================

/// Decimal places kept for synonymous codon ratios
pub const RATIO_DECIMALS: usize = 2;

/// Decimal places kept for codon percentages
pub const PERCENT_DECIMALS: usize = 1;

/// Minimum gene-minus-genome ratio difference that marks a codon as biased
pub const DEFAULT_BIAS_THRESHOLD: f64 = 0.5;

// =============================================================================
// =============================================================================

/// Header used for the genome-wide aggregate report
pub const GENOME_HEADER: &str = "total";

/// Header used when a sequence is analyzed without an identifier
pub const DEFAULT_SEQUENCE_HEADER: &str = "CodonUsage_Seq_1";
