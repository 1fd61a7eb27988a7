//! # Codon Usage
//!
//! Codon usage statistics for protein-coding DNA sequences: how often each of
//! the 64 codons occurs, how a gene distributes its usage among the synonymous
//! codons of every amino acid, and which codons a gene prefers more strongly
//! than its genome as a whole.
//!
//! ## Overview
//!
//! A sequence is read in consecutive non-overlapping triplets from its first
//! base. Triplets that are not canonical codons over `{A, C, G, T}` (case is
//! ignored) are dropped, as is a trailing partial triplet. From the resulting
//! frequency table the library derives:
//!
//! - **Synonymous codon ratios**: each codon's share of its amino acid group,
//!   rounded to 2 decimal places
//! - **Codon percentages**: each codon's share of all codons, rounded to 1
//!   decimal place
//! - **Usage reports**: both values merged per codon
//!
//! Genome-wide usage is the element-wise sum of every gene's frequency table,
//! reported in the same shape as a single gene.
//!
//! ## Quick Start
//!
//! ```rust
//! use codon_usage_core::{CodonUsageAnalyzer, config::CodonUsageConfig};
//!
//! let analyzer = CodonUsageAnalyzer::new(CodonUsageConfig::default());
//! let results = analyzer.analyze_sequence("ATGGCTGCCAAATTTTAA", Some("gene1".to_string()));
//!
//! println!("{} codons", results.sequence_info.codon_count);
//! ```
//!
//! ## Genome and bias
//!
//! ```rust
//! use codon_usage_core::bias::detect_bias;
//! use codon_usage_core::codon::Codon;
//! use codon_usage_core::genome::aggregate;
//! use codon_usage_core::sequence::GeneRecord;
//! use codon_usage_core::usage::gene_usage;
//!
//! let genes = vec![
//!     GeneRecord::new("a", "ATGAAAAAAAAATAA"),
//!     GeneRecord::new("b", "ATGAAGAAGAAGAAGAAGAAGTAA"),
//! ];
//! let genome = aggregate(&genes);
//! let gene = gene_usage("ATGAAAAAAAAATAA");
//!
//! let biased = detect_bias(&gene, genome.report());
//! assert_eq!(biased, vec!["AAA".parse::<Codon>()?]);
//! # Ok::<(), codon_usage_core::types::CodonUsageError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`codon`]: Codons, amino acids, the synonymous codon table and counting
//! - [`usage`]: Ratios, percentages and per-codon reports
//! - [`genome`]: Genome-wide aggregation
//! - [`bias`]: Gene versus genome bias detection
//! - [`sequence`]: Gene records and corpus readers
//! - [`config`]: Configuration options for analysis
//! - [`engine`]: High-level analyzer
//! - [`results`]: Analysis results
//! - [`output`]: Report formatting
//! - [`types`]: Errors and shared helpers
//!
//! ## Error Handling
//!
//! The statistics are infallible. Fallible operations (reading corpora,
//! validating configuration, writing reports) return
//! [`Result<T, CodonUsageError>`](types::CodonUsageError).

pub mod bias;
pub mod codon;
pub mod config;
pub mod constants;
pub mod engine;
pub mod genome;
pub mod output;
pub mod results;
pub mod sequence;
pub mod types;
pub mod usage;

pub use engine::CodonUsageAnalyzer;
pub use types::CodonUsageError;
