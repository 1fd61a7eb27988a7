//! Output formatting for codon usage results.
//!
//! This module provides writers for converting [`UsageResults`] into text,
//! tab-separated, XML and JSON reports.
//!
//! ## Supported Formats
//!
//! - **Text**: amino acid / codon / ratio / percent table
//! - **TSV**: one row per codon with its raw count
//! - **XML**: `<gene>` or `<genome>` elements holding `codon_freq`,
//!   `codon_ratio` and `codon_percent` sections
//! - **JSON**: one serialized result per line
//!
//! ## Examples
//!
//! ### Write a single report to stdout
//!
//! ```rust,no_run
//! use codon_usage_core::{CodonUsageAnalyzer, config::{CodonUsageConfig, OutputFormat}};
//! use codon_usage_core::output::write_results;
//! use std::io::stdout;
//!
//! let analyzer = CodonUsageAnalyzer::new(CodonUsageConfig::default());
//! let results = analyzer.analyze_sequence("ATGGCTGCCAAATTTTAA", None);
//!
//! write_results(&mut stdout(), &results, OutputFormat::Text)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Write a whole corpus to a file
//!
//! ```rust,no_run
//! use codon_usage_core::{CodonUsageAnalyzer, config::{CodonUsageConfig, OutputFormat}};
//! use codon_usage_core::output::write_all_results;
//! use std::fs::File;
//!
//! let analyzer = CodonUsageAnalyzer::new(CodonUsageConfig::default());
//! let results = analyzer.analyze_fasta_file("genes.fasta")?;
//!
//! let mut output = File::create("usage.xml")?;
//! write_all_results(&mut output, &results, OutputFormat::Xml)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{CodonUsageError, config::OutputFormat, results::UsageResults};
use std::io::Write;

mod formats {
    pub mod json;
    pub mod text;
    pub mod tsv;
    pub mod xml;
}

use formats::{
    json::write_json_format,
    text::write_text_format,
    tsv::{write_tsv_header, write_tsv_format},
    xml::{write_xml_footer, write_xml_format, write_xml_header},
};

/// Writes one codon usage report in the specified format.
///
/// Only the report itself is written; file-level framing such as the TSV
/// column header or the XML declaration is left to [`write_all_results`].
///
/// # Errors
///
/// Returns [`CodonUsageError`] if writing or serialization fails.
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &UsageResults,
    format: OutputFormat,
) -> Result<(), CodonUsageError> {
    match format {
        OutputFormat::Text => write_text_format(writer, results),
        OutputFormat::Tsv => write_tsv_format(writer, results),
        OutputFormat::Xml => write_xml_format(writer, results),
        OutputFormat::Json => write_json_format(writer, results),
    }
}

/// Writes a complete document holding every report in `results`.
///
/// # Examples
///
/// ```rust
/// use codon_usage_core::{CodonUsageAnalyzer, config::OutputFormat};
/// use codon_usage_core::output::write_all_results;
///
/// let analyzer = CodonUsageAnalyzer::default();
/// let results = vec![analyzer.analyze_sequence("ATGTAA", Some("g1".to_string()))];
///
/// let mut buffer = Vec::new();
/// write_all_results(&mut buffer, &results, OutputFormat::Tsv)?;
///
/// let output = String::from_utf8(buffer)?;
/// assert!(output.starts_with("sequence\tamino_acid\tcodon\tcount\tratio\tpercent\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_all_results<W: Write>(
    writer: &mut W,
    results: &[UsageResults],
    format: OutputFormat,
) -> Result<(), CodonUsageError> {
    match format {
        OutputFormat::Tsv => write_tsv_header(writer)?,
        OutputFormat::Xml => write_xml_header(writer)?,
        OutputFormat::Text | OutputFormat::Json => {}
    }

    for result in results {
        write_results(writer, result, format)?;
    }

    if format == OutputFormat::Xml {
        write_xml_footer(writer)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::CodonUsageAnalyzer;
    use crate::codon::Codon;
    use std::io::Cursor;

    pub(crate) fn create_test_results() -> UsageResults {
        let analyzer = CodonUsageAnalyzer::default();
        let mut results =
            analyzer.analyze_sequence("ATGAAAAAGTAA", Some("test_seq".to_string()));
        results.sequence_info.description = Some("Test sequence".to_string());
        results
    }

    pub(crate) fn create_empty_results() -> UsageResults {
        let analyzer = CodonUsageAnalyzer::default();
        analyzer.analyze_sequence("", Some("empty_seq".to_string()))
    }

    pub(crate) fn create_biased_results() -> UsageResults {
        let mut results = create_test_results();
        results.biased_codons = Some(vec!["AAA".parse::<Codon>().unwrap()]);
        results
    }

    const ALL_FORMATS: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Tsv,
        OutputFormat::Xml,
        OutputFormat::Json,
    ];

    #[test]
    fn test_write_results_text_format() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        let results = create_test_results();

        let result = write_results(&mut cursor, &results, OutputFormat::Text);
        assert!(result.is_ok());

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains(">test_seq Test sequence"));
        assert!(output.contains("amino acid"));
    }

    #[test]
    fn test_write_results_tsv_format() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        let results = create_test_results();

        write_results(&mut cursor, &results, OutputFormat::Tsv).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("test_seq\tK\tAAA\t1\t0.50\t25.0\n"));
        assert!(!output.contains("amino_acid"));
    }

    #[test]
    fn test_write_results_xml_format() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        let results = create_test_results();

        write_results(&mut cursor, &results, OutputFormat::Xml).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("<gene id=\"test_seq\""));
        assert!(output.contains("<codon_ratio>"));
        assert!(!output.contains("<?xml"));
    }

    #[test]
    fn test_write_results_json_format() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        let results = create_test_results();

        write_results(&mut cursor, &results, OutputFormat::Json).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("\"header\":\"test_seq\""));
    }

    #[test]
    fn test_write_results_format_consistency() {
        let results = create_test_results();

        for format in ALL_FORMATS {
            let mut buffer = Vec::new();
            let mut cursor = Cursor::new(&mut buffer);

            let result = write_results(&mut cursor, &results, format);
            assert!(result.is_ok(), "Failed to write format: {:?}", format);

            let output = String::from_utf8(buffer).unwrap();
            assert!(!output.is_empty(), "Empty output for format: {:?}", format);
        }
    }

    #[test]
    fn test_write_results_without_codons() {
        let results = create_empty_results();

        for format in ALL_FORMATS {
            let mut buffer = Vec::new();
            let mut cursor = Cursor::new(&mut buffer);

            let result = write_results(&mut cursor, &results, format);
            assert!(
                result.is_ok(),
                "Failed to write empty results for format: {:?}",
                format
            );
        }
    }

    #[test]
    fn test_write_all_results_xml_document() {
        let results = vec![create_test_results(), create_empty_results()];
        let mut buffer = Vec::new();

        write_all_results(&mut buffer, &results, OutputFormat::Xml).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert_eq!(output.matches("<gene ").count(), 2);
        assert!(output.trim_end().ends_with("</codon_usage_results>"));
    }

    #[test]
    fn test_write_all_results_tsv_single_header() {
        let results = vec![create_test_results(), create_test_results()];
        let mut buffer = Vec::new();

        write_all_results(&mut buffer, &results, OutputFormat::Tsv).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.matches("amino_acid").count(), 1);
    }
}
