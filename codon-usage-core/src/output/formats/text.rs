use std::io::Write;

use crate::{CodonUsageError, results::UsageResults};

/// Write results as a text table of amino acid, codon, ratio and percent.
///
/// Rows are grouped by amino acid in synonymous table order.
pub fn write_text_format<W: Write>(
    writer: &mut W,
    results: &UsageResults,
) -> Result<(), CodonUsageError> {
    let info = &results.sequence_info;
    match &info.description {
        Some(description) => writeln!(writer, ">{} {}", info.header, description)?,
        None => writeln!(writer, ">{}", info.header)?,
    }
    writeln!(
        writer,
        "# length={} codons={} genes={}",
        info.length, info.codon_count, info.num_genes
    )?;

    let report = &results.statistics.report;
    if report.is_empty() {
        writeln!(writer, "# Sequence not found")?;
    } else {
        writeln!(
            writer,
            "{:<12} {:<7} {:<7} {}",
            "amino acid", "codon", "ratio", "percent"
        )?;
        for (amino_acid, codons) in report.synonymous_codons().iter() {
            for codon in codons {
                if let Some(entry) = report.get(*codon) {
                    writeln!(
                        writer,
                        "{:<12} {:<7} {:<7.2} {:.1}",
                        amino_acid.symbol(),
                        codon.as_str(),
                        entry.ratio,
                        entry.percent
                    )?;
                }
            }
        }
    }

    if let Some(biased) = &results.biased_codons {
        let list = if biased.is_empty() {
            "none".to_string()
        } else {
            biased
                .iter()
                .map(|codon| codon.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        writeln!(writer, "# biased codons: {}", list)?;
    }
    writeln!(writer)?;
    Ok(())
}
