use std::io::Write;

use crate::{CodonUsageError, results::UsageResults};

pub fn write_tsv_header<W: Write>(writer: &mut W) -> Result<(), CodonUsageError> {
    writeln!(writer, "sequence\tamino_acid\tcodon\tcount\tratio\tpercent")?;
    Ok(())
}

/// Write results as tab-separated rows, one per reported codon.
pub fn write_tsv_format<W: Write>(
    writer: &mut W,
    results: &UsageResults,
) -> Result<(), CodonUsageError> {
    let statistics = &results.statistics;
    let report = &statistics.report;

    for (amino_acid, codons) in report.synonymous_codons().iter() {
        for codon in codons {
            if let Some(entry) = report.get(*codon) {
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}\t{:.2}\t{:.1}",
                    results.sequence_info.header,
                    amino_acid.symbol(),
                    codon,
                    statistics.frequencies.count(*codon),
                    entry.ratio,
                    entry.percent
                )?;
            }
        }
    }
    Ok(())
}
