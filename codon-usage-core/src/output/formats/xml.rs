use std::io::Write;

use crate::{CodonUsageError, config::AnalysisMode, results::UsageResults};

pub fn write_xml_header<W: Write>(writer: &mut W) -> Result<(), CodonUsageError> {
    writeln!(writer, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(writer, "<codon_usage_results>")?;
    Ok(())
}

pub fn write_xml_footer<W: Write>(writer: &mut W) -> Result<(), CodonUsageError> {
    writeln!(writer, "</codon_usage_results>")?;
    Ok(())
}

/// Write results as a `<gene>` or `<genome>` element.
///
/// The element holds the raw frequencies, the synonymous ratios grouped by
/// amino acid and the percentages, followed by the biased codons when bias
/// detection ran.
pub fn write_xml_format<W: Write>(
    writer: &mut W,
    results: &UsageResults,
) -> Result<(), CodonUsageError> {
    let info = &results.sequence_info;
    let statistics = &results.statistics;
    let element = match results.scope {
        AnalysisMode::Gene => "gene",
        AnalysisMode::Genome => "genome",
    };

    write!(writer, "    <{} id=\"{}\"", element, escape(&info.header))?;
    if let Some(description) = &info.description {
        write!(writer, " description=\"{}\"", escape(description))?;
    }
    writeln!(
        writer,
        " length=\"{}\" codons=\"{}\" genes=\"{}\">",
        info.length, info.codon_count, info.num_genes
    )?;
    writeln!(writer, "        <codon_usage>")?;

    writeln!(writer, "            <codon_freq>")?;
    for (codon, count) in statistics.frequencies.iter() {
        writeln!(
            writer,
            "                <codon name=\"{}\">{}</codon>",
            codon, count
        )?;
    }
    writeln!(writer, "            </codon_freq>")?;

    writeln!(writer, "            <codon_ratio>")?;
    for group in statistics.ratios.iter() {
        writeln!(
            writer,
            "                <amino_acid symbol=\"{}\" total=\"{}\">",
            group.amino_acid, group.total
        )?;
        for (codon, ratio) in &group.ratios {
            writeln!(
                writer,
                "                    <codon name=\"{}\">{:.2}</codon>",
                codon, ratio
            )?;
        }
        writeln!(writer, "                </amino_acid>")?;
    }
    writeln!(writer, "            </codon_ratio>")?;

    if statistics.percentages.is_empty() {
        writeln!(writer, "            <codon_percent/>")?;
    } else {
        writeln!(writer, "            <codon_percent>")?;
        for (codon, percent) in statistics.percentages.iter() {
            writeln!(
                writer,
                "                <codon name=\"{}\">{:.1}</codon>",
                codon, percent
            )?;
        }
        writeln!(writer, "            </codon_percent>")?;
    }
    writeln!(writer, "        </codon_usage>")?;

    if let Some(biased) = &results.biased_codons {
        if biased.is_empty() {
            writeln!(writer, "        <biased_codons/>")?;
        } else {
            writeln!(writer, "        <biased_codons>")?;
            for codon in biased {
                writeln!(writer, "            <codon name=\"{}\"/>", codon)?;
            }
            writeln!(writer, "        </biased_codons>")?;
        }
    }

    writeln!(writer, "    </{}>", element)?;
    Ok(())
}

/// Escape text for use in XML attribute values and character data.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
