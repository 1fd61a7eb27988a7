use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use bio::io::fasta;
use log::debug;

use super::GeneRecord;
use crate::config::InputFormat;
use crate::types::CodonUsageError;

/// Read every record of a FASTA file using rust-bio.
pub fn read_fasta_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<GeneRecord>, CodonUsageError> {
    let file = File::open(path)?;
    parse_fasta(file)
}

/// Parse FASTA records from any reader.
pub fn parse_fasta<R: Read>(reader: R) -> Result<Vec<GeneRecord>, CodonUsageError> {
    let reader = fasta::Reader::new(reader);
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| CodonUsageError::ParseError(e.to_string()))?;
        sequences.push(GeneRecord {
            id: record.id().to_string(),
            description: record.desc().map(String::from),
            sequence: record.seq().to_vec(),
        });
    }

    debug!("Parsed {} FASTA records", sequences.len());
    Ok(sequences)
}

/// Read a flat corpus file: one gene per line, identifier then sequence.
pub fn read_flat_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<GeneRecord>, CodonUsageError> {
    let file = File::open(path)?;
    parse_flat_corpus(BufReader::new(file))
}

/// Parse a flat corpus.
///
/// Each non-blank line holds an identifier followed by whitespace and the
/// coding sequence. Whitespace inside the sequence is removed. A line with
/// an identifier but no sequence is rejected.
pub fn parse_flat_corpus<R: BufRead>(reader: R) -> Result<Vec<GeneRecord>, CodonUsageError> {
    let mut genes = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let id = fields.next().unwrap_or_default();
        let sequence: String = fields.collect();
        if sequence.is_empty() {
            return Err(CodonUsageError::InvalidCorpusLine {
                line: number + 1,
                reason: format!("no sequence after identifier '{}'", id),
            });
        }
        genes.push(GeneRecord::new(id, sequence));
    }

    debug!("Parsed {} flat corpus records", genes.len());
    Ok(genes)
}

/// Read a corpus file in the given format.
pub fn read_corpus<P: AsRef<Path>>(
    path: P,
    format: InputFormat,
) -> Result<Vec<GeneRecord>, CodonUsageError> {
    match format {
        InputFormat::Fasta => read_fasta_sequences(path),
        InputFormat::Flat => read_flat_corpus(path),
    }
}
