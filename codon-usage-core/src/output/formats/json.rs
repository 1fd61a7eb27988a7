use std::io::Write;

use crate::{CodonUsageError, results::UsageResults};

/// Write results as a single line of JSON.
pub fn write_json_format<W: Write>(
    writer: &mut W,
    results: &UsageResults,
) -> Result<(), CodonUsageError> {
    serde_json::to_writer(&mut *writer, results)?;
    writeln!(writer)?;
    Ok(())
}
