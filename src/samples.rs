use std::fs;
use std::path::Path;

use log::debug;

use crate::error::ConvertError;

/// One row of the exported table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Seconds since the start of the capture.
    pub timestamp: f64,
    pub value: f64,
}

/// Rows recovered from an input table, in file order.
#[derive(Clone, Debug, Default)]
pub struct ParsedTable {
    pub samples: Vec<Sample>,
    /// Lines with at least two fields whose leading fields were not numeric.
    pub rejected: Vec<String>,
}

impl ParsedTable {
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }
}

/// Parse a single line into a sample.
///
/// Returns `None` when the line has fewer than two fields, and `Some(Err(()))`
/// when the first two fields are present but not numeric. Additional fields
/// are ignored.
fn parse_line(line: &str, delimiter: &str) -> Option<Result<Sample, ()>> {
    let mut fields = line.split(delimiter);
    let (t, v) = match (fields.next(), fields.next()) {
        (Some(t), Some(v)) => (t, v),
        _ => return None,
    };

    let parsed = match (t.trim().parse::<f64>(), v.trim().parse::<f64>()) {
        (Ok(timestamp), Ok(value)) => Ok(Sample { timestamp, value }),
        _ => Err(()),
    };
    Some(parsed)
}

/// Split text into records on `\n`, `\r\n` or a lone `\r`.
fn records(text: &str) -> impl Iterator<Item = &str> {
    // `\r\n` yields an empty record in between, which is dropped here.
    text.split(['\r', '\n']).filter(|line| !line.is_empty())
}

/// Extract samples from delimited text.
pub fn parse_samples(text: &str, delimiter: &str) -> ParsedTable {
    let mut table = ParsedTable::default();

    for line in records(text) {
        match parse_line(line, delimiter) {
            Some(Ok(sample)) => table.samples.push(sample),
            Some(Err(())) => table.rejected.push(line.to_owned()),
            None => {}
        }
    }

    debug!(
        "parsed {} sample(s), rejected {} line(s)",
        table.samples.len(),
        table.rejected.len()
    );
    table
}

/// Read the whole input file and extract its samples.
pub fn read_samples(path: &Path, delimiter: &str) -> Result<ParsedTable, ConvertError> {
    let text = fs::read_to_string(path).map_err(|source| ConvertError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_samples(&text, delimiter))
}
