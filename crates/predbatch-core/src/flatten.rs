// src/flatten.rs
//
// Turns a headerless CSV file into the single argument string handed to the
// predictor: every cell in row-major order, trimmed, joined with commas.

use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::BatchError;

pub fn flatten_file(path: &Path) -> Result<String, BatchError> {
    let file = File::open(path)?;
    flatten_reader(file)
}

/// Flatten headerless CSV content into the predictor argument string.
///
/// Every cell must parse as a number; the argument string carries the
/// trimmed original cell text, so `2` stays `2` rather than becoming `2.0`.
/// Content with no values at all is rejected.
pub fn flatten_reader<R: Read>(reader: R) -> Result<String, BatchError> {
    let mut rdr = ReaderBuilder::new().has_headers(false).from_reader(reader);

    let mut values: Vec<String> = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        for field in record.iter() {
            let cell = field.trim();
            if cell.parse::<f64>().is_err() {
                return Err(BatchError::NonNumeric {
                    row,
                    value: cell.to_string(),
                });
            }
            values.push(cell.to_string());
        }
    }

    if values.is_empty() {
        return Err(BatchError::EmptyInput);
    }
    Ok(values.join(","))
}
