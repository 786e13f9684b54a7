//! CSV source reading with delimiter and encoding auto-detection.
//!
//! Multilingual templates travel through spreadsheet exports with
//! varying delimiters and the occasional UTF-16 save, so both are
//! sniffed before parsing.

use crate::error::{Error, Result};
use crate::model::{CellValue, SourceTable};
use std::path::Path;

/// Read a CSV file into a table.
pub fn read_file(path: impl AsRef<Path>) -> Result<SourceTable> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::SourceNotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path)?;
    read_bytes(&bytes)
}

/// Read CSV bytes into a table.
///
/// The first record is the header row; every following record becomes
/// one table record. Fields are present (possibly empty) up to the
/// record's own length; short rows leave their trailing fields absent.
pub fn read_bytes(bytes: &[u8]) -> Result<SourceTable> {
    let content = decode_text(bytes);
    let delimiter = detect_delimiter(&content);

    let mut reader = ::csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(Error::MalformedSource("CSV file has no header row".to_string()));
    }

    let mut table = SourceTable::new(headers);

    for record in reader.records() {
        let record = record?;
        let cells = (0..table.column_count())
            .map(|i| record.get(i).map(CellValue::from_raw))
            .collect();
        table.add_row(cells);
    }

    Ok(table)
}

/// Detect the delimiter by counting candidates in the first line.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Decode CSV bytes, honoring a UTF-8/UTF-16 BOM when present.
fn decode_text(bytes: &[u8]) -> String {
    if let Some((encoding, _bom_len)) = encoding_rs::Encoding::for_bom(bytes) {
        return encoding.decode(bytes).0.into_owned();
    }
    encoding_rs::UTF_8.decode(bytes).0.into_owned()
}
