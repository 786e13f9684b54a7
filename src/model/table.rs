//! Record and table structures.

use super::{CellValue, Presence};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One candidate entity to import: a store together with its owner.
///
/// Field order is owned by the surrounding [`SourceTable`] header list;
/// a record only maps field names to values. Fields the source row never
/// had are absent from the map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    values: HashMap<String, CellValue>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: CellValue) {
        self.values.insert(field.into(), value);
    }

    /// Get a field value.
    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.values.get(field)
    }

    /// Three-valued presence check for a field.
    pub fn presence(&self, field: &str) -> Presence {
        Presence::of(self.get(field))
    }

    /// Number of populated fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A loaded table: ordered column headers plus the record sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceTable {
    /// Source name (worksheet title for workbooks)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Ordered column headers
    #[serde(default)]
    pub headers: Vec<String>,

    /// Data records, one per source row
    #[serde(default)]
    pub records: Vec<Record>,
}

impl SourceTable {
    /// Create a table with the given headers.
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            name: None,
            headers,
            records: Vec::new(),
        }
    }

    /// Create a named table with the given headers.
    pub fn with_name(name: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            name: Some(name.into()),
            headers,
            records: Vec::new(),
        }
    }

    /// Append a record.
    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Append a row of cells aligned with the header list.
    ///
    /// `None` cells stay absent from the record; rows longer than the
    /// header list are truncated.
    pub fn add_row(&mut self, cells: Vec<Option<CellValue>>) {
        let mut record = Record::new();
        for (header, cell) in self.headers.iter().zip(cells) {
            if let Some(value) = cell {
                record.insert(header.clone(), value);
            }
        }
        self.records.push(record);
    }

    /// Number of records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Whether the table has no records. An empty record sequence is a
    /// valid table.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First-record sample for a column, for inspection reports.
    pub fn column_sample(&self, field: &str) -> Option<String> {
        self.records
            .first()
            .and_then(|r| r.get(field))
            .map(|v| v.display_string())
    }

    /// Convert to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert to compact JSON.
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
