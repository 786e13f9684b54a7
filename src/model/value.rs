//! Scalar cell values and the three-valued presence check.

use serde::{Deserialize, Serialize};

/// A scalar value held by one field of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Boolean cell
    Bool(bool),
    /// Numeric cell
    Number(f64),
    /// Text cell (may be empty)
    Text(String),
}

impl CellValue {
    /// Create a text value.
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Interpret raw text, turning numeric-looking content into a number.
    ///
    /// A leading `+` keeps the value textual so phone numbers like
    /// `+9647501234567` survive untouched.
    pub fn from_raw(s: &str) -> Self {
        if !s.is_empty() && !s.starts_with('+') {
            if let Ok(n) = s.parse::<f64>() {
                if n.is_finite() {
                    return CellValue::Number(n);
                }
            }
        }
        CellValue::Text(s.to_string())
    }

    /// True only for the empty text value.
    ///
    /// Whitespace-only text is NOT blank; the import pipeline stores it
    /// as given.
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Text(s) if s.is_empty())
    }

    /// The text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Canonical display string, used for report samples and
    /// duplicate-key comparison.
    pub fn display_string(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(true) => write!(f, "TRUE"),
            CellValue::Bool(false) => write!(f, "FALSE"),
        }
    }
}

/// Presence of a field value within a record.
///
/// Distinguishes a populated cell from a present-but-empty one and from a
/// column the record never had.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    /// Present with non-empty content
    Filled,
    /// Present, but the empty string
    Blank,
    /// No value at all
    Absent,
}

impl Presence {
    /// Classify an optional cell value.
    pub fn of(value: Option<&CellValue>) -> Self {
        match value {
            None => Presence::Absent,
            Some(v) if v.is_blank() => Presence::Blank,
            Some(_) => Presence::Filled,
        }
    }

    /// Whether the value is present and non-empty.
    pub fn is_filled(&self) -> bool {
        matches!(self, Presence::Filled)
    }
}
