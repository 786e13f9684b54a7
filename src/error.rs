//! Error types for the polysheet library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for polysheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing tabular sources.
#[derive(Error, Debug)]
pub enum Error {
    /// The source path does not resolve to a file.
    #[error("source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source format could not be determined.
    #[error("unknown source format")]
    UnknownFormat,

    /// The source format is recognized but support for it is compiled out.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Error reading the workbook ZIP package.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing worksheet XML.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// Error parsing CSV content.
    #[error("CSV parse error: {0}")]
    Csv(String),

    /// A required workbook component is missing.
    #[error("missing workbook component: {0}")]
    MissingComponent(String),

    /// The source exists but cannot be shaped into rows and columns.
    #[error("malformed source: {0}")]
    MalformedSource(String),
}

impl Error {
    /// Whether this error means the source existed but could not be parsed
    /// into the expected row/column shape.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::ZipArchive(_)
                | Error::XmlParse(_)
                | Error::Csv(_)
                | Error::MissingComponent(_)
                | Error::MalformedSource(_)
        )
    }
}

#[cfg(feature = "xlsx")]
impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

#[cfg(feature = "xlsx")]
impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

#[cfg(feature = "csv")]
impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFormat;
        assert_eq!(err.to_string(), "unknown source format");

        let err = Error::SourceNotFound(PathBuf::from("stores.xlsx"));
        assert_eq!(err.to_string(), "source not found: stores.xlsx");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_malformed_family() {
        assert!(Error::MalformedSource("no header row".into()).is_malformed());
        assert!(Error::XmlParse("truncated".into()).is_malformed());
        assert!(!Error::SourceNotFound(PathBuf::from("x")).is_malformed());
        assert!(!Error::UnknownFormat.is_malformed());
    }
}
