//! # polysheet
//!
//! Inspection tooling for multilingual store-import spreadsheets.
//!
//! Store templates carry English values in base columns and Kurdish
//! Sorani / Arabic values in suffixed columns (`storeName_ku`,
//! `Address_ar`). This library loads such tables from XLSX workbooks or
//! CSV files, resolves the translation columns, and estimates what a
//! database import of the table would create: one vendor and one store
//! per record plus one translation row per populated translation cell,
//! with duplicate detection on a declared unique field.
//!
//! ## Quick Start
//!
//! ```no_run
//! use polysheet::{estimate, read_table, ImpactOptions, SuffixRegistry};
//!
//! let table = read_table("stores_multilang_template.xlsx")?;
//! let resolution = SuffixRegistry::default().resolve(&table.headers);
//! let impact = estimate(&table, &resolution, &ImpactOptions::default());
//!
//! println!("{} stores, {} translations", impact.primary_count, impact.translation_count);
//! if !impact.is_unique() {
//!     println!("{} duplicate emails", impact.duplicate_count);
//! }
//! # Ok::<(), polysheet::Error>(())
//! ```
//!
//! ## Format-Specific APIs
//!
//! ```no_run
//! use polysheet::xlsx::{WorkbookReader, WorkbookWriter};
//!
//! // Read a workbook directly
//! let table = WorkbookReader::open("stores.xlsx")?.read_table()?;
//!
//! // Write one back out
//! WorkbookWriter::new().write_file(&table, "copy.xlsx")?;
//! # Ok::<(), polysheet::Error>(())
//! ```
//!
//! ## Features
//!
//! - `xlsx` (default): Excel workbook support
//! - `csv` (default): CSV support with delimiter/encoding detection

#[cfg(feature = "xlsx")]
pub mod container;
pub mod detect;
pub mod error;
pub mod impact;
pub mod lang;
pub mod model;
pub mod sample;

#[cfg(feature = "csv")]
pub mod csv;

#[cfg(feature = "xlsx")]
pub mod xlsx;

// Re-exports
pub use detect::{detect_format_from_bytes, detect_format_from_path, SourceFormat};
pub use error::{Error, Result};
pub use impact::{estimate, ImpactOptions, ImportImpact, LanguageBreakdown};
pub use lang::{FieldResolution, Language, SuffixRegistry, SuffixRule, TranslationField};
pub use model::{CellValue, Presence, Record, SourceTable};

use std::path::Path;

/// Load a tabular source file into a table.
///
/// The format is auto-detected: workbooks by ZIP magic, CSV otherwise.
///
/// # Example
///
/// ```no_run
/// use polysheet::read_table;
///
/// let table = read_table("stores.xlsx")?;
/// println!("{} records x {} columns", table.record_count(), table.column_count());
/// # Ok::<(), polysheet::Error>(())
/// ```
pub fn read_table(path: impl AsRef<Path>) -> Result<SourceTable> {
    let path = path.as_ref();
    let format = detect::detect_format_from_path(path)?;

    match format {
        #[cfg(feature = "xlsx")]
        SourceFormat::Xlsx => xlsx::WorkbookReader::open(path)?.read_table(),
        #[cfg(feature = "csv")]
        SourceFormat::Csv => csv::read_file(path),
        #[cfg(not(all(feature = "xlsx", feature = "csv")))]
        _ => Err(Error::UnsupportedFormat(format.to_string())),
    }
}

/// Load a tabular source from bytes.
pub fn read_table_bytes(data: &[u8]) -> Result<SourceTable> {
    let format = detect::detect_format_from_bytes(data)?;

    match format {
        #[cfg(feature = "xlsx")]
        SourceFormat::Xlsx => xlsx::WorkbookReader::from_bytes(data.to_vec())?.read_table(),
        #[cfg(feature = "csv")]
        SourceFormat::Csv => csv::read_bytes(data),
        #[cfg(not(all(feature = "xlsx", feature = "csv")))]
        _ => Err(Error::UnsupportedFormat(format.to_string())),
    }
}

/// Resolve the translation columns of a table with the standard suffix
/// registry.
pub fn resolve_translation_fields(table: &SourceTable) -> FieldResolution {
    SuffixRegistry::default().resolve(&table.headers)
}

/// Load a file and estimate its import impact in one step.
///
/// # Example
///
/// ```no_run
/// use polysheet::{estimate_file_impact, ImpactOptions};
///
/// let impact = estimate_file_impact("stores.csv", &ImpactOptions::default())?;
/// println!("{} new rows in total", impact.total_rows());
/// # Ok::<(), polysheet::Error>(())
/// ```
pub fn estimate_file_impact(
    path: impl AsRef<Path>,
    options: &ImpactOptions,
) -> Result<ImportImpact> {
    let table = read_table(path)?;
    let resolution = resolve_translation_fields(&table);
    Ok(estimate(&table, &resolution, options))
}
