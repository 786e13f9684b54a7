//! XLSX (Excel) workbook reading and writing.
//!
//! Reading follows the package structure directly: workbook part for
//! sheet names, relationships for worksheet paths, shared strings for
//! cell text. Writing produces the minimal package an importer template
//! needs: one worksheet, inline strings, typed numeric and boolean
//! cells.
//!
//! # Example
//!
//! ```no_run
//! use polysheet::xlsx::WorkbookReader;
//!
//! let mut reader = WorkbookReader::open("stores.xlsx")?;
//! let table = reader.read_table()?;
//! println!("{} records", table.record_count());
//! # Ok::<(), polysheet::Error>(())
//! ```

mod reader;
mod shared_strings;
mod writer;

pub use reader::WorkbookReader;
pub use writer::WorkbookWriter;
