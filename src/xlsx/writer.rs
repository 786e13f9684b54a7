//! Minimal XLSX workbook writer.
//!
//! Produces the smallest package the import tooling round-trips: content
//! types, package relationships, a workbook with one sheet, and a
//! worksheet with typed cells. Text is written as inline strings so no
//! shared-strings table is needed.

use crate::error::Result;
use crate::model::{CellValue, SourceTable};
use quick_xml::escape::escape;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

/// Writer for XLSX (Excel) workbooks.
#[derive(Debug, Clone)]
pub struct WorkbookWriter {
    sheet_name: String,
}

impl Default for WorkbookWriter {
    fn default() -> Self {
        Self {
            sheet_name: "Sheet1".to_string(),
        }
    }
}

impl WorkbookWriter {
    /// Create a writer with the default sheet name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with a custom fallback sheet name. A table that
    /// carries its own name keeps it.
    pub fn with_sheet_name(name: impl Into<String>) -> Self {
        Self {
            sheet_name: name.into(),
        }
    }

    /// Serialize a table into workbook bytes.
    pub fn write_bytes(&self, table: &SourceTable) -> Result<Vec<u8>> {
        let sheet_name = table.name.as_deref().unwrap_or(&self.sheet_name);

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(CONTENT_TYPES.as_bytes())?;

        zip.start_file("_rels/.rels", options)?;
        zip.write_all(PACKAGE_RELS.as_bytes())?;

        zip.start_file("xl/workbook.xml", options)?;
        zip.write_all(workbook_xml(sheet_name).as_bytes())?;

        zip.start_file("xl/_rels/workbook.xml.rels", options)?;
        zip.write_all(WORKBOOK_RELS.as_bytes())?;

        zip.start_file("xl/worksheets/sheet1.xml", options)?;
        zip.write_all(worksheet_xml(table).as_bytes())?;

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }

    /// Write a table out as an XLSX file.
    pub fn write_file(&self, table: &SourceTable, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.write_bytes(table)?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

fn workbook_xml(sheet_name: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="{}" sheetId="1" r:id="rId1"/></sheets></workbook>"#,
        escape(sheet_name)
    )
}

fn worksheet_xml(table: &SourceTable) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );

    // Header row
    xml.push_str("<row r=\"1\">");
    for (col, header) in table.headers.iter().enumerate() {
        push_cell(&mut xml, col, 1, &CellValue::text(header.clone()));
    }
    xml.push_str("</row>");

    // Data rows; absent fields leave no cell, so rows stay sparse
    for (i, record) in table.records.iter().enumerate() {
        let row_num = i + 2;
        xml.push_str(&format!("<row r=\"{}\">", row_num));
        for (col, header) in table.headers.iter().enumerate() {
            if let Some(value) = record.get(header) {
                push_cell(&mut xml, col, row_num, value);
            }
        }
        xml.push_str("</row>");
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

fn push_cell(xml: &mut String, col: usize, row: usize, value: &CellValue) {
    let cell_ref = format!("{}{}", column_ref(col), row);
    match value {
        CellValue::Text(s) => {
            let space = if needs_space_preserve(s) {
                " xml:space=\"preserve\""
            } else {
                ""
            };
            xml.push_str(&format!(
                "<c r=\"{}\" t=\"inlineStr\"><is><t{}>{}</t></is></c>",
                cell_ref,
                space,
                escape(s.as_str())
            ));
        }
        CellValue::Number(n) => {
            xml.push_str(&format!("<c r=\"{}\"><v>{}</v></c>", cell_ref, n));
        }
        CellValue::Bool(b) => {
            xml.push_str(&format!(
                "<c r=\"{}\" t=\"b\"><v>{}</v></c>",
                cell_ref,
                if *b { 1 } else { 0 }
            ));
        }
    }
}

fn needs_space_preserve(s: &str) -> bool {
    s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace)
}

/// Column letters from an index: 0 is `A`, 27 is `AB`.
fn column_ref(mut col: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push((b'A' + (col % 26) as u8) as char);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    letters.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn test_column_ref() {
        assert_eq!(column_ref(0), "A");
        assert_eq!(column_ref(25), "Z");
        assert_eq!(column_ref(26), "AA");
        assert_eq!(column_ref(27), "AB");
        assert_eq!(column_ref(34), "AI");
    }

    #[test]
    fn test_worksheet_xml_escapes_text() {
        let mut table = SourceTable::new(vec!["storeName".to_string()]);
        table.add_row(vec![Some(CellValue::text("Fish & Chips <Erbil>"))]);

        let xml = worksheet_xml(&table);
        assert!(xml.contains("Fish &amp; Chips &lt;Erbil&gt;"));
        assert!(!xml.contains("Fish & Chips"));
    }

    #[test]
    fn test_worksheet_xml_cell_refs() {
        let mut table = SourceTable::new(vec!["a".to_string(), "b".to_string()]);
        let mut record = Record::new();
        // only the second column has a value; the cell ref must say B2
        record.insert("b", CellValue::Number(7.0));
        table.add_record(record);

        let xml = worksheet_xml(&table);
        assert!(xml.contains("<c r=\"B2\"><v>7</v></c>"));
        assert!(!xml.contains("<c r=\"A2\""));
    }

    #[test]
    fn test_worksheet_preserves_whitespace_text() {
        let mut table = SourceTable::new(vec!["note".to_string()]);
        table.add_row(vec![Some(CellValue::text("  "))]);

        let xml = worksheet_xml(&table);
        assert!(xml.contains("xml:space=\"preserve\""));
    }

    #[test]
    fn test_workbook_bytes_is_zip_package() {
        let table = SourceTable::with_name("Stores", vec!["storeName".to_string()]);
        let bytes = WorkbookWriter::new().write_bytes(&table).unwrap();
        assert_eq!(&bytes[..4], &[0x50, 0x4B, 0x03, 0x04]);
    }

    #[test]
    fn test_sheet_name_escaped() {
        let xml = workbook_xml("Stores & \"More\"");
        assert!(xml.contains("Stores &amp; &quot;More&quot;"));
    }
}
