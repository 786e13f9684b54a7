//! XLSX workbook reader.

use crate::container::WorkbookContainer;
use crate::error::{Error, Result};
use crate::model::{CellValue, SourceTable};
use std::collections::HashMap;
use std::path::Path;

use super::shared_strings::SharedStrings;

/// Sheet info from workbook.xml.
#[derive(Debug, Clone)]
struct SheetInfo {
    name: String,
    rel_id: String,
}

/// Reader for XLSX (Excel) workbooks.
pub struct WorkbookReader {
    container: WorkbookContainer,
    shared_strings: SharedStrings,
    sheets: Vec<SheetInfo>,
    relationships: HashMap<String, String>,
}

impl WorkbookReader {
    /// Open an XLSX file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let container = WorkbookContainer::open(path)?;
        Self::from_container(container)
    }

    /// Create a reader from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = WorkbookContainer::from_bytes(data)?;
        Self::from_container(container)
    }

    fn from_container(container: WorkbookContainer) -> Result<Self> {
        let shared_strings = if let Ok(xml) = container.read_xml("xl/sharedStrings.xml") {
            SharedStrings::parse(&xml)?
        } else {
            SharedStrings::default()
        };

        let relationships = Self::parse_workbook_rels(&container)?;
        let sheets = Self::parse_workbook(&container)?;

        Ok(Self {
            container,
            shared_strings,
            sheets,
            relationships,
        })
    }

    /// Parse workbook relationships (sheet rel ID to worksheet path).
    fn parse_workbook_rels(container: &WorkbookContainer) -> Result<HashMap<String, String>> {
        let mut rels = HashMap::new();

        if let Ok(xml) = container.read_xml("xl/_rels/workbook.xml.rels") {
            let mut reader = quick_xml::Reader::from_str(&xml);
            reader.config_mut().trim_text(true);

            let mut buf = Vec::new();

            loop {
                match reader.read_event_into(&mut buf) {
                    Ok(quick_xml::events::Event::Empty(e))
                    | Ok(quick_xml::events::Event::Start(e)) => {
                        if e.name().as_ref() == b"Relationship" {
                            let mut id = String::new();
                            let mut target = String::new();

                            for attr in e.attributes().flatten() {
                                match attr.key.as_ref() {
                                    b"Id" => {
                                        id = String::from_utf8_lossy(&attr.value).to_string();
                                    }
                                    b"Target" => {
                                        target = String::from_utf8_lossy(&attr.value).to_string();
                                    }
                                    _ => {}
                                }
                            }

                            if !id.is_empty() && !target.is_empty() {
                                rels.insert(id, target);
                            }
                        }
                    }
                    Ok(quick_xml::events::Event::Eof) => break,
                    Err(e) => return Err(Error::XmlParse(e.to_string())),
                    _ => {}
                }
                buf.clear();
            }
        }

        Ok(rels)
    }

    /// Parse workbook.xml for sheet names and relationship IDs.
    fn parse_workbook(container: &WorkbookContainer) -> Result<Vec<SheetInfo>> {
        let mut sheets = Vec::new();

        let xml = container.read_xml("xl/workbook.xml")?;
        let mut reader = quick_xml::Reader::from_str(&xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(quick_xml::events::Event::Empty(e))
                | Ok(quick_xml::events::Event::Start(e)) => {
                    if e.name().as_ref() == b"sheet" {
                        let mut name = String::new();
                        let mut rel_id = String::new();

                        for attr in e.attributes().flatten() {
                            match attr.key.as_ref() {
                                b"name" => {
                                    name = String::from_utf8_lossy(&attr.value).to_string();
                                }
                                b"r:id" => {
                                    rel_id = String::from_utf8_lossy(&attr.value).to_string();
                                }
                                _ => {}
                            }
                        }

                        if !name.is_empty() {
                            sheets.push(SheetInfo { name, rel_id });
                        }
                    }
                }
                Ok(quick_xml::events::Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(sheets)
    }

    /// Get the number of sheets.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Get sheet names.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Read the first worksheet as a table. The first row is the header
    /// row; every following row becomes one record.
    pub fn read_table(&mut self) -> Result<SourceTable> {
        self.read_sheet(0)
    }

    /// Read the worksheet at `index` as a table.
    pub fn read_sheet(&mut self, index: usize) -> Result<SourceTable> {
        let sheet = self
            .sheets
            .get(index)
            .cloned()
            .ok_or_else(|| Error::MalformedSource("workbook has no sheets".to_string()))?;

        let target = self
            .relationships
            .get(&sheet.rel_id)
            .ok_or_else(|| Error::MissingComponent(format!("worksheet for '{}'", sheet.name)))?;

        let sheet_path = if let Some(stripped) = target.strip_prefix('/') {
            stripped.to_string()
        } else {
            format!("xl/{}", target)
        };

        let xml = self.container.read_xml(&sheet_path)?;
        self.parse_sheet(&xml, &sheet.name)
    }

    /// Parse a worksheet XML into a table.
    ///
    /// Cells are aligned by their `r` reference, so sparse rows (the
    /// usual case when translation columns are left empty) land each
    /// value in the right column.
    fn parse_sheet(&self, xml: &str, sheet_name: &str) -> Result<SourceTable> {
        let mut reader = quick_xml::Reader::from_str(xml);

        let mut buf = Vec::new();
        let mut in_row = false;
        let mut in_cell = false;
        let mut in_value = false;
        let mut current_row: Option<Vec<Option<CellValue>>> = None;
        let mut current_col: usize = 0;
        let mut next_col: usize = 0;
        let mut current_cell_type: Option<String> = None;
        let mut current_cell_value = String::new();
        let mut saw_value = false;
        let mut header_row: Option<Vec<Option<CellValue>>> = None;
        let mut data_rows: Vec<Vec<Option<CellValue>>> = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(quick_xml::events::Event::Start(ref e)) => match e.name().as_ref() {
                    b"row" => {
                        in_row = true;
                        next_col = 0;
                        current_row = Some(Vec::new());
                    }
                    b"c" if in_row => {
                        in_cell = true;
                        current_cell_type = None;
                        current_cell_value.clear();
                        saw_value = false;
                        current_col = next_col;

                        for attr in e.attributes().flatten() {
                            match attr.key.as_ref() {
                                b"t" => {
                                    current_cell_type =
                                        Some(String::from_utf8_lossy(&attr.value).to_string());
                                }
                                b"r" => {
                                    let cell_ref = String::from_utf8_lossy(&attr.value);
                                    if let Some(col) = column_index(&cell_ref) {
                                        current_col = col;
                                    }
                                }
                                _ => {}
                            }
                        }
                        next_col = current_col + 1;
                    }
                    b"v" | b"t" if in_cell => {
                        in_value = true;
                        saw_value = true;
                    }
                    _ => {}
                },
                Ok(quick_xml::events::Event::Empty(ref e)) => match e.name().as_ref() {
                    b"row" => {
                        // Self-closing row: no cells at all
                        if header_row.is_none() {
                            header_row = Some(Vec::new());
                        } else {
                            data_rows.push(Vec::new());
                        }
                    }
                    b"c" if in_row => {
                        // Self-closing cell (<c r="B2"/>): no value
                        let mut col = next_col;
                        for attr in e.attributes().flatten() {
                            if attr.key.as_ref() == b"r" {
                                let cell_ref = String::from_utf8_lossy(&attr.value);
                                if let Some(parsed) = column_index(&cell_ref) {
                                    col = parsed;
                                }
                            }
                        }
                        if let Some(ref mut row) = current_row {
                            place_cell(row, col, None);
                        }
                        next_col = col + 1;
                    }
                    b"v" | b"t" if in_cell => {
                        // Self-closing value element: present but empty
                        saw_value = true;
                    }
                    _ => {}
                },
                Ok(quick_xml::events::Event::Text(ref e)) => {
                    if in_value {
                        let text = e.unescape().unwrap_or_default();
                        current_cell_value.push_str(&text);
                    }
                }
                Ok(quick_xml::events::Event::End(ref e)) => match e.name().as_ref() {
                    b"row" => {
                        if let Some(row) = current_row.take() {
                            if header_row.is_none() {
                                header_row = Some(row);
                            } else {
                                data_rows.push(row);
                            }
                        }
                        in_row = false;
                    }
                    b"c" => {
                        if in_cell {
                            let value = if saw_value {
                                self.resolve_cell_value(
                                    &current_cell_value,
                                    current_cell_type.as_deref(),
                                )
                            } else {
                                None
                            };

                            if let Some(ref mut row) = current_row {
                                place_cell(row, current_col, value);
                            }
                            in_cell = false;
                        }
                    }
                    b"v" | b"t" => {
                        in_value = false;
                    }
                    _ => {}
                },
                Ok(quick_xml::events::Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        let header_row = header_row
            .ok_or_else(|| Error::MalformedSource("worksheet has no header row".to_string()))?;

        let mut headers: Vec<String> = header_row
            .into_iter()
            .map(|cell| cell.map(|v| v.display_string()).unwrap_or_default())
            .collect();
        while headers.last().is_some_and(|h| h.is_empty()) {
            headers.pop();
        }
        if headers.is_empty() {
            return Err(Error::MalformedSource(
                "worksheet has no header row".to_string(),
            ));
        }

        let mut table = SourceTable::with_name(sheet_name, headers);
        for row in data_rows {
            if row.iter().all(|c| c.is_none()) {
                continue;
            }
            table.add_row(row);
        }

        Ok(table)
    }

    /// Resolve a cell value based on its type attribute.
    fn resolve_cell_value(&self, raw: &str, cell_type: Option<&str>) -> Option<CellValue> {
        match cell_type {
            Some("s") => {
                // Shared string index
                let text = raw
                    .parse::<usize>()
                    .ok()
                    .and_then(|idx| self.shared_strings.get(idx))
                    .unwrap_or(raw);
                Some(CellValue::text(text))
            }
            Some("b") => Some(CellValue::Bool(raw == "1")),
            Some("str") | Some("inlineStr") => Some(CellValue::text(raw)),
            Some("e") => Some(CellValue::text(format!("#ERROR:{}", raw))),
            _ => {
                // Number or general
                match raw.parse::<f64>() {
                    Ok(n) => Some(CellValue::Number(n)),
                    Err(_) => Some(CellValue::text(raw)),
                }
            }
        }
    }
}

/// Place a cell at its column index, padding skipped columns with `None`.
fn place_cell(row: &mut Vec<Option<CellValue>>, col: usize, value: Option<CellValue>) {
    while row.len() < col {
        row.push(None);
    }
    if row.len() == col {
        row.push(value);
    } else {
        row[col] = value;
    }
}

/// Column index from a cell reference: `A1` is column 0, `AB12` is 27.
fn column_index(cell_ref: &str) -> Option<usize> {
    let letters: String = cell_ref
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    if letters.is_empty() {
        return None;
    }

    let mut index: usize = 0;
    for c in letters.chars() {
        index = index * 26 + (c.to_ascii_uppercase() as usize - 'A' as usize + 1);
    }
    Some(index - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Presence;
    use crate::xlsx::WorkbookWriter;

    #[test]
    fn test_column_index() {
        assert_eq!(column_index("A1"), Some(0));
        assert_eq!(column_index("B2"), Some(1));
        assert_eq!(column_index("Z9"), Some(25));
        assert_eq!(column_index("AA1"), Some(26));
        assert_eq!(column_index("AB12"), Some(27));
        assert_eq!(column_index("12"), None);
    }

    #[test]
    fn test_place_cell_pads_gaps() {
        let mut row = Vec::new();
        place_cell(&mut row, 0, Some(CellValue::text("a")));
        place_cell(&mut row, 3, Some(CellValue::text("d")));
        assert_eq!(row.len(), 4);
        assert!(row[1].is_none());
        assert!(row[2].is_none());
        assert_eq!(row[3], Some(CellValue::text("d")));
    }

    fn sample_workbook_bytes() -> Vec<u8> {
        let mut table = SourceTable::with_name(
            "Stores",
            vec![
                "storeName".to_string(),
                "storeName_ku".to_string(),
                "zone_id".to_string(),
                "email".to_string(),
            ],
        );
        table.add_row(vec![
            Some(CellValue::text("Kurdistan Restaurant")),
            Some(CellValue::text("چێشتخانەی کوردستان")),
            Some(CellValue::Number(1.0)),
            Some(CellValue::text("ahmad.kurdistan@test.com")),
        ]);
        table.add_row(vec![
            Some(CellValue::text("Hawler Food Corner")),
            None,
            Some(CellValue::Number(2.0)),
            Some(CellValue::text("fatima.hawler@test.com")),
        ]);
        WorkbookWriter::new().write_bytes(&table).unwrap()
    }

    #[test]
    fn test_read_written_workbook() {
        let bytes = sample_workbook_bytes();
        let mut reader = WorkbookReader::from_bytes(bytes).unwrap();

        assert_eq!(reader.sheet_count(), 1);
        assert_eq!(reader.sheet_names(), vec!["Stores"]);

        let table = reader.read_table().unwrap();
        assert_eq!(table.name.as_deref(), Some("Stores"));
        assert_eq!(
            table.headers,
            vec!["storeName", "storeName_ku", "zone_id", "email"]
        );
        assert_eq!(table.record_count(), 2);

        let first = &table.records[0];
        assert_eq!(
            first.get("storeName_ku"),
            Some(&CellValue::text("چێشتخانەی کوردستان"))
        );
        assert_eq!(first.get("zone_id"), Some(&CellValue::Number(1.0)));

        // sparse second row: the skipped translation cell stays absent
        let second = &table.records[1];
        assert_eq!(second.presence("storeName_ku"), Presence::Absent);
        assert_eq!(second.presence("email"), Presence::Filled);
    }

    #[test]
    fn test_not_a_workbook() {
        let result = WorkbookReader::from_bytes(b"not a zip archive".to_vec());
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = WorkbookReader::open("no/such/stores.xlsx");
        assert!(matches!(result, Err(Error::SourceNotFound(_))));
    }
}
