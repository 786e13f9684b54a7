//! End-to-end test: generate the sample workbook, write it to disk, read
//! it back through format detection, and estimate its import impact.

use polysheet::xlsx::WorkbookWriter;
use polysheet::{
    detect_format_from_path, estimate, resolve_translation_fields, sample, CellValue,
    ImpactOptions, Language, Presence, SourceFormat,
};

#[test]
fn sample_workbook_full_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test_stores_multilingual.xlsx");

    let template = sample::store_template();
    WorkbookWriter::new().write_file(&template, &path).unwrap();

    assert_eq!(
        detect_format_from_path(&path).unwrap(),
        SourceFormat::Xlsx
    );

    let table = polysheet::read_table(&path).unwrap();
    assert_eq!(table.name.as_deref(), Some("Stores Multilingual"));
    assert_eq!(table.record_count(), 3);
    assert_eq!(table.column_count(), 35);

    // Kurdish and Arabic text survives the round trip byte for byte
    let first = &table.records[0];
    assert_eq!(
        first.get("storeName_ku"),
        Some(&CellValue::text("چێشتخانەی کوردستان"))
    );
    assert_eq!(
        first.get("storeName_ar"),
        Some(&CellValue::text("مطعم كردستان"))
    );
    assert_eq!(first.get("latitude"), Some(&CellValue::Number(36.1916)));
    assert_eq!(
        first.get("phone"),
        Some(&CellValue::text("+9647501234567"))
    );

    let resolution = resolve_translation_fields(&table);
    assert_eq!(resolution.len(), 4);
    assert_eq!(resolution.base_fields(), vec!["storeName", "Address"]);

    let impact = estimate(&table, &resolution, &ImpactOptions::default());
    assert_eq!(impact.primary_count, 3);
    assert_eq!(impact.satellite_count, 3);
    assert_eq!(impact.translation_count, 12);
    assert_eq!(impact.duplicate_count, 0);
    assert_eq!(impact.total_rows(), 18);

    for language in Language::ALL {
        let breakdown = impact
            .languages
            .iter()
            .find(|b| b.language == language)
            .unwrap();
        assert_eq!(breakdown.translated_records, 3);
    }
}

#[test]
fn csv_to_xlsx_conversion_keeps_presence() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("stores.csv");
    let xlsx_path = dir.path().join("stores.xlsx");

    // second store has an empty Kurdish name and no Arabic column value
    std::fs::write(
        &csv_path,
        "storeName,storeName_ku,storeName_ar,email\n\
         Kurdistan Restaurant,چێشتخانەی کوردستان,مطعم كردستان,ahmad@test.com\n\
         Hawler Food Corner,,,fatima@test.com\n",
    )
    .unwrap();

    let table = polysheet::read_table(&csv_path).unwrap();
    WorkbookWriter::new().write_file(&table, &xlsx_path).unwrap();

    let converted = polysheet::read_table(&xlsx_path).unwrap();
    assert_eq!(converted.headers, table.headers);
    assert_eq!(converted.record_count(), 2);

    // blank CSV fields stay present-but-blank through the conversion
    assert_eq!(
        converted.records[1].presence("storeName_ku"),
        Presence::Blank
    );

    let impact = estimate(
        &converted,
        &resolve_translation_fields(&converted),
        &ImpactOptions::default(),
    );
    assert_eq!(impact.primary_count, 2);
    assert_eq!(impact.translation_count, 2);
    assert_eq!(impact.duplicate_count, 0);
}

#[test]
fn duplicate_emails_are_reported_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dupes.csv");

    std::fs::write(
        &path,
        "storeName,email\nA,same@test.com\nB,same@test.com\nC,other@test.com\n",
    )
    .unwrap();

    let impact =
        polysheet::estimate_file_impact(&path, &ImpactOptions::default()).unwrap();
    assert_eq!(impact.primary_count, 3);
    assert_eq!(impact.duplicate_count, 1);
    assert!(!impact.is_unique());
}
