//! Benchmarks for workbook parsing and impact estimation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polysheet::xlsx::{WorkbookReader, WorkbookWriter};
use polysheet::{estimate, resolve_translation_fields, sample, CellValue, ImpactOptions, SourceTable};

/// A larger table: the sample template headers with generated rows.
fn large_table(rows: usize) -> SourceTable {
    let headers = sample::TEMPLATE_HEADERS
        .iter()
        .map(|h| h.to_string())
        .collect();
    let mut table = SourceTable::with_name("Stores Multilingual", headers);

    for i in 0..rows {
        let mut cells: Vec<Option<CellValue>> = vec![None; sample::TEMPLATE_HEADERS.len()];
        cells[2] = Some(CellValue::text(format!("Store {}", i)));
        cells[3] = Some(CellValue::text("چێشتخانەی کوردستان"));
        cells[4] = Some(CellValue::text("مطعم كردستان"));
        cells[6] = Some(CellValue::text(format!("store{}@test.com", i)));
        cells[9] = Some(CellValue::Number(36.0 + i as f64 / 1000.0));
        cells[11] = Some(CellValue::text("Downtown Erbil"));
        cells[12] = Some(CellValue::text("ناوەندی هەولێر"));
        table.add_row(cells);
    }

    table
}

fn bench_workbook_read(c: &mut Criterion) {
    let bytes = WorkbookWriter::new()
        .write_bytes(&large_table(1000))
        .unwrap();

    c.bench_function("read_workbook_1000_rows", |b| {
        b.iter(|| {
            let mut reader = WorkbookReader::from_bytes(black_box(bytes.clone())).unwrap();
            black_box(reader.read_table().unwrap())
        })
    });
}

fn bench_impact_estimate(c: &mut Criterion) {
    let table = large_table(1000);
    let resolution = resolve_translation_fields(&table);
    let options = ImpactOptions::default();

    c.bench_function("estimate_impact_1000_rows", |b| {
        b.iter(|| black_box(estimate(black_box(&table), &resolution, &options)))
    });
}

criterion_group!(benches, bench_workbook_read, bench_impact_estimate);
criterion_main!(benches);
