//! Benchmarks for schema import and INSERT generation
//!
//! Run with: cargo bench

use std::collections::BTreeMap;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use db_importer_sdk::export::SQLExporter;
use db_importer_sdk::import::{SQLImporter, pattern};
use db_importer_sdk::models::{CellValue, Field, Row};

/// Generate a MySQL dump with N tables of `columns` columns each
fn generate_dump(tables: usize, columns: usize) -> String {
    let mut sql = String::from("-- generated dump\nSET NAMES utf8mb4;\n\n");
    for t in 0..tables {
        sql.push_str(&format!("CREATE TABLE `table_{}` (\n", t));
        for c in 0..columns {
            let column_type = match c % 4 {
                0 => "int(11) NOT NULL",
                1 => "varchar(255) DEFAULT NULL",
                2 => "decimal(10,2) DEFAULT NULL",
                _ => "datetime NOT NULL",
            };
            sql.push_str(&format!("  `col_{}` {},\n", c, column_type));
        }
        sql.push_str("  PRIMARY KEY (`col_0`)\n) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;\n\n");
    }
    sql
}

fn bench_schema_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_parsing");

    let dump = generate_dump(20, 12);
    group.throughput(Throughput::Bytes(dump.len() as u64));

    group.bench_function("fallback_chain", |b| {
        let importer = SQLImporter::default();
        b.iter(|| importer.parse(black_box(&dump)))
    });

    group.bench_function("mysql_pattern", |b| {
        b.iter(|| pattern::parse_mysql(black_box(&dump)))
    });

    for column_count in [10, 50, 200].iter() {
        let dump = generate_dump(1, *column_count);
        group.throughput(Throughput::Elements(*column_count as u64));
        group.bench_with_input(
            BenchmarkId::new("columns", column_count),
            &dump,
            |b, dump| {
                let importer = SQLImporter::default();
                b.iter(|| importer.parse(black_box(dump)))
            },
        );
    }

    group.finish();
}

fn bench_insert_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_generation");

    let fields = vec![
        Field::new("id", "INT").with_nullable(false),
        Field::new("name", "VARCHAR(100)"),
        Field::new("joined", "DATE"),
        Field::new("active", "BOOLEAN"),
    ];
    let mapping: BTreeMap<String, String> = fields
        .iter()
        .map(|f| (f.name.to_uppercase(), f.name.clone()))
        .collect();

    for row_count in [100, 1_000, 10_000].iter() {
        let rows: Vec<Row> = (0..*row_count)
            .map(|i| {
                vec![
                    CellValue::from(i as i64),
                    CellValue::from(format!("O'Name {}", i)),
                    CellValue::from("2024-01-15"),
                    CellValue::from(if i % 2 == 0 { "yes" } else { "no" }),
                ]
            })
            .collect();

        group.throughput(Throughput::Elements(*row_count as u64));
        group.bench_with_input(BenchmarkId::new("rows", row_count), &rows, |b, rows| {
            let exporter = SQLExporter::default();
            b.iter(|| exporter.generate_insert("members", &mapping, &fields, black_box(rows)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_schema_parsing, bench_insert_generation);
criterion_main!(benches);
