//! Benchmarks for column decoding and encoding.
//!
//! Measures the per-value cost of each storage width and of decoding complete rows.

extern crate cilcolumn;

use cilcolumn::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const ROWS: usize = 4096;

fn column(width: ColumnWidth) -> ColumnInfo {
    ColumnInfo::new("Value", ColumnSize::UInt32).resolved(0, width)
}

/// Benchmark reading a run of values of each width through a parser.
fn bench_read(c: &mut Criterion) {
    let data = vec![0x5Au8; ROWS * 4];

    for width in [ColumnWidth::Byte, ColumnWidth::Word, ColumnWidth::DWord] {
        let column = column(width);
        c.bench_function(&format!("column_read_{}", width.bytes()), |b| {
            b.iter(|| {
                let mut parser = Parser::new(black_box(&data));
                let mut sum = 0u32;
                for _ in 0..ROWS {
                    sum = sum.wrapping_add(column.read(&mut parser).unwrap());
                }
                black_box(sum)
            });
        });
    }
}

/// Benchmark writing a run of values of each width, including truncated ones.
fn bench_write(c: &mut Criterion) {
    for width in [ColumnWidth::Byte, ColumnWidth::Word, ColumnWidth::DWord] {
        let column = column(width);
        let mut buffer = vec![0u8; ROWS * 4];

        c.bench_function(&format!("column_write_{}", width.bytes()), |b| {
            b.iter(|| {
                let mut writer = Writer::new(&mut buffer);
                for index in 0..ROWS as u32 {
                    column.write(&mut writer, black_box(index * 0x0101)).unwrap();
                }
                black_box(writer.pos())
            });
        });
    }
}

/// Benchmark decoding complete TypeRef-shaped rows with `read_row`.
fn bench_read_row(c: &mut Criterion) {
    let columns = [
        ColumnInfo::new(
            "ResolutionScope",
            ColumnSize::Coded(CodedIndexType::ResolutionScope),
        )
        .resolved(0, ColumnWidth::Word),
        ColumnInfo::new("TypeName", ColumnSize::Strings).resolved(2, ColumnWidth::DWord),
        ColumnInfo::new("TypeNamespace", ColumnSize::Strings).resolved(6, ColumnWidth::DWord),
    ];
    let table = vec![0x11u8; ROWS * 10];

    c.bench_function("column_read_row_typeref", |b| {
        b.iter(|| {
            let mut sum = 0u32;
            for row in black_box(&table).chunks_exact(10) {
                for column in &columns {
                    sum = sum.wrapping_add(column.read_row(row).unwrap());
                }
            }
            black_box(sum)
        });
    });
}

criterion_group!(benches, bench_read, bench_write, bench_read_row);
criterion_main!(benches);
