// Throughput benchmarks for the edge import pipeline
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use roadgraph_core::{import_reader, ParserOptions};
use roadgraph_sink::payload;
use std::fmt::Write;

const MODES: [&str; 3] = ["car", "bike", "foot"];

fn generate_csv(rows: usize) -> String {
    let mut rng = rand::rng();
    let mut csv = String::with_capacity(rows * 40);

    for edge_id in 0..rows {
        let source: i64 = rng.random_range(0..rows as i64);
        let target: i64 = rng.random_range(0..rows as i64);
        let cost: f64 = rng.random_range(0.1..100.0);
        // Roughly half the edges are one-way
        let reverse_cost: f64 = if rng.random_bool(0.5) { cost } else { -1.0 };
        let mode = MODES[edge_id % MODES.len()];
        let distance: f64 = rng.random_range(0.01..5.0);

        writeln!(
            csv,
            "{},{},{},{:.3},{:.3},{},{:.3}",
            edge_id, source, target, cost, reverse_cost, mode, distance
        )
        .unwrap();
    }

    csv
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for size in [1_000, 10_000, 100_000].iter() {
        let csv = generate_csv(*size);
        group.throughput(Throughput::Bytes(csv.len() as u64));

        group.bench_with_input(BenchmarkId::new("parse_project", size), &csv, |b, csv| {
            b.iter(|| {
                let import = import_reader(black_box(csv.as_bytes()), ParserOptions::default()).unwrap();
                black_box(import.records.len())
            });
        });

        let records = import_reader(csv.as_bytes(), ParserOptions::default())
            .unwrap()
            .records;
        group.bench_with_input(BenchmarkId::new("encode", size), &records, |b, records| {
            b.iter(|| black_box(payload::encode(black_box(records)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_pipeline);
criterion_main!(benches);
