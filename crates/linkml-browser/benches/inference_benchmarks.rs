//! Inference and rendering benchmarks.
//!
//! Measures schema inference and script rendering across collection sizes.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use linkml_browser::output::render_script;
use linkml_browser::{Record, SchemaInference};
use serde_json::json;

/// Generate synthetic records with a mix of facet-friendly and free-text fields.
fn generate_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            serde_json::from_value(json!({
                "id": format!("REC_{:06}", i),
                "title": format!("Record number {}", i),
                "category": format!("Category_{}", i % 10),
                "tags": [format!("tag{}", i % 7), format!("tag{}", i % 3)],
                "year": 1900 + (i % 120),
                "score": (i % 50) as f64 / 4.0,
                "active": i % 2 == 0,
            }))
            .unwrap()
        })
        .collect()
}

/// Benchmark schema inference for various collection sizes.
fn bench_infer(c: &mut Criterion) {
    let mut group = c.benchmark_group("infer_schema");

    for count in [100, 1_000, 10_000].iter() {
        let records = generate_records(*count);

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("records", count), &records, |b, records| {
            let inference = SchemaInference::new();
            b.iter(|| black_box(inference.infer(records).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark inference with a sample covering the whole collection.
fn bench_infer_full_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("infer_full_sample");

    for count in [1_000, 10_000].iter() {
        let records = generate_records(*count);
        let config = linkml_browser::InferenceConfig {
            sample_size: *count,
            ..Default::default()
        };

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("records", count), &records, |b, records| {
            let inference = SchemaInference::with_config(config.clone());
            b.iter(|| black_box(inference.infer(records).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark rendering the data artifact.
fn bench_render_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_data_script");

    for count in [100, 1_000, 10_000].iter() {
        let records = generate_records(*count);

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("records", count), &records, |b, records| {
            b.iter(|| black_box(render_script("searchData", records).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_infer, bench_infer_full_sample, bench_render_data);
criterion_main!(benches);
