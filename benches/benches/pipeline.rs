//! Pagination, assembly and writing benchmarks.
//!
//! Run with: `cargo bench --package hltv-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hltv_bench::{MemorySource, sample_matches, sample_results};
use hltv_fetch::{CancellationToken, FailurePolicy, Pagination, paginate};
use hltv_format::{CsvFormatter, Formatter, ParquetFormatter};
use hltv_table::{economy_table, results_table, rounds_table};
use std::hint::black_box;

fn pagination_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let source = &MemorySource { total: 100_000 };
    let cancel = &CancellationToken::new();

    let mut group = c.benchmark_group("paginate");
    for batch_size in [10usize, 100, 1_000] {
        group.throughput(Throughput::Elements(50_000));
        group.bench_with_input(BenchmarkId::from_parameter(batch_size), &batch_size, |b, &size| {
            b.to_async(&runtime).iter(|| async move {
                let pagination = Pagination::default()
                    .with_skip(1_000)
                    .with_limit(Some(50_000))
                    .with_batch_size(size);
                let records = paginate(source, pagination, FailurePolicy::Strict, cancel)
                    .await
                    .expect("in-memory pages");
                black_box(records)
            });
        });
    }
    group.finish();
}

fn assembly_benchmark(c: &mut Criterion) {
    let results = sample_results(10_000);
    let matches = sample_matches(1_000, 24);

    let mut group = c.benchmark_group("assemble");
    group.throughput(Throughput::Elements(results.len() as u64));
    group.bench_function("results", |b| b.iter(|| black_box(results_table(&results))));
    group.throughput(Throughput::Elements(3 * matches.len() as u64));
    group.bench_function("economy", |b| b.iter(|| black_box(economy_table(&matches))));
    group.bench_function("rounds", |b| b.iter(|| black_box(rounds_table(&matches))));
    group.finish();
}

fn write_benchmark(c: &mut Criterion) {
    let table = economy_table(&sample_matches(1_000, 24));

    let mut group = c.benchmark_group("write_economy");
    group.throughput(Throughput::Elements(table.len() as u64));
    group.bench_function("csv", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(1 << 20);
            CsvFormatter::new().write_table(&table, &mut out).expect("csv");
            black_box(out)
        });
    });
    group.bench_function("parquet", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(1 << 20);
            ParquetFormatter::new()
                .write_table(&table, &mut out)
                .expect("parquet");
            black_box(out)
        });
    });
    group.finish();
}

criterion_group!(benches, pagination_benchmark, assembly_benchmark, write_benchmark);
criterion_main!(benches);
