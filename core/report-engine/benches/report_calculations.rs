//! FILENAME: core/report-engine/benches/report_calculations.rs
//! Benchmarks for the full dashboard recomputation and its hot steps.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use engine::{generate_seeded, Category, Dataset, GeneratorConfig, Region};
use report_engine::{apply_filter, calculate_dashboard, sales_by_month, FilterSelection};

fn dataset_with(order_count: usize) -> Dataset {
    let config = GeneratorConfig {
        order_count,
        ..GeneratorConfig::default()
    };
    generate_seeded(&config).expect("valid bench config")
}

fn bench_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_dashboard");
    for size in [120usize, 1_000, 10_000] {
        let data = dataset_with(size);
        let selection = FilterSelection::all(&data);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| calculate_dashboard(black_box(&data), black_box(&selection)))
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let data = dataset_with(10_000);
    let selection = FilterSelection::all(&data)
        .with_regions([Region::North, Region::East])
        .with_categories([Category::Sports])
        .with_date_range(
            NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2060, 1, 1).unwrap(),
        );

    c.bench_function("apply_filter_10k", |b| {
        b.iter(|| apply_filter(black_box(&data), black_box(&selection)).len())
    });

    let view = apply_filter(&data, &FilterSelection::all(&data));
    c.bench_function("sales_by_month_10k", |b| b.iter(|| sales_by_month(black_box(&view))));
}

criterion_group!(benches, bench_dashboard, bench_filter);
criterion_main!(benches);
