//! Benchmarks for the DV01 kernel.
//!
//! Run with: cargo bench -p dv01-analytics

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use dv01_analytics::prelude::*;
use dv01_curves::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_test_curve() -> ZeroCurve {
    CurveBuilder::new()
        .add_percent(0.5, 5.0)
        .add_percent(1.0, 5.1)
        .add_percent(2.0, 5.2)
        .add_percent(3.0, 5.3)
        .add_percent(5.0, 5.5)
        .add_percent(7.0, 5.6)
        .add_percent(10.0, 5.7)
        .build()
        .unwrap()
}

fn create_test_instruments(count: usize) -> Vec<FixedRateInstrument> {
    let rates = [0.02, 0.03, 0.04, 0.05, 0.06];
    let maturities = [1.0, 2.0, 3.0, 5.0, 7.0, 10.0];
    (0..count)
        .map(|i| {
            let rate = rates[i % rates.len()];
            let maturity = maturities[i % maturities.len()];
            if i % 2 == 0 {
                FixedRateInstrument::bond(1_000_000.0, rate, maturity, 2)
            } else {
                FixedRateInstrument::swap_fixed_leg(1_000_000.0, rate, maturity, 4)
            }
        })
        .collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_curve_build(c: &mut Criterion) {
    c.bench_function("curve_build_7_pillars", |b| {
        b.iter(|| black_box(create_test_curve()));
    });
}

fn bench_single_dv01(c: &mut Criterion) {
    let curve = create_test_curve();
    let bond = FixedRateInstrument::bond(1_000_000.0, 0.05, 5.0, 1);
    let swap = FixedRateInstrument::swap_fixed_leg(1_000_000.0, 0.05, 5.0, 1);

    let mut group = c.benchmark_group("dv01_single");
    group.bench_function("bond_5y_annual", |b| {
        b.iter(|| dv01(black_box(&bond), black_box(&curve)));
    });
    group.bench_function("swap_5y_annual", |b| {
        b.iter(|| dv01(black_box(&swap), black_box(&curve)));
    });
    group.finish();
}

fn bench_batch_dv01(c: &mut Criterion) {
    let curve = create_test_curve();
    let mut group = c.benchmark_group("dv01_batch");

    for size in [10usize, 100, 1_000] {
        let instruments = create_test_instruments(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &instruments, |b, inst| {
            b.iter(|| dv01_batch(black_box(inst), black_box(&curve)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_curve_build, bench_single_dv01, bench_batch_dv01);
criterion_main!(benches);
