//! benches/optimizer.rs
//! Run with:  cargo bench --bench optimizer
//! HTML:      target/criterion/report/index.html

use amm_auction_sim::optimizer::optimum_per_liquidity;
use amm_auction_sim::{FeeGrid, ProfitModel, maximize};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

// ────────────────────────────────────────────────────────────────────────────
//  Parameter grids
// ────────────────────────────────────────────────────────────────────────────
const GRID_SIZES: &[usize] = &[100, 500, 5_000, 50_000];
const SWEEP_LENGTHS: &[usize] = &[10, 50];

pub fn bench_grid_scaling(c: &mut Criterion) {
    let model = ProfitModel::default();
    let mut group = c.benchmark_group("fee_grid_scaling");

    for &n in GRID_SIZES {
        // throughput in “elements” = number of fee evaluations
        group.throughput(Throughput::Elements(n as u64));
        let grid = FeeGrid::new(0.0001, 0.2, n).unwrap();
        group.bench_function(BenchmarkId::from_parameter(format!("points_{}", n)), |b| {
            b.iter(|| {
                let best = maximize(&grid, |f| {
                    model.lp_profit_fixed_fee(black_box(f), black_box(1.0), 0.001)
                })
                .unwrap();
                black_box(best);
            })
        });
    }

    group.finish();
}

pub fn bench_liquidity_sweep(c: &mut Criterion) {
    let model = ProfitModel::default();
    let grid = FeeGrid::default();
    let mut group = c.benchmark_group("liquidity_sweep");

    for &n in SWEEP_LENGTHS {
        let liquidities: Vec<f64> = (1..=n).map(|i| i as f64 * 0.2).collect();
        group.throughput(Throughput::Elements((n * grid.len()) as u64));
        group.bench_function(BenchmarkId::from_parameter(format!("sweep_{}", n)), |b| {
            b.iter(|| {
                let per_l = optimum_per_liquidity(&grid, &liquidities, |f, l| {
                    model.lp_profit_fee_capture(f, l, 0.001)
                })
                .unwrap();
                black_box(per_l);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_grid_scaling, bench_liquidity_sweep);
criterion_main!(benches);
