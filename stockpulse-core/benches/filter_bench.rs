//! Criterion benchmarks for the per-frame recomputation.
//!
//! Benchmarks:
//! 1. Stock filter over a widened fixture set (neutral, search, combined)
//! 2. Summary over the filtered view
//! 3. Indian grouping

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use stockpulse_core::data::fixtures;
use stockpulse_core::domain::{Sector, Signal, StockAlert, Strategy, StrategySet};
use stockpulse_core::format::group_indian;
use stockpulse_core::query::{filter_stocks, Selection, StockFilter};
use stockpulse_core::summary::summarize;

// ── Helpers ──────────────────────────────────────────────────────────

/// Repeat the fixture alerts until `n` records exist, with unique ids.
fn make_stocks(n: usize) -> Vec<StockAlert> {
    let template = fixtures::stock_alerts();
    (0..n)
        .map(|i| {
            let mut alert = template[i % template.len()].clone();
            alert.id = i.to_string();
            alert
        })
        .collect()
}

// ── 1. Filter ────────────────────────────────────────────────────────

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_stocks");
    let combined = StockFilter {
        strategies: [Strategy::Hybrid, Strategy::NeuralNet].into_iter().collect::<StrategySet>(),
        signal: Selection::Only(Signal::Buy),
        sector: Selection::Only(Sector::Banking),
        search: "bank".into(),
    };
    let search = StockFilter {
        search: "tata".into(),
        ..StockFilter::default()
    };

    for n in [12usize, 1_000, 10_000] {
        let stocks = make_stocks(n);
        group.bench_with_input(BenchmarkId::new("neutral", n), &stocks, |b, s| {
            b.iter(|| filter_stocks(black_box(s), &StockFilter::default()).len())
        });
        group.bench_with_input(BenchmarkId::new("search", n), &stocks, |b, s| {
            b.iter(|| filter_stocks(black_box(s), &search).len())
        });
        group.bench_with_input(BenchmarkId::new("combined", n), &stocks, |b, s| {
            b.iter(|| filter_stocks(black_box(s), &combined).len())
        });
    }
    group.finish();
}

// ── 2. Summary ───────────────────────────────────────────────────────

fn bench_summary(c: &mut Criterion) {
    let stocks = make_stocks(10_000);
    c.bench_function("filter_then_summarize_10k", |b| {
        b.iter(|| {
            let view = filter_stocks(black_box(&stocks), &StockFilter::default());
            summarize(view)
        })
    });
}

// ── 3. Formatting ────────────────────────────────────────────────────

fn bench_grouping(c: &mut Criterion) {
    c.bench_function("group_indian", |b| {
        b.iter(|| group_indian(black_box(1_234_567_890)))
    });
}

criterion_group!(benches, bench_filter, bench_summary, bench_grouping);
criterion_main!(benches);
