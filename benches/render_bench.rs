//! Compact and verbose rendering benchmarks.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `render` | Flattening a tree to one compact string |
//! | `render_verbose` | Flattening to verbose lines with aligned caller locations |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench render_bench
//! ```

use chrono::{TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scopelog::{CallerSite, Log, Renderer};
use std::hint::black_box;

fn tree(steps: usize) -> Log {
    let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
    let site = |line| CallerSite::new("bench", "benches/render_bench.rs", line);
    (0..steps).fold(Log::context("", ts, site(0)), |root, i| {
        let step = Log::context(&format!("Step {i}"), ts, site(1))
            + Log::info("clicked button", ts, site(2))
            + Log::warning("took longer than expected", ts, site(3));
        root + step
    })
}

fn render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for steps in [10usize, 100, 1_000] {
        let tree = tree(steps);
        group.throughput(Throughput::Elements(tree.node_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &tree, |b, tree| {
            b.iter(|| black_box(tree.render()))
        });
    }
    group.finish();
}

fn render_verbose(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_verbose");
    let renderer = Renderer::default();
    for steps in [10usize, 100, 1_000] {
        let tree = tree(steps);
        group.throughput(Throughput::Elements(tree.node_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &tree, |b, tree| {
            b.iter(|| black_box(renderer.render_verbose(tree)))
        });
    }
    group.finish();
}

criterion_group!(benches, render, render_verbose);
criterion_main!(benches);
