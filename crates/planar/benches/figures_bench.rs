//! Criterion benchmarks for the aggregation engine.
//! Focus sizes: n in {10, 100, 1000} figures.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::rand::{draw_figures, RandomFiguresCfg};
use planar::{total_area, Mathematics, Representations};

fn registry(n: usize, seed: u64) -> Mathematics {
    let mut m = Mathematics::new();
    for f in draw_figures(&RandomFiguresCfg::default(), seed, n) {
        m.add(f);
    }
    m
}

fn bench_figures(c: &mut Criterion) {
    let mut group = c.benchmark_group("figures");
    for &n in &[10usize, 100, 1000] {
        let m = registry(n, 42);
        group.bench_with_input(BenchmarkId::new("total_area", n), &m, |b, m| {
            b.iter(|| total_area(m.figures()))
        });
        group.bench_with_input(BenchmarkId::new("max_area_figure", n), &m, |b, m| {
            b.iter(|| m.max_area_figure().map(|f| f.area()))
        });
        group.bench_with_input(BenchmarkId::new("representations_sync", n), &m, |b, m| {
            b.iter(|| Representations::of_figures(m.figures()))
        });
        group.bench_with_input(
            BenchmarkId::new("find_figure_representations", n),
            &n,
            |b, &n| {
                b.iter_batched(
                    || registry(n, 43),
                    |mut m| {
                        m.find_figure_representations(None);
                        m.wait_all()
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_figures);
criterion_main!(benches);
