//! Benchmarks for this crate's [`SkipList`].

use criterion::{AxisScale, BenchmarkId, Criterion, PlotConfiguration, black_box};
use datastruct::SkipList;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Benchmarking sizes.
const SIZES: [usize; 5] = [1, 10, 100, 1000, 10_000];

/// Builds a skiplist of `size` random entries, returning it along with the
/// entries in insertion order.
fn filled(rng: &mut StdRng, size: usize) -> (SkipList<u64>, Vec<(u64, i64)>) {
    let entries: Vec<(u64, i64)> = (0..size as u64).map(|v| (v, rng.random())).collect();
    (entries.iter().copied().collect(), entries)
}

/// Benchmarking insertion.
#[inline]
pub fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipList Insert");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let (mut sl, _) = filled(&mut rng, size);
            let mut value = size as u64;

            b.iter(|| {
                value += 1;
                let _ = black_box(sl.insert(value, rng.random()));
            });
        });
    }
}

/// Benchmarking lookups of present entries.
#[inline]
pub fn find(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipList Find");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let (sl, entries) = filled(&mut rng, size);
            let targets: Vec<_> = std::iter::repeat_with(|| entries[rng.random_range(0..size)])
                .take(10)
                .collect();

            b.iter(|| {
                for (value, score) in &targets {
                    black_box(sl.find(value, *score));
                }
            });
        });
    }
}

/// Benchmarking a deletion followed by re-insertion of the same entry.
#[inline]
pub fn delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipList Delete");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let (mut sl, entries) = filled(&mut rng, size);

            b.iter(|| {
                let (value, score) = entries[rng.random_range(0..size)];
                let _ = black_box(sl.delete(&value, score));
                let _ = sl.insert(value, score);
            });
        });
    }
}

/// Benchmarking iteration.
#[inline]
pub fn iter(c: &mut Criterion) {
    c.bench_function("SkipList Iter", |b| {
        let mut rng = StdRng::seed_from_u64(0x1234_abcd);
        let (sl, _) = filled(&mut rng, 100_000);

        b.iter(|| {
            for el in &sl {
                black_box(el);
            }
        });
    });
}

/// Run all benchmarks.
#[inline]
pub fn benchmark(c: &mut Criterion) {
    insert(c);
    find(c);
    delete(c);
    iter(c);
}
