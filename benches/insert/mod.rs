use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use interval_index::{bulk, IntervalTree};

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    bench: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_sequential(&mut g, n_values);
        bench_sorted(&mut g, n_values);
        bench_bulk(&mut g, n_values);
    }
}

/// Measure the time needed to insert `n_values` number of randomly generated
/// intervals into an empty tree, one at a time.
fn bench_sequential<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let bench_name = BenchName {
        bench: "sequential",
        n_values,
    };
    g.throughput(Throughput::Elements(n_values as _)); // Keys inserted per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || (IntervalTree::default(), Lfsr::default()),
            |(mut t, mut rand)| {
                for _i in 0..n_values {
                    t.insert(rand.next_interval()).unwrap();
                }
                t
            },
            criterion::BatchSize::PerIteration,
        );
    });
}

/// Insert `n_values` intervals with strictly ascending, disjoint start bounds,
/// the worst case for an unbalanced tree.
fn bench_sorted<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let bench_name = BenchName {
        bench: "sorted",
        n_values,
    };
    g.throughput(Throughput::Elements(n_values as _));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            IntervalTree::default,
            |mut t| {
                for i in 0..n_values as u64 {
                    t.insert((i * 1000, i * 1000 + 500)).unwrap();
                }
                t
            },
            criterion::BatchSize::PerIteration,
        );
    });
}

/// Build a tree from `n_values` randomly generated intervals using the
/// midpoint-ordered bulk loader.
fn bench_bulk<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let mut rand = Lfsr::default();
    let values = (0..n_values)
        .map(|_| rand.next_interval())
        .collect::<Vec<_>>();

    let bench_name = BenchName {
        bench: "bulk",
        n_values,
    };
    g.throughput(Throughput::Elements(n_values as _));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || values.clone(),
            |values| bulk::build(values).unwrap(),
            criterion::BatchSize::PerIteration,
        );
    });
}
