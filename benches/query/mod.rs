use std::hint::black_box;

use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use interval_index::IntervalTree;

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    bench: &'static str,
    n_values: usize,
    n_lookups: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(
            format!("{}_values_{}_n_lookups", v.n_values, v.bench),
            v.n_lookups,
        )
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("query");

    // Tree size
    for n_values in [1_000, 10_000] {
        // Generate the tree.
        let mut rand = Lfsr::default();
        let mut t = IntervalTree::default();

        for _i in 0..n_values {
            t.insert(rand.next_interval()).unwrap();
        }

        // Number of lookups
        for n_lookups in [100, 1_000] {
            bench_point(&mut g, &t, n_values, n_lookups);
            bench_interval(&mut g, &t, n_values, n_lookups);
            bench_full_scan(&mut g, &t, n_values, n_lookups);
        }
    }
}

macro_rules! query_bench {
    (
        $name:ident,
        |$t:ident, $rand:ident| $query:expr
    ) => {
        paste::paste! {
            /// Perform `n_lookups` randomly generated queries against a tree
            /// holding `n_values`, draining each result iterator.
            fn [<bench_ $name>]<M>(
                g: &mut BenchmarkGroup<'_, M>,
                $t: &IntervalTree<u16>,
                n_values: usize,
                n_lookups: usize,
            )
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    bench: stringify!($name),
                    n_values,
                    n_lookups,
                };

                g.throughput(Throughput::Elements(n_lookups as _)); // Lookups per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter_batched(
                        Lfsr::default,
                        |mut $rand| {
                            for _ in 0..n_lookups {
                                for v in $query {
                                    black_box(v);
                                }
                            }
                        },
                        BatchSize::SmallInput,
                    )
                });
            }
        }
    };
}

query_bench!(point, |t, rand| t.query_point(rand.next()));
query_bench!(interval, |t, rand| t.query_interval(rand.next_interval()));
// Baseline: a brute-force filter over every stored interval.
query_bench!(full_scan, |t, rand| {
    let (start, end) = rand.next_interval();
    t.iter().filter(move |v| v.start() <= end && start <= v.end())
});
