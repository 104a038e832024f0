use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ckpt_series::OrderedCheckpointSeries;
use ckpt_types::Round;

fn make_series(n: u64) -> OrderedCheckpointSeries<u128> {
    let mut series = OrderedCheckpointSeries::new();
    for round in 0..n {
        series.upsert(Round::new(round * 3), round as u128).unwrap();
    }
    series
}

fn bench_lower_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_lower_bound");

    for count in [10u64, 1_000, 100_000] {
        let series = make_series(count);
        let query = Round::new(count * 3 / 2 + 1);

        group.bench_with_input(BenchmarkId::new("lower_bound", count), &count, |b, _| {
            b.iter(|| black_box(series.lower_bound(black_box(query))));
        });
    }

    group.finish();
}

fn bench_upsert(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_upsert");

    group.bench_function("append_10000", |b| {
        b.iter(|| black_box(make_series(10_000)));
    });

    group.bench_function("overwrite_tail", |b| {
        let mut series = make_series(1_000);
        let tail = Round::new(999 * 3);
        b.iter(|| series.upsert(black_box(tail), black_box(7)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_lower_bound, bench_upsert);
criterion_main!(benches);
