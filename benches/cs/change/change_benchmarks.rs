use coinlab::cs::change::{Denominations, DEFAULT_COMPARE_AMOUNTS};
use coinlab::cs::{greedy_change, min_coins_change};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_change(c: &mut Criterion) {
    let coins = Denominations::default();
    let mut group = c.benchmark_group("coin_change");

    for amount in DEFAULT_COMPARE_AMOUNTS {
        group.bench_with_input(BenchmarkId::new("greedy", amount), &amount, |b, &amount| {
            b.iter(|| greedy_change(black_box(amount), &coins))
        });
        group.bench_with_input(BenchmarkId::new("dp", amount), &amount, |b, &amount| {
            b.iter(|| min_coins_change(black_box(amount), &coins))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_change);
criterion_main!(benches);
