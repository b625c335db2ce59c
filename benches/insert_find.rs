use chainset::OrderedSet;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::BTreeSet;

// Spreads values over 0..n so that inserts land all over the chain rather than at its head.
fn scrambled(n: u32) -> Vec<u32> {
    (0..n).map(|i| i.wrapping_mul(2_654_435_761) % n).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for n in [100u32, 1_000] {
        let values = scrambled(n);

        // Every insert walks the chain: O(n^2) in total.
        group.bench_with_input(BenchmarkId::new("ordered_set", n), &values, |b, values| {
            b.iter(|| {
                let mut set = OrderedSet::new();
                for &v in values {
                    set.insert(black_box(v));
                }
                set
            });
        });

        group.bench_with_input(BenchmarkId::new("btree_set", n), &values, |b, values| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for &v in values {
                    set.insert(black_box(v));
                }
                set
            });
        });
    }

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for n in [100u32, 1_000] {
        let values = scrambled(n);
        let set: OrderedSet<u32> = values.iter().copied().collect();
        let std_set: BTreeSet<u32> = values.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("ordered_set", n), &values, |b, values| {
            b.iter(|| values.iter().filter(|v| set.contains(black_box(*v))).count());
        });

        group.bench_with_input(BenchmarkId::new("btree_set", n), &values, |b, values| {
            b.iter(|| values.iter().filter(|v| std_set.contains(black_box(*v))).count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_find);
criterion_main!(benches);
