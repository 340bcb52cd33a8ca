use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use dsw_tree::OSTreeSet;
use std::collections::BTreeSet;

const N: usize = 10_000;

/// Sorted insertions build a list-shaped tree, so those runs are kept smaller.
const N_ORDERED: usize = 2_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn balanced_tree(keys: &[i64]) -> OSTreeSet<i64> {
    let mut tree: OSTreeSet<i64> = keys.iter().copied().collect();
    tree.balance();
    tree
}

// ─── Insert Benchmarks ──────────────────────────────────────────────────────

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);

    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("OSTreeSet", N), |b| {
        b.iter(|| keys.iter().copied().collect::<OSTreeSet<i64>>());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| keys.iter().copied().collect::<BTreeSet<i64>>());
    });

    group.finish();
}

fn bench_insert_ordered_then_balance(c: &mut Criterion) {
    let keys = ordered_keys(N_ORDERED);

    let mut group = c.benchmark_group("insert_ordered_then_balance");

    group.bench_function(BenchmarkId::new("OSTreeSet", N_ORDERED), |b| {
        b.iter(|| balanced_tree(&keys));
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N_ORDERED), |b| {
        b.iter(|| keys.iter().copied().collect::<BTreeSet<i64>>());
    });

    group.finish();
}

// ─── Balance Benchmarks ─────────────────────────────────────────────────────

fn bench_balance(c: &mut Criterion) {
    let mut group = c.benchmark_group("balance");

    let random = random_keys(N);
    group.bench_function(BenchmarkId::new("random", N), |b| {
        b.iter_batched(
            || random.iter().copied().collect::<OSTreeSet<i64>>(),
            |mut tree| {
                tree.balance();
                tree
            },
            BatchSize::SmallInput,
        );
    });

    let ordered = ordered_keys(N_ORDERED);
    group.bench_function(BenchmarkId::new("degenerate", N_ORDERED), |b| {
        b.iter_batched(
            || ordered.iter().copied().collect::<OSTreeSet<i64>>(),
            |mut tree| {
                tree.balance();
                tree
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ─── Order Statistic Benchmarks ─────────────────────────────────────────────

fn bench_rank_of(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree = balanced_tree(&keys);
    let bt_set: BTreeSet<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("rank_of");

    group.bench_function(BenchmarkId::new("OSTreeSet", N), |b| {
        b.iter(|| keys.iter().filter_map(|k| tree.rank_of(k)).sum::<usize>());
    });

    // BTreeSet has no rank query, so it counts the smaller keys instead.
    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| keys.iter().map(|k| bt_set.range(..k).count()).sum::<usize>());
    });

    group.finish();
}

fn bench_nth_element(c: &mut Criterion) {
    let tree = balanced_tree(&random_keys(N));
    let bt_set: BTreeSet<i64> = tree.iter().copied().collect();
    let len = tree.len();

    let mut group = c.benchmark_group("nth_element");

    group.bench_function(BenchmarkId::new("OSTreeSet", len), |b| {
        b.iter(|| (0..len).filter_map(|n| tree.nth_element(n).ok()).count());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", len), |b| {
        b.iter(|| (0..len).filter_map(|n| bt_set.iter().nth(n)).count());
    });

    group.finish();
}

// ─── Contains / Remove Benchmarks ───────────────────────────────────────────

fn bench_contains_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree: OSTreeSet<i64> = keys.iter().copied().collect();
    let bt_set: BTreeSet<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("contains_random");

    group.bench_function(BenchmarkId::new("OSTreeSet", N), |b| {
        b.iter(|| keys.iter().filter(|k| tree.contains(k)).count());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| keys.iter().filter(|k| bt_set.contains(k)).count());
    });

    group.finish();
}

fn bench_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);

    let mut group = c.benchmark_group("remove_random");

    group.bench_function(BenchmarkId::new("OSTreeSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<OSTreeSet<i64>>(),
            |mut tree| {
                for &k in &keys {
                    tree.remove(&k);
                }
                tree
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<BTreeSet<i64>>(),
            |mut set| {
                for &k in &keys {
                    set.remove(&k);
                }
                set
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_pop_min(c: &mut Criterion) {
    let keys = random_keys(N);

    let mut group = c.benchmark_group("pop_min");

    group.bench_function(BenchmarkId::new("OSTreeSet", N), |b| {
        b.iter_batched(
            || balanced_tree(&keys),
            |mut tree| {
                while tree.pop_min().is_some() {}
                tree
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<BTreeSet<i64>>(),
            |mut set| {
                while set.pop_first().is_some() {}
                set
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(insert_benches, bench_insert_random, bench_insert_ordered_then_balance,);

criterion_group!(balance_benches, bench_balance,);

criterion_group!(order_statistic_benches, bench_rank_of, bench_nth_element,);

criterion_group!(lookup_benches, bench_contains_random, bench_remove_random, bench_pop_min,);

criterion_main!(insert_benches, balance_benches, order_statistic_benches, lookup_benches,);
