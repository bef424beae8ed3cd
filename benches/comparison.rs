//! Comparison benchmarks: sepet containers vs std containers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const OPS: usize = 10_000;

/// Benchmark: deque end operations (push_back / pop_front churn)
fn bench_deque_ends(c: &mut Criterion) {
    let mut group = c.benchmark_group("deque_ends");
    group.throughput(Throughput::Elements(OPS as u64));

    group.bench_function(BenchmarkId::new("sepet", OPS), |b| {
        b.iter(|| {
            let mut dq = sepet::CircularDeque::with_capacity(64);
            for i in 0..OPS {
                dq.push_back(black_box(i));
                if i % 3 == 0 {
                    dq.pop_front();
                }
            }
            dq
        });
    });

    group.bench_function(BenchmarkId::new("std", OPS), |b| {
        b.iter(|| {
            let mut dq = std::collections::VecDeque::with_capacity(64);
            for i in 0..OPS {
                dq.push_back(black_box(i));
                if i % 3 == 0 {
                    dq.pop_front();
                }
            }
            dq
        });
    });

    group.finish();
}

/// Benchmark: deque mid insertion and removal
fn bench_deque_mid(c: &mut Criterion) {
    let mut group = c.benchmark_group("deque_mid");
    group.sample_size(20);
    group.throughput(Throughput::Elements(1_000));

    group.bench_function(BenchmarkId::new("sepet", 1_000), |b| {
        b.iter(|| {
            let mut dq: sepet::CircularDeque<usize> = (0..1_000).collect();
            for i in 0..1_000 {
                dq.insert(black_box(i % dq.len()), i);
                dq.remove_at(black_box((i * 7) % dq.len()));
            }
            dq
        });
    });

    group.bench_function(BenchmarkId::new("std", 1_000), |b| {
        b.iter(|| {
            let mut dq: std::collections::VecDeque<usize> = (0..1_000).collect();
            for i in 0..1_000 {
                dq.insert(black_box(i % dq.len()), i);
                dq.remove(black_box((i * 7) % dq.len()));
            }
            dq
        });
    });

    group.finish();
}

/// Benchmark: map insert-then-lookup round
fn bench_map_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_round");
    group.throughput(Throughput::Elements(OPS as u64 * 2));

    group.bench_function(BenchmarkId::new("sepet", OPS), |b| {
        b.iter(|| {
            let mut map = sepet::HashMap::new();
            for i in 0..OPS {
                map.insert(black_box(i), black_box(i));
            }
            let mut sum = 0usize;
            for i in 0..OPS {
                if let Some(v) = map.get(&black_box(i)) {
                    sum += v;
                }
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("std", OPS), |b| {
        b.iter(|| {
            let mut map = std::collections::HashMap::new();
            for i in 0..OPS {
                map.insert(black_box(i), black_box(i));
            }
            let mut sum = 0usize;
            for i in 0..OPS {
                if let Some(v) = map.get(&black_box(i)) {
                    sum += v;
                }
            }
            sum
        });
    });

    group.finish();
}

/// Benchmark: junction evaluation over a tag set
fn bench_junction_matches(c: &mut Criterion) {
    let mut group = c.benchmark_group("junction_matches");
    group.throughput(Throughput::Elements(OPS as u64));

    let rule = sepet::Junction::parse("linux & (aarch64 | x86_64) & !legacy & cache")
        .unwrap();
    let tags: sepet::HashSet<String> = ["linux", "x86_64", "cache", "fast-io"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    group.bench_function("rpn_eval", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for _ in 0..OPS {
                if rule.matches(black_box(&tags)) {
                    hits += 1;
                }
            }
            hits
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_deque_ends,
    bench_deque_mid,
    bench_map_round,
    bench_junction_matches,
);

criterion_main!(benches);
