//! Lookup and registration benchmarks.
#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sqlike::LikeTrie;

/// Table-name style patterns: some literal, some with wildcards.
fn patterns(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| match i % 4 {
            0 => format!("table_{i}"),
            1 => format!("table_{i}_%"),
            2 => format!("%_archive_{i}"),
            _ => format!("logs_[%]_{i}_%"),
        })
        .collect()
}

fn build(n: usize) -> LikeTrie<usize> {
    let trie = LikeTrie::new(n);
    trie.register_all(patterns(n).into_iter().enumerate().map(|(i, p)| (p, i)));
    trie
}

fn bench_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("register");

    for size in &[10, 100, 1000] {
        let patterns = patterns(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let trie = LikeTrie::new(patterns.len());
                for (i, p) in patterns.iter().enumerate() {
                    trie.register(p, i);
                }
                black_box(trie)
            });
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in &[10, 100, 1000] {
        let trie = build(*size);
        let texts = [
            "table_4".to_string(),
            "table_5_2024_01".to_string(),
            format!("sales_archive_{}", size - 2),
            "missing_entirely".to_string(),
        ];

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                for text in &texts {
                    black_box(trie.lookup(black_box(text)));
                }
            });
        });
    }

    group.finish();
}

fn bench_wildcard_backtracking(c: &mut Criterion) {
    let trie = LikeTrie::new(0);
    trie.register("a%b%c%d", 0);
    let text = format!("a{}d", "bc".repeat(16));

    c.bench_function("wildcard_backtracking", |b| {
        b.iter(|| trie.lookup(black_box(&text)));
    });
}

criterion_group!(
    benches,
    bench_register,
    bench_lookup,
    bench_wildcard_backtracking
);
criterion_main!(benches);
