use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mediarights_core::query::{rewrite, tokenize, AliasTable};
use mediarights_core::types::FieldAlias;

// ─── Helpers ────────────────────────────────────────────────────────────────

fn make_aliases(count: usize) -> AliasTable {
    let fields: Vec<FieldAlias> = (0..count)
        .map(|i| FieldAlias::new(format!("alias{}", i), format!("metadata.field{}", i)))
        .collect();
    AliasTable::new(&fields)
}

fn make_query(terms: usize) -> String {
    (0..terms)
        .map(|i| format!("alias{}:value{}", i, i))
        .collect::<Vec<_>>()
        .join(" ")
}

// ─── Benchmarks ─────────────────────────────────────────────────────────────

fn bench_tokenize(c: &mut Criterion) {
    let query = make_query(5);
    c.bench_function("query_tokenize", |b| b.iter(|| tokenize(black_box(&query))));
}

fn bench_rewrite_with_varying_aliases(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_rewrite_aliases");
    let query = make_query(5);

    for count in [10, 100, 1000] {
        let aliases = make_aliases(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| rewrite(black_box(&query), black_box(&aliases)))
        });
    }

    group.finish();
}

fn bench_rewrite_plain_text(c: &mut Criterion) {
    let aliases = make_aliases(100);
    c.bench_function("query_rewrite_plain_text", |b| {
        b.iter(|| rewrite(black_box("cats and dogs playing in the park"), black_box(&aliases)))
    });
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_rewrite_with_varying_aliases,
    bench_rewrite_plain_text,
);
criterion_main!(benches);
