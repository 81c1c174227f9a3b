use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mediarights_core::clock::FixedClock;
use mediarights_core::leases::LeaseDeriver;
use mediarights_core::rights::RightsPlanner;
use mediarights_core::types::*;

fn make_image() -> Image {
    Image::new("img-1", "2020-01-01T00:00:00Z".parse().unwrap())
        .with_date_taken("2019-06-01T10:00:00Z".parse().unwrap())
}

fn make_definitions(count: usize) -> Vec<LeaseDefinition> {
    let rules = [
        StartDateRule::Today,
        StartDateRule::Upload,
        StartDateRule::Taken,
        StartDateRule::TxDate,
    ];
    (0..count)
        .map(|i| {
            LeaseDefinition::new(AccessKind::ALL[i % 4], rules[i % rules.len()])
                .with_duration((i % 3) as u32)
        })
        .collect()
}

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("lease_derive");
    let image = make_image();
    let clock = FixedClock("2024-06-01T12:00:00Z".parse().unwrap());

    for count in [1, 10, 100] {
        let defs = make_definitions(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| LeaseDeriver::derive(black_box(&defs), black_box(&image), &clock))
        });
    }

    group.finish();
}

fn bench_plan(c: &mut Criterion) {
    let image = make_image();
    let clock = FixedClock("2024-06-01T12:00:00Z".parse().unwrap());
    let mut categories = vec![UsageRightsCategory::new("No Rights", "")];
    categories.push(UsageRightsCategory {
        name: "Handout".to_string(),
        value: "handout".to_string(),
        leases: make_definitions(4),
    });

    c.bench_function("rights_plan_change", |b| {
        b.iter(|| {
            RightsPlanner::plan(
                black_box(&categories),
                black_box(&image),
                black_box(""),
                black_box("handout"),
                &clock,
            )
        })
    });
}

criterion_group!(benches, bench_derive, bench_plan);
criterion_main!(benches);
