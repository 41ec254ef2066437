//! Benchmark: rule construction and reference-triangle integration
//!
//! Run with:
//!   cargo bench -p math-audio-quadrature --bench rule_lookup

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use math_audio_quadrature::{QuadratureConfig, QuadratureRule, RuleName, RuleSelection};
use std::hint::black_box;

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("by_name", |b| {
        b.iter(|| {
            for name in RuleName::ALL {
                black_box(QuadratureRule::from_name(black_box(name)));
            }
        })
    });

    group.bench_function("by_order", |b| {
        b.iter(|| {
            for order in [1, 3, 107, 7, 15, 19, 27, 73, 21, 16] {
                let config = QuadratureConfig::new(RuleSelection::Order(black_box(order)));
                black_box(config.build().ok());
            }
        })
    });

    group.finish();
}

fn bench_integration(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrate");

    for name in [RuleName::Gauss3, RuleName::Degree11, RuleName::Degree19] {
        let rule = QuadratureRule::from_name(name);
        group.bench_with_input(BenchmarkId::from_parameter(name), &rule, |b, rule| {
            b.iter(|| rule.integrate(|x, y| (x * y).exp()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_construction, bench_integration);
criterion_main!(benches);
