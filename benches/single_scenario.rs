//! Criterion benchmarks for the surge pipeline.
//!
//! Benchmarks:
//!   - evaluate: one scenario through all four stages
//!   - explain: breakdown plus explanation (banner, charts, cards)
//!   - sweep: full slider grid for one venue kind (Rayon)
//!
//! Run with: cargo bench --bench single_scenario

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use surge_radar::{ExplanationGenerator, InputDomain, ScenarioInput, SurgeScorer, VenueKind};

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("surge_evaluate");
    group.sample_size(1000);

    let scorer = SurgeScorer::default();
    let baseline = ScenarioInput::default();
    let heatwave = ScenarioInput::new(120_000, 96, 90, VenueKind::Unbounded);

    group.bench_function("baseline_stadium", |b| {
        b.iter(|| black_box(scorer.evaluate(black_box(&baseline))));
    });

    group.bench_function("heatwave_fan_zone", |b| {
        b.iter(|| black_box(scorer.evaluate(black_box(&heatwave))));
    });

    group.finish();
}

fn bench_explain(c: &mut Criterion) {
    let scorer = SurgeScorer::default();
    let input = ScenarioInput::new(120_000, 96, 90, VenueKind::Unbounded);

    c.bench_function("surge_explain", |b| {
        b.iter(|| {
            let breakdown = scorer.evaluate_with_breakdown(black_box(&input));
            black_box(ExplanationGenerator::generate(&input, &breakdown, scorer.calibration()))
        });
    });
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("surge_sweep");
    group.sample_size(20);

    let scorer = SurgeScorer::default();
    let domain = InputDomain::default();

    group.bench_function("full_grid_unbounded", |b| {
        b.iter(|| black_box(scorer.sweep(&domain, VenueKind::Unbounded)));
    });

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_explain, bench_sweep);
criterion_main!(benches);
