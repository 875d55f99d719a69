//! Criterion benchmarks for the balance search.
//!
//! Instances come from the seeded generator (100 nodes, L = 500000), so
//! timings are comparable across runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_balance::construct::{baseline, priority_order, seed_candidate};
use u_balance::eval::evaluate;
use u_balance::instance::Instance;
use u_balance::random::create_rng;
use u_balance::search::{BalanceRunner, RefineBudget, SearchConfig};
use u_balance::select::select_candidates;
use u_balance::simulate::simulate;

// ===========================================================================
// Primitives
// ===========================================================================

fn bench_evaluate(c: &mut Criterion) {
    let instance = Instance::generate(42);
    let order = priority_order(instance.demands(), 2500);
    let candidate = seed_candidate(&order, 3);

    c.bench_function("evaluate_n100", |b| {
        b.iter(|| black_box(evaluate(black_box(&candidate), instance.demands())))
    });
}

fn bench_select(c: &mut Criterion) {
    let instance = Instance::generate(42);
    let deviation = evaluate(&baseline(instance.n()), instance.demands()).deviation;
    let mut rng = create_rng(42);

    c.bench_function("select_candidates_n100", |b| {
        b.iter(|| black_box(select_candidates(black_box(&deviation), &mut rng)))
    });
}

fn bench_simulate(c: &mut Criterion) {
    let instance = Instance::generate(42);
    let assignment = baseline(instance.n());

    let mut group = c.benchmark_group("simulate");
    group.sample_size(10);
    group.bench_function("baseline_l500k", |b| {
        b.iter(|| black_box(simulate(black_box(&instance), black_box(&assignment))))
    });
    group.finish();
}

// ===========================================================================
// Full search
// ===========================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for &restarts in &[1usize, 10, 80] {
        let instance = Instance::generate(7);
        let config = SearchConfig::default()
            .with_restarts(restarts)
            .with_refine(RefineBudget::Iterations(2000))
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(restarts),
            &(instance, config),
            |b, (inst, cfg)| {
                b.iter(|| {
                    let result = BalanceRunner::run(black_box(inst), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_select,
    bench_simulate,
    bench_search
);
criterion_main!(benches);
