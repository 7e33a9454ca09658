//! Benchmarks for the beehive evolution engine.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use beehive::{
    compute::evolution::{TourRng, order_crossover},
    schema::{Point, Problem, RunConfig},
    EvolutionEngine,
};

fn ring_problem(flowers: usize) -> Problem {
    let flowers = (0..flowers)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / flowers as f64;
            Point::new(500.0 + 400.0 * angle.cos(), 500.0 + 400.0 * angle.sin())
        })
        .collect();
    Problem::new(Point::new(500.0, 500.0), flowers)
}

fn bench_generation_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation_step");

    for population_size in [51, 101, 401] {
        let config = RunConfig {
            population_size,
            generations: 1,
            random_seed: Some(42),
            ..Default::default()
        };
        let mut engine = EvolutionEngine::new(ring_problem(30), config).unwrap();
        engine.initialize();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_bees", population_size)),
            &population_size,
            |b, _| {
                b.iter(|| {
                    black_box(engine.step().unwrap());
                });
            },
        );
    }

    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");

    for flowers in [6, 20, 50] {
        let config = RunConfig {
            generations: 50,
            random_seed: Some(42),
            ..Default::default()
        };
        let problem = ring_problem(flowers);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_flowers", flowers)),
            &flowers,
            |b, _| {
                b.iter(|| {
                    let mut engine =
                        EvolutionEngine::new(problem.clone(), config.clone()).unwrap();
                    black_box(engine.run().unwrap());
                });
            },
        );
    }

    group.finish();
}

fn bench_order_crossover(c: &mut Criterion) {
    let mut rng = TourRng::new(7);
    let p1 = rng.random_tour(200);
    let p2 = rng.random_tour(200);

    c.bench_function("order_crossover_200", |b| {
        b.iter(|| order_crossover(black_box(&p1), black_box(&p2), 50, 150));
    });
}

criterion_group!(
    benches,
    bench_generation_step,
    bench_full_run,
    bench_order_crossover
);
criterion_main!(benches);
