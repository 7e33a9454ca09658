//! Invariants of the evolutionary operators and of whole runs.

use std::collections::HashMap;

use proptest::prelude::*;

use beehive::compute::evolution::{
    Candidate, EvolutionEngine, IdAllocator, TourRng, create_population, crossover,
    is_permutation, mutate, order_crossover,
};
use beehive::schema::{Point, Problem, RunConfig};

fn problem_strategy() -> impl Strategy<Value = Problem> {
    let point = (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(Point::from);
    (point.clone(), prop::collection::vec(point, 2..12))
        .prop_map(|(hive, flowers)| Problem::new(hive, flowers))
}

fn tour_strategy() -> impl Strategy<Value = Vec<usize>> {
    (2..30usize).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())
}

proptest! {
    #[test]
    fn order_crossover_yields_permutation(
        (p1, p2, start, end) in tour_strategy()
            .prop_flat_map(|p1| {
                let n = p1.len();
                (Just(p1), Just((0..n).collect::<Vec<_>>()).prop_shuffle(), 0..n, 0..n)
            })
            .prop_filter("distinct cuts", |(_, _, a, b)| a != b)
            .prop_map(|(p1, p2, a, b)| (p1, p2, a.min(b), a.max(b)))
    ) {
        let child = order_crossover(&p1, &p2, start, end);
        prop_assert!(is_permutation(&child, p1.len()));
        prop_assert_eq!(&child[start..end], &p1[start..end]);
    }

    #[test]
    fn operators_preserve_permutations(
        n in 2..40usize,
        rate in 0.0..=1.0f64,
        seed in any::<u64>(),
    ) {
        let mut rng = TourRng::new(seed);
        let mut ids = IdAllocator::new();
        let population = create_population(4, n, &mut rng, &mut ids);
        for c in &population {
            prop_assert!(is_permutation(&c.tour, n));
        }

        let child = crossover(&population[0], &population[1], &mut rng, &mut ids);
        prop_assert!(is_permutation(&child.tour, n));

        let mutant = mutate(&child, rate, &mut rng, &mut ids);
        prop_assert!(is_permutation(&mutant.tour, n));
        prop_assert_eq!(mutant.parents.clone(), vec![child.id]);
        prop_assert_eq!(mutant.generation, child.generation + 1);
    }

    #[test]
    fn runs_hold_their_invariants(
        problem in problem_strategy(),
        population_size in 4..24usize,
        generations in 1..12usize,
        rate in 0.0..=1.0f64,
        seed in any::<u64>(),
    ) {
        let config = RunConfig {
            population_size,
            generations,
            mutation_rate: rate,
            elitism_proportion: 0.5,
            random_seed: Some(seed),
        };
        let n = problem.flower_count();
        let mut engine = EvolutionEngine::new(problem, config).unwrap();
        engine.initialize();

        for _ in 0..generations {
            prop_assert_eq!(engine.population().len(), population_size);
            engine.step().unwrap();
            prop_assert_eq!(engine.population().len(), population_size);
            for c in engine.population() {
                prop_assert!(is_permutation(&c.tour, n));
            }
        }

        let history = engine.history();
        prop_assert_eq!(history.len(), generations);
        for pair in history.windows(2) {
            prop_assert!(pair[1].best_fitness >= pair[0].best_fitness);
        }
    }
}

#[test]
fn lineage_generations_follow_parents() {
    let config = RunConfig {
        population_size: 20,
        generations: 15,
        random_seed: Some(11),
        ..Default::default()
    };
    let mut engine = EvolutionEngine::new(Problem::default(), config).unwrap();
    let result = engine.run().unwrap();

    let lineage = engine.lineage();
    assert_eq!(lineage.len() as u64, result.candidates_created);

    for id in 0..result.candidates_created {
        let entry = lineage.get(id).unwrap();
        if entry.parents.is_empty() {
            assert_eq!(entry.generation, 0);
        } else {
            let deepest = entry
                .parents
                .iter()
                .map(|p| lineage.get(*p).unwrap().generation)
                .max()
                .unwrap();
            assert_eq!(entry.generation, deepest + 1);
            assert!(entry.parents.len() <= 2);
        }
    }
}

#[test]
fn identical_seeds_give_identical_runs() {
    let config = RunConfig {
        population_size: 30,
        generations: 25,
        mutation_rate: 0.1,
        random_seed: Some(2024),
        ..Default::default()
    };

    let a = EvolutionEngine::new(Problem::default(), config.clone())
        .unwrap()
        .run()
        .unwrap();
    let b = EvolutionEngine::new(Problem::default(), config)
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn ids_are_unique_within_a_run() {
    let config = RunConfig {
        population_size: 16,
        generations: 10,
        random_seed: Some(5),
        ..Default::default()
    };
    let mut engine = EvolutionEngine::new(Problem::default(), config).unwrap();
    engine.run().unwrap();

    let mut seen: HashMap<u64, &Candidate> = HashMap::new();
    for c in engine.population() {
        assert!(seen.insert(c.id, c).is_none());
    }
}

#[test]
fn evolution_improves_on_random_tours() {
    // A ring of flowers around the hive: the optimum walks the ring in order.
    let flowers: Vec<Point> = (0..10)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / 10.0;
            Point::new(100.0 * angle.cos(), 100.0 * angle.sin())
        })
        .collect();
    let problem = Problem::new(Point::new(0.0, 0.0), flowers);
    let config = RunConfig {
        population_size: 60,
        generations: 80,
        mutation_rate: 0.1,
        random_seed: Some(3),
        ..Default::default()
    };

    let result = EvolutionEngine::new(problem, config).unwrap().run().unwrap();
    let first = result.history.first().unwrap().best_distance;
    assert!(result.best.distance <= first);
}
