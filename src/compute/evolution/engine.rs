//! The generational loop: evaluate, rank, record, select, reproduce, replace.

use log::{debug, info};

use crate::schema::{AncestryGraph, GenerationStat, Problem, RunConfig, RunResult};

use super::EvolutionError;
use super::candidate::{Candidate, IdAllocator};
use super::fitness::FitnessEvaluator;
use super::lineage::Lineage;
use super::operators::{create_population, crossover, mutate, rank, select};
use super::tour::TourRng;

/// Evolution engine that runs one configuration for a fixed number of
/// generations.
///
/// The engine owns its random source and ID allocator, so two engines built
/// with the same seed produce identical runs.
pub struct EvolutionEngine {
    config: RunConfig,
    seed: u64,
    rng: TourRng,
    evaluator: FitnessEvaluator,
    ids: IdAllocator,
    lineage: Lineage,
    population: Vec<Candidate>,
    history: Vec<GenerationStat>,
    best: Option<Candidate>,
    generation: usize,
}

impl EvolutionEngine {
    /// Create a new evolution engine. Fails on an invalid configuration.
    pub fn new(problem: Problem, config: RunConfig) -> Result<Self, EvolutionError> {
        problem.validate()?;
        config.validate()?;

        let seed = config.random_seed.unwrap_or_else(rand::random);

        Ok(Self {
            config,
            seed,
            rng: TourRng::new(seed),
            evaluator: FitnessEvaluator::new(problem),
            ids: IdAllocator::new(),
            lineage: Lineage::new(),
            population: Vec::new(),
            history: Vec::new(),
            best: None,
            generation: 0,
        })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Seed of the random source; replaying it reproduces the run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn population(&self) -> &[Candidate] {
        &self.population
    }

    pub fn history(&self) -> &[GenerationStat] {
        &self.history
    }

    pub fn lineage(&self) -> &Lineage {
        &self.lineage
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best candidate of the most recent ranking.
    pub fn best(&self) -> Option<&Candidate> {
        self.best.as_ref()
    }

    /// Ancestry of a registered candidate.
    pub fn ancestry_of(&self, id: u64) -> AncestryGraph {
        self.lineage.ancestry_of(id)
    }

    /// Initialize the population, discarding any previous run state.
    pub fn initialize(&mut self) {
        self.rng = TourRng::new(self.seed);
        self.ids = IdAllocator::new();
        self.lineage = Lineage::new();
        self.history.clear();
        self.best = None;
        self.generation = 0;

        self.population = create_population(
            self.config.population_size,
            self.evaluator.problem().flower_count(),
            &mut self.rng,
            &mut self.ids,
        );
        for candidate in &self.population {
            self.lineage.record(candidate);
        }
    }

    /// Evaluate every candidate that has no fitness yet.
    fn evaluate_population(&mut self) -> Result<(), EvolutionError> {
        for candidate in &mut self.population {
            if !candidate.is_evaluated() {
                self.evaluator.evaluate(candidate)?;
                self.lineage.record(candidate);
            }
        }
        Ok(())
    }

    /// Statistics of the ranked population.
    fn generation_stat(&self) -> Result<GenerationStat, EvolutionError> {
        let best = self.population.first().ok_or(EvolutionError::EmptyPopulation)?;
        let (Some(best_distance), Some(best_fitness)) = (best.distance, best.fitness) else {
            return Err(EvolutionError::Unevaluated { id: best.id });
        };
        let average_fitness = self
            .population
            .iter()
            .map(Candidate::rank_fitness)
            .sum::<f64>()
            / self.population.len() as f64;

        Ok(GenerationStat {
            generation: self.generation,
            best_distance,
            best_fitness,
            average_fitness,
        })
    }

    /// Fill the population back up with mutated crossover children of randomly
    /// paired elites. Both the crossover child and its mutant are registered.
    fn reproduce(&mut self, elites: &[Candidate]) -> Result<Vec<Candidate>, EvolutionError> {
        let target = self.config.population_size.saturating_sub(elites.len());
        let mut offspring = Vec::with_capacity(target);

        while offspring.len() < target {
            let (i, j) = self.rng.distinct_pair(elites.len());
            let child = crossover(&elites[i], &elites[j], &mut self.rng, &mut self.ids);
            self.lineage.record(&child);

            let mut mutant = mutate(
                &child,
                self.config.mutation_rate,
                &mut self.rng,
                &mut self.ids,
            );
            self.evaluator.evaluate(&mut mutant)?;
            self.lineage.record(&mutant);
            offspring.push(mutant);
        }

        Ok(offspring)
    }

    /// Run a single generation step and return its statistics.
    pub fn step(&mut self) -> Result<GenerationStat, EvolutionError> {
        if self.population.is_empty() {
            self.initialize();
        }

        self.evaluate_population()?;
        rank(&mut self.population);

        let stat = self.generation_stat()?;
        self.history.push(stat);
        self.best = self.population.first().cloned();
        info!(
            "generation {} | best distance {:.2}",
            stat.generation, stat.best_distance
        );

        let elites = select(&self.population, self.config.elitism_proportion).to_vec();
        let offspring = self.reproduce(&elites)?;
        debug!(
            "generation {}: {} elites kept, {} offspring bred",
            self.generation,
            elites.len(),
            offspring.len()
        );

        let mut next_gen = elites;
        next_gen.extend(offspring);
        self.population = next_gen;
        self.generation += 1;

        Ok(stat)
    }

    /// Run evolution with progress callback.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> Result<RunResult, EvolutionError>
    where
        F: FnMut(&GenerationStat),
    {
        self.initialize();

        while self.generation < self.config.generations {
            let stat = self.step()?;
            callback(&stat);
        }

        let best = self.best.as_ref().ok_or(EvolutionError::EmptyPopulation)?;
        info!(
            "run finished after {} generations: best distance {:.2} (candidate #{})",
            self.generation,
            best.distance.unwrap_or(f64::NAN),
            best.id
        );

        Ok(RunResult {
            mutation_rate: self.config.mutation_rate,
            seed: self.seed,
            history: self.history.clone(),
            best: best.to_snapshot(),
            ancestry: Some(self.lineage.ancestry_of(best.id)),
            candidates_created: self.ids.allocated(),
        })
    }

    /// Run evolution (blocking).
    pub fn run(&mut self) -> Result<RunResult, EvolutionError> {
        self.run_with_callback(|_| {})
    }
}
