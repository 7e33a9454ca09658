//! Configuration types for the foraging problem and evolutionary runs.

use serde::{Deserialize, Serialize};

/// A position on the foraging field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// The fixed problem instance: a hive (depot) and the flowers (targets) every
/// tour must visit exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Start and end point of every tour.
    #[serde(default = "default_hive")]
    pub hive: Point,
    /// Points visited once per tour, addressed by index.
    #[serde(default = "default_flowers")]
    pub flowers: Vec<Point>,
}

impl Default for Problem {
    fn default() -> Self {
        Self {
            hive: default_hive(),
            flowers: default_flowers(),
        }
    }
}

fn default_hive() -> Point {
    Point::new(500.0, 500.0)
}

fn default_flowers() -> Vec<Point> {
    vec![
        Point::new(100.0, 200.0),
        Point::new(300.0, 400.0),
        Point::new(700.0, 800.0),
        Point::new(200.0, 700.0),
        Point::new(600.0, 300.0),
        Point::new(800.0, 500.0),
    ]
}

impl Problem {
    pub fn new(hive: Point, flowers: Vec<Point>) -> Self {
        Self { hive, flowers }
    }

    /// Number of flowers, i.e. the length of every tour.
    #[inline]
    pub fn flower_count(&self) -> usize {
        self.flowers.len()
    }

    /// Validate the problem instance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.hive.is_finite() {
            return Err(ConfigError::NonFiniteCoordinate { index: None });
        }
        if let Some(index) = self.flowers.iter().position(|p| !p.is_finite()) {
            return Err(ConfigError::NonFiniteCoordinate { index: Some(index) });
        }
        if self.flowers.len() < 2 {
            return Err(ConfigError::TooFewFlowers(self.flowers.len()));
        }
        Ok(())
    }
}

/// Settings for a single evolutionary run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of candidates in every generation.
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    /// Number of generations to run. There is no early stopping.
    #[serde(default = "default_generations")]
    pub generations: usize,
    /// Probability that an offspring receives a swap mutation (0.0-1.0).
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,
    /// Fraction of the ranked population carried over unchanged (0.0-1.0].
    #[serde(default = "default_elitism_proportion")]
    pub elitism_proportion: f64,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            population_size: default_population_size(),
            generations: default_generations(),
            mutation_rate: default_mutation_rate(),
            elitism_proportion: default_elitism_proportion(),
            random_seed: None,
        }
    }
}

// 100 bees + 1 queen
fn default_population_size() -> usize {
    101
}
fn default_generations() -> usize {
    200
}
fn default_mutation_rate() -> f64 {
    0.05
}
fn default_elitism_proportion() -> f64 {
    0.5
}

impl RunConfig {
    /// Number of candidates kept by elitist truncation each generation.
    #[inline]
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elitism_proportion).floor() as usize
    }

    /// Validate run parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        check_mutation_rate(self.mutation_rate)?;
        if !(self.elitism_proportion > 0.0 && self.elitism_proportion <= 1.0) {
            return Err(ConfigError::InvalidElitismProportion(
                self.elitism_proportion,
            ));
        }
        let elites = self.elite_count();
        if elites < 2 {
            return Err(ConfigError::TooFewElites {
                population: self.population_size,
                proportion: self.elitism_proportion,
                elites,
            });
        }
        if elites >= self.population_size {
            return Err(ConfigError::NoOffspringSlot {
                population: self.population_size,
                proportion: self.elitism_proportion,
            });
        }
        Ok(())
    }
}

fn check_mutation_rate(rate: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(ConfigError::InvalidMutationRate(rate))
    }
}

/// Settings for comparing runs across mutation rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Mutation rates to run, in order.
    #[serde(default = "default_sweep_rates")]
    pub rates: Vec<f64>,
    /// Rate whose run also reports its full ancestry.
    #[serde(default = "default_primary_rate")]
    pub primary_rate: Option<f64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            rates: default_sweep_rates(),
            primary_rate: default_primary_rate(),
        }
    }
}

fn default_sweep_rates() -> Vec<f64> {
    vec![0.01, 0.05, 0.1, 0.2]
}
fn default_primary_rate() -> Option<f64> {
    Some(0.05)
}

impl SweepConfig {
    /// Validate sweep parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rates.is_empty() {
            return Err(ConfigError::NoSweepRates);
        }
        for &rate in &self.rates {
            check_mutation_rate(rate)?;
        }
        if let Some(primary) = self.primary_rate
            && !self.rates.contains(&primary)
        {
            return Err(ConfigError::UnknownPrimaryRate(primary));
        }
        Ok(())
    }
}

/// Top-level configuration file: problem instance, run settings and sweep.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    #[serde(default)]
    pub problem: Problem,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
}

impl ExperimentConfig {
    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.problem.validate()?;
        self.run.validate()?;
        self.sweep.validate()
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Coordinates must be finite (flower index: {index:?}, none = hive)")]
    NonFiniteCoordinate { index: Option<usize> },
    #[error("At least 2 flowers are required for crossover, got {0}")]
    TooFewFlowers(usize),
    #[error("Population size must be non-zero")]
    EmptyPopulation,
    #[error("Generation count must be non-zero")]
    NoGenerations,
    #[error("Mutation rate {0} is outside [0, 1]")]
    InvalidMutationRate(f64),
    #[error("Elitism proportion {0} is outside (0, 1]")]
    InvalidElitismProportion(f64),
    #[error(
        "Population {population} with elitism {proportion} keeps {elites} candidates, at least 2 are needed for crossover"
    )]
    TooFewElites {
        population: usize,
        proportion: f64,
        elites: usize,
    },
    #[error("Population {population} with elitism {proportion} leaves no slot for offspring")]
    NoOffspringSlot { population: usize, proportion: f64 },
    #[error("Sweep needs at least one mutation rate")]
    NoSweepRates,
    #[error("Primary rate {0} is not one of the sweep rates")]
    UnknownPrimaryRate(f64),
}
