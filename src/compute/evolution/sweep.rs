//! Mutation-rate sweeps: one independent run per rate.

use log::info;

use crate::schema::{GenerationStat, Problem, RunConfig, SweepConfig, SweepResult};

use super::EvolutionError;
use super::engine::EvolutionEngine;
use super::tour::TourRng;

/// Run `base` once per rate in `sweep.rates`, overriding only the mutation
/// rate and the seed.
///
/// Each run gets its own seed drawn from a master generator seeded by
/// `base.random_seed`, so a seeded sweep is reproducible and no two runs
/// share a random stream. Only the primary run keeps its ancestry.
pub fn sweep(
    problem: &Problem,
    base: &RunConfig,
    sweep: &SweepConfig,
) -> Result<SweepResult, EvolutionError> {
    sweep_with_callback(problem, base, sweep, |_, _| {})
}

/// Like [`sweep`], reporting every generation together with its run's rate.
pub fn sweep_with_callback<F>(
    problem: &Problem,
    base: &RunConfig,
    sweep: &SweepConfig,
    mut callback: F,
) -> Result<SweepResult, EvolutionError>
where
    F: FnMut(f64, &GenerationStat),
{
    sweep.validate()?;

    let mut master = match base.random_seed {
        Some(seed) => TourRng::new(seed),
        None => TourRng::random(),
    };

    let mut runs = Vec::with_capacity(sweep.rates.len());
    for &rate in &sweep.rates {
        let config = RunConfig {
            mutation_rate: rate,
            random_seed: Some(master.next_seed()),
            ..base.clone()
        };

        let mut engine = EvolutionEngine::new(problem.clone(), config)?;
        let mut result = engine.run_with_callback(|stat| callback(rate, stat))?;
        if sweep.primary_rate != Some(rate) {
            result.ancestry = None;
        }

        info!(
            "mutation rate {}: best distance {:.2} after {} generations",
            rate,
            result.best.distance,
            result.history.len()
        );
        runs.push(result);
    }

    Ok(SweepResult {
        primary_rate: sweep.primary_rate,
        runs,
    })
}
