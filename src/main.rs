//! Beehive CLI - Run foraging-tour evolution from JSON configuration.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use log::error;

use beehive::{
    EvolutionEngine, EvolutionError, ExperimentConfig,
    compute::evolution::sweep,
    export::{ExportError, write_json, write_stats_file},
};

#[derive(Parser)]
#[command(name = "beehive")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Experiment configuration (JSON); defaults are used when omitted
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the evolution once
    Run {
        /// Random seed, overrides the configuration
        #[arg(long)]
        seed: Option<u64>,
        /// Mutation rate, overrides the configuration
        #[arg(long)]
        rate: Option<f64>,
        /// Write per-generation statistics to this file
        #[arg(long, value_name = "FILE")]
        stats: Option<PathBuf>,
        /// Write the full result (best tour, history, ancestry) as JSON
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Run once per mutation rate and compare
    Sweep {
        /// Master random seed, overrides the configuration
        #[arg(long)]
        seed: Option<u64>,
        /// Comma-separated mutation rates, override the configuration
        #[arg(long, value_delimiter = ',')]
        rates: Option<Vec<f64>>,
        /// Write the sweep result as JSON
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print the default configuration
    Example,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Error reading config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Error parsing config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Evolution(#[from] EvolutionError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<ExperimentConfig, CliError> {
    let Some(path) = path else {
        return Ok(ExperimentConfig::default());
    };
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn execute(cli: Cli) -> Result<(), CliError> {
    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Example => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Command::Run {
            seed,
            rate,
            stats,
            output,
        } => {
            if seed.is_some() {
                config.run.random_seed = seed;
            }
            if let Some(rate) = rate {
                config.run.mutation_rate = rate;
            }

            print_banner(&config);
            let start = Instant::now();
            let mut engine = EvolutionEngine::new(config.problem.clone(), config.run.clone())?;
            let result = engine.run()?;
            let elapsed = start.elapsed();

            println!();
            println!("=== Final Results ===");
            println!("Seed: {}", result.seed);
            println!("Best distance found: {:.2}", result.best.distance);
            println!("Best tour: {:?}", result.best.tour);
            println!(
                "Best bee: #{} (gen {})",
                result.best.id, result.best.generation
            );
            if let Some(ancestry) = &result.ancestry {
                println!(
                    "Ancestry: {} bees, {} links, {} founders",
                    ancestry.nodes.len(),
                    ancestry.edges.len(),
                    ancestry.founders().len()
                );
            }
            println!(
                "Time: {:.2}s ({} bees created)",
                elapsed.as_secs_f32(),
                result.candidates_created
            );

            if let Some(path) = stats {
                write_stats_file(&path, &result.history)?;
                println!("Statistics saved to {}", path.display());
            }
            if let Some(path) = output {
                write_json(&path, &result)?;
                println!("Result saved to {}", path.display());
            }
        }
        Command::Sweep {
            seed,
            rates,
            output,
        } => {
            if seed.is_some() {
                config.run.random_seed = seed;
            }
            if let Some(rates) = rates {
                if config
                    .sweep
                    .primary_rate
                    .is_some_and(|primary| !rates.contains(&primary))
                {
                    config.sweep.primary_rate = rates.first().copied();
                }
                config.sweep.rates = rates;
            }

            print_banner(&config);
            let result = sweep(&config.problem, &config.run, &config.sweep)?;

            println!();
            println!("{:>14}  {:>14}  {:>14}", "mutation rate", "best distance", "avg fitness");
            for run in &result.runs {
                let last = run.history.last();
                println!(
                    "{:>14}  {:>14.2}  {:>14.6}",
                    run.mutation_rate,
                    run.best.distance,
                    last.map_or(f64::NAN, |s| s.average_fitness)
                );
            }

            if let Some(path) = output {
                write_json(&path, &result)?;
                println!("Result saved to {}", path.display());
            }
        }
    }

    Ok(())
}

fn print_banner(config: &ExperimentConfig) {
    println!("Beehive Evolution");
    println!("=================");
    println!(
        "Hive: ({}, {}), flowers: {}",
        config.problem.hive.x,
        config.problem.hive.y,
        config.problem.flower_count()
    );
    println!(
        "Population: {}, generations: {}, elitism: {}",
        config.run.population_size, config.run.generations, config.run.elitism_proportion
    );
}
