//! `knapsack`: solve one instance with one strategy and report the result.
//!
//! ```text
//! knapsack branch-and-bound instance.txt
//! knapsack genetic < instance.txt
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`); logs go to stderr.

use clap::{Parser, ValueEnum};
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;
use u_knapsack::ga::GaConfig;
use u_knapsack::instance::{load_instance, read_instance};
use u_knapsack::Strategy;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Greedy density heuristic
    Greedy,
    /// Exact best-first branch-and-bound
    BranchAndBound,
    /// Sequential genetic algorithm
    Genetic,
    /// Data-parallel genetic algorithm
    ParallelGenetic,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Greedy => Strategy::Greedy,
            StrategyArg::BranchAndBound => Strategy::BranchAndBound,
            StrategyArg::Genetic => Strategy::Genetic(GaConfig::default()),
            StrategyArg::ParallelGenetic => Strategy::ParallelGenetic(GaConfig::default()),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "knapsack", version, about = "Solve a 0/1 knapsack instance")]
struct Args {
    /// Solving strategy
    #[arg(value_enum)]
    strategy: StrategyArg,

    /// Instance file: `count capacity`, then `count` pairs of `price weight`.
    /// Standard input is read when omitted.
    file: Option<PathBuf>,
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    enable_tracing();
    let args = Args::parse();

    let instance = match &args.file {
        Some(path) => load_instance(path)?,
        None => read_instance(io::stdin().lock())?,
    };
    let strategy = Strategy::from(args.strategy);
    info!(
        strategy = strategy.name(),
        items = instance.len(),
        capacity = instance.capacity(),
        "solving"
    );

    let start = Instant::now();
    let solution = strategy.solve(&instance);
    let elapsed = start.elapsed();

    println!("Maximum price that can be taken: {}", solution.price);
    println!("Total weight: {} / {}", solution.weight, instance.capacity());
    println!("Selected items: {:?}", solution.items);
    println!("Time spent: {elapsed:?} ({} ns)", elapsed.as_nanos());
    Ok(())
}
