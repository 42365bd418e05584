//! Binary that computes two dominating sets for every graph file in an input directory and writes
//! the answers into a timestamped file in an output directory.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use dominant_pair::{batch, cust_error::BatchError, multi_start::{SolverConfig, DEFAULT_PATH_BUDGET, DEFAULT_SEED_COUNT}};

#[derive(Parser)]
#[command(name = "dominant")]
#[command(about = "Computes two dominating sets with a low combined score for each input graph", long_about = None)]
struct Cli {
    /// Directory holding the graph files
    input_dir: PathBuf,

    /// Directory the answers file is written to
    output_dir: PathBuf,

    /// Number of greedy starts for each dominating set
    #[arg(long, default_value_t = DEFAULT_SEED_COUNT)]
    seeds: usize,

    /// Maximum number of extensions in the longest path search
    #[arg(long, default_value_t = DEFAULT_PATH_BUDGET)]
    path_budget: usize,

    /// Search the longest path exhaustively
    #[arg(long)]
    no_path_budget: bool,

    /// Run the greedy starts on the current thread only
    #[arg(long)]
    sequential: bool,

    /// Skip the final domination check
    #[arg(long)]
    no_validate: bool,

    /// Size of the worker pool (defaults to the number of cores)
    #[arg(long)]
    threads: Option<usize>,
}

pub fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new().num_threads(threads).build_global()?;
    }
    let path_budget = if cli.no_path_budget { None } else { Some(cli.path_budget) };
    let config = SolverConfig::default()
        .with_seed_count(cli.seeds)
        .with_path_budget(path_budget)
        .with_parallel(!cli.sequential)
        .with_validate(!cli.no_validate);

    match batch::run_batch(&cli.input_dir, &cli.output_dir, &config) {
        Ok(answers) => {
            println!("{}", answers.display());
            Ok(ExitCode::SUCCESS)
        },
        Err(BatchError::InvalidDirectory(path)) => {
            eprintln!("{} doesn't exist", path.display());
            Ok(ExitCode::FAILURE)
        },
        Err(e) => {
            error!("{}", e);
            Err(Box::new(e))
        },
    }
}
