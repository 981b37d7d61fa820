mod cli;
mod generator;
mod harness;
mod parser;
mod permutation;
mod problem;
mod simulator;
mod solver;
mod subset;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::Args;
use parser::{DataFile, Dataset};
use rand::SeedableRng;
use rand::rngs::StdRng;
use solver::{BruteForceSolver, DynamicSolver, MAX_DP_JOBS};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
	let args = Args::parse();
	init_logging(args.verbose);

	if let Err(error) = run(&args) {
		eprintln!("Error: {:#}", error);
		std::process::exit(1);
	}
}

fn init_logging(verbose: bool) {
	let default_level = if verbose { "debug" } else { "info" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(args: &Args) -> Result<()> {
	if args.max_dp_jobs > MAX_DP_JOBS {
		bail!("--max-dp-jobs can be at most {}", MAX_DP_JOBS);
	}

	let datasets = match args.random_jobs {
		Some(num_jobs) => vec![random_dataset(num_jobs, args.seed)],
		None => load_datasets(args)?,
	};
	info!("Found {} datasets", datasets.len());

	let mut mismatches = 0;
	if args.solver.runs_dynamic() {
		let totals = harness::run_section(&DynamicSolver, args.max_dp_jobs, &datasets);
		mismatches += totals.num_mismatches;
	}
	if args.solver.runs_brute_force() {
		let totals = harness::run_section(&BruteForceSolver, args.max_brute_force_jobs, &datasets);
		mismatches += totals.num_mismatches;
	}

	if mismatches > 0 {
		warn!("{} results differ from the optimal penalty in the data file", mismatches);
	}
	Ok(())
}

fn load_datasets(args: &Args) -> Result<Vec<Dataset>> {
	if args.first > args.last {
		bail!("The first dataset ({}) comes after the last dataset ({})", args.first, args.last);
	}
	let data_file = DataFile::read(&args.data_file)?;
	(args.first ..= args.last).map(|number| {
		data_file.dataset(number).with_context(|| format!("Failed to load {}", args.data_file.display()))
	}).collect()
}

fn random_dataset(num_jobs: usize, seed: Option<u64>) -> Dataset {
	let seed = seed.unwrap_or_else(rand::random);
	info!("Generating {} random jobs with seed {}", num_jobs, seed);
	let jobs = generator::random_jobs(num_jobs, &mut StdRng::seed_from_u64(seed));
	Dataset { number: 0, jobs, expected_cost: None }
}
