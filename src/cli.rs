use clap::{Parser, ValueEnum};
use std::path::PathBuf;

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum SolverChoice {
	/// Only the dynamic programming solver
	Dynamic,
	/// Only the brute force solver
	BruteForce,
	/// The dynamic programming solver, followed by the brute force solver
	All,
}

impl SolverChoice {
	pub fn runs_dynamic(self) -> bool {
		self != SolverChoice::BruteForce
	}

	pub fn runs_brute_force(self) -> bool {
		self != SolverChoice::Dynamic
	}
}

#[derive(Parser, Debug)]
#[command(name = APP_NAME)]
#[command(version = VERSION)]
#[command(about = "Exact solvers for single-machine total weighted tardiness", long_about = None)]
pub struct Args {
	/// The file containing the `data.<number>:` sections
	#[arg(short, long, default_value = "data/witi.data.txt")]
	pub data_file: PathBuf,

	/// The number of the first dataset to solve
	#[arg(short, long, default_value_t = 10)]
	pub first: u32,

	/// The number of the last dataset to solve (inclusive)
	#[arg(short, long, default_value_t = 20)]
	pub last: u32,

	/// Which solver(s) to run
	#[arg(short, long, value_enum, default_value_t = SolverChoice::All)]
	pub solver: SolverChoice,

	/// Datasets with more jobs are skipped by the dynamic programming solver
	#[arg(long, default_value_t = 24)]
	pub max_dp_jobs: usize,

	/// Datasets with more jobs are skipped by the brute force solver
	#[arg(long, default_value_t = 10)]
	pub max_brute_force_jobs: usize,

	/// Solve a single random problem with this many jobs instead of reading the data file
	#[arg(short, long)]
	pub random_jobs: Option<usize>,

	/// The seed of the random problem (a random seed is chosen and logged when omitted)
	#[arg(long, requires = "random_jobs")]
	pub seed: Option<u64>,

	/// Log debug information (overridden by RUST_LOG)
	#[arg(short, long)]
	pub verbose: bool,
}
