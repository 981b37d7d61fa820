use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use crate::parser::Dataset;
use crate::problem::*;
use crate::simulator::evaluate_ids;
use crate::solver::Solver;

const BANNER_WIDTH: usize = 85;

/// The outcome of running one solver on one dataset
#[derive(Debug, Clone)]
pub struct DatasetResult {
	pub dataset: u32,
	pub schedule: Schedule,
	pub elapsed: Duration,

	/// `Some(false)` when the data file specifies a different optimal cost
	pub matches_expected: Option<bool>,
}

impl DatasetResult {
	pub fn report(&self) -> String {
		let order: Vec<String> = self.schedule.order.iter().map(|id| id.to_string()).collect();
		let mut report = format!(
			"Algorithm execution time for dataset {}: {} microseconds\n",
			self.dataset, self.elapsed.as_micros()
		);
		report += &format!("Minimal penalty for dataset {}: {}", self.dataset, self.schedule.cost);
		if self.matches_expected == Some(false) {
			report += " MISMATCH";
		}
		report += &format!("\nTask permutation: {}\n", order.join(" "));
		report
	}
}

/// The penalties of one solver, accumulated over all datasets it solved
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct PenaltyTotals {
	pub total_penalty: Cost,
	pub num_solved: usize,
	pub num_skipped: usize,
	pub num_mismatches: usize,
}

impl PenaltyTotals {
	pub fn add(mut self, result: &DatasetResult) -> Self {
		self.total_penalty += result.schedule.cost;
		self.num_solved += 1;
		if result.matches_expected == Some(false) {
			self.num_mismatches += 1;
		}
		self
	}

	pub fn skip(mut self) -> Self {
		self.num_skipped += 1;
		self
	}

	pub fn report(&self) -> String {
		format!("Total penalty across {} datasets: {}", self.num_solved, self.total_penalty)
	}
}

/// Runs `solver` on `jobs`, and measures how long it took
pub fn solve_timed(solver: &dyn Solver, jobs: &[Job]) -> (Schedule, Duration) {
	let start_time = Instant::now();
	let schedule = solver.solve(jobs);
	(schedule, start_time.elapsed())
}

pub fn solve_dataset(solver: &dyn Solver, dataset: &Dataset) -> DatasetResult {
	let (schedule, elapsed) = solve_timed(solver, &dataset.jobs);
	debug!("{} solved data.{} in {:?}", solver.name(), dataset.number, elapsed);
	debug_assert_eq!(Some(schedule.cost), evaluate_ids(&dataset.jobs, &schedule.order));

	let matches_expected = dataset.expected_cost.map(|expected| expected == schedule.cost);
	if matches_expected == Some(false) {
		warn!(
			"{} found penalty {} for data.{}, but the data file claims {}",
			solver.name(), schedule.cost, dataset.number, dataset.expected_cost.unwrap_or_default()
		);
	}
	DatasetResult { dataset: dataset.number, schedule, elapsed, matches_expected }
}

/// Solves all `datasets` that have at most `max_jobs` jobs, prints the result of each of them,
/// and returns the accumulated penalties.
pub fn run_section(solver: &dyn Solver, max_jobs: usize, datasets: &[Dataset]) -> PenaltyTotals {
	print_banner(solver.name());
	info!("Running the {} solver on {} datasets", solver.name(), datasets.len());

	let totals = datasets.iter().fold(PenaltyTotals::default(), |totals, dataset| {
		if dataset.jobs.len() > max_jobs {
			warn!(
				"Skipping data.{} for the {} solver: it has {} jobs, but the limit is {}",
				dataset.number, solver.name(), dataset.jobs.len(), max_jobs
			);
			return totals.skip();
		}
		let result = solve_dataset(solver, dataset);
		println!("{}", result.report());
		totals.add(&result)
	});

	println!("{}", totals.report());
	if totals.num_skipped > 0 {
		info!("The {} solver skipped {} datasets", solver.name(), totals.num_skipped);
	}
	totals
}

fn print_banner(title: &str) {
	let line = "-".repeat(BANNER_WIDTH);
	println!("{}", line);
	println!("{:^width$}", title.to_uppercase(), width = BANNER_WIDTH);
	println!("{}", line);
}

#[cfg(test)]
mod tests {
	use crate::solver::{BruteForceSolver, DynamicSolver};
	use super::*;

	fn dataset(number: u32, triples: &[(Time, Cost, Time)], expected_cost: Option<Cost>) -> Dataset {
		Dataset { number, jobs: jobs_from_triples(triples), expected_cost }
	}

	#[test]
	fn test_run_section_accumulates_penalties() {
		let datasets = vec![
			dataset(1, &[(4, 1, 4), (2, 1, 1), (6, 1, 9)], Some(6)),
			dataset(2, &[(3, 2, 2), (1, 1, 3)], None),
			dataset(3, &[], Some(0)),
		];
		let expected = PenaltyTotals { total_penalty: 9, num_solved: 3, num_skipped: 0, num_mismatches: 0 };
		assert_eq!(expected, run_section(&DynamicSolver, 24, &datasets));
		assert_eq!(expected, run_section(&BruteForceSolver, 10, &datasets));
	}

	#[test]
	fn test_run_section_skips_large_datasets() {
		let datasets = vec![
			dataset(1, &[(4, 1, 4), (2, 1, 1), (6, 1, 9)], None),
			dataset(2, &[(3, 2, 2), (1, 1, 3)], None),
		];
		let totals = run_section(&BruteForceSolver, 2, &datasets);
		assert_eq!(PenaltyTotals { total_penalty: 3, num_solved: 1, num_skipped: 1, num_mismatches: 0 }, totals);
	}

	#[test]
	fn test_mismatch_is_reported() {
		let wrong = dataset(7, &[(4, 1, 4), (2, 1, 1), (6, 1, 9)], Some(5));
		let result = solve_dataset(&DynamicSolver, &wrong);
		assert_eq!(Some(false), result.matches_expected);
		assert!(result.report().contains("Minimal penalty for dataset 7: 6 MISMATCH"));
		assert_eq!(1, PenaltyTotals::default().add(&result).num_mismatches);
	}

	#[test]
	fn test_report() {
		let result = DatasetResult {
			dataset: 12,
			schedule: Schedule { cost: 6, order: vec![2, 1, 3] },
			elapsed: Duration::from_micros(35),
			matches_expected: Some(true),
		};
		assert_eq!(
			"Algorithm execution time for dataset 12: 35 microseconds\n\
			Minimal penalty for dataset 12: 6\n\
			Task permutation: 2 1 3\n",
			result.report()
		);
		let totals = PenaltyTotals::default().add(&result).add(&result);
		assert_eq!("Total penalty across 2 datasets: 12", totals.report());
	}
}
