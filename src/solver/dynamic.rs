use crate::problem::*;
use crate::solver::Solver;
use crate::subset::{JobSubset, MAX_SUBSET_JOBS};

/// The largest number of jobs the dynamic solver can encode. Note that it needs two tables of
/// `2^n` entries, so the available memory is usually a much tighter bound.
pub const MAX_DP_JOBS: usize = MAX_SUBSET_JOBS;

const UNREACHED: Cost = Cost::MAX;

/// Solves the problem exactly using dynamic programming over all subsets of jobs, in
/// `O(n * 2^n)` time and `O(2^n)` memory.
///
/// The table entry of a subset is the minimum total tardiness of the jobs in that subset, when
/// they are processed before all other jobs. Since those jobs finish at the same time in any
/// order, only the choice of the *last* job of the subset matters, given the optimal cost of
/// the remaining subset.
///
/// When multiple jobs are equally good as the last job of a subset, the job with the lowest
/// index is chosen.
pub struct DynamicSolver;

struct SubsetTables {
	costs: Vec<Cost>,

	/// The index of the job that is processed last in the best known order of each subset
	last_jobs: Vec<u8>,
}

impl SubsetTables {
	fn new(num_jobs: usize) -> Self {
		let size = JobSubset::count(num_jobs);
		let mut costs = vec![UNREACHED; size];
		costs[0] = 0;
		Self { costs, last_jobs: vec![0; size] }
	}

	fn fill(&mut self, jobs: &[Job]) {
		for mask in 1 .. self.costs.len() {
			let subset = JobSubset::from_mask(mask);
			let completion_time = subset.completion_time(jobs);

			for last_job in subset {
				let remaining = subset.without(last_job);
				let candidate = self.costs[remaining.mask()] +
					jobs[last_job].penalty_when_finished_at(completion_time);
				if candidate < self.costs[mask] {
					self.costs[mask] = candidate;
					self.last_jobs[mask] = last_job as u8;
				}
			}
		}
	}

	/// Walks back from `subset` to the empty subset, and returns the job indices in the order in
	/// which they should be processed.
	fn reconstruct(&self, mut subset: JobSubset) -> Vec<usize> {
		let mut order = Vec::with_capacity(subset.len());
		while !subset.is_empty() {
			let last_job = self.last_jobs[subset.mask()] as usize;
			order.push(last_job);
			subset = subset.without(last_job);
		}
		order.reverse();
		order
	}
}

impl Solver for DynamicSolver {
	fn name(&self) -> &'static str { "dynamic programming" }

	fn solve(&self, jobs: &[Job]) -> Schedule {
		assert!(jobs.len() <= MAX_DP_JOBS, "Too many jobs for the dynamic solver: {}", jobs.len());
		let mut tables = SubsetTables::new(jobs.len());
		tables.fill(jobs);

		let all_jobs = JobSubset::full(jobs.len());
		let order = tables.reconstruct(all_jobs).into_iter().map(|index| jobs[index].get_id()).collect();
		Schedule { cost: tables.costs[all_jobs.mask()], order }
	}
}
