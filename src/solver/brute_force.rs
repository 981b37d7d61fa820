use crate::permutation::next_permutation;
use crate::problem::*;
use crate::simulator::evaluate;
use crate::solver::Solver;

/// Solves the problem by trying every permutation of the jobs, in `O(n! * n)` time. This is only
/// useful to validate the other solvers on small job sets.
///
/// The permutations are visited in lexicographic order of job indices, and a permutation only
/// replaces the best one so far when it is strictly better. Among all optimal orders, the
/// lexicographically smallest one is thus returned.
pub struct BruteForceSolver;

impl Solver for BruteForceSolver {
	fn name(&self) -> &'static str { "brute force" }

	fn solve(&self, jobs: &[Job]) -> Schedule {
		let mut indices: Vec<usize> = (0 .. jobs.len()).collect();
		let mut best_cost = evaluate(jobs, &indices);
		let mut best_indices = indices.clone();

		while next_permutation(&mut indices) {
			let cost = evaluate(jobs, &indices);
			if cost < best_cost {
				best_cost = cost;
				best_indices.copy_from_slice(&indices);
			}
		}

		let order = best_indices.into_iter().map(|index| jobs[index].get_id()).collect();
		Schedule { cost: best_cost, order }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_prefers_first_optimal_permutation() {
		// Job 3 must go first; jobs 1 and 2 are interchangeable after it
		let jobs = jobs_from_triples(&[(1, 1, 100), (1, 1, 100), (5, 10, 5)]);
		assert_eq!(Schedule { cost: 0, order: vec![3, 1, 2] }, BruteForceSolver.solve(&jobs));
	}

	#[test]
	fn test_heavy_job_first() {
		let jobs = jobs_from_triples(&[(3, 1, 0), (3, 10, 0)]);
		// 2 first: 30 + 6, 1 first: 3 + 60
		assert_eq!(Schedule { cost: 36, order: vec![2, 1] }, BruteForceSolver.solve(&jobs));
	}

	#[test]
	fn test_order_uses_job_ids() {
		let jobs = vec![Job::new(7, 4, 1, 4), Job::new(3, 2, 1, 1)];
		assert_eq!(Schedule { cost: 3, order: vec![3, 7] }, BruteForceSolver.solve(&jobs));
	}
}
