use crate::problem::{Job, Schedule};

mod brute_force;
mod dynamic;

pub use brute_force::BruteForceSolver;
pub use dynamic::{DynamicSolver, MAX_DP_JOBS};

/// An exact solver for the single-machine total weighted tardiness problem.
///
/// Solvers are stateless: every call to `solve` allocates its own working memory, so the same
/// solver can be used for any number of job sets, or from multiple threads at once.
pub trait Solver {
	fn name(&self) -> &'static str;

	/// Finds a processing order of all `jobs` that minimizes their total weighted tardiness.
	/// The caller is responsible for keeping the number of jobs small enough for this solver.
	fn solve(&self, jobs: &[Job]) -> Schedule;
}
