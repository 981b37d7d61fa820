use crate::problem::*;

/// This struct simulates a single machine that processes jobs back-to-back, starting at time 0.
/// Users can invoke the `schedule(Job)` method to dispatch jobs, and this simulator keeps track
/// of the total weighted tardiness of the jobs that have been dispatched so far.
#[derive(Clone, Debug)]
pub struct Simulator {
	current_time: Time,
	total_penalty: Cost,
}

impl Simulator {

	/// Constructs a new simulator of an idle machine. No jobs are dispatched initially.
	pub fn new() -> Self {
		Self { current_time: 0, total_penalty: 0 }
	}

	/// Dispatches `job` right after the previously dispatched job, and returns the penalty that
	/// it contributes.
	pub fn schedule(&mut self, job: Job) -> Cost {
		self.current_time += job.get_processing_time();
		let penalty = job.penalty_when_finished_at(self.current_time);
		self.total_penalty += penalty;
		penalty
	}

	/// The time at which the most recently dispatched job finishes
	pub fn current_time(&self) -> Time { self.current_time }

	pub fn total_penalty(&self) -> Cost { self.total_penalty }
}

/// Computes the total weighted tardiness when the jobs are processed in the order given by
/// `indices`, which are indices into `jobs` (not job ids).
pub fn evaluate(jobs: &[Job], indices: &[usize]) -> Cost {
	let mut simulator = Simulator::new();
	for &index in indices {
		simulator.schedule(jobs[index]);
	}
	simulator.total_penalty()
}

/// Like `evaluate`, but for an order given by job ids, like the `order` of a `Schedule`. Returns
/// `None` when `ids` contains an id that none of the `jobs` has.
pub fn evaluate_ids(jobs: &[Job], ids: &[usize]) -> Option<Cost> {
	let mut simulator = Simulator::new();
	for &id in ids {
		let job = jobs.iter().find(|job| job.get_id() == id)?;
		simulator.schedule(*job);
	}
	Some(simulator.total_penalty())
}
