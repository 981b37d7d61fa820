pub type Time = i64;
pub type Cost = i64;

/// The weighted tardiness of a job that finishes at `completion_time`: nothing when it finishes
/// on or before `due_date`, and `weight` per time unit of lateness otherwise.
pub fn penalty(completion_time: Time, due_date: Time, weight: Cost) -> Cost {
	Time::max(completion_time - due_date, 0) * weight
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Job {
	id: usize,
	processing_time: Time,
	weight: Cost,
	due_date: Time,
}

impl Job {
	pub fn new(id: usize, processing_time: Time, weight: Cost, due_date: Time) -> Job {
		Job { id, processing_time, weight, due_date }
	}

	/// The 1-based position of this job in the dataset it was read from
	pub fn get_id(&self) -> usize { self.id }

	pub fn get_processing_time(&self) -> Time { self.processing_time }

	pub fn get_weight(&self) -> Cost { self.weight }

	pub fn get_due_date(&self) -> Time { self.due_date }

	pub fn penalty_when_finished_at(&self, completion_time: Time) -> Cost {
		penalty(completion_time, self.due_date, self.weight)
	}
}

/// Assigns ids `1..=n` to jobs given as `(processing_time, weight, due_date)` triples.
#[cfg(test)]
pub fn jobs_from_triples(triples: &[(Time, Cost, Time)]) -> Vec<Job> {
	triples.iter().enumerate().map(
		|(index, &(processing_time, weight, due_date))| Job::new(index + 1, processing_time, weight, due_date)
	).collect()
}

/// The result of a solver: the total weighted tardiness, and the ids of the jobs in the order in
/// which they should be processed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Schedule {
	pub cost: Cost,
	pub order: Vec<usize>,
}

impl Schedule {
	#[cfg(test)]
	pub fn empty() -> Self {
		Self { cost: 0, order: Vec::new() }
	}
}
