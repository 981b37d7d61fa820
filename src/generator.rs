use rand::prelude::*;
use crate::problem::*;

const MAX_PROCESSING_TIME: Time = 20;
const MAX_WEIGHT: Cost = 10;

/// Generates `num_jobs` random jobs with ids `1 ..= num_jobs`. The due dates are spread over the
/// total processing time, so that a typical instance has both early and tardy jobs.
pub fn random_jobs<R: Rng + ?Sized>(num_jobs: usize, rng: &mut R) -> Vec<Job> {
	let processing_times: Vec<Time> = (0 .. num_jobs).map(
		|_| rng.random_range(1 ..= MAX_PROCESSING_TIME)
	).collect();
	let total_processing_time = Time::max(1, processing_times.iter().sum());

	processing_times.into_iter().enumerate().map(|(index, processing_time)| {
		let weight = rng.random_range(1 ..= MAX_WEIGHT);
		let due_date = rng.random_range(1 ..= total_processing_time);
		Job::new(index + 1, processing_time, weight, due_date)
	}).collect()
}

#[cfg(test)]
mod tests {
	use rand::rngs::StdRng;
	use super::*;

	#[test]
	fn test_random_jobs_are_in_range() {
		let mut rng = StdRng::seed_from_u64(1);
		for num_jobs in 0 .. 20 {
			let jobs = random_jobs(num_jobs, &mut rng);
			assert_eq!(num_jobs, jobs.len());
			let total: Time = jobs.iter().map(|job| job.get_processing_time()).sum();
			for (index, job) in jobs.iter().enumerate() {
				assert_eq!(index + 1, job.get_id());
				assert!((1 ..= MAX_PROCESSING_TIME).contains(&job.get_processing_time()));
				assert!((1 ..= MAX_WEIGHT).contains(&job.get_weight()));
				assert!(job.get_due_date() >= 1 && job.get_due_date() <= total);
			}
		}
	}

	#[test]
	fn test_seed_is_reproducible() {
		let first = random_jobs(12, &mut StdRng::seed_from_u64(42));
		let second = random_jobs(12, &mut StdRng::seed_from_u64(42));
		assert_eq!(first, second);
	}
}
