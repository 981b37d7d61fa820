use crate::problem::*;

/// The largest number of jobs whose subsets can be encoded in a `JobSubset`. One bit is kept
/// spare so that `1 << num_jobs` still fits in a `usize`.
pub const MAX_SUBSET_JOBS: usize = usize::BITS as usize - 1;

/// A set of job indices, encoded as a bitmask: job `j` is a member iff bit `j` is set. The raw
/// mask doubles as the index of the subset in the tables of the dynamic programming solver.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct JobSubset {
	raw: usize
}

impl JobSubset {
	pub fn empty() -> JobSubset {
		JobSubset { raw: 0 }
	}

	pub fn from_mask(raw: usize) -> JobSubset {
		JobSubset { raw }
	}

	/// The subset containing all jobs `0 .. num_jobs`
	pub fn full(num_jobs: usize) -> JobSubset {
		assert!(num_jobs <= MAX_SUBSET_JOBS, "Can't encode subsets of {} jobs", num_jobs);
		JobSubset { raw: (1 << num_jobs) - 1 }
	}

	/// The number of distinct subsets of `num_jobs` jobs, which is the size of every subset table
	pub fn count(num_jobs: usize) -> usize {
		assert!(num_jobs <= MAX_SUBSET_JOBS, "Can't encode subsets of {} jobs", num_jobs);
		1 << num_jobs
	}

	pub fn mask(&self) -> usize { self.raw }

	pub fn is_empty(&self) -> bool { self.raw == 0 }

	pub fn len(&self) -> usize { self.raw.count_ones() as usize }

	#[cfg(test)]
	pub fn contains(&self, index: usize) -> bool {
		self.raw & (1 << index) != 0
	}

	pub fn without(self, index: usize) -> JobSubset {
		JobSubset { raw: self.raw & !(1 << index) }
	}

	/// Iterates over the members of this subset, from the lowest index to the highest
	pub fn iter(&self) -> SubsetIterator {
		SubsetIterator { remaining: self.raw }
	}

	/// The time at which the machine finishes the jobs of this subset when it processes them
	/// before all other jobs, regardless of their internal order
	pub fn completion_time(&self, jobs: &[Job]) -> Time {
		self.iter().map(|index| jobs[index].get_processing_time()).sum()
	}
}

impl IntoIterator for JobSubset {
	type Item = usize;
	type IntoIter = SubsetIterator;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

pub struct SubsetIterator {
	remaining: usize,
}

impl Iterator for SubsetIterator {
	type Item = usize;

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}
		let index = self.remaining.trailing_zeros() as usize;
		self.remaining &= self.remaining - 1;
		Some(index)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_contains_and_without() {
		assert!(JobSubset::empty().is_empty());
		assert!(!JobSubset::empty().contains(0));
		let set = JobSubset::from_mask(1 | (1 << 10) | (1 << 30));
		assert!(!set.is_empty());
		assert!(set.contains(0));
		assert!(set.contains(10));
		assert!(set.contains(30));
		assert!(!set.contains(1));
		assert!(!set.contains(11));
		assert_eq!(3, set.len());
		let set = set.without(10);
		assert!(!set.contains(10));
		assert!(set.contains(30));
		assert_eq!(set.without(30), JobSubset::from_mask(1));
		assert_eq!(set.without(5), set);
	}

	#[test]
	fn test_full() {
		assert_eq!(0, JobSubset::full(0).mask());
		assert_eq!(0b111, JobSubset::full(3).mask());
		assert_eq!(8, JobSubset::count(3));
		assert_eq!(MAX_SUBSET_JOBS, JobSubset::full(MAX_SUBSET_JOBS).len());
	}

	#[test]
	#[should_panic]
	fn test_too_many_jobs() {
		JobSubset::count(MAX_SUBSET_JOBS + 1);
	}

	#[test]
	fn test_iterator() {
		assert_eq!(Vec::<usize>::new(), JobSubset::empty().iter().collect::<Vec<_>>());
		assert_eq!(vec![0, 2, 5], JobSubset::from_mask(0b100101).iter().collect::<Vec<_>>());
		assert_eq!(vec![MAX_SUBSET_JOBS], JobSubset::from_mask(1 << MAX_SUBSET_JOBS).into_iter().collect::<Vec<_>>());
	}

	#[test]
	fn test_completion_time() {
		let jobs = jobs_from_triples(&[(4, 1, 4), (2, 1, 1), (6, 1, 9)]);
		assert_eq!(0, JobSubset::empty().completion_time(&jobs));
		assert_eq!(6, JobSubset::from_mask(0b011).completion_time(&jobs));
		assert_eq!(10, JobSubset::from_mask(0b101).completion_time(&jobs));
		assert_eq!(12, JobSubset::full(3).completion_time(&jobs));
	}
}
