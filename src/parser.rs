use crate::problem::*;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use std::str::SplitWhitespace;
use thiserror::Error;
use tracing::debug;

const OPTIMUM_LABEL: &str = "opt:";

#[derive(Debug, Error)]
pub enum ParseError {
	#[error("couldn't read data file {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("there is no data.{0} in the file")]
	DatasetNotFound(u32),

	#[error("data.{dataset} doesn't specify the number of jobs")]
	MissingJobCount { dataset: u32 },

	#[error("couldn't parse {token:?} as the {what} of data.{dataset}")]
	InvalidNumber { dataset: u32, what: &'static str, token: String },

	#[error("data.{dataset} should have {expected} jobs, but only {found} are complete")]
	TruncatedDataset { dataset: u32, expected: usize, found: usize },
}

/// One dataset of a data file: the jobs, and the optimal cost when the file specifies it
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Dataset {
	pub number: u32,
	pub jobs: Vec<Job>,
	pub expected_cost: Option<Cost>,
}

/// The contents of a data file with (possibly many) datasets. Each dataset section starts with a
/// `data.<number>:` label, followed by the number of jobs `n`, followed by `n` lines with the
/// processing time, weight, and due date of each job. A dataset can be followed by an `opt:`
/// label with its optimal cost (and possibly the optimal permutation, which is ignored).
pub struct DataFile {
	raw_text: String,
}

impl DataFile {
	pub fn read(file_path: &Path) -> Result<DataFile, ParseError> {
		let raw_text = read_to_string(file_path).map_err(|source| ParseError::Io {
			path: file_path.to_path_buf(), source
		})?;
		Ok(DataFile { raw_text })
	}

	#[cfg(test)]
	pub fn from_text(raw_text: impl Into<String>) -> DataFile {
		DataFile { raw_text: raw_text.into() }
	}

	/// Looks up the dataset with the given number. When the file has no such dataset, this
	/// returns `ParseError::DatasetNotFound` rather than an empty dataset.
	pub fn dataset(&self, number: u32) -> Result<Dataset, ParseError> {
		let mut tokens = self.raw_text.split_whitespace();
		if !tokens.any(|token| parse_label(token) == Some(number)) {
			return Err(ParseError::DatasetNotFound(number));
		}

		let num_jobs = match tokens.next() {
			Some(token) => parse_number::<usize>(number, "number of jobs", token)?,
			None => return Err(ParseError::MissingJobCount { dataset: number }),
		};

		let mut jobs = Vec::with_capacity(num_jobs);
		for index in 0 .. num_jobs {
			let (Some(raw_processing_time), Some(raw_weight), Some(raw_due_date)) =
				(tokens.next(), tokens.next(), tokens.next()) else {
				return Err(ParseError::TruncatedDataset { dataset: number, expected: num_jobs, found: index });
			};

			let processing_time = parse_number(number, "processing time", raw_processing_time)?;
			let weight = parse_number(number, "weight", raw_weight)?;
			let due_date = parse_number(number, "due date", raw_due_date)?;
			jobs.push(Job::new(index + 1, processing_time, weight, due_date));
		}

		let expected_cost = parse_expected_cost(number, &mut tokens)?;
		debug!("Parsed data.{} with {} jobs and optimum {:?}", number, jobs.len(), expected_cost);
		Ok(Dataset { number, jobs, expected_cost })
	}
}

/// Returns the dataset number of a `data.<number>:` label, or `None` if `token` isn't a label
fn parse_label(token: &str) -> Option<u32> {
	token.strip_prefix("data.")?.strip_suffix(':')?.parse().ok()
}

fn parse_number<T: std::str::FromStr>(dataset: u32, what: &'static str, token: &str) -> Result<T, ParseError> {
	token.parse::<T>().map_err(|_| ParseError::InvalidNumber { dataset, what, token: token.to_string() })
}

fn parse_expected_cost(dataset: u32, tokens: &mut SplitWhitespace) -> Result<Option<Cost>, ParseError> {
	while let Some(token) = tokens.next() {
		if parse_label(token).is_some() {
			return Ok(None);
		}
		if token == OPTIMUM_LABEL {
			return match tokens.next() {
				Some(raw_cost) => Ok(Some(parse_number(dataset, "optimal cost", raw_cost)?)),
				None => Ok(None),
			};
		}
	}
	Ok(None)
}
