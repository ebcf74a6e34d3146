mod run;

pub use run::*;

use crate::core::{Instance, InstanceError, Job};
use std::fmt::Write as _;
use std::io::BufRead;

/// An error that occurred while reading an instance from its text form.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Reading from the underlying source failed.
    #[error("failed to read instance: {0}")]
    Io(#[from] std::io::Error),
    /// A line of the input could not be parsed.
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: &'static str },
    /// The parsed jobs do not form a valid instance.
    #[error(transparent)]
    Invalid(#[from] InstanceError),
}

const fn malformed(line: usize, reason: &'static str) -> ParseError {
    ParseError::Malformed { line, reason }
}

/// Reads an instance from the reader.
/// The format is the job count on the first line followed by one
/// `<deadline> <profit>` line per job.
///
/// # Errors
/// - If the reader fails, a line is malformed, or the jobs do not form a valid instance.
pub fn deserialize(reader: &mut impl BufRead) -> Result<Instance, ParseError> {
    let mut lines = reader.lines();

    let count: usize = lines
        .next()
        .ok_or_else(|| malformed(1, "missing job count"))??
        .trim()
        .parse()
        .map_err(|_| malformed(1, "invalid job count"))?;

    let mut jobs = Vec::with_capacity(count);
    for index in 0..count {
        let line = index + 2;
        let text = lines
            .next()
            .ok_or_else(|| malformed(line, "missing job"))??;
        let mut parts = text.split_whitespace();

        let deadline = parts
            .next()
            .ok_or_else(|| malformed(line, "missing deadline"))?
            .parse()
            .map_err(|_| malformed(line, "invalid deadline"))?;
        let profit = parts
            .next()
            .ok_or_else(|| malformed(line, "missing profit"))?
            .parse()
            .map_err(|_| malformed(line, "invalid profit"))?;

        if parts.next().is_some() {
            return Err(malformed(line, "trailing data"));
        }

        jobs.push(Job::new(deadline, profit));
    }

    Ok(Instance::new(jobs)?)
}

/// Writes an instance to its text form.
#[must_use]
pub fn to_string(instance: &Instance) -> String {
    let mut result = String::new();
    let _ = writeln!(result, "{}", instance.jobs().len());
    for job in instance.jobs() {
        let _ = writeln!(result, "{} {}", job.deadline, job.profit);
    }
    result
}
