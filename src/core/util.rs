use super::Job;
use std::cmp::Ordering;

/// Job with its id.
pub type JobWithId = (usize, Job);

/// Compares two jobs by profit, highest first.
/// The order of equal profits is unspecified.
#[must_use]
pub fn profit_comparator(first: &JobWithId, second: &JobWithId) -> Ordering {
    second.1.profit.cmp(&first.1.profit)
}

/// Returns the jobs of an instance paired with their ids, sorted by descending profit.
#[must_use]
pub fn jobs_by_profit(jobs: &[Job]) -> Vec<JobWithId> {
    let mut jobs: Vec<JobWithId> = jobs.iter().copied().enumerate().collect();
    jobs.sort_unstable_by(profit_comparator);
    jobs
}
