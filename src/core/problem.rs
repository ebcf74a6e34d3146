use serde::{Deserialize, Serialize};

/// A job. Contains the deadline and profit of the job.
/// The profit doubles as the penalty paid when the job finishes late.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Serialize, PartialEq)]
pub struct Job {
    pub deadline: u64,
    pub profit: u64,
}

impl Job {
    /// Creates a new job with the given deadline and profit.
    #[must_use]
    pub const fn new(deadline: u64, profit: u64) -> Self {
        Self { deadline, profit }
    }
}

/// An error describing why a job collection does not form a valid instance.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InstanceError {
    /// The job collection is empty.
    #[error("instance contains no jobs")]
    Empty,
    /// A job has a deadline of zero.
    #[error("job {0} has a deadline of zero")]
    ZeroDeadline(usize),
    /// A job has a profit of zero.
    #[error("job {0} has a profit of zero")]
    ZeroProfit(usize),
}

/// An instance of the job sequencing problem.
/// Holds at least one job, every job with a positive deadline and profit.
#[derive(Clone, Debug, Deserialize, Eq, Serialize, PartialEq)]
#[serde(try_from = "Vec<Job>", into = "Vec<Job>")]
pub struct Instance {
    jobs: Vec<Job>,
}

impl Instance {
    /// Creates a new instance from the given jobs.
    ///
    /// # Errors
    /// - If the job collection is empty.
    /// - If a job has a deadline or profit of zero.
    pub fn new(jobs: Vec<Job>) -> Result<Self, InstanceError> {
        Self::try_from(jobs)
    }

    /// Returns the jobs of the instance.
    #[must_use]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Returns the maximum deadline among all jobs.
    #[must_use]
    pub fn max_deadline(&self) -> u64 {
        self.jobs
            .iter()
            .map(|job| job.deadline)
            .max()
            .unwrap_or_default()
    }
}

impl TryFrom<Vec<Job>> for Instance {
    type Error = InstanceError;

    fn try_from(jobs: Vec<Job>) -> Result<Self, Self::Error> {
        if jobs.is_empty() {
            return Err(InstanceError::Empty);
        }

        for (index, job) in jobs.iter().enumerate() {
            if job.deadline == 0 {
                return Err(InstanceError::ZeroDeadline(index));
            }
            if job.profit == 0 {
                return Err(InstanceError::ZeroProfit(index));
            }
        }

        Ok(Self { jobs })
    }
}

impl From<Instance> for Vec<Job> {
    fn from(instance: Instance) -> Self {
        instance.jobs
    }
}
