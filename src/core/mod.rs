mod problem;
mod solution;
mod util;

pub use problem::*;
pub use solution::*;
pub use util::*;

/// Solves instances of the job sequencing with deadlines problem.
pub trait Solver {
    /// Assigns the jobs of the given instance to time slots.
    fn solve<'a>(&mut self, instance: &'a Instance) -> Solution<'a>;

    /// Returns whether the solver guarantees a minimal total penalty.
    fn exact(&self) -> bool {
        false
    }

    /// Returns the maximum number of jobs the solver can handle.
    fn maximum_jobs(&self) -> usize {
        usize::MAX
    }

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}
