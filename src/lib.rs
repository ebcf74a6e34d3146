#![deny(clippy::all, clippy::cargo, clippy::expect_used, clippy::unwrap_used)]
#![deny(clippy::pedantic, clippy::nursery, unsafe_code)]
#![warn(clippy::unimplemented, clippy::redundant_type_annotations)]

use anyhow::Result;
use std::io::BufRead;

pub mod algo;
pub mod core;
pub mod data;

/// Runs the given solver on the instance read from reader and writes the solution to stdout.
/// Also writes the total profit and penalty to stdout.
///
/// # Errors
/// - If the instance could not be read from the reader.
///
/// # Panics
/// - If the solution is invalid in debug mode.
pub fn run_reader(solver: &mut dyn core::Solver, reader: &mut impl BufRead) -> Result<()> {
    let instance = data::deserialize(reader)?;
    let solution = solver.solve(&instance);

    debug_assert!(solution.verify(), "Solution is invalid: {solution:?}");

    println!("{solution}");
    println!("profit: {}", solution.total_profit());
    println!("penalty: {}", solution.total_penalty());

    Ok(())
}

/// Schedules the given jobs with the greedy heuristic and returns the total profit
/// of all jobs completed strictly before their deadline.
///
/// # Errors
/// - If the job collection is empty or contains a job with zero deadline or profit.
pub fn greedy_schedule(jobs: Vec<core::Job>) -> Result<u64, core::InstanceError> {
    let instance = core::Instance::new(jobs)?;
    let mut solver = algo::Greedy;
    let solution = core::Solver::solve(&mut solver, &instance);
    Ok(solution.total_profit())
}

/// Finds the minimal total penalty of late jobs with branch and bound.
/// Returns the penalty together with the set of time slots used by the optimal assignment.
///
/// # Errors
/// - If the job collection is empty or contains a job with zero deadline or profit.
pub fn branch_and_bound_schedule(
    jobs: Vec<core::Job>,
) -> Result<(u64, ahash::HashSet<usize>), core::InstanceError> {
    let instance = core::Instance::new(jobs)?;
    let mut solver = algo::BranchAndBound;
    let solution = core::Solver::solve(&mut solver, &instance);
    Ok((solution.total_penalty(), solution.assigned_slots()))
}

#[cfg(not(target_pointer_width = "64"))]
compile_error!("Must be 64-bit system!");

/// Casts the given value to `usize`.
/// It should never fail on 64-bit systems.
///
/// # Panics
/// - If the value cannot be cast to `usize`.
#[must_use]
pub fn cast_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or_else(|_| unreachable!("Must be 64-bit system!"))
}

/// Casts the given value to `u64`.
/// It should never fail on 64-bit systems.
///
/// # Panics
/// - If the value cannot be cast to `u64`.
#[must_use]
pub fn cast_u64(value: usize) -> u64 {
    u64::try_from(value).unwrap_or_else(|_| unreachable!("Must be 64-bit system!"))
}
