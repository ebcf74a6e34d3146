use crate::cast_usize;
use crate::core::{jobs_by_profit, Instance, Solution, Solver};

/// Greedy heuristic for job sequencing with deadlines.
/// Takes jobs by descending profit and puts each into the latest free slot
/// before its deadline, dropping jobs that no longer fit.
pub(super) fn schedule(instance: &Instance) -> Solution<'_> {
    let mut solution = Solution::new(instance);
    let mut occupied = vec![false; cast_usize(instance.max_deadline())];

    for (id, job) in jobs_by_profit(instance.jobs()) {
        let mut slot = cast_usize(job.deadline).min(occupied.len());
        while slot > 0 {
            slot -= 1;
            if !occupied[slot] {
                occupied[slot] = true;
                solution.assign(id, slot);
                break;
            }
        }
    }

    solution
}

/// Greedy profit-first heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl Solver for Greedy {
    fn solve<'a>(&mut self, instance: &'a Instance) -> Solution<'a> {
        schedule(instance)
    }

    fn name(&self) -> &'static str {
        "Greedy"
    }
}

#[allow(unsafe_code)]
#[linkme::distributed_slice(super::SOLVERS)]
static INSTANCE: fn() -> Box<dyn Solver> = || Box::new(Greedy);
