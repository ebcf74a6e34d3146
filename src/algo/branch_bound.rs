use crate::core::{jobs_by_profit, Instance, Job, JobWithId, Solution, Solver};
use crate::{cast_u64, cast_usize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A partial assignment of jobs to time slots.
/// `slots[i]` is the slot of the i-th job in search order, so the
/// search level is always the number of assigned slots.
#[derive(Clone, Debug)]
struct Node {
    penalty: u64,
    slots: Vec<usize>,
}

impl Node {
    const fn root() -> Self {
        Self {
            penalty: 0,
            slots: Vec::new(),
        }
    }

    fn level(&self) -> usize {
        self.slots.len()
    }

    fn is_free(&self, slot: usize) -> bool {
        !self.slots.contains(&slot)
    }

    /// Creates the child node that puts the given job into the given slot.
    /// The job is charged its full profit as penalty when the slot is at
    /// or after its deadline.
    fn child(&self, job: Job, slot: usize) -> Self {
        let mut slots = self.slots.clone();
        slots.push(slot);

        let late = cast_u64(slot) >= job.deadline;
        Self {
            penalty: self.penalty + if late { job.profit } else { 0 },
            slots,
        }
    }
}

/// Frontier entry ordered by the lower bound, lowest first.
/// Ties are broken by insertion order to keep the search deterministic.
struct Entry {
    bound: u64,
    sequence: u64,
    node: Node,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.bound == other.bound && self.sequence == other.sequence
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        match other.bound.cmp(&self.bound) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            order => order,
        }
    }
}

/// Optimistic estimate of the total penalty reachable from the given node.
/// An undecided job contributes its profit only when every slot before its
/// deadline is already taken, so the bound never exceeds the penalty of any
/// complete assignment below the node.
fn lower_bound(jobs: &[JobWithId], node: &Node, slot_count: usize) -> u64 {
    let mut bound = node.penalty;

    for &(_, job) in &jobs[node.level()..] {
        let on_time = cast_usize(job.deadline).min(slot_count);
        if (0..on_time).all(|slot| !node.is_free(slot)) {
            bound += job.profit;
        }
    }

    bound
}

/// Best-first branch and bound minimizing the total penalty of late jobs.
/// Jobs are decided in descending profit order; every node offers the
/// current job each still-free slot. The slot range is extended to the
/// number of jobs when deadlines alone provide too few slots, so a
/// complete assignment always exists.
pub(super) fn schedule(instance: &Instance) -> Solution<'_> {
    let jobs = jobs_by_profit(instance.jobs());
    let slot_count = cast_usize(instance.max_deadline()).max(jobs.len());

    let root = Node::root();
    let mut sequence = 0;
    let mut frontier = BinaryHeap::new();
    frontier.push(Entry {
        bound: lower_bound(&jobs, &root, slot_count),
        sequence,
        node: root,
    });

    // No incumbent yet, every bound beats it.
    let mut best_penalty = u64::MAX;
    let mut best: Option<Node> = None;

    while let Some(Entry { node, .. }) = frontier.pop() {
        if node.level() == jobs.len() {
            if node.penalty < best_penalty {
                best_penalty = node.penalty;
                best = Some(node);
            }
            continue;
        }

        let (_, job) = jobs[node.level()];
        for slot in (0..slot_count).filter(|&slot| node.is_free(slot)) {
            let child = node.child(job, slot);
            let bound = lower_bound(&jobs, &child, slot_count);

            if bound < best_penalty {
                sequence += 1;
                frontier.push(Entry {
                    bound,
                    sequence,
                    node: child,
                });
            }
        }
    }

    let mut solution = Solution::new(instance);
    if let Some(best) = best {
        for (level, slot) in best.slots.into_iter().enumerate() {
            solution.assign(jobs[level].0, slot);
        }
    }
    solution
}

/// Exact best-first branch and bound solver.
#[derive(Clone, Copy, Debug, Default)]
pub struct BranchAndBound;

impl Solver for BranchAndBound {
    fn solve<'a>(&mut self, instance: &'a Instance) -> Solution<'a> {
        schedule(instance)
    }

    fn exact(&self) -> bool {
        true
    }

    fn maximum_jobs(&self) -> usize {
        24
    }

    fn name(&self) -> &'static str {
        "BranchAndBound"
    }
}

#[allow(unsafe_code)]
#[linkme::distributed_slice(super::SOLVERS)]
static INSTANCE: fn() -> Box<dyn Solver> = || Box::new(BranchAndBound);

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::samples;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    fn instance(jobs: Vec<Job>) -> Instance {
        Instance::new(jobs).unwrap_or_else(|error| panic!("valid instance: {error}"))
    }

    fn random_jobs(rng: &mut StdRng, count: usize) -> Vec<Job> {
        (0..count)
            .map(|_| Job::new(rng.gen_range(1..=4), rng.gen_range(1..=20)))
            .collect()
    }

    /// Minimal penalty over every assignment of jobs to distinct slots.
    fn brute_force(jobs: &[Job]) -> u64 {
        fn recurse(jobs: &[Job], level: usize, used: &mut [bool], penalty: u64, best: &mut u64) {
            if level == jobs.len() {
                *best = (*best).min(penalty);
                return;
            }
            for slot in 0..used.len() {
                if !used[slot] {
                    used[slot] = true;
                    let late = cast_u64(slot) >= jobs[level].deadline;
                    let extra = if late { jobs[level].profit } else { 0 };
                    recurse(jobs, level + 1, used, penalty + extra, best);
                    used[slot] = false;
                }
            }
        }

        let max_deadline = jobs.iter().map(|job| job.deadline).max().unwrap_or_default();
        let slot_count = cast_usize(max_deadline).max(jobs.len());
        let mut used = vec![false; slot_count];
        let mut best = u64::MAX;
        recurse(jobs, 0, &mut used, 0, &mut best);
        best
    }

    #[test]
    fn single_job_has_no_penalty() {
        let instance = instance(vec![Job::new(1, 5)]);
        let solution = schedule(&instance);

        assert_eq!(solution.total_penalty(), 0);
        assert_eq!(solution.get(0), Some(0));
    }

    #[test]
    fn conflicting_deadlines_penalize_the_cheaper_job() {
        let instance = instance(vec![Job::new(1, 10), Job::new(1, 3)]);
        let solution = schedule(&instance);

        assert_eq!(solution.total_penalty(), 3);
        assert_eq!(solution.get(0), Some(0));
        assert_eq!(solution.get(1), Some(1));
    }

    #[test]
    fn classic_instance_has_minimal_penalty() {
        let instance = instance(vec![
            Job::new(2, 100),
            Job::new(1, 19),
            Job::new(2, 27),
            Job::new(1, 25),
            Job::new(3, 15),
        ]);

        let solution = schedule(&instance);
        assert_eq!(solution.total_penalty(), 44);
        assert!(solution.verify());
    }

    #[test]
    fn matches_brute_force_on_small_instances() {
        let mut rng = StdRng::seed_from_u64(11);

        for round in 0..40 {
            let count = rng.gen_range(1..=6);
            let jobs = random_jobs(&mut rng, count);
            let instance = instance(jobs.clone());

            let solution = schedule(&instance);

            assert!(solution.verify());
            assert_eq!(
                solution.total_penalty(),
                brute_force(&jobs),
                "round {round}: {jobs:?}"
            );
        }
    }

    #[test]
    fn every_job_receives_a_distinct_slot() {
        let mut rng = StdRng::seed_from_u64(3);
        let jobs = random_jobs(&mut rng, 8);
        let instance = instance(jobs);

        let solution = schedule(&instance);

        assert!(solution.verify());
        assert_eq!(solution.assigned_slots().len(), instance.jobs().len());
    }

    #[test]
    fn bound_never_exceeds_a_reachable_completion() {
        let mut rng = StdRng::seed_from_u64(29);

        for _ in 0..50 {
            let count = rng.gen_range(2..=7);
            let jobs = jobs_by_profit(&random_jobs(&mut rng, count));

            let max_deadline = jobs
                .iter()
                .map(|(_, job)| job.deadline)
                .max()
                .unwrap_or_default();
            let slot_count = cast_usize(max_deadline).max(jobs.len());

            let mut slots: Vec<usize> = (0..slot_count).collect();
            slots.shuffle(&mut rng);

            // Build a random partial assignment as a chain of child nodes.
            let prefix = rng.gen_range(0..jobs.len());
            let mut node = Node::root();
            for level in 0..prefix {
                node = node.child(jobs[level].1, slots[level]);
            }

            let bound = lower_bound(&jobs, &node, slot_count);

            // Any completion of the prefix must cost at least the bound.
            let mut completion = node.clone();
            for level in prefix..jobs.len() {
                completion = completion.child(jobs[level].1, slots[level]);
            }
            assert!(bound <= completion.penalty);
        }
    }

    #[test]
    fn node_level_tracks_assigned_slots() {
        let job = Job::new(2, 10);
        let node = Node::root().child(job, 0).child(job, 3);

        assert_eq!(node.level(), 2);
        assert_eq!(node.penalty, 10);
        assert!(node.is_free(1) && !node.is_free(3));
    }

    #[test]
    fn test_branch_and_bound() {
        assert!(samples(true, &mut BranchAndBound).is_ok());
    }
}
