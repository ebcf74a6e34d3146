use super::Instance;
use crate::cast_u64;
use ahash::{HashSet, HashSetExt};
use std::fmt::{Display, Formatter};

/// An assignment of jobs to time slots.
/// A job without a slot was dropped by the solver and counts as late.
#[derive(Clone, Debug)]
pub struct Solution<'a> {
    instance: &'a Instance,
    slots: Vec<Option<usize>>,
}

impl<'a> Solution<'a> {
    /// Creates an empty solution with no job assigned.
    #[must_use]
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            slots: vec![None; instance.jobs().len()],
        }
    }

    /// Assigns the given job to the given time slot.
    pub fn assign(&mut self, job: usize, slot: usize) {
        self.slots[job] = Some(slot);
    }

    /// Returns the slot of the given job, if any.
    #[must_use]
    pub fn get(&self, job: usize) -> Option<usize> {
        self.slots[job]
    }

    /// Returns the total profit of all jobs completed strictly before their deadline.
    #[must_use]
    pub fn total_profit(&self) -> u64 {
        self.instance
            .jobs()
            .iter()
            .zip(&self.slots)
            .filter_map(|(job, slot)| slot.map(|slot| (job, slot)))
            .filter(|&(job, slot)| cast_u64(slot) < job.deadline)
            .map(|(job, _)| job.profit)
            .sum()
    }

    /// Returns the total penalty of all jobs that are unassigned
    /// or assigned at or after their deadline.
    /// Every job either earns its profit or pays it as penalty.
    #[must_use]
    pub fn total_penalty(&self) -> u64 {
        let total: u64 = self.instance.jobs().iter().map(|job| job.profit).sum();
        total - self.total_profit()
    }

    /// Returns the set of time slots used by the solution.
    #[must_use]
    pub fn assigned_slots(&self) -> HashSet<usize> {
        self.slots.iter().copied().flatten().collect()
    }

    /// Returns whether the solution is valid, i.e. no slot is used twice.
    #[must_use]
    pub fn verify(&self) -> bool {
        let mut seen = HashSet::new();
        self.slots
            .iter()
            .copied()
            .flatten()
            .all(|slot| seen.insert(slot))
    }
}

impl Display for Solution<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (job, slot) in self.slots.iter().enumerate() {
            if job > 0 {
                write!(f, " ")?;
            }
            if let Some(slot) = slot {
                write!(f, "{slot}")?;
            } else {
                write!(f, "-")?;
            }
        }
        Ok(())
    }
}
