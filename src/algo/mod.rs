mod branch_bound;
mod greedy;

pub use branch_bound::BranchAndBound;
pub use greedy::Greedy;

/// Registry of all available solvers.
#[linkme::distributed_slice]
pub static SOLVERS: [fn() -> Box<dyn crate::core::Solver>];
