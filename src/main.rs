use clap::{Parser, ValueEnum};
use job_sequencing_with_deadlines::core::{Instance, Job, Solver};
use job_sequencing_with_deadlines::{algo, data, run_reader};
use rand::prelude::*;
use std::io::Write;
use std::num::NonZero;

#[derive(Copy, Clone, Debug)]
struct Algorithm(usize, &'static str);

impl From<Algorithm> for Box<dyn Solver> {
    fn from(value: Algorithm) -> Box<dyn Solver> {
        algo::SOLVERS[value.0]()
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.1)
    }
}

impl ValueEnum for Algorithm {
    fn value_variants<'a>() -> &'a [Self] {
        static ALGORITHMS: std::sync::LazyLock<Vec<Algorithm>> = std::sync::LazyLock::new(|| {
            let iter = algo::SOLVERS.iter().enumerate();
            iter.map(|(i, init)| Algorithm(i, init().name())).collect()
        });

        ALGORITHMS.as_slice()
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.1))
    }
}

/// Application solving the job sequencing with deadlines problem.
#[derive(Debug, Parser)]
enum Application {
    /// Run one of the implemented algorithms on an instance read from stdin.
    Run { algorithm: Algorithm },
    /// Run benchmarks on a set of instances.
    Bench {
        /// The input directory.
        input: String,
        /// Exclude solving algorithms.
        #[clap(short, long, value_delimiter = ',')]
        exclude: Vec<Algorithm>,
    },
    /// Generate test cases for the scheduling problem.
    Gen {
        /// The number of jobs.
        jobs: NonZero<usize>,
        /// The maximum deadline of a job.
        max_deadline: NonZero<u64>,
        /// The maximum profit of a job.
        max_profit: NonZero<u64>,
        /// Number of test cases to generate.
        #[clap(short, long, default_value = "1")]
        amount: NonZero<u64>,
        /// Path to output the generated instances. If the directory does not exist, it will be created.
        #[clap(short, long, default_value = "output")]
        output: String,
    },
}

fn solvers(exclude: &[Algorithm]) -> impl Iterator<Item = Box<dyn Solver>> + '_ {
    let iter = algo::SOLVERS.iter().map(|init| init());
    iter.filter(|solver| !exclude.iter().any(|name| name.1 == solver.name()))
}

fn gen_jobs(count: usize, max_deadline: u64, max_profit: u64) -> Vec<Job> {
    let mut rng = thread_rng();
    let mut jobs = Vec::with_capacity(count);
    for _ in 0..count {
        let deadline = rng.gen_range(1..=max_deadline);
        let profit = rng.gen_range(1..=max_profit);
        jobs.push(Job::new(deadline, profit));
    }
    jobs
}

fn main() -> anyhow::Result<()> {
    match Application::parse() {
        Application::Run { algorithm } => {
            let mut solver = Box::<dyn Solver>::from(algorithm);
            run_reader(solver.as_mut(), &mut std::io::stdin().lock())
        }
        Application::Bench { input, exclude } => {
            for mut solver in solvers(&exclude) {
                println!("{}", data::run(&input, false, solver.as_mut())?);
            }
            Ok(())
        }
        Application::Gen {
            jobs,
            max_deadline,
            max_profit,
            amount,
            output,
        } => {
            let jobs = jobs.get();

            let output = std::path::Path::new(&output);
            if !output.try_exists()? {
                std::fs::create_dir_all(output)?;
            }

            for i in 0..amount.get() {
                let instance =
                    Instance::new(gen_jobs(jobs, max_deadline.get(), max_profit.get()))?;
                let filename = format!("{jobs}_0_{i}.in");
                std::fs::File::create(output.join(filename))?
                    .write_all(data::to_string(&instance).as_bytes())?;
            }
            Ok(())
        }
    }
}
