use crate::core::Solver;
use crate::data::deserialize;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use std::fs::File;
use std::io::BufReader;

/// Report of running a directory of instances.
#[derive(Debug, Deserialize, Serialize)]
pub struct Report {
    solver: String,
    entries: Vec<ReportEntry>,
}

impl Report {
    /// Create a new report.
    fn new(solver: String) -> Self {
        let entries = Vec::new();
        Self { solver, entries }
    }

    /// Get the solver name.
    #[must_use]
    pub fn solver_name(&self) -> &str {
        &self.solver
    }

    /// Get the entries.
    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Solver: {}", self.solver)?;
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        writeln!(f, "-------------------")
    }
}

/// Report of running a single instance.
#[non_exhaustive]
#[derive(Debug, Deserialize, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub profit: u64,
    pub penalty: u64,
    pub time: f64,
}

impl Display for ReportEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}: profit {} penalty {} in {:.2} sec",
            self.name, self.profit, self.penalty, self.time
        )
    }
}

/// Run all instances in the `samples` directory.
/// Print the report to stdout.
///
/// # Arguments
/// - `valid` is true, check the penalty of exact solvers against the recorded optimum.
/// - `solver` is the solver to run.
///
/// # Errors
/// - If a file cannot be read.
/// - If no instances are found.
///
/// # Panics
/// - If the solution is invalid.
/// - If the penalty is incorrect and `valid` is true.
pub fn samples(valid: bool, solver: &mut dyn Solver) -> anyhow::Result<()> {
    run("samples", valid, solver).and_then(|report| {
        if report.entries.is_empty() {
            Err(anyhow!("No samples found"))
        } else {
            println!("{report}");
            Ok(())
        }
    })
}

/// Run all instances in the `dir` directory.
/// Instances with more jobs than the solver can handle are skipped.
///
/// # Arguments
/// - `valid` is true, check the penalty of exact solvers against the recorded optimum.
/// - `solver` is the solver to run.
///
/// # Errors
/// - If a file cannot be read.
///
/// # Panics
/// - If the solution is invalid.
/// - If the penalty is incorrect and `valid` is true.
pub fn run(dir: &str, valid: bool, solver: &mut dyn Solver) -> anyhow::Result<Report> {
    let mut report = Report::new(solver.name().into());

    for file in std::fs::read_dir(dir)? {
        let file = file?;
        let (name, jobs, optimum) = parse_filename(&file.file_name())?;

        if jobs <= solver.maximum_jobs() {
            let instance = deserialize(&mut BufReader::new(File::open(file.path())?))?;

            let time = std::time::Instant::now();
            let solution = solver.solve(&instance);
            let time = time.elapsed().as_secs_f64();

            assert!(solution.verify(), "Invalid solution created");

            let profit = solution.total_profit();
            let penalty = solution.total_penalty();
            if valid && solver.exact() {
                assert_eq!(penalty, optimum, "Invalid penalty {name}");
            }

            report.entries.push(ReportEntry {
                name,
                profit,
                penalty,
                time,
            });
        }
    }

    Ok(report)
}

fn parse_filename(filename: &std::ffi::OsString) -> anyhow::Result<(String, usize, u64)> {
    static NAME_ERR: &str = "Cannot read filename";

    let name = filename.to_str().ok_or_else(|| anyhow!(NAME_ERR))?;
    let mut parts = name.split('.');
    let mut parts = parts.next().ok_or_else(|| anyhow!(NAME_ERR))?.split('_');
    let jobs = parts.next().ok_or_else(|| anyhow!(NAME_ERR))?.parse()?;
    let optimum = parts.next().ok_or_else(|| anyhow!(NAME_ERR))?.parse()?;
    let _: usize = parts.next().ok_or_else(|| anyhow!(NAME_ERR))?.parse()?;
    Ok((name.into(), jobs, optimum))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_filename() -> anyhow::Result<()> {
        let filename = "10_1234_0.in".into();
        let (name, jobs, optimum) = parse_filename(&filename)?;
        assert_eq!(name, "10_1234_0.in");
        assert_eq!(jobs, 10);
        assert_eq!(optimum, 1234);

        let filename = "2_14_2.in".into();
        let (name, jobs, optimum) = parse_filename(&filename)?;
        assert_eq!(name, "2_14_2.in");
        assert_eq!(jobs, 2);
        assert_eq!(optimum, 14);
        Ok(())
    }

    #[test]
    fn test_parse_filename_errors() {
        assert!(parse_filename(&"".into()).is_err());
        assert!(parse_filename(&".in".into()).is_err());
        assert!(parse_filename(&"10.in".into()).is_err());
        assert!(parse_filename(&"10_1234.in".into()).is_err());
        assert!(parse_filename(&"10_1a234_0.in".into()).is_err());
        assert!(parse_filename(&"1a0_1234_0.in".into()).is_err());
        assert!(parse_filename(&"10_1234_0a2.in".into()).is_err());
    }
}
