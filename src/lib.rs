//! Compare two Criterion baselines and flag performance regressions.
//!
//! Point the tool at a `target/criterion` directory after running
//! `cargo bench -- --save-baseline base` and `cargo bench -- --save-baseline new`.
//! Each benchmark's mean estimate is read from both snapshots, the relative change is
//! rendered as a markdown table, and [`RunOutcome::exit_code`] reports whether any
//! benchmark slowed down by more than the configured threshold.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use criterion_compare::{CompareConfig, run};
//!
//! let config = CompareConfig::from_env()?;
//! let outcome = run(Path::new("target/criterion"), &config, &mut std::io::stdout())?;
//! std::process::exit(outcome.exit_code());
//! # Ok::<(), criterion_compare::CompareError>(())
//! ```

pub mod bench_meta;
pub mod bench_regression;
pub mod bench_utils;
pub mod config;
pub mod errors;
pub mod estimates;
pub mod locate;
pub mod report;

use std::{io::Write, path::Path};

pub use crate::bench_meta::{BenchStatus, BenchmarkResult};
pub use crate::bench_regression::{BenchGate, BenchGateConfig, BenchOutcome};
pub use crate::config::{CommandLineConfig, CompareConfig};
pub use crate::errors::CompareError;

#[derive(Clone, Debug, PartialEq)]
pub enum RunOutcome {
    Passed,
    Regressed(Vec<BenchmarkResult>),
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Passed => 0,
            RunOutcome::Regressed(_) => 1,
        }
    }
}

/// Reads both snapshots of every comparable benchmark under `root`, sorted by name.
///
/// Any unreadable or malformed estimates file aborts the whole collection.
pub fn collect_results(
    root: &Path,
    config: &CompareConfig,
) -> Result<Vec<BenchmarkResult>, CompareError> {
    locate::find_bench_pairs(root, &config.baseline, &config.current)?
        .into_iter()
        .map(|pair| {
            let baseline_mean = estimates::read_mean_estimate(&pair.baseline_path)?;
            let current_mean = estimates::read_mean_estimate(&pair.current_path)?;
            Ok(BenchmarkResult::new(pair.name, baseline_mean, current_mean))
        })
        .collect()
}

pub fn run<W: Write>(
    target_dir: &Path,
    config: &CompareConfig,
    out: &mut W,
) -> Result<RunOutcome, CompareError> {
    if !target_dir.exists() {
        return Err(CompareError::MissingTarget(target_dir.to_path_buf()));
    }
    let results = collect_results(target_dir, config)?;
    if results.is_empty() {
        return Err(CompareError::no_benchmarks(&config.baseline, &config.current));
    }

    let table = report::render_table(&results, config.threshold);
    writeln!(out, "{table}").map_err(|e| CompareError::io("<stdout>", e))?;
    if let Some(path) = &config.summary_path {
        report::append_step_summary(path, &table)?;
    }

    let gate = BenchGate::new(BenchGateConfig {
        threshold: config.threshold,
    });
    match gate.evaluate(&results) {
        BenchOutcome::Pass => Ok(RunOutcome::Passed),
        BenchOutcome::Fail(regressions) => {
            writeln!(out, "{}", report::render_regressions(&regressions))
                .map_err(|e| CompareError::io("<stdout>", e))?;
            Ok(RunOutcome::Regressed(regressions))
        }
    }
}
