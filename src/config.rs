//! Run configuration gathered from the environment and the command line.

use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

use crate::CompareError;

pub const BASELINE_ENV: &str = "CRITERION_BASELINE";
pub const CURRENT_ENV: &str = "CRITERION_CURRENT";
pub const THRESHOLD_ENV: &str = "CRITERION_REGRESSION_THRESHOLD";
pub const SUMMARY_ENV: &str = "GITHUB_STEP_SUMMARY";

pub const DEFAULT_BASELINE: &str = "base";
pub const DEFAULT_CURRENT: &str = "new";
pub const DEFAULT_THRESHOLD: f64 = 0.05;

/// Snapshot names, regression threshold and optional step summary target.
///
/// `threshold` is a fraction: `0.05` flags anything more than 5% slower.
#[derive(Clone, Debug, PartialEq)]
pub struct CompareConfig {
    pub baseline: String,
    pub current: String,
    pub threshold: f64,
    pub summary_path: Option<PathBuf>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            baseline: DEFAULT_BASELINE.to_string(),
            current: DEFAULT_CURRENT.to_string(),
            threshold: DEFAULT_THRESHOLD,
            summary_path: None,
        }
    }
}

impl CompareConfig {
    pub fn from_env() -> Result<Self, CompareError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; unset keys fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CompareError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let baseline = lookup(BASELINE_ENV).unwrap_or_else(|| DEFAULT_BASELINE.to_string());
        let current = lookup(CURRENT_ENV).unwrap_or_else(|| DEFAULT_CURRENT.to_string());
        let threshold = match lookup(THRESHOLD_ENV) {
            Some(raw) => parse_threshold(&raw)?,
            None => DEFAULT_THRESHOLD,
        };
        let summary_path = lookup(SUMMARY_ENV)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        Ok(Self {
            baseline,
            current,
            threshold,
            summary_path,
        })
    }
}

fn parse_threshold(raw: &str) -> Result<f64, CompareError> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        CompareError::invalid_config(format!("{THRESHOLD_ENV} must be a number, got '{raw}'"))
    })?;
    if value.is_nan() {
        return Err(CompareError::invalid_config(format!(
            "{THRESHOLD_ENV} must not be NaN, got '{raw}'"
        )));
    }
    Ok(value)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandLineConfig {
    Help,
    Compare { target_dir: PathBuf },
}

impl CommandLineConfig {
    /// Parses `argv`, program name first. Arguments after `--` are always positional,
    /// and arguments that are not valid UTF-8 are never treated as flags.
    pub fn from_args<S: AsRef<OsStr>>(args: &[S]) -> Result<Self, CompareError> {
        let mut positional: Vec<&OsStr> = Vec::new();
        let mut flags_done = false;
        for arg in args.iter().skip(1) {
            let arg: &OsStr = arg.as_ref();
            if flags_done {
                positional.push(arg);
                continue;
            }
            match arg.to_str() {
                Some("--") => flags_done = true,
                Some("--help" | "-h") => return Ok(CommandLineConfig::Help),
                Some(other) if other.starts_with('-') && other.len() > 1 => {
                    return Err(CompareError::usage(format!(
                        "unknown flag {other}\n{}",
                        Self::help()
                    )));
                }
                _ => positional.push(arg),
            }
        }
        match positional.as_slice() {
            [target] => Ok(CommandLineConfig::Compare {
                target_dir: PathBuf::from(*target),
            }),
            _ => Err(CompareError::usage(Self::help())),
        }
    }

    pub fn help() -> &'static str {
        "Usage: criterion-compare <criterion-target-dir>"
    }
}
