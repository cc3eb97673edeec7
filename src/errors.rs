use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("{0}")]
    Usage(String),
    #[error("Criterion directory '{}' does not exist", .0.display())]
    MissingTarget(PathBuf),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("No benchmarks found for baseline '{baseline}' and comparison '{current}'.")]
    NoBenchmarks { baseline: String, current: String },
    #[error("Unexpected estimate structure in {}", .0.display())]
    UnexpectedEstimate(PathBuf),
    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid json in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CompareError {
    pub fn usage<T: Into<String>>(msg: T) -> Self {
        CompareError::Usage(msg.into())
    }

    pub fn invalid_config<T: Into<String>>(msg: T) -> Self {
        CompareError::InvalidConfig(msg.into())
    }

    pub fn no_benchmarks(baseline: &str, current: &str) -> Self {
        CompareError::NoBenchmarks {
            baseline: baseline.to_string(),
            current: current.to_string(),
        }
    }

    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        CompareError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json<P: Into<PathBuf>>(path: P, source: serde_json::Error) -> Self {
        CompareError::Json {
            path: path.into(),
            source,
        }
    }

    /// Every execution failure shares one code so CI can tell it apart from a regression (1).
    pub fn exit_code(&self) -> i32 {
        2
    }
}
