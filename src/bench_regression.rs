use crate::bench_meta::BenchmarkResult;

#[derive(Clone, Debug, PartialEq)]
pub struct BenchGateConfig {
    pub threshold: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BenchOutcome {
    Pass,
    Fail(Vec<BenchmarkResult>),
}

/// Decides the run's exit status. Independent of `BenchmarkResult::status`, which only
/// labels rows for display.
#[derive(Clone, Debug)]
pub struct BenchGate {
    threshold: f64,
}

impl BenchGate {
    pub fn new(config: BenchGateConfig) -> Self {
        Self {
            threshold: config.threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn evaluate(&self, results: &[BenchmarkResult]) -> BenchOutcome {
        let regressions: Vec<BenchmarkResult> = results
            .iter()
            .filter(|result| result.percent_change() > self.threshold)
            .cloned()
            .collect();
        if regressions.is_empty() {
            BenchOutcome::Pass
        } else {
            BenchOutcome::Fail(regressions)
        }
    }
}
