use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BenchStatus {
    Improved,
    Regressed,
    Unchanged,
}

impl BenchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BenchStatus::Improved => "improved",
            BenchStatus::Regressed => "regressed",
            BenchStatus::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for BenchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mean estimates of one benchmark under the baseline and current snapshots, in nanoseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkResult {
    pub name: String,
    pub baseline_mean: f64,
    pub current_mean: f64,
}

impl BenchmarkResult {
    pub fn new(name: impl Into<String>, baseline_mean: f64, current_mean: f64) -> Self {
        Self {
            name: name.into(),
            baseline_mean,
            current_mean,
        }
    }

    pub fn delta(&self) -> f64 {
        self.current_mean - self.baseline_mean
    }

    /// Relative change as a fraction of the baseline. A zero baseline yields `+inf`,
    /// which always counts as a regression.
    pub fn percent_change(&self) -> f64 {
        if self.baseline_mean == 0.0 {
            return f64::INFINITY;
        }
        self.delta() / self.baseline_mean
    }

    pub fn status(&self, threshold: f64) -> BenchStatus {
        let change = self.percent_change();
        if change < 0.0 {
            BenchStatus::Improved
        } else if change > threshold {
            BenchStatus::Regressed
        } else {
            BenchStatus::Unchanged
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: {:+.2}% (baseline {:.2} ns -> {:.2} ns)",
            self.name,
            self.percent_change() * 100.0,
            self.baseline_mean,
            self.current_mean
        )
    }
}
