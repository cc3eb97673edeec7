//! Synthetic Criterion output for benchmarks and tests.

use std::{fs, path::Path};

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde_json::json;

use crate::{BenchmarkResult, CompareError, estimates::ESTIMATES_FILE};

/// Deterministic results with means between 1µs and 1s and changes within ±20%.
pub fn generate_results(count: usize, seed: u64) -> Vec<BenchmarkResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut results: Vec<BenchmarkResult> = (0..count)
        .map(|idx| {
            let baseline = rng.gen_range(1_000.0..1_000_000_000.0);
            let change: f64 = rng.gen_range(-0.2..0.2);
            BenchmarkResult::new(
                format!("group_{}/case_{idx}", idx % 8),
                baseline,
                baseline * (1.0 + change),
            )
        })
        .collect();
    results.sort_by(|a, b| a.name.cmp(&b.name));
    results
}

/// Writes `<root>/<bench>/<snapshot>/estimates.json` in Criterion's layout.
pub fn write_estimate(
    root: &Path,
    bench: &str,
    snapshot: &str,
    mean: f64,
) -> Result<(), CompareError> {
    let dir = root.join(bench).join(snapshot);
    fs::create_dir_all(&dir).map_err(|e| CompareError::io(&dir, e))?;
    let document = json!({
        "mean": {
            "confidence_interval": {
                "confidence_level": 0.95,
                "lower_bound": mean * 0.99,
                "upper_bound": mean * 1.01,
            },
            "point_estimate": mean,
            "standard_error": mean * 0.005,
        },
        "median": { "point_estimate": mean },
    });
    let path = dir.join(ESTIMATES_FILE);
    let data = serde_json::to_vec_pretty(&document).map_err(|e| CompareError::json(&path, e))?;
    fs::write(&path, data).map_err(|e| CompareError::io(&path, e))
}

/// Writes both snapshots of every result, the way `--save-baseline` leaves them.
pub fn write_criterion_tree(
    root: &Path,
    results: &[BenchmarkResult],
    baseline: &str,
    current: &str,
) -> Result<(), CompareError> {
    for result in results {
        write_estimate(root, &result.name, baseline, result.baseline_mean)?;
        write_estimate(root, &result.name, current, result.current_mean)?;
    }
    Ok(())
}
