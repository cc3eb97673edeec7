use std::{fs, path::Path};

use serde::Deserialize;
use serde_json::Value;

use crate::CompareError;

/// File Criterion writes for every benchmark snapshot.
pub const ESTIMATES_FILE: &str = "estimates.json";

/// Section names tried in order; older Criterion releases capitalised the key.
pub const MEAN_KEYS: [&str; 2] = ["mean", "Mean"];

#[derive(Clone, Debug, Deserialize, PartialEq)]
struct PointEstimate {
    point_estimate: f64,
}

pub fn read_mean_estimate(path: &Path) -> Result<f64, CompareError> {
    let data = fs::read(path).map_err(|e| CompareError::io(path, e))?;
    let document: Value = serde_json::from_slice(&data).map_err(|e| CompareError::json(path, e))?;
    let mean = mean_estimate(&document)
        .ok_or_else(|| CompareError::UnexpectedEstimate(path.to_path_buf()))?;
    tracing::debug!(path = %path.display(), mean, "read estimate");
    Ok(mean)
}

/// Returns the `point_estimate` of the first `MEAN_KEYS` section that carries one.
pub fn mean_estimate(document: &Value) -> Option<f64> {
    let section = MEAN_KEYS.iter().find_map(|key| {
        document
            .get(key)
            .and_then(Value::as_object)
            .filter(|section| section.contains_key("point_estimate"))
    })?;
    serde_json::from_value::<PointEstimate>(Value::Object(section.clone()))
        .ok()
        .map(|estimate| estimate.point_estimate)
}
