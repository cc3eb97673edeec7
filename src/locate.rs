use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{CompareError, estimates::ESTIMATES_FILE};

/// A benchmark with an estimates file under both snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchPair {
    pub name: String,
    pub baseline_path: PathBuf,
    pub current_path: PathBuf,
}

/// Finds every `<bench>/<baseline>/estimates.json` that has a matching
/// `<bench>/<current>/estimates.json`, sorted by benchmark name.
pub fn find_bench_pairs(
    root: &Path,
    baseline: &str,
    current: &str,
) -> Result<Vec<BenchPair>, CompareError> {
    let mut pairs = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            CompareError::io(path, e.into())
        })?;
        // `is_file` follows symlinks, matching the current-side `exists` check.
        if entry.file_name() != ESTIMATES_FILE || !entry.path().is_file() {
            continue;
        }
        let baseline_path = entry.path();
        let Some(snapshot_dir) = baseline_path.parent() else {
            continue;
        };
        if snapshot_dir.file_name().and_then(|n| n.to_str()) != Some(baseline) {
            continue;
        }
        let Some(bench_root) = snapshot_dir.parent() else {
            continue;
        };
        let current_path = bench_root.join(current).join(ESTIMATES_FILE);
        if !current_path.exists() {
            tracing::debug!(bench = %bench_root.display(), current, "no current snapshot, skipping");
            continue;
        }
        pairs.push(BenchPair {
            name: bench_name(root, bench_root),
            baseline_path: baseline_path.to_path_buf(),
            current_path,
        });
    }
    pairs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(pairs)
}

fn bench_name(root: &Path, bench_root: &Path) -> String {
    let relative = bench_root.strip_prefix(root).unwrap_or(bench_root);
    if relative.as_os_str().is_empty() {
        ".".to_string()
    } else {
        relative.to_string_lossy().into_owned()
    }
}
