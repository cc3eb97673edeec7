use std::fs;

use assert_cmd::Command;
use criterion_compare::{
    BenchmarkResult,
    bench_utils::{write_criterion_tree, write_estimate},
};
use tempfile::tempdir;

fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_criterion-compare"));
    for key in [
        "CRITERION_BASELINE",
        "CRITERION_CURRENT",
        "CRITERION_REGRESSION_THRESHOLD",
        "GITHUB_STEP_SUMMARY",
        "CRITERION_COMPARE_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

#[test]
fn test_cli_exits_with_success_on_help() {
    let output = cli().arg("--help").output().expect("run");
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: criterion-compare"));
}

#[test]
fn test_cli_usage_error_without_arguments() {
    let output = cli().output().expect("run");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_missing_directory() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("criterion");
    let output = cli().arg(&missing).output().expect("run");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}

#[test]
fn test_cli_reports_regression_with_exit_one() {
    let dir = tempdir().expect("tempdir");
    write_criterion_tree(
        dir.path(),
        &[
            BenchmarkResult::new("a", 100.0, 90.0),
            BenchmarkResult::new("b", 100.0, 110.0),
        ],
        "base",
        "new",
    )
    .expect("fixture");
    let output = cli().arg(dir.path()).output().expect("run");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("| Benchmark | Baseline mean (ns) | Current mean (ns) | Δ% | Status |"));
    assert!(stdout.contains("| a | 100.00 | 90.00 | -10.00% | improved |"));
    assert!(stdout.contains("- b: +10.00% (baseline 100.00 ns -> 110.00 ns)"));
}

#[test]
fn test_cli_threshold_from_environment() {
    let dir = tempdir().expect("tempdir");
    write_criterion_tree(dir.path(), &[BenchmarkResult::new("b", 100.0, 110.0)], "base", "new")
        .expect("fixture");
    let output = cli()
        .arg(dir.path())
        .env("CRITERION_REGRESSION_THRESHOLD", "0.2")
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("| +10.00% | unchanged |"));
}

#[test]
fn test_cli_rejects_invalid_threshold() {
    let dir = tempdir().expect("tempdir");
    let output = cli()
        .arg(dir.path())
        .env("CRITERION_REGRESSION_THRESHOLD", "five percent")
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("CRITERION_REGRESSION_THRESHOLD"));
}

#[test]
fn test_cli_no_benchmarks_found() {
    let dir = tempdir().expect("tempdir");
    write_estimate(dir.path(), "x", "base", 10.0).expect("fixture");
    let output = cli().arg(dir.path()).output().expect("run");
    assert_eq!(output.status.code(), Some(2));
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("No benchmarks found for baseline 'base' and comparison 'new'.")
    );
}

#[test]
fn test_cli_malformed_estimate_names_file() {
    let dir = tempdir().expect("tempdir");
    write_estimate(dir.path(), "x", "base", 10.0).expect("fixture");
    let current = dir.path().join("x").join("new");
    fs::create_dir_all(&current).expect("mkdir");
    fs::write(current.join("estimates.json"), r#"{"Mean": {}}"#).expect("write");
    let output = cli().arg(dir.path()).output().expect("run");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unexpected estimate structure in"));
    assert!(stderr.contains("estimates.json"));
}

#[test]
fn test_cli_appends_step_summary() {
    let dir = tempdir().expect("tempdir");
    let criterion = dir.path().join("criterion");
    write_criterion_tree(&criterion, &[BenchmarkResult::new("s", 100.0, 102.0)], "base", "new")
        .expect("fixture");
    let summary = dir.path().join("step_summary.md");
    fs::write(&summary, "previous content\n").expect("seed");
    let output = cli()
        .arg(&criterion)
        .env("GITHUB_STEP_SUMMARY", &summary)
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(0));
    let contents = fs::read_to_string(&summary).expect("summary");
    assert!(contents.starts_with("previous content\n"));
    assert!(contents.contains("\n### Criterion benchmark comparison\n\n| Benchmark |"));
    assert!(contents.contains("| s | 100.00 | 102.00 | +2.00% | unchanged |"));
}

#[cfg(unix)]
#[test]
fn test_cli_accepts_non_utf8_target_directory() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().expect("tempdir");
    let criterion = dir.path().join(OsStr::from_bytes(b"crit\xff"));
    write_criterion_tree(&criterion, &[BenchmarkResult::new("s", 100.0, 101.0)], "base", "new")
        .expect("fixture");
    let output = cli().arg(&criterion).output().expect("run");
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("| s | 100.00 | 101.00 | +1.00% | unchanged |"));
}

#[test]
fn test_cli_double_dash_before_dash_prefixed_directory() {
    let dir = tempdir().expect("tempdir");
    write_criterion_tree(
        &dir.path().join("-criterion"),
        &[BenchmarkResult::new("s", 100.0, 120.0)],
        "base",
        "new",
    )
    .expect("fixture");
    let output = cli()
        .current_dir(dir.path())
        .args(["--", "-criterion"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("| s | 100.00 | 120.00 | +20.00% | regressed |"));
}
