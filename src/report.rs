//! Markdown rendering of comparison results.

use std::{fs::OpenOptions, io::Write, path::Path};

use crate::{CompareError, bench_meta::BenchmarkResult};

pub const SUMMARY_HEADING: &str = "### Criterion benchmark comparison";
pub const REGRESSIONS_HEADER: &str = "Detected performance regressions exceeding threshold:";

const TABLE_HEADER: &str = "| Benchmark | Baseline mean (ns) | Current mean (ns) | Δ% | Status |";
const TABLE_RULE: &str = "|-----------|--------------------|-------------------|----|--------|";

/// Two decimals with `,` grouping the integer digits, e.g. `1,234,567.89`.
pub fn format_ns(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value:.2}");
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() {
        grouped.push('-');
    }
    for (idx, digit) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(frac_part);
    grouped
}

pub fn render_table(results: &[BenchmarkResult], threshold: f64) -> String {
    let mut lines = Vec::with_capacity(results.len() + 2);
    lines.push(TABLE_HEADER.to_string());
    lines.push(TABLE_RULE.to_string());
    for result in results {
        lines.push(format!(
            "| {} | {} | {} | {:+.2}% | {} |",
            result.name,
            format_ns(result.baseline_mean),
            format_ns(result.current_mean),
            result.percent_change() * 100.0,
            result.status(threshold)
        ));
    }
    lines.join("\n")
}

/// Blank line, header, then one `- summary` line per regression.
pub fn render_regressions(regressions: &[BenchmarkResult]) -> String {
    let mut out = format!("\n{REGRESSIONS_HEADER}");
    for result in regressions {
        out.push_str("\n- ");
        out.push_str(&result.summary());
    }
    out
}

/// Appends the table under a heading, keeping whatever the file already holds.
pub fn append_step_summary(path: &Path, table: &str) -> Result<(), CompareError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CompareError::io(path, e))?;
    write!(file, "\n{SUMMARY_HEADING}\n\n{table}\n").map_err(|e| CompareError::io(path, e))?;
    tracing::info!(path = %path.display(), "appended comparison to step summary");
    Ok(())
}
