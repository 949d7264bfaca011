//! Summary table rendering.

use crate::summary::MetricSummary;
use std::collections::BTreeMap;

/// Render per-metric statistics as a fixed-width table.
///
/// Rows are sorted lexicographically by metric path (the map is already
/// ordered). An empty summary renders an explicit notice instead of a bare
/// header.
pub fn render_summary_table(summary: &BTreeMap<String, MetricSummary>) -> String {
    if summary.is_empty() {
        return "[summarize] No numeric metrics discovered in artifacts.".to_string();
    }

    let header = format!(
        "{:40} | {:>5} | {:>8} | {:>8} | {:>8}",
        "Metric", "Count", "Mean", "Min", "Max"
    );

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.len()));

    for (name, stats) in summary {
        out.push('\n');
        out.push_str(&format!(
            "{:40} | {:>5} | {:>8.3} | {:>8.3} | {:>8.3}",
            name, stats.count, stats.mean, stats.min, stats.max
        ));
    }

    out
}
