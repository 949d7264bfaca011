//! Artifact summarization: recursive metric collection and statistics.
//!
//! Benchmark frameworks emit result files in whatever nested shape they
//! please. The summarizer flattens every numeric leaf into a dotted-path
//! series (`results.0.accuracy`) and reduces each series to count, mean,
//! min, and max. Aggregation is commutative, so the output is independent
//! of the order in which files are visited.

use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Numeric samples keyed by dotted structural path.
pub type MetricSeries = BTreeMap<String, Vec<f64>>;

/// Descriptive statistics for one metric series.
///
/// Only materialized for series with at least one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSummary {
    /// Number of samples collected across all artifacts.
    pub count: usize,

    /// Arithmetic mean.
    pub mean: f64,

    /// Smallest sample.
    pub min: f64,

    /// Largest sample.
    pub max: f64,
}

impl MetricSummary {
    fn from_samples(samples: &[f64]) -> Option<Self> {
        let first = *samples.first()?;
        let mut min = first;
        let mut max = first;
        let mut sum = 0.0;
        for &sample in samples {
            sum += sample;
            min = min.min(sample);
            max = max.max(sample);
        }
        Some(MetricSummary {
            count: samples.len(),
            mean: sum / samples.len() as f64,
            min,
            max,
        })
    }
}

/// Recursively visit a parsed document, appending numeric leaves to `series`.
///
/// Objects contribute `key.` path segments, arrays contribute the zero-based
/// decimal index. Booleans, strings, and null are dropped silently; only
/// genuine numbers become samples.
pub fn collect_numeric(payload: &Value, prefix: &str, series: &mut MetricSeries) {
    match payload {
        Value::Object(map) => {
            for (key, value) in map {
                collect_numeric(value, &format!("{prefix}{key}."), series);
            }
        }
        Value::Array(items) => {
            for (idx, value) in items.iter().enumerate() {
                collect_numeric(value, &format!("{prefix}{idx}."), series);
            }
        }
        // Value::Number is structurally disjoint from Value::Bool, so the
        // boolean exclusion the data model requires holds by construction.
        Value::Number(num) => {
            if let Some(sample) = num.as_f64() {
                series
                    .entry(prefix.trim_end_matches('.').to_string())
                    .or_default()
                    .push(sample);
            }
        }
        Value::Bool(_) | Value::String(_) | Value::Null => {}
    }
}

/// Scan a directory tree and accumulate metric series from every supported
/// artifact file.
///
/// Malformed or unreadable files are logged and skipped; a single corrupt
/// artifact never aborts the scan. Unsupported extensions are ignored
/// without diagnostics.
pub fn summarize_artifacts(directory: &Path) -> std::io::Result<MetricSeries> {
    let mut series = MetricSeries::new();
    for path in walkdir(directory)? {
        if let Err(err) = collect_file(&path, &mut series) {
            warn!(file = %path.display(), error = %err, "skipping unreadable artifact");
        }
    }
    Ok(series)
}

/// Reduce collected series to per-metric statistics.
pub fn summarize(series: &MetricSeries) -> BTreeMap<String, MetricSummary> {
    series
        .iter()
        .filter_map(|(name, samples)| {
            MetricSummary::from_samples(samples).map(|summary| (name.clone(), summary))
        })
        .collect()
}

/// Parse one artifact file according to its extension.
fn collect_file(path: &Path, series: &mut MetricSeries) -> Result<(), ParseError> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "json" => {
            let content = std::fs::read_to_string(path)?;
            let data: Value = serde_json::from_str(&content)?;
            collect_numeric(&data, "", series);
        }
        "jsonl" => {
            let content = std::fs::read_to_string(path)?;
            for line in content.lines() {
                if line.trim().is_empty() {
                    continue;
                }
                let data: Value = serde_json::from_str(line)?;
                collect_numeric(&data, "", series);
            }
        }
        "yml" | "yaml" => collect_yaml(path, series)?,
        _ => {}
    }
    Ok(())
}

#[cfg(feature = "yaml")]
fn collect_yaml(path: &Path, series: &mut MetricSeries) -> Result<(), ParseError> {
    let content = std::fs::read_to_string(path)?;
    // serde_json::Value deserializes from YAML directly; anchors and tags
    // the JSON model cannot express are rejected as parse errors.
    let data: Value = serde_yaml_ng::from_str(&content)?;
    collect_numeric(&data, "", series);
    Ok(())
}

/// Without the `yaml` feature, YAML artifacts are a silent no-op branch.
#[cfg(not(feature = "yaml"))]
fn collect_yaml(_path: &Path, _series: &mut MetricSeries) -> Result<(), ParseError> {
    Ok(())
}

/// Per-file parse failure, recovered locally by the scan loop.
#[derive(Debug, thiserror::Error)]
enum ParseError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "yaml")]
    #[error("{0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Simple recursive directory walker (no external dependency).
///
/// Enumeration order is whatever the filesystem yields; callers must not
/// depend on it.
fn walkdir(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if dir.is_dir() {
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                files.extend(walkdir(&path)?);
            } else {
                files.push(path);
            }
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collect(value: &Value) -> MetricSeries {
        let mut series = MetricSeries::new();
        collect_numeric(value, "", &mut series);
        series
    }

    #[test]
    fn test_nested_object_paths() {
        let series = collect(&json!({"a": {"b": 1, "c": 2.5}}));

        assert_eq!(series.len(), 2);
        assert_eq!(series["a.b"], vec![1.0]);
        assert_eq!(series["a.c"], vec![2.5]);
    }

    #[test]
    fn test_array_indices_become_path_segments() {
        let series = collect(&json!({"results": [{"accuracy": 0.9}, {"accuracy": 0.7}]}));

        assert_eq!(series["results.0.accuracy"], vec![0.9]);
        assert_eq!(series["results.1.accuracy"], vec![0.7]);
    }

    #[test]
    fn test_booleans_and_strings_excluded() {
        let series = collect(&json!({"flag": true, "name": "ok", "note": null}));
        assert!(series.is_empty());
    }

    #[test]
    fn test_top_level_scalar_uses_empty_path() {
        let series = collect(&json!(42));
        assert_eq!(series[""], vec![42.0]);
    }

    #[test]
    fn test_samples_accumulate_across_documents() {
        let mut series = MetricSeries::new();
        collect_numeric(&json!({"x": 1}), "", &mut series);
        collect_numeric(&json!({"x": 3}), "", &mut series);

        let summaries = summarize(&series);
        let x = &summaries["x"];
        assert_eq!(x.count, 2);
        assert_eq!(x.mean, 2.0);
        assert_eq!(x.min, 1.0);
        assert_eq!(x.max, 3.0);
    }

    #[test]
    fn test_summary_single_sample() {
        let mut series = MetricSeries::new();
        series.insert("a.c".to_string(), vec![2.5]);

        let summaries = summarize(&series);
        assert_eq!(
            summaries["a.c"],
            MetricSummary {
                count: 1,
                mean: 2.5,
                min: 2.5,
                max: 2.5
            }
        );
    }

    #[test]
    fn test_empty_series_not_summarized() {
        let mut series = MetricSeries::new();
        series.insert("phantom".to_string(), vec![]);

        assert!(summarize(&series).is_empty());
    }

    #[test]
    fn test_negative_and_integer_samples() {
        let series = collect(&json!({"delta": [-2, 0, 7]}));

        let summaries = summarize(&series);
        assert_eq!(summaries["delta.0"].min, -2.0);
        assert_eq!(summaries["delta.2"].max, 7.0);
    }
}
