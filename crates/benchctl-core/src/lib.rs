//! benchctl Core Library
//!
//! Orchestration primitives for third-party LLM benchmark CLIs and the
//! artifact summarizer that aggregates their numeric output.

pub mod artifacts;
pub mod error;
pub mod report;
pub mod runner;
pub mod summary;
pub mod telemetry;
pub mod tool;

pub use artifacts::ensure_run_dir;
pub use error::{BenchError, Result};
pub use report::render_summary_table;
pub use runner::{run_tool, RunOutcome, EXIT_NOT_FOUND};
pub use summary::{collect_numeric, summarize, summarize_artifacts, MetricSeries, MetricSummary};
pub use telemetry::init_tracing;
pub use tool::{resolve_on_path, Tool};

/// benchctl version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
