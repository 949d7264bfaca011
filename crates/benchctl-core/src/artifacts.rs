//! Run-directory management for benchmark outputs.

use crate::tool::Tool;
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Timestamp layout for run directories, one-second resolution.
const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Create `<base>/<tool>/<UTC timestamp>` and return it.
///
/// Creation is idempotent (parents included). Two invocations landing in the
/// same second share a directory; last writer wins.
pub fn ensure_run_dir(base: &Path, tool: Tool) -> std::io::Result<PathBuf> {
    let timestamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();
    let run_dir = base.join(tool.name()).join(timestamp);
    std::fs::create_dir_all(&run_dir)?;
    Ok(run_dir)
}
