//! External benchmark process execution.

use crate::tool::Tool;
use std::path::Path;
use std::process::Command;
use std::time::Instant;
use tracing::{debug, info};

/// Exit code reported when the tool's executable cannot be found on PATH.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Result of a benchmark tool invocation.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Tool that was invoked.
    pub tool: Tool,

    /// Full command line, argv style.
    pub command: Vec<String>,

    /// Exit code to propagate (child's own code, 0 for dry runs,
    /// [`EXIT_NOT_FOUND`] when the executable is missing).
    pub exit_code: i32,

    /// Whether the child process was actually spawned.
    pub executed: bool,

    /// Wall-clock duration in milliseconds (0 when nothing was spawned).
    pub duration_ms: u64,
}

impl RunOutcome {
    /// Whether the invocation completed with exit code 0.
    pub fn passed(&self) -> bool {
        self.exit_code == 0
    }
}

/// Build and execute a benchmark command, returning the outcome.
///
/// Echoes the resolved invocation before doing anything, so a failed run
/// still leaves a reproducible command line in the output. No timeout is
/// enforced: the child runs to completion or is killed externally.
pub fn run_tool(
    tool: Tool,
    config: &Path,
    model: Option<&str>,
    dry_run: bool,
    extra: &[String],
) -> std::io::Result<RunOutcome> {
    let command = tool.build_command(config, model, extra);

    println!("[benchmark] Tool     : {}", tool);
    println!("[benchmark] Config   : {}", config.display());
    if let Some(model) = model {
        println!("[benchmark] Model    : {}", model);
    }
    println!(
        "[benchmark] Extra    : {}",
        if extra.is_empty() {
            "(none)".to_string()
        } else {
            extra.join(" ")
        }
    );
    println!("[benchmark] Command  : {}", command.join(" "));

    if dry_run {
        println!("[benchmark] Dry run requested. Command not executed.");
        return Ok(RunOutcome {
            tool,
            command,
            exit_code: 0,
            executed: false,
            duration_ms: 0,
        });
    }

    let Some(executable) = tool.resolve_executable() else {
        println!(
            "[benchmark] ERROR    : Executable not found on PATH. \
             Install the relevant framework or run with --dry-run."
        );
        return Ok(RunOutcome {
            tool,
            command,
            exit_code: EXIT_NOT_FOUND,
            executed: false,
            duration_ms: 0,
        });
    };

    debug!(executable = %executable.display(), "resolved tool executable");

    let start = Instant::now();
    let status = Command::new(&command[0]).args(&command[1..]).status()?;
    let duration_ms = start.elapsed().as_millis() as u64;

    // On unix a signal-killed child has no code; report 128+signal so the
    // caller still sees a non-zero exit.
    let exit_code = status.code().unwrap_or_else(|| 128 + signal_of(&status));

    info!(tool = %tool, exit_code, duration_ms, "benchmark run finished");
    println!("[benchmark] Exit code: {}", exit_code);

    Ok(RunOutcome {
        tool,
        command,
        exit_code,
        executed: true,
        duration_ms,
    })
}

#[cfg(unix)]
fn signal_of(status: &std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.signal().unwrap_or(0)
}

#[cfg(not(unix))]
fn signal_of(_status: &std::process::ExitStatus) -> i32 {
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_run_never_spawns() {
        let outcome = run_tool(
            Tool::Helm,
            Path::new("missing-config.yaml"),
            Some("gpt-4"),
            true,
            &[],
        )
        .expect("dry run failed");

        assert!(!outcome.executed);
        assert_eq!(outcome.exit_code, 0);
        assert!(outcome.passed());
    }

    #[test]
    fn test_missing_executable_yields_127() {
        // None of the benchmark frameworks are installed in the test
        // environment, so resolution fails before any spawn.
        let outcome = run_tool(Tool::LmEval, Path::new("c.yaml"), None, false, &[])
            .expect("run failed");

        assert!(!outcome.executed);
        assert_eq!(outcome.exit_code, EXIT_NOT_FOUND);
        assert!(!outcome.passed());
    }

    #[test]
    fn test_dry_run_command_includes_extra_args() {
        let extra = vec!["--limit".to_string(), "10".to_string()];
        let outcome = run_tool(Tool::LmEval, Path::new("c.yaml"), None, true, &extra)
            .expect("dry run failed");
        assert!(outcome.command.ends_with(&extra));
    }
}
