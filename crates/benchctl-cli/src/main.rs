//! benchctl - benchmark orchestration CLI
//!
//! Wraps the command-line interfaces of OpenAI Evals, HELM, and LM Eval
//! Harness so benchmark runs can be orchestrated from a single entry point.
//!
//! ## Commands
//!
//! - `run`: Execute a benchmark tool against a config, under a timestamped
//!   run directory
//! - `summarize`: Aggregate numeric metrics from an artifact directory into
//!   a compact report

use anyhow::Result;
use benchctl_core::{BenchError, Tool};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "benchctl")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run and summarize LLM benchmark suites", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a benchmark run
    Run {
        /// Benchmark tool to invoke (openai-evals, helm, lm-eval)
        #[arg(short, long)]
        tool: String,

        /// Path to the tool's config file
        #[arg(short, long)]
        config: PathBuf,

        /// Model identifier to pass through to the tool
        #[arg(short, long)]
        model: Option<String>,

        /// Print the command without executing it
        #[arg(long)]
        dry_run: bool,

        /// Base directory for storing run outputs
        #[arg(long, default_value = "artifacts")]
        artifacts: PathBuf,

        /// Additional CLI args forwarded to the tool verbatim
        #[arg(long, num_args = 0.., allow_hyphen_values = true)]
        extra: Vec<String>,
    },

    /// Summarize numeric metrics from artifacts
    Summarize {
        /// Artifact directory to summarize
        directory: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    benchctl_core::init_tracing(cli.json, level);

    let exit_code = match cli.command {
        Commands::Run {
            tool,
            config,
            model,
            dry_run,
            artifacts,
            extra,
        } => cmd_run(&tool, &config, model.as_deref(), dry_run, &artifacts, &extra)?,
        Commands::Summarize { directory } => cmd_summarize(&directory)?,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

/// Execute a benchmark run, returning the exit code to propagate.
///
/// The tool name and config path are validated before any side effect; only
/// then is the timestamped run directory created.
fn cmd_run(
    tool_name: &str,
    config: &Path,
    model: Option<&str>,
    dry_run: bool,
    artifacts: &Path,
    extra: &[String],
) -> Result<i32> {
    let tool: Tool = tool_name.parse()?;

    if !config.exists() {
        return Err(BenchError::ConfigNotFound(config.to_path_buf()).into());
    }

    let run_dir = benchctl_core::ensure_run_dir(artifacts, tool)?;
    println!("[benchmark] Outputs will be saved under: {}", run_dir.display());

    let outcome = benchctl_core::run_tool(tool, config, model, dry_run, extra)?;
    Ok(outcome.exit_code)
}

/// Scan an artifact directory and print the metric summary table.
///
/// Always returns exit code 0 once the scan completes; per-file parse
/// failures are logged, not escalated.
fn cmd_summarize(directory: &Path) -> Result<i32> {
    if !directory.is_dir() {
        return Err(BenchError::ArtifactsDirNotFound(directory.to_path_buf()).into());
    }

    let series = benchctl_core::summarize_artifacts(directory)?;
    let summary = benchctl_core::summarize(&series);

    info!(
        metrics = summary.len(),
        directory = %directory.display(),
        "artifact scan complete"
    );

    println!("{}", benchctl_core::render_summary_table(&summary));
    Ok(0)
}
