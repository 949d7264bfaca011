//! Benchmark tool profiles and command construction.

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported benchmarking frameworks.
///
/// The profile set is small and static, so it is a closed enum rather than a
/// runtime-keyed table. Each variant knows how its CLI accepts a config path
/// and a model identifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// oaieval run <config> --model <id>
    OpenaiEvals,

    /// helm-run --config <path> --model <id>
    Helm,

    /// lm_eval --config <path> --model <id>
    LmEval,
}

impl Tool {
    /// All supported tools, in display order.
    pub const ALL: [Tool; 3] = [Tool::Helm, Tool::LmEval, Tool::OpenaiEvals];

    /// Get the tool name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Tool::OpenaiEvals => "openai-evals",
            Tool::Helm => "helm",
            Tool::LmEval => "lm-eval",
        }
    }

    /// Leading argv for the tool's CLI (first element is the executable).
    pub fn executable(&self) -> Vec<String> {
        match self {
            Tool::OpenaiEvals => vec!["oaieval".to_string(), "run".to_string()],
            Tool::Helm => vec!["helm-run".to_string()],
            Tool::LmEval => vec!["lm_eval".to_string()],
        }
    }

    /// Flag used to pass the config path, or `None` for a bare positional.
    pub fn config_flag(&self) -> Option<&'static str> {
        match self {
            Tool::OpenaiEvals => None,
            Tool::Helm | Tool::LmEval => Some("--config"),
        }
    }

    /// Flag used to pass the model identifier.
    pub fn model_flag(&self) -> &'static str {
        "--model"
    }

    /// Construct the full command line for a run.
    ///
    /// Order: executable argv, config (flagged or positional), model flag and
    /// value only when a model is supplied, then passthrough args verbatim.
    pub fn build_command(&self, config: &Path, model: Option<&str>, extra: &[String]) -> Vec<String> {
        let mut command = self.executable();

        match self.config_flag() {
            Some(flag) => {
                command.push(flag.to_string());
                command.push(config.display().to_string());
            }
            None => command.push(config.display().to_string()),
        }

        if let Some(model) = model {
            command.push(self.model_flag().to_string());
            command.push(model.to_string());
        }

        command.extend(extra.iter().cloned());
        command
    }

    /// Locate this tool's executable on `PATH` without executing it.
    pub fn resolve_executable(&self) -> Option<PathBuf> {
        let argv = self.executable();
        resolve_on_path(&argv[0])
    }
}

impl FromStr for Tool {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Tool> {
        match s {
            "openai-evals" => Ok(Tool::OpenaiEvals),
            "helm" => Ok(Tool::Helm),
            "lm-eval" => Ok(Tool::LmEval),
            other => Err(BenchError::UnknownTool {
                name: other.to_string(),
                supported: Tool::ALL
                    .iter()
                    .map(|t| t.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Walk `PATH` looking for an executable file with the given name.
pub fn resolve_on_path(name: &str) -> Option<PathBuf> {
    // Absolute or relative paths bypass the PATH search.
    if name.contains(std::path::MAIN_SEPARATOR) {
        let candidate = PathBuf::from(name);
        return is_executable(&candidate).then_some(candidate);
    }

    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_names() {
        assert_eq!(Tool::OpenaiEvals.name(), "openai-evals");
        assert_eq!(Tool::Helm.name(), "helm");
        assert_eq!(Tool::LmEval.name(), "lm-eval");
    }

    #[test]
    fn test_parse_round_trips() {
        for tool in Tool::ALL {
            assert_eq!(tool.name().parse::<Tool>().unwrap(), tool);
        }
    }

    #[test]
    fn test_unknown_tool_rejected() {
        let err = "bigbench".parse::<Tool>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("bigbench"), "unexpected error: {msg}");
        assert!(msg.contains("helm"), "should list supported tools: {msg}");
    }

    #[test]
    fn test_positional_config_without_model() {
        let cmd = Tool::OpenaiEvals.build_command(Path::new("suite.yaml"), None, &[]);
        assert_eq!(cmd, vec!["oaieval", "run", "suite.yaml"]);
        assert!(!cmd.contains(&"--model".to_string()));
    }

    #[test]
    fn test_flagged_config_with_model() {
        let cmd = Tool::Helm.build_command(Path::new("conf/helm.yaml"), Some("gpt-4"), &[]);
        assert_eq!(cmd, vec!["helm-run", "--config", "conf/helm.yaml", "--model", "gpt-4"]);
    }

    #[test]
    fn test_model_flag_follows_designated_position() {
        let cmd = Tool::LmEval.build_command(Path::new("c.yaml"), Some("llama-3"), &[]);
        let flag_idx = cmd.iter().position(|a| a == "--model").unwrap();
        assert_eq!(cmd[flag_idx + 1], "llama-3");
    }

    #[test]
    fn test_extra_args_appended_verbatim() {
        let extra = vec!["--num-fewshot".to_string(), "5".to_string()];
        let cmd = Tool::LmEval.build_command(Path::new("c.yaml"), None, &extra);
        assert_eq!(&cmd[cmd.len() - 2..], &extra[..]);
    }

    #[test]
    fn test_resolve_on_path_finds_common_binary() {
        // sh is present on every unix PATH
        assert!(resolve_on_path("sh").is_some());
    }

    #[test]
    fn test_resolve_on_path_misses_nonexistent() {
        assert!(resolve_on_path("benchctl-definitely-not-a-binary").is_none());
    }
}
