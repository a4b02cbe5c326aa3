//! Shell command execution.
//!
//! Version-extraction commands are opaque shell pipelines, so they run
//! through `sh -c` rather than being split into argv ourselves. The exit
//! status is captured but deliberately never treated as failure: many of
//! the catalog tools print their version to stderr and exit non-zero.

use crate::error::{DxverError, Result};
use std::process::{Command, Stdio};

/// Result of running one version-extraction command.
#[derive(Debug, Clone)]
pub struct CaptureResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Combined stdout and stderr text, trailing newline stripped.
    pub output: String,
}

impl CaptureResult {
    /// Whether the command exited 0. Informational only.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Run a shell command, capturing combined stdout and stderr.
///
/// Only a failure to spawn the shell itself is an error. Stderr text is
/// appended after stdout; the catalog commands merge streams themselves
/// where interleaving matters.
pub fn capture_combined(command: &str) -> Result<CaptureResult> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| DxverError::Spawn {
            command: command.to_string(),
            source,
        })?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    if text.ends_with('\n') {
        text.pop();
    }

    Ok(CaptureResult {
        exit_code: output.status.code(),
        output: text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout() {
        let result = capture_combined("echo hello").unwrap();
        assert_eq!(result.output, "hello");
        assert!(result.success());
    }

    #[test]
    fn captures_stderr() {
        let result = capture_combined("echo oops >&2").unwrap();
        assert_eq!(result.output, "oops");
    }

    #[test]
    fn nonzero_exit_is_not_an_error() {
        let result = capture_combined("echo partial; exit 3").unwrap();
        assert_eq!(result.exit_code, Some(3));
        assert_eq!(result.output, "partial");
        assert!(!result.success());
    }

    #[test]
    fn missing_command_yields_text_not_error() {
        let result = capture_combined("this-command-does-not-exist-12345 2>/dev/null").unwrap();
        assert!(!result.success());
    }

    #[test]
    fn only_one_trailing_newline_is_stripped() {
        let result = capture_combined("printf 'a\\n\\n'").unwrap();
        assert_eq!(result.output, "a\n");
    }

    #[test]
    fn pipeline_runs_through_the_shell() {
        let result = capture_combined("echo 'tool v1.2' | awk '{print $2}'").unwrap();
        assert_eq!(result.output, "v1.2");
    }
}
