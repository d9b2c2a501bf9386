//! Thin wrapper around the `git` executable.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::Context;

use crate::error::Result;

/// Variables that point git at a repository other than the one in `cwd`.
///
/// Git exports some of these to hooks and `rebase --exec` children.
pub(crate) const REPOSITORY_ENV_VARS: &[&str] = &[
    "GIT_DIR",
    "GIT_WORK_TREE",
    "GIT_INDEX_FILE",
    "GIT_OBJECT_DIRECTORY",
    "GIT_ALTERNATE_OBJECT_DIRECTORIES",
    "GIT_COMMON_DIR",
    "GIT_NAMESPACE",
];

/// Captured result of a git invocation.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Whether git exited with status 0.
    pub success: bool,
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
    /// Wall-clock duration of the call.
    pub duration: Duration,
}

impl GitOutput {
    /// Stdout with surrounding whitespace removed.
    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }

    /// Best single-line description of why git failed.
    pub fn failure_message(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        match self.exit_code {
            Some(code) => format!("git exited with code {}", code),
            None => "git was terminated by a signal".to_string(),
        }
    }
}

/// Run git with `args`, optionally inside `cwd`.
///
/// Inherited repository-selecting variables are cleared, so the repository
/// acted on is always the one at `cwd`. A non-zero exit is reported through
/// [`GitOutput::success`]; only a failure to launch git at all is returned
/// as an error.
pub fn run<I, S>(args: I, cwd: Option<&Path>) -> Result<GitOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<_> = args
        .into_iter()
        .map(|a| a.as_ref().to_os_string())
        .collect();
    let start = Instant::now();

    let mut cmd = Command::new("git");
    if let Some(dir) = cwd {
        cmd.arg("-C").arg(dir).current_dir(dir);
    }
    for var in REPOSITORY_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.args(&args)
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    tracing::debug!("Running git {:?} in {:?}", args, cwd);
    let output = cmd
        .output()
        .with_context(|| format!("Failed to run git {:?}", args))?;

    let result = GitOutput {
        success: output.status.success(),
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration: start.elapsed(),
    };
    tracing::debug!(
        "git {:?} exited with {:?} after {:?}",
        args,
        result.exit_code,
        result.duration
    );

    Ok(result)
}
