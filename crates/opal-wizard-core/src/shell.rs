//! Subprocess helpers: bounded command execution, tool probing, git identity

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Default timeout for any spawned command (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Output of a finished (or killed) command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ShellResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    fn failed(stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            exit_code: 1,
        }
    }
}

/// Where and how long a command may run
#[derive(Debug, Clone)]
pub struct ShellOptions {
    pub cwd: Option<PathBuf>,
    pub timeout: Duration,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            cwd: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ShellOptions {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            cwd: Some(dir.as_ref().to_path_buf()),
            ..Self::default()
        }
    }
}

/// Run a command to completion and collect its output.
///
/// Never fails: spawn errors report exit code 1, and a command that outlives
/// its timeout is killed and reported with a non-zero exit code.
pub async fn shell(program: &str, args: &[&str], options: &ShellOptions) -> ShellResult {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    if let Some(cwd) = &options.cwd {
        command.current_dir(cwd);
    }

    let child = match command.spawn() {
        Ok(child) => child,
        Err(e) => return ShellResult::failed(format!("failed to spawn {}: {}", program, e)),
    };

    // Dropping the future on timeout drops the child, which kills it
    match timeout(options.timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => ShellResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code().unwrap_or(1),
        },
        Ok(Err(e)) => ShellResult::failed(format!("failed to wait for {}: {}", program, e)),
        Err(_) => ShellResult::failed(format!(
            "{} timed out after {} seconds",
            program,
            options.timeout.as_secs()
        )),
    }
}

/// Check if an executable is available on PATH
pub fn command_exists(program: &str) -> bool {
    which::which(program).is_ok()
}

/// Identity from the user's git configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitUser {
    pub name: String,
    pub email: String,
}

/// Look up `user.name` and `user.email` concurrently. Missing values are empty.
pub async fn git_user() -> GitUser {
    let options = ShellOptions::default();
    let (name, email) = tokio::join!(
        shell("git", &["config", "user.name"], &options),
        shell("git", &["config", "user.email"], &options),
    );

    let value = |result: ShellResult| {
        if result.success() {
            result.stdout.trim().to_string()
        } else {
            String::new()
        }
    };

    GitUser {
        name: value(name),
        email: value(email),
    }
}
