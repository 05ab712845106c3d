//! External command execution with a bounded runtime.
//!
//! Programs are spawned directly (no shell) in an explicit working directory.
//! Output is drained on reader threads while the parent polls for exit, so a
//! chatty child cannot block on a full pipe while the timeout is running.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{AnalyserError, Result};

/// Default time budget for an external command.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Maximum runtime before the child is killed.
    pub timeout: Duration,
}

impl Default for CommandOptions {
    fn default() -> Self {
        Self {
            cwd: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CommandOptions {
    /// Options running in the given directory with the default timeout.
    pub fn in_dir(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
            ..Default::default()
        }
    }

    /// Override the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Execute `program` with `args`, capturing stdout and stderr.
///
/// # Errors
///
/// Returns `CommandFailed` if the program cannot be spawned and
/// `CommandTimedOut` if it outlives `options.timeout`. A non-zero exit is
/// not an error; inspect [`CommandResult::success`].
pub fn execute(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let command_line = display_command(program, args);
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    debug!("Running `{}`", command_line);

    let mut child = cmd.spawn().map_err(|e| {
        debug!("Cannot spawn `{}`: {}", command_line, e);
        AnalyserError::CommandFailed {
            command: command_line.clone(),
            code: None,
        }
    })?;

    let stdout_handle = child.stdout.take().map(|mut out| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = out.read_to_end(&mut buf);
            buf
        })
    });
    let stderr_handle = child.stderr.take().map(|mut err| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = err.read_to_end(&mut buf);
            buf
        })
    });

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Err(e) => {
                debug!("Cannot poll `{}`: {}", command_line, e);
                reap(&mut child);
                return Err(AnalyserError::Io(e));
            }
            Ok(None) => {
                if start.elapsed() > options.timeout {
                    reap(&mut child);
                    return Err(AnalyserError::CommandTimedOut {
                        command: command_line,
                        seconds: options.timeout.as_secs(),
                    });
                }
                thread::sleep(POLL_INTERVAL);
            }
        }
    };

    let stdout = stdout_handle
        .and_then(|h| h.join().ok())
        .map(|buf| String::from_utf8_lossy(&buf).into_owned())
        .unwrap_or_default();
    let stderr = stderr_handle
        .and_then(|h| h.join().ok())
        .map(|buf| String::from_utf8_lossy(&buf).into_owned())
        .unwrap_or_default();

    let duration = start.elapsed();
    debug!("`{}` exited with {:?} in {:?}", command_line, status.code(), duration);

    Ok(CommandResult {
        exit_code: status.code(),
        stdout,
        stderr,
        duration,
        success: status.success(),
    })
}

/// Kill `child` and wait for it so no zombie is left behind.
fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn execute_successful_command() {
        let result = execute("echo", &["hello"], &CommandOptions::default()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_failing_command() {
        let result = execute("sh", &["-c", "exit 3"], &CommandOptions::default()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn execute_captures_stderr() {
        let result = execute("sh", &["-c", "echo oops >&2"], &CommandOptions::default()).unwrap();
        assert!(result.stderr.contains("oops"));
    }

    #[test]
    fn execute_runs_in_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "").unwrap();

        let result = execute("ls", &[], &CommandOptions::in_dir(temp.path())).unwrap();

        assert!(result.stdout.contains("marker.txt"));
    }

    #[test]
    fn missing_program_is_command_failed() {
        let err = execute(
            "package-analyser-no-such-program",
            &[],
            &CommandOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AnalyserError::CommandFailed { code: None, .. }));
    }

    #[test]
    fn spawn_failure_names_command_line() {
        let err = execute(
            "package-analyser-no-such-program",
            &["tag", "--list"],
            &CommandOptions::default(),
        )
        .unwrap_err();
        assert!(err
            .to_string()
            .contains("package-analyser-no-such-program tag --list"));
    }

    #[test]
    fn slow_command_times_out() {
        let options = CommandOptions::default().with_timeout(Duration::from_millis(100));
        let err = execute("sleep", &["5"], &options).unwrap_err();
        match err {
            AnalyserError::CommandTimedOut { command, .. } => assert_eq!(command, "sleep 5"),
            other => panic!("expected CommandTimedOut, got {:?}", other),
        }
    }

    #[test]
    fn reap_kills_and_collects_child() {
        let mut child = Command::new("sleep").arg("5").spawn().unwrap();

        reap(&mut child);

        assert!(child.try_wait().unwrap().is_some());
    }

    #[test]
    fn display_command_joins_args() {
        assert_eq!(display_command("git", &["tag", "--list"]), "git tag --list");
        assert_eq!(display_command("git", &[]), "git");
    }
}
