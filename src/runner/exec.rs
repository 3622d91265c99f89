//! Subprocess execution for assembled tool invocations.
//!
//! The runner launches the configured executable with the invocation's
//! argument list directly — never through a shell — drains stdout and
//! stderr on helper threads, and waits in a poll loop that honors a
//! timeout and a caller-held cancellation flag. Every outcome, including
//! a missing executable, is reported as an [`ExecutionResult`] value.

use crate::command::ToolInvocation;
use crate::config::ToolConfig;
use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// How often the wait loop checks for exit, timeout, and cancellation.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Time limit applied to the version check.
const VERSION_CHECK_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a tool run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The configured executable could not be launched.
    ExecutableNotFound,
    /// The tool ran but reported failure.
    ToolError,
    /// The configured time limit expired before the tool exited.
    Timeout,
    /// The caller cancelled the run.
    Cancelled,
}

/// Outcome of one tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    /// The tool exited successfully; `stdout` may be empty (a capture
    /// written straight to a file produces no standard output).
    Success { stdout: String },
    /// The tool could not run or reported failure.
    Failure { kind: FailureKind, message: String },
}

impl ExecutionResult {
    fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
        }
    }

    /// Whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Cooperative cancellation flag shared between the caller and a run.
///
/// Clone the handle before starting a run and call [`cancel`] from any
/// thread (a signal handler included); the runner terminates the
/// subprocess at its next poll.
///
/// [`cancel`]: CancelHandle::cancel
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    /// Create a fresh, untripped handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the run holding this handle.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Options for one run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Give up after this long (None = wait indefinitely).
    pub timeout: Option<Duration>,

    /// Cancellation flag; the default handle is never tripped.
    pub cancel: CancelHandle,
}

/// Execute an invocation against the configured tool path.
///
/// Blocks until the subprocess exits, the timeout expires, or the cancel
/// handle trips. The call holds no state shared with other runs, so
/// callers may run distinct invocations concurrently from their own
/// threads.
///
/// Classification: the exit code is authoritative. Exit 0 is
/// [`ExecutionResult::Success`] even with empty stdout; a non-zero exit is
/// a [`FailureKind::ToolError`] carrying the tool's stderr text.
pub fn run(config: &ToolConfig, invocation: &ToolInvocation, options: &RunOptions) -> ExecutionResult {
    let program = config.program();
    tracing::debug!("Running {} {}", program.display(), invocation);
    let start = Instant::now();

    let mut cmd = Command::new(&program);
    cmd.args(invocation.args());
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return ExecutionResult::failure(
                FailureKind::ExecutableNotFound,
                format!("{} was not found on this system", program.display()),
            );
        }
        Err(err) => {
            return ExecutionResult::failure(
                FailureKind::ToolError,
                format!("failed to launch {}: {}", program.display(), err),
            );
        }
    };

    let stdout_handle = drain(child.stdout.take());
    let stderr_handle = drain(child.stderr.take());

    let deadline = options.timeout.map(|limit| start + limit);
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {}
            Err(err) => {
                terminate(&mut child);
                return ExecutionResult::failure(
                    FailureKind::ToolError,
                    format!("failed waiting for {}: {}", program.display(), err),
                );
            }
        }

        if options.cancel.is_cancelled() {
            terminate(&mut child);
            return ExecutionResult::failure(FailureKind::Cancelled, "run cancelled by caller");
        }

        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                terminate(&mut child);
                return ExecutionResult::failure(
                    FailureKind::Timeout,
                    format!(
                        "{} did not finish within {:.1}s",
                        program.display(),
                        options.timeout.unwrap_or_default().as_secs_f64()
                    ),
                );
            }
        }

        thread::sleep(POLL_INTERVAL);
    };

    let stdout = stdout_handle.join().unwrap_or_default();
    let stderr = stderr_handle.join().unwrap_or_default();
    tracing::debug!(
        "{} exited with {:?} after {:?}",
        program.display(),
        status.code(),
        start.elapsed()
    );

    classify(status, stdout, stderr)
}

/// Run the fixed version-check invocation against the configured path.
///
/// Success's stdout begins with the tool's version banner; the caller uses
/// the outcome to decide whether to prompt for a new path.
pub fn check_tool_available(config: &ToolConfig) -> ExecutionResult {
    let options = RunOptions {
        timeout: Some(VERSION_CHECK_TIMEOUT),
        ..Default::default()
    };
    run(config, &ToolInvocation::version_check(), &options)
}

/// Drain a child pipe to a string on its own thread.
///
/// Reading concurrently with the wait loop keeps the child from blocking
/// on a full pipe buffer.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_string(&mut buf);
        }
        buf
    })
}

/// Kill and reap a child so no orphan outlives the run.
fn terminate(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

/// Map an exit status plus captured output to an outcome.
fn classify(status: ExitStatus, stdout: String, stderr: String) -> ExecutionResult {
    match status.code() {
        Some(0) => ExecutionResult::Success { stdout },
        Some(code) => {
            let stderr = stderr.trim();
            let message = if stderr.is_empty() {
                format!("tool exited with code {code}")
            } else {
                stderr.to_string()
            };
            ExecutionResult::failure(FailureKind::ToolError, message)
        }
        None => ExecutionResult::failure(FailureKind::ToolError, "tool terminated by signal"),
    }
}
