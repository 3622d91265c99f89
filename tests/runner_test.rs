//! Integration tests for the process runner.
//!
//! These exercise real subprocesses through small standard utilities
//! (`echo`, `sh`, `sleep`) so no tshark install is needed.

use sharkline::command::ToolInvocation;
use sharkline::config::ToolConfig;
use sharkline::runner::{
    check_tool_available, run, CancelHandle, ExecutionResult, FailureKind, RunOptions,
};
use std::thread;
use std::time::{Duration, Instant};

fn invocation(args: &[&str]) -> ToolInvocation {
    ToolInvocation::new(args.iter().map(|a| a.to_string()).collect())
}

#[test]
fn nonexistent_executable_fails_fast_with_kind() {
    let config = ToolConfig::with_path("/nonexistent/path/to/tshark");
    let start = Instant::now();

    let result = run(&config, &ToolInvocation::version_check(), &RunOptions::default());

    assert!(start.elapsed() < Duration::from_secs(2));
    match result {
        ExecutionResult::Failure { kind, message } => {
            assert_eq!(kind, FailureKind::ExecutableNotFound);
            assert!(message.contains("/nonexistent/path/to/tshark"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn timeout_terminates_the_subprocess() {
    let config = ToolConfig::with_path("sleep");
    let options = RunOptions {
        timeout: Some(Duration::from_millis(200)),
        ..Default::default()
    };
    let start = Instant::now();

    let result = run(&config, &invocation(&["5"]), &options);

    // Well under the subprocess's 5s runtime: the child was killed, not
    // waited out.
    assert!(start.elapsed() < Duration::from_secs(3));
    assert!(matches!(
        result,
        ExecutionResult::Failure {
            kind: FailureKind::Timeout,
            ..
        }
    ));
}

#[cfg(unix)]
#[test]
fn cancellation_from_another_thread_stops_the_run() {
    let cancel = CancelHandle::new();
    let trip = cancel.clone();
    let trigger = thread::spawn(move || {
        thread::sleep(Duration::from_millis(150));
        trip.cancel();
    });

    let options = RunOptions {
        timeout: None,
        cancel,
    };
    let start = Instant::now();
    let result = run(
        &ToolConfig::with_path("sleep"),
        &invocation(&["5"]),
        &options,
    );
    trigger.join().unwrap();

    assert!(start.elapsed() < Duration::from_secs(3));
    assert!(matches!(
        result,
        ExecutionResult::Failure {
            kind: FailureKind::Cancelled,
            ..
        }
    ));
}

#[cfg(unix)]
#[test]
fn stdout_is_captured_on_success() {
    let result = run(
        &ToolConfig::with_path("echo"),
        &invocation(&["captured", "output"]),
        &RunOptions::default(),
    );
    match result {
        ExecutionResult::Success { stdout } => assert_eq!(stdout.trim(), "captured output"),
        other => panic!("expected success, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn exit_zero_with_no_output_is_still_success() {
    // A capture written straight to a file produces no stdout; exit code
    // wins over the empty-stdout heuristic.
    let result = run(&ToolConfig::with_path("true"), &invocation(&[]), &RunOptions::default());
    assert!(result.is_success());
}

#[cfg(unix)]
#[test]
fn tool_failure_carries_stderr_text() {
    let result = run(
        &ToolConfig::with_path("sh"),
        &invocation(&["-c", "echo 'no such interface' >&2; exit 2"]),
        &RunOptions::default(),
    );
    match result {
        ExecutionResult::Failure { kind, message } => {
            assert_eq!(kind, FailureKind::ToolError);
            assert!(message.contains("no such interface"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn version_check_surfaces_the_banner_first_line() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::TempDir::new().unwrap();
    let stub = temp.path().join("tshark");
    fs::write(
        &stub,
        "#!/bin/sh\necho 'TShark (Wireshark) 4.2.0.'\necho 'Copyright 1998-2024 Gerald Combs'\n",
    )
    .unwrap();
    fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

    let result = check_tool_available(&ToolConfig::with_path(&stub));

    match result {
        ExecutionResult::Success { stdout } => {
            let banner = stdout.lines().next().unwrap();
            assert!(banner.starts_with("TShark (Wireshark)"));
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn concurrent_runs_do_not_interfere() {
    // Distinct invocations may run at once; the runner holds no shared
    // state between calls.
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                run(
                    &ToolConfig::with_path("echo"),
                    &ToolInvocation::new(vec![format!("run-{i}")]),
                    &RunOptions::default(),
                )
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        match handle.join().unwrap() {
            ExecutionResult::Success { stdout } => assert_eq!(stdout.trim(), format!("run-{i}")),
            other => panic!("expected success, got {other:?}"),
        }
    }
}
