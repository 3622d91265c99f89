//! Tool process execution and outcome reporting.

pub mod exec;

pub use exec::{
    check_tool_available, run, CancelHandle, ExecutionResult, FailureKind, RunOptions,
};
