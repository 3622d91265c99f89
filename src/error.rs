//! Error types for sharkline operations.
//!
//! This module defines [`SharklineError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Builder problems (an invocation that cannot be assembled) are `Err`
//!   values so the caller can re-prompt before anything runs
//! - Runner outcomes are data ([`crate::runner::ExecutionResult`]), never
//!   errors — a failed capture is a result, not a fault
//! - Use `anyhow::Error` (via `SharklineError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for sharkline operations.
#[derive(Debug, Error)]
pub enum SharklineError {
    /// An option that requires a value was selected without one.
    #[error("Option '{option}' requires a value but none was given")]
    MissingOptionValue { option: String },

    /// An option was selected under a capture mode it does not apply to,
    /// or was given values its shape does not accept.
    #[error("Option '{option}' is not applicable here: {message}")]
    OptionNotApplicable { option: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for sharkline operations.
pub type Result<T> = std::result::Result<T, SharklineError>;
