//! sharkline - Structured tshark command assembly and execution.
//!
//! sharkline turns a structured capture request — a mode, an ordered
//! option selection, and an optional capture-filter spec — into a
//! ready-to-execute argument list, runs it against a configured tshark
//! executable, and reports a structured success/failure outcome.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`command`] - Capture data model and the pure command builder
//! - [`config`] - Tool path configuration and the persisted path store
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Subprocess execution with timeout and cancellation
//!
//! # Example
//!
//! ```
//! use sharkline::command::{build, CaptureMode, OptionKind, OptionSelection};
//!
//! let mode = CaptureMode::Interface("en0".into());
//! let selection = OptionSelection::new().select_with(OptionKind::PacketCount, "10");
//! let invocation = build(&mode, &selection, None).unwrap();
//! assert_eq!(invocation.args(), ["-i", "en0", "-c", "10"]);
//! ```
//!
//! For executing an invocation, see [`runner::run`] and
//! [`runner::check_tool_available`].

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod runner;

pub use error::{Result, SharklineError};
