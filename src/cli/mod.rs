//! Command-line interface for sharkline.
//!
//! This module provides the CLI argument parsing using clap's derive
//! macros and the command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations and dispatch

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, FilterKeywordArg, LiveArgs, OutputFormat, ReadArgs, SetPathArgs};
pub use commands::{dispatch, CommandResult};
