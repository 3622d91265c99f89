//! Capture command assembly.
//!
//! This module owns the data model for a capture request and the pure
//! builder that turns it into a ready-to-execute argument list.
//!
//! # Architecture
//!
//! - [`options`] - Capture mode, option vocabulary, and filter model
//! - [`builder`] - Assembly of a [`ToolInvocation`] from a selection

pub mod builder;
pub mod options;

pub use builder::{build, ToolInvocation};
pub use options::{
    CaptureFilterSpec, CaptureMode, FilterKeyword, OptionKind, OptionSelection, SelectedOption,
};
