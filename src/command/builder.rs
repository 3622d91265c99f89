//! Assembly of tool invocations from structured selections.
//!
//! [`build`] is a pure function from a capture request to an argument
//! list. It never touches the filesystem or spawns anything, so every
//! behavior here is checkable with plain input/output pairs.

use crate::command::options::{CaptureFilterSpec, CaptureMode, OptionKind, OptionSelection};
use crate::error::{Result, SharklineError};
use std::fmt;

/// A fully assembled, ready-to-execute argument list.
///
/// Arguments are discrete elements handed to the process-launch primitive
/// as-is; they are never joined into a shell string. The `Display` impl is
/// for logs and previews only and must not be fed back to a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    args: Vec<String>,
}

impl ToolInvocation {
    /// Construct an invocation from pre-assembled arguments.
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// The fixed version-check invocation (`-v`).
    ///
    /// Running this is the standard way to validate that a configured
    /// tool path is usable before offering capture options.
    pub fn version_check() -> Self {
        Self {
            args: vec!["-v".to_string()],
        }
    }

    /// The argument list, in order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Consume the invocation, yielding the argument list.
    pub fn into_args(self) -> Vec<String> {
        self.args
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args.join(" "))
    }
}

/// Assemble a [`ToolInvocation`] from a capture mode and option selection.
///
/// The argument list starts with the primary mode flag and its value(s),
/// followed by each selected option's tokens and value in selection order.
/// Option order is significant and preserved verbatim: tshark applies some
/// options order-sensitively, so callers control it.
///
/// `filter` is consulted only when [`OptionKind::CaptureFilter`] is
/// selected; the spec's keywords and host value are combined into a single
/// filter-expression argument.
///
/// # Errors
///
/// Returns [`SharklineError::MissingOptionValue`] when the mode or a
/// selected option lacks a required value, and
/// [`SharklineError::OptionNotApplicable`] when an option is selected
/// under the wrong mode or with values its shape does not accept.
pub fn build(
    mode: &CaptureMode,
    selection: &OptionSelection,
    filter: Option<&CaptureFilterSpec>,
) -> Result<ToolInvocation> {
    let mut args = Vec::new();
    push_mode(mode, &mut args)?;

    for selected in selection.iter() {
        let kind = selected.kind;
        if !kind.applies_to(mode) {
            return Err(SharklineError::OptionNotApplicable {
                option: kind.flag().to_string(),
                message: format!("not available under {}", mode.describe()),
            });
        }

        match kind {
            OptionKind::CaptureFilter => {
                if !selected.values.is_empty() {
                    return Err(SharklineError::OptionNotApplicable {
                        option: kind.flag().to_string(),
                        message: "takes a filter spec, not inline values".to_string(),
                    });
                }
                let spec = filter.ok_or_else(|| SharklineError::MissingOptionValue {
                    option: kind.flag().to_string(),
                })?;
                args.push(kind.flag().to_string());
                args.push(assemble_filter(spec)?);
            }
            kind if kind.requires_value() => {
                let value = match selected.values.as_slice() {
                    [value] if !value.trim().is_empty() => value.clone(),
                    [] | [_] => {
                        return Err(SharklineError::MissingOptionValue {
                            option: kind.flag().to_string(),
                        })
                    }
                    _ => {
                        return Err(SharklineError::OptionNotApplicable {
                            option: kind.flag().to_string(),
                            message: "takes exactly one value".to_string(),
                        })
                    }
                };
                args.extend(kind.tokens().iter().map(|t| t.to_string()));
                args.push(value);
            }
            kind => {
                if !selected.values.is_empty() {
                    return Err(SharklineError::OptionNotApplicable {
                        option: kind.flag().to_string(),
                        message: "takes no value".to_string(),
                    });
                }
                args.extend(kind.tokens().iter().map(|t| t.to_string()));
            }
        }
    }

    Ok(ToolInvocation::new(args))
}

/// Emit the primary mode flag and its value(s).
fn push_mode(mode: &CaptureMode, args: &mut Vec<String>) -> Result<()> {
    match mode {
        CaptureMode::Interface(name) => {
            if name.trim().is_empty() {
                return Err(SharklineError::MissingOptionValue {
                    option: mode.flag().to_string(),
                });
            }
            args.push(mode.flag().to_string());
            args.push(name.clone());
        }
        CaptureMode::FileRead(files) => {
            if files.is_empty() {
                return Err(SharklineError::MissingOptionValue {
                    option: mode.flag().to_string(),
                });
            }
            args.push(mode.flag().to_string());
            for file in files {
                args.push(file.to_string_lossy().into_owned());
            }
        }
    }
    Ok(())
}

/// Combine a filter spec into a single capture-filter expression.
///
/// Keyword terms join with ` and `, the conjunction tshark's capture-filter
/// grammar accepts; a host value appends a final `host <value>` clause.
/// The result is one argument value, so the host text never reaches a
/// shell no matter what characters it contains.
fn assemble_filter(spec: &CaptureFilterSpec) -> Result<String> {
    let missing = |option: &str| SharklineError::MissingOptionValue {
        option: option.to_string(),
    };

    if spec.is_empty() {
        return Err(missing("-f"));
    }

    let mut clauses: Vec<String> = spec
        .keywords()
        .iter()
        .map(|keyword| keyword.term().to_string())
        .collect();

    if let Some(host) = spec.host_value() {
        let host = host.trim();
        if host.is_empty() {
            return Err(missing("-f host"));
        }
        clauses.push(format!("host {host}"));
    }

    Ok(clauses.join(" and "))
}
