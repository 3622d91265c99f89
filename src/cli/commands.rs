//! Command implementations.
//!
//! The dispatcher translates parsed arguments into the library's builder
//! and runner calls and renders outcomes. Status and error lines go to
//! stderr so stdout stays pure tool output.

use crate::cli::args::{
    Cli, Commands, FilterKeywordArg, LiveArgs, OutputFormat, ReadArgs, SetPathArgs,
};
use crate::command::{
    build, CaptureFilterSpec, CaptureMode, FilterKeyword, OptionKind, OptionSelection,
    ToolInvocation,
};
use crate::config::{self, ToolConfig};
use crate::error::Result;
use crate::runner::{check_tool_available, run, CancelHandle, ExecutionResult, FailureKind, RunOptions};
use console::style;
use std::time::Duration;

/// Outcome of a dispatched command.
#[derive(Debug, Clone, Copy)]
pub struct CommandResult {
    /// Exit code reported to the OS.
    pub exit_code: i32,
}

impl CommandResult {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }

    fn failed() -> Self {
        Self { exit_code: 1 }
    }
}

/// Dispatch a parsed CLI to its command implementation.
pub fn dispatch(cli: &Cli) -> Result<CommandResult> {
    let config = config::resolve_tool_config(cli.tshark_path.as_deref());

    match &cli.command {
        Commands::Check => check(&config, cli.quiet),
        Commands::SetPath(args) => set_path(args, cli.quiet),
        Commands::Live(args) => live(&config, args, cli.quiet),
        Commands::Read(args) => read(&config, args, cli.quiet),
    }
}

/// Verify the configured tool path (`sharkline check`).
fn check(config: &ToolConfig, quiet: bool) -> Result<CommandResult> {
    if !quiet {
        eprintln!("Checking {}...", config.program().display());
    }

    match check_tool_available(config) {
        ExecutionResult::Success { stdout } => {
            let banner = stdout.lines().next().unwrap_or_default();
            println!("{banner}");
            if !quiet {
                eprintln!("{}", style("tshark is installed and working").green());
            }
            Ok(CommandResult::ok())
        }
        ExecutionResult::Failure { kind, message } => {
            report_failure(kind, &message);
            Ok(CommandResult::failed())
        }
    }
}

/// Verify then persist a tool path (`sharkline set-path`).
///
/// A path that fails the version check is not saved; the previous
/// configuration stays in effect.
fn set_path(args: &SetPathArgs, quiet: bool) -> Result<CommandResult> {
    let candidate = ToolConfig::with_path(&args.path);

    match check_tool_available(&candidate) {
        ExecutionResult::Success { .. } => {
            let file = config::save_path(&args.path)?;
            if !quiet {
                eprintln!(
                    "Saved tshark path {} to {}",
                    args.path.display(),
                    file.display()
                );
            }
            Ok(CommandResult::ok())
        }
        ExecutionResult::Failure { kind, message } => {
            report_failure(kind, &message);
            eprintln!(
                "{}",
                style("Path not saved; previous configuration unchanged").yellow()
            );
            Ok(CommandResult::failed())
        }
    }
}

/// Interface capture (`sharkline live`).
fn live(config: &ToolConfig, args: &LiveArgs, quiet: bool) -> Result<CommandResult> {
    let mode = CaptureMode::Interface(args.interface.clone());

    // Options emit in a fixed order: filter, write, count.
    let mut selection = OptionSelection::new();
    let mut filter_spec = None;
    if !args.filter.is_empty() || args.host.is_some() {
        selection = selection.select(OptionKind::CaptureFilter);
        let mut spec = CaptureFilterSpec::new();
        for keyword in &args.filter {
            spec = spec.keyword(to_filter_keyword(*keyword));
        }
        if let Some(host) = &args.host {
            spec = spec.host(host.clone());
        }
        filter_spec = Some(spec);
    }
    if let Some(path) = &args.write {
        selection = selection.select_with(OptionKind::WriteFile, path.display().to_string());
    }
    if let Some(count) = args.count {
        selection = selection.select_with(OptionKind::PacketCount, count.to_string());
    }

    let invocation = build(&mode, &selection, filter_spec.as_ref())?;
    execute(config, &invocation, args.timeout, args.dry_run, quiet)
}

/// File read (`sharkline read`).
fn read(config: &ToolConfig, args: &ReadArgs, quiet: bool) -> Result<CommandResult> {
    let mode = CaptureMode::FileRead(args.files.clone());

    // Options emit in a fixed order: two-pass, display filter, output format.
    let mut selection = OptionSelection::new();
    if args.two_pass {
        selection = selection.select(OptionKind::TwoPass);
    }
    if let Some(filter) = &args.display_filter {
        selection = selection.select_with(OptionKind::DisplayFilter, filter.clone());
    }
    if let Some(format) = args.output {
        selection = selection.select(match format {
            OutputFormat::Fields => OptionKind::FieldsOutput,
            OutputFormat::Json => OptionKind::JsonOutput,
        });
    }

    let invocation = build(&mode, &selection, None)?;
    execute(config, &invocation, args.timeout, args.dry_run, quiet)
}

/// Run an assembled invocation and render its outcome.
fn execute(
    config: &ToolConfig,
    invocation: &ToolInvocation,
    timeout_secs: Option<u64>,
    dry_run: bool,
    quiet: bool,
) -> Result<CommandResult> {
    if dry_run {
        println!("{} {}", config.program().display(), invocation);
        return Ok(CommandResult::ok());
    }

    if !quiet {
        eprintln!("Running {} {}", config.program().display(), invocation);
    }

    let cancel = CancelHandle::new();
    let handler = cancel.clone();
    if let Err(err) = ctrlc::set_handler(move || handler.cancel()) {
        tracing::warn!("Ctrl-C handler unavailable: {err}");
    }

    let options = RunOptions {
        timeout: timeout_secs.map(Duration::from_secs),
        cancel,
    };

    match run(config, invocation, &options) {
        ExecutionResult::Success { stdout } => {
            if !stdout.is_empty() {
                print!("{stdout}");
            } else if !quiet {
                eprintln!("{}", style("Completed with no output").green());
            }
            Ok(CommandResult::ok())
        }
        ExecutionResult::Failure { kind, message } => {
            report_failure(kind, &message);
            Ok(CommandResult::failed())
        }
    }
}

/// Print a failure with the recovery hint the outcome calls for.
fn report_failure(kind: FailureKind, message: &str) {
    eprintln!("{} {}", style("error:").red().bold(), message);
    if kind == FailureKind::ExecutableNotFound {
        eprintln!(
            "Run {} to point sharkline at your tshark executable",
            style("sharkline set-path <PATH>").cyan()
        );
    }
}

fn to_filter_keyword(arg: FilterKeywordArg) -> FilterKeyword {
    match arg {
        FilterKeywordArg::Http => FilterKeyword::Http,
        FilterKeywordArg::Dns => FilterKeyword::Dns,
        FilterKeywordArg::Tcp => FilterKeyword::Tcp,
    }
}
