//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// sharkline - Assemble and run tshark capture commands.
#[derive(Debug, Parser)]
#[command(name = "sharkline")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the tshark executable (overrides the saved configuration)
    #[arg(long, global = true, env = "SHARKLINE_TSHARK_PATH", value_name = "PATH")]
    pub tshark_path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Print captured output only, no status lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Capture live from a network interface
    Live(LiveArgs),

    /// Read packets from saved capture files
    Read(ReadArgs),

    /// Check that the configured tshark executable is usable
    Check,

    /// Verify and persist the path to the tshark executable
    SetPath(SetPathArgs),
}

/// Arguments for the `live` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LiveArgs {
    /// Interface to capture from (as listed by `tshark -D`)
    #[arg(short, long)]
    pub interface: String,

    /// Capture filter keywords (comma-separated)
    #[arg(long, value_delimiter = ',', value_enum)]
    pub filter: Vec<FilterKeywordArg>,

    /// Restrict the capture filter to traffic to/from this host
    #[arg(long)]
    pub host: Option<String>,

    /// Write captured packets to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub write: Option<PathBuf>,

    /// Stop after this many packets
    #[arg(short, long, value_name = "N")]
    pub count: Option<u32>,

    /// Give up after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the assembled command without running it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `read` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ReadArgs {
    /// Capture files to read
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Perform a two-pass analysis
    #[arg(long)]
    pub two_pass: bool,

    /// Display filter applied to the decoded packets
    #[arg(short = 'Y', long, value_name = "EXPR")]
    pub display_filter: Option<String>,

    /// Output format for decoded packets
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Give up after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the assembled command without running it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `set-path` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SetPathArgs {
    /// Path to the tshark executable
    pub path: PathBuf,
}

/// Capture filter keywords accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterKeywordArg {
    Http,
    Dns,
    Tcp,
}

/// Output formats accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Fields,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn live_parses_filter_list() {
        let cli = Cli::parse_from([
            "sharkline", "live", "-i", "en0", "--filter", "http,tcp", "--host", "10.0.0.1",
        ]);
        match cli.command {
            Commands::Live(args) => {
                assert_eq!(args.interface, "en0");
                assert_eq!(
                    args.filter,
                    [FilterKeywordArg::Http, FilterKeywordArg::Tcp]
                );
                assert_eq!(args.host.as_deref(), Some("10.0.0.1"));
            }
            other => panic!("expected live, got {other:?}"),
        }
    }

    #[test]
    fn read_requires_a_file() {
        let result = Cli::try_parse_from(["sharkline", "read"]);
        assert!(result.is_err());
    }

    #[test]
    fn tshark_path_is_global() {
        let cli = Cli::parse_from(["sharkline", "check", "--tshark-path", "/opt/tshark"]);
        assert_eq!(cli.tshark_path, Some(PathBuf::from("/opt/tshark")));
    }
}
