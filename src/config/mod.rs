//! Tool path configuration.
//!
//! The runner needs exactly one configuration value: where the tshark
//! executable lives. [`ToolConfig`] carries that value explicitly — there
//! is no process-wide singleton — and this module also owns the small
//! persisted store the CLI uses to remember a path across runs.
//!
//! Resolution order: explicit override (flag or environment), then the
//! saved config file, then the bare command name resolved via the OS
//! search path.

use crate::error::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Command name used when no explicit path is configured.
pub const DEFAULT_TOOL: &str = "tshark";

/// Environment variable overriding the config directory.
///
/// Primarily for tests, which point it at a scratch directory instead of
/// the user's real config dir.
pub const CONFIG_DIR_ENV: &str = "SHARKLINE_CONFIG_DIR";

/// The single configuration value the runner consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolConfig {
    path: Option<PathBuf>,
}

impl ToolConfig {
    /// Config with no explicit path: the bare command name is used.
    pub fn new() -> Self {
        Self::default()
    }

    /// Config with an explicit executable path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// The explicit path, if one is configured.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The program to launch: the explicit path, or the bare command name.
    pub fn program(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TOOL))
    }
}

/// On-disk shape of the persisted configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SavedConfig {
    tshark_path: PathBuf,
}

/// Where the persisted config lives.
fn config_file() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir).join("config.json"));
    }
    dirs::config_dir().map(|d| d.join("sharkline").join("config.json"))
}

/// Load the persisted tool path, if any.
///
/// A missing or unreadable file means no saved path; a corrupt file is
/// treated the same way rather than failing the whole command.
pub fn load_saved_path() -> Option<PathBuf> {
    let path = config_file()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str::<SavedConfig>(&content)
        .ok()
        .map(|c| c.tshark_path)
}

/// Persist the tool path for future runs.
pub fn save_path(tool_path: &Path) -> Result<PathBuf> {
    let file = config_file().context("no config directory on this system")?;
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent)?;
    }

    let config = SavedConfig {
        tshark_path: tool_path.to_path_buf(),
    };
    let content = serde_json::to_string_pretty(&config).context("failed to encode config")?;
    fs::write(&file, content)?;
    Ok(file)
}

/// Resolve the effective tool config for a command.
///
/// An explicit override wins; otherwise the saved path applies; otherwise
/// the bare command name.
pub fn resolve_tool_config(override_path: Option<&Path>) -> ToolConfig {
    if let Some(path) = override_path {
        return ToolConfig::with_path(path);
    }
    match load_saved_path() {
        Some(path) => ToolConfig::with_path(path),
        None => ToolConfig::new(),
    }
}
