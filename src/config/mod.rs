//! Configuration for the drills CLI
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/drills/config.toml, or `--config <PATH>`)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod majority;
mod observability;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use majority::{FileMajority, MajorityConfig};
pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the output format
pub const ENV_OUTPUT: &str = "DRILLS_OUTPUT";

/// Environment variable overriding the majority tie-break rule
pub const ENV_TIE_BREAK: &str = "DRILLS_TIE_BREAK";

/// Environment variable overriding the log level (RUST_LOG still wins)
pub const ENV_LOG_LEVEL: &str = "DRILLS_LOG_LEVEL";

// ─────────────────────────────────────────────────────────────────────────────
// Output Format
// ─────────────────────────────────────────────────────────────────────────────

/// How command results are printed to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Bare result text, one line (default)
    #[default]
    Plain,
    /// One JSON object per command
    Json,
}

impl OutputFormat {
    /// Parse output format string from config or env
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "plain" | "text" => Self::Plain,
            _ => Self::Plain, // Default to plain for unknown values
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Json => "json",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Result format for stdout
    pub output: OutputFormat,

    /// Majority command settings
    pub majority: MajorityConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub output: Option<String>,

    /// Optional [majority] section
    pub majority: Option<FileMajority>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/drills/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("drills").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    /// Write this configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("could not create {}", parent.display()))?;
        }
        std::fs::write(path, self.to_toml())
            .with_context(|| format!("could not write config {}", path.display()))
    }

    /// Load configuration: env vars > file > defaults
    ///
    /// `explicit` is a path given on the command line; it must exist.
    /// The default path is optional and silently skipped when missing.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let file = match explicit {
            Some(path) => Self::load_file_config(path, true)?,
            None => match Self::config_path() {
                Some(path) => Self::load_file_config(&path, false)?,
                None => FileConfig::default(),
            },
        };

        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Read and parse a config file.
    ///
    /// A file that exists but cannot be read or parsed is an error: a broken
    /// config should fail loudly, not fall back to defaults.
    pub(crate) fn load_file_config(path: &Path, required: bool) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
                tracing::debug!("no config file at {}, using defaults", path.display());
                Ok(FileConfig::default())
            }
            Err(e) => {
                Err(e).with_context(|| format!("cannot read config file {}", path.display()))
            }
        }
    }

    /// Merge a parsed file with environment overrides over the defaults
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Output format: env > file > default
        let output = env(ENV_OUTPUT)
            .or(file.output)
            .map(|s| OutputFormat::from_str(&s))
            .unwrap_or_default();

        let mut majority = MajorityConfig::from_file(file.majority);
        if let Some(tie_break) = env(ENV_TIE_BREAK) {
            majority.tie_break = crate::majority::TieBreak::from_str(&tie_break);
        }

        let mut logging = LoggingConfig::from_file(file.logging);
        if let Some(level) = env(ENV_LOG_LEVEL) {
            logging.level = level;
        }

        Self {
            output,
            majority,
            logging,
        }
    }
}
