//! Runtime configuration and verbosity levels.
//! No config file and no environment variables: everything comes from the CLI.

use anyhow::{bail, Context, Result};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration used by the sorter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source root: the tree holding the photos to sort
    pub input_dir: PathBuf,
    /// Destination root: bucket directories are created directly under this
    pub output_dir: PathBuf,
    /// Console verbosity
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            log_level: LogLevel::Normal,
        }
    }
}

impl Config {
    /// Construct a Config with explicit directories; other fields use defaults.
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Validate configured paths for sanity and permissions.
    ///
    /// - input_dir must exist, be a directory and be readable.
    /// - output_dir may be absent (the synchronizer creates it), but if it
    ///   exists it must be a directory.
    ///
    /// Note: input and output may legitimately be the same directory (both
    /// default to `.`); the existence probe on targets keeps that safe.
    pub fn validate(&self) -> Result<()> {
        if !self.input_dir.exists() {
            bail!("Input directory does not exist: {}", self.input_dir.display());
        }
        if !self.input_dir.is_dir() {
            bail!(
                "Input directory is not a directory: {}",
                self.input_dir.display()
            );
        }

        // readability probe
        fs::read_dir(&self.input_dir).with_context(|| {
            format!(
                "Cannot read input directory '{}'; check permissions",
                self.input_dir.display()
            )
        })?;
        debug!("Input directory readable: {}", self.input_dir.display());

        if self.output_dir.exists() && !self.output_dir.is_dir() {
            bail!(
                "Output path exists but isn't a directory: {}",
                self.output_dir.display()
            );
        }

        Ok(())
    }
}
