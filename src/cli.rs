//! CLI definition and parsing.
//! One subcommand (`copy`) plus ambient logging flags.
//!
//! Notes:
//! - Both directories default to the current directory, matching the common
//!   "sort in place" invocation `snapbin copy`.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::config::{Config, LogLevel};

/// Sort photos into date-named folders by modification time.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Sort photos into date-named folders")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        global = true,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Copy photos from the input tree into date buckets under the output directory.
    Copy {
        /// The directory from which to read the photos.
        #[arg(
            short = 'i',
            long,
            default_value = ".",
            value_hint = ValueHint::DirPath,
            help = "The directory from which to read the photos"
        )]
        input_directory: PathBuf,

        /// The directory under which the date-named folders are created.
        #[arg(
            short = 'o',
            long,
            default_value = ".",
            value_hint = ValueHint::DirPath,
            help = "The directory under which the photo folders are created"
        )]
        output_directory: PathBuf,
    },
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Build the runtime Config for the requested subcommand.
    pub fn to_config(&self) -> Config {
        let Command::Copy {
            input_directory,
            output_directory,
        } = &self.command;
        let mut cfg = Config::new(input_directory.clone(), output_directory.clone());
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        cfg
    }
}

/// Parse CLI arguments. Parse failures are written to stderr and terminate
/// the process with exit code 1; `--help`/`--version` still exit 0.
pub fn parse() -> Args {
    use clap::error::ErrorKind;
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    }
}
