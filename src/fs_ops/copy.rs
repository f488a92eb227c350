//! Platform-aware file copying.
//!
//! The copy mechanism is a capability selected once at startup:
//! - Linux delegates to `cp -rf` (fast, kernel-assisted where available).
//! - macOS delegates to `ditto`, which preserves extended metadata/resource forks.
//! - Everywhere else a direct buffered byte-stream copy is used.
//!
//! The stream path never clobbers: the destination is created with
//! `create_new`, and the synchronizer has already skipped existing targets.
//! All errors propagate; file handles are scoped and released on every exit
//! path, success or failure.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::errors::SortError;

const BUF_SIZE: usize = 1024 * 1024; // 1 MiB buffers

#[derive(Clone, Copy, Debug)]
enum Strategy {
    /// Spawn an external copy utility; nonzero exit or launch failure is an error.
    Subprocess {
        utility: &'static str,
        recursive_force: bool,
    },
    /// Direct buffered byte-stream copy.
    Stream,
}

/// File-copy capability, polymorphic over the runtime platform.
#[derive(Clone, Copy, Debug)]
pub struct FileCopier {
    strategy: Strategy,
}

impl FileCopier {
    /// Select the copy strategy for the current platform. Called once at
    /// startup; the choice does not change per file.
    pub fn for_platform() -> Self {
        let strategy = if cfg!(target_os = "linux") {
            Strategy::Subprocess {
                utility: "cp",
                recursive_force: true,
            }
        } else if cfg!(target_os = "macos") {
            Strategy::Subprocess {
                utility: "ditto",
                recursive_force: false,
            }
        } else {
            Strategy::Stream
        };
        Self { strategy }
    }

    /// Always use the direct stream copy, regardless of platform.
    pub fn streaming() -> Self {
        Self {
            strategy: Strategy::Stream,
        }
    }

    /// Copy `from` -> `to`, creating the destination with `mode` (Unix
    /// permission bits; ignored where they don't apply).
    pub fn copy(&self, from: &Path, to: &Path, mode: u32) -> Result<(), SortError> {
        match self.strategy {
            Strategy::Subprocess {
                utility,
                recursive_force,
            } => copy_via_utility(utility, recursive_force, from, to),
            Strategy::Stream => copy_streaming(from, to, mode),
        }
    }
}

fn copy_via_utility(
    utility: &'static str,
    recursive_force: bool,
    from: &Path,
    to: &Path,
) -> Result<(), SortError> {
    let mut cmd = Command::new(utility);
    if recursive_force {
        cmd.arg("-rf");
    }
    cmd.arg(from).arg(to);
    debug!(utility, from = %from.display(), to = %to.display(), "spawning copy utility");

    let status = cmd.status().map_err(|e| SortError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    })?;

    if !status.success() {
        return Err(SortError::CopyProcess {
            utility,
            status,
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
    }
    Ok(())
}

/// Buffered streaming copy. The destination is opened with `create_new` and
/// the requested mode; every open/read/write error propagates to the caller.
fn copy_streaming(from: &Path, to: &Path, mode: u32) -> Result<(), SortError> {
    let copy_err = |e: io::Error| SortError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    };

    let src = File::open(from).map_err(copy_err)?;

    let mut opts = OpenOptions::new();
    opts.write(true).create_new(true);
    #[cfg(unix)]
    opts.mode(mode);
    #[cfg(not(unix))]
    let _ = mode;
    let dst = opts.open(to).map_err(copy_err)?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, src);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst);
    let bytes = io::copy(&mut reader, &mut writer).map_err(copy_err)?;
    writer.flush().map_err(copy_err)?;

    debug!(bytes, to = %to.display(), "stream copy complete");
    Ok(())
}
