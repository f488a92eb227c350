//! Typed error definitions for snapbin.
//! One variant per failure mode of the synchronizer, for better logs and tests.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failure modes of a synchronization run. All variants abort the run
/// immediately; "file already exists at target" is a skip, not an error.
#[derive(Debug, Error)]
pub enum SortError {
    #[error("cannot read source directory '{path}': {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read destination directory '{path}': {source}")]
    DestinationRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create directory '{path}': {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("copying '{from}' -> '{to}' failed: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("copy utility '{utility}' exited with {status} copying '{from}' -> '{to}'")]
    CopyProcess {
        utility: &'static str,
        status: ExitStatus,
        from: PathBuf,
        to: PathBuf,
    },
}
