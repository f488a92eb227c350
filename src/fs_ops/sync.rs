//! Recursive date-bucketed directory synchronization.
//!
//! Walks the source tree depth-first and copies every regular file into
//! `dest/<bucket>/<name>`, where the bucket is named after the file's
//! modification date. All recursion levels share the single destination root:
//! nested source subdirectories are flattened, never mirrored.
//!
//! Idempotent by construction: a file whose target path already exists is
//! skipped on path existence alone, with no content comparison.
//!
//! The synchronizer performs no console I/O. Progress is reported as
//! [`SyncEvent`] values through a caller-supplied sink; rendering (colors,
//! log lines) is the caller's concern.

use chrono::{DateTime, Local};
use std::collections::HashSet;
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, trace};

use crate::errors::SortError;

use super::copy::FileCopier;

/// Destination subdirectory name for a file modified at `modified`,
/// e.g. `20230501(Mon May 01 2023)`. Local time; deterministic per day.
pub fn bucket_name(modified: SystemTime) -> String {
    let local: DateTime<Local> = modified.into();
    local.format("%Y%m%d(%a %b %d %Y)").to_string()
}

/// Progress notifications emitted by [`Synchronizer::synchronize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// Recursing into a source subdirectory.
    EnterDirectory { path: PathBuf },
    /// A bucket directory was created under the destination root.
    BucketCreated { bucket: String },
    /// About to process a source file.
    Copying { source: PathBuf, target: PathBuf },
    /// The file was copied to its target path.
    Copied { source: PathBuf, target: PathBuf },
    /// The target path already existed; nothing was written.
    Skipped { source: PathBuf, target: PathBuf },
}

/// Owns the whole synchronization behavior: listing, bucket naming,
/// destination-index bookkeeping, recursion, and delegation of the byte
/// transfer to the platform-selected [`FileCopier`].
pub struct Synchronizer {
    copier: FileCopier,
}

impl Synchronizer {
    pub fn new(copier: FileCopier) -> Self {
        Self { copier }
    }

    /// Copy every file under `source_dir` (recursively) into a date bucket
    /// under `dest_dir`. Fail-fast: the first error aborts the whole run.
    pub fn synchronize(
        &self,
        source_dir: &Path,
        dest_dir: &Path,
        sink: &mut dyn FnMut(SyncEvent),
    ) -> Result<(), SortError> {
        // Realize the full source listing before touching the destination, so
        // an unreadable source never leaves a partially created destination.
        let entries = list_dir(source_dir).map_err(|e| SortError::SourceRead {
            path: source_dir.to_path_buf(),
            source: e,
        })?;

        ensure_dir_0755(dest_dir)?;

        // DestinationIndex: bucket subdirectory names present at this level.
        // Built once from the listing, then grown in memory as buckets are
        // created, so a repeated bucket never triggers redundant creation.
        let mut buckets: HashSet<String> = HashSet::new();
        for entry in fs::read_dir(dest_dir).map_err(|e| SortError::DestinationRead {
            path: dest_dir.to_path_buf(),
            source: e,
        })? {
            let entry = entry.map_err(|e| SortError::DestinationRead {
                path: dest_dir.to_path_buf(),
                source: e,
            })?;
            let is_dir = entry
                .file_type()
                .map_err(|e| SortError::DestinationRead {
                    path: dest_dir.to_path_buf(),
                    source: e,
                })?
                .is_dir();
            // Non-UTF-8 names can never collide with a generated bucket name.
            if is_dir && let Ok(name) = entry.file_name().into_string() {
                buckets.insert(name);
            }
        }

        // Entries are processed in listing order: platform-defined, unsorted.
        for entry in entries {
            let path = entry.path();
            let source_err = |e: std::io::Error| SortError::SourceRead {
                path: path.clone(),
                source: e,
            };

            if entry.file_type().map_err(source_err)?.is_dir() {
                sink(SyncEvent::EnterDirectory { path: path.clone() });
                // Same destination root for every nesting level.
                self.synchronize(&path, dest_dir, sink)?;
                continue;
            }

            // Anything that isn't a directory is treated as a file.
            let meta = entry.metadata().map_err(source_err)?;
            let modified = meta.modified().map_err(source_err)?;
            let bucket = bucket_name(modified);
            trace!(source = %path.display(), %bucket, "bucketed by modification date");

            let target = dest_dir.join(&bucket).join(entry.file_name());
            sink(SyncEvent::Copying {
                source: path.clone(),
                target: target.clone(),
            });

            if !buckets.contains(&bucket) {
                ensure_dir_0755(&dest_dir.join(&bucket))?;
                sink(SyncEvent::BucketCreated {
                    bucket: bucket.clone(),
                });
                buckets.insert(bucket);
            }

            // Path existence alone decides the skip; no content comparison.
            if fs::symlink_metadata(&target).is_ok() {
                sink(SyncEvent::Skipped {
                    source: path,
                    target,
                });
                continue;
            }

            self.copier.copy(&path, &target, file_mode(&meta))?;
            sink(SyncEvent::Copied {
                source: path,
                target,
            });
        }

        Ok(())
    }
}

fn list_dir(dir: &Path) -> std::io::Result<Vec<fs::DirEntry>> {
    fs::read_dir(dir)?.collect()
}

/// Create `dir` (with parents) if absent, mode 0755 on Unix. Existing
/// directories are left untouched, permissions included.
fn ensure_dir_0755(dir: &Path) -> Result<(), SortError> {
    if fs::symlink_metadata(dir).is_ok() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| SortError::DirectoryCreate {
        path: dir.to_path_buf(),
        source: e,
    })?;
    // Mode fixup after creation: umask may have masked bits off. The
    // directory itself exists at this point, so a chmod failure is not fatal.
    #[cfg(unix)]
    if let Err(e) = fs::set_permissions(dir, fs::Permissions::from_mode(0o755)) {
        debug!(path = %dir.display(), error = %e, "could not set directory mode to 0755");
    }
    Ok(())
}

#[cfg(unix)]
fn file_mode(meta: &fs::Metadata) -> u32 {
    meta.permissions().mode()
}

#[cfg(not(unix))]
fn file_mode(_meta: &fs::Metadata) -> u32 {
    0o644
}
