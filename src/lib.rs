//! Core library for `snapbin`.
//!
//! Sorts photo files from a source tree into date-named bucket directories
//! under a single destination root. The interesting part is the recursive
//! synchronizer in [`fs_ops::sync`]; everything else (CLI, logging, colored
//! output) is thin glue around it.

pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod logging;
pub mod output;

pub use config::{Config, LogLevel};
pub use errors::SortError;
pub use fs_ops::copy::FileCopier;
pub use fs_ops::sync::{Synchronizer, SyncEvent, bucket_name};
