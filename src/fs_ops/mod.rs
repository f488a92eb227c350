//! Filesystem operations: the platform-aware copier and the synchronizer core.

pub mod copy;
pub mod sync;

pub use copy::FileCopier;
pub use sync::{SyncEvent, Synchronizer, bucket_name};
