//! Application orchestrator.
//! Builds the config from CLI args, initializes logging, selects the
//! platform copy capability, runs the synchronizer and renders its events.

use anyhow::Result;
use tracing::{debug, error, info};

use crate::cli::Args;
use crate::fs_ops::{FileCopier, SyncEvent, Synchronizer};
use crate::logging::init_tracing;
use crate::output as out;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let cfg = args.to_config();

    init_tracing(&cfg.log_level, args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting snapbin: {:?}", args);
    cfg.validate()?;

    let synchronizer = Synchronizer::new(FileCopier::for_platform());

    let mut copied: usize = 0;
    let mut skipped: usize = 0;
    let mut render = |event: SyncEvent| match event {
        SyncEvent::EnterDirectory { path } => {
            debug!(path = %path.display(), "descending into directory");
        }
        SyncEvent::BucketCreated { bucket } => {
            debug!(%bucket, "created bucket directory");
        }
        SyncEvent::Copying { source, .. } => {
            info!(source = %source.display(), "copying");
        }
        SyncEvent::Copied { source, target } => {
            copied += 1;
            out::print_success(&format!("{} -> {}", source.display(), target.display()));
        }
        SyncEvent::Skipped { target, .. } => {
            skipped += 1;
            out::print_skip(&format!("file exists, skipping: {}", target.display()));
        }
    };

    let result = synchronizer.synchronize(&cfg.input_dir, &cfg.output_dir, &mut render);
    drop(render);

    match result {
        Ok(()) => {
            info!(copied, skipped, "synchronization completed");
            out::print_user(&format!("{} copied, {} skipped", copied, skipped));
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "synchronization failed");
            Err(e.into())
        }
    }
}
