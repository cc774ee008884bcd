//! Debounced watching of a single directory.
//!
//! The handle owns the underlying debouncer; dropping it stops the watch.
//! The controller holds at most one handle and replaces it wholesale when
//! the directory changes, so only one directory is ever watched.

use crate::config::WATCH_DEBOUNCE;
use crate::error::{AppError, Result};
use log::{debug, warn};
use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{new_debouncer_opt, Config, DebounceEventResult, Debouncer};
use std::path::{Path, PathBuf};

/// Owned watch on one directory, delivering debounced change notifications.
pub struct DirectoryWatcher {
    _debouncer: Debouncer<RecommendedWatcher>,
    directory: PathBuf,
}

impl DirectoryWatcher {
    /// Starts watching `directory` (non-recursive).
    ///
    /// `on_change` runs on the watcher's own thread once per debounce window
    /// that saw at least one event; callers marshal back to the UI thread
    /// themselves.
    pub fn watch<F>(directory: &Path, on_change: F) -> Result<Self>
    where
        F: Fn() + Send + 'static,
    {
        let config = Config::default().with_timeout(WATCH_DEBOUNCE);

        let mut debouncer = new_debouncer_opt::<_, RecommendedWatcher>(
            config,
            move |result: DebounceEventResult| match result {
                Ok(events) if !events.is_empty() => {
                    debug!("{} debounced filesystem events", events.len());
                    on_change();
                }
                Ok(_) => {}
                Err(error) => warn!("File watcher error: {}", error),
            },
        )
        .map_err(|e| AppError::Watch(format!("failed to create watcher: {}", e)))?;

        debouncer
            .watcher()
            .watch(directory, RecursiveMode::NonRecursive)
            .map_err(|e| {
                AppError::Watch(format!("failed to watch {}: {}", directory.display(), e))
            })?;

        Ok(Self {
            _debouncer: debouncer,
            directory: directory.to_path_buf(),
        })
    }

    /// The directory this handle watches.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
