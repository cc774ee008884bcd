//! State management for the image browser application.

use crate::config::DEFAULT_FILTER;
use crate::filter::FilterSet;
use crate::image_io::Bitmap;
use crate::watcher::DirectoryWatcher;
use std::path::PathBuf;
use std::sync::atomic::AtomicU64;
use std::sync::{Arc, Mutex};

pub mod browser;

pub use browser::{BrowserState, RefreshAction};

/// Application-wide state container.
#[derive(Clone)]
pub struct AppState {
    pub browser: Arc<Mutex<BrowserState>>,
    /// Ticket counter for image loads. Only the completion holding the most
    /// recently issued ticket may update the display.
    pub load_seq: Arc<AtomicU64>,
    /// The bitmap currently on screen. Save encodes this buffer.
    pub displayed: Arc<Mutex<Option<Bitmap>>>,
    /// Active directory watch, replaced wholesale on directory switch.
    pub watcher: Arc<Mutex<Option<DirectoryWatcher>>>,
}

impl AppState {
    pub fn new() -> Self {
        let home = directories::UserDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            browser: Arc::new(Mutex::new(BrowserState::new(
                home,
                FilterSet::parse(DEFAULT_FILTER),
            ))),
            load_seq: Arc::new(AtomicU64::new(0)),
            displayed: Arc::new(Mutex::new(None)),
            watcher: Arc::new(Mutex::new(None)),
        }
    }
}
