//! Application configuration constants.

use std::time::Duration;

/// Default wildcard filter applied to directory listings.
pub const DEFAULT_FILTER: &str = "*.tif";

/// Extensions offered by the save dialog's "Images" filter.
pub const SAVE_DIALOG_EXTENSIONS: [&str; 2] = ["tif", "tiff"];

/// Pixels subtracted from each window dimension to get the image fit box.
pub const DISPLAY_MARGIN: u32 = 200;

/// Fit box used while the window has not reported a usable size yet.
pub const FALLBACK_FIT_BOX: (u32, u32) = (1720, 880);

/// Debounce window for filesystem change notifications.
pub const WATCH_DEBOUNCE: Duration = Duration::from_millis(500);
