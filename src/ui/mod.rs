//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - `slint::spawn_local`: file dialogs and anything that must stay on the main thread
//! - `rayon::spawn`: image decode/encode and directory listing
//! - `slint::invoke_from_event_loop`: returning worker results to the UI thread

pub mod handlers;
pub mod image_display;

pub use handlers::setup_handlers;
