//! Initial window state: default directory and filter, first listing, watch.

use crate::config::DEFAULT_FILTER;
use crate::state::AppState;
use crate::ui::handlers;
use slint::ComponentHandle;

/// Seeds the UI from the default state and kicks off the first listing.
///
/// The first matching file of the starting directory, if any, is loaded by
/// the refresh decision.
pub fn configure_startup(app: &crate::AppWindow, state: &AppState) {
    let directory = state.browser.lock().unwrap().directory().to_path_buf();

    let view = app.global::<crate::ViewState>();
    view.set_directory(directory.display().to_string().into());
    view.set_filter_text(DEFAULT_FILTER.into());

    handlers::watch_directory(&app.as_weak(), state, &directory);
    handlers::refresh_listing(app.as_weak(), state.clone());
}
