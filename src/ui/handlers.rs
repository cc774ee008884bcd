//! Event handlers for UI callbacks.
//!
//! Registers all Logic callbacks (select_directory, filter_edited,
//! activate_file, save_image) using the appropriate threading model for each
//! operation type.

use crate::config::SAVE_DIALOG_EXTENSIONS;
use crate::image_io;
use crate::state::{AppState, RefreshAction};
use crate::ui::image_display::load_and_display_image;
use crate::watcher::DirectoryWatcher;
use log::{debug, error, warn};
use rfd::AsyncFileDialog;
use slint::{ComponentHandle, StandardListViewItem, VecModel};
use std::path::Path;

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, state: &AppState) {
    // Directory selection handler
    // Uses slint::spawn_local because AsyncFileDialog must run on the main thread
    ui.global::<crate::Logic>().on_select_directory({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let ui_handle = ui_handle.clone();
            let state = state.clone();
            let _ = slint::spawn_local(async move {
                let current_dir = state.browser.lock().unwrap().directory().to_path_buf();

                let Some(folder) = AsyncFileDialog::new()
                    .set_directory(&current_dir)
                    .pick_folder()
                    .await
                else {
                    return;
                };

                let new_dir = folder.path().to_path_buf();
                if !new_dir.exists() {
                    return;
                }

                state.browser.lock().unwrap().set_directory(new_dir.clone());
                if let Some(ui) = ui_handle.upgrade() {
                    ui.global::<crate::ViewState>()
                        .set_directory(new_dir.display().to_string().into());
                }

                watch_directory(&ui_handle, &state, &new_dir);
                refresh_listing(ui_handle, state);
            });
        }
    });

    // Filter edit handler: replace the filter set wholesale and re-list
    ui.global::<crate::Logic>().on_filter_edited({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |input| {
            state.browser.lock().unwrap().set_filter(&input);
            refresh_listing(ui_handle.clone(), state.clone());
        }
    });

    // File activation (click or keyboard) in the list
    ui.global::<crate::Logic>().on_activate_file({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |index| {
            if index < 0 {
                return;
            }
            let path = state.browser.lock().unwrap().select_index(index as usize);
            if let Some(path) = path {
                load_and_display_image(ui_handle.clone(), path, state.clone());
            }
        }
    });

    // Save handler: writes the bitmap as displayed, not the source file
    ui.global::<crate::Logic>().on_save_image({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let ui_handle = ui_handle.clone();
            let state = state.clone();
            let _ = slint::spawn_local(async move {
                save_displayed_image(ui_handle, state).await;
            });
        }
    });
}

/// Replaces the active directory watch with one on `dir`.
///
/// The old handle is dropped in the swap, so at most one directory is ever
/// watched. A directory that cannot be watched leaves no watch at all.
pub fn watch_directory(ui_handle: &slint::Weak<crate::AppWindow>, state: &AppState, dir: &Path) {
    let watcher = {
        let ui_handle = ui_handle.clone();
        let state = state.clone();
        DirectoryWatcher::watch(dir, move || {
            debug!("Watched directory changed, re-listing");
            refresh_listing(ui_handle.clone(), state.clone());
        })
    };

    *state.watcher.lock().unwrap() = match watcher {
        Ok(watcher) => {
            debug!("Watching {}", watcher.directory().display());
            Some(watcher)
        }
        Err(e) => {
            warn!("{}", e);
            None
        }
    };
}

/// Re-lists the current directory on a worker thread, then applies the
/// listing and the display decision on the UI thread.
pub fn refresh_listing(ui_handle: slint::Weak<crate::AppWindow>, state: AppState) {
    rayon::spawn(move || {
        let (filenames, action) = {
            let mut browser = state.browser.lock().unwrap();
            let action = browser.refresh_listing();
            (browser.filenames().to_vec(), action)
        };

        let _ = slint::invoke_from_event_loop(move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };

            let items: Vec<StandardListViewItem> = filenames.iter().map(|n| list_item(n)).collect();
            ui.global::<crate::ViewState>()
                .set_file_list(slint::ModelRc::new(VecModel::from(items)));

            if let RefreshAction::LoadFirst(path) = action {
                load_and_display_image(ui.as_weak(), path, state.clone());
            }
        });
    });
}

fn list_item(name: &str) -> StandardListViewItem {
    let mut item = StandardListViewItem::default();
    item.text = name.into();
    item
}

/// Runs the save dialog and submits the encode job.
///
/// The dialog's default filename comes from the item currently highlighted
/// in the file list, which is not necessarily the displayed one. The job
/// writes the on-screen bitmap, downscaled rendition included.
async fn save_displayed_image(ui_handle: slint::Weak<crate::AppWindow>, state: AppState) {
    let (directory, default_name) = {
        let index = ui_handle
            .upgrade()
            .map(|ui| ui.global::<crate::ViewState>().get_current_file_index())
            .unwrap_or(-1);

        let browser = state.browser.lock().unwrap();
        let name = if index >= 0 {
            browser.filename_at(index as usize).unwrap_or_default()
        } else {
            String::new()
        };
        (browser.directory().to_path_buf(), name)
    };

    let Some(destination) = AsyncFileDialog::new()
        .add_filter("Images", &SAVE_DIALOG_EXTENSIONS)
        .set_directory(&directory)
        .set_file_name(&default_name)
        .save_file()
        .await
    else {
        debug!("Save cancelled");
        return;
    };

    let Some(bitmap) = state.displayed.lock().unwrap().clone() else {
        debug!("No image displayed, nothing to save");
        return;
    };

    let path = destination.path().to_path_buf();
    rayon::spawn(move || {
        let result = image_io::save_bitmap_blocking(&bitmap, &path);

        let _ = slint::invoke_from_event_loop(move || match result {
            Ok(()) => debug!("Saving was successful: {}", path.display()),
            Err(e) => {
                error!("{}", e);
                if let Some(ui) = ui_handle.upgrade() {
                    ui.global::<crate::ViewState>()
                        .set_status_message(e.to_string().into());
                }
            }
        });
    });
}
