//! Image loading and display logic.
//!
//! Decoding runs on `rayon::spawn`; the completion returns to the UI thread
//! through `slint::invoke_from_event_loop`. Every load takes a ticket from
//! the shared counter and the completion only touches the display while its
//! ticket is still the latest, so an older decode finishing late can never
//! overwrite a newer image.

use crate::config::{DISPLAY_MARGIN, FALLBACK_FIT_BOX};
use crate::image_io;
use crate::state::AppState;
use log::{debug, error};
use slint::ComponentHandle;
use std::path::PathBuf;
use std::sync::atomic::Ordering;

/// The box the displayed image must fit in: the window size minus fixed
/// margins, or a fallback while the window has no usable size yet.
fn fit_box(ui: &crate::AppWindow) -> (u32, u32) {
    let size = ui.window().size();
    if size.width > DISPLAY_MARGIN && size.height > DISPLAY_MARGIN {
        (size.width - DISPLAY_MARGIN, size.height - DISPLAY_MARGIN)
    } else {
        FALLBACK_FIT_BOX
    }
}

/// Loads an image in a background thread and updates the display.
///
/// A nonexistent path never changes the display. A failed decode leaves the
/// previous image on screen; the reason goes to the log and the status line.
pub fn load_and_display_image(ui: slint::Weak<crate::AppWindow>, path: PathBuf, state: AppState) {
    if !path.exists() {
        debug!("Ignoring load of nonexistent file {}", path.display());
        return;
    }

    let ticket = state.load_seq.fetch_add(1, Ordering::SeqCst) + 1;
    let (max_width, max_height) = match ui.upgrade() {
        Some(ui) => fit_box(&ui),
        None => return,
    };

    rayon::spawn(move || {
        let result = image_io::load_image_blocking(&path)
            .map(|bitmap| image_io::scale_to_fit(bitmap, max_width, max_height));

        let _ = slint::invoke_from_event_loop(move || {
            if state.load_seq.load(Ordering::SeqCst) != ticket {
                debug!("Dropping stale load result for {}", path.display());
                return;
            }
            let Some(ui) = ui.upgrade() else {
                return;
            };
            match result {
                Ok(bitmap) => {
                    let image = image_io::create_slint_image(&bitmap);
                    let view = ui.global::<crate::ViewState>();
                    view.set_displayed_image(image);
                    view.set_image_loaded(true);
                    view.set_status_message("".into());
                    *state.displayed.lock().unwrap() = Some(bitmap);
                }
                Err(e) => {
                    error!("{}", e);
                    ui.global::<crate::ViewState>()
                        .set_status_message(e.to_string().into());
                }
            }
        });
    });
}
