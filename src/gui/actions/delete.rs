// src/gui/actions/delete.rs
use crate::gui::app::App;

/// Called after the user confirmed. Featured ids pointing at the trip are
/// left alone; they show as Unknown until removed.
pub fn delete(app: &mut App, index: usize) {
    match app.catalog.remove(index) {
        Ok(trip) => {
            app.selected = None;
            app.status(format!("Deleted '{}'. Don't forget to save!", trip.title));
        }
        Err(e) => {
            loge!("Delete: {e}");
            app.message("Error", e.to_string());
        }
    }
}
