// src/gui/actions/save.rs
use chrono::Local;

use crate::{gui::{app::App, progress::GuiProgress}, publish};

/// Write trips (with backup), bust caches, and write the featured list if it
/// changed. Returns false when anything failed; the message dialog says what.
pub fn save(app: &mut App) -> bool {
    let paths = app.state.options.project.clone();
    let now = Local::now();
    let mut progress = GuiProgress::new(app.status.clone());

    let report = match publish::save_catalog(&paths, &mut app.catalog, now, Some(&mut progress)) {
        Ok(r) => r,
        Err(e) => {
            loge!("Save: {e}");
            app.message("Error", format!("Failed to save: {e}"));
            return false;
        }
    };

    let mut msg = report.message();
    if app.featured.is_dirty() {
        if let Err(e) = app.featured.save(&paths.featured_file(), now) {
            loge!("Save: Featured: {e}");
            app.message("Error", format!("{msg}\n\nFailed to save featured trips: {e}"));
            return false;
        }
        msg.push_str("\n\n⭐ Featured trips saved.");
    }

    app.message("Saved", msg);
    true
}

pub fn save_featured(app: &mut App) {
    let path = app.state.options.project.featured_file();
    match app.featured.save(&path, Local::now()) {
        Ok(()) => {
            app.status("Featured trips saved");
            app.message("Saved", "Featured trips updated!\n\nRefresh your website to see the changes.");
        }
        Err(e) => {
            loge!("Featured: {e}");
            app.message("Error", format!("Failed to save featured trips: {e}"));
        }
    }
}
