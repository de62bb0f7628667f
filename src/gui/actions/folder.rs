// src/gui/actions/folder.rs
use std::path::Path;

use crate::{desktop, gui::app::App};

pub fn open_folder(app: &App, path: &Path) {
    if let Err(e) = desktop::open_folder(path) {
        loge!("Failed to open folder: {}", e);
        app.status(format!("Failed to open folder: {}", e));
    }
}
