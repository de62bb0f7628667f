// src/gui/actions/preview.rs
use crate::{desktop, gui::app::App, preview};

/// Start the local server once; later clicks just reopen the browser.
pub fn preview(app: &mut App) {
    if let Some(url) = app.preview_url.clone() {
        open_browser(app, &url);
        return;
    }

    let opts = app.state.options.preview.clone();
    let root = app.state.options.project.root().to_path_buf();

    match preview::start(&root, &opts, Some(app.status.clone())) {
        Ok(handle) => {
            let url = handle.url();
            app.status(format!("Local server running at {url}"));
            if opts.open_browser {
                open_browser(app, &url);
            }
            // Detached; lives until the process exits
            app.preview_url = Some(url);
        }
        Err(e) => {
            loge!("Preview: {e}");
            app.message("Preview", e.to_string());
        }
    }
}

fn open_browser(app: &App, url: &str) {
    if let Err(e) = desktop::open_in_system(url) {
        loge!("Preview: {e}");
        app.status(format!("Open {url} in your browser ({e})"));
    }
}
