// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    catalog::Catalog,
    config::{
        options::{AppOptions, PageKind},
        state::AppState,
    },
    featured::Featured,
    form::TripForm,
    photos,
    store,
};

use super::{
    components::{dialogs, sidebar},
    pages::Page,
    router,
};

pub fn run(options: eframe::NativeOptions, app_options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Trip Manager - Team Weekend Trekkers",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::new(app_options))))),
    )?;
    Ok(())
}

/// Modal windows. At most one is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dialog {
    Message { title: String, body: String },
    ConfirmDelete { index: usize, id: String, title: String },
    UnsavedOnClose,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub catalog: Catalog,
    pub featured: Featured,

    // editor page buffer
    pub form: TripForm,

    // trips page row selection (catalog index)
    pub selected: Option<usize>,

    // featured page combo box
    pub featured_pick: Option<String>,

    // photos page listing
    pub photos: Vec<String>,

    pub dialog: Option<Dialog>,

    // status line (preview thread writes here too)
    pub status: Arc<Mutex<String>>,

    pub preview_url: Option<String>,

    // set once the user has answered the unsaved-changes prompt
    pub allow_close: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let paths = &state.options.project;
        let mut dialog = None;
        let mut status = s!("Ready");

        let catalog = match store::load_trips(&paths.trips_file()) {
            Ok(trips) => {
                status = format!("Loaded {} trips", trips.len());
                Catalog::new(trips)
            }
            Err(e) => {
                loge!("Init: {e}");
                dialog = Some(Dialog::Message { title: s!("Error"), body: e.to_string() });
                Catalog::default()
            }
        };

        let featured = Featured::load(&paths.featured_file());
        let photos = photos::list_photos(&paths.images_dir()).unwrap_or_default();

        logf!(
            "Init: root={}, trips={}, featured={}, photos={}",
            paths.root().display(),
            catalog.len(),
            featured.len(),
            photos.len()
        );

        Self {
            state,
            catalog,
            featured,
            form: TripForm::blank(),
            selected: None,
            featured_pick: None,
            photos,
            dialog,
            status: Arc::new(Mutex::new(status)),
            preview_url: None,
            allow_close: false,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    pub fn go_to(&mut self, kind: PageKind) {
        let prev = self.current_page_kind();
        self.state.gui.current_page_index = router::index_of(kind);
        logd!("UI: Page {:?} → {:?}", prev, kind);
        router::page_for(kind).on_enter(self);
    }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn message<T: Into<String>, B: Into<String>>(&mut self, title: T, body: B) {
        self.dialog = Some(Dialog::Message { title: title.into(), body: body.into() });
    }

    /// Unsaved trips or featured changes.
    pub fn is_dirty(&self) -> bool {
        self.catalog.is_dirty() || self.featured.is_dirty()
    }

    pub fn new_trip(&mut self) {
        self.form = TripForm::blank();
        self.go_to(PageKind::Editor);
    }

    pub fn edit_trip(&mut self, index: usize) {
        let Some(trip) = self.catalog.get(index) else {
            self.status(format!("No trip at row {index}"));
            return;
        };
        self.form = TripForm::from_trip(index, trip);
        self.go_to(PageKind::Editor);
    }

    pub fn ask_delete(&mut self, index: usize) {
        if let Some(trip) = self.catalog.get(index) {
            self.dialog = Some(Dialog::ConfirmDelete {
                index,
                id: trip.id.clone(),
                title: trip.title.clone(),
            });
        }
    }

    pub fn refresh_photos(&mut self) {
        match photos::list_photos(&self.state.options.project.images_dir()) {
            Ok(list) => self.photos = list,
            Err(e) => {
                loge!("Photos: {e}");
                self.status(format!("Could not list photos: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) && self.is_dirty() && !self.allow_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.dialog = Some(Dialog::UnsavedOnClose);
        }

        egui::SidePanel::left("nav")
            .resizable(false)
            .exact_width(190.0)
            .show(ctx, |ui| {
                sidebar::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            ui.heading(page.title());
            ui.separator();
            page.draw(ui, self);
        });

        dialogs::draw(ctx, self);

        // preview thread may have written the status line
        if self.preview_url.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(500));
        }
    }
}
