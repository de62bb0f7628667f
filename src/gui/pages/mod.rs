// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::options::PageKind;

use super::app::App;

pub mod editor;
pub mod featured;
pub mod photos;
pub mod publish;
pub mod trips;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Label in the navigation list. Defaults to the title.
    fn nav_label(&self) -> &'static str {
        self.title()
    }

    /// Whether the page shows in the navigation list. The editor is only
    /// reached through New/Edit.
    fn in_nav(&self) -> bool {
        true
    }

    /// Called when the page becomes active (e.g. refresh a listing).
    fn on_enter(&self, _app: &mut App) {}

    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
