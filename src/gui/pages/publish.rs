// src/gui/pages/publish.rs
//
// Save + local preview. Deployment stays outside the manager.

use std::fs;

use eframe::egui::{self, RichText};

use crate::cache_bust;
use crate::config::options::PageKind::{self, *};
use crate::gui::{actions, app::App};

use super::Page;

pub struct PublishPage;
pub static PAGE: PublishPage = PublishPage;

impl Page for PublishPage {
    fn kind(&self) -> PageKind { Publish }
    fn title(&self) -> &'static str { "Save & Preview" }
    fn nav_label(&self) -> &'static str { "🚀 Save & Preview" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let paths = app.state.options.project.clone();

        egui::Grid::new("publish_paths")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.label("Project");
                ui.monospace(paths.root().display().to_string());
                ui.end_row();
                ui.label("Trips file");
                ui.monospace(paths.trips_file().display().to_string());
                ui.end_row();
                ui.label("Backup");
                let backup = paths.backup_file();
                ui.monospace(if backup.exists() { backup.display().to_string() } else { s!("(none yet)") });
                ui.end_row();
                ui.label("Cache version");
                let version = paths
                    .html_files()
                    .first()
                    .and_then(|f| fs::read_to_string(f).ok())
                    .and_then(|html| cache_bust::current_version(&html));
                ui.monospace(version.map(|v| v.to_string()).unwrap_or_else(|| s!("-")));
                ui.end_row();
            });

        ui.add_space(8.0);

        let dirty = app.is_dirty();
        ui.label(if dirty {
            RichText::new("● You have unsaved changes").color(egui::Color32::from_rgb(0xF0, 0xA0, 0x30))
        } else {
            RichText::new("All changes saved").weak()
        });

        ui.horizontal(|ui| {
            if ui.add_enabled(dirty, egui::Button::new("💾 Save Changes")).clicked() {
                actions::save(app);
            }
            if ui.button("👁 Preview Website").clicked() {
                actions::preview(app);
            }
            if ui.button("📁 Open Project Folder").clicked() {
                actions::open_folder(app, paths.root());
            }
        });

        if let Some(url) = app.preview_url.clone() {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label("Local server:");
                ui.hyperlink(&url);
            });
            ui.label(RichText::new("Runs until the manager is closed.").weak());
        }
    }
}
