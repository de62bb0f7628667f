// src/gui/pages/photos.rs
use std::path::PathBuf;

use eframe::egui::{self, RichText};

use crate::config::{consts::PHOTO_EXTS, options::PageKind::{self, *}};
use crate::gui::{actions, app::App};
use crate::photos;

use super::Page;

pub struct PhotosPage;
pub static PAGE: PhotosPage = PhotosPage;

impl Page for PhotosPage {
    fn kind(&self) -> PageKind { Photos }
    fn title(&self) -> &'static str { "Photos" }
    fn nav_label(&self) -> &'static str { "📸 Photos" }

    fn on_enter(&self, app: &mut App) {
        app.refresh_photos();
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let dir = app.state.options.project.images_dir();
        ui.label(format!("Trip photos live in {}", dir.display()));
        ui.label(
            RichText::new("Name a photo after its trip ID (e.g. netravati.jpg) to use it as the default image.")
                .weak(),
        );
        ui.add_space(6.0);

        let mut import = false;
        ui.horizontal(|ui| {
            ui.label("File:");
            let resp = ui.add(
                egui::TextEdit::singleline(&mut app.state.gui.photo_import_text)
                    .hint_text(format!("/path/to/photo ({})", PHOTO_EXTS.join(", ")))
                    .font(egui::TextStyle::Monospace)
                    .desired_width(380.0),
            );
            let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            import = ui.button("📥 Import").clicked() || enter;
            if ui.button("📁").on_hover_text("Open photos folder").clicked() {
                actions::open_folder(app, &dir);
            }
            if ui.button("🔄").on_hover_text("Refresh").clicked() {
                app.refresh_photos();
            }
        });

        if import {
            let typed = app.state.gui.photo_import_text.trim().to_string();
            if typed.is_empty() {
                app.status("Type the path of a photo to import");
            } else {
                match photos::import_photo(&PathBuf::from(&typed), &dir) {
                    Ok(dest) => {
                        app.state.gui.photo_import_text.clear();
                        app.refresh_photos();
                        let name = dest.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
                        app.status(format!("Imported {name}"));
                    }
                    Err(e) => app.message("Import failed", e.to_string()),
                }
            }
        }

        ui.separator();
        ui.label(RichText::new(format!("{} photos", app.photos.len())).strong());

        egui::ScrollArea::vertical()
            .id_salt("photos_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for name in &app.photos {
                    let stem = name.rsplit_once('.').map(|(s, _)| s).unwrap_or(name);
                    let used = app.catalog.contains_id(stem);
                    ui.horizontal(|ui| {
                        ui.monospace(name);
                        if used {
                            ui.label(RichText::new(format!("← {stem}")).weak());
                        }
                    });
                }
            });
    }
}
