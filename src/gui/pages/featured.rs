// src/gui/pages/featured.rs
use eframe::egui::{self, RichText};

use crate::config::consts::MAX_FEATURED;
use crate::config::options::PageKind::{self, *};
use crate::gui::{actions, app::App};

use super::Page;

pub struct FeaturedPage;
pub static PAGE: FeaturedPage = FeaturedPage;

enum Op {
    Up(String),
    Down(String),
    Remove(String),
}

impl Page for FeaturedPage {
    fn kind(&self) -> PageKind { Featured }
    fn title(&self) -> &'static str { "Featured Trips" }
    fn nav_label(&self) -> &'static str { "⭐ Featured Trips" }

    fn on_enter(&self, app: &mut App) {
        app.featured_pick = None;
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.label(format!(
            "Trips shown in the homepage's \"Upcoming Adventures\" section, in order (max {MAX_FEATURED})."
        ));
        ui.add_space(6.0);

        let entries = app.featured.entries(&app.catalog);
        let last = entries.len().saturating_sub(1);
        let mut op: Option<Op> = None;

        egui::Grid::new("featured_list")
            .num_columns(3)
            .striped(true)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for (pos, (id, title)) in entries.iter().enumerate() {
                    ui.label(RichText::new(format!("{}.", pos + 1)).strong());
                    ui.label(format!("{title}  ({id})"));
                    ui.horizontal(|ui| {
                        if ui.add_enabled(pos > 0, egui::Button::new("⬆")).clicked() {
                            op = Some(Op::Up(id.clone()));
                        }
                        if ui.add_enabled(pos < last, egui::Button::new("⬇")).clicked() {
                            op = Some(Op::Down(id.clone()));
                        }
                        if ui.button("✖ Remove").clicked() {
                            op = Some(Op::Remove(id.clone()));
                        }
                    });
                    ui.end_row();
                }
            });

        if entries.is_empty() {
            ui.label("No featured trips.");
        }

        if let Some(op) = op {
            let result = match &op {
                Op::Up(id) => app.featured.move_up(id).map(|_| ()),
                Op::Down(id) => app.featured.move_down(id).map(|_| ()),
                Op::Remove(id) => app.featured.remove(id),
            };
            if let Err(e) = result {
                app.status(e.to_string());
            }
        }

        ui.separator();

        let available = app.featured.available(&app.catalog);
        let full = app.featured.len() >= MAX_FEATURED;
        ui.horizontal(|ui| {
            let shown = app
                .featured_pick
                .as_ref()
                .and_then(|id| available.iter().find(|(a, _)| a == id))
                .map(|(_, t)| t.clone())
                .unwrap_or_else(|| s!("Select a trip…"));

            ui.add_enabled_ui(!full && !available.is_empty(), |ui| {
                egui::ComboBox::from_id_salt("featured_add")
                    .selected_text(shown)
                    .width(260.0)
                    .show_ui(ui, |ui| {
                        for (id, title) in &available {
                            ui.selectable_value(&mut app.featured_pick, Some(id.clone()), title);
                        }
                    });
            });

            let can_add = !full && app.featured_pick.is_some();
            if ui.add_enabled(can_add, egui::Button::new("➕ Add")).clicked() {
                if let Some(id) = app.featured_pick.take() {
                    match app.featured.add(&id, &app.catalog) {
                        Ok(()) => app.status(format!("Featured '{id}'")),
                        Err(e) => app.message("Featured Trips", e.to_string()),
                    }
                }
            }
            if full {
                ui.label(RichText::new(format!("Maximum of {MAX_FEATURED} reached")).weak());
            }
        });

        ui.add_space(8.0);
        if ui
            .add_enabled(app.featured.is_dirty(), egui::Button::new("💾 Save Featured"))
            .clicked()
        {
            actions::save_featured(app);
        }
    }
}
