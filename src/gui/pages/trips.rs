// src/gui/pages/trips.rs
//
// Searchable trip list with New / Edit / Delete. Double-click a row to edit.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::config::options::PageKind::{self, *};
use crate::gui::app::App;

use super::Page;

pub struct TripsPage;
pub static PAGE: TripsPage = TripsPage;

struct Row {
    index: usize,
    id: String,
    title: String,
    summary: String,
    dates: usize,
}

impl Page for TripsPage {
    fn kind(&self) -> PageKind { Trips }
    fn title(&self) -> &'static str { "Trips" }
    fn nav_label(&self) -> &'static str { "🗺 All Trips" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal(|ui| {
            ui.label("🔍 Search:");
            let resp = ui.add(
                egui::TextEdit::singleline(&mut app.state.gui.search_text)
                    .hint_text("title contains…")
                    .desired_width(240.0),
            );
            if resp.changed() {
                app.selected = None;
            }
            if ui.small_button("✖").on_hover_text("Clear search").clicked() {
                app.state.gui.search_text.clear();
            }
        });

        ui.horizontal(|ui| {
            if ui.button("➕ New Trip").clicked() {
                app.new_trip();
            }
            let has_sel = app.selected.is_some();
            if ui.add_enabled(has_sel, egui::Button::new("✏ Edit")).clicked() {
                if let Some(ix) = app.selected {
                    app.edit_trip(ix);
                }
            }
            if ui.add_enabled(has_sel, egui::Button::new("🗑 Delete")).clicked() {
                if let Some(ix) = app.selected {
                    app.ask_delete(ix);
                }
            }
        });

        ui.separator();

        let rows: Vec<Row> = app
            .catalog
            .search(&app.state.gui.search_text)
            .into_iter()
            .filter_map(|ix| app.catalog.get(ix).map(|t| (ix, t)))
            .map(|(index, t)| Row {
                index,
                id: t.id.clone(),
                title: t.title.clone(),
                summary: t.summary(),
                dates: t.available_dates.len(),
            })
            .collect();

        if rows.is_empty() {
            ui.label(if app.catalog.is_empty() {
                "No trips yet. Click ➕ New Trip to add one."
            } else {
                "No trips match the search."
            });
            return;
        }

        let mut clicked: Option<usize> = None;
        let mut open: Option<usize> = None;

        let selected = app.selected;
        let avail_h = ui.available_height();
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .sense(egui::Sense::click())
            .min_scrolled_height(0.0)
            .max_scroll_height(avail_h)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::initial(130.0).at_least(60.0).clip(true))
            .column(Column::initial(260.0).at_least(80.0).clip(true))
            .column(Column::initial(320.0).at_least(80.0).clip(true))
            .column(Column::remainder().at_least(50.0))
            .header(24.0, |mut header| {
                for h in ["ID", "Title", "Location | Price | Badge", "Dates"] {
                    header.col(|ui| {
                        ui.label(RichText::new(h).strong());
                    });
                }
            })
            .body(|body| {
                body.rows(22.0, rows.len(), |mut row| {
                    let r = &rows[row.index()];
                    row.set_selected(selected == Some(r.index));
                    row.col(|ui| { ui.monospace(&r.id); });
                    row.col(|ui| { ui.label(RichText::new(&r.title).strong()); });
                    row.col(|ui| { ui.label(&r.summary); });
                    row.col(|ui| { ui.label(r.dates.to_string()); });

                    let resp = row.response();
                    if resp.double_clicked() {
                        open = Some(r.index);
                    } else if resp.clicked() {
                        clicked = Some(r.index);
                    }
                });
            });

        if let Some(ix) = clicked {
            app.selected = if app.selected == Some(ix) { None } else { Some(ix) };
        }
        if let Some(ix) = open {
            app.selected = Some(ix);
            app.edit_trip(ix);
        }
    }
}
