// src/gui/pages/editor.rs
//
// Add/edit form. Everything binds to `app.form`; nothing touches the catalog
// until "Save Trip".

use eframe::egui::{self, RichText};

use crate::config::options::PageKind::{self, *};
use crate::form::TripForm;
use crate::gui::app::App;

use super::Page;

pub struct EditorPage;
pub static PAGE: EditorPage = EditorPage;

const LABEL_W: f32 = 110.0;

impl Page for EditorPage {
    fn kind(&self) -> PageKind { Editor }
    fn title(&self) -> &'static str { "Trip Editor" }
    fn in_nav(&self) -> bool { false }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let heading = match app.form.editing {
            Some(_) => format!("Edit Trip: {}", app.form.title),
            None => s!("Add New Trip"),
        };
        ui.label(RichText::new(heading).size(16.0).strong());
        ui.add_space(4.0);

        let mut submit = false;
        let mut cancel = false;
        ui.horizontal(|ui| {
            submit = ui.button("💾 Save Trip").clicked();
            cancel = ui.button("Cancel").clicked();
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("editor_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                basic_info(ui, &mut app.form);
                ui.add_space(8.0);
                date_list(ui, app);
                ui.add_space(8.0);
                list_fields(ui, &mut app.form);
                ui.add_space(8.0);
                itinerary(ui, &mut app.form);
            });

        if cancel {
            logd!("Editor: Cancelled");
            app.go_to(Trips);
        } else if submit {
            let is_new = app.form.is_new();
            match app.form.submit(&mut app.catalog) {
                Ok(ix) => {
                    app.selected = Some(ix);
                    let verb = if is_new { "added" } else { "updated" };
                    app.status(format!("Trip '{}' {verb}. Don't forget to save!", app.form.title.trim()));
                    app.go_to(Trips);
                }
                Err(e) => {
                    logd!("Editor: Rejected ({e})");
                    app.message("Validation Error", e.to_string());
                }
            }
        }
    }
}

fn basic_info(ui: &mut egui::Ui, form: &mut TripForm) {
    ui.label(RichText::new("📋 Basic Information").strong());
    egui::Grid::new("editor_basic")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .min_col_width(LABEL_W)
        .show(ui, |ui| {
            let id_hint = if form.is_new() { "e.g. netravati" } else { "" };
            ui.label("Trip ID *");
            ui.add(egui::TextEdit::singleline(&mut form.id).hint_text(id_hint).desired_width(320.0));
            ui.end_row();

            for (label, value) in [
                ("Title *", &mut form.title),
                ("Location", &mut form.location),
                ("Badge", &mut form.badge),
                ("Price (₹)", &mut form.price),
                ("Duration", &mut form.duration),
                ("Difficulty", &mut form.difficulty),
                ("Group Size", &mut form.group_size),
                ("Image Path", &mut form.image),
            ] {
                ui.label(label);
                ui.add(egui::TextEdit::singleline(value).desired_width(320.0));
                ui.end_row();
            }

            ui.label("About");
            ui.add(egui::TextEdit::multiline(&mut form.about).desired_rows(4).desired_width(480.0));
            ui.end_row();
        });
}

fn date_list(ui: &mut egui::Ui, app: &mut App) {
    ui.label(RichText::new("📅 Available Dates").strong());

    let mut remove: Option<usize> = None;
    for (i, d) in app.form.dates.iter().enumerate() {
        ui.horizontal(|ui| {
            ui.label(format!("• {d}"));
            if ui.small_button("✖").on_hover_text("Remove date").clicked() {
                remove = Some(i);
            }
        });
    }
    if let Some(i) = remove {
        app.form.remove_date(i);
    }

    let mut add = false;
    ui.horizontal(|ui| {
        ui.label("Start");
        ui.add(egui::TextEdit::singleline(&mut app.form.date_start).hint_text("YYYY-MM-DD").desired_width(100.0));
        ui.label("End");
        ui.add(egui::TextEdit::singleline(&mut app.form.date_end).hint_text("optional").desired_width(100.0));
        add = ui.button("➕ Add Date").clicked();
    });
    if add {
        match app.form.add_date_range() {
            Ok(label) => app.status(format!("Added date {label}")),
            Err(e) => app.message("Invalid date", e),
        }
    }
}

fn list_fields(ui: &mut egui::Ui, form: &mut TripForm) {
    for (label, value) in [
        ("✨ Highlights (one per line)", &mut form.highlights),
        ("✅ Inclusions (one per line)", &mut form.inclusions),
        ("❌ Exclusions (one per line)", &mut form.exclusions),
    ] {
        ui.label(RichText::new(label).strong());
        ui.add(egui::TextEdit::multiline(value).desired_rows(4).desired_width(f32::INFINITY));
        ui.add_space(4.0);
    }
}

fn itinerary(ui: &mut egui::Ui, form: &mut TripForm) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("🗓 Itinerary").strong());
        if ui.button("➕ Add Day").clicked() {
            form.add_day();
        }
    });

    let mut remove: Option<usize> = None;
    for (i, day) in form.itinerary.iter_mut().enumerate() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut day.day).desired_width(70.0));
                ui.add(egui::TextEdit::singleline(&mut day.title).hint_text("Day title").desired_width(320.0));
                if ui.small_button("🗑").on_hover_text("Remove day").clicked() {
                    remove = Some(i);
                }
            });
            ui.label("Activities (one per line)");
            ui.add(egui::TextEdit::multiline(&mut day.activities).desired_rows(3).desired_width(f32::INFINITY));
        });
    }
    if let Some(i) = remove {
        form.remove_day(i);
    }
}
