// src/gui/components/sidebar.rs
//
// Left panel: navigation, the global save button, and the status line.

use eframe::egui::{self, RichText};

use crate::config::options::PageKind::{Editor, Trips};
use crate::gui::{actions, app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(6.0);
    ui.heading("🏔 Trip Manager");
    ui.label(RichText::new("Team Weekend Trekkers").weak());
    ui.separator();

    let cur = app.current_index();
    for (idx, page) in router::all_pages().iter().enumerate() {
        if !page.in_nav() {
            continue;
        }
        // The editor highlights its parent list
        let selected = idx == cur || (page.kind() == Trips && app.current_page_kind() == Editor);
        if ui.selectable_label(selected, page.nav_label()).clicked() && idx != cur {
            app.go_to(page.kind());
        }
    }

    ui.separator();

    ui.label(format!("{} trips", app.catalog.len()));
    ui.label(format!("{} featured", app.featured.len()));

    ui.add_space(6.0);
    let dirty = app.is_dirty();
    let label = if dirty { "💾 Save Changes ●" } else { "💾 Save Changes" };
    if ui
        .add_enabled(dirty, egui::Button::new(RichText::new(label).strong()))
        .on_hover_text("Write trips-data.js (with backup) and refresh cache versions")
        .clicked()
    {
        actions::save(app);
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
        ui.add_space(4.0);
        ui.add(egui::Label::new(RichText::new(app.status_text()).small()).wrap());
        ui.separator();
    });
}
