// src/gui/components/dialogs.rs
//
// The one open modal (message, delete confirmation, unsaved-changes prompt).

use eframe::egui::{self, Align2, RichText};

use crate::gui::{
    actions,
    app::{App, Dialog},
};

enum Answer {
    Close,
    Delete(usize),
    SaveAndQuit,
    Quit,
}

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(dialog) = app.dialog.clone() else { return };

    let mut answer: Option<Answer> = None;

    let title = match &dialog {
        Dialog::Message { title, .. } => title.clone(),
        Dialog::ConfirmDelete { .. } => s!("Confirm Delete"),
        Dialog::UnsavedOnClose => s!("Unsaved Changes"),
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(320.0);
            match &dialog {
                Dialog::Message { body, .. } => {
                    ui.label(body);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        answer = Some(Answer::Close);
                    }
                }
                Dialog::ConfirmDelete { index, id, title } => {
                    ui.label(format!("Delete '{title}'?"));
                    ui.label(RichText::new(format!("ID: {id}")).weak());
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("🗑 Delete").clicked() {
                            answer = Some(Answer::Delete(*index));
                        }
                        if ui.button("Cancel").clicked() {
                            answer = Some(Answer::Close);
                        }
                    });
                }
                Dialog::UnsavedOnClose => {
                    ui.label("You have unsaved changes. Save before closing?");
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("💾 Save").clicked() {
                            answer = Some(Answer::SaveAndQuit);
                        }
                        if ui.button("Don't Save").clicked() {
                            answer = Some(Answer::Quit);
                        }
                        if ui.button("Cancel").clicked() {
                            answer = Some(Answer::Close);
                        }
                    });
                }
            }
        });

    let Some(answer) = answer else { return };
    app.dialog = None;

    match answer {
        Answer::Close => {}
        Answer::Delete(index) => actions::delete(app, index),
        Answer::SaveAndQuit => {
            if actions::save(app) {
                quit(ctx, app);
            }
        }
        Answer::Quit => {
            logf!("UI: Closing without saving");
            quit(ctx, app);
        }
    }
}

fn quit(ctx: &egui::Context, app: &mut App) {
    app.allow_close = true;
    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
}
