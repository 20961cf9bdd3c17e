//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, Screen};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.ui.screen {
                Screen::Menu => {
                    ui.label("Menü");
                }
                Screen::TypeSelect => {
                    ui.label("Problemtyp wählen");
                }
                Screen::Create(kind) => {
                    ui.label(format!("Editor: {}", kind));
                    ui.separator();
                    match &state.editor.wall_image {
                        Some(image) => {
                            let (w, h) = image.backing_size();
                            let (nw, nh) = image.natural_size();
                            ui.label(format!(
                                "Wandfoto: {} {}x{} (Original {}x{})",
                                image.source_label(),
                                w,
                                h,
                                nw,
                                nh
                            ));
                        }
                        None => {
                            ui.label("Kein Wandfoto");
                        }
                    }
                    ui.separator();
                    ui.label(format!("Griffe: {}", state.editor.annotations.len()));
                }
                Screen::Gallery(kind) => {
                    ui.label(format!(
                        "Galerie: {} ({} Probleme)",
                        kind,
                        state.gallery.problems.len()
                    ));
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Besitzer: {}", state.options.owner_id));
            });
        });
    });
}
