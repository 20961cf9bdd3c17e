//! Galerie: Raster gespeicherter Probleme und Viewer.

use super::textures::TextureCache;
use crate::app::{AppIntent, AppState};

const THUMBNAIL_SIZE: f32 = 160.0;

/// Rendert das Galerie-Raster.
pub fn render_gallery(
    ui: &mut egui::Ui,
    state: &AppState,
    textures: &mut TextureCache,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(kind) = state.gallery_kind() else {
        return events;
    };

    ui.horizontal(|ui| {
        ui.heading(format!("{} problems", kind));
        if ui.button("⟳ Refresh").clicked() {
            events.push(AppIntent::GalleryRefreshRequested);
        }
    });
    ui.add_space(8.0);

    if state.gallery.problems.is_empty() {
        ui.label("Noch keine gespeicherten Probleme.");
        return events;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for (index, problem) in state.gallery.problems.iter().enumerate() {
                ui.vertical(|ui| {
                    ui.set_width(THUMBNAIL_SIZE);
                    let clicked = match textures.thumbnail(ui.ctx(), state, problem.id) {
                        Some(texture) => ui
                            .add(
                                egui::Image::new(&texture)
                                    .max_size(egui::vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE))
                                    .sense(egui::Sense::click()),
                            )
                            .clicked(),
                        None => {
                            let (rect, response) = ui.allocate_exact_size(
                                egui::vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE),
                                egui::Sense::click(),
                            );
                            ui.painter()
                                .rect_filled(rect, 2.0, egui::Color32::from_rgb(60, 60, 60));
                            response.clicked()
                        }
                    };
                    if clicked {
                        events.push(AppIntent::ViewerOpened { index });
                    }
                    ui.label(egui::RichText::new(&problem.name).strong());
                    if !problem.tags.is_empty() {
                        ui.label(egui::RichText::new(problem.tags.join(", ")).small());
                    }
                });
                ui.add_space(8.0);
            }
        });
    });

    events
}

/// Zeigt das im Viewer geöffnete Problem in voller Größe.
pub fn show_viewer(
    ctx: &egui::Context,
    state: &AppState,
    textures: &mut TextureCache,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let (Some(index), Some(problem)) = (state.gallery.viewer_index, state.gallery.viewed_problem())
    else {
        return events;
    };

    egui::Window::new(problem.name.as_str())
        .id(egui::Id::new("problem_viewer"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(texture) = textures.thumbnail(ctx, state, problem.id) {
                ui.add(egui::Image::new(&texture).max_size(egui::vec2(600.0, 600.0)));
            }

            ui.label(format!(
                "{} · {} · {}/{}",
                problem.kind,
                problem.created_at.format("%Y-%m-%d %H:%M"),
                index + 1,
                state.gallery.problems.len()
            ));
            if !problem.tags.is_empty() {
                ui.label(format!("Tags: {}", problem.tags.join(", ")));
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("⏴").clicked() {
                    events.push(AppIntent::ViewerPrevious);
                }
                if ui.button("⏵").clicked() {
                    events.push(AppIntent::ViewerNext);
                }
                ui.separator();
                if ui.button("Tags…").clicked() {
                    events.push(AppIntent::TagEditorOpened {
                        problem_id: problem.id,
                    });
                }
                if ui.button("Löschen…").clicked() {
                    events.push(AppIntent::DeleteDialogOpened {
                        problem_id: problem.id,
                    });
                }
                ui.separator();
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::ViewerClosed);
                }
            });
        });

    // Pfeiltasten nur ohne offenen Dialog (Texteingabe)
    if state.ui.tag_editor.is_none() && state.ui.delete_dialog.is_none() {
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
            events.push(AppIntent::ViewerPrevious);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
            events.push(AppIntent::ViewerNext);
        }
    }

    events
}
