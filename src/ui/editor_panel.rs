//! Markier-Editor: Seitenleiste (Name, Bild, Speichern) und Canvas.

use super::input::CanvasInput;
use crate::app::{AppIntent, AppState};
use crate::core::{CanvasTransform, ProblemType};
use glam::Vec2;

/// Rendert die Seitenleiste des Editors.
pub fn render_editor_sidebar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(kind) = state.editor_kind() else {
        return events;
    };

    egui::SidePanel::left("editor_sidebar")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading(format!("Neues Problem: {}", kind));
            ui.add_space(8.0);

            ui.label("Name:");
            let mut name = state.editor.problem_name.clone();
            if ui.text_edit_singleline(&mut name).changed() {
                events.push(AppIntent::ProblemNameChanged { name });
            }

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Wandfoto wählen…").clicked() {
                    events.push(AppIntent::ImageSelectionRequested);
                }
                if ui
                    .add_enabled(
                        state.editor.wall_image.is_some(),
                        egui::Button::new("Wandfoto entfernen"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::ImageResetRequested);
                }
            });

            ui.add_space(12.0);
            ui.separator();
            ui.label(egui::RichText::new("Gesten").strong());
            for line in gesture_help(kind) {
                ui.label(*line);
            }
            ui.separator();
            ui.add_space(12.0);

            if ui
                .add_sized([ui.available_width(), 32.0], egui::Button::new("Speichern"))
                .clicked()
            {
                events.push(AppIntent::SaveRequested);
            }
        });

    events
}

fn gesture_help(kind: ProblemType) -> &'static [&'static str] {
    match kind {
        ProblemType::Bouldering => &[
            "Tap auf Griff: markieren (rot)",
            "Doppel-Tap: grün",
            "Dreifach-Tap: blau",
            "Lange drücken: entfernen",
        ],
        ProblemType::Endurance => &[
            "Tap auf Griff: mit nächster Nummer markieren",
            "Tap/Doppel-Tap auf Markierung: nächste Nummer anhängen",
            "Dreifach-Tap: Markierung entfernen",
            "Lange drücken: höchste Nummer entfernen",
        ],
    }
}

/// Zeichnet den Canvas und sammelt dessen Pointer-Events.
///
/// Der Canvas wird in Backing-Auflösung angezeigt und horizontal zentriert.
pub fn render_canvas(
    ui: &mut egui::Ui,
    input: &mut CanvasInput,
    texture: Option<&egui::TextureHandle>,
) -> Vec<AppIntent> {
    let Some(texture) = texture else {
        ui.centered_and_justified(|ui| {
            ui.label("Kein Wandfoto gewählt. \"Wandfoto wählen…\" verwenden.");
        });
        return Vec::new();
    };

    let size = texture.size_vec2();
    let mut events = Vec::new();
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        ui.painter()
            .image(texture.id(), rect, uv, egui::Color32::WHITE);

        let transform = CanvasTransform::new(
            Vec2::new(rect.min.x, rect.min.y),
            Vec2::new(rect.width(), rect.height()),
            Vec2::new(size.x, size.y),
        );
        events = input.collect_canvas_events(ui, &transform);
    });

    events
}
