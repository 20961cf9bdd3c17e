use crate::app::{AppIntent, UiState};

/// Zeigt den Tag-Editor eines Problems.
///
/// Das Eingabefeld wird direkt im UiState bearbeitet; Hinzufügen,
/// Entfernen und Speichern laufen über Intents.
pub fn show_tag_editor(ctx: &egui::Context, ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(editor) = ui_state.tag_editor.as_mut() else {
        return events;
    };

    egui::Window::new("Tags bearbeiten")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(300.0);

            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;
                if editor.tags.is_empty() {
                    ui.label(egui::RichText::new("Keine Tags").italics());
                }
                for tag in &editor.tags {
                    if ui
                        .button(format!("{tag} ✕"))
                        .on_hover_text("Tag entfernen")
                        .clicked()
                    {
                        events.push(AppIntent::TagRemoveRequested { tag: tag.clone() });
                    }
                }
            });

            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label("Tag:");
                let response = ui.text_edit_singleline(&mut editor.input);
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Hinzufügen").clicked() || submitted {
                    events.push(AppIntent::TagAddRequested {
                        tag: editor.input.clone(),
                    });
                }
            });

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("✓ Save").clicked() {
                    events.push(AppIntent::TagEditConfirmed);
                }
                if ui.button("✕ Cancel").clicked() {
                    events.push(AppIntent::TagEditCancelled);
                }
            });
        });

    events
}
