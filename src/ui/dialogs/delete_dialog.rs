use crate::app::{AppIntent, UiState};

/// Zeigt die Lösch-Bestätigung; Löschen erst nach Eingabe des Bestätigungsworts.
pub fn show_delete_dialog(
    ctx: &egui::Context,
    ui_state: &mut UiState,
    keyword: &str,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(dialog) = ui_state.delete_dialog.as_mut() else {
        return events;
    };

    egui::Window::new("Problem löschen")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(300.0);
            ui.label(format!("Zum Löschen \"{keyword}\" eingeben."));
            ui.add_space(6.0);
            ui.text_edit_singleline(&mut dialog.input);
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let matches = dialog.input == keyword;
                ui.add_enabled_ui(matches, |ui| {
                    if ui.button("Löschen").clicked() {
                        events.push(AppIntent::DeleteConfirmed {
                            typed: dialog.input.clone(),
                        });
                    }
                });
                if ui.button("Abbrechen").clicked() {
                    events.push(AppIntent::DeleteCancelled);
                }
            });
        });

    events
}
