use crate::app::{AppIntent, MessageLevel, UiState};

/// Zeigt die ausstehende Benutzer-Meldung als modales Fenster.
pub fn show_message_dialog(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(message) = ui_state.message.as_ref() else {
        return events;
    };

    let (title, color) = match message.level {
        MessageLevel::Info => ("Info", egui::Color32::LIGHT_GREEN),
        MessageLevel::Warning => ("Hinweis", egui::Color32::YELLOW),
        MessageLevel::Error => ("Fehler", egui::Color32::LIGHT_RED),
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(260.0);
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(egui::RichText::new(&message.text).color(color));
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    events.push(AppIntent::MessageDismissed);
                }
            });
        });

    events
}
