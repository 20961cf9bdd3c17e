use crate::app::{AppIntent, UiState};

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Wandfoto-Auswahl
    if ui_state.show_image_dialog {
        ui_state.show_image_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Wandfoto", &["png", "jpg", "jpeg"])
            .add_filter("Alle Dateien", &["*"])
            .pick_file()
        {
            events.push(AppIntent::ImageFileSelected { path });
        }
    }

    events
}
