//! Handler für das Wandfoto.

use crate::app::state::UiMessage;
use crate::app::use_cases;
use crate::app::AppState;
use std::path::Path;

/// Öffnet den Bild-Auswahl-Dialog.
pub fn request_dialog(state: &mut AppState) {
    use_cases::image_io::request_image_dialog(state);
}

/// Lädt ein Wandfoto; ein Fehler wird zusätzlich als Meldung angezeigt.
pub fn load(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    if let Err(e) = use_cases::image_io::load_wall_image(state, path) {
        state.ui.message = Some(UiMessage::error(format!("Wandfoto konnte nicht geladen werden: {e:#}")));
        return Err(e);
    }
    Ok(())
}

/// Entfernt das Wandfoto.
pub fn clear(state: &mut AppState) {
    use_cases::image_io::clear_wall_image(state);
}

/// Setzt die Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::image_io::set_viewport_size(state, size);
}
