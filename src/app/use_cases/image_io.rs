//! Use-Cases für das Wandfoto (Auswahl, Laden, Entfernen, Viewport).

use crate::app::AppState;
use crate::core::WallImage;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// Öffnet den Bild-Auswahl-Dialog.
pub fn request_image_dialog(state: &mut AppState) {
    state.ui.show_image_dialog = true;
}

/// Lädt ein Wandfoto und passt es an die aktuelle Fenstergröße an.
///
/// Ersetzt ein vorhandenes Bild samt Markierungen.
pub fn load_wall_image(state: &mut AppState, path: &Path) -> Result<()> {
    log::info!("Lade Wandfoto: {}", path.display());

    let max_width = state.options.max_display_width;
    let max_height = state
        .options
        .max_display_height(state.view.viewport_size[1]);
    let image = WallImage::load_from_file(path, max_width, max_height)?;

    state.editor.replace_image(Some(Arc::new(image)));
    state.view.mark_canvas_dirty();
    Ok(())
}

/// Entfernt das Wandfoto samt Markierungen.
pub fn clear_wall_image(state: &mut AppState) {
    if state.editor.wall_image.is_none() {
        return;
    }
    state.editor.replace_image(None);
    state.view.mark_canvas_dirty();
    log::info!("Wandfoto entfernt");
}

/// Übernimmt die aktuelle Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}
