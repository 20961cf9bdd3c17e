//! Use-Cases für den Bildschirmwechsel.

use crate::app::state::Screen;
use crate::app::AppState;
use crate::core::ProblemType;

/// Zeigt die Auswahl des Problemtyps.
pub fn show_type_select(state: &mut AppState) {
    state.ui.screen = Screen::TypeSelect;
}

/// Öffnet einen leeren Editor für den Problemtyp.
pub fn open_editor(state: &mut AppState, kind: ProblemType) {
    state.editor.reset();
    state.ui.screen = Screen::Create(kind);
    state.view.mark_canvas_dirty();
    log::info!("Editor geöffnet: {}", kind);
}

/// Öffnet die Galerie eines Problemtyps (Inhalt wird separat geladen).
pub fn open_gallery(state: &mut AppState, kind: ProblemType) {
    state.gallery.clear();
    state.ui.close_dialogs();
    state.ui.screen = Screen::Gallery(kind);
    log::info!("Galerie geöffnet: {}", kind);
}

/// Zurück ins Menü: Editor, Galerie und Dialoge werden zurückgesetzt.
pub fn return_to_menu(state: &mut AppState) {
    state.editor.reset();
    state.gallery.clear();
    state.ui.close_dialogs();
    state.ui.screen = Screen::Menu;
    state.view.mark_canvas_dirty();
}
