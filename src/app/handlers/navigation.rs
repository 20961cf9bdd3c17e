//! Handler für den Bildschirmwechsel.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ProblemType;

/// Zeigt die Typ-Auswahl.
pub fn show_type_select(state: &mut AppState) {
    use_cases::navigation::show_type_select(state);
}

/// Öffnet den Editor.
pub fn open_editor(state: &mut AppState, kind: ProblemType) {
    use_cases::navigation::open_editor(state, kind);
}

/// Öffnet die Galerie.
pub fn open_gallery(state: &mut AppState, kind: ProblemType) {
    use_cases::navigation::open_gallery(state, kind);
}

/// Zurück ins Menü.
pub fn return_to_menu(state: &mut AppState) {
    use_cases::navigation::return_to_menu(state);
}
