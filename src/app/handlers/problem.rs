//! Handler für Problemname und Speichern.

use crate::app::state::{Screen, UiMessage};
use crate::app::use_cases;
use crate::app::AppState;

/// Übernimmt den eingegebenen Namen.
pub fn set_name(state: &mut AppState, name: String) {
    state.editor.problem_name = name;
}

/// Speichert das Problem und zeigt das Ergebnis als Meldung.
///
/// Erfolg: Editor wird zurückgesetzt, zurück ins Menü. Fehler: Markierungen
/// und Eingaben bleiben für einen erneuten Versuch erhalten.
pub fn save(state: &mut AppState) {
    match use_cases::problem::save_problem(state) {
        Ok(problem) => {
            state.ui.message = Some(UiMessage::info(format!("\"{}\" gespeichert.", problem.name)));
            state.editor.reset();
            state.ui.screen = Screen::Menu;
            state.view.mark_canvas_dirty();
        }
        Err(e) if e.is_validation() => {
            log::warn!("Speichern abgelehnt: {}", e);
            state.ui.message = Some(UiMessage::warning(e.to_string()));
        }
        Err(e) => {
            state.ui.message = Some(UiMessage::error(e.to_string()));
            log::error!("Speichern fehlgeschlagen: {:#}", anyhow::Error::new(e));
        }
    }
}
