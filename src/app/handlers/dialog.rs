//! Handler für Meldungen und Anwendungssteuerung.

use crate::app::AppState;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Schließt die offene Benutzer-Meldung.
pub fn dismiss_message(state: &mut AppState) {
    state.ui.message = None;
}
