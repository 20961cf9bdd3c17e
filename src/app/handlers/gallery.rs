//! Handler für die Problem-Galerie.
//!
//! Ablage-Fehler werden als Meldung angezeigt; offene Dialoge bleiben
//! dabei erhalten, damit der Benutzer es erneut versuchen kann.

use crate::app::state::UiMessage;
use crate::app::use_cases;
use crate::app::AppState;
use crate::store::StoreError;

fn report(state: &mut AppState, what: &str, error: StoreError) {
    state.ui.message = Some(UiMessage::error(format!("{what} fehlgeschlagen: {error}")));
    log::error!("Galerie: {} fehlgeschlagen: {:#}", what, anyhow::Error::new(error));
}

/// Lädt die Galerie neu.
pub fn reload(state: &mut AppState) {
    if let Err(e) = use_cases::gallery::reload_gallery(state) {
        report(state, "Laden der Probleme", e);
    }
}

/// Öffnet den Viewer.
pub fn open_viewer(state: &mut AppState, index: usize) {
    use_cases::gallery::open_viewer(state, index);
}

/// Schließt den Viewer.
pub fn close_viewer(state: &mut AppState) {
    use_cases::gallery::close_viewer(state);
}

/// Schaltet den Viewer weiter.
pub fn step_viewer(state: &mut AppState, delta: i32) {
    use_cases::gallery::step_viewer(state, delta);
}

/// Öffnet den Tag-Editor.
pub fn open_tag_editor(state: &mut AppState, problem_id: u64) {
    use_cases::gallery::open_tag_editor(state, problem_id);
}

/// Fügt ein Tag zur Arbeitskopie hinzu.
pub fn add_tag(state: &mut AppState, tag: &str) {
    use_cases::gallery::add_tag(state, tag);
}

/// Entfernt ein Tag aus der Arbeitskopie.
pub fn remove_tag(state: &mut AppState, tag: &str) {
    use_cases::gallery::remove_tag(state, tag);
}

/// Speichert die Tags.
pub fn save_tags(state: &mut AppState) {
    if let Err(e) = use_cases::gallery::save_tags(state) {
        report(state, "Speichern der Tags", e);
    }
}

/// Verwirft den Tag-Editor.
pub fn close_tag_editor(state: &mut AppState) {
    use_cases::gallery::close_tag_editor(state);
}

/// Öffnet die Lösch-Bestätigung.
pub fn open_delete_dialog(state: &mut AppState, problem_id: u64) {
    use_cases::gallery::open_delete_dialog(state, problem_id);
}

/// Löscht nach Abgleich des Bestätigungsworts.
pub fn confirm_delete(state: &mut AppState, typed: &str) {
    match use_cases::gallery::confirm_delete(state, typed) {
        Ok(true) => state.ui.message = Some(UiMessage::info("Problem gelöscht.")),
        Ok(false) => {}
        Err(e) => report(state, "Löschen", e),
    }
}

/// Schließt die Lösch-Bestätigung.
pub fn close_delete_dialog(state: &mut AppState) {
    use_cases::gallery::close_delete_dialog(state);
}
