//! Use-Cases der Problem-Galerie: Laden, Viewer, Tags und Löschen.

use crate::app::state::{DeleteDialogState, TagEditorState};
use crate::app::AppState;
use crate::core::add_tag as push_unique_tag;
use crate::store::StoreError;

/// Lädt die Probleme des Galerie-Typs (neueste zuerst).
pub fn reload_gallery(state: &mut AppState) -> Result<(), StoreError> {
    let Some(kind) = state.gallery_kind() else {
        state.gallery.clear();
        return Ok(());
    };
    let problems = state
        .store
        .list_problems(&state.options.owner_id, Some(kind))?;
    log::info!("Galerie {}: {} Probleme geladen", kind, problems.len());
    state.gallery.set_problems(problems);
    Ok(())
}

/// Öffnet den Viewer für ein Problem der Liste.
pub fn open_viewer(state: &mut AppState, index: usize) {
    if index < state.gallery.problems.len() {
        state.gallery.viewer_index = Some(index);
    }
}

/// Schließt den Viewer.
pub fn close_viewer(state: &mut AppState) {
    state.gallery.viewer_index = None;
}

/// Schaltet den Viewer zyklisch weiter (`delta` = ±1).
pub fn step_viewer(state: &mut AppState, delta: i32) {
    let len = state.gallery.problems.len();
    let Some(index) = state.gallery.viewer_index else {
        return;
    };
    if len == 0 {
        state.gallery.viewer_index = None;
        return;
    }
    let next = (index as i64 + i64::from(delta)).rem_euclid(len as i64);
    state.gallery.viewer_index = Some(next as usize);
}

/// Öffnet den Tag-Editor mit einer Kopie der aktuellen Tags.
pub fn open_tag_editor(state: &mut AppState, problem_id: u64) {
    let Some(problem) = state.gallery.find(problem_id) else {
        log::warn!("Tag-Editor: Problem #{} nicht in der Galerie", problem_id);
        return;
    };
    state.ui.tag_editor = Some(TagEditorState {
        problem_id,
        tags: problem.tags.clone(),
        input: String::new(),
    });
}

/// Fügt der Arbeitskopie ein Tag hinzu (getrimmt, nicht leer, eindeutig).
pub fn add_tag(state: &mut AppState, tag: &str) -> bool {
    let Some(editor) = state.ui.tag_editor.as_mut() else {
        return false;
    };
    let added = push_unique_tag(&mut editor.tags, tag);
    if added {
        editor.input.clear();
    }
    added
}

/// Entfernt ein Tag aus der Arbeitskopie.
pub fn remove_tag(state: &mut AppState, tag: &str) {
    if let Some(editor) = state.ui.tag_editor.as_mut() {
        editor.tags.retain(|t| t != tag);
    }
}

/// Speichert die Arbeitskopie, lädt neu und schließt den Editor.
///
/// Bei einem Ablage-Fehler bleibt der Editor offen.
pub fn save_tags(state: &mut AppState) -> Result<(), StoreError> {
    let Some(editor) = state.ui.tag_editor.as_ref() else {
        return Ok(());
    };
    let problem = state
        .store
        .update_tags(editor.problem_id, editor.tags.clone())?;
    log::info!("Tags von Problem #{} gespeichert: {:?}", problem.id, problem.tags);
    state.ui.tag_editor = None;
    reload_gallery(state)
}

/// Verwirft die Arbeitskopie.
pub fn close_tag_editor(state: &mut AppState) {
    state.ui.tag_editor = None;
}

/// Öffnet die Lösch-Bestätigung mit leerem Eingabefeld.
pub fn open_delete_dialog(state: &mut AppState, problem_id: u64) {
    state.ui.delete_dialog = Some(DeleteDialogState {
        problem_id,
        input: String::new(),
    });
}

/// Löscht, wenn `typed` exakt dem Bestätigungswort entspricht.
///
/// Gibt `Ok(false)` zurück, wenn nicht gelöscht wurde. Nach dem Löschen
/// sind Dialog und Viewer geschlossen und die Liste neu geladen; bei einem
/// Ablage-Fehler bleibt der Dialog offen.
pub fn confirm_delete(state: &mut AppState, typed: &str) -> Result<bool, StoreError> {
    let Some(dialog) = state.ui.delete_dialog.as_ref() else {
        return Ok(false);
    };
    if typed != state.options.delete_confirm_keyword {
        log::debug!("Löschen abgelehnt: Bestätigungswort stimmt nicht");
        return Ok(false);
    }

    state.store.delete(dialog.problem_id)?;
    state.ui.delete_dialog = None;
    state.gallery.viewer_index = None;
    reload_gallery(state)?;
    Ok(true)
}

/// Schließt die Lösch-Bestätigung.
pub fn close_delete_dialog(state: &mut AppState) {
    state.ui.delete_dialog = None;
}

#[cfg(test)]
mod tests;
