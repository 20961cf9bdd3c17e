use super::*;
use crate::app::state::Screen;
use crate::core::{NewProblem, ProblemType};

fn gallery_with(names: &[&str]) -> AppState {
    let mut state = AppState::new();
    for name in names {
        state
            .store
            .save(NewProblem {
                owner_id: state.options.owner_id.clone(),
                name: name.to_string(),
                kind: ProblemType::Bouldering,
                image_png: Vec::new(),
                tags: vec!["crimp".into()],
            })
            .expect("save");
    }
    state.ui.screen = Screen::Gallery(ProblemType::Bouldering);
    reload_gallery(&mut state).expect("reload");
    state
}

fn listed_names(state: &AppState) -> Vec<&str> {
    state
        .gallery
        .problems
        .iter()
        .map(|p| p.name.as_str())
        .collect()
}

#[test]
fn reload_lists_newest_first_for_type() {
    let mut state = gallery_with(&["a", "b"]);
    state
        .store
        .save(NewProblem {
            owner_id: state.options.owner_id.clone(),
            name: "endurance".into(),
            kind: ProblemType::Endurance,
            image_png: Vec::new(),
            tags: Vec::new(),
        })
        .expect("save");

    reload_gallery(&mut state).expect("reload");

    assert_eq!(listed_names(&state), vec!["b", "a"]);
}

#[test]
fn viewer_steps_wrap_around() {
    let mut state = gallery_with(&["a", "b", "c"]);
    open_viewer(&mut state, 0);

    step_viewer(&mut state, -1);
    assert_eq!(state.gallery.viewer_index, Some(2));
    step_viewer(&mut state, 1);
    assert_eq!(state.gallery.viewer_index, Some(0));
}

#[test]
fn open_viewer_ignores_out_of_range_index() {
    let mut state = gallery_with(&["a"]);
    open_viewer(&mut state, 3);
    assert_eq!(state.gallery.viewer_index, None);
}

#[test]
fn tag_editor_adds_trimmed_unique_tags_and_persists() {
    let mut state = gallery_with(&["a"]);
    let id = state.gallery.problems[0].id;
    open_tag_editor(&mut state, id);

    assert!(add_tag(&mut state, "  slab "));
    assert!(!add_tag(&mut state, "slab"));
    assert!(!add_tag(&mut state, "   "));
    remove_tag(&mut state, "crimp");
    save_tags(&mut state).expect("save tags");

    assert!(state.ui.tag_editor.is_none());
    assert_eq!(state.gallery.problems[0].tags, vec!["slab".to_string()]);
}

#[test]
fn cancelled_tag_edit_keeps_stored_tags() {
    let mut state = gallery_with(&["a"]);
    let id = state.gallery.problems[0].id;
    open_tag_editor(&mut state, id);
    add_tag(&mut state, "slab");

    close_tag_editor(&mut state);
    reload_gallery(&mut state).expect("reload");

    assert_eq!(state.gallery.problems[0].tags, vec!["crimp".to_string()]);
}

#[test]
fn delete_requires_exact_keyword() {
    let mut state = gallery_with(&["a", "b"]);
    let id = state.gallery.problems[0].id;
    open_viewer(&mut state, 0);
    open_delete_dialog(&mut state, id);

    assert!(!confirm_delete(&mut state, "Löschen").expect("kein Fehler"));
    assert!(!confirm_delete(&mut state, "delete ").expect("kein Fehler"));
    assert!(state.ui.delete_dialog.is_some());
    assert_eq!(state.gallery.problems.len(), 2);

    assert!(confirm_delete(&mut state, "löschen").expect("gelöscht"));
    assert!(state.ui.delete_dialog.is_none());
    assert_eq!(state.gallery.viewer_index, None);
    assert_eq!(listed_names(&state), vec!["a"]);
}

#[test]
fn reopening_delete_dialog_clears_input() {
    let mut state = gallery_with(&["a"]);
    let id = state.gallery.problems[0].id;
    open_delete_dialog(&mut state, id);
    if let Some(dialog) = state.ui.delete_dialog.as_mut() {
        dialog.input = "del".into();
    }

    open_delete_dialog(&mut state, id);

    assert_eq!(
        state.ui.delete_dialog.as_ref().map(|d| d.input.as_str()),
        Some("")
    );
}
