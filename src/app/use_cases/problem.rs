//! Use-Case: Problem validieren, als PNG exportieren und speichern.

use crate::app::render_scene;
use crate::app::AppState;
use crate::core::{NewProblem, Problem};
use crate::render;
use crate::store::StoreError;

/// Fehler beim Speichern eines Problems.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Bitte einen Problemnamen eingeben.")]
    EmptyName,

    #[error("Bitte ein Wandfoto wählen.")]
    NoImage,

    #[error("Kein Problemtyp gewählt.")]
    NoProblemType,

    #[error("Bild-Export fehlgeschlagen: {0}")]
    Export(String),

    #[error("Speichern fehlgeschlagen: {0}")]
    Store(#[from] StoreError),
}

impl SaveError {
    /// Eingabefehler, die vor jedem Ablage-Zugriff erkannt werden.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SaveError::EmptyName | SaveError::NoImage | SaveError::NoProblemType
        )
    }
}

/// Speichert das aktuelle Problem.
///
/// Validiert zuerst Name und Bild; erst danach wird exportiert und die
/// Ablage angesprochen. Der Editor-Zustand bleibt in jedem Fall unverändert.
pub fn save_problem(state: &mut AppState) -> Result<Problem, SaveError> {
    let kind = state.editor_kind().ok_or(SaveError::NoProblemType)?;
    let name = state.editor.problem_name.trim().to_string();
    if name.is_empty() {
        return Err(SaveError::EmptyName);
    }
    if state.editor.wall_image.is_none() {
        return Err(SaveError::NoImage);
    }

    let scene = render_scene::build(state);
    let image = render::render_export(&scene).ok_or(SaveError::NoImage)?;
    let image_png = render::encode_png(&image).map_err(|e| SaveError::Export(format!("{e:#}")))?;

    let problem = state.store.save(NewProblem {
        owner_id: state.options.owner_id.clone(),
        name,
        kind,
        image_png,
        tags: Vec::new(),
    })?;

    log::info!(
        "Problem #{} '{}' ({}) mit {} Markierungen gespeichert",
        problem.id,
        problem.name,
        problem.kind,
        state.editor.annotations.len()
    );
    Ok(problem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Screen;
    use crate::core::{Annotation, ProblemType, Shape, WallImage};
    use glam::Vec2;
    use std::sync::Arc;

    fn editor_with_image() -> AppState {
        let mut state = AppState::new();
        state.ui.screen = Screen::Create(ProblemType::Endurance);
        state.editor.wall_image = Some(Arc::new(WallImage::from_image(
            image::DynamicImage::new_rgba8(60, 40),
            "test",
            400.0,
            400.0,
        )));
        state
    }

    #[test]
    fn blank_name_is_rejected_before_store() {
        let mut state = editor_with_image();
        state.editor.problem_name = "   ".into();

        let err = save_problem(&mut state).expect_err("Name fehlt");

        assert!(matches!(err, SaveError::EmptyName));
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Bitte einen Problemnamen eingeben.");
        let listed = state
            .store
            .list_problems(&state.options.owner_id, None)
            .expect("list");
        assert!(listed.is_empty());
    }

    #[test]
    fn missing_image_is_rejected() {
        let mut state = editor_with_image();
        state.editor.wall_image = None;
        state.editor.problem_name = "Crimps".into();

        assert!(matches!(save_problem(&mut state), Err(SaveError::NoImage)));
    }

    #[test]
    fn save_stores_trimmed_name_and_png_at_backing_size() {
        let mut state = editor_with_image();
        state.editor.problem_name = "  Crimps  ".into();
        state.editor.annotations.push(
            Annotation::new(Shape::circle(Vec2::new(20.0, 20.0), 8.0)).with_number(1),
        );

        let problem = save_problem(&mut state).expect("gespeichert");

        assert_eq!(problem.name, "Crimps");
        assert_eq!(problem.kind, ProblemType::Endurance);
        let decoded = image::load_from_memory(&problem.image_png).expect("PNG");
        assert_eq!((decoded.width(), decoded.height()), (60, 40));
        assert_eq!(state.editor.annotations.len(), 1);
    }
}
