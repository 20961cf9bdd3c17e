//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen Editor-Zustand.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        wall_image: state.editor.wall_image.clone(),
        annotations: state.editor.annotations.clone(),
        problem_type: state.editor_kind(),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::state::Screen;
    use crate::app::AppState;
    use crate::core::ProblemType;

    #[test]
    fn numbers_only_shown_in_endurance_editor() {
        let mut state = AppState::new();
        assert!(!build(&state).show_numbers());

        state.ui.screen = Screen::Create(ProblemType::Bouldering);
        assert!(!build(&state).show_numbers());

        state.ui.screen = Screen::Create(ProblemType::Endurance);
        let scene = build(&state);
        assert!(scene.show_numbers());
        assert!(!scene.has_image());
    }
}
