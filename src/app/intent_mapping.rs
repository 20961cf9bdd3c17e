//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        // === Navigation ===
        AppIntent::CreateProblemRequested => vec![AppCommand::ShowTypeSelect],
        AppIntent::ProblemTypeSelected { kind } => vec![AppCommand::OpenEditor { kind }],
        AppIntent::GalleryRequested { kind } => {
            vec![AppCommand::OpenGallery { kind }, AppCommand::ReloadGallery]
        }
        AppIntent::BackToMenuRequested => vec![AppCommand::ReturnToMenu],

        // === Canvas ===
        // Eingaben nur im Editor mit Bild und ohne offene Meldung
        AppIntent::CanvasPointerPressed { pos, time } => {
            if accepts_canvas_input(state) {
                vec![AppCommand::PointerDown { pos, time }]
            } else {
                vec![]
            }
        }
        AppIntent::CanvasPointerReleased { time } | AppIntent::CanvasPointerCancelled { time } => {
            if state.editor_kind().is_some() {
                vec![AppCommand::PointerUp { time }]
            } else {
                vec![]
            }
        }
        AppIntent::FrameTick { time } => {
            if state.editor.gesture.next_deadline().is_some_and(|d| d <= time) {
                vec![AppCommand::PollGestures { time }]
            } else {
                vec![]
            }
        }

        // === Wandfoto ===
        AppIntent::ImageSelectionRequested => vec![AppCommand::RequestImageDialog],
        AppIntent::ImageFileSelected { path } => vec![AppCommand::LoadWallImage { path }],
        AppIntent::ImageResetRequested => vec![AppCommand::ClearWallImage],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],

        // === Problem ===
        AppIntent::ProblemNameChanged { name } => vec![AppCommand::SetProblemName { name }],
        AppIntent::SaveRequested => {
            if state.editor_kind().is_some() {
                vec![AppCommand::SaveProblem]
            } else {
                vec![]
            }
        }

        // === Galerie ===
        AppIntent::GalleryRefreshRequested => vec![AppCommand::ReloadGallery],
        AppIntent::ViewerOpened { index } => vec![AppCommand::OpenViewer { index }],
        AppIntent::ViewerClosed => vec![AppCommand::CloseViewer],
        AppIntent::ViewerPrevious => vec![AppCommand::StepViewer { delta: -1 }],
        AppIntent::ViewerNext => vec![AppCommand::StepViewer { delta: 1 }],
        AppIntent::TagEditorOpened { problem_id } => {
            vec![AppCommand::OpenTagEditor { problem_id }]
        }
        AppIntent::TagAddRequested { tag } => vec![AppCommand::AddTag { tag }],
        AppIntent::TagRemoveRequested { tag } => vec![AppCommand::RemoveTag { tag }],
        AppIntent::TagEditConfirmed => vec![AppCommand::SaveTags],
        AppIntent::TagEditCancelled => vec![AppCommand::CloseTagEditor],
        AppIntent::DeleteDialogOpened { problem_id } => {
            vec![AppCommand::OpenDeleteDialog { problem_id }]
        }
        AppIntent::DeleteConfirmed { typed } => vec![AppCommand::ConfirmDelete { typed }],
        AppIntent::DeleteCancelled => vec![AppCommand::CloseDeleteDialog],

        // === Sonstiges ===
        AppIntent::MessageDismissed => vec![AppCommand::DismissMessage],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

fn accepts_canvas_input(state: &AppState) -> bool {
    state.editor_kind().is_some() && state.editor.wall_image.is_some() && state.ui.message.is_none()
}
