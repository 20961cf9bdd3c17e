//! Application State: zentrale Datenhaltung.
//!
//! Aufgeteilt nach Zuständigkeit: Editor (Bild, Markierungen, Gesten),
//! View (Viewport, Canvas-Revision), Galerie und UI (Screens, Dialoge).

mod app_state;
mod editor;
mod gallery;
mod ui;
mod view;

pub use app_state::AppState;
pub use editor::EditorState;
pub use gallery::GalleryState;
pub use ui::{DeleteDialogState, MessageLevel, Screen, TagEditorState, UiMessage, UiState};
pub use view::ViewState;
