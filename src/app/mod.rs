//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod gesture;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Editor, Galerie, Dialoge).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use gesture::{GestureConfig, GestureEvent, GesturePhase, GestureRecognizer};
pub use render_scene::build as build_render_scene;
pub use state::{
    AppState, EditorState, GalleryState, MessageLevel, Screen, UiMessage, UiState, ViewState,
};
pub use use_cases::problem::SaveError;
