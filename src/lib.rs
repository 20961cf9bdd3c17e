//! Spraywand-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod store;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, Screen, UiState, ViewState};
pub use core::{
    Annotation, AnnotationSet, CanvasTransform, HoldColor, Problem, ProblemType, Shape, WallImage,
};
pub use shared::{EditorOptions, RenderScene};
pub use store::{JsonProblemStore, MemoryProblemStore, ProblemStore, StoreError};
