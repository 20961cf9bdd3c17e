use crate::app::gesture::GestureConfig;
use crate::app::CommandLog;
use crate::core::ProblemType;
use crate::shared::EditorOptions;
use crate::store::{MemoryProblemStore, ProblemStore};

use super::{EditorState, GalleryState, Screen, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Editor-State (Bild, Markierungen, Gesten)
    pub editor: EditorState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Galerie-State
    pub gallery: GalleryState,
    /// Laufzeit-Optionen (Schwellwerte, Größen, Ablage)
    pub options: EditorOptions,
    /// Problem-Ablage
    pub store: Box<dyn ProblemStore>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen leeren App-State mit In-Memory-Ablage und Standard-Optionen.
    pub fn new() -> Self {
        Self::with_store(Box::new(MemoryProblemStore::new()), EditorOptions::default())
    }

    /// Erstellt einen App-State mit gegebener Ablage und Optionen.
    pub fn with_store(store: Box<dyn ProblemStore>, options: EditorOptions) -> Self {
        let mut editor = EditorState::new();
        editor
            .gesture
            .set_config(GestureConfig::from_options(&options));
        Self {
            editor,
            view: ViewState::new(),
            ui: UiState::new(),
            gallery: GalleryState::new(),
            options,
            store,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Problemtyp des offenen Editors.
    pub fn editor_kind(&self) -> Option<ProblemType> {
        match self.ui.screen {
            Screen::Create(kind) => Some(kind),
            _ => None,
        }
    }

    /// Problemtyp der offenen Galerie.
    pub fn gallery_kind(&self) -> Option<ProblemType> {
        match self.ui.screen {
            Screen::Gallery(kind) => Some(kind),
            _ => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
