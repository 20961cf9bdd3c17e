//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{AnnotationSet, ProblemType, WallImage};
use std::sync::Arc;

/// Read-only Daten für einen Compositing-Durchlauf.
#[derive(Clone)]
pub struct RenderScene {
    /// Wandfoto in Backing-Auflösung (optional)
    pub wall_image: Option<Arc<WallImage>>,
    /// Markierungen in Einfügereihenfolge
    pub annotations: AnnotationSet,
    /// Problemtyp des Editors; Sequenznummern nur bei `Endurance`
    pub problem_type: Option<ProblemType>,
    /// Laufzeit-Optionen für Linienstärken und Schrift
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob ein Wandfoto für das Compositing vorhanden ist.
    pub fn has_image(&self) -> bool {
        self.wall_image.is_some()
    }

    /// Gibt zurück, ob Sequenznummern gezeichnet werden.
    pub fn show_numbers(&self) -> bool {
        self.problem_type == Some(ProblemType::Endurance)
    }
}
