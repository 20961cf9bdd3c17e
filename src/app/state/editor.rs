use crate::app::gesture::GestureRecognizer;
use crate::core::{AnnotationSet, WallImage};
use std::sync::Arc;

/// Zustand des Markier-Editors
#[derive(Debug, Default)]
pub struct EditorState {
    /// Aktuelles Wandfoto (None = kein Bild gewählt)
    pub wall_image: Option<Arc<WallImage>>,
    /// Wird bei jedem Bildwechsel erhöht; der Host verwirft damit alte Texturen
    pub image_generation: u64,
    /// Markierungen auf dem aktuellen Bild
    pub annotations: AnnotationSet,
    /// Eingegebener Problemname
    pub problem_name: String,
    /// Gesten-Erkennung des Canvas
    pub gesture: GestureRecognizer,
}

impl EditorState {
    /// Erstellt einen leeren Editor-Zustand.
    pub fn new() -> Self {
        Self {
            wall_image: None,
            image_generation: 0,
            annotations: AnnotationSet::new(),
            problem_name: String::new(),
            gesture: GestureRecognizer::default(),
        }
    }

    /// Ersetzt (oder entfernt) das Wandfoto.
    ///
    /// Markierungen gehören zum Bild und werden verworfen, ausstehende
    /// Gesten-Deadlines ebenfalls.
    pub fn replace_image(&mut self, image: Option<Arc<WallImage>>) {
        self.wall_image = image;
        self.image_generation = self.image_generation.wrapping_add(1);
        self.annotations.clear();
        self.gesture.cancel();
    }

    /// Setzt Bild, Markierungen und Namen zurück.
    pub fn reset(&mut self) {
        self.replace_image(None);
        self.problem_name.clear();
    }
}
