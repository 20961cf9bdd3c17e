use crate::core::Problem;

/// Zustand der Problem-Galerie
#[derive(Debug, Default)]
pub struct GalleryState {
    /// Geladene Probleme (neueste zuerst)
    pub problems: Vec<Problem>,
    /// Wird bei jedem Neuladen erhöht (Host lädt Vorschaubilder neu)
    pub revision: u64,
    /// Index des im Viewer geöffneten Problems
    pub viewer_index: Option<usize>,
}

impl GalleryState {
    /// Erstellt eine leere Galerie.
    pub fn new() -> Self {
        Self {
            problems: Vec::new(),
            revision: 0,
            viewer_index: None,
        }
    }

    /// Ersetzt die Problemliste und schließt einen ungültig gewordenen Viewer.
    pub fn set_problems(&mut self, problems: Vec<Problem>) {
        self.problems = problems;
        self.revision = self.revision.wrapping_add(1);
        if self.viewer_index.is_some_and(|i| i >= self.problems.len()) {
            self.viewer_index = None;
        }
    }

    /// Das im Viewer geöffnete Problem.
    pub fn viewed_problem(&self) -> Option<&Problem> {
        self.viewer_index.and_then(|i| self.problems.get(i))
    }

    /// Sucht ein Problem per ID.
    pub fn find(&self, id: u64) -> Option<&Problem> {
        self.problems.iter().find(|p| p.id == id)
    }

    /// Leert die Galerie.
    pub fn clear(&mut self) {
        self.set_problems(Vec::new());
        self.viewer_index = None;
    }
}
