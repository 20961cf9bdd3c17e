//! Ablage für gespeicherte Probleme.
//!
//! Der Editor spricht nur das `ProblemStore`-Trait an. Die In-Memory-Variante
//! dient Tests und dem Start ohne Datenverzeichnis, die JSON-Variante legt
//! einen Index plus eine PNG-Datei pro Problem in einem Verzeichnis ab.

mod json;
mod memory;

pub use json::JsonProblemStore;
pub use memory::MemoryProblemStore;

use crate::core::{NewProblem, Problem, ProblemType};
use std::path::PathBuf;

/// Fehler der Problem-Ablage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Problem nicht gefunden: #{0}")]
    NotFound(u64),

    #[error("Dateizugriff fehlgeschlagen: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Index fehlerhaft: {0}")]
    Index(#[from] serde_json::Error),

    #[error("Ablage nicht verfügbar: {0}")]
    Unavailable(String),
}

/// Persistenz-Schnittstelle für Probleme.
pub trait ProblemStore {
    /// Speichert ein neues Problem und gibt den Datensatz mit ID zurück.
    fn save(&mut self, problem: NewProblem) -> Result<Problem, StoreError>;

    /// Listet die Probleme eines Besitzers, neueste zuerst.
    ///
    /// `kind = None` liefert alle Typen.
    fn list_problems(
        &self,
        owner_id: &str,
        kind: Option<ProblemType>,
    ) -> Result<Vec<Problem>, StoreError>;

    /// Ersetzt die Tags eines Problems.
    fn update_tags(&mut self, id: u64, tags: Vec<String>) -> Result<Problem, StoreError>;

    /// Löscht ein Problem.
    fn delete(&mut self, id: u64) -> Result<(), StoreError>;
}

/// Filtert und sortiert (neueste zuerst, bei Gleichstand höhere ID zuerst).
fn select_for_listing<'a>(
    problems: impl Iterator<Item = &'a Problem>,
    owner_id: &str,
    kind: Option<ProblemType>,
) -> Vec<Problem> {
    let mut selected: Vec<Problem> = problems
        .filter(|p| p.owner_id == owner_id && kind.is_none_or(|k| p.kind == k))
        .cloned()
        .collect();
    selected.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    selected
}
