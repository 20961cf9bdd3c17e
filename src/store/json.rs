//! Verzeichnis-Ablage: `problems.json` als Index, `<id>.png` pro Problem.

use super::{select_for_listing, ProblemStore, StoreError};
use crate::core::{normalize_tags, NewProblem, Problem, ProblemType};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const INDEX_FILE: &str = "problems.json";

/// Inhalt von `problems.json`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreIndex {
    next_id: u64,
    problems: Vec<Problem>,
}

/// Dateibasierte Ablage in einem Datenverzeichnis.
#[derive(Debug)]
pub struct JsonProblemStore {
    dir: PathBuf,
    index: StoreIndex,
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl JsonProblemStore {
    /// Öffnet (oder erstellt) die Ablage im Verzeichnis.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(io_error(&dir))?;

        let index_path = dir.join(INDEX_FILE);
        let index = match std::fs::read_to_string(&index_path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreIndex::default(),
            Err(e) => return Err(io_error(&index_path)(e)),
        };

        log::info!(
            "Problem-Ablage geöffnet: {} ({} Probleme)",
            dir.display(),
            index.problems.len()
        );
        Ok(Self { dir, index })
    }

    fn image_path(&self, id: u64) -> PathBuf {
        self.dir.join(format!("{id}.png"))
    }

    /// Schreibt den Index über eine temporäre Datei (kein halb geschriebener Index).
    fn write_index(&self) -> Result<(), StoreError> {
        let path = self.dir.join(INDEX_FILE);
        let tmp = self.dir.join(format!("{INDEX_FILE}.tmp"));
        let content = serde_json::to_string_pretty(&self.index)?;
        std::fs::write(&tmp, content).map_err(io_error(&tmp))?;
        std::fs::rename(&tmp, &path).map_err(io_error(&path))?;
        Ok(())
    }

    fn position(&self, id: u64) -> Result<usize, StoreError> {
        self.index
            .problems
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

impl ProblemStore for JsonProblemStore {
    fn save(&mut self, problem: NewProblem) -> Result<Problem, StoreError> {
        let id = self.index.next_id.max(1);
        let image_path = self.image_path(id);
        std::fs::write(&image_path, &problem.image_png).map_err(io_error(&image_path))?;

        let record = Problem::from_new(id, problem, Utc::now());
        self.index.next_id = id + 1;
        self.index.problems.push(record.clone());
        if let Err(e) = self.write_index() {
            self.index.problems.pop();
            self.index.next_id = id;
            if let Err(cleanup) = std::fs::remove_file(&image_path) {
                log::debug!("Verwaiste Bilddatei bleibt liegen: {}", cleanup);
            }
            return Err(e);
        }

        log::info!("Problem #{} '{}' gespeichert", record.id, record.name);
        Ok(record)
    }

    fn list_problems(
        &self,
        owner_id: &str,
        kind: Option<ProblemType>,
    ) -> Result<Vec<Problem>, StoreError> {
        let mut problems = select_for_listing(self.index.problems.iter(), owner_id, kind);
        for problem in &mut problems {
            let path = self.image_path(problem.id);
            match std::fs::read(&path) {
                Ok(bytes) => problem.image_png = bytes,
                Err(e) => log::warn!("Bild zu Problem #{} fehlt: {}", problem.id, e),
            }
        }
        Ok(problems)
    }

    fn update_tags(&mut self, id: u64, tags: Vec<String>) -> Result<Problem, StoreError> {
        let pos = self.position(id)?;
        let previous = self.index.problems[pos].clone();
        {
            let problem = &mut self.index.problems[pos];
            problem.tags = normalize_tags(&tags);
            problem.updated_at = Some(Utc::now());
        }
        if let Err(e) = self.write_index() {
            self.index.problems[pos] = previous;
            return Err(e);
        }

        let mut updated = self.index.problems[pos].clone();
        updated.image_png = std::fs::read(self.image_path(id)).unwrap_or_default();
        Ok(updated)
    }

    fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        let pos = self.position(id)?;
        let removed = self.index.problems.remove(pos);
        if let Err(e) = self.write_index() {
            self.index.problems.insert(pos, removed);
            return Err(e);
        }

        if let Err(e) = std::fs::remove_file(self.image_path(id)) {
            log::debug!("Bilddatei zu Problem #{} nicht entfernt: {}", id, e);
        }
        log::info!("Problem #{} gelöscht", id);
        Ok(())
    }
}
