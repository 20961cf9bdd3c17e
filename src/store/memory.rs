//! In-Memory-Ablage.

use super::{select_for_listing, ProblemStore, StoreError};
use crate::core::{normalize_tags, NewProblem, Problem, ProblemType};
use chrono::Utc;
use indexmap::IndexMap;

/// Hält alle Probleme im Speicher (Einfügereihenfolge bleibt erhalten).
#[derive(Debug, Default)]
pub struct MemoryProblemStore {
    problems: IndexMap<u64, Problem>,
    next_id: u64,
}

impl MemoryProblemStore {
    /// Erstellt eine leere Ablage.
    pub fn new() -> Self {
        Self {
            problems: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Anzahl gespeicherter Probleme (alle Besitzer).
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    /// Gibt `true` zurück, wenn nichts gespeichert ist.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Direkter Lesezugriff per ID.
    pub fn get(&self, id: u64) -> Option<&Problem> {
        self.problems.get(&id)
    }
}

impl ProblemStore for MemoryProblemStore {
    fn save(&mut self, problem: NewProblem) -> Result<Problem, StoreError> {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        let record = Problem::from_new(id, problem, Utc::now());
        self.problems.insert(id, record.clone());
        Ok(record)
    }

    fn list_problems(
        &self,
        owner_id: &str,
        kind: Option<ProblemType>,
    ) -> Result<Vec<Problem>, StoreError> {
        Ok(select_for_listing(self.problems.values(), owner_id, kind))
    }

    fn update_tags(&mut self, id: u64, tags: Vec<String>) -> Result<Problem, StoreError> {
        let problem = self.problems.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        problem.tags = normalize_tags(&tags);
        problem.updated_at = Some(Utc::now());
        Ok(problem.clone())
    }

    fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        self.problems
            .shift_remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_problem(owner: &str, name: &str, kind: ProblemType) -> NewProblem {
        NewProblem {
            owner_id: owner.to_string(),
            name: name.to_string(),
            kind,
            image_png: vec![1, 2, 3],
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_list_filters_owner_and_type_newest_first() {
        let mut store = MemoryProblemStore::new();
        store
            .save(new_problem("a", "first", ProblemType::Bouldering))
            .expect("save");
        store
            .save(new_problem("a", "second", ProblemType::Endurance))
            .expect("save");
        store
            .save(new_problem("b", "other", ProblemType::Bouldering))
            .expect("save");
        store
            .save(new_problem("a", "third", ProblemType::Bouldering))
            .expect("save");

        let names: Vec<String> = store
            .list_problems("a", Some(ProblemType::Bouldering))
            .expect("list")
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["third".to_string(), "first".to_string()]);
        assert_eq!(store.list_problems("a", None).expect("list").len(), 3);
    }

    #[test]
    fn test_update_tags_normalizes() {
        let mut store = MemoryProblemStore::new();
        let saved = store
            .save(new_problem("a", "p", ProblemType::Bouldering))
            .expect("save");
        let updated = store
            .update_tags(saved.id, vec![" crimp ".into(), "crimp".into(), "".into()])
            .expect("update");
        assert_eq!(updated.tags, vec!["crimp".to_string()]);
        assert!(updated.updated_at.is_some());
    }

    #[test]
    fn test_delete_unknown_id_fails() {
        let mut store = MemoryProblemStore::new();
        assert!(matches!(store.delete(9), Err(StoreError::NotFound(9))));
        assert!(matches!(
            store.update_tags(9, Vec::new()),
            Err(StoreError::NotFound(9))
        ));
    }
}
