//! Gespeicherte Probleme (Boulder- oder Ausdauerroute auf einem markierten Wandfoto).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Art eines Problems; bestimmt die Bedeutung von Taps auf Markierungen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemType {
    /// Farbe pro Griff (Versuchsergebnis)
    Bouldering,
    /// Nummerierte Griff-Reihenfolge
    Endurance,
}

impl ProblemType {
    /// Alle Typen in Menü-Reihenfolge.
    pub const ALL: [ProblemType; 2] = [ProblemType::Bouldering, ProblemType::Endurance];

    /// Anzeigename für die UI.
    pub fn label(self) -> &'static str {
        match self {
            ProblemType::Bouldering => "Bouldern",
            ProblemType::Endurance => "Ausdauer",
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fügt einen Tag hinzu: getrimmt, nicht leer, ohne Duplikat.
///
/// Gibt `true` zurück, wenn der Tag übernommen wurde.
pub fn add_tag(tags: &mut Vec<String>, tag: &str) -> bool {
    let tag = tag.trim();
    if tag.is_empty() || tags.iter().any(|t| t == tag) {
        return false;
    }
    tags.push(tag.to_string());
    true
}

/// Normalisiert eine Tag-Liste (trimmen, Leere und Duplikate entfernen).
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(tags.len());
    for tag in tags {
        add_tag(&mut out, tag);
    }
    out
}

/// Speicher-Payload für ein neues Problem.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProblem {
    pub owner_id: String,
    pub name: String,
    pub kind: ProblemType,
    /// PNG des zusammengesetzten Export-Canvas
    pub image_png: Vec<u8>,
    pub tags: Vec<String>,
}

/// Ein gespeichertes Problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Vom Store vergebene ID
    pub id: u64,
    pub owner_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ProblemType,
    /// PNG-Bytes; im JSON-Index nicht enthalten (liegen als eigene Datei daneben)
    #[serde(skip)]
    pub image_png: Vec<u8>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Problem {
    /// Erstellt einen Datensatz aus dem Speicher-Payload.
    pub fn from_new(id: u64, new: NewProblem, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            owner_id: new.owner_id,
            name: new.name,
            kind: new.kind,
            image_png: new.image_png,
            tags: normalize_tags(&new.tags),
            created_at,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_tag_trims_and_rejects_duplicates() {
        let mut tags = Vec::new();
        assert!(add_tag(&mut tags, "  crimpy "));
        assert!(!add_tag(&mut tags, "crimpy"));
        assert!(!add_tag(&mut tags, "   "));
        assert!(add_tag(&mut tags, "overhang"));
        assert_eq!(tags, vec!["crimpy".to_string(), "overhang".to_string()]);
    }

    #[test]
    fn test_normalize_tags() {
        let raw = vec![
            " a ".to_string(),
            "a".to_string(),
            String::new(),
            "b".to_string(),
        ];
        assert_eq!(normalize_tags(&raw), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_problem_type_serializes_lowercase() {
        let json = serde_json::to_string(&ProblemType::Endurance).expect("serialisierbar");
        assert_eq!(json, "\"endurance\"");
        let back: ProblemType = serde_json::from_str("\"bouldering\"").expect("deserialisierbar");
        assert_eq!(back, ProblemType::Bouldering);
    }
}
