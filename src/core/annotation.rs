//! Markierungen auf dem Wandfoto: Formen, Griff-Farben und Sequenznummern.
//!
//! Eine `Annotation` beschreibt genau einen markierten Griff. Die Geometrie
//! ist ein geschlossener Summentyp (`Shape`), damit Hit-Test, Zeichnen und
//! Mutation jede Variante explizit behandeln müssen.

use glam::Vec2;
use std::collections::BTreeSet;

/// Ergebnisfarbe eines markierten Griffs (im Boulder-Modus: Versuchsergebnis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HoldColor {
    /// Einfach-Tap (Standard für neue Griffe)
    #[default]
    Red,
    /// Doppel-Tap
    Green,
    /// Dreifach-Tap (und mehr)
    Blue,
}

impl HoldColor {
    /// RGBA-Wert der Konturfarbe.
    pub fn rgba(self) -> [u8; 4] {
        match self {
            HoldColor::Red => [0xFF, 0x00, 0x00, 0xFF],
            HoldColor::Green => [0x00, 0xFF, 0x00, 0xFF],
            HoldColor::Blue => [0x00, 0x00, 0xFF, 0xFF],
        }
    }

    /// Farbe passend zur Tap-Anzahl im Boulder-Modus.
    pub fn for_tap_count(count: u32) -> Self {
        match count {
            0 | 1 => HoldColor::Red,
            2 => HoldColor::Green,
            _ => HoldColor::Blue,
        }
    }
}

/// Geometrie einer Markierung in Canvas-Pixeln (Backing-Buffer, nicht Anzeige-Pixel).
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Kreis (Fallback-Form bei fehlgeschlagener Segmentierung)
    Circle { center: Vec2, radius: f32 },
    /// Achsenparallele Ellipse aus der Regionserkennung.
    ///
    /// `radius` = max(width, height) / 2, für einheitliche Größenabschätzung.
    Ellipse {
        center: Vec2,
        width: f32,
        height: f32,
        radius: f32,
    },
    /// Geschlossenes Polygon (mindestens ein Punkt)
    Polygon { points: Vec<Vec2> },
}

impl Shape {
    /// Erstellt einen Kreis.
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Shape::Circle { center, radius }
    }

    /// Erstellt eine Ellipse; `radius` wird aus Breite/Höhe abgeleitet.
    pub fn ellipse(center: Vec2, width: f32, height: f32) -> Self {
        Shape::Ellipse {
            center,
            width,
            height,
            radius: width.max(height) / 2.0,
        }
    }

    /// Erstellt ein Polygon. Gibt `None` zurück, wenn keine Punkte übergeben werden.
    pub fn polygon(points: Vec<Vec2>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Shape::Polygon { points })
    }

    /// Prüft, ob ein Punkt innerhalb der Form liegt.
    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            Shape::Circle { center, radius } => point.distance(*center) <= *radius,
            Shape::Ellipse {
                center,
                width,
                height,
                ..
            } => {
                if *width <= 0.0 || *height <= 0.0 {
                    return false;
                }
                let d = (point - *center) / Vec2::new(width / 2.0, height / 2.0);
                d.length_squared() <= 1.0
            }
            Shape::Polygon { points } => point_in_polygon(point, points),
        }
    }

    /// Achsenparallele Bounding-Box als (min, max).
    pub fn bounds(&self) -> (Vec2, Vec2) {
        match self {
            Shape::Circle { center, radius } => {
                let r = Vec2::splat(*radius);
                (*center - r, *center + r)
            }
            Shape::Ellipse {
                center,
                width,
                height,
                ..
            } => {
                let half = Vec2::new(width / 2.0, height / 2.0);
                (*center - half, *center + half)
            }
            Shape::Polygon { points } => {
                let first = points.first().copied().unwrap_or(Vec2::ZERO);
                points
                    .iter()
                    .skip(1)
                    .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)))
            }
        }
    }

    /// Ankerpunkt für Beschriftungen (Mitte der Form).
    pub fn center(&self) -> Vec2 {
        match self {
            Shape::Circle { center, .. } | Shape::Ellipse { center, .. } => *center,
            Shape::Polygon { .. } => {
                let (min, max) = self.bounds();
                (min + max) / 2.0
            }
        }
    }

    /// Breite der Form, Basis für die Schriftgröße der Sequenznummern.
    pub fn label_width(&self) -> f32 {
        match self {
            Shape::Circle { radius, .. } => radius * 2.0,
            Shape::Ellipse { width, .. } => *width,
            Shape::Polygon { .. } => {
                let (min, max) = self.bounds();
                max.x - min.x
            }
        }
    }
}

/// Prüft ob ein Punkt innerhalb eines Polygons liegt (Ray-Casting).
fn point_in_polygon(point: glam::Vec2, polygon: &[glam::Vec2]) -> bool {
    let Some(&last) = polygon.last() else {
        return false;
    };

    let mut inside = false;
    let mut previous = last;

    for &current in polygon {
        // Division nur bei echter Y-Überquerung, dann ist previous.y != current.y
        let intersect = ((current.y > point.y) != (previous.y > point.y))
            && (point.x
                < (previous.x - current.x) * (point.y - current.y) / (previous.y - current.y)
                    + current.x);

        if intersect {
            inside = !inside;
        }

        previous = current;
    }

    inside
}

/// Ein markierter Griff: Form, Farbe und (im Ausdauer-Modus) Sequenznummern.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Geometrie der Markierung
    pub shape: Shape,
    /// Konturfarbe
    pub color: HoldColor,
    /// Aufsteigend geordnete Sequenznummern (nur Ausdauer-Modus)
    pub sequence_numbers: BTreeSet<u32>,
}

impl Annotation {
    /// Erstellt eine rote Markierung ohne Sequenznummern.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            color: HoldColor::Red,
            sequence_numbers: BTreeSet::new(),
        }
    }

    /// Builder: fügt eine Sequenznummer hinzu.
    pub fn with_number(mut self, number: u32) -> Self {
        self.sequence_numbers.insert(number);
        self
    }

    /// Beschriftungstext, z.B. `"1, 3"`. `None` ohne Sequenznummern.
    pub fn label_text(&self) -> Option<String> {
        if self.sequence_numbers.is_empty() {
            return None;
        }
        let parts: Vec<String> = self
            .sequence_numbers
            .iter()
            .map(|n| n.to_string())
            .collect();
        Some(parts.join(", "))
    }
}

/// Geordnete Liste aller Markierungen eines Bildes (Einfügereihenfolge).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationSet {
    items: Vec<Annotation>,
}

impl AnnotationSet {
    /// Erstellt eine leere Liste.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Hängt eine Markierung an (wird zur neuesten).
    pub fn push(&mut self, annotation: Annotation) {
        self.items.push(annotation);
    }

    /// Entfernt die Markierung am Index.
    pub fn remove(&mut self, index: usize) -> Option<Annotation> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Read-only Zugriff per Index.
    pub fn get(&self, index: usize) -> Option<&Annotation> {
        self.items.get(index)
    }

    /// Mutabler Zugriff per Index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Annotation> {
        self.items.get_mut(index)
    }

    /// Anzahl der Markierungen.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Gibt `true` zurück, wenn keine Markierungen vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iteriert in Einfügereihenfolge (älteste zuerst).
    pub fn iter(&self) -> std::slice::Iter<'_, Annotation> {
        self.items.iter()
    }

    /// Entfernt alle Markierungen.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Findet die Markierung unter einem Punkt.
    ///
    /// Sucht von der neuesten zur ältesten, damit bei Überlappung die
    /// zuletzt angelegte Form gewinnt.
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        self.items
            .iter()
            .enumerate()
            .rev()
            .find(|(_, annotation)| annotation.shape.contains(point))
            .map(|(index, _)| index)
    }

    /// Kleinste positive Sequenznummer, die noch keiner Markierung zugeordnet ist.
    ///
    /// Global über alle Markierungen, damit eine einzige Reihenfolge entsteht.
    pub fn next_sequence_number(&self) -> u32 {
        let used: BTreeSet<u32> = self
            .items
            .iter()
            .flat_map(|a| a.sequence_numbers.iter().copied())
            .collect();
        (1..).find(|n| !used.contains(n)).unwrap_or(1)
    }
}

#[cfg(test)]
mod tests;
