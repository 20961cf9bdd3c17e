//! Umrechnung zwischen Bildschirm-Koordinaten und Canvas-Pixeln.

use glam::Vec2;

/// Abbildung des angezeigten Canvas-Rechtecks auf den Backing-Buffer.
///
/// Die Anzeigegröße (egui-Punkte) darf von der Backing-Auflösung abweichen,
/// z.B. bei HiDPI-Skalierung. Alle Markierungen leben in Backing-Pixeln.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    /// Linke obere Ecke des angezeigten Canvas in Bildschirm-Koordinaten
    pub origin: Vec2,
    /// Angezeigte Größe in Bildschirm-Koordinaten
    pub displayed_size: Vec2,
    /// Größe des Backing-Buffers in Pixeln
    pub backing_size: Vec2,
}

impl CanvasTransform {
    /// Erstellt eine Transformation.
    pub fn new(origin: Vec2, displayed_size: Vec2, backing_size: Vec2) -> Self {
        Self {
            origin,
            displayed_size,
            backing_size,
        }
    }

    /// Skalierung Bildschirm → Backing pro Achse.
    pub fn scale(&self) -> Vec2 {
        let displayed = self.displayed_size.max(Vec2::splat(f32::EPSILON));
        self.backing_size / displayed
    }

    /// Prüft, ob ein Bildschirmpunkt auf dem angezeigten Canvas liegt.
    pub fn contains(&self, screen_pos: Vec2) -> bool {
        let local = screen_pos - self.origin;
        local.cmpge(Vec2::ZERO).all() && local.cmple(self.displayed_size).all()
    }

    /// Bildschirm-Koordinaten → Canvas-Pixel, geklemmt auf `[0, backing_size]`.
    pub fn client_to_canvas(&self, screen_pos: Vec2) -> Vec2 {
        ((screen_pos - self.origin) * self.scale()).clamp(Vec2::ZERO, self.backing_size)
    }
}
