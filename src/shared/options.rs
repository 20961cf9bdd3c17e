//! Zentrale Konfiguration für den Spraywand-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::SegmentParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Gesten ──────────────────────────────────────────────────────────

/// Haltedauer bis zum Long-Press (ms).
pub const LONG_PRESS_MS: u64 = 500;
/// Wartezeit nach dem letzten Tap, bevor die Tap-Folge übernommen wird (ms).
pub const CLICK_COMMIT_MS: u64 = 400;
/// Drücke ab dieser Dauer zählen nicht mehr als Tap (ms).
///
/// Zwischen diesem Wert und `LONG_PRESS_MS` liegt eine Totzone: ein Druck
/// dieser Länge ist weder Tap noch Long-Press.
pub const TAP_MAX_DURATION_MS: u64 = 350;
/// Maximaler Abstand zwischen zwei Taps einer Folge (ms).
pub const TAP_WINDOW_MS: u64 = 450;
/// Maximaler Abstand zwischen zwei Taps einer Folge (Canvas-Pixel).
pub const TAP_DISTANCE_PX: f32 = 50.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Maximale Anzeigebreite des Canvas in Pixeln.
pub const MAX_DISPLAY_WIDTH: f32 = 400.0;
/// Maximale Anzeigehöhe als Anteil der Fensterhöhe.
pub const MAX_DISPLAY_HEIGHT_FRACTION: f32 = 0.6;
/// Konturstärke auf dem sichtbaren Canvas.
pub const VISIBLE_LINE_WIDTH: f32 = 4.0;
/// Konturstärke auf dem Export-Canvas.
pub const EXPORT_LINE_WIDTH: f32 = 3.0;
/// Schriftgröße der Sequenznummern relativ zur Formbreite.
pub const LABEL_FONT_WIDTH_FACTOR: f32 = 0.25;
/// Minimale Schriftgröße der Sequenznummern (px).
pub const LABEL_FONT_MIN_PX: f32 = 14.0;
/// Maximale Schriftgröße der Sequenznummern (px).
pub const LABEL_FONT_MAX_PX: f32 = 28.0;
/// Füllfarbe der Sequenznummern (RGBA: Rot).
pub const LABEL_COLOR: [u8; 4] = [0xFF, 0x00, 0x00, 0xFF];
/// Umrissfarbe der Sequenznummern (RGBA: Weiß).
pub const LABEL_OUTLINE_COLOR: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];

// ── Ablage ──────────────────────────────────────────────────────────

/// Standard-Besitzerkennung der lokalen Ablage.
pub const DEFAULT_OWNER_ID: &str = "local";
/// Standard-Datenverzeichnis (relativ zur Binary).
pub const DEFAULT_DATA_DIR: &str = "spray_wall_data";
/// Standard-Bestätigungswort für das Löschen eines Problems.
pub const DEFAULT_DELETE_KEYWORD: &str = "löschen";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `spray_wall_editor.toml` neben der Binary gespeichert.
/// Fehlende Felder in bestehenden Dateien bekommen ihre Standardwerte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Gesten ──────────────────────────────────────────────────
    /// Long-Press-Dauer in ms
    pub long_press_ms: u64,
    /// Commit-Verzögerung einer Tap-Folge in ms
    pub click_commit_ms: u64,
    /// Maximale Tap-Dauer in ms
    pub tap_max_duration_ms: u64,
    /// Zeitfenster für Folge-Taps in ms
    pub tap_window_ms: u64,
    /// Distanzschwelle für Folge-Taps in Canvas-Pixeln
    pub tap_distance_px: f32,

    // ── Regionserkennung ────────────────────────────────────────
    /// Euklidische RGB-Farbschwelle
    pub color_threshold: f32,
    /// Maximale Regionsgröße in Pixeln
    pub max_region_pixels: usize,
    /// Minimale Regionsgröße in Pixeln
    pub min_region_pixels: usize,
    /// Zuschlag auf Breite/Höhe der erkannten Ellipse
    pub region_padding: f32,
    /// Maximaler Flächenanteil einer Region am Canvas
    pub max_area_fraction: f32,
    /// Radius des Fallback-Kreises
    pub default_circle_radius: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Maximale Anzeigebreite in Pixeln
    pub max_display_width: f32,
    /// Maximale Anzeigehöhe als Anteil der Fensterhöhe
    pub max_display_height_fraction: f32,
    /// Konturstärke sichtbarer Canvas
    pub visible_line_width: f32,
    /// Konturstärke Export-Canvas
    pub export_line_width: f32,
    /// Schriftgröße relativ zur Formbreite
    pub label_font_width_factor: f32,
    /// Minimale Schriftgröße
    pub label_font_min_px: f32,
    /// Maximale Schriftgröße
    pub label_font_max_px: f32,
    /// Füllfarbe der Sequenznummern
    pub label_color: [u8; 4],
    /// Umrissfarbe der Sequenznummern
    pub label_outline_color: [u8; 4],

    // ── Ablage ──────────────────────────────────────────────────
    /// Besitzerkennung für gespeicherte Probleme
    pub owner_id: String,
    /// Datenverzeichnis (relativ zur Binary, falls nicht absolut)
    pub data_dir: PathBuf,
    /// Wort, das zum Löschen eines Problems eingegeben werden muss
    pub delete_confirm_keyword: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            long_press_ms: LONG_PRESS_MS,
            click_commit_ms: CLICK_COMMIT_MS,
            tap_max_duration_ms: TAP_MAX_DURATION_MS,
            tap_window_ms: TAP_WINDOW_MS,
            tap_distance_px: TAP_DISTANCE_PX,

            color_threshold: crate::core::segmenter::COLOR_THRESHOLD,
            max_region_pixels: crate::core::segmenter::MAX_REGION_PIXELS,
            min_region_pixels: crate::core::segmenter::MIN_REGION_PIXELS,
            region_padding: crate::core::segmenter::REGION_PADDING,
            max_area_fraction: crate::core::segmenter::MAX_AREA_FRACTION,
            default_circle_radius: crate::core::segmenter::DEFAULT_CIRCLE_RADIUS,

            max_display_width: MAX_DISPLAY_WIDTH,
            max_display_height_fraction: MAX_DISPLAY_HEIGHT_FRACTION,
            visible_line_width: VISIBLE_LINE_WIDTH,
            export_line_width: EXPORT_LINE_WIDTH,
            label_font_width_factor: LABEL_FONT_WIDTH_FACTOR,
            label_font_min_px: LABEL_FONT_MIN_PX,
            label_font_max_px: LABEL_FONT_MAX_PX,
            label_color: LABEL_COLOR,
            label_outline_color: LABEL_OUTLINE_COLOR,

            owner_id: DEFAULT_OWNER_ID.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            delete_confirm_keyword: DEFAULT_DELETE_KEYWORD.to_string(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::sanitized(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt unbrauchbare Werte aus einer von Hand bearbeiteten Datei.
    ///
    /// Nicht-endliche oder negative Zahlen fallen auf den Standardwert zurück,
    /// vertauschte Schriftgrenzen werden getauscht.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        for (name, value, fallback) in [
            ("tap_distance_px", &mut self.tap_distance_px, defaults.tap_distance_px),
            ("color_threshold", &mut self.color_threshold, defaults.color_threshold),
            ("region_padding", &mut self.region_padding, defaults.region_padding),
            ("max_area_fraction", &mut self.max_area_fraction, defaults.max_area_fraction),
            (
                "default_circle_radius",
                &mut self.default_circle_radius,
                defaults.default_circle_radius,
            ),
            ("max_display_width", &mut self.max_display_width, defaults.max_display_width),
            (
                "max_display_height_fraction",
                &mut self.max_display_height_fraction,
                defaults.max_display_height_fraction,
            ),
            ("visible_line_width", &mut self.visible_line_width, defaults.visible_line_width),
            ("export_line_width", &mut self.export_line_width, defaults.export_line_width),
            (
                "label_font_width_factor",
                &mut self.label_font_width_factor,
                defaults.label_font_width_factor,
            ),
            ("label_font_min_px", &mut self.label_font_min_px, defaults.label_font_min_px),
            ("label_font_max_px", &mut self.label_font_max_px, defaults.label_font_max_px),
        ] {
            if !value.is_finite() || *value < 0.0 {
                log::warn!(
                    "Option {} = {} ungültig, verwende Standardwert {}",
                    name,
                    value,
                    fallback
                );
                *value = fallback;
            }
        }

        if self.label_font_min_px > self.label_font_max_px {
            log::warn!(
                "Schriftgrenzen vertauscht ({} > {}), werden getauscht",
                self.label_font_min_px,
                self.label_font_max_px
            );
            std::mem::swap(&mut self.label_font_min_px, &mut self.label_font_max_px);
        }
        if self.min_region_pixels > self.max_region_pixels {
            log::warn!(
                "min_region_pixels ({}) größer als max_region_pixels ({}), werden getauscht",
                self.min_region_pixels,
                self.max_region_pixels
            );
            std::mem::swap(&mut self.min_region_pixels, &mut self.max_region_pixels);
        }
        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Verzeichnis der Binary (Basis für Konfig- und Datenpfade).
    fn exe_dir() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        Self::exe_dir().join("spray_wall_editor.toml")
    }

    /// Datenverzeichnis; relative Pfade werden neben der Binary aufgelöst.
    pub fn resolved_data_dir(&self) -> PathBuf {
        if self.data_dir.is_absolute() {
            self.data_dir.clone()
        } else {
            Self::exe_dir().join(&self.data_dir)
        }
    }

    /// Parameter für die Regionserkennung.
    pub fn segment_params(&self) -> SegmentParams {
        SegmentParams {
            color_threshold: self.color_threshold,
            max_region_pixels: self.max_region_pixels,
            min_region_pixels: self.min_region_pixels,
            padding: self.region_padding,
            max_area_fraction: self.max_area_fraction,
            default_circle_radius: self.default_circle_radius,
        }
    }

    /// Maximale Anzeigehöhe für eine gegebene Fensterhöhe.
    pub fn max_display_height(&self, viewport_height: f32) -> f32 {
        viewport_height * self.max_display_height_fraction
    }

    /// Schriftgröße der Sequenznummern für eine Form der gegebenen Breite.
    pub fn label_font_px(&self, shape_width: f32) -> f32 {
        // max/min statt clamp: panikfrei auch bei vertauschten Grenzen
        (shape_width * self.label_font_width_factor)
            .max(self.label_font_min_px)
            .min(self.label_font_max_px)
    }
}
