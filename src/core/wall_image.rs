//! Wandfoto-Loader: dekodiert die gewählte Bilddatei und skaliert sie auf die Canvas-Auflösung.

use anyhow::{Context, Result};
use image::{imageops, DynamicImage, GenericImageView, ImageReader, RgbaImage};
use std::io::BufReader;
use std::path::Path;

/// Berechnet die Anzeigegröße eines Bildes innerhalb der Grenzen.
///
/// Seitenverhältnis bleibt erhalten, es wird nur verkleinert. Zuerst wird
/// auf `max_width` begrenzt, danach auf `max_height`. Ergebnis ist
/// abgerundet und mindestens 1×1.
pub fn fit_display_size(natural: (u32, u32), max_width: f32, max_height: f32) -> (u32, u32) {
    let mut w = natural.0 as f32;
    let mut h = natural.1 as f32;
    if w > max_width && max_width > 0.0 {
        h = h * max_width / w;
        w = max_width;
    }
    if h > max_height && max_height > 0.0 {
        w = w * max_height / h;
        h = max_height;
    }
    ((w.floor() as u32).max(1), (h.floor() as u32).max(1))
}

/// Das aktuell bearbeitete Wandfoto in Canvas-Auflösung.
///
/// `base` ist das unveränderte Foto in Backing-Auflösung; Markierungen
/// werden nie hineingezeichnet, sondern erst beim Compositing darüber gelegt.
#[derive(Debug, Clone)]
pub struct WallImage {
    /// Foto in Backing-Auflösung
    base: RgbaImage,
    /// Originalgröße der Datei
    natural_size: (u32, u32),
    /// Herkunft (Dateipfad) für Logs und Statuszeile
    source_label: String,
}

impl WallImage {
    /// Lädt ein Wandfoto aus einer Datei und passt es an die Anzeigegrenzen an.
    ///
    /// Das Format wird zuerst über die Dateiendung bestimmt, bei Fehlschlag
    /// über den Dateiinhalt.
    pub fn load_from_file(path: &Path, max_width: f32, max_height: f32) -> Result<Self> {
        let label = path.display().to_string();
        let image = match image::open(path) {
            Ok(img) => img,
            Err(ext_err) => {
                log::warn!(
                    "Format-Erkennung via Dateiendung fehlgeschlagen für '{}': {}. Versuche Erkennung via Dateiinhalt...",
                    label, ext_err
                );
                let file = std::fs::File::open(path)
                    .with_context(|| format!("Datei nicht gefunden: {}", label))?;
                let reader = ImageReader::new(BufReader::new(file))
                    .with_guessed_format()
                    .with_context(|| format!("Format-Erkennung fehlgeschlagen für: {}", label))?;
                if let Some(fmt) = reader.format() {
                    log::info!("Tatsächliches Bildformat erkannt: {:?} für '{}'", fmt, label);
                }
                reader
                    .decode()
                    .with_context(|| format!("Fehler beim Dekodieren des Wandfotos: {}", label))?
            }
        };

        Ok(Self::from_image(image, &label, max_width, max_height))
    }

    /// Erstellt ein Wandfoto aus einem bereits dekodierten Bild.
    pub fn from_image(
        image: DynamicImage,
        source_label: &str,
        max_width: f32,
        max_height: f32,
    ) -> Self {
        let natural_size = image.dimensions();
        let (width, height) = fit_display_size(natural_size, max_width, max_height);

        let base = if (width, height) == natural_size {
            image.into_rgba8()
        } else {
            imageops::resize(
                &image.into_rgba8(),
                width,
                height,
                imageops::FilterType::Triangle,
            )
        };

        log::info!(
            "Wandfoto geladen: {}x{} Pixel von '{}', Canvas {}x{}",
            natural_size.0,
            natural_size.1,
            source_label,
            width,
            height
        );

        Self {
            base,
            natural_size,
            source_label: source_label.to_string(),
        }
    }

    /// Foto in Backing-Auflösung (Eingabe für Regionserkennung und Compositing).
    pub fn base(&self) -> &RgbaImage {
        &self.base
    }

    /// Größe des Backing-Buffers in Pixeln.
    pub fn backing_size(&self) -> (u32, u32) {
        self.base.dimensions()
    }

    /// Originalgröße der Bilddatei.
    pub fn natural_size(&self) -> (u32, u32) {
        self.natural_size
    }

    /// Herkunft des Bildes.
    pub fn source_label(&self) -> &str {
        &self.source_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_display_size_limits_width_first() {
        // 800x600 -> Breite 400 -> 400x300, Höhe passt
        assert_eq!(fit_display_size((800, 600), 400.0, 480.0), (400, 300));
    }

    #[test]
    fn test_fit_display_size_limits_height_after_width() {
        // 800x1600 -> 400x800 -> Höhe 480 -> 240x480
        assert_eq!(fit_display_size((800, 1600), 400.0, 480.0), (240, 480));
    }

    #[test]
    fn test_fit_display_size_never_upscales() {
        assert_eq!(fit_display_size((120, 80), 400.0, 480.0), (120, 80));
    }

    #[test]
    fn test_fit_display_size_minimum_one_pixel() {
        assert_eq!(fit_display_size((4000, 1), 400.0, 480.0), (400, 1));
    }

    #[test]
    fn test_from_image_resizes_to_backing() {
        let image = DynamicImage::new_rgb8(1000, 500);
        let wall = WallImage::from_image(image, "test.png", 400.0, 600.0);
        assert_eq!(wall.backing_size(), (400, 200));
        assert_eq!(wall.natural_size(), (1000, 500));
        assert_eq!(wall.source_label(), "test.png");
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let result = WallImage::load_from_file(Path::new("/nonexistent/wall.png"), 400.0, 480.0);
        assert!(result.is_err());
    }
}
