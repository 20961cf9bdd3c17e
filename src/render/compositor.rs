//! CPU-Compositing: Wandfoto + Markierungen + Sequenznummern.
//!
//! Zwei Oberflächen mit identischem Inhalt: die sichtbare (dickere Konturen,
//! wird als Textur angezeigt) und die Export-Oberfläche (für das PNG beim
//! Speichern). Konturen werden mit tiny-skia anti-aliased gezeichnet.

use super::text;
use crate::core::{Annotation, Shape};
use crate::shared::RenderScene;
use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use tiny_skia::{IntSize, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};

/// Oberflächen-Variante, bestimmt die Konturstärke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Angezeigter Canvas
    Visible,
    /// Export beim Speichern
    Export,
}

impl Surface {
    fn line_width(self, scene: &RenderScene) -> f32 {
        match self {
            Surface::Visible => scene.options.visible_line_width,
            Surface::Export => scene.options.export_line_width,
        }
    }
}

/// Zeichnet den sichtbaren Canvas. `None`, wenn kein Wandfoto geladen ist.
pub fn render_visible(scene: &RenderScene) -> Option<RgbaImage> {
    compose(scene, Surface::Visible)
}

/// Zeichnet den Export-Canvas in Backing-Auflösung. `None` ohne Wandfoto.
pub fn render_export(scene: &RenderScene) -> Option<RgbaImage> {
    compose(scene, Surface::Export)
}

/// Serialisiert ein Bild als PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .context("PNG-Kodierung fehlgeschlagen")?;
    Ok(bytes.into_inner())
}

/// Zeichnet Foto und Markierungen in Einfügereihenfolge (neueste zuoberst).
pub fn compose(scene: &RenderScene, surface: Surface) -> Option<RgbaImage> {
    let wall = scene.wall_image.as_deref()?;
    let (width, height) = wall.backing_size();

    let size = IntSize::from_wh(width, height)?;
    let mut pixmap = Pixmap::from_vec(premultiply(wall.base().as_raw()), size)?;

    let stroke = Stroke {
        width: surface.line_width(scene),
        ..Stroke::default()
    };

    for annotation in scene.annotations.iter() {
        draw_outline(&mut pixmap, annotation, &stroke);
        if scene.show_numbers() {
            draw_numbers(&mut pixmap, annotation, scene);
        }
    }

    RgbaImage::from_raw(width, height, demultiply(pixmap.data()))
}

/// Zeichnet die Kontur einer Markierung.
fn draw_outline(pixmap: &mut Pixmap, annotation: &Annotation, stroke: &Stroke) {
    let Some(path) = shape_path(&annotation.shape) else {
        return;
    };
    let [r, g, b, a] = annotation.color.rgba();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    pixmap.stroke_path(&path, &paint, stroke, Transform::identity(), None);
}

/// Zeichnet die Sequenznummern zentriert in die Form.
fn draw_numbers(pixmap: &mut Pixmap, annotation: &Annotation, scene: &RenderScene) {
    let Some(label) = annotation.label_text() else {
        return;
    };
    let font_px = scene.options.label_font_px(annotation.shape.label_width());
    text::draw_label_centered(
        pixmap,
        annotation.shape.center(),
        &label,
        font_px,
        scene.options.label_color,
        scene.options.label_outline_color,
    );
}

/// Baut den Zeichenpfad einer Form. `None` bei degenerierter Geometrie.
fn shape_path(shape: &Shape) -> Option<Path> {
    match shape {
        Shape::Circle { center, radius } if *radius > 0.0 => {
            PathBuilder::from_circle(center.x, center.y, *radius)
        }
        Shape::Circle { .. } => None,
        Shape::Ellipse {
            center,
            width,
            height,
            ..
        } => {
            if *width <= 0.0 || *height <= 0.0 {
                return None;
            }
            let rect = Rect::from_xywh(
                center.x - width / 2.0,
                center.y - height / 2.0,
                *width,
                *height,
            )?;
            PathBuilder::from_oval(rect)
        }
        Shape::Polygon { points } => {
            let (first, rest) = points.split_first()?;
            let mut pb = PathBuilder::new();
            pb.move_to(first.x, first.y);
            for p in rest {
                pb.line_to(p.x, p.y);
            }
            pb.close();
            pb.finish()
        }
    }
}

/// RGBA (gerade) → RGBA (vormultipliziert) für tiny-skia.
fn premultiply(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());
    for chunk in data.chunks_exact(4) {
        let a = chunk[3] as u16;
        let mul = |c: u8| ((c as u16 * a + 127) / 255) as u8;
        result.extend_from_slice(&[mul(chunk[0]), mul(chunk[1]), mul(chunk[2]), chunk[3]]);
    }
    result
}

/// RGBA (vormultipliziert) → RGBA (gerade).
fn demultiply(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());
    for chunk in data.chunks_exact(4) {
        let a = chunk[3] as f32 / 255.0;
        if a > 0.0 {
            let r = ((chunk[0] as f32 / a).round().min(255.0)) as u8;
            let g = ((chunk[1] as f32 / a).round().min(255.0)) as u8;
            let b = ((chunk[2] as f32 / a).round().min(255.0)) as u8;
            result.extend_from_slice(&[r, g, b, chunk[3]]);
        } else {
            result.extend_from_slice(&[0, 0, 0, 0]);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AnnotationSet, HoldColor, ProblemType, WallImage};
    use crate::shared::EditorOptions;
    use glam::Vec2;
    use image::{DynamicImage, Rgba};
    use std::sync::Arc;

    fn gray_wall(width: u32, height: u32) -> Arc<WallImage> {
        let image = RgbaImage::from_pixel(width, height, Rgba([128, 128, 128, 255]));
        Arc::new(WallImage::from_image(
            DynamicImage::ImageRgba8(image),
            "test",
            1000.0,
            1000.0,
        ))
    }

    fn scene(annotations: AnnotationSet, kind: ProblemType) -> RenderScene {
        RenderScene {
            wall_image: Some(gray_wall(120, 80)),
            annotations,
            problem_type: Some(kind),
            options: EditorOptions::default(),
        }
    }

    #[test]
    fn test_no_image_renders_nothing() {
        let scene = RenderScene {
            wall_image: None,
            annotations: AnnotationSet::new(),
            problem_type: None,
            options: EditorOptions::default(),
        };
        assert!(render_visible(&scene).is_none());
        assert!(render_export(&scene).is_none());
    }

    #[test]
    fn test_outline_uses_hold_color() {
        let mut set = AnnotationSet::new();
        let mut annotation = Annotation::new(Shape::circle(Vec2::new(60.0, 40.0), 20.0));
        annotation.color = HoldColor::Green;
        set.push(annotation);

        let image = render_export(&scene(set, ProblemType::Bouldering)).expect("Bild");
        // Auf der Kontur (rechts vom Mittelpunkt) grün, Mittelpunkt unverändert
        let on_ring = image.get_pixel(80, 40).0;
        assert!(on_ring[1] > 200);
        assert!(on_ring[0] < 64);
        assert_eq!(image.get_pixel(60, 40).0, [128, 128, 128, 255]);
    }

    #[test]
    fn test_visible_outline_is_wider_than_export() {
        let mut set = AnnotationSet::new();
        set.push(Annotation::new(Shape::circle(Vec2::new(60.0, 40.0), 20.0)));
        let scene = scene(set, ProblemType::Bouldering);

        let visible = render_visible(&scene).expect("Bild");
        let export = render_export(&scene).expect("Bild");
        let red_pixels = |img: &RgbaImage| {
            img.pixels()
                .filter(|p| p.0[0] > 200 && p.0[1] < 80 && p.0[2] < 80)
                .count()
        };
        assert!(red_pixels(&visible) > red_pixels(&export));
    }

    #[test]
    fn test_numbers_only_drawn_in_endurance() {
        let mut set = AnnotationSet::new();
        set.push(Annotation::new(Shape::circle(Vec2::new(60.0, 40.0), 30.0)).with_number(8));

        let endurance = render_export(&scene(set.clone(), ProblemType::Endurance)).expect("Bild");
        let bouldering = render_export(&scene(set, ProblemType::Bouldering)).expect("Bild");

        let white = |img: &RgbaImage| img.pixels().filter(|p| p.0 == [255, 255, 255, 255]).count();
        assert!(white(&endurance) > 0);
        assert_eq!(white(&bouldering), 0);
    }

    #[test]
    fn test_export_png_decodes_to_backing_size() {
        let mut set = AnnotationSet::new();
        set.push(Annotation::new(Shape::ellipse(Vec2::new(30.0, 30.0), 20.0, 12.0)).with_number(1));
        set.push(Annotation::new(
            Shape::polygon(vec![
                Vec2::new(70.0, 10.0),
                Vec2::new(100.0, 10.0),
                Vec2::new(90.0, 40.0),
            ])
            .expect("Polygon"),
        ));
        let scene = scene(set, ProblemType::Endurance);

        let png = encode_png(&render_export(&scene).expect("Bild")).expect("PNG");
        let decoded = image::load_from_memory(&png).expect("dekodierbar");
        assert_eq!((decoded.width(), decoded.height()), (120, 80));
    }

    #[test]
    fn test_degenerate_shapes_are_skipped() {
        let mut set = AnnotationSet::new();
        set.push(Annotation::new(
            Shape::polygon(vec![Vec2::new(5.0, 5.0)]).expect("Polygon"),
        ));
        set.push(Annotation::new(Shape::ellipse(Vec2::new(5.0, 5.0), 0.0, 0.0)));
        let image = render_export(&scene(set, ProblemType::Bouldering)).expect("Bild");
        assert!(image.pixels().all(|p| p.0 == [128, 128, 128, 255]));
    }
}
