//! GPU-Texturen für Canvas und Galerie-Vorschauen.
//!
//! Texturen werden nur neu hochgeladen, wenn sich die zugehörige Revision
//! im AppState geändert hat.

use crate::app::AppState;
use crate::render;
use std::collections::HashMap;

fn to_color_image(image: &image::RgbaImage) -> egui::ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw())
}

/// Cache der hochgeladenen Texturen.
#[derive(Default)]
pub struct TextureCache {
    canvas: Option<((u64, u64), egui::TextureHandle)>,
    thumbnails: HashMap<u64, egui::TextureHandle>,
    gallery_revision: Option<u64>,
}

impl TextureCache {
    /// Erstellt einen leeren Cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Textur des sichtbaren Canvas (Wandfoto + Markierungen).
    ///
    /// Rendert neu, sobald Bild-Generation oder `canvas_revision` sich
    /// ändern. Ohne Wandfoto wird die Textur freigegeben.
    pub fn canvas(&mut self, ctx: &egui::Context, state: &AppState) -> Option<&egui::TextureHandle> {
        let revision = (state.editor.image_generation, state.view.canvas_revision);
        let stale = self.canvas.as_ref().is_none_or(|(r, _)| *r != revision);
        if stale {
            let scene = crate::app::build_render_scene(state);
            self.canvas = render::render_visible(&scene).map(|image| {
                let texture = ctx.load_texture(
                    "wall_canvas",
                    to_color_image(&image),
                    egui::TextureOptions::LINEAR,
                );
                (revision, texture)
            });
            log::debug!("Canvas-Textur neu erstellt (Revision {:?})", revision);
        }
        self.canvas.as_ref().map(|(_, texture)| texture)
    }

    /// Vorschau-Textur eines gespeicherten Problems.
    pub fn thumbnail(
        &mut self,
        ctx: &egui::Context,
        state: &AppState,
        problem_id: u64,
    ) -> Option<egui::TextureHandle> {
        if self.gallery_revision != Some(state.gallery.revision) {
            self.thumbnails.clear();
            self.gallery_revision = Some(state.gallery.revision);
        }
        if let Some(texture) = self.thumbnails.get(&problem_id) {
            return Some(texture.clone());
        }

        let problem = state.gallery.find(problem_id)?;
        let decoded = match image::load_from_memory(&problem.image_png) {
            Ok(img) => img.into_rgba8(),
            Err(e) => {
                log::warn!("Vorschau zu Problem #{} nicht lesbar: {}", problem_id, e);
                return None;
            }
        };
        let texture = ctx.load_texture(
            format!("problem_{problem_id}"),
            to_color_image(&decoded),
            egui::TextureOptions::LINEAR,
        );
        self.thumbnails.insert(problem_id, texture.clone());
        Some(texture)
    }
}
