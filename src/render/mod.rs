//! CPU-Rendering: Compositing von Wandfoto und Markierungen.

pub mod compositor;
mod text;

pub use crate::shared::RenderScene;
pub use compositor::{compose, encode_png, render_export, render_visible, Surface};
