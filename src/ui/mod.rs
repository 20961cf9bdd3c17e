//! UI-Komponenten: Menü, Editor, Galerie, Input-Handling, Dialoge.

pub mod dialogs;
mod editor_panel;
mod gallery;
pub mod input;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Dialogs).
/// Jeder Bildschirm liefert `AppIntent`s; Zustandsänderungen laufen
/// ausschließlich über den Controller.
pub mod menu;
pub mod status;
mod textures;

pub use dialogs::{handle_file_dialogs, show_delete_dialog, show_message_dialog, show_tag_editor};
pub use editor_panel::{render_canvas, render_editor_sidebar};
pub use gallery::{render_gallery, show_viewer};
pub use input::CanvasInput;
pub use menu::{render_home, render_menu};
pub use status::render_status_bar;
pub use textures::TextureCache;
