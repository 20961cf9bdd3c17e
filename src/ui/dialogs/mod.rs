//! Datei-Dialoge und modale Fenster.

mod delete_dialog;
mod file_dialogs;
mod message_dialog;
mod tag_editor;

pub use delete_dialog::show_delete_dialog;
pub use file_dialogs::handle_file_dialogs;
pub use message_dialog::show_message_dialog;
pub use tag_editor::show_tag_editor;
