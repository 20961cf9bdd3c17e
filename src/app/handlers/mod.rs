//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod dialog;
pub mod gallery;
pub mod gesture;
pub mod image;
pub mod marking;
pub mod navigation;
pub mod problem;
