//! Use-Cases der Application-Layer-Orchestrierung.

pub mod gallery;
pub mod image_io;
pub mod marking;
pub mod navigation;
pub mod problem;
