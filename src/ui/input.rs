//! Canvas-Input-Handling: Pointer-Events → AppIntent.
//!
//! Tap-Zählung und Long-Press erkennt der Gesten-Recognizer im App-Layer;
//! hier werden nur Drücken, Loslassen und Verlassen in Canvas-Koordinaten
//! übersetzt.

use crate::app::AppIntent;
use crate::core::CanvasTransform;
use std::time::Duration;

/// Pointer-Zustand eines Frames, aus egui abgelesen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PointerSample {
    /// Primärtaste in diesem Frame gedrückt
    pressed: bool,
    /// Primärtaste in diesem Frame losgelassen
    released: bool,
    /// Pointer-Position (Bildschirm), falls bekannt
    pos: Option<egui::Pos2>,
}

/// Verwaltet den Pointer-Zustand des Canvas zwischen Frames.
#[derive(Debug, Default)]
pub struct CanvasInput {
    pressed: bool,
}

impl CanvasInput {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { pressed: false }
    }

    /// Sammelt Pointer-Events des Canvas und gibt AppIntents zurück.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        transform: &CanvasTransform,
    ) -> Vec<AppIntent> {
        let (sample, seconds) = ui.input(|i| {
            (
                PointerSample {
                    pressed: i.pointer.primary_pressed(),
                    released: i.pointer.primary_released(),
                    pos: i.pointer.interact_pos().or(i.pointer.hover_pos()),
                },
                i.time,
            )
        });
        let time = Duration::from_secs_f64(seconds.max(0.0));
        self.process(sample, time, transform)
    }

    /// Zustandslogik, getrennt von egui für Tests.
    fn process(
        &mut self,
        sample: PointerSample,
        time: Duration,
        transform: &CanvasTransform,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let screen = sample.pos.map(|p| glam::Vec2::new(p.x, p.y));
        let inside = screen.is_some_and(|p| transform.contains(p));

        if self.pressed {
            if sample.released {
                self.pressed = false;
                events.push(AppIntent::CanvasPointerReleased { time });
            } else if !inside {
                self.pressed = false;
                events.push(AppIntent::CanvasPointerCancelled { time });
            }
        }

        if sample.pressed && inside {
            if let Some(screen) = screen {
                self.pressed = true;
                events.push(AppIntent::CanvasPointerPressed {
                    pos: transform.client_to_canvas(screen),
                    time,
                });
            }
        }

        events
    }
}
