//! Handler für das Anwenden erkannter Gesten auf die Markierungen.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Wendet eine Tap-Folge an.
pub fn apply_tap(state: &mut AppState, pos: Vec2, count: u32) {
    if use_cases::marking::apply_tap(state, pos, count) {
        state.view.mark_canvas_dirty();
    }
}

/// Wendet einen Long-Press an.
pub fn apply_long_press(state: &mut AppState, pos: Vec2) {
    if use_cases::marking::apply_long_press(state, pos) {
        state.view.mark_canvas_dirty();
    }
}
