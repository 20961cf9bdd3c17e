//! Handler für Pointer-Eingaben am Gesten-Recognizer.
//!
//! Liefert erkannte Gesten zurück; der Controller setzt sie in
//! `ApplyTap`/`ApplyLongPress`-Commands um.

use crate::app::gesture::GestureEvent;
use crate::app::AppState;
use glam::Vec2;
use std::time::Duration;

/// Pointer-Down; der Long-Press wird nur über einer Markierung scharf geschaltet.
///
/// Fällige Deadlines müssen vorher über [`poll`] angewendet sein, sonst prüft
/// der Treffertest gegen einen veralteten Stand.
pub fn pointer_down(state: &mut AppState, pos: Vec2, time: Duration) -> Vec<GestureEvent> {
    let on_shape = state.editor.annotations.hit_test(pos).is_some();
    state.editor.gesture.pointer_down(pos, time, on_shape)
}

/// Pointer-Up (auch Cancel/Leave).
pub fn pointer_up(state: &mut AppState, time: Duration) -> Vec<GestureEvent> {
    state.editor.gesture.pointer_up(time)
}

/// Löst fällige Deadlines aus.
pub fn poll(state: &mut AppState, time: Duration) -> Vec<GestureEvent> {
    state.editor.gesture.poll(time)
}
