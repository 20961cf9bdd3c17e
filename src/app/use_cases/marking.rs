//! Use-Cases zum Markieren von Griffen per Tap und Long-Press.
//!
//! Die Wirkung einer Geste hängt vom Problemtyp ab:
//!
//! | Geste            | freie Stelle          | Bouldering        | Endurance                    |
//! |------------------|-----------------------|-------------------|------------------------------|
//! | Tap ×1           | Griff erkennen, rot   | rot               | nächste Nummer anhängen      |
//! | Tap ×2           | –                     | grün              | nächste Nummer anhängen      |
//! | Tap ×3+          | –                     | blau              | Markierung entfernen         |
//! | Long-Press       | –                     | Markierung löschen| höchste Nummer entfernen     |
//!
//! Im Endurance-Modus erhält ein neu erkannter Griff sofort die nächste
//! freie Nummer; verliert eine Markierung ihre letzte Nummer, wird sie gelöscht.

use crate::app::AppState;
use crate::core::{trace_hold, Annotation, HoldColor, ProblemType, TraceOutcome};
use glam::Vec2;

/// Wendet eine abgeschlossene Tap-Folge an. Gibt `true` zurück bei Änderung.
pub fn apply_tap(state: &mut AppState, pos: Vec2, count: u32) -> bool {
    let Some(kind) = state.editor_kind() else {
        return false;
    };
    let Some(image) = state.editor.wall_image.clone() else {
        return false;
    };

    let annotations = &mut state.editor.annotations;
    match annotations.hit_test(pos) {
        None => {
            if count != 1 {
                log::debug!("{}-fach-Tap ohne Markierung ignoriert", count);
                return false;
            }
            let outcome = trace_hold(image.base(), pos, &state.options.segment_params());
            if let TraceOutcome::Traced { region, .. } = &outcome {
                log::debug!("Griff erkannt: {} Pixel", region.pixel_count);
            }
            let mut annotation = Annotation::new(outcome.into_shape());
            if kind == ProblemType::Endurance {
                annotation = annotation.with_number(annotations.next_sequence_number());
            }
            annotations.push(annotation);
            log::info!(
                "Markierung #{} angelegt bei ({:.0}, {:.0})",
                annotations.len(),
                pos.x,
                pos.y
            );
            true
        }
        Some(index) => match kind {
            ProblemType::Bouldering => {
                let color = HoldColor::for_tap_count(count);
                let Some(annotation) = annotations.get_mut(index) else {
                    return false;
                };
                let changed = annotation.color != color;
                annotation.color = color;
                changed
            }
            ProblemType::Endurance if count >= 3 => {
                annotations.remove(index);
                log::info!("Markierung #{} entfernt", index + 1);
                true
            }
            ProblemType::Endurance => {
                let number = annotations.next_sequence_number();
                let Some(annotation) = annotations.get_mut(index) else {
                    return false;
                };
                annotation.sequence_numbers.insert(number);
                true
            }
        },
    }
}

/// Wendet einen Long-Press an. Gibt `true` zurück bei Änderung.
///
/// Trifft anhand der aktuellen Markierungen (nicht der beim Drücken).
pub fn apply_long_press(state: &mut AppState, pos: Vec2) -> bool {
    let Some(kind) = state.editor_kind() else {
        return false;
    };
    let annotations = &mut state.editor.annotations;
    let Some(index) = annotations.hit_test(pos) else {
        return false;
    };

    match kind {
        ProblemType::Bouldering => {
            annotations.remove(index);
            log::info!("Markierung #{} gelöscht (Long-Press)", index + 1);
        }
        ProblemType::Endurance => {
            let Some(annotation) = annotations.get_mut(index) else {
                return false;
            };
            annotation.sequence_numbers.pop_last();
            if annotation.sequence_numbers.is_empty() {
                annotations.remove(index);
                log::info!("Markierung #{} ohne Nummern gelöscht", index + 1);
            }
        }
    }
    true
}
