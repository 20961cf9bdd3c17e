//! Gesten-Erkennung für den Markier-Canvas.
//!
//! Wandelt Pointer-Down/Up in Tap-Folgen (mit Anzahl) und Long-Presses um.
//! Statt Timer-Callbacks hält der Recognizer Deadlines; der Host ruft
//! `poll()` in jedem Frame auf und plant den nächsten Repaint über
//! `next_deadline()`. Zeit ist eine monotone `Duration` seit Sitzungsbeginn.

use crate::shared::EditorOptions;
use glam::Vec2;
use std::time::Duration;

/// Schwellwerte der Gesten-Erkennung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Haltedauer bis zum Long-Press
    pub long_press: Duration,
    /// Wartezeit nach dem letzten Tap bis zur Übernahme
    pub click_commit: Duration,
    /// Drücke ab dieser Dauer sind kein Tap
    pub tap_max_duration: Duration,
    /// Zeitfenster für Folge-Taps
    pub tap_window: Duration,
    /// Distanzschwelle für Folge-Taps (Canvas-Pixel)
    pub tap_distance: f32,
}

impl GestureConfig {
    /// Übernimmt die Schwellwerte aus den Editor-Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            long_press: Duration::from_millis(options.long_press_ms),
            click_commit: Duration::from_millis(options.click_commit_ms),
            tap_max_duration: Duration::from_millis(options.tap_max_duration_ms),
            tap_window: Duration::from_millis(options.tap_window_ms),
            tap_distance: options.tap_distance_px,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// Erkannte Geste.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Abgeschlossene Tap-Folge mit Anzahl (1 = Einfach-Tap)
    Tap { pos: Vec2, count: u32 },
    /// Long-Press auf einer Markierung
    LongPress { pos: Vec2 },
}

/// Beobachtbarer Zustand des Recognizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// Kein Druck, nichts ausstehend
    Idle,
    /// Pointer ist gedrückt
    Pressing,
    /// Long-Press wurde ausgelöst, Loslassen wird verschluckt
    LongPressFired,
    /// Tap-Folge wartet auf weitere Taps oder die Übernahme
    AwaitingMoreTaps,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    pos: Vec2,
    started: Duration,
    /// Nur gesetzt, wenn der Druck auf einer Markierung begann
    long_press_at: Option<Duration>,
}

#[derive(Debug, Clone, Copy)]
struct LastTap {
    pos: Vec2,
    count: u32,
    time: Duration,
}

#[derive(Debug, Clone, Copy)]
struct PendingCommit {
    pos: Vec2,
    count: u32,
    due: Duration,
}

/// Zustandsautomat für Tap-Folgen und Long-Press.
#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
    press: Option<Press>,
    long_press_fired: bool,
    last_tap: Option<LastTap>,
    pending: Option<PendingCommit>,
}

impl GestureRecognizer {
    /// Erstellt einen Recognizer mit den gegebenen Schwellwerten.
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Ersetzt die Schwellwerte (z.B. nach Options-Änderung).
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Aktueller Zustand.
    pub fn phase(&self) -> GesturePhase {
        match (&self.press, self.long_press_fired, &self.pending) {
            (Some(_), true, _) => GesturePhase::LongPressFired,
            (Some(_), false, _) => GesturePhase::Pressing,
            (None, _, Some(_)) => GesturePhase::AwaitingMoreTaps,
            (None, _, None) => GesturePhase::Idle,
        }
    }

    /// Pointer gedrückt. `on_shape` aktiviert die Long-Press-Deadline.
    ///
    /// Fällige Deadlines werden vorher ausgelöst.
    pub fn pointer_down(&mut self, pos: Vec2, now: Duration, on_shape: bool) -> Vec<GestureEvent> {
        let events = self.poll(now);
        self.long_press_fired = false;
        self.press = Some(Press {
            pos,
            started: now,
            long_press_at: on_shape.then(|| now + self.config.long_press),
        });
        events
    }

    /// Pointer losgelassen (auch für Abbruch und Verlassen des Canvas).
    pub fn pointer_up(&mut self, now: Duration) -> Vec<GestureEvent> {
        let mut events = self.poll(now);
        let Some(press) = self.press.take() else {
            return events;
        };

        if std::mem::take(&mut self.long_press_fired) {
            return events;
        }

        if now.saturating_sub(press.started) >= self.config.tap_max_duration {
            log::debug!("Druck zu lang für Tap, verworfen");
            return events;
        }

        let continues = self.last_tap.filter(|last| {
            now.saturating_sub(last.time) <= self.config.tap_window
                && last.pos.distance(press.pos) <= self.config.tap_distance
        });

        let count = match continues {
            Some(last) => last.count + 1,
            None => {
                // Ältere, noch ausstehende Folge zuerst übernehmen
                if let Some(older) = self.pending.take() {
                    events.push(GestureEvent::Tap {
                        pos: older.pos,
                        count: older.count,
                    });
                }
                1
            }
        };

        self.last_tap = Some(LastTap {
            pos: press.pos,
            count,
            time: now,
        });
        self.pending = Some(PendingCommit {
            pos: press.pos,
            count,
            due: now + self.config.click_commit,
        });
        events
    }

    /// Löst alle bis `now` fälligen Deadlines in zeitlicher Reihenfolge aus.
    pub fn poll(&mut self, now: Duration) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        loop {
            let long_press_due = self
                .press
                .and_then(|p| p.long_press_at)
                .filter(|due| *due <= now);
            let commit_due = self.pending.map(|c| c.due).filter(|due| *due <= now);

            match (long_press_due, commit_due) {
                (Some(lp), Some(commit)) if commit < lp => self.fire_commit(&mut events),
                (Some(_), _) => self.fire_long_press(&mut events),
                (None, Some(_)) => self.fire_commit(&mut events),
                (None, None) => break,
            }
        }
        events
    }

    /// Bricht alles ab (Bildwechsel, Zurücksetzen, Verlassen des Editors).
    pub fn cancel(&mut self) {
        self.press = None;
        self.long_press_fired = false;
        self.last_tap = None;
        self.pending = None;
    }

    /// Früheste ausstehende Deadline.
    pub fn next_deadline(&self) -> Option<Duration> {
        let long_press = self.press.and_then(|p| p.long_press_at);
        let commit = self.pending.map(|c| c.due);
        match (long_press, commit) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn fire_long_press(&mut self, events: &mut Vec<GestureEvent>) {
        let Some(press) = self.press.as_mut() else {
            return;
        };
        press.long_press_at = None;
        self.long_press_fired = true;
        // Long-Press unterdrückt eine noch wartende Tap-Folge
        self.pending = None;
        events.push(GestureEvent::LongPress { pos: press.pos });
    }

    fn fire_commit(&mut self, events: &mut Vec<GestureEvent>) {
        let Some(commit) = self.pending.take() else {
            return;
        };
        // Eine übernommene Folge endet; der nächste Tap beginnt neu
        self.last_tap = None;
        events.push(GestureEvent::Tap {
            pos: commit.pos,
            count: commit.count,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn recognizer() -> GestureRecognizer {
        GestureRecognizer::new(GestureConfig::default())
    }

    fn tap(r: &mut GestureRecognizer, pos: Vec2, at: u64) -> Vec<GestureEvent> {
        let mut events = r.pointer_down(pos, ms(at), false);
        events.extend(r.pointer_up(ms(at + 80)));
        events
    }

    #[test]
    fn single_tap_commits_after_delay() {
        let mut r = recognizer();
        let pos = Vec2::new(10.0, 10.0);
        assert!(tap(&mut r, pos, 0).is_empty());
        assert_eq!(r.phase(), GesturePhase::AwaitingMoreTaps);
        assert_eq!(r.next_deadline(), Some(ms(480)));

        assert!(r.poll(ms(479)).is_empty());
        assert_eq!(r.poll(ms(480)), vec![GestureEvent::Tap { pos, count: 1 }]);
        assert_eq!(r.phase(), GesturePhase::Idle);
        assert!(r.poll(ms(2000)).is_empty());
    }

    #[test]
    fn double_tap_within_window_counts_two() {
        let mut r = recognizer();
        let first = Vec2::new(100.0, 100.0);
        tap(&mut r, first, 0);
        tap(&mut r, Vec2::new(110.0, 105.0), 200);

        let events = r.poll(ms(2000));
        assert_eq!(
            events,
            vec![GestureEvent::Tap {
                pos: Vec2::new(110.0, 105.0),
                count: 2
            }]
        );
    }

    #[test]
    fn triple_tap_emits_single_event_with_count_three() {
        let mut r = recognizer();
        let pos = Vec2::new(50.0, 50.0);
        tap(&mut r, pos, 0);
        tap(&mut r, pos, 150);
        tap(&mut r, pos, 300);

        assert_eq!(r.poll(ms(5000)), vec![GestureEvent::Tap { pos, count: 3 }]);
    }

    #[test]
    fn distant_tap_starts_new_sequence_and_flushes_older() {
        let mut r = recognizer();
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(200.0, 0.0);
        tap(&mut r, a, 0);
        let events = tap(&mut r, b, 150);
        assert_eq!(events, vec![GestureEvent::Tap { pos: a, count: 1 }]);
        assert_eq!(r.poll(ms(5000)), vec![GestureEvent::Tap { pos: b, count: 1 }]);
    }

    #[test]
    fn late_tap_outside_window_starts_new_sequence() {
        let config = GestureConfig {
            click_commit: ms(1000),
            ..GestureConfig::default()
        };
        let mut r = GestureRecognizer::new(config);
        let pos = Vec2::new(5.0, 5.0);
        tap(&mut r, pos, 0);
        // Up des zweiten Taps 600 ms nach dem ersten Up (> 450 ms Fenster)
        let events = tap(&mut r, pos, 600);
        assert_eq!(events, vec![GestureEvent::Tap { pos, count: 1 }]);
        assert_eq!(r.poll(ms(5000)), vec![GestureEvent::Tap { pos, count: 1 }]);
    }

    #[test]
    fn slow_press_is_discarded() {
        let mut r = recognizer();
        r.pointer_down(Vec2::ZERO, ms(0), false);
        assert!(r.pointer_up(ms(350)).is_empty());
        assert_eq!(r.phase(), GesturePhase::Idle);
        assert!(r.poll(ms(5000)).is_empty());
    }

    #[test]
    fn press_in_dead_zone_is_neither_tap_nor_long_press() {
        let mut r = recognizer();
        r.pointer_down(Vec2::ZERO, ms(0), true);
        assert!(r.pointer_up(ms(420)).is_empty());
        assert!(r.poll(ms(5000)).is_empty());
    }

    #[test]
    fn long_press_fires_on_shape_and_swallows_release() {
        let mut r = recognizer();
        let pos = Vec2::new(30.0, 30.0);
        r.pointer_down(pos, ms(0), true);
        assert_eq!(r.next_deadline(), Some(ms(500)));
        assert!(r.poll(ms(499)).is_empty());
        assert_eq!(r.poll(ms(500)), vec![GestureEvent::LongPress { pos }]);
        assert_eq!(r.phase(), GesturePhase::LongPressFired);

        assert!(r.pointer_up(ms(900)).is_empty());
        assert_eq!(r.phase(), GesturePhase::Idle);
        assert!(r.poll(ms(5000)).is_empty());
    }

    #[test]
    fn long_press_due_at_release_still_fires_first() {
        let mut r = recognizer();
        let pos = Vec2::new(30.0, 30.0);
        r.pointer_down(pos, ms(0), true);
        // Kein Poll zwischendurch: Release kommt nach Ablauf der Deadline
        assert_eq!(r.pointer_up(ms(700)), vec![GestureEvent::LongPress { pos }]);
        assert!(r.poll(ms(5000)).is_empty());
    }

    #[test]
    fn no_long_press_off_shape() {
        let mut r = recognizer();
        r.pointer_down(Vec2::ZERO, ms(0), false);
        assert_eq!(r.next_deadline(), None);
        assert!(r.poll(ms(2000)).is_empty());
        assert_eq!(r.phase(), GesturePhase::Pressing);
    }

    #[test]
    fn long_press_drops_pending_taps() {
        let mut r = GestureRecognizer::new(GestureConfig {
            long_press: ms(200),
            ..GestureConfig::default()
        });
        let pos = Vec2::new(30.0, 30.0);
        tap(&mut r, pos, 0); // Commit fällig bei 480
        r.pointer_down(pos, ms(150), true); // Long-Press bei 350
        let events = r.poll(ms(650));
        assert_eq!(events, vec![GestureEvent::LongPress { pos }]);
        r.pointer_up(ms(700));
        assert!(r.poll(ms(5000)).is_empty());
    }

    #[test]
    fn commit_due_before_long_press_fires_first() {
        let mut r = recognizer();
        let a = Vec2::new(0.0, 0.0);
        tap(&mut r, a, 0); // Commit fällig bei 480
        r.pointer_down(Vec2::new(300.0, 0.0), ms(100), true); // Long-Press bei 600
        assert_eq!(
            r.poll(ms(700)),
            vec![
                GestureEvent::Tap { pos: a, count: 1 },
                GestureEvent::LongPress {
                    pos: Vec2::new(300.0, 0.0)
                }
            ]
        );
    }

    #[test]
    fn committed_sequence_is_not_continued() {
        let mut r = recognizer();
        let pos = Vec2::new(20.0, 20.0);
        tap(&mut r, pos, 0);
        assert_eq!(r.poll(ms(480)), vec![GestureEvent::Tap { pos, count: 1 }]);
        // Innerhalb von 450 ms nach dem letzten Up, aber nach der Übernahme
        r.pointer_down(pos, ms(485), false);
        assert!(r.pointer_up(ms(525)).is_empty());
        assert_eq!(r.poll(ms(5000)), vec![GestureEvent::Tap { pos, count: 1 }]);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut r = recognizer();
        assert!(r.pointer_up(ms(10)).is_empty());
        assert_eq!(r.phase(), GesturePhase::Idle);
    }

    #[test]
    fn cancel_drops_everything() {
        let mut r = recognizer();
        tap(&mut r, Vec2::ZERO, 0);
        r.pointer_down(Vec2::ZERO, ms(100), true);
        r.cancel();
        assert_eq!(r.phase(), GesturePhase::Idle);
        assert_eq!(r.next_deadline(), None);
        assert!(r.poll(ms(5000)).is_empty());
    }
}
