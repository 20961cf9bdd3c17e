use crate::core::ProblemType;
use std::path::PathBuf;
use std::time::Duration;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Zeitstempel (`time`) sind monoton seit Sitzungsbeginn.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // === Navigation ===
    /// "Create problem" im Menü gewählt
    CreateProblemRequested,
    /// Problemtyp für den Editor gewählt
    ProblemTypeSelected { kind: ProblemType },
    /// Galerie eines Problemtyps öffnen
    GalleryRequested { kind: ProblemType },
    /// Zurück ins Menü (verwirft Editor-Zustand)
    BackToMenuRequested,

    // === Canvas-Eingabe (Canvas-Koordinaten) ===
    /// Pointer auf dem Canvas gedrückt
    CanvasPointerPressed { pos: glam::Vec2, time: Duration },
    /// Pointer losgelassen
    CanvasPointerReleased { time: Duration },
    /// Pointer abgebrochen oder hat den Canvas verlassen
    CanvasPointerCancelled { time: Duration },
    /// Frame-Takt: fällige Gesten-Deadlines auslösen
    FrameTick { time: Duration },

    // === Wandfoto ===
    /// Bild-Auswahldialog öffnen
    ImageSelectionRequested,
    /// Bilddatei im Dialog gewählt
    ImageFileSelected { path: PathBuf },
    /// Wandfoto entfernen
    ImageResetRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },

    // === Problem speichern ===
    /// Problemname im Eingabefeld geändert
    ProblemNameChanged { name: String },
    /// Problem speichern
    SaveRequested,

    // === Galerie ===
    /// Galerie neu laden
    GalleryRefreshRequested,
    /// Problem im Viewer öffnen
    ViewerOpened { index: usize },
    /// Viewer schließen
    ViewerClosed,
    /// Vorheriges Problem (zyklisch)
    ViewerPrevious,
    /// Nächstes Problem (zyklisch)
    ViewerNext,
    /// Tag-Editor für ein Problem öffnen
    TagEditorOpened { problem_id: u64 },
    /// Tag zur Arbeitskopie hinzufügen
    TagAddRequested { tag: String },
    /// Tag aus der Arbeitskopie entfernen
    TagRemoveRequested { tag: String },
    /// Tags speichern
    TagEditConfirmed,
    /// Tag-Editor verwerfen
    TagEditCancelled,
    /// Lösch-Dialog für ein Problem öffnen
    DeleteDialogOpened { problem_id: u64 },
    /// Löschen mit eingegebenem Bestätigungswort
    DeleteConfirmed { typed: String },
    /// Lösch-Dialog abbrechen
    DeleteCancelled,

    // === Sonstiges ===
    /// Benutzer-Meldung bestätigt
    MessageDismissed,
    /// Anwendung beenden
    ExitRequested,
}
