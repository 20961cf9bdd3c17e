use crate::core::ProblemType;
use std::path::PathBuf;
use std::time::Duration;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Navigation ===
    /// Typ-Auswahl anzeigen
    ShowTypeSelect,
    /// Editor für einen Problemtyp öffnen
    OpenEditor { kind: ProblemType },
    /// Galerie öffnen und laden
    OpenGallery { kind: ProblemType },
    /// Zurück ins Menü, Editor und Galerie zurücksetzen
    ReturnToMenu,

    // === Gesten ===
    /// Pointer-Down an den Gesten-Recognizer
    PointerDown { pos: glam::Vec2, time: Duration },
    /// Pointer-Up (auch Cancel/Leave) an den Gesten-Recognizer
    PointerUp { time: Duration },
    /// Fällige Gesten-Deadlines auslösen
    PollGestures { time: Duration },
    /// Erkannte Tap-Folge auf die Markierungen anwenden
    ApplyTap { pos: glam::Vec2, count: u32 },
    /// Erkannten Long-Press auf die Markierungen anwenden
    ApplyLongPress { pos: glam::Vec2 },

    // === Wandfoto ===
    /// Bild-Auswahldialog anfordern
    RequestImageDialog,
    /// Wandfoto laden
    LoadWallImage { path: PathBuf },
    /// Wandfoto entfernen
    ClearWallImage,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },

    // === Problem ===
    /// Problemname setzen
    SetProblemName { name: String },
    /// Problem validieren, exportieren und speichern
    SaveProblem,

    // === Galerie ===
    /// Galerie aus der Ablage neu laden
    ReloadGallery,
    /// Viewer auf Index öffnen
    OpenViewer { index: usize },
    /// Viewer schließen
    CloseViewer,
    /// Viewer zyklisch weiterschalten (+1 / -1)
    StepViewer { delta: i32 },
    /// Tag-Editor öffnen
    OpenTagEditor { problem_id: u64 },
    /// Tag zur Arbeitskopie hinzufügen
    AddTag { tag: String },
    /// Tag aus der Arbeitskopie entfernen
    RemoveTag { tag: String },
    /// Arbeitskopie der Tags persistieren
    SaveTags,
    /// Tag-Editor schließen
    CloseTagEditor,
    /// Lösch-Dialog öffnen
    OpenDeleteDialog { problem_id: u64 },
    /// Löschen nach Abgleich des Bestätigungsworts
    ConfirmDelete { typed: String },
    /// Lösch-Dialog schließen
    CloseDeleteDialog,

    // === Sonstiges ===
    /// Benutzer-Meldung schließen
    DismissMessage,
    /// Anwendung beenden
    RequestExit,
}
