use crate::core::ProblemType;

/// Aktiver Bildschirm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Startmenü
    #[default]
    Menu,
    /// Auswahl des Problemtyps vor dem Anlegen
    TypeSelect,
    /// Markier-Editor für einen Problemtyp
    Create(ProblemType),
    /// Galerie der gespeicherten Probleme eines Typs
    Gallery(ProblemType),
}

/// Dringlichkeit einer Benutzer-Meldung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Blockierende Meldung an den Benutzer (muss bestätigt werden)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiMessage {
    pub level: MessageLevel,
    pub text: String,
}

impl UiMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            text: text.into(),
        }
    }
}

/// Tag-Editor-Dialog (arbeitet auf einer Kopie der Tags)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagEditorState {
    /// Problem, dessen Tags bearbeitet werden
    pub problem_id: u64,
    /// Arbeitskopie der Tags
    pub tags: Vec<String>,
    /// Eingabefeld für ein neues Tag
    pub input: String,
}

/// Lösch-Bestätigungsdialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteDialogState {
    /// Zu löschendes Problem
    pub problem_id: u64,
    /// Eingabefeld für das Bestätigungswort
    pub input: String,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Aktiver Bildschirm
    pub screen: Screen,
    /// Ausstehende Benutzer-Meldung
    pub message: Option<UiMessage>,
    /// Ob der Bild-Auswahl-Dialog geöffnet werden soll
    pub show_image_dialog: bool,
    /// Offener Tag-Editor
    pub tag_editor: Option<TagEditorState>,
    /// Offener Lösch-Dialog
    pub delete_dialog: Option<DeleteDialogState>,
}

impl UiState {
    /// Erstellt den Start-Zustand (Menü, keine Dialoge).
    pub fn new() -> Self {
        Self::default()
    }

    /// Schließt alle Galerie-Dialoge.
    pub fn close_dialogs(&mut self) {
        self.tag_editor = None;
        self.delete_dialog = None;
    }
}
