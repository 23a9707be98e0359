/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Punkte selektieren und verschieben
    #[default]
    Select,
    /// Klick ins Leere hängt einen neuen Punkt an
    AddPoint,
}

impl EditorTool {
    /// Anzeigename für Toolbar und Statuszeile.
    pub fn label(self) -> &'static str {
        match self {
            EditorTool::Select => "Auswahl",
            EditorTool::AddPoint => "Punkt hinzufügen",
        }
    }
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Debug, Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Select-Tool aktiv).
    pub fn new() -> Self {
        Self::default()
    }
}
