use super::super::state::EditorTool;
use crate::core::{ControlPointId, CurveType};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Datei-I/O ===
    /// Open-Dialog anfordern
    RequestOpenFileDialog,
    /// Save-Dialog anfordern
    RequestSaveFileDialog,
    /// Dokument laden
    LoadFile { path: String },
    /// Dokument speichern (`None` = aktueller Pfad)
    SaveFile { path: Option<String> },
    /// Dokument leeren
    NewDocument,
    /// Anwendung beenden
    RequestExit,

    // === Kamera & Viewport ===
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Bildschirm-Delta verschieben
    PanCamera { screen_delta: Vec2 },
    /// Zoom mit optionalem Bildschirm-Fokus
    ZoomCamera {
        factor: f32,
        focus_screen: Option<Vec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Kamera zurücksetzen
    ResetCamera,
    /// Auf Kontrollpunkte einpassen
    FitView,

    // === Manipulation ===
    /// Hover aktualisieren bzw. Drag fortsetzen
    PointerMove { screen_pos: Vec2 },
    /// Pick + Drag-Start; `add_on_miss` hängt bei Fehlgriff einen Punkt an
    PointerPress { screen_pos: Vec2, add_on_miss: bool },
    /// Drag beenden und ggf. in die History übernehmen
    PointerRelease,
    /// Laufende Geste abbrechen
    CancelGesture,

    // === Selektion & Editing ===
    /// Werkzeug wechseln
    SetEditorTool { tool: EditorTool },
    /// Punkt selektieren
    SelectControlPoint { id: ControlPointId },
    /// Selektion leeren
    ClearSelection,
    /// Selektierten Punkt löschen
    DeleteSelected,
    /// Punkt hinter dem selektierten einfügen
    InsertAfterSelected,
    /// Sperre des selektierten Punkts umschalten
    ToggleLockSelected,
    /// Kurventyp wechseln
    SetCurveType { curve_type: CurveType },

    // === History ===
    /// Undo
    Undo,
    /// Redo
    Redo,

    // === Wiedergabe ===
    /// Wiedergabe starten/anhalten
    TogglePlayback,
    /// Wiedergabe-Parameter vorrücken
    AdvancePlayback { dt: f32 },

    // === Optionen ===
    /// Neue Optionen übernehmen und speichern
    ApplyOptions { options: Box<EditorOptions> },
    /// Standard-Optionen übernehmen und speichern
    ResetOptions,
}
