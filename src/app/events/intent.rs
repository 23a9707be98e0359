use super::super::state::EditorTool;
use crate::core::{ControlPointId, CurveType};
use crate::shared::EditorOptions;
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Datei unter neuem Pfad speichern
    SaveAsRequested,
    /// Neues, leeres Dokument
    NewDocumentRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Datei im Open-Dialog gewählt
    FileSelected { path: String },
    /// Zielpfad im Save-Dialog gewählt
    SaveFilePathSelected { path: String },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Zeiger bewegt (Bildschirm-Koordinaten relativ zum Viewport)
    PointerMoved { screen_pos: Vec2 },
    /// Primärtaste gedrückt
    PointerPressed { screen_pos: Vec2 },
    /// Primärtaste losgelassen
    PointerReleased { screen_pos: Vec2 },
    /// Escape: laufende Geste abbrechen bzw. Selektion leeren
    CancelRequested,
    /// Fenster hat den Eingabefokus verloren
    FocusLost,
    /// Kamera um ein Bildschirm-Delta verschieben
    CameraPan { screen_delta: Vec2 },
    /// Kamera zoomen (optional auf einen Bildschirm-Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_screen: Option<Vec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Ansicht auf alle Kontrollpunkte einpassen
    FitViewRequested,
    /// Werkzeug wechseln
    SetEditorToolRequested { tool: EditorTool },
    /// Punkt explizit selektieren (z.B. aus einer Liste)
    SelectControlPointRequested { id: ControlPointId },
    /// Selektion leeren
    ClearSelectionRequested,
    /// Selektierten Punkt löschen
    DeleteSelectedRequested,
    /// Neuen Punkt hinter dem selektierten einfügen
    InsertAfterSelectedRequested,
    /// Sperre des selektierten Punkts umschalten
    ToggleLockRequested,
    /// Kurventyp wechseln
    CurveTypeChangeRequested { curve_type: CurveType },
    /// Letzte Änderung rückgängig machen
    UndoRequested,
    /// Rückgängig gemachte Änderung wiederholen
    RedoRequested,
    /// Wiedergabe-Marker starten bzw. anhalten
    TogglePlaybackRequested,
    /// Frame-Takt des Hosts während der Wiedergabe (Sekunden seit letztem Frame)
    PlaybackTick { dt: f32 },
    /// Optionen wurden geändert (Ansicht-Menü, Options-Datei)
    OptionsChanged { options: Box<EditorOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
