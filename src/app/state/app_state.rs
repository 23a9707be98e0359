use super::{EditorToolState, PlaybackState, UiState, ViewState};
use crate::app::history::{EditHistory, EditRecord};
use crate::app::manipulation::{ManipulationController, PickSettings, ViewportMapping};
use crate::app::CommandLog;
use crate::core::{MathError, SplineModel};
use crate::shared::EditorOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Das bearbeitete Spline-Dokument
    pub model: SplineModel,
    /// Selektion und Gesten-Zustand
    pub manipulation: ManipulationController,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Parameter-Wiedergabe
    pub playback: PlaybackState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Record-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Farben, Größen, Toleranzen)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit geladenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            model: SplineModel::with_settings(options.tessellation_settings()),
            manipulation: ManipulationController::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            editor: EditorToolState::new(),
            playback: PlaybackState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.model.len()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Gibt zurück, ob das Dokument ungespeicherte Änderungen hat.
    pub fn is_modified(&self) -> bool {
        self.model.revision() != self.ui.saved_revision
    }

    /// Speichert eine ausgeführte Änderung in der History.
    pub fn record_edit(&mut self, record: EditRecord) {
        self.history.record(record);
    }

    /// Bildschirm→Modell-Abbildung für den aktuellen Kamera-Zustand.
    pub fn viewport_mapping(&self) -> Result<ViewportMapping, MathError> {
        ViewportMapping::new(&self.view.camera, self.view.viewport())
    }

    /// Pick-Radien aus den Optionen.
    pub fn pick_settings(&self) -> PickSettings {
        PickSettings::from_options(&self.options)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
