/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Open-Datei-Dialog geöffnet werden soll
    pub show_file_dialog: bool,
    /// Ob der Save-Datei-Dialog geöffnet werden soll
    pub show_save_file_dialog: bool,
    /// Pfad des aktuell geladenen Dokuments (für Save ohne Dialog)
    pub current_file_path: Option<String>,
    /// Modell-Revision beim letzten Laden/Speichern
    pub saved_revision: u64,
    /// Letzte Rückmeldung an den Benutzer (abgelehnte Aktion, Fehler)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}
