//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use crate::document;
use anyhow::Context;

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Öffnet den Save-Datei-Dialog über UI-State.
pub fn request_save_file(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
}

/// Lädt das gewählte Dokument in den AppState.
///
/// Bei einem Fehler bleibt das bisherige Dokument unverändert.
pub fn load_selected_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Datei nicht lesbar: {}", path))?;
    let model = document::parse_spline_document(&content, state.options.tessellation_settings())
        .with_context(|| format!("Dokument fehlerhaft: {}", path))?;

    log::info!(
        "Dokument geladen: {} ({} Punkte, {})",
        path,
        model.len(),
        model.curve_type()
    );

    state.model = model;
    state.manipulation.reset();
    state.history.clear();
    state.playback.reset();
    state.ui.saved_revision = state.model.revision();
    state.ui.current_file_path = Some(path);
    state.ui.status_message = None;

    super::camera::fit_view(state);
    Ok(())
}

/// Speichert unter dem aktuellen Pfad oder öffnet den Save-Dialog.
pub fn save_current_file(state: &mut AppState) -> anyhow::Result<()> {
    if let Some(path) = state.ui.current_file_path.clone() {
        write_document_to_file(state, &path)
    } else {
        // Kein Pfad bekannt → Save As Dialog öffnen
        request_save_file(state);
        Ok(())
    }
}

/// Speichert das Dokument unter dem angegebenen Pfad.
pub fn save_file_as(state: &mut AppState, path: String) -> anyhow::Result<()> {
    write_document_to_file(state, &path)?;
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Speichert mit optionalem neuen Pfad (`None` = aktueller Pfad).
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    match path {
        Some(path) => save_file_as(state, path),
        None => save_current_file(state),
    }
}

fn write_document_to_file(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let content = document::write_spline_document(&state.model)?;
    std::fs::write(path, content).with_context(|| format!("Datei nicht schreibbar: {}", path))?;
    state.ui.saved_revision = state.model.revision();
    log::info!("Dokument gespeichert: {}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CurveType;
    use glam::Vec2;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("spline_editor_io_{}_{}.json", name, std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn save_without_path_opens_dialog() {
        let mut state = AppState::new();

        save_current_file(&mut state).expect("kein Fehler");

        assert!(state.ui.show_save_file_dialog);
    }

    #[test]
    fn save_then_load_restores_document() {
        let path = temp_path("roundtrip");
        let mut state = AppState::new();
        for x in 0..4 {
            state.model.push_control_point(Vec2::new(x as f32, (x * x) as f32));
        }
        state.model.set_curve_type(CurveType::BSpline).expect("Typ");

        save_file_as(&mut state, path.clone()).expect("save");
        assert!(!state.is_modified());

        let mut loaded = AppState::new();
        load_selected_file(&mut loaded, path.clone()).expect("load");

        assert_eq!(loaded.model.positions(), state.model.positions());
        assert_eq!(loaded.model.curve_type(), CurveType::BSpline);
        assert_eq!(loaded.ui.current_file_path.as_deref(), Some(path.as_str()));
        assert!(!loaded.is_modified());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn failed_load_keeps_current_document() {
        let path = temp_path("broken");
        std::fs::write(&path, r#"{"version":1,"curve_type":"nurbs","points":[]}"#)
            .expect("write");
        let mut state = AppState::new();
        state.model.push_control_point(Vec2::ONE);

        assert!(load_selected_file(&mut state, path.clone()).is_err());
        assert_eq!(state.model.len(), 1);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_reports_error() {
        let mut state = AppState::new();
        let result = load_selected_file(&mut state, temp_path("does_not_exist"));
        assert!(result.is_err());
    }
}
