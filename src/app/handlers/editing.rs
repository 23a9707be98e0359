//! Handler für Editing-Operationen (Punkte, Kurventyp, Werkzeug).

use crate::app::state::EditorTool;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{CurveType, SplineError};

/// Setzt das aktive Editor-Werkzeug.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    state.editor.active_tool = tool;
    log::info!("Werkzeug: {}", tool.label());
}

/// Löscht den selektierten Punkt.
pub fn delete_selected(state: &mut AppState) -> Result<(), SplineError> {
    use_cases::editing::delete_selected(state)
}

/// Fügt einen Punkt hinter dem selektierten ein.
pub fn insert_after_selected(state: &mut AppState) -> Result<(), SplineError> {
    use_cases::editing::insert_after_selected(state)
}

/// Schaltet die Sperre des selektierten Punkts um.
pub fn toggle_lock_selected(state: &mut AppState) -> Result<(), SplineError> {
    use_cases::editing::toggle_lock_selected(state)
}

/// Wechselt den Kurventyp.
pub fn set_curve_type(state: &mut AppState, curve_type: CurveType) -> Result<(), SplineError> {
    use_cases::editing::set_curve_type(state, curve_type)
}

/// Leert das Dokument.
pub fn new_document(state: &mut AppState) {
    use_cases::editing::new_document(state);
}
