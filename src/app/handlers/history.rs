//! Handler für Undo/Redo-Operationen.

use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    let Some(record) = state.history.pop_undo() else {
        log::debug!("Undo: nichts zu tun");
        return;
    };
    if let Err(e) = record.revert(&mut state.model) {
        log::warn!("Undo unvollständig ({}): {}", record.describe(), e);
    }
    state.manipulation.sync_with_model(&state.model);
    log::info!("Undo: {}", record.describe());
    state.ui.status_message = Some(format!("Rückgängig: {}", record.describe()));
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    let Some(record) = state.history.pop_redo() else {
        log::debug!("Redo: nichts zu tun");
        return;
    };
    if let Err(e) = record.apply(&mut state.model) {
        log::warn!("Redo unvollständig ({}): {}", record.describe(), e);
    }
    state.manipulation.sync_with_model(&state.model);
    log::info!("Redo: {}", record.describe());
    state.ui.status_message = Some(format!("Wiederholt: {}", record.describe()));
}
