//! Use-Case: Neues, leeres Dokument.

use crate::app::AppState;

/// Leert Modell, Selektion, Geste und History.
pub fn new_document(state: &mut AppState) {
    state.model.reset();
    state.manipulation.reset();
    state.history.clear();
    state.playback.reset();
    state.ui.current_file_path = None;
    state.ui.saved_revision = state.model.revision();
    state.ui.status_message = None;
    log::info!("Neues Dokument");
}
