//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod editing;
pub mod file_io;
pub mod options;
pub mod playback;
pub mod selection;
pub mod viewport;

use crate::app::AppState;

/// Meldet eine abgelehnte Aktion in Log und Statuszeile.
pub(crate) fn reject(state: &mut AppState, message: impl Into<String>) {
    let message = message.into();
    log::warn!("{}", message);
    state.ui.status_message = Some(message);
}
