//! Use-Case-Funktionen für Selektion und Zeiger-Gesten.
//!
//! Aufgeteilt nach Ablauf:
//! - `pointer` — Hover, Press, Drag, Release, Abbruch
//! - hier: explizite Selektion aus Menüs/Listen

mod pointer;

pub use pointer::{cancel_gesture, pointer_move, pointer_press, pointer_release};

use crate::app::AppState;
use crate::core::{ControlPointId, SplineError};

/// Selektiert einen Kontrollpunkt explizit.
pub fn select_point(state: &mut AppState, id: ControlPointId) -> Result<(), SplineError> {
    state.manipulation.select(&state.model, id)?;
    log::debug!("Selektion: {}", id);
    Ok(())
}

/// Hebt die Selektion auf (während eines Drags wirkungslos).
pub fn clear_selection(state: &mut AppState) {
    state.manipulation.clear_selection();
}
