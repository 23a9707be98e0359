//! Handler für Selektion und Zeiger-Gesten.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{ControlPointId, SplineError};
use glam::Vec2;

/// Hover aktualisieren bzw. Drag fortsetzen.
pub fn pointer_move(state: &mut AppState, screen_pos: Vec2) -> Result<(), SplineError> {
    use_cases::selection::pointer_move(state, screen_pos)
}

/// Pick, Selektion und Drag-Start.
pub fn pointer_press(
    state: &mut AppState,
    screen_pos: Vec2,
    add_on_miss: bool,
) -> Result<(), SplineError> {
    use_cases::selection::pointer_press(state, screen_pos, add_on_miss)
}

/// Drag beenden.
pub fn pointer_release(state: &mut AppState) {
    use_cases::selection::pointer_release(state);
}

/// Laufende Geste abbrechen.
pub fn cancel_gesture(state: &mut AppState) {
    use_cases::selection::cancel_gesture(state);
}

/// Selektiert einen Punkt explizit.
pub fn select(state: &mut AppState, id: ControlPointId) -> Result<(), SplineError> {
    use_cases::selection::select_point(state, id)
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
