//! Use-Case: Zeiger-Gesten auf Kontrollpunkten.

use crate::app::history::EditRecord;
use crate::app::manipulation::{PressOutcome, ViewportMapping};
use crate::app::use_cases::editing;
use crate::app::AppState;
use crate::core::SplineError;
use glam::Vec2;

fn current_mapping(state: &AppState) -> Option<ViewportMapping> {
    match state.viewport_mapping() {
        Ok(mapping) => Some(mapping),
        Err(e) => {
            log::warn!("Zeiger-Event ignoriert: {}", e);
            None
        }
    }
}

/// Zeigerbewegung: Hover aktualisieren oder laufenden Drag fortsetzen.
pub fn pointer_move(state: &mut AppState, screen_pos: Vec2) -> Result<(), SplineError> {
    let Some(mapping) = current_mapping(state) else {
        return Ok(());
    };
    let settings = state.pick_settings();
    state
        .manipulation
        .pointer_moved(&mut state.model, &mapping, &settings, screen_pos)
}

/// Zeiger gedrückt: Pick, Selektion und Drag-Start.
///
/// Mit `add_on_miss` wird bei einem Fehlgriff ein neuer Punkt an der
/// Zeigerposition angehängt und selektiert.
pub fn pointer_press(
    state: &mut AppState,
    screen_pos: Vec2,
    add_on_miss: bool,
) -> Result<(), SplineError> {
    let Some(mapping) = current_mapping(state) else {
        return Ok(());
    };
    let settings = state.pick_settings();
    let outcome = state
        .manipulation
        .pointer_pressed(&state.model, &mapping, &settings, screen_pos);

    match outcome {
        PressOutcome::Missed if add_on_miss => {
            editing::append_point(state, mapping.to_world(screen_pos))?;
        }
        PressOutcome::SelectedLocked(id) => {
            state.ui.status_message = Some(format!("Punkt {} ist gesperrt", id));
        }
        PressOutcome::DragStarted(_) | PressOutcome::Missed | PressOutcome::Ignored => {}
    }
    Ok(())
}

/// Zeiger losgelassen: beendet den Drag und übernimmt ihn in die History.
pub fn pointer_release(state: &mut AppState) {
    let Some(moved) = state.manipulation.pointer_released(&state.model) else {
        return;
    };
    log::info!(
        "Punkt {} verschoben: ({:.2}, {:.2}) → ({:.2}, {:.2})",
        moved.id,
        moved.from.x,
        moved.from.y,
        moved.to.x,
        moved.to.y
    );
    state.record_edit(EditRecord::Moved {
        id: moved.id,
        from: moved.from,
        to: moved.to,
    });
}

/// Bricht die laufende Geste ab; ohne Drag ein No-op.
pub fn cancel_gesture(state: &mut AppState) {
    if state.manipulation.cancel(&mut state.model) {
        log::info!("Drag abgebrochen");
    }
}
