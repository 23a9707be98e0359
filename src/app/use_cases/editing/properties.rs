//! Use-Case: Kurventyp und Punkt-Sperre.

use crate::app::history::EditRecord;
use crate::app::use_cases::reject;
use crate::app::AppState;
use crate::core::{CurveType, SplineError};

/// Wechselt den Kurventyp. Bei zu wenigen Punkten bleibt der alte Typ aktiv.
pub fn set_curve_type(state: &mut AppState, curve_type: CurveType) -> Result<(), SplineError> {
    let previous = state.model.set_curve_type(curve_type)?;
    if previous != curve_type {
        state.record_edit(EditRecord::CurveTypeChanged {
            from: previous,
            to: curve_type,
        });
    }
    Ok(())
}

/// Schaltet die Sperre des selektierten Punkts um.
pub fn toggle_lock_selected(state: &mut AppState) -> Result<(), SplineError> {
    let Some(id) = state.manipulation.selection() else {
        reject(state, "Sperren: kein Punkt selektiert");
        return Ok(());
    };
    let locked = !state
        .model
        .get(id)
        .ok_or(SplineError::UnknownHandle(id))?
        .locked;

    state.model.set_control_point_locked(id, locked)?;
    state.record_edit(EditRecord::LockChanged { id, locked });
    log::info!("Punkt {} {}", id, if locked { "gesperrt" } else { "entsperrt" });
    Ok(())
}
