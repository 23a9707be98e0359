//! Use-Case: Selektierten Kontrollpunkt löschen.

use crate::app::history::EditRecord;
use crate::app::use_cases::reject;
use crate::app::AppState;
use crate::core::SplineError;

/// Löscht den selektierten Punkt; die Selektion wird geleert.
pub fn delete_selected(state: &mut AppState) -> Result<(), SplineError> {
    let Some(selected) = state.manipulation.selection() else {
        reject(state, "Löschen: kein Punkt selektiert");
        return Ok(());
    };

    let removed = state.model.remove_control_point(selected)?;
    state.manipulation.sync_with_model(&state.model);
    log::info!("Punkt {} gelöscht (Index {})", removed.point.id, removed.index);

    state.record_edit(EditRecord::Removed {
        point: removed.point,
        index: removed.index,
    });
    Ok(())
}
