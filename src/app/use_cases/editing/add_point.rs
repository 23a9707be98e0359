//! Use-Case: Neuen Kontrollpunkt hinzufügen.

use crate::app::history::EditRecord;
use crate::app::use_cases::reject;
use crate::app::AppState;
use crate::core::{math, ControlPointId, SplineError};
use glam::Vec2;

/// Abstand (in Pick-Radien) für einen Punkt hinter einem Einzelpunkt.
const LONE_POINT_OFFSET_RADII: f32 = 4.0;

/// Hängt einen Punkt an die Kurve an und selektiert ihn.
pub fn append_point(state: &mut AppState, world_pos: Vec2) -> Result<ControlPointId, SplineError> {
    let index = state.model.len();
    insert_and_select(state, world_pos, index)
}

/// Fügt einen Punkt direkt hinter dem selektierten ein.
///
/// Zwischen zwei Punkten landet er auf der Mitte der Sehne, am Kurvenende
/// wird die letzte Sehne fortgesetzt.
pub fn insert_after_selected(state: &mut AppState) -> Result<(), SplineError> {
    let Some(selected) = state.manipulation.selection() else {
        reject(state, "Einfügen: kein Punkt selektiert");
        return Ok(());
    };
    let index = state
        .model
        .index_of(selected)
        .ok_or(SplineError::UnknownHandle(selected))?;
    let positions = state.model.positions();
    let current = positions[index];

    let position = match (positions.get(index + 1), index.checked_sub(1)) {
        (Some(&next), _) => math::lerp(current, next, 0.5),
        (None, Some(prev)) => math::add(current, math::sub(current, positions[prev])),
        (None, None) => {
            let offset = state.view.camera.pick_radius_world(
                state.view.viewport_size[1],
                state.options.pick_radius_px * LONE_POINT_OFFSET_RADII,
            );
            math::add(current, Vec2::new(offset, 0.0))
        }
    };

    insert_and_select(state, position, index + 1)?;
    Ok(())
}

fn insert_and_select(
    state: &mut AppState,
    position: Vec2,
    index: usize,
) -> Result<ControlPointId, SplineError> {
    let id = state.model.insert_control_point(position, index);
    let point = *state
        .model
        .get(id)
        .ok_or(SplineError::UnknownHandle(id))?;
    let index = state.model.index_of(id).unwrap_or(index);
    state.record_edit(EditRecord::Inserted { point, index });
    state.manipulation.select(&state.model, id)?;

    log::info!(
        "Punkt {} an Index {} eingefügt ({:.2}, {:.2})",
        id,
        index,
        position.x,
        position.y
    );
    Ok(id)
}
