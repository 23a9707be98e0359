//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::ControlPoint;
use crate::shared::{Playhead, RenderScene};
use std::sync::Arc;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Holt die Tessellierung aus dem Modell-Cache; neu gerechnet wird nur
/// nach einer Mutation oder bei geänderter Toleranz.
pub fn build(state: &mut AppState) -> RenderScene {
    let tessellation = state.model.tessellate(state.options.tessellation_quality());
    let control_points: Arc<[ControlPoint]> = state.model.control_points().copied().collect();

    RenderScene {
        tessellation,
        control_points,
        curve_type: state.model.curve_type(),
        camera: state.view.camera.clone(),
        viewport_size: state.view.viewport_size,
        selected: state.manipulation.selection(),
        hovered: state.manipulation.hovered(),
        playhead: playhead(state),
        options: state.options.clone(),
    }
}

fn playhead(state: &AppState) -> Option<Playhead> {
    if !state.playback.playing {
        return None;
    }
    let parameter = state.playback.parameter;
    Some(Playhead {
        parameter,
        position: state.model.evaluate(parameter)?,
        tangent: state.model.evaluate_derivative(parameter)?,
    })
}
