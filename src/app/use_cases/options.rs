//! Use-Case-Funktionen für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen in den laufenden Zustand.
///
/// Tessellierungs-Einstellungen und History-Tiefe wirken sofort.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    let options = options.sanitized();
    state.model.set_tessellation_settings(options.tessellation_settings());
    state.history.set_max_depth(options.history_depth);
    state.view.camera.zoom = state
        .view
        .camera
        .zoom
        .clamp(options.camera_zoom_min, options.camera_zoom_max);
    state.options = options;
    log::info!("Optionen übernommen");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TessellationQuality;
    use glam::Vec2;

    #[test]
    fn apply_options_invalidates_tessellation() {
        let mut state = AppState::new();
        for x in 0..4 {
            state.model.push_control_point(Vec2::new(x as f32, 0.0));
        }
        state.model.tessellate(TessellationQuality::Tolerance(0.05));
        assert!(!state.model.is_tessellation_dirty());

        let options = EditorOptions {
            tessellation_max_depth: 3,
            ..EditorOptions::default()
        };
        apply_options(&mut state, options);

        assert!(state.model.is_tessellation_dirty());
        assert_eq!(state.model.tessellation_settings().max_depth, 3);
    }

    #[test]
    fn apply_options_sanitizes_values() {
        let mut state = AppState::new();
        let options = EditorOptions {
            pick_radius_px: -1.0,
            ..EditorOptions::default()
        };

        apply_options(&mut state, options);

        assert_eq!(state.options.pick_radius_px, EditorOptions::default().pick_radius_px);
    }
}
