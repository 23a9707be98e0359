//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use crate::core::math;
use glam::Vec2;

/// Setzt die Kamera auf Default zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Default::default();
}

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        1.0 / state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Verschiebt die Kamera um ein Bildschirm-Delta.
///
/// Der Inhalt folgt dem Zeiger: die Kamera bewegt sich entgegengesetzt.
pub fn pan(state: &mut AppState, screen_delta: Vec2) {
    match state.viewport_mapping() {
        Ok(mapping) => {
            let world_delta = mapping.delta_to_world(screen_delta);
            state.view.camera.pan(math::scale(world_delta, -1.0));
        }
        Err(e) => log::warn!("Pan ignoriert: {}", e),
    }
}

/// Zoomt auf einen optionalen Bildschirm-Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_screen` angegeben ist, bleibt der Modell-Punkt unter
/// der Maus nach dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_screen: Option<Vec2>) {
    let (min, max) = (state.options.camera_zoom_min, state.options.camera_zoom_max);
    let focus = focus_screen.and_then(|screen| match state.viewport_mapping() {
        Ok(mapping) => Some(mapping.to_world(screen)),
        Err(e) => {
            log::warn!("Zoom-Fokus ignoriert: {}", e);
            None
        }
    });

    match focus {
        Some(focus) => state.view.camera.zoom_towards(factor, focus, min, max),
        None => state.view.camera.zoom_by_clamped(factor, min, max),
    }
}

/// Zentriert die Kamera auf die Bounding Box der Kontrollpunkte.
///
/// Keine Operation, wenn das Dokument leer ist.
pub fn fit_view(state: &mut AppState) {
    let Some((min, max)) = math::bounding_box(state.model.control_points().map(|p| p.position))
    else {
        log::debug!("Fit-View: keine Kontrollpunkte");
        return;
    };

    state.view.camera.fit_bounds(
        min,
        max,
        state.options.fit_view_margin,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );

    log::info!(
        "Fit-View: ({:.1}, {:.1}) bis ({:.1}, {:.1}), Zoom {:.2}",
        min.x,
        min.y,
        max.x,
        max.y,
        state.view.camera.zoom
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn state_with_viewport() -> AppState {
        let mut state = AppState::new();
        state.view.viewport_size = [800.0, 600.0];
        state
    }

    #[test]
    fn reset_camera_sets_default_position_and_zoom() {
        let mut state = AppState::new();
        state.view.camera.look_at(Vec2::new(100.0, 200.0));
        state.view.camera.zoom_by(5.0);

        reset_camera(&mut state);

        assert_eq!(state.view.camera.position, Vec2::ZERO);
        assert_eq!(state.view.camera.zoom, 1.0);
    }

    #[test]
    fn zoom_in_then_out_returns_to_original() {
        let mut state = AppState::new();
        let original = state.view.camera.zoom;

        zoom_in(&mut state);
        assert!(state.view.camera.zoom > original);
        zoom_out(&mut state);

        assert_relative_eq!(state.view.camera.zoom, original, epsilon = 1e-5);
    }

    #[test]
    fn zoom_respects_configured_bounds() {
        let mut state = AppState::new();
        state.options.camera_zoom_max = 2.0;

        for _ in 0..20 {
            zoom_in(&mut state);
        }

        assert_eq!(state.view.camera.zoom, 2.0);
    }

    #[test]
    fn pan_moves_content_with_pointer() {
        let mut state = state_with_viewport();

        // 3 px pro Einheit bei Zoom 1 und 600 px Höhe
        pan(&mut state, Vec2::new(30.0, 0.0));

        assert_relative_eq!(state.view.camera.position.x, -10.0, epsilon = 1e-4);
        assert_relative_eq!(state.view.camera.position.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn pan_on_empty_viewport_is_ignored() {
        let mut state = AppState::new();

        pan(&mut state, Vec2::new(30.0, 0.0));

        assert_eq!(state.view.camera.position, Vec2::ZERO);
    }

    #[test]
    fn zoom_towards_keeps_focus_stable() {
        let mut state = state_with_viewport();
        let focus_screen = Vec2::new(700.0, 100.0);
        let before = state.viewport_mapping().expect("Viewport").to_world(focus_screen);

        zoom_towards(&mut state, 2.0, Some(focus_screen));

        let after = state.viewport_mapping().expect("Viewport").to_world(focus_screen);
        assert_relative_eq!(before.x, after.x, epsilon = 1e-3);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-3);
        assert_relative_eq!(state.view.camera.zoom, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn fit_view_centers_on_control_points() {
        let mut state = state_with_viewport();
        state.model.push_control_point(Vec2::new(10.0, 10.0));
        state.model.push_control_point(Vec2::new(30.0, 50.0));

        fit_view(&mut state);

        assert_eq!(state.view.camera.position, Vec2::new(20.0, 30.0));
        assert!(state.view.camera.zoom > 1.0);
    }

    #[test]
    fn fit_view_on_empty_document_is_noop() {
        let mut state = state_with_viewport();
        state.view.camera.look_at(Vec2::new(5.0, 5.0));

        fit_view(&mut state);

        assert_eq!(state.view.camera.position, Vec2::new(5.0, 5.0));
    }
}
