//! Handler für Kamera, Viewport und Wiedergabe.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Startet bzw. pausiert die Wiedergabe.
pub fn toggle_playback(state: &mut AppState) {
    use_cases::playback::toggle_playback(state);
}

/// Rückt die Wiedergabe um `dt` Sekunden vor.
pub fn advance_playback(state: &mut AppState, dt: f32) {
    use_cases::playback::advance_playback(state, dt);
}

/// Setzt die Kamera auf den Standardzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt die Kamera um ein Bildschirm-Delta.
pub fn pan(state: &mut AppState, screen_delta: Vec2) {
    use_cases::camera::pan(state, screen_delta);
}

/// Zoomt mit optionalem Fokuspunkt in Bildschirm-Koordinaten.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_screen: Option<Vec2>) {
    use_cases::camera::zoom_towards(state, factor, focus_screen);
}

/// Passt die Ansicht an die Kontrollpunkte an.
pub fn fit_view(state: &mut AppState) {
    use_cases::camera::fit_view(state);
}
