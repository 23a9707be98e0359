//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;

/// Aktualisiert die gespeicherte Viewport-Größe.
///
/// Negative oder nicht-endliche Werte werden auf 0 gesetzt; ein leerer
/// Viewport blockiert Picking, bis wieder eine gültige Größe ankommt.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
    let size = [sanitize(size[0]), sanitize(size[1])];
    if state.view.viewport_size != size {
        log::debug!("Viewport: {:.0}x{:.0}", size[0], size[1]);
    }
    state.view.viewport_size = size;
}
