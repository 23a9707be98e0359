//! Use-Cases der Parameter-Wiedergabe.

use crate::app::AppState;

/// Startet bzw. pausiert den Wiedergabe-Marker.
///
/// Ohne auswertbare Kurve wird der Start abgelehnt.
pub fn toggle_playback(state: &mut AppState) {
    if state.playback.playing {
        state.playback.playing = false;
        log::info!("Wiedergabe angehalten bei u = {:.3}", state.playback.parameter);
        return;
    }
    if state.model.domain_length() <= 0.0 {
        super::reject(state, "Wiedergabe braucht eine auswertbare Kurve");
        return;
    }
    state.playback.playing = true;
    log::info!("Wiedergabe gestartet bei u = {:.3}", state.playback.parameter);
}

/// Rückt den Marker um `dt` Sekunden vor (nur während der Wiedergabe).
pub fn advance_playback(state: &mut AppState, dt: f32) {
    if !state.playback.playing {
        return;
    }
    let domain_length = state.model.domain_length();
    state
        .playback
        .advance(dt, state.options.playback_speed, domain_length);
    if domain_length <= 0.0 {
        // Kurve ist während der Wiedergabe verschwunden
        state.playback.playing = false;
        log::debug!("Wiedergabe beendet: keine Kurve mehr");
    }
}
