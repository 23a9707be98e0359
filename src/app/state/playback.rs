//! Wiedergabe: ein Marker läuft mit konstanter Parameter-Geschwindigkeit
//! über die Kurve und zeigt dort Position und Tangente.

/// Zustand der Parameter-Wiedergabe.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaybackState {
    /// Ob der Marker gerade läuft
    pub playing: bool,
    /// Aktueller globaler Kurvenparameter
    pub parameter: f32,
}

impl PlaybackState {
    /// Erstellt einen angehaltenen Zustand am Kurvenanfang.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rückt den Parameter um `dt · speed` vor und wickelt ihn zyklisch
    /// auf `[0, domain_length)`.
    ///
    /// Ohne Domäne (zu wenige Punkte) steht der Marker am Anfang.
    pub fn advance(&mut self, dt: f32, speed: f32, domain_length: f32) {
        if domain_length.is_nan() || domain_length <= 0.0 {
            self.parameter = 0.0;
            return;
        }
        let step = if dt.is_finite() && dt > 0.0 { dt * speed } else { 0.0 };
        let next = self.parameter + step;
        self.parameter = if next.is_finite() {
            next.rem_euclid(domain_length)
        } else {
            0.0
        };
    }

    /// Hält an und setzt auf den Kurvenanfang zurück.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn advance_moves_by_speed_times_dt() {
        let mut playback = PlaybackState::new();
        playback.advance(0.5, 2.0, 3.0);
        assert_relative_eq!(playback.parameter, 1.0);
    }

    #[test]
    fn advance_wraps_at_domain_end() {
        let mut playback = PlaybackState {
            playing: true,
            parameter: 2.75,
        };
        playback.advance(0.5, 1.0, 3.0);
        assert_relative_eq!(playback.parameter, 0.25, epsilon = 1e-6);
    }

    #[test]
    fn advance_without_domain_parks_at_start() {
        let mut playback = PlaybackState {
            playing: true,
            parameter: 1.5,
        };
        playback.advance(0.1, 1.0, 0.0);
        assert_eq!(playback.parameter, 0.0);
    }

    #[test]
    fn negative_or_nan_dt_keeps_parameter() {
        let mut playback = PlaybackState {
            playing: true,
            parameter: 1.0,
        };
        playback.advance(-1.0, 1.0, 4.0);
        playback.advance(f32::NAN, 1.0, 4.0);
        assert_relative_eq!(playback.parameter, 1.0);
    }
}
