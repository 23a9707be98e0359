//! Typisierte Fehler des Spline-Modells.
//!
//! Jede fehlschlagende Operation lässt den Modellzustand unverändert.

use super::control_point::ControlPointId;
use super::curve::CurveType;
use super::math::MathError;
use thiserror::Error;

/// Fehler bei Operationen auf Spline-Modell und Manipulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Kontrollpunkt existiert nicht (mehr)
    #[error("Unbekannter Kontrollpunkt {0}")]
    UnknownHandle(ControlPointId),
    /// Kurventyp-Tag nicht erkannt
    #[error("Nicht unterstützter Kurventyp: '{0}'")]
    UnsupportedCurveType(String),
    /// Neuer Kurventyp braucht mehr Punkte als vorhanden
    #[error("{curve_type} benötigt mindestens {required} Kontrollpunkte, vorhanden: {available}")]
    InsufficientControlPoints {
        /// Abgelehnter Kurventyp
        curve_type: CurveType,
        /// Mindestanzahl des Typs
        required: usize,
        /// Aktuelle Anzahl
        available: usize,
    },
    /// Strukturelle Änderung während eines laufenden Drags
    #[error("Während des Verschiebens nicht möglich")]
    GestureInProgress,
    /// Kamera-Transformation nicht invertierbar
    #[error(transparent)]
    Math(#[from] MathError),
}
