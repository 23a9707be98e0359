//! Kontrollpunkte und ihre stabilen Handles.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stabiles Handle eines Kontrollpunkts.
///
/// Wird pro Dokument monoton vergeben und nie wiederverwendet; die
/// Zahlenordnung entspricht damit der Einfüge-Reihenfolge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ControlPointId(pub u64);

impl fmt::Display for ControlPointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ein vom Benutzer platzierter Kontrollpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Stabiles Handle
    pub id: ControlPointId,
    /// Position in Modell-Koordinaten
    pub position: Vec2,
    /// Gesperrte Punkte sind selektierbar, aber nicht verschiebbar
    pub locked: bool,
}

impl ControlPoint {
    /// Erstellt einen ungesperrten Kontrollpunkt.
    pub fn new(id: ControlPointId, position: Vec2) -> Self {
        Self {
            id,
            position,
            locked: false,
        }
    }
}
