//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Die Szene ist ein fertiger Snapshot: der Renderer sieht nie ein Modell
//! mitten in einer Mutation.

use super::options::EditorOptions;
use crate::core::{Camera2D, ControlPoint, ControlPointId, CurveType, Tessellation};
use glam::Vec2;
use std::sync::Arc;

/// Wiedergabe-Marker: Kurvenpunkt und Ableitung am aktuellen Parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playhead {
    /// Globaler Kurvenparameter
    pub parameter: f32,
    /// Kurvenpunkt in Modell-Koordinaten
    pub position: Vec2,
    /// Ableitung dC/du in Modell-Koordinaten
    pub tangent: Vec2,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Tessellierung der aktuellen Kurve (leer bei zu wenigen Punkten)
    pub tessellation: Arc<Tessellation>,
    /// Kontrollpunkte in Kurvenreihenfolge
    pub control_points: Arc<[ControlPoint]>,
    /// Aktiver Kurventyp
    pub curve_type: CurveType,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Aktuell selektierter Punkt
    pub selected: Option<ControlPointId>,
    /// Hover-Kandidat der Manipulation
    pub hovered: Option<ControlPointId>,
    /// Wiedergabe-Marker (nur während der Wiedergabe)
    pub playhead: Option<Playhead>,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob es überhaupt etwas zu zeichnen gibt.
    pub fn has_content(&self) -> bool {
        !self.control_points.is_empty()
    }
}
