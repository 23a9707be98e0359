//! Zeichenprimitive und gemeinsamer Render-Kontext.

use crate::core::math::{self, Transform2D};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Darstellungsvariante eines Punkt-Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// Normaler Kontrollpunkt
    Normal,
    /// Hover-Kandidat
    Hovered,
    /// Selektierter Punkt
    Selected,
    /// Gesperrter Punkt
    Locked,
    /// Wiedergabe-Marker auf der Kurve
    Playhead,
}

/// Ein Zeichenbefehl in Bildschirm-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    /// Offener Linienzug
    Polyline {
        /// Stützpunkte in Pixeln
        points: Vec<Vec2>,
        /// RGBA-Farbe
        color: [f32; 4],
        /// Linienbreite in Pixeln
        width: f32,
    },
    /// Kreisförmiger Punkt-Marker
    PointMarker {
        /// Mittelpunkt in Pixeln
        position: Vec2,
        /// RGBA-Farbe
        color: [f32; 4],
        /// Durchmesser in Pixeln
        size: f32,
        /// Darstellungsvariante
        style: MarkerStyle,
    },
}

/// Gemeinsamer Kontext für alle Sub-Renderer.
///
/// Bündelt die View-Parameter, die jeder Sub-Renderer pro Frame benötigt.
pub(crate) struct RenderContext<'a> {
    /// Modell → Bildschirm
    pub world_to_screen: Transform2D,
    /// Viewport-Größe in Pixeln
    pub viewport_size: Vec2,
    /// Editor-Optionen (Farben, Größen, etc.)
    pub options: &'a EditorOptions,
}

impl RenderContext<'_> {
    /// Modellpunkt in Bildschirm-Koordinaten.
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        self.world_to_screen.transform_point(world)
    }

    /// Modell-Richtungsvektor in Bildschirm-Pixeln (ohne Translation).
    pub fn to_screen_vector(&self, world: Vec2) -> Vec2 {
        self.world_to_screen.transform_vector(world)
    }

    /// Prüft, ob ein Kreis um `screen_pos` den Viewport berührt.
    pub fn is_visible(&self, screen_pos: Vec2, radius: f32) -> bool {
        let margin = Vec2::splat(radius);
        let min = math::sub(Vec2::ZERO, margin);
        let max = math::add(self.viewport_size, margin);
        screen_pos.cmpge(min).all() && screen_pos.cmple(max).all()
    }
}
