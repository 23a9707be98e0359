//! 2D-Kamera für Pan und Zoom.
//!
//! Die Kamera ist die einzige Quelle der Modell↔Bildschirm-Abbildung;
//! Manipulation und Renderer lesen dieselbe Transformation.

use super::math::{self, MathError, Transform2D};
use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Modell-Koordinate in der Viewport-Mitte
    pub position: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Sichtbare Modell-Halbhöhe bei Zoom 1.0.
    pub const BASE_WORLD_EXTENT: f32 = 100.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.05;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 200.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan) um ein Modell-Delta
    pub fn pan(&mut self, delta: Vec2) {
        self.position = math::add(self.position, delta);
    }

    /// Ändert den Zoom-Level innerhalb der Standardgrenzen
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom_by_clamped(factor, Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Ändert den Zoom-Level innerhalb konfigurierter Grenzen.
    ///
    /// Nicht-endliche oder nicht-positive Faktoren werden ignoriert.
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.zoom = (self.zoom * factor).clamp(min, max.max(min));
    }

    /// Zoomt so, dass `focus` an derselben Bildschirmposition bleibt.
    pub fn zoom_towards(&mut self, factor: f32, focus: Vec2, min: f32, max: f32) {
        let old_zoom = self.zoom;
        self.zoom_by_clamped(factor, min, max);
        let scale = old_zoom / self.zoom;
        self.position = math::add(focus, math::scale(math::sub(self.position, focus), scale));
    }

    /// Pixel pro Modell-Einheit (0.0 bei leerem Viewport).
    pub fn pixels_per_unit(&self, viewport_size: Vec2) -> f32 {
        if viewport_size.x <= 0.0 || viewport_size.y <= 0.0 {
            return 0.0;
        }
        viewport_size.y * self.zoom / (2.0 * Self::BASE_WORLD_EXTENT)
    }

    /// Modell → Bildschirm für die gegebene Viewport-Größe.
    ///
    /// Bei leerem Viewport ist die Transformation singulär.
    pub fn world_to_screen(&self, viewport_size: Vec2) -> Transform2D {
        let s = self.pixels_per_unit(viewport_size);
        Transform2D::from_translation(math::scale(viewport_size, 0.5))
            .compose(&Transform2D::from_scale(Vec2::splat(s)))
            .compose(&Transform2D::from_translation(math::scale(self.position, -1.0)))
    }

    /// Bildschirm → Modell (Inverse von [`world_to_screen`](Self::world_to_screen)).
    pub fn screen_to_world(&self, viewport_size: Vec2) -> Result<Transform2D, MathError> {
        self.world_to_screen(viewport_size).invert()
    }

    /// Konvertiert einen einzelnen Bildschirmpunkt in Modell-Koordinaten.
    pub fn screen_to_world_point(
        &self,
        screen_pos: Vec2,
        viewport_size: Vec2,
    ) -> Result<Vec2, MathError> {
        Ok(self
            .screen_to_world(viewport_size)?
            .transform_point(screen_pos))
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self, viewport_height: f32) -> f32 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * viewport_height.max(1.0))
    }

    /// Berechnet den Pick-Radius in Modell-Einheiten.
    pub fn pick_radius_world(&self, viewport_height: f32, pick_radius_px: f32) -> f32 {
        pick_radius_px * self.world_per_pixel(viewport_height)
    }

    /// Zentriert auf eine Bounding Box und wählt einen passenden Zoom.
    ///
    /// `margin` ist der Anteil Rand (0.1 = 10 %) um die Box.
    pub fn fit_bounds(&mut self, min: Vec2, max: Vec2, margin: f32, zoom_min: f32, zoom_max: f32) {
        self.position = math::lerp(min, max, 0.5);
        let half_extent = 0.5 * math::sub(max, min).max_element() * (1.0 + margin.max(0.0));
        if half_extent > math::GEOMETRY_EPSILON {
            self.zoom = (Self::BASE_WORLD_EXTENT / half_extent)
                .clamp(zoom_min, zoom_max.max(zoom_min));
        }
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
