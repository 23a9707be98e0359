//! Viewport-Renderer: übersetzt eine Render-Szene in Zeichenprimitive.
//!
//! Der Renderer kennt weder Fenster noch Grafik-Kontext. Er liest die fertige
//! Szene (Tessellierung, Kontrollpunkte, Kamera) und übergibt eine geordnete
//! Liste von Primitiven an ein [`GraphicsDevice`] des Hosts.

mod curve_renderer;
mod point_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use curve_renderer::CurveRenderer;
pub use point_renderer::PointRenderer;
pub use types::{DrawPrimitive, MarkerStyle};
use types::RenderContext;

use glam::Vec2;

/// Host-Schnittstelle für die eigentliche Ausgabe.
pub trait GraphicsDevice {
    /// Übergibt die Primitive eines Frames in Zeichenreihenfolge.
    fn submit(&mut self, primitives: &[DrawPrimitive]);
}

/// Gerät, das alle übergebenen Frames aufzeichnet (Tests, Headless-Betrieb).
#[derive(Debug, Default)]
pub struct RecordingDevice {
    /// Aufgezeichnete Frames
    pub frames: Vec<Vec<DrawPrimitive>>,
}

impl GraphicsDevice for RecordingDevice {
    fn submit(&mut self, primitives: &[DrawPrimitive]) {
        self.frames.push(primitives.to_vec());
    }
}

/// Haupt-Renderer für Spline-Szenen.
///
/// Reihenfolge: Kontrollpolygon, Kurve, Marker, selektierter Marker,
/// zuoberst der Wiedergabe-Marker.
#[derive(Debug, Default)]
pub struct Renderer {
    curve_renderer: CurveRenderer,
    point_renderer: PointRenderer,
    primitives: Vec<DrawPrimitive>,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut die Primitive der kompletten Szene.
    ///
    /// Ein leerer Viewport liefert keine Primitive.
    pub fn render_scene(&mut self, scene: &RenderScene) -> &[DrawPrimitive] {
        self.primitives.clear();

        let viewport_size = Vec2::from(scene.viewport_size);
        if scene.camera.pixels_per_unit(viewport_size) <= 0.0 {
            log::debug!("Leerer Viewport, nichts zu zeichnen");
            return &self.primitives;
        }

        let ctx = RenderContext {
            world_to_screen: scene.camera.world_to_screen(viewport_size),
            viewport_size,
            options: &scene.options,
        };

        self.curve_renderer.render_control_polygon(
            &ctx,
            &scene.control_points,
            scene.curve_type.is_closed(),
            &mut self.primitives,
        );
        self.curve_renderer
            .render_curve(&ctx, &scene.tessellation, &mut self.primitives);
        self.point_renderer.render(
            &ctx,
            &scene.control_points,
            scene.selected,
            scene.hovered,
            &mut self.primitives,
        );
        if let Some(playhead) = &scene.playhead {
            self.curve_renderer
                .render_playhead(&ctx, playhead, &mut self.primitives);
        }

        log::trace!(
            "Szene: {} Primitive, {} Kurvenpunkte",
            self.primitives.len(),
            scene.tessellation.len()
        );
        &self.primitives
    }

    /// Rendert die Szene und übergibt sie an das Gerät.
    pub fn render_to(&mut self, scene: &RenderScene, device: &mut impl GraphicsDevice) {
        let primitives = self.render_scene(scene);
        device.submit(primitives);
    }
}
