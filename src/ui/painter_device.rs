//! egui-Painter als Zeichenziel für den Viewport-Renderer.

use crate::render::{DrawPrimitive, GraphicsDevice, MarkerStyle};
use glam::Vec2;

/// Zeichnet Screen-Space-Primitive in einen egui-Painter.
///
/// `origin` ist die linke obere Ecke des Viewports im Fenster.
pub struct EguiPainterDevice<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> EguiPainterDevice<'a> {
    /// Erstellt ein Device für den gegebenen Viewport-Bereich.
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self {
            painter,
            origin: rect.min,
        }
    }

    fn to_pos(&self, p: Vec2) -> egui::Pos2 {
        self.origin + egui::vec2(p.x, p.y)
    }
}

fn to_color32(color: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

impl GraphicsDevice for EguiPainterDevice<'_> {
    fn submit(&mut self, primitives: &[DrawPrimitive]) {
        for primitive in primitives {
            match primitive {
                DrawPrimitive::Polyline {
                    points,
                    color,
                    width,
                } => {
                    let points = points.iter().map(|&p| self.to_pos(p)).collect();
                    self.painter.add(egui::Shape::line(
                        points,
                        egui::Stroke::new(*width, to_color32(*color)),
                    ));
                }
                DrawPrimitive::PointMarker {
                    position,
                    color,
                    size,
                    style,
                } => {
                    let center = self.to_pos(*position);
                    let radius = size * 0.5;
                    self.painter
                        .circle_filled(center, radius, to_color32(*color));
                    match style {
                        MarkerStyle::Selected | MarkerStyle::Hovered => {
                            self.painter.circle_stroke(
                                center,
                                radius + 1.5,
                                egui::Stroke::new(1.0, egui::Color32::WHITE),
                            );
                        }
                        MarkerStyle::Playhead => {
                            self.painter.circle_stroke(
                                center,
                                radius + 1.5,
                                egui::Stroke::new(1.5, egui::Color32::BLACK),
                            );
                        }
                        MarkerStyle::Normal | MarkerStyle::Locked => {}
                    }
                }
            }
        }
    }
}
