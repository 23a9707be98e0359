//! Renderer für Kurve, Kontrollpolygon und Wiedergabe-Marker.

use super::types::{DrawPrimitive, MarkerStyle, RenderContext};
use crate::core::{math, ControlPoint, Tessellation};
use crate::shared::Playhead;
use glam::Vec2;

/// Erzeugt die Linienzüge eines Frames.
#[derive(Debug, Default)]
pub struct CurveRenderer;

impl CurveRenderer {
    /// Erstellt einen neuen Curve-Renderer.
    pub fn new() -> Self {
        Self
    }

    /// Kontrollpolygon (bei geschlossenen Kurven mit Rückkante).
    pub(crate) fn render_control_polygon(
        &self,
        ctx: &RenderContext<'_>,
        control_points: &[ControlPoint],
        closed: bool,
        out: &mut Vec<DrawPrimitive>,
    ) {
        if !ctx.options.show_control_polygon || control_points.len() < 2 {
            return;
        }
        let mut points: Vec<_> = control_points
            .iter()
            .map(|p| ctx.to_screen(p.position))
            .collect();
        if closed {
            points.push(points[0]);
        }
        out.push(DrawPrimitive::Polyline {
            points,
            color: ctx.options.control_polygon_color,
            width: ctx.options.control_polygon_width_px,
        });
    }

    /// Tessellierte Kurve; eine leere Tessellierung zeichnet nichts.
    pub(crate) fn render_curve(
        &self,
        ctx: &RenderContext<'_>,
        tessellation: &Tessellation,
        out: &mut Vec<DrawPrimitive>,
    ) {
        if tessellation.len() < 2 {
            return;
        }
        out.push(DrawPrimitive::Polyline {
            points: tessellation
                .positions()
                .map(|p| ctx.to_screen(p))
                .collect(),
            color: ctx.options.curve_color,
            width: ctx.options.curve_width_px,
        });
    }

    /// Marker mit Tangente; die Tangente hat feste Bildschirmlänge.
    ///
    /// Verschwindet die Ableitung (kollabiertes Segment), entfällt die Linie.
    pub(crate) fn render_playhead(
        &self,
        ctx: &RenderContext<'_>,
        playhead: &Playhead,
        out: &mut Vec<DrawPrimitive>,
    ) {
        let options = ctx.options;
        let origin = ctx.to_screen(playhead.position);
        let direction = ctx.to_screen_vector(playhead.tangent).normalize_or_zero();
        if direction != Vec2::ZERO && options.tangent_length_px > 0.0 {
            let tip = math::add(origin, math::scale(direction, options.tangent_length_px));
            out.push(DrawPrimitive::Polyline {
                points: vec![origin, tip],
                color: options.tangent_color,
                width: options.curve_width_px,
            });
        }
        out.push(DrawPrimitive::PointMarker {
            position: origin,
            color: options.playhead_color,
            size: options.point_marker_size_px,
            style: MarkerStyle::Playhead,
        });
    }
}
