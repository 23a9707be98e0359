//! Renderer für Kontrollpunkt-Marker.

use super::types::{DrawPrimitive, MarkerStyle, RenderContext};
use crate::core::{ControlPoint, ControlPointId};

/// Erzeugt die Marker eines Frames; der selektierte Punkt liegt zuoberst.
#[derive(Debug, Default)]
pub struct PointRenderer;

impl PointRenderer {
    /// Erstellt einen neuen Point-Renderer.
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn render(
        &self,
        ctx: &RenderContext<'_>,
        control_points: &[ControlPoint],
        selected: Option<ControlPointId>,
        hovered: Option<ControlPointId>,
        out: &mut Vec<DrawPrimitive>,
    ) {
        let mut selected_marker = None;
        let mut culled = 0usize;

        for point in control_points {
            let style = marker_style(point, selected, hovered);
            let marker = self.marker(ctx, point, style);
            let DrawPrimitive::PointMarker { position, size, .. } = marker else {
                continue;
            };
            if !ctx.is_visible(position, size * 0.5) {
                culled += 1;
                continue;
            }
            if style == MarkerStyle::Selected {
                selected_marker = Some(marker);
            } else {
                out.push(marker);
            }
        }

        if culled > 0 {
            log::trace!("{} Marker außerhalb des Viewports", culled);
        }
        out.extend(selected_marker);
    }

    fn marker(
        &self,
        ctx: &RenderContext<'_>,
        point: &ControlPoint,
        style: MarkerStyle,
    ) -> DrawPrimitive {
        let options = ctx.options;
        let base = options.point_marker_size_px;
        let emphasized = base * options.selection_size_factor;
        let (color, size) = match style {
            MarkerStyle::Normal => (options.point_color_default, base),
            MarkerStyle::Hovered => (options.point_color_hovered, emphasized),
            MarkerStyle::Selected => (options.point_color_selected, emphasized),
            MarkerStyle::Locked => (options.point_color_locked, base),
            MarkerStyle::Playhead => (options.playhead_color, base),
        };
        DrawPrimitive::PointMarker {
            position: ctx.to_screen(point.position),
            color,
            size,
            style,
        }
    }
}

/// Selektion schlägt Sperre, Sperre schlägt Hover.
fn marker_style(
    point: &ControlPoint,
    selected: Option<ControlPointId>,
    hovered: Option<ControlPointId>,
) -> MarkerStyle {
    if selected == Some(point.id) {
        MarkerStyle::Selected
    } else if point.locked {
        MarkerStyle::Locked
    } else if hovered == Some(point.id) {
        MarkerStyle::Hovered
    } else {
        MarkerStyle::Normal
    }
}
