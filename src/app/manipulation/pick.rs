//! Nearest-Point-Pick mit deterministischem Tie-Break.

use crate::core::math;
use crate::core::{ControlPointId, SplineModel};
use glam::Vec2;

/// Pick-Radius-Policy in Screen-Pixeln.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickSettings {
    /// Basis-Radius
    pub radius_px: f32,
    /// Faktor für den bereits selektierten Punkt
    pub selected_factor: f32,
}

impl PickSettings {
    /// Liest die Werte aus den Editor-Optionen.
    pub fn from_options(options: &crate::shared::EditorOptions) -> Self {
        Self {
            radius_px: options.pick_radius_px,
            selected_factor: options.selection_size_factor,
        }
    }
}

/// Findet den Kontrollpunkt, der `world` am nächsten liegt.
///
/// Nur Punkte innerhalb von `radius` kommen in Frage; für den optional
/// übergebenen selektierten Punkt gilt `radius * factor`. Bei gleicher
/// Distanz gewinnt das kleinere (früher vergebene) Handle.
pub fn pick_control_point(
    model: &SplineModel,
    world: Vec2,
    radius: f32,
    selected: Option<(ControlPointId, f32)>,
) -> Option<ControlPointId> {
    model
        .control_points()
        .filter_map(|point| {
            let distance = math::distance(point.position, world);
            let limit = match selected {
                Some((id, factor)) if id == point.id => radius * factor.max(1.0),
                _ => radius,
            };
            (distance <= limit).then_some((distance, point.id))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
        .map(|(_, id)| id)
}
