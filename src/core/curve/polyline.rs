//! Polylinie: lineare Interpolation zwischen benachbarten Kontrollpunkten.

use super::CurveEvaluator;
use crate::core::math;
use glam::Vec2;

/// Stückweise lineare Verbindung der Kontrollpunkte.
pub struct Polyline;

impl CurveEvaluator for Polyline {
    fn min_points(&self) -> usize {
        2
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn segment_count(&self, point_count: usize) -> usize {
        point_count.saturating_sub(1)
    }

    fn evaluate_segment(&self, points: &[Vec2], segment: usize, t: f32) -> Vec2 {
        math::lerp(points[segment], points[segment + 1], t)
    }

    // Pro Segment konstant, an Knoten unstetig
    fn evaluate_segment_derivative(&self, points: &[Vec2], segment: usize, _t: f32) -> Vec2 {
        math::sub(points[segment + 1], points[segment])
    }
}
