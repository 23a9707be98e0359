//! Stückweise kubische Bézier-Kurve in Bernstein-Form.

use super::CurveEvaluator;
use crate::core::math;
use glam::Vec2;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let weights = [
        inv * inv * inv,
        3.0 * inv * inv * t,
        3.0 * inv * t * t,
        t * t * t,
    ];
    math::weighted_sum([p0, p1, p2, p3], weights)
}

/// B'(t) = 3[(1-t)²·(P1-P0) + 2(1-t)t·(P2-P1) + t²·(P3-P2)]
fn cubic_bezier_derivative(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let deltas = [math::sub(p1, p0), math::sub(p2, p1), math::sub(p3, p2)];
    let weights = [3.0 * inv * inv, 6.0 * inv * t, 3.0 * t * t];
    math::weighted_sum(deltas, weights)
}

/// Stückweise kubische Bézier-Kurve.
///
/// Segmente teilen sich Endpunkte: Punkte `3i..=3i+3` bilden Segment `i`.
/// Überzählige Punkte am Ende (kein vollständiges Segment) werden ignoriert.
pub struct CubicBezier;

impl CubicBezier {
    fn window(points: &[Vec2], segment: usize) -> [Vec2; 4] {
        let base = segment * 3;
        [0, 1, 2, 3].map(|offset| points[base + offset])
    }

    /// Vollständig kollabiertes Segment: Endpunkte UND Handles identisch.
    fn is_collapsed([p0, p1, p2, p3]: [Vec2; 4]) -> bool {
        [p1, p2, p3].into_iter().all(|p| math::is_coincident(p0, p))
    }
}

impl CurveEvaluator for CubicBezier {
    fn min_points(&self) -> usize {
        4
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn segment_count(&self, point_count: usize) -> usize {
        point_count.saturating_sub(1) / 3
    }

    fn evaluate_segment(&self, points: &[Vec2], segment: usize, t: f32) -> Vec2 {
        let window = Self::window(points, segment);
        let [p0, p1, p2, p3] = window;
        if Self::is_collapsed(window) {
            return math::lerp(p0, p3, t);
        }
        cubic_bezier(p0, p1, p2, p3, t)
    }

    fn evaluate_segment_derivative(&self, points: &[Vec2], segment: usize, t: f32) -> Vec2 {
        let window = Self::window(points, segment);
        let [p0, p1, p2, p3] = window;
        if Self::is_collapsed(window) {
            return math::sub(p3, p0);
        }
        cubic_bezier_derivative(p0, p1, p2, p3, t)
    }
}
