//! Uniformer kubischer B-Spline (approximierend, C²-stetig).

use super::CurveEvaluator;
use crate::core::math;
use glam::Vec2;

const SIXTH: f32 = 1.0 / 6.0;

/// Segment-Endpunkte (Werte bei t = 0 und t = 1).
fn segment_ends(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> (Vec2, Vec2) {
    let weights = [SIXTH, 4.0 * SIXTH, SIXTH];
    (
        math::weighted_sum([p0, p1, p2], weights),
        math::weighted_sum([p1, p2, p3], weights),
    )
}

/// B(t) = ((1-t)³·P0 + (3t³ - 6t² + 4)·P1 + (-3t³ + 3t² + 3t + 1)·P2 + t³·P3) / 6
fn bspline_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let (start, end) = segment_ends(p0, p1, p2, p3);
    if math::is_coincident(start, end) {
        return math::lerp(start, end, t);
    }
    let t2 = t * t;
    let t3 = t2 * t;
    let inv = 1.0 - t;
    let weights = [
        inv * inv * inv * SIXTH,
        (3.0 * t3 - 6.0 * t2 + 4.0) * SIXTH,
        (-3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0) * SIXTH,
        t3 * SIXTH,
    ];
    math::weighted_sum([p0, p1, p2, p3], weights)
}

/// B'(t) = (-3(1-t)²·P0 + (9t² - 12t)·P1 + (-9t² + 6t + 3)·P2 + 3t²·P3) / 6
fn bspline_derivative(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let (start, end) = segment_ends(p0, p1, p2, p3);
    if math::is_coincident(start, end) {
        return math::sub(end, start);
    }
    let t2 = t * t;
    let inv = 1.0 - t;
    let weights = [
        -3.0 * inv * inv * SIXTH,
        (9.0 * t2 - 12.0 * t) * SIXTH,
        (-9.0 * t2 + 6.0 * t + 3.0) * SIXTH,
        3.0 * t2 * SIXTH,
    ];
    math::weighted_sum([p0, p1, p2, p3], weights)
}

/// Offener uniformer B-Spline: `n - 3` Segmente, Enden liegen nicht auf P0/Pn.
pub struct UniformBSpline;

impl CurveEvaluator for UniformBSpline {
    fn min_points(&self) -> usize {
        4
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn segment_count(&self, point_count: usize) -> usize {
        point_count.saturating_sub(3)
    }

    fn evaluate_segment(&self, points: &[Vec2], segment: usize, t: f32) -> Vec2 {
        let [p0, p1, p2, p3] = [0, 1, 2, 3].map(|offset| points[segment + offset]);
        bspline_point(p0, p1, p2, p3, t)
    }

    fn evaluate_segment_derivative(&self, points: &[Vec2], segment: usize, t: f32) -> Vec2 {
        let [p0, p1, p2, p3] = [0, 1, 2, 3].map(|offset| points[segment + offset]);
        bspline_derivative(p0, p1, p2, p3, t)
    }
}

/// Periodischer uniformer B-Spline: `n` Segmente, Indizes modulo `n`.
pub struct ClosedUniformBSpline;

impl CurveEvaluator for ClosedUniformBSpline {
    fn min_points(&self) -> usize {
        4
    }

    fn is_closed(&self) -> bool {
        true
    }

    fn segment_count(&self, point_count: usize) -> usize {
        point_count
    }

    fn evaluate_segment(&self, points: &[Vec2], segment: usize, t: f32) -> Vec2 {
        let n = points.len();
        let [p0, p1, p2, p3] = [0, 1, 2, 3].map(|offset| points[(segment + offset) % n]);
        bspline_point(p0, p1, p2, p3, t)
    }

    fn evaluate_segment_derivative(&self, points: &[Vec2], segment: usize, t: f32) -> Vec2 {
        let n = points.len();
        let [p0, p1, p2, p3] = [0, 1, 2, 3].map(|offset| points[(segment + offset) % n]);
        bspline_derivative(p0, p1, p2, p3, t)
    }
}
