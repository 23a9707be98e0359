//! Uniformer Catmull-Rom-Spline (offen und periodisch).

use super::CurveEvaluator;
use crate::core::math;
use glam::Vec2;

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 nach p2. Fällt das Segment auf einen Punkt
/// zusammen (p1 ≈ p2), wird linear interpoliert.
pub fn catmull_rom_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    if math::is_coincident(p1, p2) {
        return math::lerp(p1, p2, t);
    }
    let t2 = t * t;
    let t3 = t2 * t;
    let weights = [
        0.5 * (-t + 2.0 * t2 - t3),
        0.5 * (2.0 - 5.0 * t2 + 3.0 * t3),
        0.5 * (t + 4.0 * t2 - 3.0 * t3),
        0.5 * (-t2 + t3),
    ];
    math::weighted_sum([p0, p1, p2, p3], weights)
}

/// Ableitung von [`catmull_rom_point`] nach `t`.
///
/// Im kollabierten Fall passend zur linearen Interpolation `p2 - p1`.
pub fn catmull_rom_derivative(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    if math::is_coincident(p1, p2) {
        return math::sub(p2, p1);
    }
    let t2 = t * t;
    let weights = [
        0.5 * (-1.0 + 4.0 * t - 3.0 * t2),
        0.5 * (-10.0 * t + 9.0 * t2),
        0.5 * (1.0 + 8.0 * t - 9.0 * t2),
        0.5 * (-2.0 * t + 3.0 * t2),
    ];
    math::weighted_sum([p0, p1, p2, p3], weights)
}

/// Offener Catmull-Rom-Spline durch alle Kontrollpunkte.
///
/// Für Rand-Segmente werden Phantom-Punkte gespiegelt, damit die Kurve
/// natürlich durch den ersten und letzten Punkt läuft.
pub struct CatmullRom;

impl CatmullRom {
    fn window(points: &[Vec2], segment: usize) -> [Vec2; 4] {
        let n = points.len();
        let p1 = points[segment];
        let p2 = points[segment + 1];
        let p0 = if segment == 0 {
            math::sub(math::scale(points[0], 2.0), points[1])
        } else {
            points[segment - 1]
        };
        let p3 = if segment + 2 < n {
            points[segment + 2]
        } else {
            math::sub(math::scale(points[n - 1], 2.0), points[n - 2])
        };
        [p0, p1, p2, p3]
    }
}

impl CurveEvaluator for CatmullRom {
    fn min_points(&self) -> usize {
        4
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn segment_count(&self, point_count: usize) -> usize {
        point_count.saturating_sub(1)
    }

    fn evaluate_segment(&self, points: &[Vec2], segment: usize, t: f32) -> Vec2 {
        let [p0, p1, p2, p3] = Self::window(points, segment);
        catmull_rom_point(p0, p1, p2, p3, t)
    }

    fn evaluate_segment_derivative(&self, points: &[Vec2], segment: usize, t: f32) -> Vec2 {
        let [p0, p1, p2, p3] = Self::window(points, segment);
        catmull_rom_derivative(p0, p1, p2, p3, t)
    }
}

/// Periodischer Catmull-Rom-Spline: das letzte Segment schließt zum ersten Punkt.
pub struct ClosedCatmullRom;

impl ClosedCatmullRom {
    fn window(points: &[Vec2], segment: usize) -> [Vec2; 4] {
        let n = points.len();
        let at = |offset: usize| points[(segment + n + offset - 1) % n];
        [at(0), at(1), at(2), at(3)]
    }
}

impl CurveEvaluator for ClosedCatmullRom {
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
        let [p0, p1, p2, p3] = Self::window(points, segment);
        catmull_rom_point(p0, p1, p2, p3, t)
    }

    fn evaluate_segment_derivative(&self, points: &[Vec2], segment: usize, t: f32) -> Vec2 {
        let [p0, p1, p2, p3] = Self::window(points, segment);
        catmull_rom_derivative(p0, p1, p2, p3, t)
    }
}
