//! Kurvenfamilien und ihre Auswertung.
//!
//! Jede Familie ist genau eine Implementierung von [`CurveEvaluator`];
//! [`CurveType`] ist das geschlossene Tag, über das das Modell dispatcht.
//! Eine neue Familie bedeutet eine neue Variante plus ein neues Submodul,
//! bestehende Implementierungen bleiben unberührt.
//!
//! Parameter-Domäne: `[0, segment_count]`, Segment `i` deckt `[i, i + 1]` ab.

mod bezier;
mod bspline;
mod catmull_rom;
mod polyline;

pub use bezier::CubicBezier;
pub use bspline::{ClosedUniformBSpline, UniformBSpline};
pub use catmull_rom::{
    catmull_rom_derivative, catmull_rom_point, CatmullRom, ClosedCatmullRom,
};
pub use polyline::Polyline;

use super::error::SplineError;
use glam::Vec2;
use std::fmt;
use std::str::FromStr;

/// Gemeinsame Fähigkeit aller Kurvenfamilien: Auswertung je Segment.
pub trait CurveEvaluator: Sync {
    /// Mindestanzahl Kontrollpunkte, ab der die Kurve nicht leer ist.
    fn min_points(&self) -> usize;

    /// Periodische Kurven wickeln den Parameter statt ihn zu klemmen.
    fn is_closed(&self) -> bool;

    /// Anzahl der Segmente für `point_count` Kontrollpunkte (nur gültig ab `min_points`).
    fn segment_count(&self, point_count: usize) -> usize;

    /// Wertet Segment `segment` an lokalem `t ∈ [0, 1]` aus.
    ///
    /// Aufrufer garantieren `points.len() >= min_points()` und
    /// `segment < segment_count(points.len())`.
    fn evaluate_segment(&self, points: &[Vec2], segment: usize, t: f32) -> Vec2;

    /// Ableitung dC/du von Segment `segment` an lokalem `t`.
    ///
    /// Jedes Segment hat Parameterlänge 1, lokale und globale Ableitung
    /// stimmen daher überein. Gleiche Vorbedingungen wie `evaluate_segment`.
    fn evaluate_segment_derivative(&self, points: &[Vec2], segment: usize, t: f32) -> Vec2;
}

/// Tag der aktiven Kurvenfamilie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurveType {
    /// Stückweise linear
    Polyline,
    /// Interpolierender Catmull-Rom-Spline (offene Enden mit Phantom-Punkten)
    #[default]
    CatmullRom,
    /// Uniformer kubischer B-Spline
    BSpline,
    /// Stückweise kubische Bézier-Kurve (3k+1 Punkte)
    Bezier,
    /// Periodischer Catmull-Rom-Spline
    ClosedCatmullRom,
    /// Periodischer uniformer kubischer B-Spline
    ClosedBSpline,
}

static POLYLINE: Polyline = Polyline;
static CATMULL_ROM: CatmullRom = CatmullRom;
static BSPLINE: UniformBSpline = UniformBSpline;
static BEZIER: CubicBezier = CubicBezier;
static CLOSED_CATMULL_ROM: ClosedCatmullRom = ClosedCatmullRom;
static CLOSED_BSPLINE: ClosedUniformBSpline = ClosedUniformBSpline;

impl CurveType {
    /// Alle unterstützten Kurventypen in UI-Reihenfolge.
    pub const ALL: [CurveType; 6] = [
        CurveType::Polyline,
        CurveType::CatmullRom,
        CurveType::BSpline,
        CurveType::Bezier,
        CurveType::ClosedCatmullRom,
        CurveType::ClosedBSpline,
    ];

    /// Implementierung der Familie.
    pub fn evaluator(self) -> &'static dyn CurveEvaluator {
        match self {
            CurveType::Polyline => &POLYLINE,
            CurveType::CatmullRom => &CATMULL_ROM,
            CurveType::BSpline => &BSPLINE,
            CurveType::Bezier => &BEZIER,
            CurveType::ClosedCatmullRom => &CLOSED_CATMULL_ROM,
            CurveType::ClosedBSpline => &CLOSED_BSPLINE,
        }
    }

    /// Persistiertes Tag.
    pub fn as_str(self) -> &'static str {
        match self {
            CurveType::Polyline => "polyline",
            CurveType::CatmullRom => "catmull-rom",
            CurveType::BSpline => "b-spline",
            CurveType::Bezier => "bezier",
            CurveType::ClosedCatmullRom => "closed-catmull-rom",
            CurveType::ClosedBSpline => "closed-b-spline",
        }
    }

    /// Anzeigename für die UI.
    pub fn label(self) -> &'static str {
        match self {
            CurveType::Polyline => "Polyline",
            CurveType::CatmullRom => "Catmull-Rom",
            CurveType::BSpline => "B-Spline",
            CurveType::Bezier => "Bézier",
            CurveType::ClosedCatmullRom => "Catmull-Rom (geschlossen)",
            CurveType::ClosedBSpline => "B-Spline (geschlossen)",
        }
    }

    /// Mindestanzahl Kontrollpunkte.
    pub fn min_points(self) -> usize {
        self.evaluator().min_points()
    }

    /// Gibt zurück, ob der Typ periodisch ist.
    pub fn is_closed(self) -> bool {
        self.evaluator().is_closed()
    }

    /// Länge der Parameter-Domäne (0.0 bei zu wenigen Punkten).
    pub fn domain_length(self, point_count: usize) -> f32 {
        let evaluator = self.evaluator();
        if point_count < evaluator.min_points() {
            return 0.0;
        }
        evaluator.segment_count(point_count) as f32
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveType {
    type Err = SplineError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let normalized = tag.trim().to_ascii_lowercase();
        CurveType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == normalized)
            .ok_or_else(|| SplineError::UnsupportedCurveType(tag.to_string()))
    }
}

/// Wertet die Kurve am globalen Parameter aus.
///
/// Liefert `None`, wenn weniger Punkte als `min_points` vorhanden sind.
/// Offene Kurven klemmen den Parameter auf die Domäne, geschlossene wickeln
/// modulo Domänenlänge. NaN wird wie 0.0 behandelt.
pub fn evaluate(curve_type: CurveType, points: &[Vec2], parameter: f32) -> Option<Vec2> {
    at_parameter(curve_type, points, parameter, |evaluator, segment, t| {
        evaluator.evaluate_segment(points, segment, t)
    })
}

/// Wertet die Ableitung (Tangentenvektor) am globalen Parameter aus.
///
/// Gleiche Parameter-Behandlung wie [`evaluate`]. An Segmentgrenzen gilt die
/// einseitige Ableitung des Segments, in das der Parameter fällt.
pub fn evaluate_derivative(
    curve_type: CurveType,
    points: &[Vec2],
    parameter: f32,
) -> Option<Vec2> {
    at_parameter(curve_type, points, parameter, |evaluator, segment, t| {
        evaluator.evaluate_segment_derivative(points, segment, t)
    })
}

fn at_parameter(
    curve_type: CurveType,
    points: &[Vec2],
    parameter: f32,
    eval: impl FnOnce(&dyn CurveEvaluator, usize, f32) -> Vec2,
) -> Option<Vec2> {
    let evaluator = curve_type.evaluator();
    if points.len() < evaluator.min_points() {
        return None;
    }
    let segments = evaluator.segment_count(points.len());
    if segments == 0 {
        return None;
    }
    let (segment, t) = locate(evaluator.is_closed(), segments, parameter);
    Some(eval(evaluator, segment, t))
}

/// Zerlegt einen globalen Parameter in (Segment, lokales t).
pub(crate) fn locate(closed: bool, segments: usize, parameter: f32) -> (usize, f32) {
    let length = segments as f32;
    let u = if closed {
        if parameter.is_finite() {
            parameter.rem_euclid(length)
        } else {
            0.0
        }
    } else if parameter.is_nan() {
        0.0
    } else {
        parameter.clamp(0.0, length)
    };
    // rem_euclid kann durch Rundung exakt `length` liefern
    let segment = (u.floor() as usize).min(segments - 1);
    let t = (u - segment as f32).clamp(0.0, 1.0);
    (segment, t)
}

#[cfg(test)]
mod tests;
