//! Adaptive Tessellierung einer Kurve in eine Polyline.
//!
//! Start mit grober uniformer Abtastung pro Segment; ein Intervall gilt als
//! flach, wenn die Kurvenpunkte bei 1/4, 1/2 und 3/4 des Parameterintervalls
//! innerhalb der Toleranz an der Sehne liegen, sonst wird es halbiert.
//! Der Mittelpunkt allein reicht nicht: liegt ein Wendepunkt genau dort,
//! fällt er auf die Sehne, obwohl die Kurve seitlich ausschlägt.
//! Die Rekursionstiefe ist begrenzt, damit entartete Eingaben terminieren.

use super::curve::CurveType;
use super::math;
use glam::Vec2;

/// Standard-Rekursionstiefe der adaptiven Unterteilung.
pub const DEFAULT_MAX_DEPTH: u32 = 10;
/// Standard-Anzahl grober Intervalle pro Kurvensegment.
pub const DEFAULT_COARSE_SAMPLES_PER_SEGMENT: usize = 4;

/// Anteil der Toleranz, den die Prüfpunkte ausschöpfen dürfen.
///
/// Zwischen den Prüfpunkten kann die Abweichung eines kubischen Teilstücks
/// um knapp 3 % höher liegen als an ihnen.
const INTERIOR_CHECK_MARGIN: f32 = 0.95;

/// Angefragte Genauigkeit einer Tessellierung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TessellationQuality {
    /// Maximaler Sehnenfehler in Modell-Einheiten (adaptiv)
    Tolerance(f32),
    /// Feste Anzahl Intervalle pro Segment (uniform)
    Uniform(usize),
}

/// Policy-Werte der adaptiven Unterteilung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TessellationSettings {
    /// Maximale Halbierungstiefe je grobem Intervall
    pub max_depth: u32,
    /// Grobe Intervalle pro Segment vor der Unterteilung
    pub coarse_samples_per_segment: usize,
}

impl Default for TessellationSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            coarse_samples_per_segment: DEFAULT_COARSE_SAMPLES_PER_SEGMENT,
        }
    }
}

/// Ein Abtastpunkt der Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    /// Position in Modell-Koordinaten
    pub position: Vec2,
    /// Globaler Kurvenparameter
    pub parameter: f32,
}

/// Polyline-Approximation einer Kurve.
///
/// Bei geschlossenen Kurven ist der letzte Sample gleich dem ersten
/// (Parameter = Domänenlänge), die Polyline ist also bereits geschlossen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tessellation {
    samples: Vec<CurveSample>,
    closed: bool,
}

impl Tessellation {
    /// Leere Tessellierung (zu wenige Kontrollpunkte).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Alle Abtastpunkte in Parameter-Reihenfolge.
    pub fn samples(&self) -> &[CurveSample] {
        &self.samples
    }

    /// Iteriert über die Positionen.
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.samples.iter().map(|s| s.position)
    }

    /// Anzahl der Abtastpunkte.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Gibt `true` zurück, wenn nichts zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Gibt zurück, ob die Kurve periodisch ist.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Tesselliert die Kurve über `points`.
pub fn tessellate(
    curve_type: CurveType,
    points: &[Vec2],
    quality: TessellationQuality,
    settings: &TessellationSettings,
) -> Tessellation {
    let evaluator = curve_type.evaluator();
    if points.len() < evaluator.min_points() {
        return Tessellation::empty();
    }
    let segments = evaluator.segment_count(points.len());
    if segments == 0 {
        return Tessellation::empty();
    }

    let (intervals, tolerance, max_depth) = match quality {
        TessellationQuality::Tolerance(tolerance) => {
            // Ungültige Toleranz → Tiefenlimit entscheidet allein
            let tolerance = if tolerance.is_finite() && tolerance > 0.0 {
                tolerance
            } else {
                0.0
            };
            (
                settings.coarse_samples_per_segment.max(1),
                tolerance,
                settings.max_depth,
            )
        }
        TessellationQuality::Uniform(samples) => (samples.max(1), f32::INFINITY, 0),
    };

    let mut samples = Vec::with_capacity(segments * intervals + 1);
    samples.push(CurveSample {
        position: evaluator.evaluate_segment(points, 0, 0.0),
        parameter: 0.0,
    });

    for segment in 0..segments {
        let eval = |t: f32| evaluator.evaluate_segment(points, segment, t);
        let base = segment as f32;
        let mut t0 = 0.0;
        let mut p0 = eval(0.0);
        for k in 1..=intervals {
            let t1 = k as f32 / intervals as f32;
            let p1 = eval(t1);
            subdivide(&eval, base, (t0, p0), (t1, p1), tolerance, max_depth, &mut samples);
            t0 = t1;
            p0 = p1;
        }
    }

    log::debug!(
        "Tessellierung {}: {} Segmente → {} Samples",
        curve_type,
        segments,
        samples.len()
    );

    Tessellation {
        samples,
        closed: evaluator.is_closed(),
    }
}

/// Halbiert `[start, end]` rekursiv, bis das Intervall flach ist oder `depth`
/// aufgebraucht ist. Pusht alle Samples nach `start` inkl. `end`.
fn subdivide(
    eval: &impl Fn(f32) -> Vec2,
    base: f32,
    start: (f32, Vec2),
    end: (f32, Vec2),
    tolerance: f32,
    depth: u32,
    out: &mut Vec<CurveSample>,
) {
    if depth > 0 {
        let tm = 0.5 * (start.0 + end.0);
        let mid = (tm, eval(tm));
        if !is_flat(eval, start, mid, end, tolerance) {
            subdivide(eval, base, start, mid, tolerance, depth - 1, out);
            subdivide(eval, base, mid, end, tolerance, depth - 1, out);
            return;
        }
    }
    out.push(CurveSample {
        position: end.1,
        parameter: base + end.0,
    });
}

fn is_flat(
    eval: &impl Fn(f32) -> Vec2,
    start: (f32, Vec2),
    mid: (f32, Vec2),
    end: (f32, Vec2),
    tolerance: f32,
) -> bool {
    let limit = tolerance * INTERIOR_CHECK_MARGIN;
    let deviation = |point: Vec2| math::distance_to_segment(point, start.1, end.1);
    if deviation(mid.1) > limit {
        return false;
    }
    let quarter = 0.5 * (start.0 + mid.0);
    let three_quarter = 0.5 * (mid.0 + end.0);
    deviation(eval(quarter)) <= limit && deviation(eval(three_quarter)) <= limit
}
