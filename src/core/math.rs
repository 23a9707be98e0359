//! Vektor- und Matrix-Primitive für 2D/3D.
//!
//! Alle Koordinaten-Arithmetik der übrigen Module läuft über diese Funktionen,
//! damit Epsilon-Werte und Konventionen an genau einer Stelle definiert sind.
//! Alle Operationen sind seiteneffektfrei und total, mit Ausnahme von `invert`.

use glam::{Affine2, Affine3A, Vec2, Vec3};
use thiserror::Error;

/// Abstand, unter dem zwei Punkte als identisch gelten (Modell-Einheiten).
pub const GEOMETRY_EPSILON: f32 = 1e-5;
/// Betrag der Determinante, unter dem eine Matrix als singulär gilt.
pub const SINGULAR_EPSILON: f32 = 1e-9;

/// Fehler der Mathe-Bibliothek.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// Matrix nicht invertierbar (|det| < `SINGULAR_EPSILON`)
    #[error("Transformation ist singulär (Determinante {determinant:e})")]
    SingularMatrix {
        /// Gemessene Determinante
        determinant: f32,
    },
}

/// Vektor-Addition.
#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    a + b
}

/// Vektor-Differenz `a - b`.
#[inline]
pub fn sub(a: Vec2, b: Vec2) -> Vec2 {
    a - b
}

/// Skaliert einen Vektor.
#[inline]
pub fn scale(v: Vec2, factor: f32) -> Vec2 {
    v * factor
}

/// Skalarprodukt.
#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.dot(b)
}

/// 2D-Kreuzprodukt (z-Komponente des 3D-Kreuzprodukts).
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.perp_dot(b)
}

/// 3D-Kreuzprodukt.
#[inline]
pub fn cross3(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Lineare Interpolation `a + (b - a) * t`.
#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a.lerp(b, t)
}

/// Linearkombination `Σ weights[i] · points[i]`.
#[inline]
pub fn weighted_sum<const N: usize>(points: [Vec2; N], weights: [f32; N]) -> Vec2 {
    points
        .into_iter()
        .zip(weights)
        .fold(Vec2::ZERO, |acc, (point, weight)| add(acc, scale(point, weight)))
}

/// Euklidischer Abstand.
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Gibt `true` zurück, wenn beide Punkte innerhalb von `GEOMETRY_EPSILON` liegen.
#[inline]
pub fn is_coincident(a: Vec2, b: Vec2) -> bool {
    a.distance_squared(b) <= GEOMETRY_EPSILON * GEOMETRY_EPSILON
}

/// Abstand eines Punkts zur Strecke `a`–`b`.
///
/// Bei entarteter Strecke (a ≈ b) wird der Punktabstand zu `a` geliefert,
/// nie NaN.
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= GEOMETRY_EPSILON * GEOMETRY_EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Achsenparallele Bounding-Box einer Punktmenge (`None` bei leerer Menge).
pub fn bounding_box(points: impl IntoIterator<Item = Vec2>) -> Option<(Vec2, Vec2)> {
    points.into_iter().fold(None, |acc, p| match acc {
        None => Some((p, p)),
        Some((min, max)) => Some((min.min(p), max.max(p))),
    })
}

/// Affine 2D-Transformation (Zeilen-Konvention: `compose(a, b)` wendet erst `b`, dann `a` an).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D(Affine2);

impl Transform2D {
    /// Identität.
    pub const IDENTITY: Self = Self(Affine2::IDENTITY);

    /// Reine Translation.
    pub fn from_translation(offset: Vec2) -> Self {
        Self(Affine2::from_translation(offset))
    }

    /// Achsenweise Skalierung um den Ursprung.
    pub fn from_scale(factor: Vec2) -> Self {
        Self(Affine2::from_scale(factor))
    }

    /// Verkettet zwei Transformationen: Ergebnis wendet erst `inner`, dann `self` an.
    pub fn compose(&self, inner: &Transform2D) -> Transform2D {
        Self(self.0 * inner.0)
    }

    /// Determinante des linearen Anteils.
    pub fn determinant(&self) -> f32 {
        self.0.matrix2.determinant()
    }

    /// Invertiert die Transformation.
    pub fn invert(&self) -> Result<Transform2D, MathError> {
        let determinant = self.determinant();
        if !determinant.is_finite() || determinant.abs() < SINGULAR_EPSILON {
            return Err(MathError::SingularMatrix { determinant });
        }
        Ok(Self(self.0.inverse()))
    }

    /// Transformiert einen Punkt (mit Translation).
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        self.0.transform_point2(point)
    }

    /// Transformiert einen Richtungsvektor (ohne Translation).
    pub fn transform_vector(&self, vector: Vec2) -> Vec2 {
        self.0.transform_vector2(vector)
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Affine 3D-Transformation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D(Affine3A);

impl Transform3D {
    /// Identität.
    pub const IDENTITY: Self = Self(Affine3A::IDENTITY);

    /// Reine Translation.
    pub fn from_translation(offset: Vec3) -> Self {
        Self(Affine3A::from_translation(offset))
    }

    /// Achsenweise Skalierung um den Ursprung.
    pub fn from_scale(factor: Vec3) -> Self {
        Self(Affine3A::from_scale(factor))
    }

    /// Rotation um eine normierte Achse (Radiant).
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        Self(Affine3A::from_axis_angle(axis, angle))
    }

    /// Verkettet zwei Transformationen: Ergebnis wendet erst `inner`, dann `self` an.
    pub fn compose(&self, inner: &Transform3D) -> Transform3D {
        Self(self.0 * inner.0)
    }

    /// Determinante des linearen Anteils.
    pub fn determinant(&self) -> f32 {
        self.0.matrix3.determinant()
    }

    /// Invertiert die Transformation.
    pub fn invert(&self) -> Result<Transform3D, MathError> {
        let determinant = self.determinant();
        if !determinant.is_finite() || determinant.abs() < SINGULAR_EPSILON {
            return Err(MathError::SingularMatrix { determinant });
        }
        Ok(Self(self.0.inverse()))
    }

    /// Transformiert einen Punkt (mit Translation).
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.0.transform_point3(point)
    }

    /// Transformiert einen Richtungsvektor (ohne Translation).
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.0.transform_vector3(vector)
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}
