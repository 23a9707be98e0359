//! Core-Domänentypen: Mathematik, Kontrollpunkte, Kurvenfamilien, Spline-Modell, Kamera.

pub mod camera;
pub mod control_point;
/// Kurvenfamilien hinter einem gemeinsamen Auswertungs-Trait
pub mod curve;
pub mod error;
pub mod math;
pub mod spline;
pub mod tessellation;

pub use camera::Camera2D;
pub use control_point::{ControlPoint, ControlPointId};
pub use curve::{CurveEvaluator, CurveType};
pub use error::SplineError;
pub use math::{MathError, Transform2D, Transform3D};
pub use spline::{RemovedControlPoint, SplineModel};
pub use tessellation::{CurveSample, Tessellation, TessellationQuality, TessellationSettings};
