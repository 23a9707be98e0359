//! Writer für Spline-Dokumente.

use super::{DocumentPoint, SplineDocument, DOCUMENT_VERSION};
use crate::core::SplineModel;
use anyhow::Result;

/// Baut den serialisierbaren Datensatz aus dem Modell.
pub fn to_document(model: &SplineModel) -> SplineDocument {
    SplineDocument {
        version: DOCUMENT_VERSION,
        curve_type: model.curve_type().as_str().to_string(),
        points: model
            .control_points()
            .map(|p| DocumentPoint {
                x: p.position.x,
                y: p.position.y,
                locked: p.locked,
            })
            .collect(),
    }
}

/// Schreibt das Modell als formatiertes JSON.
pub fn write_spline_document(model: &SplineModel) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_document(model))?)
}
