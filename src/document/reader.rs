//! Parser für Spline-Dokumente.

use super::{SplineDocument, DOCUMENT_VERSION};
use crate::core::{CurveType, SplineModel, TessellationSettings};
use anyhow::{bail, Context, Result};
use glam::Vec2;

/// Parsed ein Spline-Dokument aus einem JSON-String.
///
/// Die Mindestanzahl Punkte des Kurventyps wird nicht geprüft: solche
/// Dokumente laden und zeichnen eine leere Kurve.
pub fn parse_spline_document(content: &str, settings: TessellationSettings) -> Result<SplineModel> {
    let document: SplineDocument =
        serde_json::from_str(content).context("Dokument ist kein gültiges JSON")?;

    if document.version == 0 || document.version > DOCUMENT_VERSION {
        bail!(
            "Nicht unterstützte Dokumentversion {} (erwartet ≤ {})",
            document.version,
            DOCUMENT_VERSION
        );
    }

    let curve_type: CurveType = document.curve_type.parse()?;

    if let Some(index) = document
        .points
        .iter()
        .position(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        bail!("Kontrollpunkt {} hat ungültige Koordinaten", index);
    }

    log::info!(
        "Dokument gelesen: {} Punkte, Kurventyp {}",
        document.points.len(),
        curve_type
    );

    Ok(SplineModel::from_points(
        curve_type,
        document
            .points
            .iter()
            .map(|p| (Vec2::new(p.x, p.y), p.locked)),
        settings,
    ))
}
