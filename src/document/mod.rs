//! JSON Import/Export für Spline-Dokumente.
//!
//! Ein Dokument ist ein flacher Datensatz: Kurventyp-Tag plus geordnete
//! Kontrollpunkte. Handles werden nicht gespeichert, sondern beim Laden neu
//! vergeben.

pub mod reader;
pub mod writer;

pub use reader::parse_spline_document;
pub use writer::write_spline_document;

use serde::{Deserialize, Serialize};

/// Aktuelle Formatversion.
pub const DOCUMENT_VERSION: u32 = 1;

/// Serialisierte Form eines Kontrollpunkts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentPoint {
    /// X-Koordinate
    pub x: f32,
    /// Y-Koordinate
    pub y: f32,
    /// Gesperrt-Flag (fehlt in älteren Dateien)
    #[serde(default)]
    pub locked: bool,
}

/// Serialisierte Form eines Spline-Dokuments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineDocument {
    /// Formatversion
    pub version: u32,
    /// Persistiertes Kurventyp-Tag (z.B. `catmull-rom`)
    pub curve_type: String,
    /// Kontrollpunkte in Kurvenreihenfolge
    #[serde(default)]
    pub points: Vec<DocumentPoint>,
}
