//! Das Spline-Modell: geordnete Kontrollpunkte, aktiver Kurventyp und
//! eine lazy berechnete Tessellierung.

use super::control_point::{ControlPoint, ControlPointId};
use super::curve::{self, CurveType};
use super::error::SplineError;
use super::tessellation::{self, Tessellation, TessellationQuality, TessellationSettings};
use glam::Vec2;
use indexmap::IndexMap;
use std::sync::Arc;

/// Ergebnis von [`SplineModel::remove_control_point`], genug für ein Undo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemovedControlPoint {
    /// Index in der Kurvenreihenfolge vor dem Entfernen
    pub index: usize,
    /// Der entfernte Punkt inkl. Handle
    pub point: ControlPoint,
}

#[derive(Debug, Clone)]
struct CachedTessellation {
    quality: TessellationQuality,
    tessellation: Arc<Tessellation>,
}

/// Geordnete Kontrollpunkte plus Kurventyp.
///
/// Die Reihenfolge der Map ist die Kurvenreihenfolge. Jede Mutation
/// invalidiert die Tessellierung über ein einzelnes Flag; neu berechnet wird
/// erst beim nächsten [`tessellate`](Self::tessellate).
#[derive(Debug, Clone)]
pub struct SplineModel {
    points: IndexMap<ControlPointId, ControlPoint>,
    curve_type: CurveType,
    next_id: u64,
    /// Wird bei jeder beobachtbaren Änderung erhöht
    revision: u64,
    settings: TessellationSettings,
    tessellation_dirty: bool,
    cache: Option<CachedTessellation>,
}

impl Default for SplineModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SplineModel {
    /// Leeres Modell mit Standard-Kurventyp.
    pub fn new() -> Self {
        Self::with_settings(TessellationSettings::default())
    }

    /// Leeres Modell mit eigenen Tessellierungs-Einstellungen.
    pub fn with_settings(settings: TessellationSettings) -> Self {
        Self {
            points: IndexMap::new(),
            curve_type: CurveType::default(),
            next_id: 1,
            revision: 0,
            settings,
            tessellation_dirty: true,
            cache: None,
        }
    }

    /// Baut ein Modell aus geladenen Daten auf (ohne Mindestanzahl-Prüfung).
    ///
    /// Handles werden in Listenreihenfolge ab 1 vergeben.
    pub fn from_points(
        curve_type: CurveType,
        points: impl IntoIterator<Item = (Vec2, bool)>,
        settings: TessellationSettings,
    ) -> Self {
        let mut model = Self::with_settings(settings);
        model.curve_type = curve_type;
        for (position, locked) in points {
            let id = model.allocate_id();
            model.points.insert(
                id,
                ControlPoint {
                    id,
                    position,
                    locked,
                },
            );
        }
        model
    }

    fn allocate_id(&mut self) -> ControlPointId {
        let id = ControlPointId(self.next_id);
        self.next_id += 1;
        id
    }

    fn invalidate(&mut self) {
        self.revision += 1;
        self.tessellation_dirty = true;
    }

    // ── Abfragen ────────────────────────────────────────────────

    /// Aktiver Kurventyp.
    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    /// Änderungszähler (für Dirty-Checks außerhalb des Modells).
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Anzahl der Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Kontrollpunkte existieren.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Prüft, ob ein Handle (noch) gültig ist.
    pub fn contains(&self, id: ControlPointId) -> bool {
        self.points.contains_key(&id)
    }

    /// Kontrollpunkt per Handle.
    pub fn get(&self, id: ControlPointId) -> Option<&ControlPoint> {
        self.points.get(&id)
    }

    /// Position per Handle.
    pub fn position(&self, id: ControlPointId) -> Option<Vec2> {
        self.points.get(&id).map(|p| p.position)
    }

    /// Index in der Kurvenreihenfolge.
    pub fn index_of(&self, id: ControlPointId) -> Option<usize> {
        self.points.get_index_of(&id)
    }

    /// Kontrollpunkte in Kurvenreihenfolge.
    pub fn control_points(&self) -> impl Iterator<Item = &ControlPoint> + '_ {
        self.points.values()
    }

    /// Positionen in Kurvenreihenfolge.
    pub fn positions(&self) -> Vec<Vec2> {
        self.points.values().map(|p| p.position).collect()
    }

    /// Aktuelle Tessellierungs-Einstellungen.
    pub fn tessellation_settings(&self) -> TessellationSettings {
        self.settings
    }

    /// Länge der Parameter-Domäne des aktiven Kurventyps.
    pub fn domain_length(&self) -> f32 {
        self.curve_type.domain_length(self.points.len())
    }

    // ── Mutationen ──────────────────────────────────────────────

    /// Fügt einen Punkt an `index` ein (Index > Länge → ans Ende).
    pub fn insert_control_point(&mut self, position: Vec2, index: usize) -> ControlPointId {
        let id = self.allocate_id();
        let index = index.min(self.points.len());
        self.points
            .shift_insert(index, id, ControlPoint::new(id, position));
        self.invalidate();
        log::debug!("Kontrollpunkt {} an Index {} eingefügt", id, index);
        id
    }

    /// Hängt einen Punkt ans Ende an.
    pub fn push_control_point(&mut self, position: Vec2) -> ControlPointId {
        self.insert_control_point(position, usize::MAX)
    }

    /// Entfernt einen Punkt; die Reihenfolge der übrigen bleibt erhalten.
    pub fn remove_control_point(
        &mut self,
        id: ControlPointId,
    ) -> Result<RemovedControlPoint, SplineError> {
        let (index, _, point) = self
            .points
            .shift_remove_full(&id)
            .ok_or(SplineError::UnknownHandle(id))?;
        self.invalidate();
        log::debug!("Kontrollpunkt {} entfernt", id);
        Ok(RemovedControlPoint { index, point })
    }

    /// Stellt einen zuvor entfernten Punkt mit seinem Handle wieder her.
    ///
    /// Ein bereits vorhandenes Handle wird nur neu positioniert.
    pub fn restore_control_point(&mut self, point: ControlPoint, index: usize) {
        if let Some(existing) = self.points.get_mut(&point.id) {
            log::warn!("Kontrollpunkt {} existiert bereits, nur Daten übernommen", point.id);
            *existing = point;
        } else {
            let index = index.min(self.points.len());
            self.points.shift_insert(index, point.id, point);
            self.next_id = self.next_id.max(point.id.0 + 1);
        }
        self.invalidate();
    }

    /// Verschiebt einen Punkt. Gleiche Position ist ein No-op.
    pub fn set_control_point_position(
        &mut self,
        id: ControlPointId,
        position: Vec2,
    ) -> Result<(), SplineError> {
        let point = self
            .points
            .get_mut(&id)
            .ok_or(SplineError::UnknownHandle(id))?;
        if point.position == position {
            return Ok(());
        }
        point.position = position;
        self.invalidate();
        Ok(())
    }

    /// Sperrt oder entsperrt einen Punkt.
    pub fn set_control_point_locked(
        &mut self,
        id: ControlPointId,
        locked: bool,
    ) -> Result<(), SplineError> {
        let point = self
            .points
            .get_mut(&id)
            .ok_or(SplineError::UnknownHandle(id))?;
        if point.locked != locked {
            point.locked = locked;
            // Geometrie unverändert, nur Revision
            self.revision += 1;
        }
        Ok(())
    }

    /// Wechselt den Kurventyp und gibt den vorherigen zurück.
    ///
    /// Bei zu wenigen Punkten bleibt der alte Typ aktiv.
    pub fn set_curve_type(&mut self, curve_type: CurveType) -> Result<CurveType, SplineError> {
        let previous = self.curve_type;
        if previous == curve_type {
            return Ok(previous);
        }
        let required = curve_type.min_points();
        if self.points.len() < required {
            return Err(SplineError::InsufficientControlPoints {
                curve_type,
                required,
                available: self.points.len(),
            });
        }
        self.curve_type = curve_type;
        self.invalidate();
        log::info!("Kurventyp: {} → {}", previous, curve_type);
        Ok(previous)
    }

    /// Wechselt den Kurventyp per persistiertem Tag.
    pub fn set_curve_type_tag(&mut self, tag: &str) -> Result<CurveType, SplineError> {
        let curve_type = tag.parse::<CurveType>()?;
        self.set_curve_type(curve_type)
    }

    /// Setzt den Kurventyp ohne Mindestanzahl-Prüfung (Undo, Reset).
    pub(crate) fn force_curve_type(&mut self, curve_type: CurveType) {
        if self.curve_type != curve_type {
            self.curve_type = curve_type;
            self.invalidate();
        }
    }

    /// Ersetzt die Tessellierungs-Einstellungen.
    pub fn set_tessellation_settings(&mut self, settings: TessellationSettings) {
        if self.settings != settings {
            self.settings = settings;
            self.tessellation_dirty = true;
        }
    }

    /// Leert das Modell. Der Handle-Zähler läuft weiter.
    pub fn reset(&mut self) {
        self.points.clear();
        self.curve_type = CurveType::default();
        self.cache = None;
        self.invalidate();
    }

    // ── Auswertung ──────────────────────────────────────────────

    /// Punkt auf der Kurve am globalen Parameter (`None` bei zu wenigen Punkten).
    pub fn evaluate(&self, parameter: f32) -> Option<Vec2> {
        curve::evaluate(self.curve_type, &self.positions(), parameter)
    }

    /// Tangentenvektor dC/du am globalen Parameter (`None` bei zu wenigen Punkten).
    pub fn evaluate_derivative(&self, parameter: f32) -> Option<Vec2> {
        curve::evaluate_derivative(self.curve_type, &self.positions(), parameter)
    }

    /// Gibt die Tessellierung zurück, neu berechnet nur wenn nötig.
    ///
    /// Der Cache ist an die angefragte Qualität gebunden; solange sich weder
    /// Modell noch Qualität ändern, wird dieselbe `Arc` geliefert.
    pub fn tessellate(&mut self, quality: TessellationQuality) -> Arc<Tessellation> {
        if !self.tessellation_dirty {
            if let Some(cache) = self.cache.as_ref().filter(|c| c.quality == quality) {
                return Arc::clone(&cache.tessellation);
            }
        }
        let tessellation = Arc::new(tessellation::tessellate(
            self.curve_type,
            &self.positions(),
            quality,
            &self.settings,
        ));
        self.cache = Some(CachedTessellation {
            quality,
            tessellation: Arc::clone(&tessellation),
        });
        self.tessellation_dirty = false;
        tessellation
    }

    /// Gibt `true` zurück, wenn die nächste Tessellierung neu rechnen muss.
    pub fn is_tessellation_dirty(&self) -> bool {
        self.tessellation_dirty
    }
}
