//! Undo/Redo-History auf Basis von Differenz-Records.

use crate::core::{ControlPoint, ControlPointId, CurveType, SplineError, SplineModel};
use glam::Vec2;

/// Eine umkehrbare Änderung am Spline-Modell.
///
/// Statt ganzer Modell-Snapshots wird nur die Differenz gespeichert; die
/// Handles bleiben über Undo/Redo hinweg stabil.
#[derive(Debug, Clone, PartialEq)]
pub enum EditRecord {
    /// Punkt verschoben
    Moved {
        /// Verschobener Punkt
        id: ControlPointId,
        /// Position vorher
        from: Vec2,
        /// Position nachher
        to: Vec2,
    },
    /// Punkt eingefügt
    Inserted {
        /// Eingefügter Punkt (inkl. Handle)
        point: ControlPoint,
        /// Index in der Kurvenreihenfolge
        index: usize,
    },
    /// Punkt entfernt
    Removed {
        /// Entfernter Punkt (inkl. Handle)
        point: ControlPoint,
        /// Index vor dem Entfernen
        index: usize,
    },
    /// Kurventyp gewechselt
    CurveTypeChanged {
        /// Typ vorher
        from: CurveType,
        /// Typ nachher
        to: CurveType,
    },
    /// Sperre umgeschaltet
    LockChanged {
        /// Betroffener Punkt
        id: ControlPointId,
        /// Neuer Zustand
        locked: bool,
    },
}

impl EditRecord {
    /// Macht die Änderung rückgängig.
    pub fn revert(&self, model: &mut SplineModel) -> Result<(), SplineError> {
        match *self {
            EditRecord::Moved { id, from, .. } => model.set_control_point_position(id, from),
            EditRecord::Inserted { point, .. } => model.remove_control_point(point.id).map(|_| ()),
            EditRecord::Removed { point, index } => {
                model.restore_control_point(point, index);
                Ok(())
            }
            EditRecord::CurveTypeChanged { from, .. } => {
                model.force_curve_type(from);
                Ok(())
            }
            EditRecord::LockChanged { id, locked } => model.set_control_point_locked(id, !locked),
        }
    }

    /// Wendet die Änderung (erneut) an.
    pub fn apply(&self, model: &mut SplineModel) -> Result<(), SplineError> {
        match *self {
            EditRecord::Moved { id, to, .. } => model.set_control_point_position(id, to),
            EditRecord::Inserted { point, index } => {
                model.restore_control_point(point, index);
                Ok(())
            }
            EditRecord::Removed { point, .. } => model.remove_control_point(point.id).map(|_| ()),
            EditRecord::CurveTypeChanged { to, .. } => {
                model.force_curve_type(to);
                Ok(())
            }
            EditRecord::LockChanged { id, locked } => model.set_control_point_locked(id, locked),
        }
    }

    /// Kurzbeschreibung für Statuszeile und Logs.
    pub fn describe(&self) -> String {
        match self {
            EditRecord::Moved { id, .. } => format!("Punkt {} verschoben", id),
            EditRecord::Inserted { point, .. } => format!("Punkt {} eingefügt", point.id),
            EditRecord::Removed { point, .. } => format!("Punkt {} entfernt", point.id),
            EditRecord::CurveTypeChanged { to, .. } => format!("Kurventyp → {}", to.label()),
            EditRecord::LockChanged { id, locked: true } => format!("Punkt {} gesperrt", id),
            EditRecord::LockChanged { id, locked: false } => format!("Punkt {} entsperrt", id),
        }
    }
}

/// Undo/Redo-Manager über Änderungs-Records.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<EditRecord>,
    redo_stack: Vec<EditRecord>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth.min(256)),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Speichert eine ausgeführte Änderung. Leert den Redo-Stack.
    pub fn record(&mut self, record: EditRecord) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        log::debug!("History: {}", record.describe());
        self.undo_stack.push(record);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl der Undo-Schritte.
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Nimmt den letzten Record vom Undo-Stack und legt ihn auf den Redo-Stack.
    /// Der Aufrufer wendet `revert` an.
    pub fn pop_undo(&mut self) -> Option<EditRecord> {
        let record = self.undo_stack.pop()?;
        self.redo_stack.push(record.clone());
        Some(record)
    }

    /// Nimmt den letzten Record vom Redo-Stack und legt ihn auf den Undo-Stack.
    /// Der Aufrufer wendet `apply` an.
    pub fn pop_redo(&mut self) -> Option<EditRecord> {
        let record = self.redo_stack.pop()?;
        self.undo_stack.push(record.clone());
        Some(record)
    }

    /// Ändert die maximale Tiefe und kürzt ggf. die ältesten Einträge.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth.max(1);
        if self.undo_stack.len() > self.max_depth {
            let excess = self.undo_stack.len() - self.max_depth;
            self.undo_stack.drain(..excess);
        }
    }

    /// Verwirft alle Einträge (Dokument-Reset, Laden).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
