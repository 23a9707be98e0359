//! Picking & Manipulation: Zustandsmaschine über Zeiger-Gesten.
//!
//! Der Controller hält nur Handles auf Kontrollpunkte, nie Kopien; jede
//! Positionsänderung läuft über das Spline-Modell. Alle Zeigerpositionen
//! kommen in Bildschirm-Koordinaten und werden über die inverse
//! Kamera-Transformation in Modell-Koordinaten umgerechnet.

mod pick;

pub use pick::{pick_control_point, PickSettings};

use crate::core::math::{self, MathError, Transform2D};
use crate::core::{Camera2D, ControlPointId, SplineError, SplineModel};
use glam::Vec2;

/// Bildschirm → Modell für genau einen Frame-Zustand der Kamera.
#[derive(Debug, Clone, Copy)]
pub struct ViewportMapping {
    screen_to_world: Transform2D,
}

impl ViewportMapping {
    /// Invertiert die Kamera-Transformation. Schlägt bei leerem Viewport fehl.
    pub fn new(camera: &Camera2D, viewport_size: Vec2) -> Result<Self, MathError> {
        Ok(Self {
            screen_to_world: camera.screen_to_world(viewport_size)?,
        })
    }

    /// Bildschirmpunkt in Modell-Koordinaten.
    pub fn to_world(&self, screen_pos: Vec2) -> Vec2 {
        self.screen_to_world.transform_point(screen_pos)
    }

    /// Bildschirm-Delta in Modell-Delta.
    pub fn delta_to_world(&self, screen_delta: Vec2) -> Vec2 {
        self.screen_to_world.transform_vector(screen_delta)
    }

    /// Pixel-Länge in Modell-Einheiten.
    pub fn length_to_world(&self, pixels: f32) -> f32 {
        self.delta_to_world(Vec2::new(pixels, 0.0)).length()
    }
}

/// Laufender Drag eines einzelnen Kontrollpunkts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Gezogener (und selektierter) Punkt
    pub id: ControlPointId,
    /// Zeigerposition beim Drücken (Modell-Koordinaten)
    pub anchor_world: Vec2,
    /// Position vor dem Drag, Ziel jedes Abbruchs
    pub original_position: Vec2,
}

/// Zustand der aktuellen Geste.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// Kein Punkt unter dem Zeiger
    #[default]
    Idle,
    /// Zeiger innerhalb des Pick-Radius eines Punkts
    Hovering {
        /// Hover-Kandidat (noch keine Selektion)
        candidate: ControlPointId,
    },
    /// Ein Punkt wird gezogen
    Dragging(DragState),
}

impl GestureState {
    /// Kurzname für Statusanzeige und Logs.
    pub fn label(&self) -> &'static str {
        match self {
            GestureState::Idle => "Idle",
            GestureState::Hovering { .. } => "Hover",
            GestureState::Dragging(_) => "Drag",
        }
    }
}

/// Ergebnis eines Zeiger-Drucks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Punkt getroffen, Drag gestartet
    DragStarted(ControlPointId),
    /// Gesperrter Punkt getroffen: selektiert, aber kein Drag
    SelectedLocked(ControlPointId),
    /// Nichts getroffen, Selektion geleert
    Missed,
    /// Druck während eines laufenden Drags (fehlendes Release), ignoriert
    Ignored,
}

/// Abgeschlossene Verschiebung, bereit für die Undo-Historie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommittedMove {
    /// Verschobener Punkt
    pub id: ControlPointId,
    /// Position vor dem Drag
    pub from: Vec2,
    /// Position nach dem Drag
    pub to: Vec2,
}

/// Besitzt Selektion und Gesten-Zustand.
#[derive(Debug, Clone, Default)]
pub struct ManipulationController {
    selection: Option<ControlPointId>,
    gesture: GestureState,
}

impl ManipulationController {
    /// Erstellt einen Controller ohne Selektion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Gesten-Zustand.
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Selektierter Punkt.
    pub fn selection(&self) -> Option<ControlPointId> {
        self.selection
    }

    /// Hover-Kandidat (nur im Zustand `Hovering`).
    pub fn hovered(&self) -> Option<ControlPointId> {
        match self.gesture {
            GestureState::Hovering { candidate } => Some(candidate),
            _ => None,
        }
    }

    /// Gibt `true` zurück, solange ein Drag läuft.
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, GestureState::Dragging(_))
    }

    fn pick(
        &self,
        model: &SplineModel,
        mapping: &ViewportMapping,
        settings: &PickSettings,
        screen_pos: Vec2,
    ) -> Option<ControlPointId> {
        let world = mapping.to_world(screen_pos);
        let radius = mapping.length_to_world(settings.radius_px);
        pick_control_point(
            model,
            world,
            radius,
            self.selection.map(|id| (id, settings.selected_factor)),
        )
    }

    /// Zeigerbewegung: aktualisiert Hover oder zieht den selektierten Punkt.
    pub fn pointer_moved(
        &mut self,
        model: &mut SplineModel,
        mapping: &ViewportMapping,
        settings: &PickSettings,
        screen_pos: Vec2,
    ) -> Result<(), SplineError> {
        match self.gesture {
            GestureState::Dragging(drag) => {
                let world = mapping.to_world(screen_pos);
                let target = math::add(drag.original_position, math::sub(world, drag.anchor_world));
                if let Err(e) = model.set_control_point_position(drag.id, target) {
                    // Punkt verschwunden: Drag beenden statt hängen zu bleiben
                    self.gesture = GestureState::Idle;
                    self.selection = None;
                    return Err(e);
                }
                Ok(())
            }
            GestureState::Idle | GestureState::Hovering { .. } => {
                self.gesture = match self.pick(model, mapping, settings, screen_pos) {
                    Some(candidate) => GestureState::Hovering { candidate },
                    None => GestureState::Idle,
                };
                Ok(())
            }
        }
    }

    /// Zeiger gedrückt: selektiert den getroffenen Punkt und startet den Drag.
    pub fn pointer_pressed(
        &mut self,
        model: &SplineModel,
        mapping: &ViewportMapping,
        settings: &PickSettings,
        screen_pos: Vec2,
    ) -> PressOutcome {
        if self.is_dragging() {
            log::debug!("Press während Drag ignoriert");
            return PressOutcome::Ignored;
        }

        let Some(id) = self.pick(model, mapping, settings, screen_pos) else {
            self.selection = None;
            self.gesture = GestureState::Idle;
            return PressOutcome::Missed;
        };
        let Some(point) = model.get(id) else {
            return PressOutcome::Missed;
        };

        self.selection = Some(id);
        if point.locked {
            self.gesture = GestureState::Hovering { candidate: id };
            return PressOutcome::SelectedLocked(id);
        }

        self.gesture = GestureState::Dragging(DragState {
            id,
            anchor_world: mapping.to_world(screen_pos),
            original_position: point.position,
        });
        log::debug!("Drag gestartet: {}", id);
        PressOutcome::DragStarted(id)
    }

    /// Zeiger losgelassen: beendet den Drag immer.
    ///
    /// Liefert die Verschiebung nur, wenn sich die Position tatsächlich geändert hat.
    pub fn pointer_released(&mut self, model: &SplineModel) -> Option<CommittedMove> {
        let GestureState::Dragging(drag) = std::mem::take(&mut self.gesture) else {
            return None;
        };
        let current = model.position(drag.id)?;
        if current == drag.original_position {
            log::debug!("Drag ohne Änderung verworfen: {}", drag.id);
            return None;
        }
        Some(CommittedMove {
            id: drag.id,
            from: drag.original_position,
            to: current,
        })
    }

    /// Bricht die laufende Geste ab und stellt die Ausgangsposition exakt wieder her.
    ///
    /// Gibt `true` zurück, wenn ein Drag abgebrochen wurde.
    pub fn cancel(&mut self, model: &mut SplineModel) -> bool {
        let previous = std::mem::take(&mut self.gesture);
        let GestureState::Dragging(drag) = previous else {
            return false;
        };
        if let Err(e) = model.set_control_point_position(drag.id, drag.original_position) {
            log::warn!("Drag-Abbruch: {}", e);
        }
        log::debug!("Drag abgebrochen: {}", drag.id);
        true
    }

    /// Selektiert einen Punkt explizit.
    pub fn select(&mut self, model: &SplineModel, id: ControlPointId) -> Result<(), SplineError> {
        if !model.contains(id) {
            return Err(SplineError::UnknownHandle(id));
        }
        if self.is_dragging() {
            return Err(SplineError::GestureInProgress);
        }
        self.selection = Some(id);
        Ok(())
    }

    /// Leert die Selektion (ein laufender Drag bleibt davon unberührt).
    pub fn clear_selection(&mut self) {
        if !self.is_dragging() {
            self.selection = None;
        }
    }

    /// Entfernt alle Verweise auf Handles, die das Modell nicht mehr kennt.
    pub fn sync_with_model(&mut self, model: &SplineModel) {
        if self.selection.is_some_and(|id| !model.contains(id)) {
            self.selection = None;
        }
        let dangling = match self.gesture {
            GestureState::Hovering { candidate } => !model.contains(candidate),
            GestureState::Dragging(drag) => !model.contains(drag.id),
            GestureState::Idle => false,
        };
        if dangling {
            self.gesture = GestureState::Idle;
        }
    }

    /// Verwirft Selektion und Geste (Dokument-Reset).
    pub fn reset(&mut self) {
        self.selection = None;
        self.gesture = GestureState::Idle;
    }
}

#[cfg(test)]
mod tests;
