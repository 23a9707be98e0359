//! Interaction-Loop: Event-Warteschlange und Frame-Takt.
//!
//! Der Host reiht Eingaben mit Zeitstempel ein; pro Frame werden alle
//! wartenden Events in Ankunftsreihenfolge verarbeitet und danach genau
//! eine Render-Szene gebaut. Mit [`InteractionLoop::run_frame_at`] liefert der
//! Host zusätzlich seine Uhr, aus der die Wiedergabe ihren Takt bezieht.

use super::{AppController, AppIntent, AppState};
use crate::shared::RenderScene;
use std::collections::VecDeque;

/// Ein wartendes Eingabe-Event.
#[derive(Debug, Clone)]
pub struct QueuedEvent {
    /// Host-Zeitstempel in Sekunden
    pub timestamp: f64,
    /// Übersetzte Eingabe
    pub intent: AppIntent,
}

/// Ergebnis eines Frames.
#[derive(Debug, Clone)]
pub struct FrameOutput {
    /// Szene nach Anwendung aller Events dieses Frames
    pub scene: RenderScene,
    /// Anzahl verarbeiteter Events
    pub processed: usize,
    /// Ob sich der sichtbare Zustand geändert haben kann
    pub needs_repaint: bool,
}

/// Treibt Controller und Renderer im Takt des Hosts.
#[derive(Default)]
pub struct InteractionLoop {
    controller: AppController,
    queue: VecDeque<QueuedEvent>,
    last_timestamp: f64,
    last_frame_time: Option<f64>,
    frame_count: u64,
}

impl InteractionLoop {
    /// Erstellt einen Loop mit leerer Warteschlange.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reiht ein Event ein.
    ///
    /// Aufeinanderfolgende Zeigerbewegungen werden zur letzten
    /// zusammengefasst; das Drag-Ergebnis hängt nur von der Endposition ab.
    pub fn push(&mut self, timestamp: f64, intent: AppIntent) {
        if timestamp < self.last_timestamp {
            log::debug!(
                "Event mit älterem Zeitstempel ({:.3} < {:.3}) in Ankunftsreihenfolge übernommen",
                timestamp,
                self.last_timestamp
            );
        }
        self.last_timestamp = self.last_timestamp.max(timestamp);

        if let AppIntent::PointerMoved { .. } = intent {
            if let Some(last) = self.queue.back_mut() {
                if matches!(last.intent, AppIntent::PointerMoved { .. }) {
                    *last = QueuedEvent { timestamp, intent };
                    return;
                }
            }
        }
        self.queue.push_back(QueuedEvent { timestamp, intent });
    }

    /// Anzahl wartender Events.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Anzahl bisher gerenderter Frames.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Direkter Zugriff auf den Controller (Tests, Host-Sonderfälle).
    pub fn controller_mut(&mut self) -> &mut AppController {
        &mut self.controller
    }

    /// Wie [`run_frame`](Self::run_frame), rückt vorher aber eine laufende
    /// Wiedergabe um die seit dem letzten Frame vergangene Zeit vor.
    pub fn run_frame_at(&mut self, state: &mut AppState, now: f64) -> FrameOutput {
        let previous = self.last_frame_time.replace(now);
        if let Some(previous) = previous {
            if state.playback.playing {
                let dt = (now - previous).max(0.0) as f32;
                self.queue.push_back(QueuedEvent {
                    timestamp: now,
                    intent: AppIntent::PlaybackTick { dt },
                });
            }
        }
        self.run_frame(state)
    }

    /// Verarbeitet alle wartenden Events und baut genau eine Szene.
    ///
    /// Fehler einzelner Events werden geloggt und in der Statuszeile
    /// gemeldet; die restlichen Events laufen weiter.
    pub fn run_frame(&mut self, state: &mut AppState) -> FrameOutput {
        let revision_before = state.model.revision();
        let mut processed = 0;

        while let Some(event) = self.queue.pop_front() {
            log::trace!("Event @{:.3}: {:?}", event.timestamp, event.intent);
            if let Err(e) = self.controller.handle_intent(state, event.intent) {
                log::error!("Event fehlgeschlagen: {:#}", e);
                state.ui.status_message = Some(format!("Fehler: {:#}", e));
            }
            processed += 1;
        }

        let scene = self.controller.build_render_scene(state);
        self.frame_count += 1;

        FrameOutput {
            scene,
            processed,
            needs_repaint: processed > 0
                || state.model.revision() != revision_before
                || state.playback.playing,
        }
    }
}
