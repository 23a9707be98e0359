//! Viewport-Input-Handling: Maus-, Scroll- und Fokus-Events → AppIntent.
//!
//! Alle Positionen gehen als Bildschirm-Koordinaten relativ zur linken
//! oberen Viewport-Ecke an die App; die Umrechnung ins Modell passiert dort.

use super::keyboard;
use crate::app::AppIntent;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Verwaltet den Input-Zustand für das Viewport.
#[derive(Debug, Default)]
pub struct InputState {
    /// Primärtaste wurde im Viewport gedrückt und noch nicht losgelassen
    primary_down: bool,
    /// Letzte gemeldete Zeigerposition (vermeidet doppelte Move-Events)
    last_pointer: Option<Vec2>,
    /// Zuletzt gemeldete Viewport-Größe
    last_size: Option<[f32; 2]>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-,
    /// Fokus- und Tastatur-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        has_selection: bool,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let rect = response.rect;

        let size = [rect.width(), rect.height()];
        if self.last_size != Some(size) {
            self.last_size = Some(size);
            events.push(AppIntent::ViewportResized { size });
        }

        let focus_lost = ui.input(|i| {
            i.events
                .iter()
                .any(|e| matches!(e, egui::Event::WindowFocused(false)))
        });
        if focus_lost {
            self.primary_down = false;
            events.push(AppIntent::FocusLost);
        }

        events.extend(keyboard::collect_keyboard_intents(ui, has_selection));

        self.handle_primary_button(ui, response, &mut events);
        self.handle_pointer_motion(ui, response, &mut events);
        handle_camera_pan(ui, response, &mut events);
        handle_scroll_zoom(ui, response, options, &mut events);

        events
    }

    fn handle_primary_button(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        events: &mut Vec<AppIntent>,
    ) {
        let (pressed, released, pointer) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
            )
        });

        if pressed && response.hovered() {
            if let Some(pos) = pointer {
                self.primary_down = true;
                events.push(AppIntent::PointerPressed {
                    screen_pos: to_local(pos, response),
                });
            }
        }

        if released && self.primary_down {
            self.primary_down = false;
            let screen_pos = pointer
                .map(|pos| to_local(pos, response))
                .or(self.last_pointer)
                .unwrap_or(Vec2::ZERO);
            events.push(AppIntent::PointerReleased { screen_pos });
        }
    }

    fn handle_pointer_motion(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        events: &mut Vec<AppIntent>,
    ) {
        // Während eines Drags auch außerhalb des Viewports weiter melden
        let pointer = if self.primary_down {
            ui.input(|i| i.pointer.latest_pos())
        } else {
            response.hover_pos()
        };
        let Some(pos) = pointer.map(|p| to_local(p, response)) else {
            return;
        };
        if self.last_pointer != Some(pos) {
            self.last_pointer = Some(pos);
            events.push(AppIntent::PointerMoved { screen_pos: pos });
        }
    }
}

/// Mittlere oder rechte Maustaste verschiebt die Kamera.
fn handle_camera_pan(ui: &egui::Ui, response: &egui::Response, events: &mut Vec<AppIntent>) {
    if !(response.dragged_by(egui::PointerButton::Middle)
        || response.dragged_by(egui::PointerButton::Secondary))
    {
        return;
    }
    let delta = ui.input(|i| i.pointer.delta());
    if delta != egui::Vec2::ZERO {
        events.push(AppIntent::CameraPan {
            screen_delta: Vec2::new(delta.x, delta.y),
        });
    }
}

/// Scroll-Zoom auf die aktuelle Mausposition.
fn handle_scroll_zoom(
    ui: &egui::Ui,
    response: &egui::Response,
    options: &EditorOptions,
    events: &mut Vec<AppIntent>,
) {
    if !response.hovered() {
        return;
    }
    let scroll = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll == 0.0 {
        return;
    }

    let step = options.camera_scroll_zoom_step;
    let factor = if scroll > 0.0 { step } else { 1.0 / step };
    events.push(AppIntent::CameraZoom {
        factor,
        focus_screen: response.hover_pos().map(|pos| to_local(pos, response)),
    });
}

/// Rechnet eine egui-Position in Viewport-lokale Pixel um.
pub(crate) fn to_local(pos: egui::Pos2, response: &egui::Response) -> Vec2 {
    let local = pos - response.rect.min;
    Vec2::new(local.x, local.y)
}
