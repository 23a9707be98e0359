//! Top-Menü (Datei, Bearbeiten, Ansicht).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Neu (Ctrl+N)").clicked() {
                    events.push(AppIntent::NewDocumentRequested);
                    ui.close();
                }

                if ui.button("Öffnen... (Ctrl+O)").clicked() {
                    events.push(AppIntent::OpenFileRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Speichern (Ctrl+S)").clicked() {
                    events.push(AppIntent::SaveRequested);
                    ui.close();
                }

                if ui.button("Speichern unter...").clicked() {
                    events.push(AppIntent::SaveAsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Bearbeiten", |ui| {
                if ui
                    .add_enabled(state.can_undo(), egui::Button::new("Undo (Ctrl+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(state.can_redo(), egui::Button::new("Redo (Ctrl+Y)"))
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                    ui.close();
                }

                ui.separator();

                let has_selection = state.manipulation.selection().is_some();

                if ui
                    .add_enabled(has_selection, egui::Button::new("Punkt dahinter einfügen (I)"))
                    .clicked()
                {
                    events.push(AppIntent::InsertAfterSelectedRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(has_selection, egui::Button::new("Punkt löschen (Del)"))
                    .clicked()
                {
                    events.push(AppIntent::DeleteSelectedRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(has_selection, egui::Button::new("Sperre umschalten (L)"))
                    .clicked()
                {
                    events.push(AppIntent::ToggleLockRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                if ui.button("Kamera zurücksetzen").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }

                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }

                if ui.button("Alles zeigen (F)").clicked() {
                    events.push(AppIntent::FitViewRequested);
                    ui.close();
                }

                let playback_label = if state.playback.playing {
                    "Wiedergabe anhalten (P)"
                } else {
                    "Wiedergabe starten (P)"
                };
                if ui.button(playback_label).clicked() {
                    events.push(AppIntent::TogglePlaybackRequested);
                    ui.close();
                }

                ui.separator();

                let mut show_polygon = state.options.show_control_polygon;
                if ui
                    .checkbox(&mut show_polygon, "Kontrollpolygon anzeigen")
                    .changed()
                {
                    let mut options = state.options.clone();
                    options.show_control_polygon = show_polygon;
                    events.push(AppIntent::OptionsChanged {
                        options: Box::new(options),
                    });
                }

                if ui.button("Optionen zurücksetzen").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                    ui.close();
                }
            });

            ui.menu_button("Hilfe", |ui| {
                if ui.button("Über").clicked() {
                    log::info!("Spline Editor v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
