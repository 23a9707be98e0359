//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let file_name = state
                .ui
                .current_file_path
                .as_deref()
                .and_then(|p| std::path::Path::new(p).file_name())
                .and_then(|n| n.to_str())
                .unwrap_or("Unbenannt");
            let modified = if state.is_modified() { " *" } else { "" };
            ui.label(format!("{}{}", file_name, modified));

            ui.separator();

            ui.label(format!(
                "Punkte: {} | Kurve: {}",
                state.point_count(),
                state.model.curve_type().label()
            ));

            ui.separator();

            let camera = &state.view.camera;
            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.1}, {:.1})",
                camera.zoom, camera.position.x, camera.position.y
            ));

            ui.separator();

            match state.manipulation.selection() {
                Some(id) => {
                    let position = state.model.position(id).unwrap_or_default();
                    ui.label(format!(
                        "Selektiert: {} ({:.2}, {:.2})",
                        id, position.x, position.y
                    ));
                }
                None => {
                    ui.label("Selektiert: -");
                }
            }

            ui.separator();

            ui.label(format!(
                "Tool: {} | Geste: {}",
                state.editor.active_tool.label(),
                state.manipulation.gesture().label()
            ));

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
