//! Toolbar für Werkzeug- und Kurventyp-Auswahl.

use crate::app::{AppIntent, AppState, EditorTool};
use crate::core::CurveType;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.editor.active_tool;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Werkzeug:");
            ui.separator();

            for (tool, shortcut) in [(EditorTool::Select, 1), (EditorTool::AddPoint, 2)] {
                let button = egui::Button::new(format!("{} ({})", tool.label(), shortcut));
                if ui.add(button.selected(active == tool)).clicked() {
                    events.push(AppIntent::SetEditorToolRequested { tool });
                }
            }

            ui.separator();

            let current = state.model.curve_type();
            egui::ComboBox::from_id_salt("curve_type_dropdown")
                .selected_text(current.label())
                .width(180.0)
                .show_ui(ui, |ui| {
                    for curve_type in CurveType::ALL {
                        if ui
                            .selectable_label(curve_type == current, curve_type.label())
                            .clicked()
                            && curve_type != current
                        {
                            events.push(AppIntent::CurveTypeChangeRequested { curve_type });
                        }
                    }
                });

            ui.separator();

            if ui
                .add_enabled(state.can_undo(), egui::Button::new("↶ Undo"))
                .clicked()
            {
                events.push(AppIntent::UndoRequested);
            }
            if ui
                .add_enabled(state.can_redo(), egui::Button::new("↷ Redo"))
                .clicked()
            {
                events.push(AppIntent::RedoRequested);
            }

            ui.separator();

            let has_selection = state.manipulation.selection().is_some();
            if ui
                .add_enabled(has_selection, egui::Button::new("🗑 Löschen (Del)"))
                .clicked()
            {
                events.push(AppIntent::DeleteSelectedRequested);
            }

            ui.separator();

            let (icon, hint) = if state.playback.playing {
                ("⏸", "Wiedergabe anhalten (P)")
            } else {
                ("▶", "Wiedergabe starten (P)")
            };
            if ui.button(icon).on_hover_text(hint).clicked() {
                events.push(AppIntent::TogglePlaybackRequested);
            }

            if active == EditorTool::AddPoint {
                ui.separator();
                ui.label("Klick ins Leere hängt einen Punkt an");
            }
        });
    });

    events
}
