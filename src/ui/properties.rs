//! Properties-Panel (rechte Seitenleiste): Kontrollpunkt-Liste, Selektion
//! und Wiedergabe.

use crate::app::{AppIntent, AppState};
use crate::core::{ControlPoint, ControlPointId};

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(220.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Eigenschaften");
            ui.separator();

            render_selection_info(ui, state, &mut events);
            ui.separator();
            render_point_list(ui, state, &mut events);
            ui.separator();
            render_playback_info(ui, state);
        });

    events
}

fn render_selection_info(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let Some(point) = state
        .manipulation
        .selection()
        .and_then(|id| state.model.get(id))
    else {
        ui.label("Keine Selektion");
        return;
    };

    ui.label(format!("Punkt {}", point.id));
    ui.label(format!(
        "Position: ({:.2}, {:.2})",
        point.position.x, point.position.y
    ));
    let lock_label = if point.locked {
        "🔓 Entsperren (L)"
    } else {
        "🔒 Sperren (L)"
    };
    if ui.small_button(lock_label).clicked() {
        events.push(AppIntent::ToggleLockRequested);
    }
}

fn render_point_list(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.label(format!("Kontrollpunkte ({})", state.model.len()));
    let selected = state.manipulation.selection();

    egui::ScrollArea::vertical()
        .max_height(320.0)
        .show(ui, |ui| {
            for (index, point) in state.model.control_points().enumerate() {
                let is_selected = selected == Some(point.id);
                let response = ui.selectable_label(is_selected, point_row_label(index, point));
                if response.clicked() {
                    events.extend(select_intent(selected, point.id));
                }
            }
        });
}

fn render_playback_info(ui: &mut egui::Ui, state: &AppState) {
    ui.label("Wiedergabe");
    if !state.playback.playing {
        ui.label("Angehalten (P startet)");
        return;
    }
    let parameter = state.playback.parameter;
    ui.label(format!(
        "u = {:.3} / {:.0}",
        parameter,
        state.model.domain_length()
    ));
    if let Some(tangent) = state.model.evaluate_derivative(parameter) {
        ui.label(format!("C'(u) = ({:.2}, {:.2})", tangent.x, tangent.y));
    }
}

/// Listeneintrag: Kurvenindex, Handle, Position, Sperr-Symbol.
fn point_row_label(index: usize, point: &ControlPoint) -> String {
    let lock = if point.locked { " 🔒" } else { "" };
    format!(
        "{:>3}  {}  ({:.1}, {:.1}){}",
        index, point.id, point.position.x, point.position.y, lock
    )
}

/// Ein Klick auf den bereits selektierten Eintrag erzeugt kein Event.
fn select_intent(current: Option<ControlPointId>, clicked: ControlPointId) -> Option<AppIntent> {
    (current != Some(clicked)).then_some(AppIntent::SelectControlPointRequested { id: clicked })
}
