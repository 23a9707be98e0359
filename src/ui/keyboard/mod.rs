//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, EditorTool};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, has_selection: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    // Ctrl+N (Neu), Ctrl+O (Öffnen), Ctrl+S (Speichern), Ctrl+Shift+S (Speichern unter)
    let (key_n_pressed, key_o_pressed, key_s_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::N),
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if modifiers.command && key_n_pressed {
        events.push(AppIntent::NewDocumentRequested);
    }

    if modifiers.command && key_o_pressed {
        events.push(AppIntent::OpenFileRequested);
    }

    if modifiers.command && key_s_pressed {
        events.push(if modifiers.shift {
            AppIntent::SaveAsRequested
        } else {
            AppIntent::SaveRequested
        });
    }

    // Escape: Drag abbrechen bzw. Selektion aufheben (Entscheidung im Mapping)
    if key_escape_pressed {
        events.push(AppIntent::CancelRequested);
    }

    let (key_del_pressed, key_1_pressed, key_2_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            i.key_pressed(egui::Key::Num1),
            i.key_pressed(egui::Key::Num2),
        )
    });
    let (key_f_pressed, key_l_pressed, key_i_pressed, key_p_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::F),
            i.key_pressed(egui::Key::L),
            i.key_pressed(egui::Key::I),
            i.key_pressed(egui::Key::P),
        )
    });

    if key_del_pressed && has_selection {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    if modifiers.command {
        return events;
    }

    if key_1_pressed {
        events.push(AppIntent::SetEditorToolRequested {
            tool: EditorTool::Select,
        });
    }
    if key_2_pressed {
        events.push(AppIntent::SetEditorToolRequested {
            tool: EditorTool::AddPoint,
        });
    }
    if key_f_pressed {
        events.push(AppIntent::FitViewRequested);
    }
    if key_l_pressed && has_selection {
        events.push(AppIntent::ToggleLockRequested);
    }
    if key_i_pressed && has_selection {
        events.push(AppIntent::InsertAfterSelectedRequested);
    }
    if key_p_pressed {
        events.push(AppIntent::TogglePlaybackRequested);
    }

    events
}
