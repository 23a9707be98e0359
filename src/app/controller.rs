//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::use_cases;
use super::{AppCommand, AppIntent, AppState};
use crate::core::SplineError;
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    ///
    /// Abgelehnte Domänen-Aktionen landen in Log und Statuszeile; nur
    /// I/O-Fehler werden an den Aufrufer propagiert.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::RequestSaveFileDialog => handlers::file_io::request_save(state),
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,
            AppCommand::NewDocument => handlers::editing::new_document(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),

            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { screen_delta } => handlers::view::pan(state, screen_delta),
            AppCommand::ZoomCamera {
                factor,
                focus_screen,
            } => handlers::view::zoom_towards(state, factor, focus_screen),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::FitView => handlers::view::fit_view(state),

            // === Manipulation ===
            AppCommand::PointerMove { screen_pos } => report_rejected(state, |s| {
                handlers::selection::pointer_move(s, screen_pos)
            }),
            AppCommand::PointerPress {
                screen_pos,
                add_on_miss,
            } => report_rejected(state, |s| {
                handlers::selection::pointer_press(s, screen_pos, add_on_miss)
            }),
            AppCommand::PointerRelease => handlers::selection::pointer_release(state),
            AppCommand::CancelGesture => handlers::selection::cancel_gesture(state),

            // === Selektion & Editing ===
            AppCommand::SetEditorTool { tool } => handlers::editing::set_editor_tool(state, tool),
            AppCommand::SelectControlPoint { id } => {
                report_rejected(state, |s| handlers::selection::select(s, id))
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::DeleteSelected => {
                report_rejected(state, |s| {
                    ensure_no_gesture(s)?;
                    handlers::editing::delete_selected(s)
                })
            }
            AppCommand::InsertAfterSelected => report_rejected(state, |s| {
                ensure_no_gesture(s)?;
                handlers::editing::insert_after_selected(s)
            }),
            AppCommand::ToggleLockSelected => report_rejected(state, |s| {
                ensure_no_gesture(s)?;
                handlers::editing::toggle_lock_selected(s)
            }),
            AppCommand::SetCurveType { curve_type } => report_rejected(state, |s| {
                ensure_no_gesture(s)?;
                handlers::editing::set_curve_type(s, curve_type)
            }),

            // === History ===
            AppCommand::Undo => report_rejected(state, |s| {
                ensure_no_gesture(s)?;
                handlers::history::undo(s);
                Ok(())
            }),
            AppCommand::Redo => report_rejected(state, |s| {
                ensure_no_gesture(s)?;
                handlers::history::redo(s);
                Ok(())
            }),

            // === Wiedergabe ===
            AppCommand::TogglePlayback => handlers::view::toggle_playback(state),
            AppCommand::AdvancePlayback { dt } => handlers::view::advance_playback(state, dt),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, *options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &mut AppState) -> RenderScene {
        render_scene::build(state)
    }
}

/// Strukturelle Änderungen laufen nie neben einem Drag: pro Event höchstens
/// eine Modell-Mutation.
fn ensure_no_gesture(state: &AppState) -> Result<(), SplineError> {
    if state.manipulation.is_dragging() {
        return Err(SplineError::GestureInProgress);
    }
    Ok(())
}

/// Führt eine Domänen-Aktion aus; eine Ablehnung landet in Log und Statuszeile.
fn report_rejected(
    state: &mut AppState,
    action: impl FnOnce(&mut AppState) -> Result<(), SplineError>,
) {
    if let Err(e) = action(state) {
        use_cases::reject(state, e.to_string());
    }
}
