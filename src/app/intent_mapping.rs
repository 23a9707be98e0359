//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::EditorTool;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let dragging = state.manipulation.is_dragging();

    match intent {
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::NewDocumentRequested => vec![AppCommand::NewDocument],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveFilePathSelected { path } => vec![AppCommand::SaveFile { path: Some(path) }],

        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { screen_delta } => vec![AppCommand::PanCamera { screen_delta }],
        AppIntent::CameraZoom {
            factor,
            focus_screen,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_screen,
        }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::FitViewRequested => vec![AppCommand::FitView],

        AppIntent::PointerMoved { screen_pos } => vec![AppCommand::PointerMove { screen_pos }],
        AppIntent::PointerPressed { screen_pos } => vec![AppCommand::PointerPress {
            screen_pos,
            add_on_miss: state.editor.active_tool == EditorTool::AddPoint,
        }],
        AppIntent::PointerReleased { .. } => vec![AppCommand::PointerRelease],
        AppIntent::CancelRequested => {
            if dragging {
                vec![AppCommand::CancelGesture]
            } else {
                vec![AppCommand::ClearSelection]
            }
        }
        AppIntent::FocusLost => vec![AppCommand::CancelGesture],

        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],
        AppIntent::SelectControlPointRequested { id } => {
            vec![AppCommand::SelectControlPoint { id }]
        }
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],
        AppIntent::InsertAfterSelectedRequested => vec![AppCommand::InsertAfterSelected],
        AppIntent::ToggleLockRequested => vec![AppCommand::ToggleLockSelected],
        AppIntent::CurveTypeChangeRequested { curve_type } => {
            vec![AppCommand::SetCurveType { curve_type }]
        }

        // Undo während eines Drags verwirft genau die laufende Verschiebung
        AppIntent::UndoRequested => {
            if dragging {
                vec![AppCommand::CancelGesture]
            } else {
                vec![AppCommand::Undo]
            }
        }
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::TogglePlaybackRequested => vec![AppCommand::TogglePlayback],
        AppIntent::PlaybackTick { dt } => vec![AppCommand::AdvancePlayback { dt }],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

#[cfg(test)]
mod tests;
