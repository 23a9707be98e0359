use crate::app::{AppCommand, AppIntent, AppState, EditorTool};
use crate::core::CurveType;
use glam::Vec2;

use super::map_intent_to_commands;

fn dragging_state() -> AppState {
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];
    state.model.push_control_point(Vec2::ZERO);
    let mapping = state.viewport_mapping().expect("Viewport");
    let settings = state.pick_settings();
    state
        .manipulation
        .pointer_pressed(&state.model, &mapping, &settings, Vec2::new(400.0, 300.0));
    assert!(state.manipulation.is_dragging());
    state
}

#[test]
fn save_requested_maps_to_save_file_without_path() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SaveRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::SaveFile { path: None }));
}

#[test]
fn pointer_press_carries_add_flag_from_active_tool() {
    let mut state = AppState::new();
    let intent = AppIntent::PointerPressed {
        screen_pos: Vec2::new(10.0, 10.0),
    };

    let commands = map_intent_to_commands(&state, intent.clone());
    assert!(matches!(
        commands[0],
        AppCommand::PointerPress {
            add_on_miss: false,
            ..
        }
    ));

    state.editor.active_tool = EditorTool::AddPoint;
    let commands = map_intent_to_commands(&state, intent);
    assert!(matches!(
        commands[0],
        AppCommand::PointerPress {
            add_on_miss: true,
            ..
        }
    ));
}

#[test]
fn escape_clears_selection_when_idle() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::CancelRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::ClearSelection));
}

#[test]
fn escape_cancels_gesture_while_dragging() {
    let state = dragging_state();

    let commands = map_intent_to_commands(&state, AppIntent::CancelRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::CancelGesture));
}

#[test]
fn undo_during_drag_only_cancels_the_drag() {
    let state = dragging_state();

    let commands = map_intent_to_commands(&state, AppIntent::UndoRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::CancelGesture));
}

#[test]
fn structural_intents_map_to_a_single_command_even_while_dragging() {
    let state = dragging_state();
    let intents = [
        AppIntent::DeleteSelectedRequested,
        AppIntent::InsertAfterSelectedRequested,
        AppIntent::ToggleLockRequested,
        AppIntent::RedoRequested,
        AppIntent::CurveTypeChangeRequested {
            curve_type: CurveType::Polyline,
        },
    ];

    for intent in intents {
        let commands = map_intent_to_commands(&state, intent.clone());
        assert_eq!(commands.len(), 1, "{intent:?}");
        assert!(!matches!(commands[0], AppCommand::CancelGesture), "{intent:?}");
    }
}

#[test]
fn focus_lost_always_cancels_gesture() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::FocusLost);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::CancelGesture));
}
