use approx::assert_relative_eq;
use glam::Vec2;
use spline_editor::app::GestureState;
use spline_editor::render::{MarkerStyle, RecordingDevice};
use spline_editor::{
    AppCommand, AppController, AppIntent, AppState, ControlPointId, CurveType, DrawPrimitive,
    EditorTool, InteractionLoop, Renderer,
};

/// Viewport 800×600, Zoom 1: Modell (x, y) liegt bei Pixel (400 + 3x, 300 + 3y).
fn screen(world: Vec2) -> Vec2 {
    Vec2::new(400.0, 300.0) + world * 3.0
}

fn square_state() -> (AppState, Vec<ControlPointId>) {
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];
    let ids = [
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(0.0, 10.0),
    ]
    .into_iter()
    .map(|p| state.model.push_control_point(p))
    .collect();
    (state, ids)
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

#[test]
fn test_insert_four_points_yields_curve_starting_at_first_point() {
    let mut state = AppState::new();
    for (index, p) in [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]
        .into_iter()
        .enumerate()
    {
        state.model.insert_control_point(Vec2::new(p.0, p.1), index);
    }
    assert_eq!(state.model.len(), CurveType::CatmullRom.min_points());

    let quality = state.options.tessellation_quality();
    let tessellation = state.model.tessellate(quality);
    assert!(!tessellation.is_empty());

    let start = state.model.evaluate(0.0).expect("Kurve auswertbar");
    assert_relative_eq!(start.x, 0.0, epsilon = 1e-4);
    assert_relative_eq!(start.y, 0.0, epsilon = 1e-4);
}

#[test]
fn test_drag_then_cancel_restores_position_and_tessellation() {
    let mut controller = AppController::new();
    let (mut state, ids) = square_state();
    let quality = state.options.tessellation_quality();
    let before = state.model.tessellate(quality);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: screen(Vec2::new(10.0, 0.0)),
        },
    );
    assert!(state.manipulation.is_dragging());
    assert_eq!(state.manipulation.selection(), Some(ids[1]));

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: screen(Vec2::new(15.0, 5.0)),
        },
    );
    let dragged = state.model.position(ids[1]).expect("Punkt");
    assert_relative_eq!(dragged.x, 15.0, epsilon = 1e-3);
    assert_relative_eq!(dragged.y, 5.0, epsilon = 1e-3);

    send(&mut controller, &mut state, AppIntent::CancelRequested);

    assert_eq!(state.model.position(ids[1]), Some(Vec2::new(10.0, 0.0)));
    assert_eq!(*state.manipulation.gesture(), GestureState::Idle);
    assert_eq!(*state.model.tessellate(quality), *before);
    assert!(!state.can_undo(), "Abgebrochener Drag erzeugt keinen Undo-Schritt");
}

#[test]
fn test_drag_release_commits_single_undo_step() {
    let mut controller = AppController::new();
    let (mut state, ids) = square_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: screen(Vec2::new(0.0, 10.0)),
        },
    );
    for step in 1..=5 {
        send(
            &mut controller,
            &mut state,
            AppIntent::PointerMoved {
                screen_pos: screen(Vec2::new(-(step as f32), 10.0)),
            },
        );
    }
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerReleased {
            screen_pos: screen(Vec2::new(-5.0, 10.0)),
        },
    );
    assert_eq!(state.history.undo_len(), 1);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.model.position(ids[3]), Some(Vec2::new(0.0, 10.0)));

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    let redone = state.model.position(ids[3]).expect("Punkt");
    assert_relative_eq!(redone.x, -5.0, epsilon = 1e-3);
}

#[test]
fn test_delete_selected_clears_selection_and_undo_restores_handle() {
    let mut controller = AppController::new();
    let (mut state, ids) = square_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::SelectControlPointRequested { id: ids[2] },
    );
    send(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);

    assert_eq!(state.model.len(), 3);
    assert!(!state.model.contains(ids[2]));
    assert_eq!(state.manipulation.selection(), None);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.model.index_of(ids[2]), Some(2));
    assert_eq!(state.model.position(ids[2]), Some(Vec2::new(10.0, 10.0)));
}

#[test]
fn test_delete_during_drag_is_rejected_and_drag_continues() {
    let mut controller = AppController::new();
    let (mut state, ids) = square_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: screen(Vec2::ZERO),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: screen(Vec2::new(3.0, 3.0)),
        },
    );
    let revision = state.model.revision();
    let logged_before = state.command_log.len();
    state.ui.status_message = None;
    send(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);

    // genau ein Command, keine zusätzliche Mutation
    assert_eq!(state.command_log.len(), logged_before + 1);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::DeleteSelected)
    ));
    assert_eq!(state.model.revision(), revision);
    assert!(state.model.contains(ids[0]));
    assert!(state.manipulation.is_dragging());
    assert!(state.ui.status_message.is_some());

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerReleased {
            screen_pos: screen(Vec2::new(3.0, 3.0)),
        },
    );
    send(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);
    assert!(!state.model.contains(ids[0]));
}

#[test]
fn test_undo_during_drag_reverts_only_the_drag() {
    let mut controller = AppController::new();
    let (mut state, ids) = square_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: screen(Vec2::new(10.0, 0.0)),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: screen(Vec2::new(14.0, 2.0)),
        },
    );
    send(&mut controller, &mut state, AppIntent::UndoRequested);

    assert!(!state.manipulation.is_dragging());
    assert_eq!(state.model.position(ids[1]), Some(Vec2::new(10.0, 0.0)));
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::CancelGesture)
    ));

    // erst das nächste Undo erreicht die History
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::Undo)
    ));
}

#[test]
fn test_press_between_coincident_points_picks_lower_handle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];
    let first = state.model.push_control_point(Vec2::new(5.0, 5.0));
    let second = state.model.insert_control_point(Vec2::new(5.0, 5.0), 0);
    assert!(first < second);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: screen(Vec2::new(5.5, 5.0)),
        },
    );
    assert_eq!(state.manipulation.selection(), Some(first));
}

#[test]
fn test_add_point_tool_appends_on_miss_and_selects() {
    let mut controller = AppController::new();
    let (mut state, _) = square_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::SetEditorToolRequested {
            tool: EditorTool::AddPoint,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: screen(Vec2::new(30.0, 30.0)),
        },
    );

    assert_eq!(state.model.len(), 5);
    let selected = state.manipulation.selection().expect("neuer Punkt selektiert");
    assert_eq!(state.model.index_of(selected), Some(4));
    let position = state.model.position(selected).expect("Punkt");
    assert_relative_eq!(position.x, 30.0, epsilon = 1e-3);
    assert_relative_eq!(position.y, 30.0, epsilon = 1e-3);
}

#[test]
fn test_select_tool_press_on_empty_space_only_clears_selection() {
    let mut controller = AppController::new();
    let (mut state, ids) = square_state();
    send(
        &mut controller,
        &mut state,
        AppIntent::SelectControlPointRequested { id: ids[0] },
    );

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: screen(Vec2::new(30.0, 30.0)),
        },
    );
    assert_eq!(state.model.len(), 4);
    assert_eq!(state.manipulation.selection(), None);
}

#[test]
fn test_locked_point_rejects_drag_with_status_message() {
    let mut controller = AppController::new();
    let (mut state, ids) = square_state();
    send(
        &mut controller,
        &mut state,
        AppIntent::SelectControlPointRequested { id: ids[1] },
    );
    send(&mut controller, &mut state, AppIntent::ToggleLockRequested);
    assert!(state.model.get(ids[1]).is_some_and(|p| p.locked));

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: screen(Vec2::new(10.0, 0.0)),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: screen(Vec2::new(20.0, 0.0)),
        },
    );

    assert_eq!(state.model.position(ids[1]), Some(Vec2::new(10.0, 0.0)));
    assert_eq!(state.manipulation.selection(), Some(ids[1]));
    assert!(state.ui.status_message.is_some());
}

#[test]
fn test_curve_type_change_is_undoable() {
    let mut controller = AppController::new();
    let (mut state, _) = square_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::CurveTypeChangeRequested {
            curve_type: CurveType::BSpline,
        },
    );
    assert_eq!(state.model.curve_type(), CurveType::BSpline);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.model.curve_type(), CurveType::CatmullRom);
}

#[test]
fn test_insert_after_selected_places_midpoint() {
    let mut controller = AppController::new();
    let (mut state, ids) = square_state();
    send(
        &mut controller,
        &mut state,
        AppIntent::SelectControlPointRequested { id: ids[0] },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::InsertAfterSelectedRequested,
    );

    assert_eq!(state.model.len(), 5);
    let inserted = state.manipulation.selection().expect("neuer Punkt");
    assert_eq!(state.model.index_of(inserted), Some(1));
    assert_eq!(state.model.position(inserted), Some(Vec2::new(5.0, 0.0)));
}

#[test]
fn test_save_without_path_requests_dialog() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::SaveRequested);

    assert!(state.ui.show_save_file_dialog);
    match state.command_log.entries().last() {
        Some(AppCommand::SaveFile { path: None }) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_exit_requested_sets_exit_flag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert!(!state.should_exit);

    send(&mut controller, &mut state, AppIntent::ExitRequested);
    assert!(state.should_exit);
}

#[test]
fn test_load_missing_file_keeps_document_and_reports_error() {
    let mut controller = AppController::new();
    let (mut state, ids) = square_state();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::FileSelected {
            path: "/nonexistent/spline-editor/missing.json".into(),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.model.len(), 4);
    assert!(state.model.contains(ids[0]));
}

#[test]
fn test_save_and_load_roundtrip_through_controller() {
    let mut controller = AppController::new();
    let (mut state, _) = square_state();
    let path = std::env::temp_dir().join(format!(
        "spline_editor_flow_{}.json",
        std::process::id()
    ));
    let path_str = path.to_string_lossy().into_owned();

    send(
        &mut controller,
        &mut state,
        AppIntent::CurveTypeChangeRequested {
            curve_type: CurveType::ClosedBSpline,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::SaveFilePathSelected {
            path: path_str.clone(),
        },
    );
    assert!(!state.is_modified());

    send(&mut controller, &mut state, AppIntent::NewDocumentRequested);
    assert!(state.model.is_empty());
    assert!(!state.can_undo());

    send(
        &mut controller,
        &mut state,
        AppIntent::FileSelected { path: path_str },
    );
    assert_eq!(state.model.len(), 4);
    assert_eq!(state.model.curve_type(), CurveType::ClosedBSpline);
    assert!(!state.is_modified());

    let _ = std::fs::remove_file(path);
}

#[test]
fn test_frame_loop_renders_once_per_batch() {
    let (mut state, ids) = square_state();
    let mut frame_loop = InteractionLoop::new();
    let mut renderer = Renderer::new();
    let mut device = RecordingDevice::default();

    frame_loop.push(
        0.00,
        AppIntent::PointerPressed {
            screen_pos: screen(Vec2::new(10.0, 10.0)),
        },
    );
    for step in 1..=10 {
        frame_loop.push(
            step as f64 * 0.001,
            AppIntent::PointerMoved {
                screen_pos: screen(Vec2::new(10.0 + step as f32, 10.0)),
            },
        );
    }
    frame_loop.push(
        0.02,
        AppIntent::PointerReleased {
            screen_pos: screen(Vec2::new(20.0, 10.0)),
        },
    );

    let output = frame_loop.run_frame(&mut state);
    renderer.render_to(&output.scene, &mut device);

    assert_eq!(device.frames.len(), 1);
    assert!(output.needs_repaint);
    assert_eq!(frame_loop.pending(), 0);
    let moved = state.model.position(ids[2]).expect("Punkt");
    assert_relative_eq!(moved.x, 20.0, epsilon = 1e-3);
    assert_eq!(state.history.undo_len(), 1);
}

#[test]
fn test_idle_frame_requests_no_repaint() {
    let (mut state, _) = square_state();
    let mut frame_loop = InteractionLoop::new();

    let output = frame_loop.run_frame(&mut state);
    assert_eq!(output.processed, 0);
    assert!(!output.needs_repaint);
    assert!(output.scene.has_content());
}

#[test]
fn test_pan_and_zoom_keep_picking_consistent() {
    let mut controller = AppController::new();
    let (mut state, ids) = square_state();

    send(
        &mut controller,
        &mut state,
        AppIntent::CameraZoom {
            factor: 2.0,
            focus_screen: Some(screen(Vec2::new(10.0, 10.0))),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::CameraPan {
            screen_delta: Vec2::new(25.0, -40.0),
        },
    );

    let target = state
        .view
        .camera
        .world_to_screen(state.view.viewport())
        .transform_point(Vec2::new(10.0, 10.0));
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed { screen_pos: target },
    );
    assert_eq!(state.manipulation.selection(), Some(ids[2]));
}

#[test]
fn test_playback_sweeps_marker_along_curve_with_tangent() {
    let (mut state, _) = square_state();
    let mut frame_loop = InteractionLoop::new();
    let mut renderer = Renderer::new();
    let mut device = RecordingDevice::default();

    frame_loop.push(0.0, AppIntent::TogglePlaybackRequested);
    frame_loop.run_frame_at(&mut state, 0.0);
    let output = frame_loop.run_frame_at(&mut state, 2.0);
    renderer.render_to(&output.scene, &mut device);

    let speed = state.options.playback_speed;
    let playhead = output.scene.playhead.expect("Marker während der Wiedergabe");
    assert_relative_eq!(playhead.parameter, 2.0 * speed, epsilon = 1e-5);
    let on_curve = state.model.evaluate(playhead.parameter).expect("Kurve");
    assert_relative_eq!(playhead.position.x, on_curve.x, epsilon = 1e-4);
    assert_relative_eq!(playhead.position.y, on_curve.y, epsilon = 1e-4);
    assert!(playhead.tangent.length() > 0.0);

    let frame = device.frames.last().expect("Frame");
    assert!(matches!(
        frame.last(),
        Some(DrawPrimitive::PointMarker {
            style: MarkerStyle::Playhead,
            ..
        })
    ));

    // Anhalten entfernt den Marker, der Parameter bleibt stehen
    frame_loop.push(2.1, AppIntent::TogglePlaybackRequested);
    let paused = frame_loop.run_frame_at(&mut state, 2.1);
    assert!(paused.scene.playhead.is_none());
    assert_relative_eq!(state.playback.parameter, playhead.parameter, epsilon = 1e-2);
}
