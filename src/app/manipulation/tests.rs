use super::*;
use crate::core::TessellationQuality;
use approx::assert_relative_eq;

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

const SETTINGS: PickSettings = PickSettings {
    radius_px: 8.0,
    selected_factor: 1.5,
};

fn square_model() -> (SplineModel, Vec<ControlPointId>) {
    let mut model = SplineModel::new();
    let ids = [
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(0.0, 10.0),
    ]
    .into_iter()
    .map(|p| model.push_control_point(p))
    .collect();
    (model, ids)
}

fn mapping(camera: &Camera2D) -> ViewportMapping {
    ViewportMapping::new(camera, VIEWPORT).expect("Viewport nicht leer")
}

fn screen(camera: &Camera2D, world: Vec2) -> Vec2 {
    camera.world_to_screen(VIEWPORT).transform_point(world)
}

#[test]
fn test_hover_follows_pointer() {
    let (mut model, ids) = square_model();
    let camera = Camera2D::new();
    let mut ctl = ManipulationController::new();

    let map = mapping(&camera);
    ctl.pointer_moved(&mut model, &map, &SETTINGS, screen(&camera, Vec2::new(10.5, 0.5)))
        .expect("move");
    assert_eq!(ctl.hovered(), Some(ids[1]));
    assert_eq!(ctl.selection(), None);

    ctl.pointer_moved(&mut model, &map, &SETTINGS, screen(&camera, Vec2::new(5.0, 5.0)))
        .expect("move");
    assert_eq!(*ctl.gesture(), GestureState::Idle);
}

#[test]
fn test_drag_moves_point_by_model_delta_and_commits() {
    let (mut model, ids) = square_model();
    let camera = Camera2D::new();
    let map = mapping(&camera);
    let mut ctl = ManipulationController::new();

    let outcome =
        ctl.pointer_pressed(&model, &map, &SETTINGS, screen(&camera, Vec2::new(10.0, 0.0)));
    assert_eq!(outcome, PressOutcome::DragStarted(ids[1]));
    assert_eq!(ctl.selection(), Some(ids[1]));

    ctl.pointer_moved(&mut model, &map, &SETTINGS, screen(&camera, Vec2::new(15.0, 5.0)))
        .expect("drag");
    let moved = model.position(ids[1]).expect("Punkt");
    assert_relative_eq!(moved.x, 15.0, epsilon = 1e-3);
    assert_relative_eq!(moved.y, 5.0, epsilon = 1e-3);

    let committed = ctl.pointer_released(&model).expect("Änderung");
    assert_eq!(committed.id, ids[1]);
    assert_eq!(committed.from, Vec2::new(10.0, 0.0));
    assert_eq!(committed.to, moved);
    assert_eq!(*ctl.gesture(), GestureState::Idle);
    assert_eq!(ctl.selection(), Some(ids[1]));
}

#[test]
fn test_drag_is_zoom_independent() {
    let (mut model, ids) = square_model();
    let mut camera = Camera2D::new();
    camera.zoom = 4.0;
    camera.look_at(Vec2::new(10.0, 0.0));
    let map = mapping(&camera);
    let mut ctl = ManipulationController::new();

    ctl.pointer_pressed(&model, &map, &SETTINGS, screen(&camera, Vec2::new(10.2, 0.1)));
    ctl.pointer_moved(&mut model, &map, &SETTINGS, screen(&camera, Vec2::new(11.2, 2.1)))
        .expect("drag");
    let moved = model.position(ids[1]).expect("Punkt");
    assert_relative_eq!(moved.x, 11.0, epsilon = 1e-3);
    assert_relative_eq!(moved.y, 2.0, epsilon = 1e-3);
}

#[test]
fn test_cancel_restores_exact_position_and_tessellation() {
    let (mut model, ids) = square_model();
    let quality = TessellationQuality::Tolerance(0.05);
    let before = model.tessellate(quality);
    let camera = Camera2D::new();
    let map = mapping(&camera);
    let mut ctl = ManipulationController::new();

    ctl.pointer_pressed(&model, &map, &SETTINGS, screen(&camera, Vec2::new(10.0, 0.0)));
    ctl.pointer_moved(&mut model, &map, &SETTINGS, screen(&camera, Vec2::new(15.0, 5.0)))
        .expect("drag");
    assert_ne!(model.position(ids[1]), Some(Vec2::new(10.0, 0.0)));

    assert!(ctl.cancel(&mut model));
    assert_eq!(model.position(ids[1]), Some(Vec2::new(10.0, 0.0)));
    assert_eq!(*ctl.gesture(), GestureState::Idle);
    assert_eq!(*model.tessellate(quality), *before);

    // Release nach Abbruch ist ein No-op
    assert!(ctl.pointer_released(&model).is_none());
}

#[test]
fn test_release_without_movement_commits_nothing() {
    let (model, _) = square_model();
    let camera = Camera2D::new();
    let mut ctl = ManipulationController::new();
    ctl.pointer_pressed(&model, &mapping(&camera), &SETTINGS, screen(&camera, Vec2::ZERO));
    assert!(ctl.pointer_released(&model).is_none());
    assert!(!ctl.is_dragging());
}

#[test]
fn test_tie_break_prefers_lower_handle() {
    let mut model = SplineModel::new();
    let first = model.push_control_point(Vec2::new(5.0, 5.0));
    // Zweiter Punkt liegt in der Reihenfolge vorne, hat aber das größere Handle
    let second = model.insert_control_point(Vec2::new(5.0, 5.0), 0);
    assert!(first < second);

    let camera = Camera2D::new();
    let mut ctl = ManipulationController::new();
    let map = mapping(&camera);
    let outcome =
        ctl.pointer_pressed(&model, &map, &SETTINGS, screen(&camera, Vec2::new(5.5, 5.0)));
    assert_eq!(outcome, PressOutcome::DragStarted(first));
}

#[test]
fn test_nearest_point_wins() {
    let mut model = SplineModel::new();
    model.push_control_point(Vec2::new(0.0, 0.0));
    let near = model.push_control_point(Vec2::new(1.0, 0.0));
    assert_eq!(
        pick_control_point(&model, Vec2::new(0.8, 0.0), 2.0, None),
        Some(near)
    );
}

#[test]
fn test_press_on_empty_space_clears_selection() {
    let (model, ids) = square_model();
    let camera = Camera2D::new();
    let map = mapping(&camera);
    let mut ctl = ManipulationController::new();
    ctl.select(&model, ids[0]).expect("select");

    let outcome =
        ctl.pointer_pressed(&model, &map, &SETTINGS, screen(&camera, Vec2::new(5.0, 5.0)));
    assert_eq!(outcome, PressOutcome::Missed);
    assert_eq!(ctl.selection(), None);
}

#[test]
fn test_selected_point_has_enlarged_pick_radius() {
    let (model, ids) = square_model();
    let camera = Camera2D::new();
    let map = mapping(&camera);
    // 3 px pro Einheit → 3.5 Einheiten = 10.5 px (> 8 px, < 12 px)
    let press_at = screen(&camera, Vec2::new(-3.5, 0.0));

    let mut ctl = ManipulationController::new();
    assert_eq!(ctl.pointer_pressed(&model, &map, &SETTINGS, press_at), PressOutcome::Missed);

    ctl.select(&model, ids[0]).expect("select");
    assert_eq!(
        ctl.pointer_pressed(&model, &map, &SETTINGS, press_at),
        PressOutcome::DragStarted(ids[0])
    );
}

#[test]
fn test_locked_point_is_selected_but_not_dragged() {
    let (mut model, ids) = square_model();
    model.set_control_point_locked(ids[2], true).expect("lock");
    let camera = Camera2D::new();
    let map = mapping(&camera);
    let mut ctl = ManipulationController::new();

    let outcome =
        ctl.pointer_pressed(&model, &map, &SETTINGS, screen(&camera, Vec2::new(10.0, 10.0)));
    assert_eq!(outcome, PressOutcome::SelectedLocked(ids[2]));
    assert!(!ctl.is_dragging());

    ctl.pointer_moved(&mut model, &map, &SETTINGS, screen(&camera, Vec2::new(20.0, 20.0)))
        .expect("move");
    assert_eq!(model.position(ids[2]), Some(Vec2::new(10.0, 10.0)));
}

#[test]
fn test_out_of_order_events_are_noops() {
    let (mut model, _) = square_model();
    let camera = Camera2D::new();
    let mut ctl = ManipulationController::new();
    let revision = model.revision();

    assert!(ctl.pointer_released(&model).is_none());
    assert!(!ctl.cancel(&mut model));
    ctl.pointer_moved(&mut model, &mapping(&camera), &SETTINGS, screen(&camera, Vec2::ZERO))
        .expect("move");
    assert_eq!(model.revision(), revision);
}

#[test]
fn test_second_press_during_drag_is_ignored() {
    let (model, ids) = square_model();
    let camera = Camera2D::new();
    let map = mapping(&camera);
    let mut ctl = ManipulationController::new();
    ctl.pointer_pressed(&model, &map, &SETTINGS, screen(&camera, Vec2::ZERO));
    let outcome =
        ctl.pointer_pressed(&model, &map, &SETTINGS, screen(&camera, Vec2::new(10.0, 0.0)));
    assert_eq!(outcome, PressOutcome::Ignored);
    assert_eq!(ctl.selection(), Some(ids[0]));
}

#[test]
fn test_removed_point_is_dropped_from_selection() {
    let (mut model, ids) = square_model();
    let mut ctl = ManipulationController::new();
    ctl.select(&model, ids[3]).expect("select");
    model.remove_control_point(ids[3]).expect("remove");
    ctl.sync_with_model(&model);
    assert_eq!(ctl.selection(), None);
}

#[test]
fn test_explicit_select_is_rejected_while_dragging() {
    let (model, ids) = square_model();
    let camera = Camera2D::new();
    let map = mapping(&camera);
    let mut ctl = ManipulationController::new();
    ctl.pointer_pressed(&model, &map, &SETTINGS, screen(&camera, Vec2::ZERO));
    assert!(ctl.is_dragging());

    assert_eq!(ctl.select(&model, ids[2]), Err(SplineError::GestureInProgress));
    assert!(ctl.is_dragging());
    assert_eq!(ctl.selection(), Some(ids[0]));
}

#[test]
fn test_drag_of_vanished_point_ends_gesture() {
    let (mut model, ids) = square_model();
    let camera = Camera2D::new();
    let map = mapping(&camera);
    let mut ctl = ManipulationController::new();
    ctl.pointer_pressed(&model, &map, &SETTINGS, screen(&camera, Vec2::ZERO));
    model.remove_control_point(ids[0]).expect("remove");

    let result = ctl.pointer_moved(&mut model, &map, &SETTINGS, screen(&camera, Vec2::ONE));
    assert_eq!(result, Err(SplineError::UnknownHandle(ids[0])));
    assert!(!ctl.is_dragging());
    assert_eq!(ctl.selection(), None);
}

#[test]
fn test_empty_viewport_cannot_be_mapped() {
    let camera = Camera2D::new();
    assert!(ViewportMapping::new(&camera, Vec2::ZERO).is_err());
}
