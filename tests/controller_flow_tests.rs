use approx::assert_relative_eq;
use bezier_drag_demo::{AppCommand, AppController, AppIntent, AppState, DemoOptions};
use glam::Vec2;

/// Screen-Position von P0 (-0.75, -0.75) im 720×640-Standard-Viewport.
const P0_SCREEN: Vec2 = Vec2::new(90.0, 560.0);

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

#[test]
fn test_press_on_point_grabs_it_and_motion_moves_it() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: P0_SCREEN + Vec2::new(3.0, -2.0),
        },
    );
    assert_eq!(state.drag.grabbed, Some(0));

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(360.0, 320.0),
        },
    );

    let p0 = state.curve.control_points().as_array()[0];
    assert_relative_eq!(p0.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(p0.y, 0.0, epsilon = 1e-6);
    // Erste Abtastung liegt immer auf P0
    assert_eq!(state.curve.sampled().points()[0], p0);

    send(&mut controller, &mut state, AppIntent::PointerReleased);
    assert_eq!(state.drag.grabbed, None);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(10.0, 10.0),
        },
    );
    assert_eq!(state.curve.control_points().as_array()[0], p0);
}

#[test]
fn test_press_on_empty_space_grabs_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = *state.curve.control_points();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(360.0, 320.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(100.0, 100.0),
        },
    );

    assert_eq!(state.drag.grabbed, None);
    assert_eq!(*state.curve.control_points(), before);

    // Bewegung ohne Drag erzeugt keinen Command
    let logged_moves = state
        .command_log
        .entries()
        .iter()
        .filter(|c| matches!(c, AppCommand::UpdateDrag { .. }))
        .count();
    assert_eq!(logged_moves, 0);
}

#[test]
fn test_drag_outside_viewport_is_clamped() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: P0_SCREEN,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(-250.0, 900.0),
        },
    );

    assert_eq!(
        state.curve.control_points().as_array()[0],
        Vec2::new(-1.0, -1.0)
    );
}

#[test]
fn test_resize_changes_hit_test_mapping() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(
        &mut controller,
        &mut state,
        AppIntent::ViewportResized {
            size: [1000.0, 500.0],
        },
    );
    // P2 (0.75, -0.75) liegt jetzt bei (875, 437.5)
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(875.0, 437.5),
        },
    );

    assert_eq!(state.drag.grabbed, Some(2));
}

#[test]
fn test_degenerate_resize_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = state.view.viewport;

    send(
        &mut controller,
        &mut state,
        AppIntent::ViewportResized { size: [0.0, 480.0] },
    );

    assert_eq!(state.view.viewport, before);
}

#[test]
fn test_reset_restores_initial_points_and_releases_grab() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: P0_SCREEN,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(200.0, 200.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::ResetCurveRequested);

    assert_eq!(state.drag.grabbed, None);
    assert_eq!(
        *state.curve.control_points(),
        bezier_drag_demo::ControlPoints::default()
    );
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::ResetControlPoints)
    ));
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    send(&mut controller, &mut state, AppIntent::ExitRequested);

    assert!(state.should_exit);
    match state.command_log.entries().last() {
        Some(AppCommand::RequestExit) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_options_dialog_and_live_options() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::OpenOptionsRequested);
    assert!(state.show_options_dialog);

    let mut options = DemoOptions::default();
    options.hit_box_size_px = 40.0;
    send(
        &mut controller,
        &mut state,
        AppIntent::OptionsChanged {
            options: options.clone(),
        },
    );
    assert_eq!(state.options, options);

    // Größere Hitbox greift auch 15 px neben dem Punkt
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: P0_SCREEN + Vec2::new(15.0, 15.0),
        },
    );
    assert_eq!(state.drag.grabbed, Some(0));

    send(&mut controller, &mut state, AppIntent::CloseOptionsRequested);
    assert!(!state.show_options_dialog);
}

#[test]
fn test_render_scene_reflects_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: P0_SCREEN,
        },
    );

    let scene = controller.build_render_scene(&state, [720.0, 640.0]);

    assert_eq!(scene.grabbed_point, Some(0));
    assert_eq!(scene.control_points, *state.curve.control_points().as_array());
    assert_eq!(scene.curve_points, *state.curve.sampled().as_array());
    assert_eq!(scene.viewport_size, [720.0, 640.0]);
    assert!(scene.has_area());
}

#[test]
fn test_process_frame_scene_shows_input_of_same_frame() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let scene = controller.process_frame(
        &mut state,
        vec![
            AppIntent::ViewportResized {
                size: [720.0, 640.0],
            },
            AppIntent::PointerPressed {
                screen_pos: P0_SCREEN,
            },
            AppIntent::PointerMoved {
                screen_pos: Vec2::new(360.0, 320.0),
            },
        ],
        [720.0, 640.0],
    );

    assert_eq!(scene.grabbed_point, Some(0));
    assert_relative_eq!(scene.control_points[0].x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(scene.control_points[0].y, 0.0, epsilon = 1e-6);
    assert_eq!(scene.curve_points[0], scene.control_points[0]);
    assert_eq!(scene.curve_points, *state.curve.sampled().as_array());
}

#[test]
fn test_process_frame_release_in_same_frame_clears_grab() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let scene = controller.process_frame(
        &mut state,
        vec![
            AppIntent::PointerPressed {
                screen_pos: P0_SCREEN,
            },
            AppIntent::PointerReleased,
        ],
        [720.0, 640.0],
    );

    assert_eq!(scene.grabbed_point, None);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::EndDrag)
    ));
}
