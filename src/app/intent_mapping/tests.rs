use crate::app::{AppCommand, AppIntent, AppState};

use super::map_intent_to_commands;

#[test]
fn pointer_pressed_maps_to_begin_drag() {
    let state = AppState::new();
    let screen_pos = glam::Vec2::new(90.0, 560.0);

    let commands = map_intent_to_commands(&state, AppIntent::PointerPressed { screen_pos });

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::BeginDrag { screen_pos: pos } if pos == screen_pos
    ));
}

#[test]
fn pointer_moved_without_drag_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            screen_pos: glam::Vec2::new(10.0, 10.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn pointer_moved_with_drag_maps_to_update_drag() {
    let mut state = AppState::new();
    state.drag.grabbed = Some(1);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            screen_pos: glam::Vec2::new(10.0, 10.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::UpdateDrag { .. }));
}

#[test]
fn pointer_released_maps_to_end_drag() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::PointerReleased);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::EndDrag));
}

#[test]
fn exit_requested_maps_to_request_exit() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ExitRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::RequestExit));
}
