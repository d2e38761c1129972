use crate::app::drag::DragTarget;
use crate::app::{AppCommand, AppIntent, AppState};
use glam::DVec2;

use super::map_intent_to_commands;

fn state_with_chart() -> AppState {
    let mut state = AppState::new();
    state
        .chart
        .set_viewport(DVec2::new(10.0, 20.0), DVec2::new(400.0, 200.0));
    state
}

#[test]
fn pointer_moved_while_idle_maps_to_nothing() {
    let state = state_with_chart();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            screen_pos: DVec2::new(100.0, 100.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn pointer_released_while_idle_maps_to_nothing() {
    let state = state_with_chart();

    assert!(map_intent_to_commands(&state, AppIntent::PointerReleased).is_empty());
    assert!(map_intent_to_commands(&state, AppIntent::EditorClosed).is_empty());
}

#[test]
fn handle_pressed_converts_screen_to_chart_position() {
    let state = state_with_chart();

    // Pixel (110, 70) → lokal (100, 50) → x = 100 · 500 = 50000, y = 100 − 50 · 0.5 = 75
    let commands = map_intent_to_commands(
        &state,
        AppIntent::HandlePressed {
            target: DragTarget::Middle,
            screen_pos: DVec2::new(110.0, 70.0),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::BeginDrag {
            target: DragTarget::Middle,
            chart_pos: DVec2::new(50_000.0, 75.0),
        }]
    );
}

#[test]
fn pointer_moved_while_dragging_maps_to_update() {
    let mut state = state_with_chart();
    state
        .editor
        .begin_drag(DragTarget::YIntercept, DVec2::new(0.0, 50.0));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            screen_pos: DVec2::new(10.0, 20.0),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::UpdateDrag {
            chart_pos: DVec2::new(0.0, 100.0),
        }]
    );
}

#[test]
fn editor_closed_while_dragging_ends_drag() {
    let mut state = state_with_chart();
    state.editor.begin_drag(DragTarget::XIntercept, DVec2::ZERO);

    let commands = map_intent_to_commands(&state, AppIntent::EditorClosed);

    assert_eq!(commands, vec![AppCommand::EndDrag]);
}

#[test]
fn submit_requested_during_drag_ends_drag_first() {
    let mut state = state_with_chart();
    state.editor.begin_drag(DragTarget::Middle, DVec2::ZERO);

    let commands = map_intent_to_commands(&state, AppIntent::SubmitRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::EndDrag));
    assert!(matches!(commands[1], AppCommand::SubmitDraft));
}

#[test]
fn slider_intents_map_one_to_one() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::MiddleYChanged { value: 12.5 });

    assert_eq!(commands, vec![AppCommand::SetMiddleY { value: 12.5 }]);
}
