use glam::DVec2;
use impact_curve_editor::{AppCommand, AppController, AppIntent, AppState, DragTarget};

/// Chart bei (0, 0) mit 400×200 Pixeln: 500 Funding bzw. 0.5 Impact pro Pixel.
fn state_with_chart(controller: &mut AppController) -> AppState {
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ChartResized {
                origin: DVec2::ZERO,
                size: DVec2::new(400.0, 200.0),
            },
        )
        .expect("ChartResized sollte ohne Fehler durchlaufen");
    state
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

#[test]
fn test_y_drag_clamps_at_hundred() {
    let mut controller = AppController::new();
    let mut state = state_with_chart(&mut controller);
    assert_eq!(state.editor.draft().y_intercept, 85.0);

    // Pixel-y 100 → Impact 50
    send(
        &mut controller,
        &mut state,
        AppIntent::HandlePressed {
            target: DragTarget::YIntercept,
            screen_pos: DVec2::new(0.0, 100.0),
        },
    );
    assert!(state.pointer_capture_active());

    // +10 Impact
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: DVec2::new(0.0, 80.0),
        },
    );
    assert_eq!(state.editor.draft().y_intercept, 95.0);

    // Noch einmal +10 → geklemmt
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: DVec2::new(0.0, 60.0),
        },
    );
    assert_eq!(state.editor.draft().y_intercept, 100.0);

    send(&mut controller, &mut state, AppIntent::PointerReleased);
    assert!(!state.pointer_capture_active());
}

#[test]
fn test_moves_after_release_are_ignored() {
    let mut controller = AppController::new();
    let mut state = state_with_chart(&mut controller);

    send(
        &mut controller,
        &mut state,
        AppIntent::HandlePressed {
            target: DragTarget::Middle,
            screen_pos: DVec2::new(50.0, 110.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::PointerReleased);
    let before = state.editor.draft().clone();
    let logged = state.command_log.entries().len();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: DVec2::new(300.0, 10.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::PointerReleased);

    assert_eq!(state.editor.draft(), &before);
    assert_eq!(state.command_log.entries().len(), logged, "Idle-Events erzeugen keine Commands");
}

#[test]
fn test_x_drag_rescales_untouched_midpoint() {
    let mut controller = AppController::new();
    let mut state = state_with_chart(&mut controller);

    // Pixel-x 100 → 50000, Pixel-x 160 → 80000
    send(
        &mut controller,
        &mut state,
        AppIntent::HandlePressed {
            target: DragTarget::XIntercept,
            screen_pos: DVec2::new(100.0, 200.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: DVec2::new(160.0, 190.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::PointerReleased);

    let draft = state.editor.draft();
    assert_eq!(draft.x_intercept, 80_000.0);
    assert_eq!(draft.middle_point.x, 40_000.0);
    assert_eq!(draft.y_intercept, 85.0);
}

#[test]
fn test_x_drag_shifts_manually_placed_midpoint() {
    let mut controller = AppController::new();
    let mut state = state_with_chart(&mut controller);
    send(
        &mut controller,
        &mut state,
        AppIntent::MiddleXChanged { value: 10_000.0 },
    );
    assert!(state.editor.midpoint_manually_set());

    send(
        &mut controller,
        &mut state,
        AppIntent::HandlePressed {
            target: DragTarget::XIntercept,
            screen_pos: DVec2::new(100.0, 200.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: DVec2::new(160.0, 200.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::PointerReleased);

    let draft = state.editor.draft();
    assert_eq!(draft.x_intercept, 80_000.0);
    assert_eq!(draft.middle_point.x, 25_000.0);
}

#[test]
fn test_x_drag_far_outside_chart_stays_at_bound() {
    let mut controller = AppController::new();
    let mut state = state_with_chart(&mut controller);

    send(
        &mut controller,
        &mut state,
        AppIntent::HandlePressed {
            target: DragTarget::XIntercept,
            screen_pos: DVec2::new(100.0, 200.0),
        },
    );
    // Globale Bewegung weit außerhalb des Charts
    for px in [1_000.0, 2_000.0, 5_000.0] {
        send(
            &mut controller,
            &mut state,
            AppIntent::PointerMoved {
                screen_pos: DVec2::new(px, 200.0),
            },
        );
        assert_eq!(state.editor.draft().x_intercept, 200_000.0);
    }
    for px in [-1_000.0, -3_000.0] {
        send(
            &mut controller,
            &mut state,
            AppIntent::PointerMoved {
                screen_pos: DVec2::new(px, 200.0),
            },
        );
        assert_eq!(state.editor.draft().x_intercept, 0.0);
    }
    assert!(state.editor.draft().is_valid());
}

#[test]
fn test_editor_closed_releases_pointer_capture() {
    let mut controller = AppController::new();
    let mut state = state_with_chart(&mut controller);

    send(
        &mut controller,
        &mut state,
        AppIntent::HandlePressed {
            target: DragTarget::Middle,
            screen_pos: DVec2::new(50.0, 110.0),
        },
    );
    assert!(state.pointer_capture_active());

    send(&mut controller, &mut state, AppIntent::EditorClosed);

    assert!(!state.pointer_capture_active());
    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::EndDrag => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_zero_sized_chart_produces_no_nan() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    send(
        &mut controller,
        &mut state,
        AppIntent::ChartResized {
            origin: DVec2::ZERO,
            size: DVec2::ZERO,
        },
    );

    send(
        &mut controller,
        &mut state,
        AppIntent::HandlePressed {
            target: DragTarget::Middle,
            screen_pos: DVec2::new(10.0, 10.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: DVec2::new(90.0, 40.0),
        },
    );

    let draft = state.editor.draft();
    assert!(draft.middle_point.is_finite());
    assert!(draft.is_valid());
}
