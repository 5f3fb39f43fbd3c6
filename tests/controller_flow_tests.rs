use approx::assert_abs_diff_eq;
use polyline_arc_editor::core::circumscribed_circle;
use polyline_arc_editor::{
    AppCommand, AppController, AppIntent, AppState, EditorKey, EventOutcome, Measurement, Point,
};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) -> EventOutcome {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen")
}

fn click(controller: &mut AppController, state: &mut AppState, pos: Point, shift: bool) -> EventOutcome {
    let down = send(controller, state, AppIntent::PointerDown { pos, shift });
    down.merge(send(controller, state, AppIntent::PointerUp { pos, shift }))
}

fn key(controller: &mut AppController, state: &mut AppState, key: EditorKey) -> EventOutcome {
    send(
        controller,
        state,
        AppIntent::KeyPressed { key, shift: false },
    )
}

fn fire_hold(controller: &mut AppController, state: &mut AppState) -> EventOutcome {
    let token = state
        .editor
        .armed_hold()
        .expect("Halte-Timer sollte scharf sein");
    send(controller, state, AppIntent::HoldTimerElapsed { token })
}

fn completed_polyline(outcome: EventOutcome) -> polyline_arc_editor::Polyline {
    match outcome {
        EventOutcome::Completed(Measurement::Polyline(poly)) => poly,
        other => panic!("Abgeschlossene Polylinie erwartet, erhalten: {other:?}"),
    }
}

#[test]
fn test_click_near_start_closes_polyline() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, p(0.0, 0.0), false);
    click(&mut controller, &mut state, p(100.0, 0.0), false);
    click(&mut controller, &mut state, p(100.0, 100.0), false);
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            pos: p(5.0, 5.0),
            shift: false,
        },
    );
    let outcome = send(
        &mut controller,
        &mut state,
        AppIntent::PointerUp {
            pos: p(5.0, 5.0),
            shift: false,
        },
    );

    let poly = completed_polyline(outcome);
    assert!(poly.closed, "Polylinie sollte geschlossen sein");
    assert_eq!(poly.segments.len(), 2, "Gerade Schließkante wird implizit");
    assert_eq!(
        poly.implicit_closing_edge(),
        Some((p(100.0, 100.0), p(0.0, 0.0)))
    );
    assert_eq!(state.shape_count(), 1);
    assert!(!state.editor.tool_manager.is_drawing());
    assert!(state.can_undo());
}

#[test]
fn test_shift_click_near_start_appends_segment() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, p(0.0, 0.0), false);
    click(&mut controller, &mut state, p(100.0, 0.0), false);
    click(&mut controller, &mut state, p(100.0, 100.0), false);
    let outcome = click(&mut controller, &mut state, p(5.0, 5.0), true);

    assert!(!matches!(outcome, EventOutcome::Completed(_)));
    assert!(state.editor.tool_manager.is_drawing());

    let poly = completed_polyline(key(&mut controller, &mut state, EditorKey::Enter));
    assert!(!poly.closed);
    assert_eq!(poly.segments.len(), 3);
    assert_eq!(poly.last_point(), p(5.0, 5.0));
}

#[test]
fn test_hold_drag_forms_tangent_arc() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, p(0.0, 0.0), false);
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            pos: p(10.0, 0.0),
            shift: false,
        },
    );
    fire_hold(&mut controller, &mut state);
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: p(10.0, 10.0),
            shift: false,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerUp {
            pos: p(10.0, 10.0),
            shift: false,
        },
    );

    let poly = completed_polyline(key(&mut controller, &mut state, EditorKey::Enter));
    assert_eq!(poly.segments.len(), 1, "Kurzes Segment wird in-place zum Bogen");
    let seg = poly.segments[0];
    let bulge = seg.bulge.expect("Segment sollte ein Bogen sein");
    let circle = circumscribed_circle(p(0.0, 0.0), bulge, seg.end).expect("Kreis erwartet");
    assert_abs_diff_eq!(circle.center.x, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(circle.center.y, 10.0, epsilon = 1e-6);
    assert_abs_diff_eq!(circle.radius, 10.0, epsilon = 1e-6);
}

#[test]
fn test_escape_without_segments_discards_and_logs_tool_key() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, p(0.0, 0.0), false);
    assert!(state.editor.tool_manager.is_drawing());

    let outcome = key(&mut controller, &mut state, EditorKey::Escape);

    assert!(outcome.is_changed());
    assert!(!state.editor.tool_manager.is_drawing());
    assert_eq!(state.shape_count(), 0, "Leere Polylinie wird verworfen");
    match state.command_log.last() {
        Some(AppCommand::ToolKey {
            key: EditorKey::Escape,
            ..
        }) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_tool_switch_hands_off_polyline_and_draws_rectangle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, p(0.0, 0.0), false);
    click(&mut controller, &mut state, p(50.0, 0.0), false);

    let outcome = send(&mut controller, &mut state, AppIntent::ToolSelected { index: 1 });
    assert!(matches!(outcome, EventOutcome::Completed(Measurement::Polyline(_))));

    click(&mut controller, &mut state, p(200.0, 200.0), false);
    let outcome = click(&mut controller, &mut state, p(260.0, 230.0), false);
    match outcome {
        EventOutcome::Completed(Measurement::Rectangle(rect)) => {
            assert_eq!(rect.corner_a, p(200.0, 200.0));
            assert_eq!(rect.corner_b, p(260.0, 230.0));
            assert_eq!(rect.id, 2, "Zweite Form bekommt ID 2");
        }
        other => panic!("Rechteck erwartet, erhalten: {other:?}"),
    }
    assert_eq!(state.shape_count(), 2);
}

#[test]
fn test_deactivate_and_undo_redo_of_hand_off() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, p(0.0, 0.0), false);
    click(&mut controller, &mut state, p(50.0, 0.0), false);
    let outcome = send(&mut controller, &mut state, AppIntent::ToolDeactivated);
    assert!(matches!(outcome, EventOutcome::Completed(_)));
    assert_eq!(state.shape_count(), 1);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.shape_count(), 0);
    assert!(state.can_redo());

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(state.shape_count(), 1);
}

#[test]
fn test_render_scene_shows_close_ring_while_drawing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, p(0.0, 0.0), false);
    click(&mut controller, &mut state, p(100.0, 0.0), false);
    click(&mut controller, &mut state, p(100.0, 100.0), false);
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: p(10.0, 8.0),
            shift: false,
        },
    );

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.close_snap_ring, Some(p(0.0, 0.0)));
    assert_eq!(scene.effective_cursor, Some(p(0.0, 0.0)));
    assert!(scene.has_content());
}

#[test]
fn test_options_changed_updates_tools() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let options = polyline_arc_editor::EditorOptions {
        close_snap_radius: 2.0,
        ..Default::default()
    };
    send(&mut controller, &mut state, AppIntent::OptionsChanged { options });

    click(&mut controller, &mut state, p(0.0, 0.0), false);
    click(&mut controller, &mut state, p(100.0, 0.0), false);
    click(&mut controller, &mut state, p(100.0, 100.0), false);
    let outcome = click(&mut controller, &mut state, p(5.0, 5.0), false);

    assert!(
        !matches!(outcome, EventOutcome::Completed(_)),
        "Mit kleinem Radius darf nicht geschlossen werden"
    );
    assert_eq!(state.options.close_snap_radius, 2.0);
}
