use polyline_arc_editor::{
    AppController, AppIntent, AppState, EditorKey, Measurement, Point, PointHit, Polyline,
    RectangleShape, Segment,
};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn press(controller: &mut AppController, state: &mut AppState, key: EditorKey, shift: bool) {
    send(controller, state, AppIntent::KeyPressed { key, shift });
}

fn drag(controller: &mut AppController, state: &mut AppState, path: &[Point]) {
    let (first, rest) = path.split_first().expect("Pfad darf nicht leer sein");
    send(
        controller,
        state,
        AppIntent::PointerDown {
            pos: *first,
            shift: false,
        },
    );
    for pos in rest {
        send(
            controller,
            state,
            AppIntent::PointerMoved {
                pos: *pos,
                shift: false,
            },
        );
    }
    let last = rest.last().unwrap_or(first);
    send(
        controller,
        state,
        AppIntent::PointerUp {
            pos: *last,
            shift: false,
        },
    );
}

/// Offene Polylinie (0,0) → (100,0) → (100,100) → (0,100).
fn open_square(state: &mut AppState) -> u64 {
    let mut poly = Polyline::new(p(0.0, 0.0));
    poly.segments.push(Segment::line(p(100.0, 0.0)));
    poly.segments.push(Segment::line(p(100.0, 100.0)));
    poly.segments.push(Segment::line(p(0.0, 100.0)));
    state.shapes_mut().insert(Measurement::Polyline(poly))
}

fn polyline(state: &AppState, id: u64) -> &Polyline {
    state
        .shapes
        .get(id)
        .and_then(Measurement::as_polyline)
        .expect("Polylinie sollte existieren")
}

#[test]
fn test_drag_last_point_onto_start_closes_straight() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = open_square(&mut state);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            pos: p(0.0, 100.0),
            shift: false,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: p(40.0, 60.0),
            shift: false,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: p(5.0, 10.0),
            shift: false,
        },
    );

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.drag_close_ring, Some(p(0.0, 0.0)));
    assert_eq!(polyline(&state, id).last_point(), p(0.0, 0.0));

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerUp {
            pos: p(5.0, 10.0),
            shift: false,
        },
    );

    let poly = polyline(&state, id);
    assert!(poly.closed, "Polylinie sollte geschlossen sein");
    assert_eq!(poly.segments.len(), 2, "Gerade Schließkante wird implizit");
    assert_eq!(poly.last_point(), p(100.0, 100.0));
    assert!(state.point_edit.active_drag.is_none());
    assert!(
        state.point_edit.selected.is_none(),
        "Index 3 existiert nach dem Schließen nicht mehr"
    );
}

#[test]
fn test_drag_last_arc_end_onto_start_keeps_explicit_close() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut poly = Polyline::new(p(0.0, 0.0));
    poly.segments.push(Segment::line(p(100.0, 0.0)));
    poly.segments
        .push(Segment::arc(p(0.0, 100.0), p(80.0, 80.0)));
    let id = state.shapes_mut().insert(Measurement::Polyline(poly));

    drag(
        &mut controller,
        &mut state,
        &[p(0.0, 100.0), p(20.0, 50.0), p(3.0, 4.0)],
    );

    let poly = polyline(&state, id);
    assert!(poly.closed);
    assert!(poly.has_explicit_close(), "Bogen-Schließkante bleibt explizit");
    assert_eq!(poly.segments.len(), 2);
    assert_eq!(poly.segments[1].end, p(0.0, 0.0));
    assert_eq!(poly.segments[1].bulge, Some(p(80.0, 80.0)));
}

#[test]
fn test_drag_onto_start_without_enough_segments_stays_open() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut poly = Polyline::new(p(0.0, 0.0));
    poly.segments.push(Segment::line(p(100.0, 0.0)));
    poly.segments.push(Segment::line(p(50.0, 80.0)));
    let id = state.shapes_mut().insert(Measurement::Polyline(poly));

    drag(
        &mut controller,
        &mut state,
        &[p(50.0, 80.0), p(30.0, 40.0), p(4.0, 4.0)],
    );

    let poly = polyline(&state, id);
    assert!(!poly.closed, "Zwei gerade Segmente ergeben keine Fläche");
    assert_eq!(poly.segments.len(), 2);
    assert_eq!(poly.last_point(), p(4.0, 4.0));
    assert_eq!(
        state.point_edit.selected,
        Some(PointHit {
            shape_id: id,
            point_index: 2
        })
    );
}

#[test]
fn test_shift_drag_bypasses_close_snap() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = open_square(&mut state);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            pos: p(0.0, 100.0),
            shift: false,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: p(5.0, 10.0),
            shift: true,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerUp {
            pos: p(5.0, 10.0),
            shift: true,
        },
    );

    let poly = polyline(&state, id);
    assert!(!poly.closed);
    assert_eq!(poly.last_point(), p(5.0, 10.0));
}

#[test]
fn test_drag_is_one_undo_step() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = open_square(&mut state);

    drag(
        &mut controller,
        &mut state,
        &[p(100.0, 0.0), p(110.0, 0.0), p(120.0, -20.0), p(130.0, -30.0)],
    );
    assert_eq!(polyline(&state, id).segments[0].end, p(130.0, -30.0));

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(polyline(&state, id).segments[0].end, p(100.0, 0.0));
    assert!(!state.can_undo());

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(polyline(&state, id).segments[0].end, p(130.0, -30.0));
}

#[test]
fn test_small_movement_selects_instead_of_dragging() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = open_square(&mut state);

    drag(&mut controller, &mut state, &[p(100.0, 0.0), p(102.0, 1.0)]);

    assert_eq!(polyline(&state, id).segments[0].end, p(100.0, 0.0));
    assert_eq!(
        state.point_edit.selected,
        Some(PointHit {
            shape_id: id,
            point_index: 1
        })
    );
    assert!(!state.can_undo(), "Selektieren erzeugt keinen Undo-Schritt");
}

#[test]
fn test_nudge_and_tab_cycle_selected_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = open_square(&mut state);
    drag(&mut controller, &mut state, &[p(100.0, 0.0)]);

    press(&mut controller, &mut state, EditorKey::ArrowRight, false);
    press(&mut controller, &mut state, EditorKey::ArrowUp, true);
    assert_eq!(polyline(&state, id).segments[0].end, p(101.0, 10.0));

    press(&mut controller, &mut state, EditorKey::Tab, false);
    assert_eq!(state.point_edit.selected.map(|h| h.point_index), Some(2));
    press(&mut controller, &mut state, EditorKey::Tab, false);
    press(&mut controller, &mut state, EditorKey::Tab, false);
    assert_eq!(
        state.point_edit.selected.map(|h| h.point_index),
        Some(0),
        "Tab läuft zyklisch um"
    );
    press(&mut controller, &mut state, EditorKey::Tab, true);
    assert_eq!(state.point_edit.selected.map(|h| h.point_index), Some(3));

    press(&mut controller, &mut state, EditorKey::Escape, false);
    assert!(state.point_edit.selected.is_none());
}

#[test]
fn test_delete_selected_point_and_shape_removal() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut poly = Polyline::new(p(0.0, 0.0));
    poly.segments.push(Segment::line(p(100.0, 0.0)));
    let id = state.shapes_mut().insert(Measurement::Polyline(poly));

    drag(&mut controller, &mut state, &[p(100.0, 0.0)]);
    press(&mut controller, &mut state, EditorKey::Delete, false);

    assert!(
        state.shapes.get(id).is_none(),
        "Polylinie ohne Segmente wird gelöscht"
    );
    assert!(state.point_edit.selected.is_none());

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.shape_count(), 1);
}

#[test]
fn test_double_click_removes_point_or_whole_rectangle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let poly_id = open_square(&mut state);
    let rect_id = state
        .shapes_mut()
        .insert(Measurement::Rectangle(RectangleShape {
            id: 0,
            corner_a: p(300.0, 300.0),
            corner_b: p(400.0, 350.0),
        }));

    send(
        &mut controller,
        &mut state,
        AppIntent::DoubleClick {
            pos: p(100.0, 100.0),
            shift: false,
        },
    );
    let poly = polyline(&state, poly_id);
    assert_eq!(poly.segments.len(), 2);
    assert_eq!(poly.segments[1].end, p(0.0, 100.0));

    send(
        &mut controller,
        &mut state,
        AppIntent::DoubleClick {
            pos: p(400.0, 350.0),
            shift: false,
        },
    );
    assert!(state.shapes.get(rect_id).is_none());
    assert_eq!(state.shape_count(), 1);
}

#[test]
fn test_delete_key_falls_back_to_hovered_shape() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = open_square(&mut state);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: p(98.0, 98.0),
            shift: false,
        },
    );
    assert_eq!(state.point_edit.hover.map(|h| h.shape_id), Some(id));

    press(&mut controller, &mut state, EditorKey::Backspace, false);
    assert_eq!(state.shape_count(), 0);
}

#[test]
fn test_move_start_of_closed_polyline() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut explicit = Polyline::new(p(0.0, 0.0));
    explicit.segments.push(Segment::line(p(100.0, 0.0)));
    explicit
        .segments
        .push(Segment::arc(p(0.0, 0.0), p(60.0, 60.0)));
    explicit.closed = true;
    let explicit_id = state.shapes_mut().insert(Measurement::Polyline(explicit));

    drag(
        &mut controller,
        &mut state,
        &[p(0.0, 0.0), p(3.0, 3.0), p(5.0, 5.0)],
    );

    let poly = polyline(&state, explicit_id);
    assert_eq!(poly.start, p(5.0, 5.0));
    assert_eq!(
        poly.segments[1].end,
        p(5.0, 5.0),
        "Explizite Schließkante folgt dem Start"
    );
}
