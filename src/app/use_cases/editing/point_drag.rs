//! Use-Case: Punkt einer abgeschlossenen Form per Drag verschieben.
//!
//! Drücken merkt den Punkt nur vor. Erst nach Überschreiten der Drag-Schwelle
//! wird verschoben; bleibt die Bewegung darunter, selektiert das Loslassen den Punkt.

use crate::app::state::{ActiveDrag, PendingDrag};
use crate::app::AppState;
use crate::core::point_model::flatten_polyline;
use crate::core::{point_count, write_point, Measurement, Point, PointHit};

/// Merkt einen getroffenen Punkt für einen möglichen Drag vor.
pub fn begin_point_drag(state: &mut AppState, hit: PointHit, pos: Point) {
    state.point_edit.pending_drag = Some(PendingDrag {
        hit,
        press_pos: pos,
    });
    state.point_edit.active_drag = None;
    state.point_edit.hover = Some(hit);
}

/// Setzt einen Punkt-Drag fort. Gibt `true` zurück wenn eine Form verändert wurde.
pub fn update_point_drag(state: &mut AppState, pos: Point, shift: bool) -> bool {
    if let Some(pending) = state.point_edit.pending_drag {
        if pos.distance(pending.press_pos) <= state.options.drag_threshold {
            return false;
        }
        // Snapshot VOR der ersten Mutation
        state.record_undo_snapshot();
        state.point_edit.pending_drag = None;
        state.point_edit.active_drag = Some(ActiveDrag {
            hit: pending.hit,
            close_ring: None,
        });
        log::debug!(
            "Punkt-Drag gestartet: Form {}, Punkt {}",
            pending.hit.shape_id,
            pending.hit.point_index
        );
    }

    let Some(drag) = state.point_edit.active_drag else {
        return false;
    };
    let radius = state.options.close_snap_radius;
    let Some(shape) = state.shapes_mut().get_mut(drag.hit.shape_id) else {
        log::warn!("Drag auf unbekannte Form {}", drag.hit.shape_id);
        state.point_edit.active_drag = None;
        return false;
    };

    let (target, ring) = drag_close_snap(shape, drag.hit.point_index, pos, shift, radius);
    let written = write_point(shape, drag.hit.point_index, target);
    state.point_edit.active_drag = Some(ActiveDrag {
        close_ring: ring,
        ..drag
    });
    written
}

/// Beendet einen Punkt-Drag.
///
/// Ohne aktiven Drag wird der vorgemerkte Punkt selektiert. Mit aktivem
/// Einrast-Ring wird die Polylinie geschlossen.
pub fn end_point_drag(state: &mut AppState) -> bool {
    if let Some(pending) = state.point_edit.pending_drag.take() {
        state.point_edit.selected = Some(pending.hit);
        log::debug!(
            "Punkt selektiert: Form {}, Punkt {}",
            pending.hit.shape_id,
            pending.hit.point_index
        );
        return true;
    }
    let Some(drag) = state.point_edit.active_drag.take() else {
        return false;
    };

    if drag.close_ring.is_some() {
        if let Some(poly) = state
            .shapes_mut()
            .get_mut(drag.hit.shape_id)
            .and_then(Measurement::as_polyline_mut)
        {
            poly.closed = true;
            poly.normalize_closing();
            poly.demote_degenerate_close();
            if poly.closed {
                log::info!("Polylinie {} per Drag geschlossen", poly.id);
            }
        }
    }

    let still_valid = state
        .shapes
        .get(drag.hit.shape_id)
        .is_some_and(|shape| drag.hit.point_index < point_count(shape));
    state.point_edit.selected = still_valid.then_some(drag.hit);
    log::info!(
        "Punkt-Drag abgeschlossen: Form {}, Punkt {}",
        drag.hit.shape_id,
        drag.hit.point_index
    );
    true
}

/// Gegenseitiger Schließ-Snap zwischen Startpunkt und letztem Endpunkt einer offenen Polylinie.
///
/// Es gilt dieselbe Mindestzahl an Segmenten wie beim Zeichnen
/// ([`crate::core::Polyline::can_close_onto_start`]). Gibt Zielposition und Einrast-Ring zurück.
fn drag_close_snap(
    shape: &Measurement,
    index: usize,
    pos: Point,
    shift: bool,
    radius: f64,
) -> (Point, Option<Point>) {
    let Some(poly) = shape.as_polyline() else {
        return (pos, None);
    };
    if shift || !poly.can_close_onto_start() {
        return (pos, None);
    }
    let last_index = flatten_polyline(poly).len() - 1;
    let partner = if index == last_index {
        poly.start
    } else if index == 0 {
        poly.last_point()
    } else {
        return (pos, None);
    };
    if pos.distance(partner) <= radius {
        (partner, Some(partner))
    } else {
        (pos, None)
    }
}
