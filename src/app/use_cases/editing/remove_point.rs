//! Use-Case: Einzelnen Punkt einer abgeschlossenen Form entfernen.

use crate::app::AppState;
use crate::core::{point_count, remove_point, Measurement, PointHit};

/// Entfernt den Punkt `hit`.
///
/// Bei Polylinien wird nur der Punkt entfernt; bleibt nichts übrig, wird die
/// Form gelöscht. Rechtecke und Kreise werden als Ganzes gelöscht.
/// Gibt `true` zurück wenn sich der Shape-Store geändert hat.
pub fn remove_point_at(state: &mut AppState, hit: PointHit) -> bool {
    let Some(shape) = state.shapes.get(hit.shape_id) else {
        log::warn!("Punkt entfernen: Form {} existiert nicht", hit.shape_id);
        return false;
    };
    if hit.point_index >= point_count(shape) {
        log::warn!(
            "Punkt entfernen: Index {} außerhalb von Form {}",
            hit.point_index,
            hit.shape_id
        );
        return false;
    }

    state.record_undo_snapshot();

    let shapes = state.shapes_mut();
    let delete_shape = match shapes.get_mut(hit.shape_id) {
        Some(Measurement::Polyline(poly)) => {
            remove_point(poly, hit.point_index);
            poly.segments.is_empty()
        }
        Some(_) => true,
        None => false,
    };
    if delete_shape {
        shapes.remove(hit.shape_id);
        log::info!("Form {} gelöscht", hit.shape_id);
    } else {
        log::info!(
            "Punkt {} aus Form {} entfernt",
            hit.point_index,
            hit.shape_id
        );
    }

    state.point_edit.forget_shape(hit.shape_id);
    true
}

/// Entfernt den selektierten Punkt, falls vorhanden.
pub fn remove_selected_point(state: &mut AppState) -> bool {
    match state.point_edit.selected {
        Some(hit) => remove_point_at(state, hit),
        None => false,
    }
}
