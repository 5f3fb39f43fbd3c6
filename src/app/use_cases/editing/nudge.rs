//! Use-Case: Selektierten Punkt per Pfeiltaste verschieben.

use crate::app::AppState;
use crate::core::{flatten_points, write_point};
use glam::DVec2;

/// Verschiebt den selektierten Punkt um `delta`.
pub fn nudge_selected(state: &mut AppState, delta: DVec2) -> bool {
    let Some(hit) = state.point_edit.selected else {
        return false;
    };
    let Some(current) = state
        .shapes
        .get(hit.shape_id)
        .and_then(|shape| flatten_points(shape).get(hit.point_index).copied())
    else {
        log::warn!(
            "Verschieben: Punkt {} von Form {} existiert nicht",
            hit.point_index,
            hit.shape_id
        );
        state.point_edit.selected = None;
        return false;
    };

    state.record_undo_snapshot();
    let Some(shape) = state.shapes_mut().get_mut(hit.shape_id) else {
        return false;
    };
    write_point(shape, hit.point_index, current + delta)
}
