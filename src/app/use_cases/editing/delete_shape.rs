//! Use-Case: Ganze Form löschen.

use crate::app::AppState;

/// Löscht die Form `shape_id` samt aller Verweise in der Punkt-Bearbeitung.
pub fn delete_shape(state: &mut AppState, shape_id: u64) -> bool {
    if state.shapes.get(shape_id).is_none() {
        log::warn!("Löschen: Form {} existiert nicht", shape_id);
        return false;
    }
    state.record_undo_snapshot();
    state.shapes_mut().remove(shape_id);
    state.point_edit.forget_shape(shape_id);
    log::info!("Form {} gelöscht", shape_id);
    true
}

/// Löscht die Form unter dem Cursor (Hover), falls vorhanden.
pub fn delete_hovered_shape(state: &mut AppState) -> bool {
    match state.point_edit.hover {
        Some(hit) => delete_shape(state, hit.shape_id),
        None => false,
    }
}
