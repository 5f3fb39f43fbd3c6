//! Use-Case: Selektion per Tab durch die Punkte einer Form weiterschalten.

use crate::app::AppState;
use crate::core::{point_count, PointHit};

/// Schaltet den selektierten Punkt zum nächsten (bzw. vorherigen) Index weiter.
///
/// Der Index läuft über die Punktanzahl der Form hinaus zyklisch um.
pub fn cycle_selection(state: &mut AppState, backwards: bool) -> bool {
    let Some(hit) = state.point_edit.selected else {
        return false;
    };
    let count = state.shapes.get(hit.shape_id).map_or(0, point_count);
    if count == 0 {
        state.point_edit.selected = None;
        return false;
    }
    let index = hit.point_index % count;
    let next = if backwards {
        (index + count - 1) % count
    } else {
        (index + 1) % count
    };
    state.point_edit.selected = Some(PointHit {
        point_index: next,
        ..hit
    });
    log::debug!("Selektion: Form {}, Punkt {}", hit.shape_id, next);
    true
}

/// Hebt die Punkt-Selektion auf.
pub fn clear_selection(state: &mut AppState) -> bool {
    state.point_edit.selected.take().is_some()
}
