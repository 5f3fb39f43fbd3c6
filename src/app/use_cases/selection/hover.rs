//! Use-Case: Hover-Punkt unter dem Cursor bestimmen.

use crate::app::AppState;
use crate::core::Point;

/// Aktualisiert den Hover-Punkt. Gibt `true` zurück wenn er sich geändert hat.
pub fn update_hover(state: &mut AppState, pos: Point) -> bool {
    let hit = state.shapes.pick_point(pos, state.options.point_hit_radius);
    let changed = hit != state.point_edit.hover;
    state.point_edit.hover = hit;
    changed
}
