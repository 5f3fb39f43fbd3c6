//! Handler für die Punkt-Bearbeitung abgeschlossener Formen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Point, PointHit};

/// Aktualisiert den Hover-Punkt.
pub fn update_hover(state: &mut AppState, pos: Point) -> bool {
    use_cases::selection::update_hover(state, pos)
}

/// Merkt einen getroffenen Punkt für einen Drag vor.
pub fn begin_drag(state: &mut AppState, hit: PointHit, pos: Point) -> bool {
    use_cases::editing::begin_point_drag(state, hit, pos);
    true
}

/// Setzt einen Punkt-Drag fort.
pub fn update_drag(state: &mut AppState, pos: Point, shift: bool) -> bool {
    use_cases::editing::update_point_drag(state, pos, shift)
}

/// Beendet einen Punkt-Drag. Die Position des letzten Moves wird nachgezogen.
pub fn end_drag(state: &mut AppState, pos: Point, shift: bool) -> bool {
    let moved = use_cases::editing::update_point_drag(state, pos, shift);
    use_cases::editing::end_point_drag(state) || moved
}

/// Entfernt einen Punkt.
pub fn remove_point(state: &mut AppState, hit: PointHit) -> bool {
    use_cases::editing::remove_point_at(state, hit)
}

/// Entfernt den selektierten Punkt.
pub fn remove_selected(state: &mut AppState) -> bool {
    use_cases::editing::remove_selected_point(state)
}

/// Verschiebt den selektierten Punkt.
pub fn nudge_selected(state: &mut AppState, delta: Point) -> bool {
    use_cases::editing::nudge_selected(state, delta)
}

/// Schaltet die Selektion weiter.
pub fn cycle_selection(state: &mut AppState, backwards: bool) -> bool {
    use_cases::selection::cycle_selection(state, backwards)
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) -> bool {
    use_cases::selection::clear_selection(state)
}
