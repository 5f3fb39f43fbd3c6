//! Handler für die Zeichen-Werkzeuge (Polylinie, Rechteck, Kreis).

use crate::app::events::{EditorKey, EventOutcome};
use crate::app::tools::{DrawAction, DrawingTool, HoldToken};
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Point;

/// Pointer-Down an das aktive Werkzeug.
pub fn pointer_down(state: &mut AppState, pos: Point, shift: bool) -> EventOutcome {
    let action = dispatch(state, |tool| tool.on_pointer_down(pos, shift));
    apply_action(state, action)
}

/// Pointer-Move an das aktive Werkzeug.
pub fn pointer_move(state: &mut AppState, pos: Point, shift: bool) -> EventOutcome {
    let action = dispatch(state, |tool| tool.on_pointer_move(pos, shift));
    apply_action(state, action)
}

/// Pointer-Up an das aktive Werkzeug.
pub fn pointer_up(state: &mut AppState, pos: Point, shift: bool) -> EventOutcome {
    let action = dispatch(state, |tool| tool.on_pointer_up(pos, shift));
    apply_action(state, action)
}

/// Doppelklick an das aktive Werkzeug.
pub fn double_click(state: &mut AppState, pos: Point, shift: bool) -> EventOutcome {
    let action = dispatch(state, |tool| tool.on_double_click(pos, shift));
    apply_action(state, action)
}

/// Abgelaufener Halte-Timer.
pub fn hold_elapsed(state: &mut AppState, token: HoldToken) -> EventOutcome {
    let action = dispatch(state, |tool| tool.on_hold_elapsed(token));
    apply_action(state, action)
}

/// Taste an das aktive Werkzeug.
///
/// Ignoriert das Werkzeug eine Löschtaste, wird die Form unter dem Cursor gelöscht.
pub fn key(state: &mut AppState, key: EditorKey, shift: bool) -> EventOutcome {
    let action = dispatch(state, |tool| tool.on_key(key, shift));
    if action == DrawAction::Unhandled && key.is_delete() {
        return EventOutcome::changed_if(use_cases::editing::delete_hovered_shape(state));
    }
    apply_action(state, action)
}

/// Aktiviert ein Werkzeug per Index. Eine angefangene Form des alten Werkzeugs wird übergeben.
pub fn select_tool(state: &mut AppState, index: usize) -> EventOutcome {
    let action = state.editor.tool_manager.set_active(index);
    log::info!("Werkzeug aktiviert: Index {}", index);
    apply_action(state, action).merge(EventOutcome::Changed)
}

/// Deaktiviert das aktive Werkzeug.
pub fn deactivate_tool(state: &mut AppState) -> EventOutcome {
    let action = state.editor.tool_manager.deactivate();
    log::info!("Werkzeug deaktiviert");
    apply_action(state, action).merge(EventOutcome::Changed)
}

fn dispatch(
    state: &mut AppState,
    f: impl FnOnce(&mut dyn DrawingTool) -> DrawAction,
) -> DrawAction {
    match state.editor.tool_manager.active_tool_mut() {
        Some(tool) => f(tool),
        None => DrawAction::Unhandled,
    }
}

/// Übersetzt eine `DrawAction` und übernimmt fertige Formen in den Shape-Store.
fn apply_action(state: &mut AppState, action: DrawAction) -> EventOutcome {
    match action {
        DrawAction::Completed(measurement) => {
            EventOutcome::Completed(use_cases::editing::store_completed_shape(state, measurement))
        }
        DrawAction::Updated => EventOutcome::Changed,
        DrawAction::None | DrawAction::Unhandled => EventOutcome::Nothing,
    }
}
