//! Mapping von Host-Intents auf mutierende App-Commands.
//!
//! Entscheidet, ob ein Pointer-/Tasten-Event an das Zeichen-Werkzeug oder an
//! die Punkt-Bearbeitung abgeschlossener Formen geht. Solange ein Werkzeug eine
//! angefangene Form hat, bekommt es alle Eingaben.

use super::events::EditorKey;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let drawing = state.editor.tool_manager.is_drawing();

    match intent {
        AppIntent::PointerDown { pos, shift } => {
            if drawing {
                return vec![AppCommand::ToolPointerDown { pos, shift }];
            }
            match state.shapes.pick_point(pos, state.options.point_hit_radius) {
                Some(hit) => vec![AppCommand::BeginPointDrag { hit, pos }],
                None if state.point_edit.selected.is_some() => vec![
                    AppCommand::ClearSelection,
                    AppCommand::ToolPointerDown { pos, shift },
                ],
                None => vec![AppCommand::ToolPointerDown { pos, shift }],
            }
        }
        AppIntent::PointerMoved { pos, shift } => {
            if state.point_edit.is_dragging() {
                vec![AppCommand::UpdatePointDrag { pos, shift }]
            } else {
                vec![
                    AppCommand::UpdateHover { pos },
                    AppCommand::ToolPointerMove { pos, shift },
                ]
            }
        }
        AppIntent::PointerUp { pos, shift } => {
            if state.point_edit.is_dragging() {
                vec![AppCommand::EndPointDrag { pos, shift }]
            } else {
                vec![AppCommand::ToolPointerUp { pos, shift }]
            }
        }
        AppIntent::DoubleClick { pos, shift } => {
            if drawing {
                return vec![AppCommand::ToolDoubleClick { pos, shift }];
            }
            match state.shapes.pick_point(pos, state.options.point_hit_radius) {
                Some(hit) => vec![AppCommand::RemovePoint { hit }],
                None => vec![AppCommand::ToolDoubleClick { pos, shift }],
            }
        }
        AppIntent::KeyPressed { key, shift } => map_key(state, drawing, key, shift),
        AppIntent::HoldTimerElapsed { token } => vec![AppCommand::ToolHoldElapsed { token }],
        AppIntent::ToolSelected { index } => vec![AppCommand::SelectTool { index }],
        AppIntent::ToolDeactivated => vec![AppCommand::DeactivateTool],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

/// Tasten: Selektions-Kommandos nur ohne angefangene Form, sonst an das Werkzeug.
fn map_key(state: &AppState, drawing: bool, key: EditorKey, shift: bool) -> Vec<AppCommand> {
    let has_selection = !drawing && state.point_edit.selected.is_some();
    if !has_selection {
        return vec![AppCommand::ToolKey { key, shift }];
    }

    if key.is_delete() {
        return vec![AppCommand::RemoveSelectedPoint];
    }
    if let Some(direction) = key.arrow_direction() {
        let delta = direction * state.options.nudge_distance(shift);
        return vec![AppCommand::NudgeSelectedPoint { delta }];
    }
    match key {
        EditorKey::Tab => vec![AppCommand::CycleSelection { backwards: shift }],
        EditorKey::Escape => vec![AppCommand::ClearSelection],
        _ => vec![AppCommand::ToolKey { key, shift }],
    }
}
