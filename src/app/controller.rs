//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState, EventOutcome};
use crate::shared::RenderScene;

/// Orchestriert Host-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        intent: AppIntent,
    ) -> anyhow::Result<EventOutcome> {
        let commands = self.map_intent_to_commands(state, intent);
        let mut outcome = EventOutcome::Nothing;
        for command in commands {
            outcome = outcome.merge(self.handle_command(state, command)?);
        }

        Ok(outcome)
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<EventOutcome> {
        state.command_log.record(&command);
        use super::handlers;
        use EventOutcome as O;

        let outcome = match command {
            // === Zeichen-Werkzeug ===
            AppCommand::ToolPointerDown { pos, shift } => {
                handlers::drawing::pointer_down(state, pos, shift)
            }
            AppCommand::ToolPointerMove { pos, shift } => {
                handlers::drawing::pointer_move(state, pos, shift)
            }
            AppCommand::ToolPointerUp { pos, shift } => {
                handlers::drawing::pointer_up(state, pos, shift)
            }
            AppCommand::ToolDoubleClick { pos, shift } => {
                handlers::drawing::double_click(state, pos, shift)
            }
            AppCommand::ToolKey { key, shift } => handlers::drawing::key(state, key, shift),
            AppCommand::ToolHoldElapsed { token } => handlers::drawing::hold_elapsed(state, token),
            AppCommand::SelectTool { index } => handlers::drawing::select_tool(state, index),
            AppCommand::DeactivateTool => handlers::drawing::deactivate_tool(state),

            // === Punkt-Bearbeitung ===
            AppCommand::UpdateHover { pos } => {
                O::changed_if(handlers::point_edit::update_hover(state, pos))
            }
            AppCommand::BeginPointDrag { hit, pos } => {
                O::changed_if(handlers::point_edit::begin_drag(state, hit, pos))
            }
            AppCommand::UpdatePointDrag { pos, shift } => {
                O::changed_if(handlers::point_edit::update_drag(state, pos, shift))
            }
            AppCommand::EndPointDrag { pos, shift } => {
                O::changed_if(handlers::point_edit::end_drag(state, pos, shift))
            }
            AppCommand::RemovePoint { hit } => {
                O::changed_if(handlers::point_edit::remove_point(state, hit))
            }
            AppCommand::RemoveSelectedPoint => {
                O::changed_if(handlers::point_edit::remove_selected(state))
            }
            AppCommand::NudgeSelectedPoint { delta } => {
                O::changed_if(handlers::point_edit::nudge_selected(state, delta))
            }
            AppCommand::CycleSelection { backwards } => {
                O::changed_if(handlers::point_edit::cycle_selection(state, backwards))
            }
            AppCommand::ClearSelection => O::changed_if(handlers::point_edit::clear_selection(state)),

            // === History & Optionen ===
            AppCommand::Undo => O::changed_if(handlers::history::undo(state)),
            AppCommand::Redo => O::changed_if(handlers::history::redo(state)),
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, options);
                O::Changed
            }
        };

        Ok(outcome)
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
