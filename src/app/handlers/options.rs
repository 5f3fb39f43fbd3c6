//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen in State und Werkzeuge.
///
/// Persistiert wird durch den Host (`EditorOptions::save_to_file`).
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.editor.tool_manager.set_options(&options);
    state.options = options;
    log::info!("Optionen übernommen");
}
