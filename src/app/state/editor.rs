use crate::app::tools::{HoldToken, ToolManager};

/// Zustand der Zeichen-Werkzeuge
pub struct EditorToolState {
    /// Werkzeug-Manager (Polylinie, Rechteck, Kreis)
    pub tool_manager: ToolManager,
}

impl Default for EditorToolState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Polylinie aktiv).
    pub fn new() -> Self {
        Self {
            tool_manager: ToolManager::new(),
        }
    }

    /// Halte-Timer, den der Host aktuell planen soll.
    pub fn armed_hold(&self) -> Option<HoldToken> {
        self.tool_manager.active_tool().and_then(|t| t.armed_hold())
    }
}
