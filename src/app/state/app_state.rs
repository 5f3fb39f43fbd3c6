use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::ShapeStore;
use crate::shared::options::HISTORY_DEPTH;
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{EditorToolState, PointEditState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle abgeschlossenen Formen (Arc für O(1)-Snapshots)
    pub shapes: Arc<ShapeStore>,
    /// Zeichen-Werkzeug-State
    pub editor: EditorToolState,
    /// Punkt-Bearbeitung (Hover, Drag, Selektion)
    pub point_edit: PointEditState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Radien, Schwellen, Schrittweiten)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            shapes: Arc::new(ShapeStore::new()),
            editor: EditorToolState::new(),
            point_edit: PointEditState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(HISTORY_DEPTH),
            options: EditorOptions::default(),
        }
    }

    /// Erstellt einen App-State mit den übergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut state = Self::new();
        state.editor.tool_manager.set_options(&options);
        state.options = options;
        state
    }

    /// Gibt die Anzahl der Formen zurück (für UI-Anzeige)
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Mutable Zugriff auf den Shape-Store (CoW: klont nur wenn ein Snapshot ihn teilt).
    pub fn shapes_mut(&mut self) -> &mut ShapeStore {
        Arc::make_mut(&mut self.shapes)
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
