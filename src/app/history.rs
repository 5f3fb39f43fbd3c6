use crate::core::{PointHit, ShapeStore};
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der Klon des Shape-Stores findet erst beim nächsten `Arc::make_mut()` in
/// einem Use-Case statt.
#[derive(Clone)]
pub struct Snapshot {
    /// Shape-Store (Arc-Klon für O(1)-Snapshot)
    pub shapes: Arc<ShapeStore>,
    /// Selektierter Punkt zum Zeitpunkt des Snapshots
    pub selected: Option<PointHit>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            shapes: state.shapes.clone(), // O(1): nur Arc-Ref-Count erhöhen
            selected: state.point_edit.selected,
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    ///
    /// Hover und laufende Drags verweisen evtl. auf nicht mehr vorhandene Punkte
    /// und werden verworfen.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.shapes = self.shapes;
        state.point_edit.selected = self.selected;
        state.point_edit.hover = None;
        state.point_edit.pending_drag = None;
        state.point_edit.active_drag = None;
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Legt einen vorab gebauten Snapshot ab. Die Übergabe als Wert vermeidet
    /// gleichzeitige mutable/immutable Borrows auf den gesamten `AppState`.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Nimmt den obersten Undo-Eintrag und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Nimmt den obersten Redo-Eintrag und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}
