use crate::core::{Point, PointHit};

/// Gegriffener Punkt, der sich noch nicht weit genug bewegt hat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingDrag {
    /// Getroffener Punkt
    pub hit: PointHit,
    /// Position beim Drücken
    pub press_pos: Point,
}

/// Laufender Punkt-Drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    /// Gezogener Punkt
    pub hit: PointHit,
    /// Einrast-Ring (Start ↔ letzter Endpunkt), falls aktiv
    pub close_ring: Option<Point>,
}

/// Zustand der Punkt-Bearbeitung abgeschlossener Formen
#[derive(Debug, Clone, Default)]
pub struct PointEditState {
    /// Punkt unter dem Cursor
    pub hover: Option<PointHit>,
    /// Gedrückt, aber Drag-Schwelle noch nicht überschritten
    pub pending_drag: Option<PendingDrag>,
    /// Aktiver Drag
    pub active_drag: Option<ActiveDrag>,
    /// Selektierter Punkt (Pfeiltasten, Tab, Entf)
    pub selected: Option<PointHit>,
}

impl PointEditState {
    /// Erstellt einen leeren Bearbeitungszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// True solange ein Punkt gegriffen ist (wartend oder aktiv).
    pub fn is_dragging(&self) -> bool {
        self.pending_drag.is_some() || self.active_drag.is_some()
    }

    /// Vergisst alle Verweise auf die Form `shape_id`.
    pub fn forget_shape(&mut self, shape_id: u64) {
        if self.hover.is_some_and(|h| h.shape_id == shape_id) {
            self.hover = None;
        }
        if self.selected.is_some_and(|h| h.shape_id == shape_id) {
            self.selected = None;
        }
        if self.pending_drag.is_some_and(|d| d.hit.shape_id == shape_id) {
            self.pending_drag = None;
        }
        if self.active_drag.is_some_and(|d| d.hit.shape_id == shape_id) {
            self.active_drag = None;
        }
    }
}
