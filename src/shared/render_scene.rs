//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein externer Renderer sie konsumiert.

use super::options::EditorOptions;
use crate::core::{Measurement, Point, PointHit, ShapeStore};
use serde::Serialize;
use std::sync::Arc;

/// Art einer Snap-Hilfslinie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapKind {
    /// Verlängerung der Tangente am offenen Ende
    Tangent,
    /// Senkrecht zur Tangente am offenen Ende
    Perpendicular,
}

/// Aktive Snap-Hilfslinie (von `from` entlang `direction`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SnapGuide {
    /// Ursprung der Hilfslinie (offenes Ende der Polylinie)
    pub from: Point,
    /// Einheitsrichtung der Hilfslinie
    pub direction: Point,
    /// Tangente oder Lot
    pub kind: SnapKind,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Alle abgeschlossenen Formen (Arc für O(1)-Clone pro Frame)
    pub shapes: Arc<ShapeStore>,
    /// Form, die gerade gezeichnet wird
    pub active_shape: Option<Measurement>,
    /// Vorschau-Position des Cursors (nach Snapping)
    pub effective_cursor: Option<Point>,
    /// Einrast-Ring am Startpunkt beim Zeichnen
    pub close_snap_ring: Option<Point>,
    /// Aktive Tangenten-/Lot-Hilfslinie
    pub snap_guide: Option<SnapGuide>,
    /// Punkt unter dem Cursor
    pub hovered_point: Option<PointHit>,
    /// Per Klick selektierter Punkt
    pub selected_point: Option<PointHit>,
    /// Einrast-Ring beim Punkt-Drag
    pub drag_close_ring: Option<Point>,
    /// Laufzeit-Optionen (Radien für Ringe und Hitboxen)
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob irgendetwas zu zeichnen ist.
    pub fn has_content(&self) -> bool {
        !self.shapes.is_empty() || self.active_shape.is_some()
    }
}
