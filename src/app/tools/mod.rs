//! Trait-basiertes Werkzeug-System für Zeichen-Werkzeuge.
//!
//! Jedes Werkzeug implementiert den `DrawingTool`-Trait und wird beim
//! `ToolManager` registriert. Werkzeuge liefern fertige Formen als reine Daten
//! (`DrawAction::Completed`), das Einfügen erfolgt zentral im Handler.

/// Kreis-Werkzeug (Mittelpunkt, Randpunkt).
pub mod circle;
/// DrawingTool-Trait: Schnittstelle für alle Zeichen-Werkzeuge.
mod drawing_tool;
/// Polylinien-Werkzeug mit Halten-Ziehen für Kreisbögen.
pub mod polyline;
/// Rechteck-Werkzeug (zwei diagonale Ecken).
pub mod rectangle;

pub use drawing_tool::DrawingTool;

use crate::core::{Measurement, Point};
use crate::shared::{EditorOptions, SnapGuide};

// ── Typen ────────────────────────────────────────────────────────

/// Ergebnis eines Events im Werkzeug.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawAction {
    /// Nichts passiert
    None,
    /// Interner Zustand geändert (Vorschau neu zeichnen)
    Updated,
    /// Form fertig, an den Shape-Store übergeben
    Completed(Measurement),
    /// Event nicht verarbeitet, Aufrufer darf eine Alternative ausführen
    Unhandled,
}

/// Identität eines scharfen Halte-Timers.
///
/// Der Host plant den Timer und liefert das Token nach Ablauf zurück. Ein Token
/// ist nur gültig, solange Geste und Segment noch dieselben sind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoldToken {
    /// Fortlaufende Gesten-Nummer des Werkzeugs
    pub gesture: u64,
    /// Segment, das mit dem Klick angelegt wurde
    pub segment_index: usize,
    /// Klick war ein Schließ-Klick nahe dem Startpunkt
    pub closing: bool,
}

/// Preview-Daten für das Rendering.
#[derive(Debug, Clone, Default)]
pub struct ToolPreview {
    /// Angefangene Form
    pub active_shape: Option<Measurement>,
    /// Cursor nach Snapping
    pub effective_cursor: Option<Point>,
    /// Einrast-Ring am Startpunkt
    pub close_snap_ring: Option<Point>,
    /// Tangenten-/Lot-Hilfslinie
    pub snap_guide: Option<SnapGuide>,
}

// ── ToolManager ──────────────────────────────────────────────────

/// Verwaltet registrierte Zeichen-Werkzeuge und den aktiven Tool-Index.
pub struct ToolManager {
    tools: Vec<Box<dyn DrawingTool>>,
    active_index: Option<usize>,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolManager {
    /// Erstellt einen ToolManager mit den Standard-Werkzeugen; die Polylinie ist aktiv.
    pub fn new() -> Self {
        let mut manager = Self {
            tools: Vec::new(),
            active_index: None,
        };
        manager.register(Box::new(polyline::PolylineTool::new()));
        manager.register(Box::new(rectangle::RectangleTool::new()));
        manager.register(Box::new(circle::CircleTool::new()));
        manager.active_index = Some(0);
        manager
    }

    /// Registriert ein neues Werkzeug.
    pub fn register(&mut self, tool: Box<dyn DrawingTool>) {
        self.tools.push(tool);
    }

    /// Gibt die Anzahl registrierter Tools zurück.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Gibt Name und Index aller registrierten Tools zurück.
    pub fn tool_names(&self) -> Vec<(usize, &str)> {
        self.tools
            .iter()
            .enumerate()
            .map(|(i, t)| (i, t.name()))
            .collect()
    }

    /// Setzt das aktive Werkzeug per Index.
    ///
    /// Das bisherige Werkzeug wird deaktiviert; dessen Ergebnis (ggf. eine
    /// übergebene Form) wird zurückgegeben.
    pub fn set_active(&mut self, index: usize) -> DrawAction {
        if index >= self.tools.len() {
            log::warn!("Unbekannter Werkzeug-Index: {}", index);
            return DrawAction::None;
        }
        let mut action = DrawAction::None;
        if let Some(old) = self.active_index {
            if old != index {
                action = self.tools[old].deactivate();
            }
        }
        self.active_index = Some(index);
        action
    }

    /// Deaktiviert das aktive Werkzeug.
    pub fn deactivate(&mut self) -> DrawAction {
        match self.active_index.take() {
            Some(i) => self.tools[i].deactivate(),
            None => DrawAction::None,
        }
    }

    /// Gibt den Index des aktiven Tools zurück.
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Gibt eine Referenz auf das aktive Tool zurück.
    pub fn active_tool(&self) -> Option<&dyn DrawingTool> {
        self.active_index.map(|i| self.tools[i].as_ref())
    }

    /// Gibt eine mutable Referenz auf das aktive Tool zurück.
    pub fn active_tool_mut(&mut self) -> Option<&mut dyn DrawingTool> {
        let i = self.active_index?;
        Some(self.tools[i].as_mut())
    }

    /// True wenn das aktive Tool gerade eine Form zeichnet.
    pub fn is_drawing(&self) -> bool {
        self.active_tool().is_some_and(|t| t.has_pending_input())
    }

    /// Reicht neue Optionen an alle Werkzeuge weiter.
    pub fn set_options(&mut self, options: &EditorOptions) {
        for tool in &mut self.tools {
            tool.set_options(options);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_tool_is_active_by_default() {
        let manager = ToolManager::new();
        assert_eq!(manager.tool_count(), 3);
        let names: Vec<&str> = manager.tool_names().into_iter().map(|(_, n)| n).collect();
        assert_eq!(names, ["Polylinie", "Rechteck", "Kreis"]);
        assert_eq!(manager.active_index(), Some(0));
        assert!(!manager.is_drawing());
    }

    #[test]
    fn switching_tool_hands_off_polyline() {
        let mut manager = ToolManager::new();
        let tool = manager.active_tool_mut().expect("aktives Tool");
        tool.on_pointer_down(Point::new(0.0, 0.0), false);
        tool.on_pointer_up(Point::new(0.0, 0.0), false);
        tool.on_pointer_down(Point::new(50.0, 0.0), false);
        tool.on_pointer_up(Point::new(50.0, 0.0), false);
        assert!(manager.is_drawing());

        let action = manager.set_active(1);
        assert!(matches!(action, DrawAction::Completed(Measurement::Polyline(_))));
        assert_eq!(manager.active_index(), Some(1));
        assert!(!manager.is_drawing());
    }

    #[test]
    fn invalid_index_keeps_current_tool() {
        let mut manager = ToolManager::new();
        assert_eq!(manager.set_active(9), DrawAction::None);
        assert_eq!(manager.active_index(), Some(0));
        assert_eq!(manager.deactivate(), DrawAction::None);
        assert_eq!(manager.active_index(), None);
    }
}
