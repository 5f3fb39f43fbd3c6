//! Rechteck-Werkzeug: erster Klick setzt eine Ecke, zweiter Klick die diagonale Ecke.

use super::{DrawAction, DrawingTool, ToolPreview};
use crate::app::events::EditorKey;
use crate::core::{Measurement, Point, RectangleShape};
use crate::shared::EditorOptions;

/// Rechteck aus zwei Klicks.
pub struct RectangleTool {
    anchor: Option<Point>,
    cursor: Option<Point>,
    min_size: f64,
}

impl Default for RectangleTool {
    fn default() -> Self {
        Self::new()
    }
}

impl RectangleTool {
    /// Erstellt ein neues Rechteck-Werkzeug.
    pub fn new() -> Self {
        Self {
            anchor: None,
            cursor: None,
            min_size: EditorOptions::default().degenerate_segment_length,
        }
    }

    fn shape(&self, corner_b: Point) -> Option<RectangleShape> {
        self.anchor.map(|corner_a| RectangleShape {
            id: 0,
            corner_a,
            corner_b,
        })
    }
}

impl DrawingTool for RectangleTool {
    fn name(&self) -> &str {
        "Rechteck"
    }

    fn status_text(&self) -> &str {
        if self.anchor.is_some() {
            "Gegenüberliegende Ecke klicken"
        } else {
            "Erste Ecke klicken"
        }
    }

    fn on_pointer_down(&mut self, pos: Point, _shift: bool) -> DrawAction {
        self.cursor = Some(pos);
        let Some(anchor) = self.anchor else {
            self.anchor = Some(pos);
            return DrawAction::Updated;
        };
        let size = pos - anchor;
        if size.x.abs() < self.min_size || size.y.abs() < self.min_size {
            log::debug!("Rechteck zu klein, warte auf weitere Ecke");
            return DrawAction::None;
        }
        let shape = self.shape(pos);
        self.anchor = None;
        match shape {
            Some(rect) => {
                log::info!("Rechteck übergeben");
                DrawAction::Completed(Measurement::Rectangle(rect))
            }
            None => DrawAction::None,
        }
    }

    fn on_pointer_move(&mut self, pos: Point, _shift: bool) -> DrawAction {
        self.cursor = Some(pos);
        if self.anchor.is_some() {
            DrawAction::Updated
        } else {
            DrawAction::None
        }
    }

    fn on_pointer_up(&mut self, _pos: Point, _shift: bool) -> DrawAction {
        DrawAction::None
    }

    fn on_key(&mut self, key: EditorKey, _shift: bool) -> DrawAction {
        match key {
            EditorKey::Escape | EditorKey::Backspace | EditorKey::Delete
                if self.anchor.is_some() =>
            {
                self.deactivate()
            }
            _ => DrawAction::Unhandled,
        }
    }

    fn deactivate(&mut self) -> DrawAction {
        if self.anchor.take().is_some() {
            DrawAction::Updated
        } else {
            DrawAction::None
        }
    }

    fn has_pending_input(&self) -> bool {
        self.anchor.is_some()
    }

    fn preview(&self) -> ToolPreview {
        ToolPreview {
            active_shape: self
                .cursor
                .and_then(|c| self.shape(c))
                .map(Measurement::Rectangle),
            effective_cursor: self.cursor,
            ..ToolPreview::default()
        }
    }

    fn set_options(&mut self, options: &EditorOptions) {
        self.min_size = options.degenerate_segment_length;
    }
}
