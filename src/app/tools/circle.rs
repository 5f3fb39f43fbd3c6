//! Kreis-Werkzeug: erster Klick setzt den Mittelpunkt, zweiter Klick den Radius.

use super::{DrawAction, DrawingTool, ToolPreview};
use crate::app::events::EditorKey;
use crate::core::{CircleShape, Measurement, Point};
use crate::shared::EditorOptions;

/// Kreis aus zwei Klicks.
pub struct CircleTool {
    center: Option<Point>,
    cursor: Option<Point>,
    min_radius: f64,
}

impl Default for CircleTool {
    fn default() -> Self {
        Self::new()
    }
}

impl CircleTool {
    /// Erstellt ein neues Kreis-Werkzeug.
    pub fn new() -> Self {
        Self {
            center: None,
            cursor: None,
            min_radius: EditorOptions::default().degenerate_segment_length,
        }
    }
}

impl DrawingTool for CircleTool {
    fn name(&self) -> &str {
        "Kreis"
    }

    fn status_text(&self) -> &str {
        if self.center.is_some() {
            "Randpunkt klicken"
        } else {
            "Mittelpunkt klicken"
        }
    }

    fn on_pointer_down(&mut self, pos: Point, _shift: bool) -> DrawAction {
        self.cursor = Some(pos);
        let Some(center) = self.center else {
            self.center = Some(pos);
            return DrawAction::Updated;
        };
        if center.distance(pos) < self.min_radius {
            return DrawAction::None;
        }
        self.center = None;
        log::info!("Kreis übergeben: Radius {:.2}", center.distance(pos));
        DrawAction::Completed(Measurement::Circle(CircleShape {
            id: 0,
            center,
            edge: pos,
        }))
    }

    fn on_pointer_move(&mut self, pos: Point, _shift: bool) -> DrawAction {
        self.cursor = Some(pos);
        if self.center.is_some() {
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
                if self.center.is_some() =>
            {
                self.deactivate()
            }
            _ => DrawAction::Unhandled,
        }
    }

    fn deactivate(&mut self) -> DrawAction {
        if self.center.take().is_some() {
            DrawAction::Updated
        } else {
            DrawAction::None
        }
    }

    fn has_pending_input(&self) -> bool {
        self.center.is_some()
    }

    fn preview(&self) -> ToolPreview {
        let active_shape = match (self.center, self.cursor) {
            (Some(center), Some(edge)) => Some(Measurement::Circle(CircleShape {
                id: 0,
                center,
                edge,
            })),
            _ => None,
        };
        ToolPreview {
            active_shape,
            effective_cursor: self.cursor,
            ..ToolPreview::default()
        }
    }

    fn set_options(&mut self, options: &EditorOptions) {
        self.min_radius = options.degenerate_segment_length;
    }
}
