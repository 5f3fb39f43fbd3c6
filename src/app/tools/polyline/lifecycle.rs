use super::snap::preview_snap;
use super::state::PolylineTool;
use crate::app::events::EditorKey;
use crate::app::tools::{DrawAction, DrawingTool, HoldToken, ToolPreview};
use crate::core::{Measurement, Point};
use crate::shared::EditorOptions;

impl DrawingTool for PolylineTool {
    fn name(&self) -> &str {
        "Polylinie"
    }

    fn status_text(&self) -> &str {
        match &self.active {
            None => "Startpunkt klicken",
            Some(_) if self.closing => "Loslassen schließt die Polylinie",
            Some(_) if self.holding_for_arc => "Ziehen formt den Bogen",
            Some(poly) if poly.segments.is_empty() => "Nächsten Punkt klicken",
            Some(_) => "Klicken: Gerade, Halten: Bogen, Enter: fertig",
        }
    }

    fn on_pointer_down(&mut self, pos: Point, shift: bool) -> DrawAction {
        self.click(pos, shift)
    }

    fn on_pointer_move(&mut self, pos: Point, shift: bool) -> DrawAction {
        self.cursor = Some(pos);
        if self.holding_for_arc {
            return self.drag_arc(pos, shift);
        }
        let Some(poly) = self.active.as_ref() else {
            self.effective_cursor = Some(pos);
            return DrawAction::None;
        };
        let snap = preview_snap(poly, pos, shift, self.closing, &self.options);
        self.effective_cursor = Some(snap.effective);
        self.snap_guide = snap.guide;
        self.close_snap = snap.close_ring;
        DrawAction::Updated
    }

    fn on_pointer_up(&mut self, _pos: Point, shift: bool) -> DrawAction {
        self.release(shift)
    }

    fn on_key(&mut self, key: EditorKey, _shift: bool) -> DrawAction {
        match key {
            EditorKey::Enter => match &self.active {
                Some(poly) if !poly.segments.is_empty() => self.hand_off(),
                _ => DrawAction::None,
            },
            EditorKey::Escape => {
                if self.active.is_some() {
                    self.hand_off()
                } else {
                    DrawAction::Unhandled
                }
            }
            EditorKey::Backspace | EditorKey::Delete => {
                let popped = self
                    .active
                    .as_mut()
                    .and_then(|poly| poly.segments.pop())
                    .is_some();
                if popped {
                    self.clear_gesture();
                    log::debug!("Letztes Segment entfernt");
                    DrawAction::Updated
                } else {
                    DrawAction::Unhandled
                }
            }
            _ => DrawAction::Unhandled,
        }
    }

    fn on_double_click(&mut self, _pos: Point, _shift: bool) -> DrawAction {
        self.finish_by_double_click()
    }

    fn on_hold_elapsed(&mut self, token: HoldToken) -> DrawAction {
        self.hold_elapsed(token)
    }

    fn armed_hold(&self) -> Option<HoldToken> {
        self.armed
    }

    fn deactivate(&mut self) -> DrawAction {
        self.hand_off()
    }

    fn has_pending_input(&self) -> bool {
        self.active.is_some()
    }

    fn preview(&self) -> ToolPreview {
        ToolPreview {
            active_shape: self.active.clone().map(Measurement::Polyline),
            effective_cursor: self.effective_cursor,
            close_snap_ring: self.close_snap,
            snap_guide: self.snap_guide,
        }
    }

    fn set_options(&mut self, options: &EditorOptions) {
        self.options = options.clone();
    }
}
