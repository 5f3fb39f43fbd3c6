//! Gesten-Logik: Klick, Halte-Timer, Bogen-Ziehen und Loslass-Regeln.

use super::snap::{near_start, preview_snap};
use super::state::PolylineTool;
use crate::app::tools::{DrawAction, HoldToken};
use crate::core::geometry::{circumscribed_circle, compute_tangent_arc_bulge, prev_tangent};
use crate::core::{Point, Polyline, Segment, MIN_CLOSED_SEGMENTS};

impl PolylineTool {
    /// Klick: Startpunkt setzen, Gerade anhängen oder Schlusskante beginnen.
    pub(crate) fn click(&mut self, pos: Point, shift: bool) -> DrawAction {
        self.cursor = Some(pos);
        let Some(poly) = self.active.as_mut() else {
            self.active = Some(Polyline::new(pos));
            self.gesture += 1;
            self.effective_cursor = Some(pos);
            log::debug!("Polylinie begonnen bei ({:.1}, {:.1})", pos.x, pos.y);
            return DrawAction::Updated;
        };
        if self.holding_for_arc {
            return DrawAction::None;
        }

        let index = poly.segments.len();
        let closing = !shift && index >= MIN_CLOSED_SEGMENTS && near_start(poly, pos, self.options.close_snap_radius);
        if closing {
            let start = poly.start;
            poly.segments.push(Segment::line(start));
            self.closing = true;
            self.close_snap = Some(start);
            self.snap_guide = None;
            log::debug!("Schließ-Klick: Schlusskante zum Startpunkt");
        } else {
            let snap = preview_snap(poly, pos, shift, false, &self.options);
            poly.segments.push(Segment::line(snap.effective));
            self.effective_cursor = Some(snap.effective);
        }
        self.arm_hold(index, closing);
        DrawAction::Updated
    }

    /// Halte-Timer abgelaufen: in den Bogen-Modus wechseln.
    ///
    /// Tokens, die nicht zur aktuellen Geste passen, werden verworfen.
    pub(crate) fn hold_elapsed(&mut self, token: HoldToken) -> DrawAction {
        if self.armed != Some(token) {
            log::warn!("Veraltetes Halte-Timer-Token verworfen: {:?}", token);
            return DrawAction::None;
        }
        self.armed = None;

        let cursor = self.cursor;
        let Some(poly) = self.active.as_mut() else {
            log::warn!("Halte-Timer ohne aktive Polylinie verworfen");
            return DrawAction::None;
        };
        if poly.segments.len() != token.segment_index + 1 {
            log::warn!(
                "Halte-Timer für Segment {} passt nicht mehr ({} Segmente)",
                token.segment_index,
                poly.segments.len()
            );
            return DrawAction::None;
        }

        if !token.closing {
            let seg_start = poly.segment_start(token.segment_index);
            let end = poly.segments[token.segment_index].end;
            if end.distance(seg_start) > self.options.point_hit_radius {
                // Langes Segment bleibt gerade, der Bogen wächst als neues Segment
                poly.segments.push(Segment::line(cursor.unwrap_or(end)));
                self.new_segment_mode = true;
            }
        }
        self.holding_for_arc = true;
        self.snap_guide = None;
        log::debug!(
            "Bogen-Modus aktiv (neues Segment: {}, schließend: {})",
            self.new_segment_mode,
            self.closing
        );
        DrawAction::Updated
    }

    /// Pointer-Move im Bogen-Modus: Bogen folgt dem Cursor.
    pub(crate) fn drag_arc(&mut self, pos: Point, shift: bool) -> DrawAction {
        let radius = self.options.close_snap_radius;
        let Some(poly) = self.active.as_mut() else {
            return DrawAction::None;
        };
        let Some(index) = poly.segments.len().checked_sub(1) else {
            return DrawAction::None;
        };

        if self.closing {
            // Start und Ende liegen fest, der Cursor bestimmt die Krümmung
            poly.segments[index].bulge = Some(pos);
            self.effective_cursor = Some(pos);
            return DrawAction::Updated;
        }

        // Ein erster Bogen darf nicht auf seinen eigenen Start zurückfallen
        let snapped =
            !shift && index >= 1 && near_start(poly, pos, radius) && snap_arc_to_start(poly, index);
        if !snapped {
            set_tangent_arc(poly, index, pos);
        }
        self.close_snap = snapped.then_some(poly.start);
        self.effective_cursor = Some(poly.segments[index].end);
        DrawAction::Updated
    }

    /// Pointer-Up: Timer abbrechen, Schließen abschließen oder Bogen-Regeln anwenden.
    pub(crate) fn release(&mut self, shift: bool) -> DrawAction {
        self.armed = None;

        if self.closing {
            if let Some(poly) = self.active.as_mut() {
                close_exactly(poly);
            }
            return self.hand_off();
        }
        if !self.holding_for_arc {
            return DrawAction::None;
        }
        self.holding_for_arc = false;
        self.close_snap = None;
        let new_segment = std::mem::take(&mut self.new_segment_mode);

        let radius = self.options.close_snap_radius;
        let degenerate = self.options.degenerate_segment_length;
        let Some(poly) = self.active.as_mut() else {
            return DrawAction::None;
        };
        let Some(index) = poly.segments.len().checked_sub(1) else {
            return DrawAction::None;
        };
        let seg_start = poly.segment_start(index);
        let end = poly.segments[index].end;

        if !shift && index >= 1 && near_start(poly, end, radius) && snap_arc_to_start(poly, index) {
            close_exactly(poly);
            log::debug!("Bogen am Startpunkt eingerastet");
            return self.hand_off();
        }
        if new_segment && end.distance(seg_start) <= degenerate {
            poly.segments.pop();
            log::debug!("Entartetes Bogensegment verworfen");
        }
        DrawAction::Updated
    }

    /// Doppelklick: Duplikat des zweiten Klicks entfernen, dann übergeben.
    pub(crate) fn finish_by_double_click(&mut self) -> DrawAction {
        let degenerate = self.options.degenerate_segment_length;
        let Some(poly) = self.active.as_mut() else {
            return DrawAction::None;
        };
        let mut dropped = false;
        if let Some(index) = poly.segments.len().checked_sub(1) {
            let seg = poly.segments[index];
            if !seg.is_arc() && seg.end.distance(poly.segment_start(index)) < degenerate {
                poly.segments.pop();
                dropped = true;
            }
        }
        if poly.segments.is_empty() {
            self.clear_gesture();
            return if dropped {
                DrawAction::Updated
            } else {
                DrawAction::None
            };
        }
        self.hand_off()
    }
}

/// Setzt Segment `index` als tangentialen Bogen bis `end` (Gerade, falls kein Bogen nötig).
fn set_tangent_arc(poly: &mut Polyline, index: usize, end: Point) {
    let seg_start = poly.segment_start(index);
    let tangent = prev_tangent(poly, index);
    let bulge = compute_tangent_arc_bulge(seg_start, end, tangent);
    let segment = &mut poly.segments[index];
    segment.end = end;
    segment.bulge = bulge;
}

/// Legt das Bogensegment `index` mit seinem Ende auf `start`.
///
/// Liegt die Sehne zum Start parallel zur Tangente, gibt es keinen tangentialen
/// Bogen; dann bleibt der Bogenpunkt der letzten Bewegung stehen. Gibt `false`
/// zurück, wenn die Schlusskante gerade würde und die geschlossene Form dadurch
/// weniger als [`MIN_CLOSED_SEGMENTS`] Segmente behielte.
fn snap_arc_to_start(poly: &mut Polyline, index: usize) -> bool {
    let seg_start = poly.segment_start(index);
    let start = poly.start;
    let bulge = compute_tangent_arc_bulge(seg_start, start, prev_tangent(poly, index))
        .or(poly.segments[index].bulge)
        .filter(|&b| circumscribed_circle(seg_start, b, start).is_some());
    if bulge.is_none() && index < MIN_CLOSED_SEGMENTS {
        return false;
    }
    let segment = &mut poly.segments[index];
    segment.end = start;
    segment.bulge = bulge;
    true
}

/// Schließt die Polylinie: letzter Endpunkt exakt auf `start`, gerade Schlusskante entfällt.
fn close_exactly(poly: &mut Polyline) {
    let start = poly.start;
    if let Some(last) = poly.segments.last_mut() {
        last.end = start;
    }
    poly.closed = true;
    poly.normalize_closing();
    poly.demote_degenerate_close();
}
