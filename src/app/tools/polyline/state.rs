use super::super::{DrawAction, HoldToken};
use crate::core::{Measurement, Point, Polyline};
use crate::shared::{EditorOptions, SnapGuide};

/// Polylinien-Werkzeug mit Gesten-Zustandsmaschine.
///
/// `active == None` entspricht dem Zustand *Idle*, sonst *Building*;
/// `holding_for_arc` ist der Unterzustand beim Bogen-Ziehen.
pub struct PolylineTool {
    /// Angefangene Polylinie
    pub(crate) active: Option<Polyline>,
    /// Halte-Timer ist abgelaufen, Pointer-Moves formen den Bogen
    pub(crate) holding_for_arc: bool,
    /// Letztes Segment ist die Schlusskante zum Startpunkt
    pub(crate) closing: bool,
    /// Bogen wurde als neues Segment am Cursor angelegt
    pub(crate) new_segment_mode: bool,
    /// Fortlaufende Gesten-Nummer (macht alte Timer-Tokens ungültig)
    pub(crate) gesture: u64,
    /// Scharfer Halte-Timer
    pub(crate) armed: Option<HoldToken>,
    /// Letzte rohe Cursor-Position
    pub(crate) cursor: Option<Point>,
    /// Cursor nach Snapping (Vorschau der nächsten Geraden)
    pub(crate) effective_cursor: Option<Point>,
    /// Einrast-Ring am Startpunkt
    pub(crate) close_snap: Option<Point>,
    /// Aktive Snap-Hilfslinie
    pub(crate) snap_guide: Option<SnapGuide>,
    /// Radien und Schwellen
    pub(crate) options: EditorOptions,
}

impl Default for PolylineTool {
    fn default() -> Self {
        Self::new()
    }
}

impl PolylineTool {
    /// Erstellt ein neues Polylinien-Werkzeug im Zustand Idle.
    pub fn new() -> Self {
        Self {
            active: None,
            holding_for_arc: false,
            closing: false,
            new_segment_mode: false,
            gesture: 0,
            armed: None,
            cursor: None,
            effective_cursor: None,
            close_snap: None,
            snap_guide: None,
            options: EditorOptions::default(),
        }
    }

    /// Angefangene Polylinie (nur lesend).
    pub fn active_polyline(&self) -> Option<&Polyline> {
        self.active.as_ref()
    }

    /// True im Unterzustand Bogen-Ziehen.
    pub fn is_holding_for_arc(&self) -> bool {
        self.holding_for_arc
    }

    /// Startet eine neue Geste und schärft den Halte-Timer für `segment_index`.
    pub(crate) fn arm_hold(&mut self, segment_index: usize, closing: bool) -> HoldToken {
        self.gesture += 1;
        let token = HoldToken {
            gesture: self.gesture,
            segment_index,
            closing,
        };
        self.armed = Some(token);
        token
    }

    /// Setzt die Gesten-Flags zurück (Timer, Halten, Schließen).
    pub(crate) fn clear_gesture(&mut self) {
        self.armed = None;
        self.holding_for_arc = false;
        self.closing = false;
        self.new_segment_mode = false;
        self.close_snap = None;
        self.snap_guide = None;
    }

    /// Übergibt die Polylinie oder verwirft sie, wenn sie keine Segmente hat.
    pub(crate) fn hand_off(&mut self) -> DrawAction {
        self.clear_gesture();
        self.effective_cursor = None;
        // Neue Gesten-Nummer: noch ausstehende Timer-Tokens verfallen
        self.gesture += 1;
        match self.active.take() {
            Some(poly) if !poly.segments.is_empty() => {
                log::info!(
                    "Polylinie übergeben: {} Segmente, geschlossen: {}",
                    poly.segments.len(),
                    poly.closed
                );
                DrawAction::Completed(Measurement::Polyline(poly))
            }
            Some(_) => {
                log::debug!("Polylinie ohne Segmente verworfen");
                DrawAction::Updated
            }
            None => DrawAction::None,
        }
    }
}
