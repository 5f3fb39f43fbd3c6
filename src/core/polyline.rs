//! Polylinie aus geraden Segmenten und Kreisbögen.
//!
//! Ein Segment speichert nur seinen Endpunkt (und optional einen Bogenpunkt);
//! der Startpunkt ergibt sich implizit aus dem Vorgänger bzw. `start`.

use super::geometry::circumscribed_circle;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Ebene Weltkoordinate (ohne Einheit).
pub type Point = DVec2;

/// Quadrierte Distanz, unter der ein Endpunkt als identisch mit `start` gilt.
pub const START_COINCIDENCE_SQ: f64 = 0.25;

/// Mindestzahl gespeicherter Segmente einer geschlossenen Polylinie.
pub const MIN_CLOSED_SEGMENTS: usize = 2;

/// Ein Segment der Polylinie: Gerade oder Kreisbogen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Endpunkt des Segments
    pub end: Point,
    /// Punkt *auf* dem Bogen zwischen Start und Ende (None = Gerade)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulge: Option<Point>,
}

impl Segment {
    /// Gerades Segment bis `end`.
    pub fn line(end: Point) -> Self {
        Self { end, bulge: None }
    }

    /// Kreisbogen bis `end` durch den Bogenpunkt `bulge`.
    pub fn arc(end: Point, bulge: Point) -> Self {
        Self {
            end,
            bulge: Some(bulge),
        }
    }

    /// True wenn das Segment einen Bogenpunkt trägt.
    pub fn is_arc(&self) -> bool {
        self.bulge.is_some()
    }
}

/// Polylinie mit Startpunkt und geordneten Segmenten.
///
/// Eine geschlossene Polylinie liegt in einer von zwei Formen vor:
/// - explizit: das letzte Segment endet exakt auf `start` (nur wenn die Schlusskante ein Bogen ist)
/// - implizit: keine Schlusskante gespeichert, die Gerade zurück zu `start` wird ergänzt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    /// Shape-ID (0 solange die Polylinie noch gezeichnet wird)
    pub id: u64,
    /// Startpunkt
    pub start: Point,
    /// Segmente in Zeichenreihenfolge
    pub segments: Vec<Segment>,
    /// Geschlossenes Polygon
    #[serde(default)]
    pub closed: bool,
}

impl Polyline {
    /// Erstellt eine leere Polylinie (nur Startpunkt).
    pub fn new(start: Point) -> Self {
        Self {
            id: 0,
            start,
            segments: Vec::new(),
            closed: false,
        }
    }

    /// Anzahl der gespeicherten Segmente.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Impliziter Startpunkt von Segment `index`.
    pub fn segment_start(&self, index: usize) -> Point {
        if index == 0 {
            self.start
        } else {
            self.segments
                .get(index - 1)
                .map(|s| s.end)
                .unwrap_or(self.start)
        }
    }

    /// Offenes Ende der Polylinie (Endpunkt des letzten Segments oder `start`).
    pub fn last_point(&self) -> Point {
        self.segments.last().map_or(self.start, |s| s.end)
    }

    /// True wenn die Polylinie geschlossen ist und die Schlusskante explizit gespeichert wurde.
    pub fn has_explicit_close(&self) -> bool {
        self.closed
            && self
                .segments
                .last()
                .is_some_and(|s| s.end.distance_squared(self.start) < START_COINCIDENCE_SQ)
    }

    /// True wenn offenes Ende und `start` zusammengelegt werden dürfen.
    ///
    /// Das letzte Segment wird dabei zur Schlusskante und entfällt, falls es gerade
    /// ist. Übrig bleiben müssen mindestens [`MIN_CLOSED_SEGMENTS`] Segmente.
    pub fn can_close_onto_start(&self) -> bool {
        let kept = match self.segments.last() {
            Some(last) if last.is_arc() => self.segments.len(),
            Some(_) => self.segments.len() - 1,
            None => 0,
        };
        !self.closed && kept >= MIN_CLOSED_SEGMENTS
    }

    /// Öffnet eine geschlossene Polylinie wieder, wenn zu wenige Segmente übrig sind.
    pub fn demote_degenerate_close(&mut self) {
        if self.closed && self.segments.len() < MIN_CLOSED_SEGMENTS {
            self.closed = false;
        }
    }

    /// Implizite Schlusskante (letzter Endpunkt → `start`), falls vorhanden.
    pub fn implicit_closing_edge(&self) -> Option<(Point, Point)> {
        if !self.closed || self.segments.is_empty() || self.has_explicit_close() {
            return None;
        }
        Some((self.last_point(), self.start))
    }

    /// Bringt eine geschlossene Polylinie in die kanonische Form.
    ///
    /// Eine explizite Schlusskante wird exakt auf `start` gesetzt; ist sie gerade
    /// (kein oder kollinearer Bogenpunkt), wird sie entfernt.
    pub fn normalize_closing(&mut self) {
        if !self.has_explicit_close() {
            return;
        }
        let last_index = self.segments.len() - 1;
        let from = self.segment_start(last_index);
        let start = self.start;
        let last = &mut self.segments[last_index];
        last.end = start;
        let straight = match last.bulge {
            None => true,
            Some(bulge) => circumscribed_circle(from, bulge, start).is_none(),
        };
        if straight {
            self.segments.pop();
        }
    }
}
