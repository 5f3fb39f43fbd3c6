//! Punktmodell: flache, dichte Indizierung aller editierbaren Punkte einer Form.
//!
//! Index 0 ist immer der Startpunkt. Danach folgen pro Segment der Bogenpunkt
//! (falls vorhanden) und der Endpunkt. Der Endpunkt einer expliziten Schlusskante
//! fällt mit `start` zusammen und wird nicht aufgeführt.
//!
//! Rechteck: vier Ecken in Umlaufreihenfolge. Kreis: Mittelpunkt, Randpunkt.

use super::measurement::Measurement;
use super::polyline::{Point, Polyline};

/// Position eines flachen Punkt-Index innerhalb der Polylinie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLocation {
    /// Startpunkt der Polylinie
    Start,
    /// Bogenpunkt von Segment `seg_index`
    Bulge { seg_index: usize },
    /// Endpunkt von Segment `seg_index`
    End { seg_index: usize },
}

/// Alle editierbaren Punkte einer Form in Index-Reihenfolge.
pub fn flatten_points(measurement: &Measurement) -> Vec<Point> {
    match measurement {
        Measurement::Polyline(poly) => flatten_polyline(poly),
        Measurement::Rectangle(rect) => rect.corners().to_vec(),
        Measurement::Circle(circle) => vec![circle.center, circle.edge],
    }
}

/// Editierbare Punkte einer Polylinie.
pub fn flatten_polyline(poly: &Polyline) -> Vec<Point> {
    let explicit_close = poly.has_explicit_close();
    let last = poly.segments.len().saturating_sub(1);
    let mut points = Vec::with_capacity(1 + poly.segments.len() * 2);
    points.push(poly.start);
    for (i, segment) in poly.segments.iter().enumerate() {
        if let Some(bulge) = segment.bulge {
            points.push(bulge);
        }
        if !(explicit_close && i == last) {
            points.push(segment.end);
        }
    }
    points
}

/// Anzahl editierbarer Punkte einer Form.
pub fn point_count(measurement: &Measurement) -> usize {
    match measurement {
        Measurement::Polyline(poly) => flatten_polyline(poly).len(),
        Measurement::Rectangle(_) => 4,
        Measurement::Circle(_) => 2,
    }
}

/// Ordnet einen flachen Index seinem Feld in der Polylinie zu.
pub fn locate_point(poly: &Polyline, index: usize) -> Option<PointLocation> {
    if index == 0 {
        return Some(PointLocation::Start);
    }
    let explicit_close = poly.has_explicit_close();
    let last = poly.segments.len().saturating_sub(1);
    let mut slot = 1;
    for (i, segment) in poly.segments.iter().enumerate() {
        if segment.bulge.is_some() {
            if slot == index {
                return Some(PointLocation::Bulge { seg_index: i });
            }
            slot += 1;
        }
        if !(explicit_close && i == last) {
            if slot == index {
                return Some(PointLocation::End { seg_index: i });
            }
            slot += 1;
        }
    }
    None
}

/// Schreibt `pos` an den Punkt mit flachem Index `index`.
///
/// Gibt `false` zurück wenn der Index nicht existiert.
pub fn write_point(measurement: &mut Measurement, index: usize, pos: Point) -> bool {
    match measurement {
        Measurement::Polyline(poly) => write_polyline_point(poly, index, pos),
        Measurement::Rectangle(rect) => {
            let a = rect.corner_a;
            let b = rect.corner_b;
            // Die diagonal gegenüberliegende Ecke bleibt fest
            match index {
                0 => rect.corner_a = pos,
                1 => {
                    rect.corner_a = Point::new(a.x, pos.y);
                    rect.corner_b = Point::new(pos.x, b.y);
                }
                2 => rect.corner_b = pos,
                3 => {
                    rect.corner_a = Point::new(pos.x, a.y);
                    rect.corner_b = Point::new(b.x, pos.y);
                }
                _ => return false,
            }
            true
        }
        Measurement::Circle(circle) => {
            match index {
                0 => {
                    let delta = pos - circle.center;
                    circle.center = pos;
                    circle.edge += delta;
                }
                1 => circle.edge = pos,
                _ => return false,
            }
            true
        }
    }
}

/// Schreibt einen Punkt der Polylinie.
///
/// Bei expliziter Schlusskante wandert deren Endpunkt mit dem Startpunkt mit;
/// bei impliziter Schlusskante bleibt der letzte Endpunkt unverändert.
pub fn write_polyline_point(poly: &mut Polyline, index: usize, pos: Point) -> bool {
    let Some(location) = locate_point(poly, index) else {
        return false;
    };
    match location {
        PointLocation::Start => {
            let explicit_close = poly.has_explicit_close();
            poly.start = pos;
            if explicit_close {
                if let Some(last) = poly.segments.last_mut() {
                    last.end = pos;
                }
            }
        }
        PointLocation::Bulge { seg_index } => poly.segments[seg_index].bulge = Some(pos),
        PointLocation::End { seg_index } => poly.segments[seg_index].end = pos,
    }
    true
}

/// Entfernt den Punkt mit flachem Index `index` aus der Polylinie.
///
/// - Bogenpunkt: Segment wird zur Geraden
/// - Startpunkt: Segment 0 entfällt, dessen Endpunkt wird neuer Start
/// - Endpunkt: das Segment entfällt, der Nachfolger verliert seinen Bogenpunkt
///
/// Bleiben keine Segmente übrig, entfernt der Aufrufer die ganze Form.
pub fn remove_point(poly: &mut Polyline, index: usize) -> bool {
    let Some(location) = locate_point(poly, index) else {
        return false;
    };
    match location {
        PointLocation::Bulge { seg_index } => {
            poly.segments[seg_index].bulge = None;
        }
        PointLocation::Start => {
            if poly.segments.is_empty() {
                return false;
            }
            let explicit_close = poly.has_explicit_close();
            let first = poly.segments.remove(0);
            poly.start = first.end;
            if explicit_close {
                let start = poly.start;
                if let Some(closing) = poly.segments.last_mut() {
                    closing.end = start;
                    closing.bulge = None;
                }
            }
        }
        PointLocation::End { seg_index } => {
            poly.segments.remove(seg_index);
            if let Some(next) = poly.segments.get_mut(seg_index) {
                next.bulge = None;
            }
        }
    }
    poly.normalize_closing();
    poly.demote_degenerate_close();
    true
}
