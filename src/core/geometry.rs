//! Geometrie-Kern für Geraden und Kreisbögen (reine Funktionen).
//!
//! Ein Bogen wird über drei Punkte definiert: Segment-Start, Bogenpunkt, Segment-Ende.
//! Kreis und Drehrichtung ergeben sich eindeutig aus dem Umkreis dieser drei Punkte.

use super::polyline::{Point, Polyline};
use glam::DVec2;
use std::f64::consts::TAU;

/// Determinanten-Schwelle, unter der drei Punkte als kollinear gelten.
pub const COLLINEAR_EPSILON: f64 = 1e-10;
/// Schwelle für entartete Tangenten-Bögen (Sehne bzw. Nenner).
pub const TANGENT_EPSILON: f64 = 1e-6;

/// Kreis mit Mittelpunkt und Radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Mittelpunkt
    pub center: Point,
    /// Radius (immer > 0)
    pub radius: f64,
}

/// Umkreis durch drei Punkte.
///
/// Gibt `None` zurück wenn die Punkte (nahezu) kollinear sind; Aufrufer
/// behandeln das Segment dann als Gerade.
pub fn circumscribed_circle(p1: Point, p2: Point, p3: Point) -> Option<Circle> {
    let a = p2 - p1;
    let b = p3 - p1;
    let det = 2.0 * (a.x * b.y - a.y * b.x);
    if det.abs() < COLLINEAR_EPSILON {
        return None;
    }
    let a_sq = a.length_squared();
    let b_sq = b.length_squared();
    let ux = (b.y * a_sq - a.y * b_sq) / det;
    let uy = (a.x * b_sq - b.x * a_sq) / det;
    let center = p1 + DVec2::new(ux, uy);
    Some(Circle {
        center,
        radius: center.distance(p1),
    })
}

/// Vorzeichenbehafteter Drehwinkel von `a1` nach `a3`, der über `a2` läuft.
///
/// Positiv = gegen den Uhrzeigersinn, negativ = im Uhrzeigersinn.
pub fn angle_sweep_through(a1: f64, a2: f64, a3: f64) -> f64 {
    let d2 = (a2 - a1).rem_euclid(TAU);
    let d3 = (a3 - a1).rem_euclid(TAU);
    if d2 < d3 {
        d3
    } else {
        d3 - TAU
    }
}

/// Winkel eines Punkts relativ zum Kreismittelpunkt.
pub fn angle_at(center: Point, p: Point) -> f64 {
    let d = p - center;
    d.y.atan2(d.x)
}

/// Punkt auf dem Kreis beim Winkel `angle`.
pub fn point_on_circle(circle: &Circle, angle: f64) -> Point {
    circle.center + DVec2::new(angle.cos(), angle.sin()) * circle.radius
}

/// Bogenpunkt für einen Bogen von `start` nach `end`, dessen Tangente in `start` gleich `tangent` ist.
///
/// Der Mittelpunkt liegt auf der Normalen zu `tangent` durch `start`; der
/// zurückgegebene Punkt liegt auf halbem Drehwinkel. `None` bedeutet: Gerade genügt
/// (Start und Ende fallen zusammen oder `end` liegt auf der Tangentenlinie).
pub fn compute_tangent_arc_bulge(start: Point, end: Point, tangent: DVec2) -> Option<Point> {
    let chord = end - start;
    let chord_sq = chord.length_squared();
    if chord_sq < TANGENT_EPSILON {
        return None;
    }
    let normal = tangent.perp();
    let denom = 2.0 * chord.dot(normal);
    if denom.abs() < TANGENT_EPSILON {
        return None;
    }
    let t = chord_sq / denom;
    let circle = Circle {
        center: start + normal * t,
        radius: t.abs(),
    };

    let a_start = angle_at(circle.center, start);
    let a_end = angle_at(circle.center, end);
    let ccw = (a_end - a_start).rem_euclid(TAU);
    // Mittelpunkt links der Fahrtrichtung → gegen den Uhrzeigersinn
    let sweep = if t > 0.0 { ccw } else { ccw - TAU };
    Some(point_on_circle(&circle, a_start + sweep * 0.5))
}

/// Drehwinkel des Bogens `start → bulge → end` (None bei kollinearen Punkten).
pub fn arc_sweep(start: Point, bulge: Point, end: Point) -> Option<(Circle, f64)> {
    let circle = circumscribed_circle(start, bulge, end)?;
    let sweep = angle_sweep_through(
        angle_at(circle.center, start),
        angle_at(circle.center, bulge),
        angle_at(circle.center, end),
    );
    Some((circle, sweep))
}

/// Drehwinkel von Segment `index` (0.0 für Geraden und entartete Bögen).
pub fn segment_sweep(polyline: &Polyline, index: usize) -> f64 {
    let Some(segment) = polyline.segments.get(index) else {
        return 0.0;
    };
    segment
        .bulge
        .and_then(|bulge| arc_sweep(polyline.segment_start(index), bulge, segment.end))
        .map_or(0.0, |(_, sweep)| sweep)
}

/// Tangentenrichtung (Einheitsvektor) am Anfang von Segment `seg_index`.
///
/// Für `seg_index == 0` gilt `(1, 0)`. Nach einer Geraden ist es deren Richtung,
/// nach einem Bogen der um ±90° gedrehte Radiusvektor am Bogenende.
pub fn prev_tangent(polyline: &Polyline, seg_index: usize) -> DVec2 {
    let mut index = seg_index.min(polyline.segments.len());
    while index > 0 {
        let prev = index - 1;
        let from = polyline.segment_start(prev);
        let segment = &polyline.segments[prev];

        if let Some((circle, sweep)) = segment
            .bulge
            .and_then(|bulge| arc_sweep(from, bulge, segment.end))
        {
            let radial = (segment.end - circle.center).perp();
            let dir = if sweep > 0.0 { radial } else { -radial };
            if let Some(unit) = dir.try_normalize() {
                return unit;
            }
        }

        if let Some(unit) = (segment.end - from).try_normalize() {
            return unit;
        }
        // Segment ohne Länge: Richtung des Vorgängers übernehmen
        index = prev;
    }
    DVec2::X
}

/// Länge des Bogens `start → bulge → end` (Sehnenlänge wenn kollinear).
pub fn arc_length(start: Point, bulge: Point, end: Point) -> f64 {
    match arc_sweep(start, bulge, end) {
        Some((circle, sweep)) => circle.radius * sweep.abs(),
        None => start.distance(end),
    }
}

/// Gesamtlänge der Polylinie inklusive impliziter Schlusskante.
pub fn polyline_length(polyline: &Polyline) -> f64 {
    let mut total = 0.0;
    for (i, segment) in polyline.segments.iter().enumerate() {
        let from = polyline.segment_start(i);
        total += match segment.bulge {
            Some(bulge) => arc_length(from, bulge, segment.end),
            None => from.distance(segment.end),
        };
    }
    if let Some((from, to)) = polyline.implicit_closing_edge() {
        total += from.distance(to);
    }
    total
}

/// Kürzester Abstand von `p` zur Strecke `a → b`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < f64::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Projiziert `p` auf die Gerade durch `origin` mit Einheitsrichtung `dir`.
pub fn project_onto_line(p: Point, origin: Point, dir: DVec2) -> Point {
    origin + dir * (p - origin).dot(dir)
}
