//! Tangenten-/Lot-Snap und Schließ-Snap für die Polylinien-Vorschau.

use crate::core::geometry::{prev_tangent, project_onto_line};
use crate::core::{Point, Polyline, MIN_CLOSED_SEGMENTS};
use crate::shared::{EditorOptions, SnapGuide, SnapKind};

/// Ergebnis des Vorschau-Snappings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SnapPreview {
    /// Position nach Snapping
    pub effective: Point,
    /// Tangenten-/Lot-Hilfslinie
    pub guide: Option<SnapGuide>,
    /// Einrast-Ring am Startpunkt
    pub close_ring: Option<Point>,
}

impl SnapPreview {
    fn raw(pos: Point) -> Self {
        Self {
            effective: pos,
            guide: None,
            close_ring: None,
        }
    }
}

/// True wenn `pos` im Einrast-Radius um den Startpunkt liegt.
pub(crate) fn near_start(poly: &Polyline, pos: Point, radius: f64) -> bool {
    pos.distance(poly.start) <= radius
}

/// Richtet `pos` an Tangente oder Lot am offenen Ende aus.
///
/// Geprüft werden vier Richtungen (Tangente, Lot, jeweils vorwärts und rückwärts);
/// die mit der kleinsten Winkelabweichung unter `threshold_rad` gewinnt.
pub(crate) fn alignment_snap(
    poly: &Polyline,
    pos: Point,
    threshold_rad: f64,
) -> Option<(Point, SnapGuide)> {
    let from = poly.last_point();
    let candidate = pos - from;
    if candidate.length_squared() < f64::EPSILON {
        return None;
    }
    let tangent = prev_tangent(poly, poly.segments.len());
    let normal = tangent.perp();
    let directions = [
        (tangent, SnapKind::Tangent),
        (-tangent, SnapKind::Tangent),
        (normal, SnapKind::Perpendicular),
        (-normal, SnapKind::Perpendicular),
    ];

    let (direction, kind, delta) = directions
        .into_iter()
        .map(|(dir, kind)| (dir, kind, candidate.angle_to(dir).abs()))
        .min_by(|a, b| a.2.total_cmp(&b.2))?;

    if delta >= threshold_rad {
        return None;
    }
    Some((
        project_onto_line(pos, from, direction),
        SnapGuide {
            from,
            direction,
            kind,
        },
    ))
}

/// Vorschau-Snapping für die nächste Gerade.
///
/// Schließ-Snap hat Vorrang vor Tangenten-/Lot-Snap. Mit Shift oder ohne
/// Segment wird die Position unverändert übernommen.
pub(crate) fn preview_snap(
    poly: &Polyline,
    pos: Point,
    shift: bool,
    closing: bool,
    options: &EditorOptions,
) -> SnapPreview {
    if shift || poly.segments.is_empty() {
        return SnapPreview::raw(pos);
    }
    if !closing && poly.segments.len() >= MIN_CLOSED_SEGMENTS && near_start(poly, pos, options.close_snap_radius) {
        return SnapPreview {
            effective: poly.start,
            guide: None,
            close_ring: Some(poly.start),
        };
    }
    match alignment_snap(poly, pos, options.snap_angle_threshold_rad()) {
        Some((effective, guide)) => SnapPreview {
            effective,
            guide: Some(guide),
            close_ring: None,
        },
        None => SnapPreview::raw(pos),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Segment;
    use approx::assert_abs_diff_eq;

    fn horizontal() -> Polyline {
        let mut poly = Polyline::new(Point::new(0.0, 0.0));
        poly.segments.push(Segment::line(Point::new(100.0, 0.0)));
        poly
    }

    #[test]
    fn snaps_to_tangent_extension() {
        let opts = EditorOptions::default();
        let snap = preview_snap(&horizontal(), Point::new(200.0, 4.0), false, false, &opts);
        assert_abs_diff_eq!(snap.effective.x, 200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(snap.effective.y, 0.0, epsilon = 1e-9);
        assert_eq!(snap.guide.map(|g| g.kind), Some(SnapKind::Tangent));
    }

    #[test]
    fn snaps_to_perpendicular_both_ways() {
        let opts = EditorOptions::default();
        for y in [-80.0, 80.0] {
            let snap = preview_snap(&horizontal(), Point::new(103.0, y), false, false, &opts);
            assert_abs_diff_eq!(snap.effective.x, 100.0, epsilon = 1e-9);
            assert_abs_diff_eq!(snap.effective.y, y, epsilon = 1e-9);
            assert_eq!(snap.guide.map(|g| g.kind), Some(SnapKind::Perpendicular));
        }
    }

    #[test]
    fn no_snap_outside_threshold_or_with_shift() {
        let opts = EditorOptions::default();
        let free = Point::new(150.0, 40.0);
        assert_eq!(preview_snap(&horizontal(), free, false, false, &opts).effective, free);
        let near = Point::new(200.0, 4.0);
        let snap = preview_snap(&horizontal(), near, true, false, &opts);
        assert_eq!(snap.effective, near);
        assert!(snap.guide.is_none());
    }

    #[test]
    fn close_snap_overrides_alignment() {
        let opts = EditorOptions::default();
        let mut poly = horizontal();
        poly.segments.push(Segment::line(Point::new(100.0, 100.0)));
        let snap = preview_snap(&poly, Point::new(10.0, 5.0), false, false, &opts);
        assert_eq!(snap.effective, Point::new(0.0, 0.0));
        assert_eq!(snap.close_ring, Some(Point::new(0.0, 0.0)));
        assert!(snap.guide.is_none());

        // Ein Segment reicht nicht zum Schließen
        let snap = preview_snap(&horizontal(), Point::new(10.0, 5.0), false, false, &opts);
        assert!(snap.close_ring.is_none());
    }
}
