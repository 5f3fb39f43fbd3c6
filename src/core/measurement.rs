//! Abgeschlossene Formen: Polylinie, Rechteck oder Kreis.

use super::polyline::{Point, Polyline};
use serde::{Deserialize, Serialize};

/// Rechteck über zwei diagonal gegenüberliegende Ecken.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleShape {
    /// Shape-ID
    pub id: u64,
    /// Erste Ecke (Klickpunkt 1)
    pub corner_a: Point,
    /// Gegenüberliegende Ecke (Klickpunkt 2)
    pub corner_b: Point,
}

impl RectangleShape {
    /// Die vier Ecken in Umlaufreihenfolge: `a, (b.x, a.y), b, (a.x, b.y)`.
    pub fn corners(&self) -> [Point; 4] {
        let a = self.corner_a;
        let b = self.corner_b;
        [a, Point::new(b.x, a.y), b, Point::new(a.x, b.y)]
    }
}

/// Kreis über Mittelpunkt und einen Punkt auf dem Rand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    /// Shape-ID
    pub id: u64,
    /// Mittelpunkt
    pub center: Point,
    /// Randpunkt (definiert den Radius)
    pub edge: Point,
}

impl CircleShape {
    /// Radius des Kreises.
    pub fn radius(&self) -> f64 {
        self.center.distance(self.edge)
    }
}

/// Diskriminante der Form-Varianten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    /// Polylinie aus Geraden und Bögen
    Polyline,
    /// Achsparalleles Rechteck
    Rectangle,
    /// Kreis
    Circle,
}

/// Eine abgeschlossene Form in der Shape-Sammlung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Measurement {
    /// Polylinie
    Polyline(Polyline),
    /// Rechteck
    Rectangle(RectangleShape),
    /// Kreis
    Circle(CircleShape),
}

impl Measurement {
    /// Shape-ID der Form.
    pub fn id(&self) -> u64 {
        match self {
            Measurement::Polyline(p) => p.id,
            Measurement::Rectangle(r) => r.id,
            Measurement::Circle(c) => c.id,
        }
    }

    /// Setzt die Shape-ID (beim Einfügen in den Store).
    pub fn set_id(&mut self, id: u64) {
        match self {
            Measurement::Polyline(p) => p.id = id,
            Measurement::Rectangle(r) => r.id = id,
            Measurement::Circle(c) => c.id = id,
        }
    }

    /// Variante der Form.
    pub fn kind(&self) -> MeasurementKind {
        match self {
            Measurement::Polyline(_) => MeasurementKind::Polyline,
            Measurement::Rectangle(_) => MeasurementKind::Rectangle,
            Measurement::Circle(_) => MeasurementKind::Circle,
        }
    }

    /// Polylinie, falls die Form eine ist.
    pub fn as_polyline(&self) -> Option<&Polyline> {
        match self {
            Measurement::Polyline(p) => Some(p),
            _ => None,
        }
    }

    /// Mutable Polylinie, falls die Form eine ist.
    pub fn as_polyline_mut(&mut self) -> Option<&mut Polyline> {
        match self {
            Measurement::Polyline(p) => Some(p),
            _ => None,
        }
    }

    /// True wenn die Form keinen Inhalt mehr hat (Polylinie ohne Segmente).
    pub fn is_empty(&self) -> bool {
        match self {
            Measurement::Polyline(p) => p.segments.is_empty(),
            Measurement::Rectangle(_) | Measurement::Circle(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_kind_tag() {
        let m = Measurement::Circle(CircleShape {
            id: 3,
            center: Point::new(1.0, 2.0),
            edge: Point::new(4.0, 6.0),
        });
        let json = serde_json::to_value(&m).expect("serialisierbar");
        assert_eq!(json["kind"], "circle");
        assert_eq!(json["id"], 3);

        let back: Measurement = serde_json::from_value(json).expect("deserialisierbar");
        assert_eq!(back, m);
    }

    #[test]
    fn rectangle_corners_walk_around() {
        let r = RectangleShape {
            id: 1,
            corner_a: Point::new(0.0, 0.0),
            corner_b: Point::new(4.0, 2.0),
        };
        assert_eq!(
            r.corners(),
            [
                Point::new(0.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(4.0, 2.0),
                Point::new(0.0, 2.0)
            ]
        );
    }

    #[test]
    fn set_id_and_kind() {
        let mut m = Measurement::Polyline(Polyline::new(Point::ZERO));
        m.set_id(42);
        assert_eq!(m.id(), 42);
        assert_eq!(m.kind(), MeasurementKind::Polyline);
        assert!(m.is_empty());
    }
}
