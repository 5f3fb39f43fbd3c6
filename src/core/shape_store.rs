//! Sammlung abgeschlossener Formen, nach ID adressiert und in Einfügereihenfolge.

use super::measurement::Measurement;
use super::point_model::flatten_points;
use super::polyline::Point;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Treffer eines Punkt-Hit-Tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointHit {
    /// ID der getroffenen Form
    pub shape_id: u64,
    /// Flacher Punkt-Index innerhalb der Form
    pub point_index: usize,
}

/// Container für alle abgeschlossenen Formen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeStore {
    shapes: IndexMap<u64, Measurement>,
    next_id: u64,
}

impl ShapeStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            shapes: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Vergibt die nächste freie Shape-ID.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        id
    }

    /// Fügt eine Form ein und vergibt ihr eine neue ID.
    pub fn insert(&mut self, mut measurement: Measurement) -> u64 {
        let id = self.generate_id();
        measurement.set_id(id);
        self.shapes.insert(id, measurement);
        id
    }

    /// Form per ID.
    pub fn get(&self, id: u64) -> Option<&Measurement> {
        self.shapes.get(&id)
    }

    /// Mutable Form per ID.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Measurement> {
        self.shapes.get_mut(&id)
    }

    /// Entfernt eine Form; die Reihenfolge der übrigen bleibt erhalten.
    pub fn remove(&mut self, id: u64) -> Option<Measurement> {
        self.shapes.shift_remove(&id)
    }

    /// Iteriert in Einfügereihenfolge.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Measurement> {
        self.shapes.values()
    }

    /// Anzahl der Formen.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// True wenn keine Formen vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Sucht den ersten Punkt innerhalb von `radius`.
    ///
    /// Durchsucht die Formen rückwärts, die zuletzt hinzugefügte gewinnt.
    pub fn pick_point(&self, pos: Point, radius: f64) -> Option<PointHit> {
        let radius_sq = radius * radius;
        self.shapes.values().rev().find_map(|shape| {
            flatten_points(shape)
                .iter()
                .position(|pt| pt.distance_squared(pos) <= radius_sq)
                .map(|point_index| PointHit {
                    shape_id: shape.id(),
                    point_index,
                })
        })
    }
}
