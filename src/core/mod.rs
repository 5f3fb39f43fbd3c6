//! Core-Domänentypen: Polylinie, Formen, Geometrie-Kern, Punktmodell, Shape-Store.

pub mod geometry;
/// Abgeschlossene Formen (Polylinie, Rechteck, Kreis)
pub mod measurement;
pub mod point_model;
pub mod polyline;
pub mod shape_store;

pub use geometry::{
    angle_sweep_through, arc_length, circumscribed_circle, compute_tangent_arc_bulge,
    polyline_length, prev_tangent, segment_sweep, Circle,
};
pub use measurement::{CircleShape, Measurement, MeasurementKind, RectangleShape};
pub use point_model::{
    flatten_points, locate_point, point_count, remove_point, write_point, PointLocation,
};
pub use polyline::{Point, Polyline, Segment, MIN_CLOSED_SEGMENTS};
pub use shape_store::{PointHit, ShapeStore};
