//! Polyline/Arc Editor Library.
//! Zeichen- und Bearbeitungs-Kern für Polylinien aus Geraden und Kreisbögen,
//! als Library exportiert für Hosts, Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DrawAction, EditorKey, EventOutcome,
    HoldToken,
};
pub use core::{
    CircleShape, Measurement, MeasurementKind, Point, PointHit, Polyline, RectangleShape,
    Segment, ShapeStore,
};
pub use shared::{EditorOptions, RenderScene, SnapGuide, SnapKind};
