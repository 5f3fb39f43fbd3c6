//! Use-Case-Funktionen für die Bearbeitung abgeschlossener Formen.
//!
//! Aufgeteilt nach Operation:
//! - `point_drag`: Punkt greifen, ziehen, loslassen
//! - `remove_point`: Einzelnen Punkt entfernen
//! - `nudge`: Selektierten Punkt per Pfeiltaste verschieben
//! - `delete_shape`: Ganze Form löschen
//! - `store_shape`: Fertige Form vom Werkzeug übernehmen

mod delete_shape;
mod nudge;
mod point_drag;
mod remove_point;
mod store_shape;

pub use delete_shape::{delete_hovered_shape, delete_shape};
pub use nudge::nudge_selected;
pub use point_drag::{begin_point_drag, end_point_drag, update_point_drag};
pub use remove_point::{remove_point_at, remove_selected_point};
pub use store_shape::store_completed_shape;
