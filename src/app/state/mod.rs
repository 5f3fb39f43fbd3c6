//! Application State: zentrale Datenhaltung.

mod app_state;
mod editor;
mod point_edit;

pub use app_state::AppState;
pub use editor::EditorToolState;
pub use point_edit::{ActiveDrag, PendingDrag, PointEditState};
