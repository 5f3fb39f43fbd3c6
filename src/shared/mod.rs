//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und einem externen Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{CLOSE_SNAP_RADIUS, POINT_HIT_RADIUS};
pub use render_scene::{RenderScene, SnapGuide, SnapKind};
