//! Application-Layer: Controller, State, Events, Werkzeuge und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Verwaltet Shape-Store, Werkzeuge, Punkt-Bearbeitung, History und Optionen.
pub mod state;
pub mod tools;
pub mod use_cases;

pub use command_log::{CommandLog, LoggedCommand};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, EditorKey, EventOutcome};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, EditorToolState, PointEditState};
pub use tools::{DrawAction, DrawingTool, HoldToken, ToolManager, ToolPreview};
