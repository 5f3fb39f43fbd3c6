//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;
mod outcome;

pub use command::AppCommand;
pub use intent::{AppIntent, EditorKey};
pub use outcome::EventOutcome;
