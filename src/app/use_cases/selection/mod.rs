//! Use-Case-Funktionen für Hover und Punkt-Selektion.

mod cycle;
mod hover;

pub use cycle::{clear_selection, cycle_selection};
pub use hover::update_hover;
