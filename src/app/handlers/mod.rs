//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod drawing;
pub mod history;
pub mod options;
pub mod point_edit;
