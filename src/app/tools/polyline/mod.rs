//! Polylinien-Werkzeug: Klick setzt Geraden, Halten und Ziehen erzeugt Kreisbögen.
//!
//! **Klick:** erster Klick setzt den Startpunkt, jeder weitere eine Gerade.
//! Ein Klick nahe dem Startpunkt (ab zwei Segmenten, ohne Shift) schließt die Polylinie.
//!
//! **Halten:** bleibt die Taste länger als die Haltedauer gedrückt, wird das
//! Segment zum tangentialen Bogen, der dem Cursor folgt. War das gerade gesetzte
//! Segment schon lang, entsteht stattdessen ein neues Bogensegment am Cursor.
//!
//! **Snapping:** Tangenten-/Lot-Snap für die nächste Gerade, Einrast-Ring am Startpunkt.
//!
//! Aufgeteilt in:
//! - `state`:     Struct, Konstruktor, Übergabe/Reset
//! - `snap`:      Tangenten-/Lot-Snap und Schließ-Snap
//! - `gesture`:   Halte-Timer, Bogen-Ziehen, Loslass-Regeln
//! - `lifecycle`: DrawingTool-Implementierung

mod gesture;
mod lifecycle;
mod snap;
mod state;

pub use state::PolylineTool;
