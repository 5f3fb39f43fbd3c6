use crate::app::tools::HoldToken;
use crate::core::Point;
use crate::shared::EditorOptions;
use serde::{Deserialize, Serialize};

/// Tasten, auf die der Editor reagiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorKey {
    /// Zeichnen abschließen
    Enter,
    /// Abschließen bzw. verwerfen, sonst Selektion aufheben
    Escape,
    /// Letztes Segment bzw. Punkt/Form löschen
    Backspace,
    /// Wie Backspace
    Delete,
    /// Selektion zyklisch weiterschalten
    Tab,
    /// Pfeil links
    ArrowLeft,
    /// Pfeil rechts
    ArrowRight,
    /// Pfeil hoch (+Y)
    ArrowUp,
    /// Pfeil runter (-Y)
    ArrowDown,
}

impl EditorKey {
    /// Löschtaste (Backspace oder Entf).
    pub fn is_delete(self) -> bool {
        matches!(self, EditorKey::Backspace | EditorKey::Delete)
    }

    /// Einheitsrichtung einer Pfeiltaste.
    pub fn arrow_direction(self) -> Option<Point> {
        match self {
            EditorKey::ArrowLeft => Some(Point::new(-1.0, 0.0)),
            EditorKey::ArrowRight => Some(Point::new(1.0, 0.0)),
            EditorKey::ArrowUp => Some(Point::new(0.0, 1.0)),
            EditorKey::ArrowDown => Some(Point::new(0.0, -1.0)),
            _ => None,
        }
    }
}

/// App-Intent Events.
/// Intents sind Eingaben aus Host/System ohne direkte Mutationslogik.
/// Alle Positionen sind bereits Weltkoordinaten.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Maustaste gedrückt
    PointerDown { pos: Point, shift: bool },
    /// Maus bewegt
    PointerMoved { pos: Point, shift: bool },
    /// Maustaste losgelassen
    PointerUp { pos: Point, shift: bool },
    /// Doppelklick
    DoubleClick { pos: Point, shift: bool },
    /// Taste gedrückt
    KeyPressed { key: EditorKey, shift: bool },
    /// Vom Host geplanter Halte-Timer ist abgelaufen
    HoldTimerElapsed { token: HoldToken },
    /// Zeichen-Werkzeug wechseln
    ToolSelected { index: usize },
    /// Aktives Werkzeug deaktivieren
    ToolDeactivated,
    /// Letzte Änderung rückgängig machen
    UndoRequested,
    /// Rückgängig gemachte Änderung wiederherstellen
    RedoRequested,
    /// Neue Optionen übernehmen
    OptionsChanged { options: EditorOptions },
}
