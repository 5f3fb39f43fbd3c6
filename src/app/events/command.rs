use super::EditorKey;
use crate::app::tools::HoldToken;
use crate::core::{Point, PointHit};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Zeichen-Werkzeug ===
    /// Pointer-Down an das aktive Werkzeug
    ToolPointerDown { pos: Point, shift: bool },
    /// Pointer-Move an das aktive Werkzeug
    ToolPointerMove { pos: Point, shift: bool },
    /// Pointer-Up an das aktive Werkzeug
    ToolPointerUp { pos: Point, shift: bool },
    /// Doppelklick an das aktive Werkzeug
    ToolDoubleClick { pos: Point, shift: bool },
    /// Taste an das aktive Werkzeug (Backspace/Entf mit Fallback auf Form-Löschen)
    ToolKey { key: EditorKey, shift: bool },
    /// Halte-Timer an das aktive Werkzeug
    ToolHoldElapsed { token: HoldToken },
    /// Werkzeug per Index aktivieren
    SelectTool { index: usize },
    /// Aktives Werkzeug deaktivieren (Übergabe oder Verwerfen)
    DeactivateTool,

    // === Punkt-Bearbeitung ===
    /// Hover-Punkt unter dem Cursor aktualisieren
    UpdateHover { pos: Point },
    /// Punkt gegriffen (Drag noch nicht aktiv)
    BeginPointDrag { hit: PointHit, pos: Point },
    /// Punkt-Drag fortsetzen (aktiviert sich nach Überschreiten der Schwelle)
    UpdatePointDrag { pos: Point, shift: bool },
    /// Punkt-Drag beenden (ohne Bewegung: Punkt selektieren)
    EndPointDrag { pos: Point, shift: bool },
    /// Punkt entfernen
    RemovePoint { hit: PointHit },
    /// Selektierten Punkt entfernen
    RemoveSelectedPoint,
    /// Selektierten Punkt verschieben
    NudgeSelectedPoint { delta: Point },
    /// Selektion zum nächsten/vorigen Punkt der Form
    CycleSelection { backwards: bool },
    /// Selektion aufheben
    ClearSelection,

    // === History & Optionen ===
    /// Undo
    Undo,
    /// Redo
    Redo,
    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
}
