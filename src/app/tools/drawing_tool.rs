//! DrawingTool-Trait: Schnittstelle für alle Zeichen-Werkzeuge.

use crate::app::events::EditorKey;
use crate::core::Point;
use crate::shared::EditorOptions;

use super::{DrawAction, HoldToken, ToolPreview};

/// Schnittstelle für alle Zeichen-Werkzeuge (Polylinie, Rechteck, Kreis).
///
/// Tools sind zustandsbehaftet (Gesten-Phasen) und liefern pro Event eine
/// deklarative `DrawAction`. Die Übernahme fertiger Formen erfolgt zentral
/// im Handler, Tools mutieren nie den Shape-Store.
pub trait DrawingTool {
    /// Anzeigename für Toolbar
    fn name(&self) -> &str;

    /// Statustext (z.B. "Startpunkt klicken")
    fn status_text(&self) -> &str;

    /// Maustaste gedrückt.
    fn on_pointer_down(&mut self, pos: Point, shift: bool) -> DrawAction;

    /// Maus bewegt (mit oder ohne gedrückte Taste).
    fn on_pointer_move(&mut self, pos: Point, shift: bool) -> DrawAction;

    /// Maustaste losgelassen.
    fn on_pointer_up(&mut self, pos: Point, shift: bool) -> DrawAction;

    /// Taste gedrückt. `DrawAction::Unhandled` überlässt die Taste dem Aufrufer.
    fn on_key(&mut self, key: EditorKey, shift: bool) -> DrawAction;

    /// Doppelklick.
    fn on_double_click(&mut self, _pos: Point, _shift: bool) -> DrawAction {
        DrawAction::None
    }

    /// Der vom Host geplante Halte-Timer ist abgelaufen.
    fn on_hold_elapsed(&mut self, _token: HoldToken) -> DrawAction {
        DrawAction::None
    }

    /// Aktuell scharfer Halte-Timer, den der Host planen soll.
    fn armed_hold(&self) -> Option<HoldToken> {
        None
    }

    /// Werkzeug wird verlassen: angefangene Form übergeben oder verwerfen.
    fn deactivate(&mut self) -> DrawAction;

    /// Hat das Tool angefangene Eingaben?
    ///
    /// Solange das zutrifft, gehen alle Pointer-Events an das Tool statt an die Punkt-Bearbeitung.
    fn has_pending_input(&self) -> bool;

    /// Vorschau-Daten für das Rendering.
    fn preview(&self) -> ToolPreview;

    /// Radien und Schwellen aus den Optionen übernehmen.
    fn set_options(&mut self, _options: &EditorOptions) {}
}
