//! Zentrale Konfiguration für den Polylinien-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Hit-Test & Snapping ─────────────────────────────────────────────

/// Radius (Welteinheiten), in dem ein Punkt per Klick getroffen wird.
pub const POINT_HIT_RADIUS: f64 = 10.0;
/// Radius (Welteinheiten), in dem ein Endpunkt auf den Startpunkt einrastet.
pub const CLOSE_SNAP_RADIUS: f64 = 24.0;
/// Winkelschwelle (Grad) für Tangenten-/Lot-Snap.
pub const SNAP_ANGLE_THRESHOLD_DEG: f64 = 5.0;

// ── Gesten ──────────────────────────────────────────────────────────

/// Haltedauer (ms), nach der ein Klick zum Bogen-Ziehen wird.
pub const HOLD_DURATION_MS: u64 = 200;
/// Segmente unterhalb dieser Länge gelten als versehentlich (Tippen statt Ziehen).
pub const DEGENERATE_SEGMENT_LENGTH: f64 = 2.0;
/// Mindest-Bewegung (Welteinheiten), bevor ein Punkt-Drag beginnt.
pub const DRAG_THRESHOLD: f64 = 3.0;

// ── Tastatur ────────────────────────────────────────────────────────

/// Verschiebung pro Pfeiltaste.
pub const NUDGE_STEP: f64 = 1.0;
/// Verschiebung pro Pfeiltaste mit Shift.
pub const NUDGE_STEP_LARGE: f64 = 10.0;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 200;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `polyline_arc_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Hit-Test & Snapping ─────────────────────────────────────
    /// Hit-Radius für Punkte in Welteinheiten
    pub point_hit_radius: f64,
    /// Einrast-Radius zum Schließen einer Polylinie
    pub close_snap_radius: f64,
    /// Winkelschwelle für Tangenten-/Lot-Snap in Grad
    pub snap_angle_threshold_deg: f64,

    // ── Gesten ──────────────────────────────────────────────────
    /// Haltedauer bis zum Bogen-Modus in Millisekunden
    pub hold_duration_ms: u64,
    /// Länge, unter der ein neues Bogensegment verworfen wird
    pub degenerate_segment_length: f64,
    /// Bewegungsschwelle für Punkt-Drag
    pub drag_threshold: f64,

    // ── Tastatur ────────────────────────────────────────────────
    /// Pfeiltasten-Schritt
    pub nudge_step: f64,
    /// Pfeiltasten-Schritt mit Shift
    pub nudge_step_large: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_hit_radius: POINT_HIT_RADIUS,
            close_snap_radius: CLOSE_SNAP_RADIUS,
            snap_angle_threshold_deg: SNAP_ANGLE_THRESHOLD_DEG,

            hold_duration_ms: HOLD_DURATION_MS,
            degenerate_segment_length: DEGENERATE_SEGMENT_LENGTH,
            drag_threshold: DRAG_THRESHOLD,

            nudge_step: NUDGE_STEP,
            nudge_step_large: NUDGE_STEP_LARGE,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("polyline_arc_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("polyline_arc_editor.toml")
    }

    /// Winkelschwelle des Tangenten-/Lot-Snaps in Radiant.
    pub fn snap_angle_threshold_rad(&self) -> f64 {
        self.snap_angle_threshold_deg.to_radians()
    }

    /// Schritt für Pfeiltasten (mit Shift: großer Schritt).
    pub fn nudge_distance(&self, shift: bool) -> f64 {
        if shift {
            self.nudge_step_large
        } else {
            self.nudge_step
        }
    }
}
