//! Polyline/Arc Editor: Skript-Runner.
//!
//! Spielt eine JSON-Datei mit Eingabe-Schritten (Pointer, Tasten, Halte-Timer)
//! gegen den Editor-Kern ab und gibt alle abgeschlossenen Formen als JSON aus.
//! Ohne Pfad wird von stdin gelesen.
//!
//! Aufruf: `polyline-arc-editor [--verbose] [SKRIPT.json]`. Mit `--verbose`
//! landet zusätzlich das Command-Protokoll auf stderr.

use anyhow::Context;
use polyline_arc_editor::{
    AppController, AppIntent, AppState, EditorKey, EditorOptions, EventOutcome, Point,
};
use serde::Deserialize;
use std::io::Read;

/// Ein Eingabe-Schritt im Skript.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum ScriptStep {
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        shift: bool,
    },
    Move {
        x: f64,
        y: f64,
        #[serde(default)]
        shift: bool,
    },
    Up {
        x: f64,
        y: f64,
        #[serde(default)]
        shift: bool,
    },
    DoubleClick {
        x: f64,
        y: f64,
        #[serde(default)]
        shift: bool,
    },
    Key {
        key: EditorKey,
        #[serde(default)]
        shift: bool,
    },
    /// Lässt den aktuell scharfen Halte-Timer ablaufen
    Hold,
    Tool {
        index: usize,
    },
    Deactivate,
    Undo,
    Redo,
}

impl ScriptStep {
    /// Übersetzt den Schritt in einen Intent. `Hold` ohne scharfen Timer ergibt `None`.
    fn into_intent(self, state: &AppState) -> Option<AppIntent> {
        let intent = match self {
            ScriptStep::Down { x, y, shift } => AppIntent::PointerDown {
                pos: Point::new(x, y),
                shift,
            },
            ScriptStep::Move { x, y, shift } => AppIntent::PointerMoved {
                pos: Point::new(x, y),
                shift,
            },
            ScriptStep::Up { x, y, shift } => AppIntent::PointerUp {
                pos: Point::new(x, y),
                shift,
            },
            ScriptStep::DoubleClick { x, y, shift } => AppIntent::DoubleClick {
                pos: Point::new(x, y),
                shift,
            },
            ScriptStep::Key { key, shift } => AppIntent::KeyPressed { key, shift },
            ScriptStep::Hold => AppIntent::HoldTimerElapsed {
                token: state.editor.armed_hold()?,
            },
            ScriptStep::Tool { index } => AppIntent::ToolSelected { index },
            ScriptStep::Deactivate => AppIntent::ToolDeactivated,
            ScriptStep::Undo => AppIntent::UndoRequested,
            ScriptStep::Redo => AppIntent::RedoRequested,
        };
        Some(intent)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Polyline/Arc Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let args = ReplayArgs::parse(std::env::args().skip(1))?;
    let script = read_script(args.script)?;
    let steps: Vec<ScriptStep> =
        serde_json::from_str(&script).context("Skript ist kein gültiges JSON")?;

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    for (index, step) in steps.into_iter().enumerate() {
        let Some(intent) = step.into_intent(&state) else {
            log::warn!("Schritt {}: kein Halte-Timer aktiv, übersprungen", index);
            continue;
        };
        let outcome = controller
            .handle_intent(&mut state, intent)
            .with_context(|| format!("Schritt {} fehlgeschlagen", index))?;
        if let EventOutcome::Completed(shape) = outcome {
            log::info!("Schritt {}: {:?} {} abgeschlossen", index, shape.kind(), shape.id());
        }
    }

    // Angefangene Form übergeben
    controller.handle_intent(&mut state, AppIntent::ToolDeactivated)?;

    if args.verbose {
        eprintln!(
            "Command-Protokoll ({} gehalten, {} gesamt):",
            state.command_log.len(),
            state.command_log.total_recorded()
        );
        for entry in state.command_log.iter() {
            eprintln!("{}", entry);
        }
    }

    let shapes: Vec<_> = state.shapes.iter().collect();
    println!("{}", serde_json::to_string_pretty(&shapes)?);
    Ok(())
}

/// Kommandozeile des Skript-Runners.
#[derive(Debug, Default, PartialEq)]
struct ReplayArgs {
    script: Option<String>,
    verbose: bool,
}

impl ReplayArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut parsed = Self::default();
        for arg in args {
            match arg.as_str() {
                "-v" | "--verbose" => parsed.verbose = true,
                flag if flag.starts_with('-') => anyhow::bail!("Unbekannte Option '{}'", flag),
                _ if parsed.script.is_some() => {
                    anyhow::bail!("Nur ein Skript-Pfad erlaubt, zusätzlich '{}'", arg)
                }
                _ => parsed.script = Some(arg),
            }
        }
        Ok(parsed)
    }
}

fn read_script(path: Option<String>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Skript '{}' konnte nicht gelesen werden", path)),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("stdin konnte nicht gelesen werden")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<ReplayArgs> {
        ReplayArgs::parse(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn verbose_flag_may_precede_or_follow_script() {
        let expected = ReplayArgs {
            script: Some("zeichnung.json".into()),
            verbose: true,
        };
        assert_eq!(parse(&["--verbose", "zeichnung.json"]).ok(), Some(expected));
        assert!(parse(&["zeichnung.json", "-v"]).is_ok_and(|args| args.verbose));
        assert_eq!(parse(&[]).ok(), Some(ReplayArgs::default()));
    }

    #[test]
    fn unknown_flag_and_second_script_are_rejected() {
        assert!(parse(&["--quiet"]).is_err());
        assert!(parse(&["a.json", "b.json"]).is_err());
    }
}
