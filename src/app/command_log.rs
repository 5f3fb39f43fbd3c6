//! Protokoll der ausgeführten Commands als Ringpuffer.
//!
//! Jeder Eintrag trägt eine fortlaufende Nummer, die auch nach dem Verdrängen
//! alter Einträge weiterzählt. Der Skript-Runner gibt das Protokoll mit
//! `--verbose` aus.

use std::collections::VecDeque;
use std::fmt;

use super::AppCommand;

/// Standard-Kapazität des Protokolls.
pub const DEFAULT_LOG_CAPACITY: usize = 1000;

/// Ein protokollierter Command mit fortlaufender Nummer.
#[derive(Debug, Clone)]
pub struct LoggedCommand {
    /// Nummer seit Start (beginnt bei 1)
    pub seq: u64,
    pub command: AppCommand,
}

impl fmt::Display for LoggedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:>4} {:?}", self.seq, self.command)
    }
}

/// Ringpuffer der zuletzt ausgeführten Commands.
#[derive(Debug)]
pub struct CommandLog {
    entries: VecDeque<LoggedCommand>,
    capacity: usize,
    recorded: u64,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    /// Protokoll mit eigener Kapazität (mindestens ein Eintrag).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            recorded: 0,
        }
    }

    /// Hängt einen Command an; bei voller Kapazität fällt der älteste heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.recorded += 1;
        self.entries.push_back(LoggedCommand {
            seq: self.recorded,
            command: command.clone(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anzahl aller jemals protokollierten Commands, verdrängte eingeschlossen.
    pub fn total_recorded(&self) -> u64 {
        self.recorded
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back().map(|entry| &entry.command)
    }

    /// Gehaltene Einträge, älteste zuerst.
    pub fn iter(&self) -> impl Iterator<Item = &LoggedCommand> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_drops_oldest_and_keeps_counting() {
        let mut log = CommandLog::with_capacity(3);
        log.record(&AppCommand::Undo);
        log.record(&AppCommand::Redo);
        log.record(&AppCommand::DeactivateTool);
        log.record(&AppCommand::Undo);

        assert_eq!(log.len(), 3);
        assert_eq!(log.total_recorded(), 4);
        let seqs: Vec<u64> = log.iter().map(|entry| entry.seq).collect();
        assert_eq!(seqs, vec![2, 3, 4]);
        assert!(matches!(log.last(), Some(AppCommand::Undo)));
    }

    #[test]
    fn display_shows_sequence_and_command() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::Redo);
        let line = log.iter().map(ToString::to_string).next();
        assert_eq!(line.as_deref(), Some("#   1 Redo"));
    }
}
