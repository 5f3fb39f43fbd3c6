use crate::core::Measurement;

/// Ergebnis eines verarbeiteten Intents für den Host.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EventOutcome {
    /// Nichts geändert
    #[default]
    Nothing,
    /// Zustand oder Vorschau geändert, neu zeichnen
    Changed,
    /// Eine Form wurde abgeschlossen und im Shape-Store abgelegt (mit vergebener ID)
    Completed(Measurement),
}

impl EventOutcome {
    /// Aus einem Änderungs-Flag.
    pub fn changed_if(changed: bool) -> Self {
        if changed {
            EventOutcome::Changed
        } else {
            EventOutcome::Nothing
        }
    }

    /// Führt zwei Ergebnisse zusammen: `Completed` vor `Changed` vor `Nothing`.
    pub fn merge(self, other: EventOutcome) -> EventOutcome {
        match (self, other) {
            (EventOutcome::Completed(m), _) | (_, EventOutcome::Completed(m)) => {
                EventOutcome::Completed(m)
            }
            (EventOutcome::Changed, _) | (_, EventOutcome::Changed) => EventOutcome::Changed,
            _ => EventOutcome::Nothing,
        }
    }

    /// True wenn neu gezeichnet werden sollte.
    pub fn is_changed(&self) -> bool {
        !matches!(self, EventOutcome::Nothing)
    }
}
