//! Benachrichtigungen des Edit-Controllers und ein protokollierender Empfänger.

use crate::core::{FeatureState, Symbol, VariantKind};

/// Empfänger der drei Lebenszyklus-Benachrichtigungen.
///
/// Wird dem Controller bei der Erstellung übergeben.
pub trait NotificationSink {
    /// Vor der Selektion; `false` verhindert sie.
    fn before_modified(&mut self, symbol: &Symbol) -> bool;
    /// Nach jedem abgeschlossenen Drag.
    fn modified(&mut self, symbol: &Symbol);
    /// Nach der Deselektion, mit dem Änderungs-Flag der Sitzung.
    fn after_modified(&mut self, symbol: &Symbol, was_modified: bool);
}

/// Ein aufgezeichnetes Ereignis.
#[derive(Debug, Clone, PartialEq)]
pub enum EditEvent {
    BeforeModified {
        kind: VariantKind,
        allowed: bool,
    },
    Modified {
        kind: VariantKind,
        state: FeatureState,
    },
    AfterModified {
        kind: VariantKind,
        state: FeatureState,
        was_modified: bool,
    },
}

/// Speichert Ereignisse in Reihenfolge; kann Selektionen verbieten.
#[derive(Debug, Default)]
pub struct EventLog {
    entries: Vec<EditEvent>,
    veto: bool,
}

impl EventLog {
    /// Obergrenze; bei Erreichen fällt die ältere Hälfte weg.
    const MAX_ENTRIES: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// `true` lässt künftige `before_modified`-Anfragen scheitern.
    pub fn set_veto(&mut self, veto: bool) {
        self.veto = veto;
    }

    fn record(&mut self, event: EditEvent) {
        if self.entries.len() == Self::MAX_ENTRIES {
            let keep_from = Self::MAX_ENTRIES / 2;
            self.entries.drain(..keep_from);
        }
        self.entries.push(event);
    }

    /// Aufgezeichnete Ereignisse, älteste zuerst.
    pub fn entries(&self) -> &[EditEvent] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Verwirft alle Ereignisse; das Veto bleibt gesetzt.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl NotificationSink for EventLog {
    fn before_modified(&mut self, symbol: &Symbol) -> bool {
        let allowed = !self.veto;
        self.record(EditEvent::BeforeModified {
            kind: symbol.variant().kind(),
            allowed,
        });
        allowed
    }

    fn modified(&mut self, symbol: &Symbol) {
        self.record(EditEvent::Modified {
            kind: symbol.variant().kind(),
            state: symbol.state(),
        });
    }

    fn after_modified(&mut self, symbol: &Symbol, was_modified: bool) {
        self.record(EditEvent::AfterModified {
            kind: symbol.variant().kind(),
            state: symbol.state(),
            was_modified,
        });
    }
}
