//! Edit-Sitzung: aktives Symbol, Proxies, Änderungs-Flag, laufender Drag.

use super::host::ControlPointProxy;
use crate::core::SymbolId;
use glam::DVec2;

/// Was gerade gezogen wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Einzelner Kontrollpunkt (Index)
    Point(usize),
    /// Ganzes Symbol
    Body,
}

/// Zustand eines laufenden Drags.
///
/// Die Kontrollpunkte werden auf einer Arbeitskopie verändert und erst bei
/// `drag_complete` ins Symbol übernommen.
#[derive(Debug, Clone)]
pub struct DragState {
    pub mode: DragMode,
    /// Letzte Zeigerposition in Kartenkoordinaten
    pub last_position: DVec2,
    /// Arbeitskopie der Kontrollpunkte
    pub working: Vec<DVec2>,
    /// Summierte Verschiebung beim Körper-Drag
    pub body_offset: DVec2,
}

/// Phase der Sitzung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    Idle,
    Selected,
    Dragging,
}

/// Sitzungsdaten des Edit-Controllers (höchstens ein aktives Symbol).
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    pub(crate) active: Option<SymbolId>,
    pub(crate) proxies: Vec<ControlPointProxy>,
    pub(crate) modified: bool,
    pub(crate) drag: Option<DragState>,
}

impl EditSession {
    pub fn active(&self) -> Option<SymbolId> {
        self.active
    }

    pub fn proxies(&self) -> &[ControlPointProxy] {
        &self.proxies
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn drag_mode(&self) -> Option<DragMode> {
        self.drag.as_ref().map(|d| d.mode)
    }

    /// Arbeitskopie während eines Drags.
    pub fn working_points(&self) -> Option<&[DVec2]> {
        self.drag.as_ref().map(|d| d.working.as_slice())
    }

    pub fn phase(&self) -> EditPhase {
        match (self.active, &self.drag) {
            (None, _) => EditPhase::Idle,
            (Some(_), None) => EditPhase::Selected,
            (Some(_), Some(_)) => EditPhase::Dragging,
        }
    }

    /// Zurück nach Idle.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
