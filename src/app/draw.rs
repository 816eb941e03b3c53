//! Zeichen-Sitzung: ein neues Symbol Punkt für Punkt anlegen.
//!
//! Klicks setzen Kontrollpunkte, Zeigerbewegungen erzeugen eine Vorschau mit
//! schwebendem Punkt (Freihandlinie: Punkte werden angehängt). Ist die maximale
//! Punktzahl erreicht, meldet `on_click` den Abschluss; sonst beendet der
//! Aufrufer mit `finish` (z.B. Doppelklick).

use crate::core::{FeatureState, Outline, Symbol, Variant, VariantKind};
use crate::shapes::compute_outline;
use glam::DVec2;

/// Ergebnis eines Klicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawAction {
    /// Weitere Punkte möglich
    Continue,
    /// Maximale Punktzahl erreicht, `finish` aufrufen
    Complete,
}

/// Laufende Erstellung eines Symbols.
#[derive(Debug, Clone)]
pub struct DrawSession {
    variant: Variant,
    points: Vec<DVec2>,
    cursor: Option<DVec2>,
}

impl DrawSession {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            points: Vec::new(),
            cursor: None,
        }
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Bisher gesetzte Kontrollpunkte (ohne schwebenden Punkt).
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn is_drawing(&self) -> bool {
        !self.points.is_empty()
    }

    /// Setzt einen Kontrollpunkt.
    pub fn on_click(&mut self, position: DVec2) -> DrawAction {
        self.points.push(position);
        self.cursor = None;
        match self.variant.kind().max_points() {
            Some(max) if self.points.len() >= max => DrawAction::Complete,
            _ => DrawAction::Continue,
        }
    }

    /// Zeigerbewegung; ohne ersten Punkt wirkungslos.
    pub fn on_move(&mut self, position: DVec2) {
        if self.points.is_empty() {
            return;
        }
        if self.variant.kind() == VariantKind::Freeline {
            if self.points.last() != Some(&position) {
                self.points.push(position);
            }
        } else {
            self.cursor = Some(position);
        }
    }

    /// Vorschau-Outline inklusive schwebendem Punkt.
    pub fn preview(&self) -> Outline {
        match self.cursor {
            Some(cursor) => {
                let mut points = self.points.clone();
                points.push(cursor);
                compute_outline(&self.variant, &points)
            }
            None => compute_outline(&self.variant, &self.points),
        }
    }

    /// Beendet die Sitzung.
    ///
    /// Aufeinanderfolgende doppelte Punkte (Doppelklick) werden zusammengefasst.
    /// Unter der Mindestpunktzahl entsteht kein Symbol. Das neue Symbol hat
    /// den Zustand `Insert`.
    pub fn finish(&mut self) -> Option<Symbol> {
        let mut points = std::mem::take(&mut self.points);
        self.cursor = None;
        points.dedup();

        if points.len() < self.variant.min_points() {
            log::debug!(
                "{}: {} von {} Punkten, kein Symbol",
                self.variant.kind().name(),
                points.len(),
                self.variant.min_points()
            );
            return None;
        }

        let mut symbol = Symbol::new(self.variant, points);
        symbol.set_state(FeatureState::Insert);
        Some(symbol)
    }

    /// Verwirft alle Punkte.
    pub fn cancel(&mut self) {
        self.points.clear();
        self.cursor = None;
    }
}
