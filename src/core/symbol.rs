//! Plotting-Symbol: Variante, Kontrollpunkte und abgeleitete Outline.

use super::{Outline, Variant};
use crate::shapes::compute_outline;
use glam::DVec2;

/// ID eines Symbols im Host-Layer
pub type SymbolId = u64;

/// Persistenz-Zustand eines Symbols im Host-Layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureState {
    /// Unverändert seit dem Laden
    #[default]
    Unknown,
    /// Neu gezeichnet, noch nicht gespeichert
    Insert,
    /// Geändert
    Update,
    /// Zum Löschen markiert
    Delete,
}

/// Ein Plotting-Symbol.
///
/// Die Kontrollpunkte gehören exklusiv dem Symbol; `Clone` kopiert sie tief.
/// Jede Änderung an Kontrollpunkten oder Variante berechnet die Outline neu.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    variant: Variant,
    control_points: Vec<DVec2>,
    outline: Outline,
    state: FeatureState,
}

impl Symbol {
    /// Erstellt ein Symbol und berechnet die Outline.
    pub fn new(variant: Variant, control_points: Vec<DVec2>) -> Self {
        let outline = compute_outline(&variant, &control_points);
        Self {
            variant,
            control_points,
            outline,
            state: FeatureState::Unknown,
        }
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    pub fn control_points(&self) -> &[DVec2] {
        &self.control_points
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn state(&self) -> FeatureState {
        self.state
    }

    pub fn set_state(&mut self, state: FeatureState) {
        self.state = state;
    }

    /// Ersetzt alle Kontrollpunkte. Eine leere Liste wird ignoriert.
    pub fn set_control_points(&mut self, points: Vec<DVec2>) {
        if points.is_empty() {
            log::debug!("Leere Kontrollpunkt-Liste ignoriert");
            return;
        }
        self.control_points = points;
        self.recompute();
    }

    /// Setzt einen einzelnen Kontrollpunkt. Ungültiger Index → keine Änderung.
    pub fn set_control_point(&mut self, index: usize, point: DVec2) -> bool {
        let Some(slot) = self.control_points.get_mut(index) else {
            return false;
        };
        *slot = point;
        self.recompute();
        true
    }

    /// Hängt einen Kontrollpunkt an.
    pub fn push_control_point(&mut self, point: DVec2) {
        self.control_points.push(point);
        self.recompute();
    }

    /// Wechselt Variante bzw. Parameter (z.B. Pfeil-Verhältnis).
    pub fn set_variant(&mut self, variant: Variant) {
        self.variant = variant;
        self.recompute();
    }

    /// Verschiebt alle Kontrollpunkte um `delta`.
    pub fn translate(&mut self, delta: DVec2) {
        if delta == DVec2::ZERO {
            return;
        }
        for point in &mut self.control_points {
            *point += delta;
        }
        self.recompute();
    }

    /// Berechnet die Outline aus den aktuellen Kontrollpunkten neu (idempotent).
    pub fn recompute(&mut self) {
        self.outline = compute_outline(&self.variant, &self.control_points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VariantKind;

    fn arrow() -> Symbol {
        Symbol::new(
            Variant::DiagonalArrow { ratio: 6.0 },
            vec![DVec2::new(0.0, 0.0), DVec2::new(12.0, 0.0)],
        )
    }

    #[test]
    fn clone_is_independent_of_original() {
        let original = arrow();
        let before = original.outline().clone();

        let mut copy = original.clone();
        copy.set_control_point(0, DVec2::new(-5.0, 3.0));

        assert_eq!(original.outline(), &before);
        assert_eq!(original.control_points()[0], DVec2::new(0.0, 0.0));
        assert_ne!(copy.outline(), &before);
    }

    #[test]
    fn empty_point_list_is_ignored() {
        let mut symbol = arrow();
        symbol.set_control_points(Vec::new());
        assert_eq!(symbol.control_points().len(), 2);
        assert!(!symbol.outline().is_empty());
    }

    #[test]
    fn push_control_point_recomputes_outline() {
        let mut symbol = Symbol::new(VariantKind::Polyline.into(), vec![DVec2::ZERO]);
        assert!(symbol.outline().is_empty());
        symbol.push_control_point(DVec2::new(3.0, 4.0));
        assert_eq!(symbol.outline().points().len(), 2);
    }

    #[test]
    fn set_control_point_out_of_range_is_rejected() {
        let mut symbol = arrow();
        assert!(!symbol.set_control_point(5, DVec2::ONE));
    }

    #[test]
    fn translate_moves_every_point() {
        let mut symbol = arrow();
        symbol.translate(DVec2::new(1.0, 2.0));
        assert_eq!(
            symbol.control_points(),
            &[DVec2::new(1.0, 2.0), DVec2::new(13.0, 2.0)]
        );
    }
}
