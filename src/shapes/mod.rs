//! Symbol-Bibliothek: eine Konstruktion pro Variante.
//!
//! Alle Konstruktionen sind reine Funktionen `(Variante, Kontrollpunkte) → Outline`.
//! Zu wenige oder entartete Kontrollpunkte ergeben eine leere Outline, nie einen Fehler.

pub mod arrow;
pub mod line;
pub mod polygon;

use crate::core::{Outline, Variant};
use glam::DVec2;

/// Berechnet die Outline für eine Variante aus ihren Kontrollpunkten.
pub fn compute_outline(variant: &Variant, points: &[DVec2]) -> Outline {
    if points.len() < variant.min_points() {
        return Outline::empty();
    }
    match *variant {
        Variant::Polyline | Variant::Freeline => line::polyline(points),
        Variant::ClosedPolygon => polygon::closed_polygon(points),
        Variant::Rectangle => polygon::rectangle(points),
        Variant::DiagonalArrow { ratio } => arrow::diagonal_arrow(points, ratio),
        Variant::DoveTailDiagonalArrow { ratio } => arrow::dove_tail_diagonal_arrow(points, ratio),
        Variant::GatheringPlace => polygon::gathering_place(points),
        Variant::BezierCurve2 { part } => line::bezier_curve2(points, part),
        Variant::BezierCurve3 { part } => line::bezier_curve3(points, part),
        Variant::CardinalCurve { part } => line::cardinal_curve(points, part),
    }
}
