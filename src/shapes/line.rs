//! Liniensymbole: Linienzug, Freihandlinie, Bézier- und Kardinal-Kurven.

use crate::core::Outline;
use crate::geometry::{sample_cardinal, sample_cubic, sample_quadratic};
use glam::DVec2;

/// Linienzug bzw. Freihandlinie: die Kontrollpunkte selbst als offener Pfad.
pub fn polyline(points: &[DVec2]) -> Outline {
    if points.len() < 2 {
        return Outline::empty();
    }
    Outline::path(points.to_vec())
}

/// Quadratische Bézier-Kurve mit `part` Stützpunkten pro Stück.
pub fn bezier_curve2(points: &[DVec2], part: usize) -> Outline {
    if points.len() < 2 {
        return Outline::empty();
    }
    Outline::path(sample_quadratic(points, part))
}

/// Kubische Bézier-Kurve; unter vier Punkten gerader Linienzug.
pub fn bezier_curve3(points: &[DVec2], part: usize) -> Outline {
    if points.len() < 2 {
        return Outline::empty();
    }
    Outline::path(sample_cubic(points, part))
}

/// Kardinal-Kurve durch alle Kontrollpunkte; unter drei Punkten gerade Strecke.
pub fn cardinal_curve(points: &[DVec2], part: Option<usize>) -> Outline {
    if points.len() < 2 {
        return Outline::empty();
    }
    Outline::path(sample_cardinal(points, part))
}
