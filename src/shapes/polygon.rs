//! Flächensymbole: Polygon, Rechteck, Sammelraum.

use crate::core::Outline;
use crate::geometry::{angled_vector, closed_cardinal_points, sample_cubic, CARDINAL_TENSION, RIGHT_ANGLE};
use glam::DVec2;

/// Stützpunkte pro Kurvenstück beim Sammelraum.
pub const GATHERING_PLACE_PART: usize = 20;
/// Höhe der Sammelraum-Kuppe relativ zur Basislänge.
const GATHERING_APEX_FACTOR: f64 = 0.75;
/// Tiefe der Sammelraum-Unterseite relativ zur Basislänge.
const GATHERING_BELLY_FACTOR: f64 = 0.1;

/// Polygon: zwei Punkte → offene Strecke, ab drei Punkten geschlossener Ring.
pub fn closed_polygon(points: &[DVec2]) -> Outline {
    match points.len() {
        0 | 1 => Outline::empty(),
        2 => Outline::path(points.to_vec()),
        _ => Outline::ring(points.to_vec()),
    }
}

/// Achsparalleles Rechteck mit erstem und letztem Punkt als Gegenecken.
///
/// Eckreihenfolge: S, (E.x, S.y), E, (S.x, E.y).
pub fn rectangle(points: &[DVec2]) -> Outline {
    let (Some(&start), Some(&end)) = (points.first(), points.last()) else {
        return Outline::empty();
    };
    if points.len() < 2 || start == end {
        return Outline::empty();
    }
    Outline::ring(vec![
        start,
        DVec2::new(end.x, start.y),
        end,
        DVec2::new(start.x, end.y),
    ])
}

/// Sammelraum: geschlossene Kardinal-Kurve über der Basis der ersten beiden Punkte.
///
/// Die Kurve läuft durch Start, Kuppe (links der Basis), Ende und eine flache
/// Unterseite rechts der Basis.
pub fn gathering_place(points: &[DVec2]) -> Outline {
    if points.len() < 2 || points[0] == points[1] {
        return Outline::empty();
    }
    let start = points[0];
    let end = points[1];
    let base = end - start;
    let length = base.length();
    let midpoint = (start + end) * 0.5;
    let (normal, _) = angled_vector(base, RIGHT_ANGLE, 1.0);

    let apex = midpoint + normal * (length * GATHERING_APEX_FACTOR);
    let belly = midpoint - normal * (length * GATHERING_BELLY_FACTOR);

    let interpolation = closed_cardinal_points(&[start, apex, end, belly], CARDINAL_TENSION);
    let mut ring = sample_cubic(&interpolation, GATHERING_PLACE_PART);
    // Schlusspunkt = Startpunkt, im Ring nicht wiederholen
    ring.pop();
    Outline::ring(ring)
}
