//! Schräge Pfeile (gerade und gekrümmt) sowie die Schwalbenschwanz-Variante.
//!
//! Breite `w = Gesamtlänge / ratio`. Zwei Punkte ergeben einen geraden Pfeil,
//! ab drei Punkten folgt der Schaft dem Linienzug und verjüngt sich zur Spitze.

use crate::core::Outline;
use crate::geometry::{
    angled_vector, angular_bisector, line_intersection, polyline_length, sample_quadratic,
    RIGHT_ANGLE,
};
use glam::DVec2;

/// Stützpunkte pro Bézier-Stück für die geglätteten Schaftseiten.
pub const ARROW_CURVE_PART: usize = 20;

/// Pfeil-Ring plus die Werte, die der Schwalbenschwanz benötigt.
struct ArrowRing {
    ring: Vec<DVec2>,
    tail: DVec2,
    tail_direction: DVec2,
    width: f64,
}

/// Kopfgeometrie: Schulterpunkte am Schaft und äußere Dreieckspunkte.
struct Head {
    shoulder_l: DVec2,
    shoulder_r: DVec2,
    barb_l: DVec2,
    barb_r: DVec2,
}

impl Head {
    /// Schultern = Seitenvektoren / ratio ab `base`, Widerhaken nach außen gespiegelt.
    fn new(side_l: DVec2, side_r: DVec2, base: DVec2, ratio: f64) -> Self {
        let shoulder_l = side_l / ratio + base;
        let shoulder_r = side_r / ratio + base;
        Self {
            shoulder_l,
            shoulder_r,
            barb_l: shoulder_l * 2.0 - shoulder_r,
            barb_r: shoulder_r * 2.0 - shoulder_l,
        }
    }
}

/// Schräger Pfeil.
pub fn diagonal_arrow(points: &[DVec2], ratio: f64) -> Outline {
    match arrow_ring(points, ratio) {
        Some(arrow) => Outline::ring(arrow.ring),
        None => Outline::empty(),
    }
}

/// Schräger Pfeil mit eingekerbtem Schwanz (Kerbe `w/2` tief entlang des ersten Segments).
pub fn dove_tail_diagonal_arrow(points: &[DVec2], ratio: f64) -> Outline {
    let Some(arrow) = arrow_ring(points, ratio) else {
        return Outline::empty();
    };
    let notch = arrow.tail + arrow.tail_direction * (arrow.width * 0.5);
    let mut ring = arrow.ring;
    ring.push(notch);
    Outline::ring(ring)
}

fn arrow_ring(points: &[DVec2], ratio: f64) -> Option<ArrowRing> {
    if !(ratio.is_finite() && ratio > 0.0) {
        log::debug!("Ungültiges Pfeil-Verhältnis {ratio}, keine Outline");
        return None;
    }
    // Doppelte Punkte würden Segmente der Länge 0 erzeugen
    let mut points = points.to_vec();
    points.dedup();

    match points.len() {
        0 | 1 => None,
        2 => Some(straight_arrow(points[0], points[1], ratio)),
        _ => Some(curved_arrow(&points, ratio)),
    }
}

/// Gerader Pfeil als 7-Punkte-Ring:
/// Schwanz links, Schulter links, Widerhaken links, Spitze, Widerhaken rechts,
/// Schulter rechts, Schwanz rechts.
fn straight_arrow(start: DVec2, end: DVec2, ratio: f64) -> ArrowRing {
    let axis = end - start;
    let length = axis.length();
    let width = length / ratio;

    // Mittelpunkt der Kopf-Basis
    let head_base = start + axis * ((ratio - 1.0) / ratio);

    let (side_l, side_r) = angled_vector(axis, RIGHT_ANGLE, width / 2.0);
    let tail_l = start + side_l;
    let tail_r = start + side_r;
    let head = Head::new(side_l, side_r, head_base, ratio);

    ArrowRing {
        ring: vec![
            tail_l,
            head.shoulder_l,
            head.barb_l,
            end,
            head.barb_r,
            head.shoulder_r,
            tail_r,
        ],
        tail: start,
        tail_direction: axis / length,
        width,
    }
}

/// Gekrümmter Pfeil entlang des Linienzugs `points` (mindestens drei, ohne Duplikate).
fn curved_arrow(points: &[DVec2], ratio: f64) -> ArrowRing {
    let n = points.len();
    let total = polyline_length(points);
    let width = total / ratio;
    // Halber Öffnungswinkel des sich verjüngenden Schafts
    let half_angle = (width / (2.0 * total)).atan();

    let first_axis = points[1] - points[0];
    let (side_l, side_r) = angled_vector(first_axis, RIGHT_ANGLE, width / 2.0);
    let tail_l = points[0] + side_l;
    let tail_r = points[0] + side_r;

    let mut chain_l = Vec::with_capacity(2 * n);
    let mut chain_r = Vec::with_capacity(2 * n);
    let mut prev_l = tail_l;
    let mut prev_r = tail_r;

    for window in points.windows(3) {
        let (u1, u2, u3) = (window[0], window[1], window[2]);
        let v12 = u2 - u1;
        let v23 = u3 - u2;

        // Die linke Seite läuft leicht nach rechts ein und umgekehrt
        let (turn_l, turn_r) = angled_vector(v12, half_angle, 1.0);
        let bisector = corner_bisector(v12, v23);

        let next_l = line_intersection(turn_r, bisector, prev_l, u2);
        let next_r = line_intersection(turn_l, bisector, prev_r, u2);

        chain_l.push((prev_l + next_l) * 0.5);
        chain_l.push(next_l);
        chain_r.push((prev_r + next_r) * 0.5);
        chain_r.push(next_r);

        prev_l = next_l;
        prev_r = next_r;
    }

    let tip = points[n - 1];
    let head = curved_head(points[n - 2], tip, width, ratio);

    chain_l.push((prev_l + head.shoulder_l) * 0.5);
    chain_r.push((prev_r + head.shoulder_r) * 0.5);

    let side_l = sample_quadratic(&chain_l, ARROW_CURVE_PART);
    let side_r = sample_quadratic(&chain_r, ARROW_CURVE_PART);

    let mut ring = Vec::with_capacity(side_l.len() + side_r.len() + 7);
    ring.push(tail_l);
    ring.extend(side_l);
    ring.extend([
        head.shoulder_l,
        head.barb_l,
        tip,
        head.barb_r,
        head.shoulder_r,
    ]);
    ring.extend(side_r.into_iter().rev());
    ring.push(tail_r);

    ArrowRing {
        ring,
        tail: points[0],
        tail_direction: first_axis / first_axis.length(),
        width,
    }
}

/// Kopf am letzten Segment `before` → `tip`.
///
/// Ist das Segment länger als die Pfeilbreite, sitzt die Kopf-Basis `width` vor
/// der Spitze. Sonst (auch bei exakt gleicher Länge) wird der Kopf auf das
/// Segment verkürzt und die Basis liegt auf `before`. An der Grenze fallen
/// beide Basen zusammen.
fn curved_head(before: DVec2, tip: DVec2, width: f64, ratio: f64) -> Head {
    let axis = tip - before;
    let head_length = axis.length();
    let base = if head_length <= width {
        before
    } else {
        tip - axis / head_length * width
    };
    let (side_l, side_r) = angled_vector(tip - base, RIGHT_ANGLE, width / 2.0);
    Head::new(side_l, side_r, base, ratio)
}

/// Winkelhalbierende am Knick zwischen `incoming` und `outgoing`.
///
/// Bei gerader Fortsetzung heben sich die Einheitsvektoren auf; dann wird die
/// Normale des eingehenden Segments verwendet.
fn corner_bisector(incoming: DVec2, outgoing: DVec2) -> DVec2 {
    let bisector = angular_bisector(-incoming, outgoing);
    if bisector.length_squared() > f64::EPSILON {
        bisector
    } else {
        angled_vector(incoming, RIGHT_ANGLE, 1.0).0
    }
}
