//! Bézier-Auswertung und stückweise Abtastung von Kontrollpunkt-Folgen.

use glam::DVec2;

/// Obergrenze für Stützpunkte pro Kurvenstück; größere Werte werden gekappt.
pub const MAX_PART: usize = 10_000;

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Länge eines Linienzugs.
pub fn polyline_length(points: &[DVec2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Stückweise quadratische Bézier-Kurve.
///
/// Je drei Punkte (P0, C, P1) bilden ein Stück, Folgestücke teilen sich den Endpunkt.
/// `part` Stützpunkte pro Stück (höchstens [`MAX_PART`]). Unter drei Punkten
/// wird die Eingabe unverändert zurückgegeben (gerade Strecke).
pub fn sample_quadratic(points: &[DVec2], part: usize) -> Vec<DVec2> {
    sample_pieces(points, 2, part, |piece, t| {
        quadratic_bezier(piece[0], piece[1], piece[2], t)
    })
}

/// Stückweise kubische Bézier-Kurve.
///
/// Je vier Punkte (P0, C1, C2, P1) bilden ein Stück. Unter vier Punkten wird die
/// Eingabe unverändert zurückgegeben.
pub fn sample_cubic(points: &[DVec2], part: usize) -> Vec<DVec2> {
    sample_pieces(points, 3, part, |piece, t| {
        cubic_bezier(piece[0], piece[1], piece[2], piece[3], t)
    })
}

/// Gemeinsame Abtastung für Bézier-Stücke vom Grad `degree`.
///
/// Punkte, die kein vollständiges Stück mehr füllen, werden als gerade
/// Segmente angehängt.
fn sample_pieces(
    points: &[DVec2],
    degree: usize,
    part: usize,
    eval: impl Fn(&[DVec2], f64) -> DVec2,
) -> Vec<DVec2> {
    if points.len() <= degree {
        return points.to_vec();
    }
    let part = part.clamp(1, MAX_PART);
    let pieces = (points.len() - 1) / degree;
    let mut result =
        Vec::with_capacity(pieces.saturating_mul(part).saturating_add(points.len()));

    for piece in 0..pieces {
        let start = piece * degree;
        let piece_points = &points[start..=start + degree];
        for i in 0..part {
            let t = i as f64 / part as f64;
            result.push(eval(piece_points, t));
        }
    }

    // Endpunkt des letzten Stücks plus übrige Punkte (gerade)
    result.extend_from_slice(&points[pieces * degree..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn quadratic_bezier_endpoints_and_mid() {
        let p0 = DVec2::new(0.0, 0.0);
        let p1 = DVec2::new(5.0, 10.0);
        let p2 = DVec2::new(10.0, 0.0);

        assert_eq!(quadratic_bezier(p0, p1, p2, 0.0), p0);
        assert_eq!(quadratic_bezier(p0, p1, p2, 1.0), p2);
        let mid = quadratic_bezier(p0, p1, p2, 0.5);
        assert_abs_diff_eq!(mid.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn cubic_bezier_symmetry() {
        // Symmetrische S-Kurve → Mittelpunkt bei (5, 5)
        let mid = cubic_bezier(
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 10.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            0.5,
        );
        assert_abs_diff_eq!(mid.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn quadratic_sampling_count_and_endpoints() {
        let points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(5.0, 10.0),
            DVec2::new(10.0, 0.0),
        ];
        let sampled = sample_quadratic(&points, 50);
        assert_eq!(sampled.len(), 51);
        assert_eq!(sampled[0], points[0]);
        assert_eq!(*sampled.last().unwrap(), points[2]);
    }

    #[test]
    fn two_points_stay_a_straight_segment() {
        let points = [DVec2::ZERO, DVec2::new(4.0, 0.0)];
        assert_eq!(sample_quadratic(&points, 50), points.to_vec());
        assert_eq!(sample_cubic(&points, 50), points.to_vec());
    }

    #[test]
    fn cubic_needs_four_points() {
        let three = [DVec2::ZERO, DVec2::ONE, DVec2::new(2.0, 0.0)];
        assert_eq!(sample_cubic(&three, 10), three.to_vec());

        let four = [DVec2::ZERO, DVec2::ONE, DVec2::new(2.0, 1.0), DVec2::new(3.0, 0.0)];
        let sampled = sample_cubic(&four, 10);
        assert_eq!(sampled.len(), 11);
        assert_eq!(*sampled.last().unwrap(), four[3]);
    }

    #[test]
    fn leftover_points_are_appended_straight() {
        let points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(3.0, 3.0),
        ];
        let sampled = sample_quadratic(&points, 4);
        // 4 Stützpunkte + Stück-Endpunkt + übriger Punkt
        assert_eq!(sampled.len(), 6);
        assert_eq!(sampled[4], points[2]);
        assert_eq!(sampled[5], points[3]);
    }

    #[test]
    fn zero_part_is_treated_as_one() {
        let points = [DVec2::ZERO, DVec2::ONE, DVec2::new(2.0, 0.0)];
        assert_eq!(sample_quadratic(&points, 0), vec![points[0], points[2]]);
    }

    #[test]
    fn huge_part_is_capped() {
        let points = [DVec2::ZERO, DVec2::ONE, DVec2::new(2.0, 0.0)];
        let sampled = sample_quadratic(&points, usize::MAX);
        assert_eq!(sampled.len(), MAX_PART + 1);
        assert_eq!(*sampled.last().unwrap(), points[2]);
    }

    #[test]
    fn polyline_length_sums_segments() {
        let points = [DVec2::ZERO, DVec2::new(3.0, 4.0), DVec2::new(3.0, 10.0)];
        assert_abs_diff_eq!(polyline_length(&points), 11.0, epsilon = 1e-12);
    }
}
