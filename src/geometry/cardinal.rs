//! Kardinal-Spline: Interpolationspunkte für stückweise kubische Bézier-Kurven.
//!
//! Aus n Kontrollpunkten entstehen 3n−2 Interpolationspunkte
//! `P0, out0, in1, P1, out1, …, in(n-1), P(n-1)`, die anschließend mit
//! [`sample_cubic`] abgetastet werden. Die Kurve läuft durch alle Kontrollpunkte.

use super::curve::sample_cubic;
use glam::DVec2;

/// Spannung der Kardinal-Interpolation.
pub const CARDINAL_TENSION: f64 = 0.4;
/// Standard-Dichte: Stützpunkte je Interpolationspunkt.
pub const CARDINAL_DENSITY_FACTOR: usize = 10;

/// Ein- und Ausgangs-Tangentenpunkt für `current`.
///
/// Die Tangente verläuft parallel zu `next − prev` und wird anteilig zu den
/// Nachbarabständen auf beide Seiten verteilt.
fn handles(prev: DVec2, current: DVec2, next: DVec2, tension: f64) -> (DVec2, DVec2) {
    let d_prev = current.distance(prev);
    let d_next = next.distance(current);
    let sum = d_prev + d_next;
    if sum < f64::EPSILON {
        return (current, current);
    }
    let tangent = next - prev;
    (
        current - tangent * (tension * d_prev / sum),
        current + tangent * (tension * d_next / sum),
    )
}

/// Interpolationspunkte eines offenen Kardinal-Splines.
///
/// Für die Rand-Punkte werden Phantom-Punkte gespiegelt, damit die Kurve
/// natürlich durch den ersten und letzten Punkt läuft.
/// Unter drei Punkten wird die Eingabe unverändert zurückgegeben.
pub fn cardinal_points(points: &[DVec2], tension: f64) -> Vec<DVec2> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let mut result = Vec::with_capacity(3 * n - 2);
    for i in 0..n {
        let prev = if i == 0 {
            2.0 * points[0] - points[1]
        } else {
            points[i - 1]
        };
        let next = if i + 1 < n {
            points[i + 1]
        } else {
            2.0 * points[n - 1] - points[n - 2]
        };
        let (handle_in, handle_out) = handles(prev, points[i], next, tension);

        if i > 0 {
            result.push(handle_in);
        }
        result.push(points[i]);
        if i + 1 < n {
            result.push(handle_out);
        }
    }
    result
}

/// Interpolationspunkte eines geschlossenen Kardinal-Splines.
///
/// Der erste Punkt wird am Ende wiederholt (3n+1 Punkte für n Kontrollpunkte).
pub fn closed_cardinal_points(points: &[DVec2], tension: f64) -> Vec<DVec2> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let mut handles_per_point = Vec::with_capacity(n);
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let next = points[(i + 1) % n];
        handles_per_point.push(handles(prev, points[i], next, tension));
    }

    let mut result = Vec::with_capacity(3 * n + 1);
    for i in 0..n {
        let j = (i + 1) % n;
        result.push(points[i]);
        result.push(handles_per_point[i].1);
        result.push(handles_per_point[j].0);
    }
    result.push(points[0]);
    result
}

/// Kardinal-Kurve durch `points`, abgetastet als kubische Bézier-Kurve.
///
/// `part = None` → `10 × Anzahl Interpolationspunkte` Stützpunkte pro Stück.
/// Unter drei Punkten: gerade Strecke.
pub fn sample_cardinal(points: &[DVec2], part: Option<usize>) -> Vec<DVec2> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let interpolation = cardinal_points(points, CARDINAL_TENSION);
    let part = part.unwrap_or(interpolation.len() * CARDINAL_DENSITY_FACTOR);
    sample_cubic(&interpolation, part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn zigzag() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(20.0, 0.0),
            DVec2::new(30.0, 10.0),
        ]
    }

    #[test]
    fn interpolation_point_count() {
        let points = zigzag();
        let cps = cardinal_points(&points, CARDINAL_TENSION);
        assert_eq!(cps.len(), 3 * points.len() - 2);
        // Kontrollpunkte liegen an jeder dritten Stelle
        for (i, p) in points.iter().enumerate() {
            assert_eq!(cps[3 * i], *p);
        }
    }

    #[test]
    fn curve_passes_through_control_points() {
        let points = zigzag();
        let part = 8;
        let sampled = sample_cardinal(&points, Some(part));
        assert_eq!(sampled.len(), (points.len() - 1) * part + 1);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(sampled[i * part], *p);
        }
    }

    #[test]
    fn default_density_scales_with_interpolation_points() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(5.0, 5.0),
            DVec2::new(10.0, 0.0),
        ];
        // 7 Interpolationspunkte → 70 Stützpunkte pro Stück, 2 Stücke + Endpunkt
        assert_eq!(sample_cardinal(&points, None).len(), 2 * 70 + 1);
    }

    #[test]
    fn collinear_handles_stay_on_line() {
        let points = [DVec2::ZERO, DVec2::new(5.0, 0.0), DVec2::new(10.0, 0.0)];
        for p in cardinal_points(&points, CARDINAL_TENSION) {
            assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn closed_spline_repeats_first_point() {
        let points = zigzag();
        let cps = closed_cardinal_points(&points, CARDINAL_TENSION);
        assert_eq!(cps.len(), 3 * points.len() + 1);
        assert_eq!(cps[0], *cps.last().unwrap());
    }

    #[test]
    fn short_input_passes_through() {
        let points = [DVec2::ZERO, DVec2::ONE];
        assert_eq!(sample_cardinal(&points, None), points.to_vec());
    }
}
