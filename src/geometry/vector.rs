//! Vektor-Grundfunktionen für die Symbol-Konstruktion.
//!
//! Reine Funktionen ohne Zustand. "Links" bezieht sich immer auf die
//! Fahrtrichtung entlang des Basisvektors.

use glam::DVec2;

/// Standard-Winkel für [`angled_vector`] (rechter Winkel).
pub const RIGHT_ANGLE: f64 = std::f64::consts::FRAC_PI_2;
/// Standard-Basiswinkel für [`corner_apex`].
pub const DEFAULT_CORNER_ANGLE: f64 = std::f64::consts::FRAC_PI_4;

/// Berechnet die beiden Vektoren im Winkel `angle` zu `base` mit Länge `length`.
///
/// Rückgabe: `(links, rechts)` relativ zur Richtung von `base`.
/// Ein Nullvektor als Basis liefert zwei Nullvektoren.
pub fn angled_vector(base: DVec2, angle: f64, length: f64) -> (DVec2, DVec2) {
    let base_len = base.length();
    if base_len == 0.0 {
        return (DVec2::ZERO, DVec2::ZERO);
    }

    // Projektion des Zielvektors auf die Basis: |u|·|v|·cos(a)
    let projection = length * base_len * angle.cos();

    if base.y == 0.0 {
        // Waagerechte Basis: y darf nicht als Divisor dienen
        let x = projection / base.x;
        let y = (length * length - x * x).max(0.0).sqrt();
        return if base.x > 0.0 {
            (DVec2::new(x, y), DVec2::new(x, -y))
        } else {
            (DVec2::new(x, -y), DVec2::new(x, y))
        };
    }

    // u.y = n·u.x + m, eingesetzt in |u|² = length²
    let n = -base.x / base.y;
    let m = projection / base.y;
    let a = 1.0 + n * n;
    let b = 2.0 * n * m;
    let c = m * m - length * length;
    let root = (b * b - 4.0 * a * c).max(0.0).sqrt();

    let x1 = (-b - root) / (2.0 * a);
    let x2 = (-b + root) / (2.0 * a);
    let v1 = DVec2::new(x1, n * x1 + m);
    let v2 = DVec2::new(x2, n * x2 + m);

    if base.y > 0.0 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Schnittpunkt der Geraden durch `p1` entlang `v1` mit der Geraden durch `p2` entlang `v2`.
///
/// Parallele Geraden: gleiche Richtung → Mittelpunkt von `p1`/`p2`,
/// Gegenrichtung → `p2`.
pub fn line_intersection(v1: DVec2, v2: DVec2, p1: DVec2, p2: DVec2) -> DVec2 {
    let det = v1.y * v2.x - v1.x * v2.y;
    if det == 0.0 {
        let same_direction = v1.x * v2.x > 0.0 || v1.y * v2.y > 0.0;
        return if same_direction { (p1 + p2) * 0.5 } else { p2 };
    }

    let x = (v1.x * v2.x * (p2.y - p1.y) + p1.x * v1.y * v2.x - p2.x * v2.y * v1.x) / det;
    let y = if v1.x != 0.0 {
        (x - p1.x) * v1.y / v1.x + p1.y
    } else {
        // v1 senkrecht: v2.x kann hier nicht 0 sein (sonst parallel)
        (x - p2.x) * v2.y / v2.x + p2.y
    };
    DVec2::new(x, y)
}

/// Winkelhalbierende als Summe der Einheitsvektoren von `v1` und `v2`.
///
/// Ein Nullvektor trägt nichts bei; entgegengesetzte Vektoren ergeben den Nullvektor.
pub fn angular_bisector(v1: DVec2, v2: DVec2) -> DVec2 {
    v1.normalize_or_zero() + v2.normalize_or_zero()
}

/// Spitze eines Dreiecks aus Basis `start`–`end` und den beiden Basiswinkeln.
///
/// Rückgabe: `(links, rechts)`, die beiden möglichen Spitzen.
pub fn corner_apex(start: DVec2, end: DVec2, angle_start: f64, angle_end: f64) -> (DVec2, DVec2) {
    let base = end - start;
    let (start_l, start_r) = angled_vector(base, angle_start, 1.0);
    let (end_l, end_r) = angled_vector(base, std::f64::consts::PI - angle_end, 1.0);
    (
        line_intersection(start_l, end_l, start, end),
        line_intersection(start_r, end_r, start, end),
    )
}
