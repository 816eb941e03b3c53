//! Abgeleitete Zeichengeometrie eines Symbols.

use glam::DVec2;

/// Ein Teil der Outline: offener Pfad oder geschlossener Ring.
#[derive(Debug, Clone, PartialEq)]
pub enum OutlinePart {
    /// Offener Linienzug
    Path(Vec<DVec2>),
    /// Geschlossener Ring (Schlusspunkt wird nicht wiederholt)
    Ring(Vec<DVec2>),
}

impl OutlinePart {
    /// Punkte des Teils in Zeichenreihenfolge.
    pub fn points(&self) -> &[DVec2] {
        match self {
            OutlinePart::Path(points) | OutlinePart::Ring(points) => points,
        }
    }

    /// Ist der Teil ein geschlossener Ring?
    pub fn is_ring(&self) -> bool {
        matches!(self, OutlinePart::Ring(_))
    }
}

/// Aus Kontrollpunkten berechnete Zeichengeometrie.
///
/// Niemals Quelle der Wahrheit: jederzeit aus Variante + Kontrollpunkten reproduzierbar.
/// Leer, solange zu wenige oder entartete Kontrollpunkte vorliegen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    parts: Vec<OutlinePart>,
}

impl Outline {
    /// Leere Outline (nichts zu zeichnen).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Outline aus einem offenen Pfad.
    pub fn path(points: Vec<DVec2>) -> Self {
        Self {
            parts: vec![OutlinePart::Path(points)],
        }
    }

    /// Outline aus einem geschlossenen Ring.
    pub fn ring(points: Vec<DVec2>) -> Self {
        Self {
            parts: vec![OutlinePart::Ring(points)],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn parts(&self) -> &[OutlinePart] {
        &self.parts
    }

    /// Punkte des ersten Teils (leer bei leerer Outline).
    pub fn points(&self) -> &[DVec2] {
        self.parts.first().map(OutlinePart::points).unwrap_or(&[])
    }

    /// Um `delta` verschobene Kopie (alle Teile).
    pub fn translated(&self, delta: DVec2) -> Self {
        let shift = |points: &[DVec2]| -> Vec<DVec2> { points.iter().map(|p| *p + delta).collect() };
        Self {
            parts: self
                .parts
                .iter()
                .map(|part| match part {
                    OutlinePart::Path(points) => OutlinePart::Path(shift(points)),
                    OutlinePart::Ring(points) => OutlinePart::Ring(shift(points)),
                })
                .collect(),
        }
    }

    /// Fläche: erster Ring minus aller weiteren Ringe (Löcher). Pfade zählen nicht.
    pub fn area(&self) -> f64 {
        let mut rings = self.parts.iter().filter(|p| p.is_ring());
        let Some(outer) = rings.next() else {
            return 0.0;
        };
        let mut area = ring_area(outer.points()).abs();
        for hole in rings {
            area -= ring_area(hole.points()).abs();
        }
        area
    }
}

/// Vorzeichenbehaftete Fläche eines Rings (Gaußsche Trapezformel).
fn ring_area(points: &[DVec2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let n = points.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice * 0.5
}
