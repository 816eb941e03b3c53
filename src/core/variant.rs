//! Symbol-Varianten: Typ-Tag und Varianten mit Parametern.

use crate::geometry::MAX_PART;
use crate::shared::PlottingOptions;

/// Standard-Verhältnis Pfeillänge zu Pfeilbreite.
pub const DEFAULT_ARROW_RATIO: f64 = 6.0;
/// Standard-Stützpunktanzahl pro Bézier-Stück.
pub const DEFAULT_BEZIER_PART: usize = 50;

/// Parameterloser Typ-Tag einer Symbol-Variante.
///
/// Wird beim Dekodieren benötigt, da das Textformat den Typ nicht enthält.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    /// Offener Linienzug durch alle Kontrollpunkte
    Polyline,
    /// Freihandlinie (Punkte werden beim Zeichnen fortlaufend ergänzt)
    Freeline,
    /// Geschlossenes Polygon (2 Punkte: Strecke)
    ClosedPolygon,
    /// Achsparalleles Rechteck aus erstem und letztem Punkt
    Rectangle,
    /// Schräger Pfeil (gerade oder gekrümmt)
    DiagonalArrow,
    /// Schräger Pfeil mit Schwalbenschwanz
    DoveTailDiagonalArrow,
    /// Sammelraum (geschlossene Kurve aus zwei Punkten)
    GatheringPlace,
    /// Quadratische Bézier-Kurve
    BezierCurve2,
    /// Kubische Bézier-Kurve
    BezierCurve3,
    /// Kardinal-Spline
    CardinalCurve,
}

impl VariantKind {
    /// Alle bekannten Varianten in Anzeige-Reihenfolge.
    pub const ALL: [VariantKind; 10] = [
        VariantKind::Polyline,
        VariantKind::Freeline,
        VariantKind::ClosedPolygon,
        VariantKind::Rectangle,
        VariantKind::DiagonalArrow,
        VariantKind::DoveTailDiagonalArrow,
        VariantKind::GatheringPlace,
        VariantKind::BezierCurve2,
        VariantKind::BezierCurve3,
        VariantKind::CardinalCurve,
    ];

    /// Anzeigename
    pub fn name(self) -> &'static str {
        match self {
            VariantKind::Polyline => "Linienzug",
            VariantKind::Freeline => "Freihandlinie",
            VariantKind::ClosedPolygon => "Polygon",
            VariantKind::Rectangle => "Rechteck",
            VariantKind::DiagonalArrow => "Schräger Pfeil",
            VariantKind::DoveTailDiagonalArrow => "Schwalbenschwanz-Pfeil",
            VariantKind::GatheringPlace => "Sammelraum",
            VariantKind::BezierCurve2 => "Bézier Grad 2",
            VariantKind::BezierCurve3 => "Bézier Grad 3",
            VariantKind::CardinalCurve => "Kardinal-Kurve",
        }
    }

    /// Minimale Anzahl Kontrollpunkte, ab der eine Outline entsteht.
    pub fn min_points(self) -> usize {
        2
    }

    /// Maximale Anzahl Kontrollpunkte beim Zeichnen (`None` = unbegrenzt).
    pub fn max_points(self) -> Option<usize> {
        match self {
            VariantKind::Rectangle | VariantKind::GatheringPlace => Some(2),
            _ => None,
        }
    }

    /// Flächensymbol (geschlossener Ring) oder Liniensymbol?
    pub fn is_area(self) -> bool {
        matches!(
            self,
            VariantKind::ClosedPolygon
                | VariantKind::Rectangle
                | VariantKind::DiagonalArrow
                | VariantKind::DoveTailDiagonalArrow
                | VariantKind::GatheringPlace
        )
    }

    /// Erzeugt die Variante mit Parametern aus den Laufzeit-Optionen.
    ///
    /// Stützpunkt-Anzahlen werden auf `1..=MAX_PART` begrenzt.
    pub fn default_variant(self, options: &PlottingOptions) -> Variant {
        match self {
            VariantKind::Polyline => Variant::Polyline,
            VariantKind::Freeline => Variant::Freeline,
            VariantKind::ClosedPolygon => Variant::ClosedPolygon,
            VariantKind::Rectangle => Variant::Rectangle,
            VariantKind::DiagonalArrow => Variant::DiagonalArrow {
                ratio: options.arrow_ratio,
            },
            VariantKind::DoveTailDiagonalArrow => Variant::DoveTailDiagonalArrow {
                ratio: options.arrow_ratio,
            },
            VariantKind::GatheringPlace => Variant::GatheringPlace,
            VariantKind::BezierCurve2 => Variant::BezierCurve2 {
                part: options.bezier_part.clamp(1, MAX_PART),
            },
            VariantKind::BezierCurve3 => Variant::BezierCurve3 {
                part: options.bezier_part.clamp(1, MAX_PART),
            },
            VariantKind::CardinalCurve => Variant::CardinalCurve {
                part: options.cardinal_part.map(|part| part.clamp(1, MAX_PART)),
            },
        }
    }
}

/// Symbol-Variante inklusive variantenspezifischer Parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Variant {
    Polyline,
    Freeline,
    ClosedPolygon,
    Rectangle,
    /// `ratio`: Gesamtlänge / Schaftbreite
    DiagonalArrow {
        ratio: f64,
    },
    /// `ratio`: Gesamtlänge / Schaftbreite
    DoveTailDiagonalArrow {
        ratio: f64,
    },
    GatheringPlace,
    /// `part`: Stützpunkte pro Bézier-Stück
    BezierCurve2 {
        part: usize,
    },
    /// `part`: Stützpunkte pro Bézier-Stück
    BezierCurve3 {
        part: usize,
    },
    /// `part`: Stützpunkte pro Bézier-Stück, `None` = 10 × Interpolationspunkte
    CardinalCurve {
        part: Option<usize>,
    },
}

impl Variant {
    /// Typ-Tag ohne Parameter.
    pub fn kind(&self) -> VariantKind {
        match self {
            Variant::Polyline => VariantKind::Polyline,
            Variant::Freeline => VariantKind::Freeline,
            Variant::ClosedPolygon => VariantKind::ClosedPolygon,
            Variant::Rectangle => VariantKind::Rectangle,
            Variant::DiagonalArrow { .. } => VariantKind::DiagonalArrow,
            Variant::DoveTailDiagonalArrow { .. } => VariantKind::DoveTailDiagonalArrow,
            Variant::GatheringPlace => VariantKind::GatheringPlace,
            Variant::BezierCurve2 { .. } => VariantKind::BezierCurve2,
            Variant::BezierCurve3 { .. } => VariantKind::BezierCurve3,
            Variant::CardinalCurve { .. } => VariantKind::CardinalCurve,
        }
    }

    /// Pfeil-Verhältnis, falls die Variante eines hat.
    pub fn ratio(&self) -> Option<f64> {
        match self {
            Variant::DiagonalArrow { ratio } | Variant::DoveTailDiagonalArrow { ratio } => {
                Some(*ratio)
            }
            _ => None,
        }
    }

    /// Stützpunkt-Dichte, falls explizit gesetzt.
    pub fn part(&self) -> Option<usize> {
        match self {
            Variant::BezierCurve2 { part } | Variant::BezierCurve3 { part } => Some(*part),
            Variant::CardinalCurve { part } => *part,
            _ => None,
        }
    }

    /// Minimale Anzahl Kontrollpunkte (siehe [`VariantKind::min_points`]).
    pub fn min_points(&self) -> usize {
        self.kind().min_points()
    }
}

impl From<VariantKind> for Variant {
    fn from(kind: VariantKind) -> Self {
        kind.default_variant(&PlottingOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variant_uses_option_parameters() {
        let options = PlottingOptions {
            arrow_ratio: 8.0,
            bezier_part: 12,
            ..PlottingOptions::default()
        };
        assert_eq!(
            VariantKind::DiagonalArrow.default_variant(&options),
            Variant::DiagonalArrow { ratio: 8.0 }
        );
        assert_eq!(
            VariantKind::BezierCurve3.default_variant(&options),
            Variant::BezierCurve3 { part: 12 }
        );
    }

    #[test]
    fn default_variant_clamps_part_from_options() {
        let options = PlottingOptions {
            bezier_part: 0,
            cardinal_part: Some(usize::MAX),
            ..PlottingOptions::default()
        };
        assert_eq!(
            VariantKind::BezierCurve2.default_variant(&options),
            Variant::BezierCurve2 { part: 1 }
        );
        assert_eq!(
            VariantKind::CardinalCurve.default_variant(&options),
            Variant::CardinalCurve {
                part: Some(MAX_PART)
            }
        );
    }

    #[test]
    fn kind_roundtrips_for_all_variants() {
        for kind in VariantKind::ALL {
            assert_eq!(Variant::from(kind).kind(), kind);
        }
    }

    #[test]
    fn only_two_point_drawings_have_max_points() {
        assert_eq!(VariantKind::Rectangle.max_points(), Some(2));
        assert_eq!(VariantKind::GatheringPlace.max_points(), Some(2));
        assert_eq!(VariantKind::DiagonalArrow.max_points(), None);
    }
}
