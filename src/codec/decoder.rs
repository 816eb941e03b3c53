//! Decoder: JSON-Text → Symbol.
//!
//! Zweistufig: erst strukturiertes Parsen in [`SymbolDocument`], dann
//! explizite Feld-Extraktion und Validierung der Parameter.

use super::{ParseError, SymbolDocument};
use crate::core::{Symbol, Variant, VariantKind, DEFAULT_ARROW_RATIO, DEFAULT_BEZIER_PART};
use crate::geometry::MAX_PART;
use glam::DVec2;

/// Dekodiert ein Symbol des Typs `kind`.
///
/// Fehlende Parameter erhalten Standardwerte; Parameter, die die Variante nicht
/// kennt, werden ignoriert.
pub fn decode(text: &str, kind: VariantKind) -> Result<Symbol, ParseError> {
    let document: SymbolDocument = serde_json::from_str(text).map_err(|e| {
        log::warn!("{}: Symbol-Text nicht lesbar: {}", kind.name(), e);
        ParseError::Syntax(e)
    })?;

    if document.control_points.is_empty() {
        log::warn!("{}: Symbol-Text ohne Kontrollpunkte", kind.name());
        return Err(ParseError::NoControlPoints);
    }

    let variant = extract_variant(kind, &document)?;
    let points = document
        .control_points
        .iter()
        .map(|p| DVec2::new(p.x, p.y))
        .collect();

    Ok(Symbol::new(variant, points))
}

fn extract_variant(kind: VariantKind, document: &SymbolDocument) -> Result<Variant, ParseError> {
    let variant = match kind {
        VariantKind::DiagonalArrow => Variant::DiagonalArrow {
            ratio: extract_ratio(document)?,
        },
        VariantKind::DoveTailDiagonalArrow => Variant::DoveTailDiagonalArrow {
            ratio: extract_ratio(document)?,
        },
        VariantKind::BezierCurve2 => Variant::BezierCurve2 {
            part: extract_part(document)?.unwrap_or(DEFAULT_BEZIER_PART),
        },
        VariantKind::BezierCurve3 => Variant::BezierCurve3 {
            part: extract_part(document)?.unwrap_or(DEFAULT_BEZIER_PART),
        },
        VariantKind::CardinalCurve => Variant::CardinalCurve {
            part: extract_part(document)?,
        },
        VariantKind::Polyline => Variant::Polyline,
        VariantKind::Freeline => Variant::Freeline,
        VariantKind::ClosedPolygon => Variant::ClosedPolygon,
        VariantKind::Rectangle => Variant::Rectangle,
        VariantKind::GatheringPlace => Variant::GatheringPlace,
    };

    if document.ratio.is_some() && variant.ratio().is_none() {
        log::debug!("{}: Parameter `ratio` ignoriert", kind.name());
    }
    if document.part.is_some() && variant.part().is_none() {
        log::debug!("{}: Parameter `part` ignoriert", kind.name());
    }
    Ok(variant)
}

fn extract_ratio(document: &SymbolDocument) -> Result<f64, ParseError> {
    let ratio = document.ratio.unwrap_or(DEFAULT_ARROW_RATIO);
    if !(ratio.is_finite() && ratio > 0.0) {
        return Err(ParseError::InvalidParameter {
            name: "ratio",
            value: ratio.to_string(),
        });
    }
    Ok(ratio)
}

/// `part` muss in `1..=MAX_PART` liegen.
fn extract_part(document: &SymbolDocument) -> Result<Option<usize>, ParseError> {
    match document.part {
        Some(part) if part == 0 || part > MAX_PART => Err(ParseError::InvalidParameter {
            name: "part",
            value: part.to_string(),
        }),
        part => Ok(part),
    }
}
