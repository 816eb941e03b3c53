//! Encoder: Symbol → JSON-Text.

use super::{SymbolDocument, WirePoint};
use crate::core::Symbol;

/// Kodiert Kontrollpunkte und Parameter eines Symbols.
///
/// Pfeile schreiben `ratio`, Bézier-Kurven `part`, Kardinal-Kurven `part`
/// nur bei expliziter Dichte.
///
/// Nicht-endliche Koordinaten (NaN, ±∞) schreibt JSON als `null`; solcher Text
/// lässt sich nicht wieder dekodieren. Der Round-Trip gilt nur für endliche Punkte.
pub fn encode(symbol: &Symbol) -> String {
    let document = SymbolDocument {
        control_points: symbol
            .control_points()
            .iter()
            .map(|p| WirePoint { x: p.x, y: p.y })
            .collect(),
        ratio: symbol.variant().ratio(),
        part: symbol.variant().part(),
    };
    // Nur Zahlen und Listen: to_string scheitert hier nicht
    serde_json::to_string(&document).unwrap_or_default()
}
