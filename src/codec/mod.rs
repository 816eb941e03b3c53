//! JSON Import/Export für Plotting-Symbole.
//!
//! Das Textformat enthält die Kontrollpunkte als `controlPoints`-Liste von
//! `{x, y}`-Paaren plus die Parameter der Variante (`ratio`, `part`).
//! Der Symboltyp selbst steht nicht im Text und wird beim Dekodieren übergeben.

pub mod decoder;
pub mod encoder;
mod error;

pub use decoder::decode;
pub use encoder::encode;
pub use error::ParseError;

use crate::core::{Symbol, VariantKind};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ein Kontrollpunkt im Textformat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(crate) struct WirePoint {
    pub x: f64,
    pub y: f64,
}

/// Zwischenform eines Symbols im Textformat.
///
/// Unbekannte Felder werden beim Lesen ignoriert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SymbolDocument {
    #[serde(rename = "controlPoints")]
    pub control_points: Vec<WirePoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part: Option<usize>,
}

/// Schreibt ein Symbol als JSON-Datei.
pub fn write_symbol_file(path: &Path, symbol: &Symbol) -> Result<()> {
    let content = encode(symbol);
    std::fs::write(path, content)
        .with_context(|| format!("Symbol-Datei nicht schreibbar: {}", path.display()))?;
    log::info!("Symbol gespeichert nach: {}", path.display());
    Ok(())
}

/// Liest ein Symbol des Typs `kind` aus einer JSON-Datei.
pub fn read_symbol_file(path: &Path, kind: VariantKind) -> Result<Symbol> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Symbol-Datei nicht lesbar: {}", path.display()))?;
    let symbol = decode(&content, kind)
        .with_context(|| format!("Symbol-Datei fehlerhaft: {}", path.display()))?;
    log::info!(
        "{} mit {} Kontrollpunkten geladen aus: {}",
        kind.name(),
        symbol.control_points().len(),
        path.display()
    );
    Ok(symbol)
}
