use thiserror::Error;

/// Fehler beim Dekodieren eines Symbol-Textes.
///
/// Es entsteht nie ein teilweise befülltes Symbol.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Kein gültiges JSON bzw. falsche Struktur
    #[error("Symbol-Text ist strukturell ungültig: {0}")]
    Syntax(#[from] serde_json::Error),
    /// `controlPoints` fehlt inhaltlich (leere Liste)
    #[error("Symbol-Text enthält keine Kontrollpunkte")]
    NoControlPoints,
    /// Parameter außerhalb des gültigen Bereichs
    #[error("Ungültiger Parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: String },
}
