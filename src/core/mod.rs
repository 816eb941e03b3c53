//! Core-Domänentypen: Varianten, Symbole, Outlines.

pub mod outline;
/// Symbol-Datenmodell
///
/// - Symbol: Variante + Kontrollpunkte + abgeleitete Outline
/// - FeatureState: Persistenz-Zustand im Host-Layer
pub mod symbol;
pub mod variant;

pub use outline::{Outline, OutlinePart};
pub use symbol::{FeatureState, Symbol, SymbolId};
pub use variant::{Variant, VariantKind, DEFAULT_ARROW_RATIO, DEFAULT_BEZIER_PART};
