//! Zentrale Konfiguration für die Symbol-Konstruktion und das Editieren.
//!
//! `PlottingOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{DEFAULT_ARROW_RATIO, DEFAULT_BEZIER_PART};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ── Editieren ───────────────────────────────────────────────────────

/// Pick-Radius für Kontrollpunkte in Screen-Pixeln.
pub const PICK_RADIUS_PX: f64 = 6.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Plotting-Optionen.
/// Der Host wählt den Ablageort der TOML-Datei.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlottingOptions {
    // ── Symbole ─────────────────────────────────────────────────
    /// Standard-Verhältnis Gesamtlänge / Schaftbreite für neue Pfeile
    pub arrow_ratio: f64,
    /// Stützpunkte pro Bézier-Stück für neue Bézier-Kurven
    pub bezier_part: usize,
    /// Stützpunkte pro Stück für Kardinal-Kurven (`None` = automatisch)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardinal_part: Option<usize>,

    // ── Editieren ───────────────────────────────────────────────
    /// Pick-Radius für Kontrollpunkte in Screen-Pixeln
    pub pick_radius_px: f64,
}

impl Default for PlottingOptions {
    fn default() -> Self {
        Self {
            arrow_ratio: DEFAULT_ARROW_RATIO,
            bezier_part: DEFAULT_BEZIER_PART,
            cardinal_part: None,
            pick_radius_px: PICK_RADIUS_PX,
        }
    }
}

impl PlottingOptions {
    /// Lädt Optionen aus einer TOML-Datei.
    ///
    /// Fehlende oder fehlerhafte Dateien ergeben die Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        if !path.exists() {
            log::info!("{}: keine Optionen, Standardwerte aktiv", path.display());
            return Self::default();
        }
        Self::read(path).unwrap_or_else(|e| {
            log::warn!("{}: Standardwerte statt Optionen ({:#})", path.display(), e);
            Self::default()
        })
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).context("Datei nicht lesbar")?;
        let options = toml::from_str(&content).context("TOML ungültig")?;
        log::info!("{}: Optionen geladen", path.display());
        Ok(options)
    }

    /// Schreibt die Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("{}: Optionen gespeichert", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis vorhanden");
        let path = dir.path().join("plotting.toml");
        let options = PlottingOptions {
            arrow_ratio: 9.0,
            bezier_part: 12,
            cardinal_part: Some(30),
            pick_radius_px: 4.0,
        };

        options.save_to_file(&path).expect("Speichern erfolgreich");
        assert_eq!(PlottingOptions::load_from_file(&path), options);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis vorhanden");
        let loaded = PlottingOptions::load_from_file(&dir.path().join("fehlt.toml"));
        assert_eq!(loaded, PlottingOptions::default());
    }

    #[test]
    fn test_broken_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis vorhanden");
        let path = dir.path().join("plotting.toml");
        std::fs::write(&path, "arrow_ratio = [").expect("Schreiben erfolgreich");
        assert_eq!(PlottingOptions::load_from_file(&path), PlottingOptions::default());
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let options: PlottingOptions = toml::from_str("arrow_ratio = 4.5").expect("gültiges TOML");
        assert_eq!(options.arrow_ratio, 4.5);
        assert_eq!(options.bezier_part, DEFAULT_BEZIER_PART);
        assert_eq!(options.cardinal_part, None);
    }
}
