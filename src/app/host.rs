//! Vertrag zum Karten-Host (Layer, Koordinaten, Zeichnen).
//!
//! Der Controller kennt keine konkrete Darstellung. Alles, was er vom Host
//! braucht, steht in [`PlottingHost`].

use crate::core::{Outline, Symbol, SymbolId};
use glam::DVec2;

/// Editierbarer Griff für einen Kontrollpunkt des aktiven Symbols.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPointProxy {
    /// Index in der Kontrollpunkt-Liste des Symbols
    pub index: usize,
    /// Kartenposition
    pub position: DVec2,
}

impl ControlPointProxy {
    /// Baut die Proxies in Kontrollpunkt-Reihenfolge.
    pub fn from_points(points: &[DVec2]) -> Vec<Self> {
        points
            .iter()
            .enumerate()
            .map(|(index, &position)| Self { index, position })
            .collect()
    }
}

/// Was unter dem Zeiger liegt, aus Sicht des Controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureRef {
    /// Kontrollpunkt-Proxy des aktiven Symbols
    ControlPoint(usize),
    /// Körper eines Symbols
    Symbol(SymbolId),
    /// Fremdes Feature (wird ignoriert)
    Foreign,
}

/// Host-Layer, auf dem Symbole liegen und gezeichnet werden.
pub trait PlottingHost {
    /// Pixel → Kartenkoordinate
    fn pixel_to_map(&self, pixel: DVec2) -> DVec2;
    /// Kartenkoordinate → Pixel
    fn map_to_pixel(&self, point: DVec2) -> DVec2;

    fn symbol(&self, id: SymbolId) -> Option<&Symbol>;
    fn symbol_mut(&mut self, id: SymbolId) -> Option<&mut Symbol>;
    /// Fügt ein Symbol als zeichenbares Feature hinzu.
    fn add_symbol(&mut self, symbol: Symbol) -> SymbolId;
    /// Entfernt ein Symbol; `None` falls unbekannt.
    fn remove_symbol(&mut self, id: SymbolId) -> Option<Symbol>;

    /// Ersetzt die sichtbaren Kontrollpunkt-Proxies.
    fn set_proxies(&mut self, proxies: &[ControlPointProxy]);
    /// Entfernt alle Kontrollpunkt-Proxies aus der Ansicht.
    fn clear_proxies(&mut self);

    /// Zeichnet das Symbol `id` mit der übergebenen Outline neu.
    fn draw_symbol(&mut self, id: SymbolId, outline: &Outline);
    /// Zeichnet einen einzelnen Proxy neu.
    fn draw_proxy(&mut self, proxy: &ControlPointProxy);
}
