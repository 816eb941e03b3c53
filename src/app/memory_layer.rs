//! In-Memory-Host: Symbol-Ablage, lineare Ansicht und Pixel-Hit-Test.
//!
//! Dient als Referenz-Implementierung von [`PlottingHost`] für Tests,
//! Benchmarks und Hosts ohne eigene Feature-Verwaltung.

use super::host::{ControlPointProxy, FeatureRef, PlottingHost};
use crate::core::{Outline, OutlinePart, Symbol, SymbolId};
use crate::shared::PlottingOptions;
use glam::DVec2;
use indexmap::IndexMap;

/// Symbol-Layer im Speicher.
///
/// Ansicht: Pixel (0, 0) liegt auf `origin`, eine Pixel-Einheit entspricht
/// `resolution` Karteneinheiten. Die Karten-y-Achse zeigt nach oben, die
/// Pixel-y-Achse nach unten.
#[derive(Debug)]
pub struct MemoryLayer {
    symbols: IndexMap<SymbolId, Symbol>,
    /// Zuletzt gezeichnete Outline je Symbol (kann während eines Drags von
    /// der Outline des Symbols abweichen)
    drawn: IndexMap<SymbolId, Outline>,
    proxies: Vec<ControlPointProxy>,
    next_id: SymbolId,
    origin: DVec2,
    resolution: f64,
    pick_radius_px: f64,
    symbol_redraws: usize,
    proxy_redraws: usize,
}

impl Default for MemoryLayer {
    fn default() -> Self {
        Self::new(&PlottingOptions::default())
    }
}

impl MemoryLayer {
    /// Leerer Layer mit Einheits-Ansicht (Ursprung 0, 1 Karteneinheit pro Pixel).
    pub fn new(options: &PlottingOptions) -> Self {
        Self {
            symbols: IndexMap::new(),
            drawn: IndexMap::new(),
            proxies: Vec::new(),
            next_id: 1,
            origin: DVec2::ZERO,
            resolution: 1.0,
            pick_radius_px: options.pick_radius_px,
            symbol_redraws: 0,
            proxy_redraws: 0,
        }
    }

    /// Setzt die Ansicht. Ungültige Auflösungen werden ignoriert.
    pub fn set_view(&mut self, origin: DVec2, resolution: f64) {
        if !(resolution.is_finite() && resolution > 0.0) {
            log::warn!("Ungültige Auflösung {} ignoriert", resolution);
            return;
        }
        self.origin = origin;
        self.resolution = resolution;
    }

    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol-IDs in Einfüge-Reihenfolge.
    pub fn ids(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.symbols.keys().copied()
    }

    /// Aktuell sichtbare Kontrollpunkt-Proxies.
    pub fn visible_proxies(&self) -> &[ControlPointProxy] {
        &self.proxies
    }

    /// Zuletzt gezeichnete Outline eines Symbols.
    pub fn drawn_outline(&self, id: SymbolId) -> Option<&Outline> {
        self.drawn.get(&id)
    }

    /// Anzahl `draw_symbol`-Aufrufe seit Erstellung.
    pub fn symbol_redraws(&self) -> usize {
        self.symbol_redraws
    }

    /// Anzahl `draw_proxy`-Aufrufe seit Erstellung.
    pub fn proxy_redraws(&self) -> usize {
        self.proxy_redraws
    }

    /// Feature unter der Pixelposition.
    ///
    /// Proxies haben Vorrang (nächster innerhalb des Pick-Radius), danach
    /// Symbole von oben nach unten (zuletzt hinzugefügt zuerst).
    pub fn feature_at(&self, pixel: DVec2) -> Option<FeatureRef> {
        let nearest_proxy = self
            .proxies
            .iter()
            .map(|proxy| (proxy.index, self.map_to_pixel(proxy.position).distance(pixel)))
            .filter(|(_, dist)| *dist <= self.pick_radius_px)
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        if let Some((index, _)) = nearest_proxy {
            return Some(FeatureRef::ControlPoint(index));
        }

        let position = self.pixel_to_map(pixel);
        let tolerance = self.pick_radius_px * self.resolution;
        self.drawn
            .iter()
            .rev()
            .find(|(_, outline)| outline_hit(outline, position, tolerance))
            .map(|(&id, _)| FeatureRef::Symbol(id))
    }
}

impl PlottingHost for MemoryLayer {
    fn pixel_to_map(&self, pixel: DVec2) -> DVec2 {
        DVec2::new(
            self.origin.x + pixel.x * self.resolution,
            self.origin.y - pixel.y * self.resolution,
        )
    }

    fn map_to_pixel(&self, point: DVec2) -> DVec2 {
        DVec2::new(
            (point.x - self.origin.x) / self.resolution,
            (self.origin.y - point.y) / self.resolution,
        )
    }

    fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(&id)
    }

    fn symbol_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        self.symbols.get_mut(&id)
    }

    fn add_symbol(&mut self, symbol: Symbol) -> SymbolId {
        let id = self.next_id;
        self.next_id += 1;
        self.drawn.insert(id, symbol.outline().clone());
        self.symbols.insert(id, symbol);
        id
    }

    fn remove_symbol(&mut self, id: SymbolId) -> Option<Symbol> {
        self.drawn.shift_remove(&id);
        self.symbols.shift_remove(&id)
    }

    fn set_proxies(&mut self, proxies: &[ControlPointProxy]) {
        self.proxies = proxies.to_vec();
    }

    fn clear_proxies(&mut self) {
        self.proxies.clear();
    }

    fn draw_symbol(&mut self, id: SymbolId, outline: &Outline) {
        if !self.symbols.contains_key(&id) {
            return;
        }
        self.drawn.insert(id, outline.clone());
        self.symbol_redraws += 1;
    }

    fn draw_proxy(&mut self, proxy: &ControlPointProxy) {
        if let Some(slot) = self.proxies.get_mut(proxy.index) {
            *slot = *proxy;
        }
        self.proxy_redraws += 1;
    }
}

fn outline_hit(outline: &Outline, position: DVec2, tolerance: f64) -> bool {
    outline.parts().iter().any(|part| match part {
        OutlinePart::Ring(points) => {
            point_in_ring(position, points) || near_chain(position, points, tolerance, true)
        }
        OutlinePart::Path(points) => near_chain(position, points, tolerance, false),
    })
}

/// Liegt `position` höchstens `tolerance` von einer Kante entfernt?
fn near_chain(position: DVec2, points: &[DVec2], tolerance: f64, closed: bool) -> bool {
    if points.len() == 1 {
        return points[0].distance(position) <= tolerance;
    }
    let closing = if closed && points.len() > 2 {
        points.last().copied().zip(points.first().copied())
    } else {
        None
    };
    points
        .windows(2)
        .map(|w| (w[0], w[1]))
        .chain(closing)
        .any(|(a, b)| distance_to_segment(position, a, b) <= tolerance)
}

fn distance_to_segment(point: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Prüft ob ein Punkt innerhalb eines Rings liegt (Ray-Casting).
fn point_in_ring(point: DVec2, ring: &[DVec2]) -> bool {
    let Some(&last) = ring.last() else {
        return false;
    };
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut previous = last;
    for &current in ring {
        let crosses = (current.y > point.y) != (previous.y > point.y)
            && point.x
                < (previous.x - current.x) * (point.y - current.y) / (previous.y - current.y)
                    + current.x;
        if crosses {
            inside = !inside;
        }
        previous = current;
    }
    inside
}
