//! Edit-Controller: Selektion, Drag von Kontrollpunkten und ganzen Symbolen.
//!
//! Zustände: Idle → Selected → Dragging → Selected → Idle.
//! Der Host wird pro Aufruf übergeben, der Benachrichtigungs-Empfänger bei
//! der Erstellung. Während eines Drags arbeitet die Sitzung auf einer Kopie der
//! Kontrollpunkte; das Symbol selbst ändert sich erst bei `drag_complete`.

use super::events::NotificationSink;
use super::host::{ControlPointProxy, FeatureRef, PlottingHost};
use super::session::{DragMode, DragState, EditSession};
use crate::codec;
use crate::core::{FeatureState, Symbol, SymbolId};
use crate::shapes::compute_outline;
use glam::DVec2;

/// Orchestriert Selektion und Drag auf einem [`PlottingHost`].
pub struct EditController<S: NotificationSink> {
    sink: S,
    session: EditSession,
    active: bool,
}

impl<S: NotificationSink> EditController<S> {
    /// Erstellt einen aktiven Controller ohne Selektion.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            session: EditSession::default(),
            active: true,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Nimmt wieder Eingaben an.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Deselektiert und ignoriert danach alle Eingaben bis `activate`.
    pub fn deactivate<H: PlottingHost>(&mut self, host: &mut H) {
        self.unselect(host);
        self.active = false;
    }

    /// Das aktive Symbol, falls vorhanden.
    pub fn active_symbol<'h, H: PlottingHost>(&self, host: &'h H) -> Option<&'h Symbol> {
        self.session.active.and_then(|id| host.symbol(id))
    }

    /// Das aktive Symbol als JSON-Text.
    pub fn active_symbol_json<H: PlottingHost>(&self, host: &H) -> Option<String> {
        self.active_symbol(host).map(codec::encode)
    }

    // ── Selektion ───────────────────────────────────────────────

    /// Selektiert das Symbol `id`.
    ///
    /// Der Empfänger kann per `before_modified` ablehnen. Ein anderes aktives
    /// Symbol wird vorher deselektiert. Rückgabe: ist `id` danach aktiv?
    pub fn select<H: PlottingHost>(&mut self, host: &mut H, id: SymbolId) -> bool {
        if !self.active || self.session.drag.is_some() {
            return false;
        }
        if self.session.active == Some(id) {
            return true;
        }

        let Some(symbol) = host.symbol(id) else {
            log::debug!("Selektion ignoriert: Symbol {} unbekannt", id);
            return false;
        };
        if !self.sink.before_modified(symbol) {
            log::debug!("Selektion von Symbol {} abgelehnt", id);
            return false;
        }

        self.unselect(host);

        let Some(symbol) = host.symbol(id) else {
            return false;
        };
        let proxies = ControlPointProxy::from_points(symbol.control_points());
        host.set_proxies(&proxies);
        log::debug!(
            "Symbol {} selektiert ({} Kontrollpunkte)",
            id,
            proxies.len()
        );

        self.session.active = Some(id);
        self.session.proxies = proxies;
        self.session.modified = false;
        true
    }

    /// Hebt die Selektion auf und meldet `after_modified` mit dem Änderungs-Flag.
    ///
    /// Ein laufender Drag wird verworfen.
    pub fn unselect<H: PlottingHost>(&mut self, host: &mut H) {
        let Some(id) = self.session.active else {
            return;
        };
        if self.session.drag.is_some() {
            log::debug!("Drag auf Symbol {} abgebrochen", id);
            if let Some(outline) = host.symbol(id).map(|s| s.outline().clone()) {
                host.draw_symbol(id, &outline);
            }
        }

        host.clear_proxies();
        let was_modified = self.session.modified;
        self.session.reset();

        if let Some(symbol) = host.symbol(id) {
            self.sink.after_modified(symbol, was_modified);
        }
        log::debug!("Symbol {} deselektiert (geändert: {})", id, was_modified);
    }

    /// Entfernt das aktive Symbol samt Proxies aus dem Host.
    ///
    /// `after_modified` erhält das entfernte Symbol im Zustand `Delete`.
    pub fn delete_active<H: PlottingHost>(&mut self, host: &mut H) -> bool {
        let Some(id) = self.session.active else {
            return false;
        };
        host.clear_proxies();
        let was_modified = self.session.modified;
        self.session.reset();

        let Some(mut symbol) = host.remove_symbol(id) else {
            log::warn!("Aktives Symbol {} nicht mehr im Host", id);
            return false;
        };
        symbol.set_state(FeatureState::Delete);
        self.sink.after_modified(&symbol, was_modified);
        log::debug!("Symbol {} gelöscht", id);
        true
    }

    // ── Drag ────────────────────────────────────────────────────

    /// Startet einen Drag auf `target` an der Pixelposition `pixel`.
    ///
    /// - Proxy → Punkt-Drag (nur mit aktivem Symbol)
    /// - Symbol → Körper-Drag; ein nicht aktives Symbol wird vorher selektiert,
    ///   die Proxies werden ausgeblendet
    /// - Fremdes Feature → keine Änderung
    pub fn drag_start<H: PlottingHost>(
        &mut self,
        host: &mut H,
        target: FeatureRef,
        pixel: DVec2,
    ) -> bool {
        if !self.active || self.session.drag.is_some() {
            return false;
        }

        let mode = match target {
            FeatureRef::ControlPoint(index) => {
                if index >= self.session.proxies.len() {
                    log::debug!("Drag ignoriert: kein Proxy mit Index {}", index);
                    return false;
                }
                DragMode::Point(index)
            }
            FeatureRef::Symbol(id) => {
                if !self.select(host, id) {
                    return false;
                }
                DragMode::Body
            }
            FeatureRef::Foreign => {
                log::debug!("Drag auf fremdem Feature ignoriert");
                return false;
            }
        };

        let Some(working) = self
            .active_symbol(host)
            .map(|s| s.control_points().to_vec())
        else {
            return false;
        };
        if mode == DragMode::Body {
            host.clear_proxies();
        }

        self.session.drag = Some(DragState {
            mode,
            last_position: host.pixel_to_map(pixel),
            working,
            body_offset: DVec2::ZERO,
        });
        log::debug!("Drag gestartet: {:?}", mode);
        true
    }

    /// Zeigerbewegung während eines Drags (Pixelposition).
    pub fn drag_move<H: PlottingHost>(&mut self, host: &mut H, pixel: DVec2) {
        let position = host.pixel_to_map(pixel);
        let Some(drag) = self.session.drag.as_mut() else {
            return;
        };
        let delta = position - drag.last_position;
        drag.last_position = position;
        self.drag_by(host, delta);
    }

    /// Verschiebt das Gezogene um `delta` (Kartenkoordinaten).
    ///
    /// Punkt-Drag: nur der gezogene Punkt ändert sich, die Outline wird sofort
    /// aus der Arbeitskopie berechnet und gezeichnet. Körper-Drag: alle Punkte
    /// werden verschoben, neu berechnet wird erst bei `drag_complete`.
    pub fn drag_by<H: PlottingHost>(&mut self, host: &mut H, delta: DVec2) {
        let Some(id) = self.session.active else {
            return;
        };
        let Some(drag) = self.session.drag.as_mut() else {
            return;
        };
        let Some(symbol) = host.symbol(id) else {
            return;
        };
        let variant = *symbol.variant();

        match drag.mode {
            DragMode::Point(index) => {
                let Some(point) = drag.working.get_mut(index) else {
                    return;
                };
                *point += delta;
                let proxy = ControlPointProxy {
                    index,
                    position: *point,
                };
                if let Some(slot) = self.session.proxies.get_mut(index) {
                    *slot = proxy;
                }
                let preview = compute_outline(&variant, &drag.working);
                host.draw_symbol(id, &preview);
                host.draw_proxy(&proxy);
            }
            DragMode::Body => {
                for point in &mut drag.working {
                    *point += delta;
                }
                drag.body_offset += delta;
                let moved = symbol.outline().translated(drag.body_offset);
                host.draw_symbol(id, &moved);
            }
        }
        self.session.modified = true;
    }

    /// Schließt den Drag ab: Arbeitskopie übernehmen, Proxies neu aufbauen,
    /// Zustand auf `Update` (außer `Insert`/`Delete`), `modified` melden.
    pub fn drag_complete<H: PlottingHost>(&mut self, host: &mut H) {
        let Some(drag) = self.session.drag.take() else {
            return;
        };
        let Some(id) = self.session.active else {
            return;
        };
        let Some(symbol) = host.symbol_mut(id) else {
            log::warn!("Symbol {} während des Drags verschwunden", id);
            host.clear_proxies();
            self.session.reset();
            return;
        };

        symbol.set_control_points(drag.working);
        if !matches!(symbol.state(), FeatureState::Insert | FeatureState::Delete) {
            symbol.set_state(FeatureState::Update);
        }
        let proxies = ControlPointProxy::from_points(symbol.control_points());
        let outline = symbol.outline().clone();

        host.set_proxies(&proxies);
        host.draw_symbol(id, &outline);
        self.session.proxies = proxies;

        if let Some(symbol) = host.symbol(id) {
            self.sink.modified(symbol);
        }
        log::debug!("Drag auf Symbol {} abgeschlossen", id);
    }
}
