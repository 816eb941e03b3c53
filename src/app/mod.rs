//! Application-Layer: Edit-Controller, Zeichen-Sitzung und Host-Verträge.

pub mod controller;
pub mod draw;
pub mod events;
/// Host-Vertrag
///
/// Koordinaten-Umrechnung, Feature-Verwaltung und Neuzeichnen.
pub mod host;
pub mod memory_layer;
pub mod session;

pub use controller::EditController;
pub use draw::{DrawAction, DrawSession};
pub use events::{EditEvent, EventLog, NotificationSink};
pub use host::{ControlPointProxy, FeatureRef, PlottingHost};
pub use memory_layer::MemoryLayer;
pub use session::{DragMode, EditPhase, EditSession};
