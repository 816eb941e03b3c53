//! Tactical Plotting Library.
//! Geometrie-Kern und Edit-Controller für taktische Plotting-Symbole,
//! als Library exportiert für Hosts, Tests und Benchmarks.

pub mod app;
pub mod codec;
pub mod core;
pub mod geometry;
pub mod shapes;
pub mod shared;

pub use app::{
    ControlPointProxy, DragMode, DrawAction, DrawSession, EditController, EditEvent, EditPhase,
    EditSession, EventLog, FeatureRef, MemoryLayer, NotificationSink, PlottingHost,
};
pub use codec::{decode, encode, read_symbol_file, write_symbol_file, ParseError};
pub use core::{
    FeatureState, Outline, OutlinePart, Symbol, SymbolId, Variant, VariantKind,
    DEFAULT_ARROW_RATIO, DEFAULT_BEZIER_PART,
};
pub use shapes::compute_outline;
pub use shared::PlottingOptions;
