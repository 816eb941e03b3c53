//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die sowohl `core` (Standard-Parameter der
//! Varianten) als auch `app` (Pick-Radius) lesen.

pub mod options;

pub use options::PlottingOptions;
pub use options::PICK_RADIUS_PX;
