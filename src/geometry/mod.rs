//! Reine Geometrie-Funktionen: Vektor-Kern und Kurven-Interpolation.
//!
//! Layer-neutral: wird von `shapes` und `app` importiert, ohne selbst
//! auf Symbol-Typen zuzugreifen.

pub mod cardinal;
pub mod curve;
pub mod vector;

pub use cardinal::{closed_cardinal_points, cardinal_points, sample_cardinal, CARDINAL_TENSION};
pub use curve::{
    cubic_bezier, polyline_length, quadratic_bezier, sample_cubic, sample_quadratic, MAX_PART,
};
pub use vector::{
    angled_vector, angular_bisector, corner_apex, line_intersection, DEFAULT_CORNER_ANGLE,
    RIGHT_ANGLE,
};
