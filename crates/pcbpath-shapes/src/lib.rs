//! Path generators for the shapes a board keeps reaching for: pads,
//! rings, drill and placement glyphs, and meandering traces.
//!
//! Every generator returns relative path text that [`pcbpath_svgpath`]
//! accepts as is.

pub mod circle;
pub mod error;
pub mod meander;
pub mod pen;
pub mod rect;

pub use circle::{circle_diameter_to_path, drill_path, placement_marker_path, ring_diameters_to_path};
pub use error::ShapeError;
pub use meander::{create_meandering_path, create_round_meander, Meander, MeanderParams};
pub use pen::{pen_actions_to_path, PenAction};
pub use rect::{width_and_height_to_path, CornerRadii};

use pcbpath_core::precision;
use pcbpath_parser::Coord;

/// Control-point distance, as a fraction of the radius, for a cubic that
/// approximates a quarter circle.
pub const KAPPA: f64 = 0.5522847498;

/// Round a generated value to the session precision.
pub(crate) fn num(v: f64) -> f64 {
    // Adding zero turns -0.0 into 0.0.
    precision::round(v) + 0.0
}

pub(crate) fn coord(x: f64, y: f64) -> Coord {
    [num(x), num(y)]
}
