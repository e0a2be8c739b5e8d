//! Geometry primitives shared by the path engine: bounding boxes, Bezier
//! sampling and analytic bounds, polyline length.

pub mod bbox;
pub mod bezier;
pub mod measure;

pub use bbox::BoundingBox;
pub use bezier::{cubic_bounds, cubic_points, quadratic_bounds, quadratic_points};
pub use measure::{path_length, polyline_length};
