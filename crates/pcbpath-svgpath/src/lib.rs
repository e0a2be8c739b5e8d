//! Path engine: relative form, dimensions, transforms and flattening of SVG
//! path data, with content-keyed caching.

pub mod cache;
pub mod digest;
pub mod dimensions;
pub mod error;
pub mod flatten;
pub mod path;
pub mod relative;
pub mod transform;
mod walk;

pub use cache::{PathCache, PathRecord};
pub use digest::ContentHash;
pub use dimensions::bounding_box;
pub use error::{PathError, Stage};
pub use flatten::coordinate_runs;
pub use path::SvgPath;
pub use relative::{relative_form, to_relative};
pub use transform::{mirror_horizontally, TransformParams, TransformRecord};
