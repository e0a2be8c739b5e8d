use pcbpath_core::Point;
use pcbpath_geometry::{cubic_bounds, quadratic_bounds, BoundingBox};
use pcbpath_parser::Command;

use crate::error::{PathError, Stage};
use crate::walk::{segments, Segment};

fn include(bbox: &mut Option<BoundingBox>, p: Point) {
    match bbox {
        Some(b) => b.include(p),
        None => *bbox = Some(BoundingBox::from_point(p)),
    }
}

/// Bounding box of a path, curve interiors included.
///
/// Line and move endpoints are folded in directly; curves contribute their
/// analytic extrema per axis.
pub fn bounding_box(commands: &[Command]) -> Result<BoundingBox, PathError> {
    let mut bbox = None;
    for seg in segments(commands) {
        match seg {
            Segment::Move(p) | Segment::Line(p) => include(&mut bbox, p),
            Segment::Quadratic([p0, p1, p2]) => {
                include(&mut bbox, p0);
                if let Some(b) = bbox.as_mut() {
                    b.include_extents(
                        quadratic_bounds([p0.x(), p1.x(), p2.x()]),
                        quadratic_bounds([p0.y(), p1.y(), p2.y()]),
                    );
                }
            }
            Segment::Cubic([p0, p1, p2, p3]) => {
                include(&mut bbox, p0);
                if let Some(b) = bbox.as_mut() {
                    b.include_extents(
                        cubic_bounds([p0.x(), p1.x(), p2.x(), p3.x()]),
                        cubic_bounds([p0.y(), p1.y(), p2.y(), p3.y()]),
                    );
                }
            }
            Segment::Arc { letter } => {
                return Err(PathError::unsupported(letter, Stage::Dimensions));
            }
            Segment::Close => {}
        }
    }
    bbox.ok_or(PathError::Empty)
}
