use pcbpath_core::Point;
use serde::{Deserialize, Serialize};

/// Axis-aligned box in board coordinates.
///
/// Y grows upward, so `top_left.y() >= bottom_right.y()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl BoundingBox {
    /// A degenerate box covering a single point.
    #[must_use]
    pub fn from_point(p: Point) -> Self {
        Self {
            top_left: p,
            bottom_right: p,
        }
    }

    /// Box spanned by two arbitrary corners.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::from_point(a).merged(b)
    }

    /// Smallest box containing `self` and `p`.
    #[must_use]
    pub fn merged(self, p: Point) -> Self {
        Self {
            top_left: Point::new(
                self.top_left.x().min(p.x()),
                self.top_left.y().max(p.y()),
            ),
            bottom_right: Point::new(
                self.bottom_right.x().max(p.x()),
                self.bottom_right.y().min(p.y()),
            ),
        }
    }

    pub fn include(&mut self, p: Point) {
        *self = self.merged(p);
    }

    /// Grow to cover the rectangle `x.0..=x.1` by `y.0..=y.1`.
    pub fn include_extents(&mut self, x: (f64, f64), y: (f64, f64)) {
        self.include(Point::new(x.0, y.1));
        self.include(Point::new(x.1, y.0));
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.x() - self.top_left.x()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        (self.bottom_right.y() - self.top_left.y()).abs()
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.top_left.x() + self.width() / 2.0,
            self.top_left.y() - self.height() / 2.0,
        )
    }
}
