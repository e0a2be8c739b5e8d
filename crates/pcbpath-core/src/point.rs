use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::precision;

/// A board coordinate. Y grows upward.
///
/// Coordinates are rounded to the process-wide precision whenever a point is
/// built, mutated or deserialized, so `==` is exact. The fields are private
/// for the same reason.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawPoint")]
pub struct Point {
    x: f64,
    y: f64,
}

#[derive(Deserialize)]
struct RawPoint {
    x: f64,
    y: f64,
}

impl From<RawPoint> for Point {
    fn from(raw: RawPoint) -> Self {
        Point::new(raw.x, raw.y)
    }
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: precision::round(x),
            y: precision::round(y),
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn from_array(p: [f64; 2]) -> Self {
        Self::new(p[0], p[1])
    }

    #[must_use]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Replace both coordinates.
    pub fn assign(&mut self, x: f64, y: f64) -> &mut Self {
        *self = Self::new(x, y);
        self
    }

    /// Rotate clockwise by `angle_deg` around `pivot`.
    pub fn rotate(&mut self, angle_deg: f64, pivot: Point) -> &mut Self {
        let p = rotate_point([self.x, self.y], angle_deg, [pivot.x, pivot.y]);
        self.assign(p[0], p[1])
    }

    /// Copying variant of [`Point::rotate`].
    #[must_use]
    pub fn rotated(mut self, angle_deg: f64, pivot: Point) -> Self {
        self.rotate(angle_deg, pivot);
        self
    }

    /// Scale both coordinates by `scalar`.
    pub fn mult(&mut self, scalar: f64) -> &mut Self {
        self.assign(self.x * scalar, self.y * scalar)
    }

    /// Round to `digits` places, coarser than the process-wide precision.
    pub fn round(&mut self, digits: u32) -> &mut Self {
        self.x = precision::round_to(self.x, digits);
        self.y = precision::round_to(self.y, digits);
        self
    }

    #[must_use]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Clockwise rotation of a vector, angle in degrees.
#[must_use]
pub fn rotate_vec(v: [f64; 2], angle_deg: f64) -> [f64; 2] {
    let (s, c) = (-angle_deg).to_radians().sin_cos();
    [v[0] * c - v[1] * s, v[0] * s + v[1] * c]
}

#[must_use]
pub fn rotate_point(p: [f64; 2], angle_deg: f64, pivot: [f64; 2]) -> [f64; 2] {
    let translated = [p[0] - pivot[0], p[1] - pivot[1]];
    let rotated = rotate_vec(translated, angle_deg);
    [rotated[0] + pivot[0], rotated[1] + pivot[1]]
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from(p: [f64; 2]) -> Self {
        Point::from_array(p)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}, {:.2}]", self.x, self.y)
    }
}
