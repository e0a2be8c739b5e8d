//! Meandering traces for length matching.
//!
//! One period is an S shaped run of eight cubics: a shoulder leaving the
//! axis at `theta`, a half circle above, a crossing, a half circle below,
//! and a shoulder back onto the axis. Periods of a bus are stacked `pitch`
//! apart and centred on the x axis.

use std::f64::consts::PI;

use pcbpath_core::Point;
use pcbpath_parser::{path_to_string, Command, CommandKind, CubicSegment};
use pcbpath_svgpath::PathCache;
use serde::{Deserialize, Serialize};

use crate::error::ShapeError;
use crate::{coord, KAPPA};

fn default_bus_width() -> u32 {
    1
}

/// Meander parameters as they appear in board configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MeanderParams {
    pub radius: f64,
    /// Shoulder angle in degrees, `0..=90`.
    pub theta: f64,
    pub trace_width: f64,
    /// Number of parallel traces.
    #[serde(default = "default_bus_width")]
    pub bus_width: u32,
    /// Centre-to-centre distance between parallel traces.
    #[serde(default)]
    pub pitch: f64,
}

impl MeanderParams {
    pub fn validate(&self) -> Result<(), ShapeError> {
        ShapeError::positive("radius", self.radius)?;
        ShapeError::check(
            "theta",
            self.theta,
            (0.0..=90.0).contains(&self.theta),
            "an angle between 0 and 90 degrees",
        )?;
        ShapeError::non_negative("trace-width", self.trace_width)?;
        ShapeError::check(
            "bus-width",
            f64::from(self.bus_width),
            self.bus_width >= 1,
            "at least 1",
        )?;
        ShapeError::non_negative("pitch", self.pitch)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meander {
    pub path: String,
    /// How much narrower than `4 * radius` one period is, for laying
    /// periods side by side.
    pub spacing: f64,
    pub width: f64,
    pub height: f64,
}

fn cubic(ctrl1: (f64, f64), ctrl2: (f64, f64), to: (f64, f64)) -> CubicSegment {
    CubicSegment {
        ctrl1: coord(ctrl1.0, ctrl1.1),
        ctrl2: coord(ctrl2.0, ctrl2.1),
        to: coord(to.0, to.1),
    }
}

fn round_meander_commands(radius: f64, theta: f64, offset: Point) -> [Command; 2] {
    let r = radius;
    let t = theta.to_radians();
    let k = KAPPA;
    // Shoulder handles shrink with the angle.
    let j = 2.0 * t / PI;
    let (s, c) = t.sin_cos();
    let dx = r - r * c;

    [
        Command::relative(CommandKind::MoveTo(vec![coord(
            -2.0 * r * c - offset.x(),
            -offset.y(),
        )])),
        Command::relative(CommandKind::CurveTo(vec![
            cubic((-k * r * j * s, -k * r * j * c), (-dx, -r * s + r * k * j), (-dx, -r * s)),
            cubic((0.0, -k * r), (r - k * r, -r), (r, -r)),
            cubic((k * r, 0.0), (r, r - k * r), (r, r)),
            cubic(
                (0.0, k * r * j),
                (-(dx - k * r * j * s), r * s - r * k * j * c),
                (-dx, r * s),
            ),
            cubic((-k * r * j * s, k * r * j * c), (-dx, r * s - r * k * j), (-dx, r * s)),
            cubic((0.0, k * r), (r - k * r, r), (r, r)),
            cubic((k * r, 0.0), (r, -r + k * r), (r, -r)),
            cubic(
                (0.0, -k * r * j),
                (-(dx - k * r * j * s), -r * s + r * k * j * c),
                (-dx, -r * s),
            ),
        ])),
    ]
}

/// One meander period. `offset` is subtracted from the start point, which
/// is relative to wherever the pen is.
#[must_use]
pub fn create_round_meander(radius: f64, theta: f64, offset: Point) -> String {
    path_to_string(&round_meander_commands(radius, theta, offset))
}

/// A bus of `bus_width` meander periods, measured with `cache`.
pub fn create_meandering_path(
    cache: &PathCache,
    params: &MeanderParams,
) -> Result<Meander, ShapeError> {
    params.validate()?;
    let r = params.radius;
    let t = params.theta.to_radians();
    let count = params.bus_width;

    // Each period ends 4 r cos(theta) right of where it started.
    let mut offsets = vec![Point::new(0.0, -f64::from(count - 1) * params.pitch / 2.0)];
    offsets.extend((1..count).map(|_| Point::new(2.0 * r * t.cos(), params.pitch)));

    let cmds: Vec<Command> = offsets
        .iter()
        .flat_map(|o| round_meander_commands(r, params.theta, *o))
        .collect();
    let path = path_to_string(&cmds);
    let measured = cache.path(&path)?;
    tracing::debug!(
        periods = count,
        width = measured.width(),
        height = measured.height(),
        "built meander"
    );

    Ok(Meander {
        spacing: r - r * t.cos(),
        width: measured.width(),
        height: measured.height(),
        path,
    })
}
