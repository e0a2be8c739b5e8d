use pcbpath_core::Point;
use pcbpath_parser::{path_to_string, Command, CommandKind, CubicSegment};

use crate::error::ShapeError;
use crate::{coord, KAPPA};

/// Diameter of the placement marker circle.
const MARKER_DIAMETER: f64 = 0.2;

fn cubic(ctrl1: (f64, f64), ctrl2: (f64, f64), to: (f64, f64)) -> CubicSegment {
    CubicSegment {
        ctrl1: coord(ctrl1.0, ctrl1.1),
        ctrl2: coord(ctrl2.0, ctrl2.1),
        to: coord(to.0, to.1),
    }
}

fn move_to(pts: &[(f64, f64)]) -> Command {
    Command::relative(CommandKind::MoveTo(
        pts.iter().map(|(x, y)| coord(*x, *y)).collect(),
    ))
}

/// Four quarter arcs of radius `r`, starting from the bottom of the circle
/// and ending back on it.
fn full_turn(r: f64) -> Command {
    let k = KAPPA;
    let j = 1.0 - k;
    Command::relative(CommandKind::CurveTo(vec![
        cubic((k * r, 0.0), (r, -r * j), (r, -r)),
        cubic((0.0, -r * k), (-r * j, -r), (-r, -r)),
        cubic((-r * k, 0.0), (-r, r * j), (-r, r)),
        cubic((0.0, r * k), (r * j, r), (r, r)),
    ]))
}

fn circle_commands(r: f64, offset: Point) -> [Command; 3] {
    [
        move_to(&[(0.0, r - offset.y())]),
        full_turn(r),
        Command::relative(CommandKind::ClosePath),
    ]
}

/// Circle of `diameter` centred on the origin.
///
/// The moveto is relative, so when the path is appended to another one the
/// pen is assumed to sit at `(0, offset.y())`; pass the origin for a
/// stand-alone circle.
pub fn circle_diameter_to_path(diameter: f64, offset: Point) -> Result<String, ShapeError> {
    ShapeError::positive("diameter", diameter)?;
    Ok(path_to_string(&circle_commands(diameter / 2.0, offset)))
}

/// Ring between two concentric circles. The larger diameter is the outside
/// whichever order they are given in; equal diameters give a single circle.
pub fn ring_diameters_to_path(d1: f64, d2: f64) -> Result<String, ShapeError> {
    ShapeError::positive("first diameter", d1)?;
    ShapeError::positive("second diameter", d2)?;
    if d1 == d2 {
        return circle_diameter_to_path(d1, Point::ORIGIN);
    }
    let (outer, inner) = if d1 > d2 { (d1, d2) } else { (d2, d1) };

    let mut cmds = Vec::with_capacity(6);
    cmds.extend(circle_commands(outer / 2.0, Point::ORIGIN));
    // The outer circle closes at (0, outer / 2).
    cmds.extend(circle_commands(inner / 2.0, Point::new(0.0, outer / 2.0)));
    Ok(path_to_string(&cmds))
}

/// Drill symbol: a circle with two opposite quadrants of a smaller disc
/// filled in.
pub fn drill_path(diameter: f64) -> Result<String, ShapeError> {
    ShapeError::positive("diameter", diameter)?;
    let r = diameter / 2.0;
    let b = r * 0.9;
    let k = KAPPA;

    let cmds = [
        move_to(&[(0.0, r)]),
        full_turn(r),
        Command::relative(CommandKind::ClosePath),
        move_to(&[(0.0, -(r - b)), (0.0, -2.0 * b)]),
        Command::relative(CommandKind::CurveTo(vec![cubic(
            (-b * k, 0.0),
            (-b, b * (1.0 - k)),
            (-b, b),
        )])),
        Command::relative(CommandKind::LineTo(vec![coord(b, 0.0), coord(b, 0.0)])),
        Command::relative(CommandKind::CurveTo(vec![cubic(
            (0.0, k * b),
            (-b * (1.0 - k), b),
            (-b, b),
        )])),
        Command::relative(CommandKind::ClosePath),
    ];
    Ok(path_to_string(&cmds))
}

/// Small circle with a horizontal bar through it, marking a component's
/// placement origin.
#[must_use]
pub fn placement_marker_path() -> String {
    let r = MARKER_DIAMETER / 2.0;
    let b = r * 1.8;
    let cmds = [
        move_to(&[(0.0, r)]),
        full_turn(r),
        move_to(&[(-b, -r), (2.0 * b, 0.0)]),
        Command::relative(CommandKind::ClosePath),
    ];
    path_to_string(&cmds)
}
