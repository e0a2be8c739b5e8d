use pcbpath_core::config::MAX_BEZIER_STEPS;
use pcbpath_core::Point;
use pcbpath_geometry::{cubic_points, path_length, quadratic_points};
use pcbpath_parser::Command;

use crate::error::{PathError, Stage};
use crate::walk::{segments, Segment};

/// Keep roughly one sample per `length` of curve, always ending on the
/// curve's endpoint. The start sample is dropped: it is the pen position,
/// which the run already holds.
fn thin(xs: &[f64], ys: &[f64], steps: usize, length: f64) -> Vec<Point> {
    let last = xs.len().min(ys.len()) - 1;
    let curve_length = path_length(xs, ys);
    let pieces = if curve_length > 0.0 {
        ((curve_length / length).ceil() as usize).max(1)
    } else {
        1
    };
    let skip = steps.div_ceil(pieces).max(1);

    let mut out: Vec<Point> = (skip..last)
        .step_by(skip)
        .map(|k| Point::new(xs[k], ys[k]))
        .collect();
    out.push(Point::new(xs[last], ys[last]));
    out
}

fn current_run(runs: &mut Vec<Vec<Point>>) -> &mut Vec<Point> {
    if runs.is_empty() {
        runs.push(Vec::new());
    }
    let i = runs.len() - 1;
    &mut runs[i]
}

/// Flatten a path into point runs, one run per subpath.
///
/// Curves are sampled at `steps` and thinned so retained points sit about
/// `length` apart along the curve. Straight segments contribute their
/// endpoints and closepath contributes nothing.
pub fn coordinate_runs(
    commands: &[Command],
    steps: usize,
    length: f64,
) -> Result<Vec<Vec<Point>>, PathError> {
    if !(1..=MAX_BEZIER_STEPS).contains(&steps) || !(length.is_finite() && length > 0.0) {
        return Err(PathError::InvalidSampling { steps, length });
    }

    let mut runs: Vec<Vec<Point>> = Vec::new();
    for seg in segments(commands) {
        match seg {
            Segment::Move(p) => runs.push(vec![p]),
            Segment::Line(p) => current_run(&mut runs).push(p),
            Segment::Quadratic([p0, p1, p2]) => {
                let xs = quadratic_points([p0.x(), p1.x(), p2.x()], steps);
                let ys = quadratic_points([p0.y(), p1.y(), p2.y()], steps);
                current_run(&mut runs).extend(thin(&xs, &ys, steps, length));
            }
            Segment::Cubic([p0, p1, p2, p3]) => {
                let xs = cubic_points([p0.x(), p1.x(), p2.x(), p3.x()], steps);
                let ys = cubic_points([p0.y(), p1.y(), p2.y(), p3.y()], steps);
                current_run(&mut runs).extend(thin(&xs, &ys, steps, length));
            }
            Segment::Arc { letter } => {
                return Err(PathError::unsupported(letter, Stage::Flatten));
            }
            Segment::Close => {}
        }
    }
    Ok(runs)
}
