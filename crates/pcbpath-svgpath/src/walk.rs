//! Resolve commands into absolute segments.
//!
//! Tracks the pen position, the current subpath origin and the last control
//! points needed to expand smooth curves.

use pcbpath_core::Point;
use pcbpath_parser::{Command, CommandKind, Coord};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Segment {
    /// First point of a moveto command: starts a subpath.
    Move(Point),
    /// Straight segment, including implicit linetos after a moveto.
    Line(Point),
    Quadratic([Point; 3]),
    Cubic([Point; 4]),
    /// Arcs are resolved only far enough to keep the pen in the right place.
    Arc { letter: char },
    /// Pen returns to the subpath origin.
    Close,
}

#[derive(Debug, Clone, Copy)]
struct Pen {
    current: Point,
    origin: Point,
    last_cubic_ctrl: Option<Point>,
    last_quadratic_ctrl: Option<Point>,
}

impl Pen {
    fn new() -> Self {
        Self {
            current: Point::ORIGIN,
            origin: Point::ORIGIN,
            last_cubic_ctrl: None,
            last_quadratic_ctrl: None,
        }
    }

    fn resolve(&self, absolute: bool, c: Coord) -> Point {
        if absolute {
            Point::from(c)
        } else {
            self.current + Point::from(c)
        }
    }

    /// `current + (current - ctrl)`, or the current point when the previous
    /// segment left no matching control point.
    fn reflect(&self, ctrl: Option<Point>) -> Point {
        match ctrl {
            Some(c) => self.current + (self.current - c),
            None => self.current,
        }
    }
}

/// Expand `commands` into absolute segments.
///
/// The pen starts at the origin, so the first moveto coordinate is absolute
/// whichever case it is written in.
pub(crate) fn segments(commands: &[Command]) -> Vec<Segment> {
    let mut pen = Pen::new();
    let mut out = Vec::new();

    for cmd in commands {
        let abs = cmd.absolute;
        let mut cubic_ctrl = None;
        let mut quadratic_ctrl = None;

        match &cmd.kind {
            CommandKind::MoveTo(pts) => {
                for (i, c) in pts.iter().enumerate() {
                    pen.current = pen.resolve(abs, *c);
                    if i == 0 {
                        pen.origin = pen.current;
                        out.push(Segment::Move(pen.current));
                    } else {
                        out.push(Segment::Line(pen.current));
                    }
                }
            }
            CommandKind::LineTo(pts) => {
                for c in pts {
                    pen.current = pen.resolve(abs, *c);
                    out.push(Segment::Line(pen.current));
                }
            }
            CommandKind::HorizontalLineTo(xs) => {
                for x in xs {
                    let x = if abs { *x } else { pen.current.x() + x };
                    pen.current = Point::new(x, pen.current.y());
                    out.push(Segment::Line(pen.current));
                }
            }
            CommandKind::VerticalLineTo(ys) => {
                for y in ys {
                    let y = if abs { *y } else { pen.current.y() + y };
                    pen.current = Point::new(pen.current.x(), y);
                    out.push(Segment::Line(pen.current));
                }
            }
            CommandKind::CurveTo(segs) => {
                for s in segs {
                    let c1 = pen.resolve(abs, s.ctrl1);
                    let c2 = pen.resolve(abs, s.ctrl2);
                    let to = pen.resolve(abs, s.to);
                    out.push(Segment::Cubic([pen.current, c1, c2, to]));
                    pen.current = to;
                    pen.last_cubic_ctrl = Some(c2);
                    cubic_ctrl = Some(c2);
                }
            }
            CommandKind::SmoothCurveTo(segs) => {
                for s in segs {
                    let c1 = pen.reflect(pen.last_cubic_ctrl);
                    let c2 = pen.resolve(abs, s.ctrl2);
                    let to = pen.resolve(abs, s.to);
                    out.push(Segment::Cubic([pen.current, c1, c2, to]));
                    pen.current = to;
                    pen.last_cubic_ctrl = Some(c2);
                    cubic_ctrl = Some(c2);
                }
            }
            CommandKind::QuadraticCurveTo(segs) => {
                for s in segs {
                    let c = pen.resolve(abs, s.ctrl);
                    let to = pen.resolve(abs, s.to);
                    out.push(Segment::Quadratic([pen.current, c, to]));
                    pen.current = to;
                    pen.last_quadratic_ctrl = Some(c);
                    quadratic_ctrl = Some(c);
                }
            }
            CommandKind::SmoothQuadraticCurveTo(pts) => {
                for p in pts {
                    let c = pen.reflect(pen.last_quadratic_ctrl);
                    let to = pen.resolve(abs, *p);
                    out.push(Segment::Quadratic([pen.current, c, to]));
                    pen.current = to;
                    pen.last_quadratic_ctrl = Some(c);
                    quadratic_ctrl = Some(c);
                }
            }
            CommandKind::ArcTo(segs) => {
                for a in segs {
                    pen.current = pen.resolve(abs, a.to);
                    out.push(Segment::Arc {
                        letter: cmd.letter(),
                    });
                }
            }
            CommandKind::ClosePath => {
                pen.current = pen.origin;
                out.push(Segment::Close);
            }
        }

        // Reflection only carries over between matching curve kinds.
        pen.last_cubic_ctrl = cubic_ctrl;
        pen.last_quadratic_ctrl = quadratic_ctrl;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcbpath_parser::PathGrammar;

    fn walk(s: &str) -> Vec<Segment> {
        segments(&PathGrammar::new().parse(s).unwrap())
    }

    #[test]
    fn extra_moveto_pairs_are_lines() {
        assert_eq!(
            walk("m 1 2 3 4"),
            vec![
                Segment::Move(Point::new(1.0, 2.0)),
                Segment::Line(Point::new(4.0, 6.0)),
            ]
        );
    }

    #[test]
    fn close_returns_pen_to_subpath_origin() {
        let segs = walk("M 5 5 l 10 0 z l 0 3");
        assert_eq!(segs[2], Segment::Close);
        assert_eq!(segs[3], Segment::Line(Point::new(5.0, 8.0)));
    }

    #[test]
    fn smooth_cubic_reflects_previous_control() {
        let segs = walk("M0 0 C 0 5 10 5 10 0 S 20 -5 20 0");
        assert_eq!(
            segs[2],
            Segment::Cubic([
                Point::new(10.0, 0.0),
                Point::new(10.0, -5.0),
                Point::new(20.0, -5.0),
                Point::new(20.0, 0.0),
            ])
        );
    }

    #[test]
    fn smooth_cubic_after_line_uses_current_point() {
        let segs = walk("M0 0 C 0 5 10 5 10 0 L 12 0 s 5 5 8 0");
        assert_eq!(
            segs[3],
            Segment::Cubic([
                Point::new(12.0, 0.0),
                Point::new(12.0, 0.0),
                Point::new(17.0, 5.0),
                Point::new(20.0, 0.0),
            ])
        );
    }

    #[test]
    fn smooth_quadratic_chain_reflects_each_time() {
        let segs = walk("M0 0 Q 5 5 10 0 T 20 0 T 30 0");
        assert_eq!(
            segs[2],
            Segment::Quadratic([Point::new(10.0, 0.0), Point::new(15.0, -5.0), Point::new(20.0, 0.0)])
        );
        assert_eq!(
            segs[3],
            Segment::Quadratic([Point::new(20.0, 0.0), Point::new(25.0, 5.0), Point::new(30.0, 0.0)])
        );
    }

    #[test]
    fn arcs_move_the_pen() {
        let segs = walk("m0 0 a10,10 0 0 1 10,10 l 1 1");
        assert_eq!(segs[1], Segment::Arc { letter: 'a' });
        assert_eq!(segs[2], Segment::Line(Point::new(11.0, 11.0)));
    }
}
