use pcbpath_core::{fmt_coord, precision, Point};
use pcbpath_parser::{Command, CommandKind, Coord, ParseError, PathGrammar};

fn push_pair(out: &mut String, p: Point) {
    out.push_str(&format!("{},{} ", fmt_coord(p.x()), fmt_coord(p.y())));
}

fn push_value(out: &mut String, v: f64) {
    out.push_str(&format!("{} ", fmt_coord(v)));
}

/// Rewrite `commands` with every coordinate relative to the pen, except the
/// first moveto point which stays absolute.
///
/// Output is `m 5.0,8.0 1.0,0.0 z `: lowercase letters, each coordinate group
/// followed by a space.
#[must_use]
pub fn to_relative(commands: &[Command]) -> String {
    let mut out = String::new();
    let mut abspos = Point::ORIGIN;
    let mut origin = Point::ORIGIN;

    for cmd in commands {
        let absolute = cmd.absolute;
        // Offset of `c` from the segment start.
        let delta = |from: Point, c: &Coord| {
            if absolute {
                Point::from(*c) - from
            } else {
                Point::from(*c)
            }
        };

        out.push(cmd.letter().to_ascii_lowercase());
        out.push(' ');
        match &cmd.kind {
            CommandKind::MoveTo(pts) => {
                for (i, c) in pts.iter().enumerate() {
                    let d = delta(abspos, c);
                    abspos += d;
                    if i == 0 {
                        origin = abspos;
                    }
                    push_pair(&mut out, d);
                }
            }
            CommandKind::LineTo(pts) | CommandKind::SmoothQuadraticCurveTo(pts) => {
                for c in pts {
                    let d = delta(abspos, c);
                    abspos += d;
                    push_pair(&mut out, d);
                }
            }
            CommandKind::HorizontalLineTo(xs) => {
                for x in xs {
                    let d = if absolute { x - abspos.x() } else { *x };
                    abspos = Point::new(abspos.x() + d, abspos.y());
                    push_value(&mut out, precision::round(d));
                }
            }
            CommandKind::VerticalLineTo(ys) => {
                for y in ys {
                    let d = if absolute { y - abspos.y() } else { *y };
                    abspos = Point::new(abspos.x(), abspos.y() + d);
                    push_value(&mut out, precision::round(d));
                }
            }
            CommandKind::CurveTo(segs) => {
                for s in segs {
                    push_pair(&mut out, delta(abspos, &s.ctrl1));
                    push_pair(&mut out, delta(abspos, &s.ctrl2));
                    let d = delta(abspos, &s.to);
                    push_pair(&mut out, d);
                    abspos += d;
                }
            }
            CommandKind::SmoothCurveTo(segs) => {
                for s in segs {
                    push_pair(&mut out, delta(abspos, &s.ctrl2));
                    let d = delta(abspos, &s.to);
                    push_pair(&mut out, d);
                    abspos += d;
                }
            }
            CommandKind::QuadraticCurveTo(segs) => {
                for s in segs {
                    push_pair(&mut out, delta(abspos, &s.ctrl));
                    let d = delta(abspos, &s.to);
                    push_pair(&mut out, d);
                    abspos += d;
                }
            }
            CommandKind::ArcTo(segs) => {
                for a in segs {
                    let d = delta(abspos, &a.to);
                    out.push_str(&format!(
                        "{},{} {} {} {} ",
                        fmt_coord(a.rx),
                        fmt_coord(a.ry),
                        fmt_coord(a.x_axis_rotation),
                        u8::from(a.large_arc),
                        u8::from(a.sweep)
                    ));
                    push_pair(&mut out, d);
                    abspos += d;
                }
            }
            CommandKind::ClosePath => {
                abspos = origin;
            }
        }
    }
    out
}

/// Parse `text` and return its relative form.
///
/// Unlike building an [`crate::SvgPath`] this does not compute dimensions, so
/// it also works for paths containing arcs.
pub fn relative_form(grammar: &PathGrammar, text: &str) -> Result<String, ParseError> {
    Ok(to_relative(&grammar.parse(text)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(s: &str) -> String {
        relative_form(&PathGrammar::new(), s).unwrap()
    }

    #[test]
    fn moveto_continuation_pairs() {
        assert_eq!(rel("M5,8 6,8 2-2z"), "m 5.0,8.0 1.0,0.0 -4.0,-10.0 z ");
    }

    #[test]
    fn relative_first_moveto_stays_absolute() {
        assert_eq!(rel("m 1 2 3 4"), "m 1.0,2.0 3.0,4.0 ");
    }

    #[test]
    fn second_absolute_moveto_becomes_offset() {
        assert_eq!(rel("M 1 2 M 3 4"), "m 1.0,2.0 m 2.0,2.0 ");
    }

    #[test]
    fn horizontal_and_vertical_advance_one_axis() {
        assert_eq!(rel("M 3 -2 V 5 H 1"), "m 3.0,-2.0 v 7.0 h -2.0 ");
        assert_eq!(rel("M 0 0 h 5 6"), "m 0.0,0.0 h 5.0 6.0 ");
        assert_eq!(rel("M 1 0 H 5 6"), "m 1.0,0.0 h 4.0 1.0 ");
    }

    #[test]
    fn curves_advance_by_destination_only() {
        assert_eq!(
            rel("M 1 1 C 1 2 3 4 5 5 Q 6 6 7 5"),
            "m 1.0,1.0 c 0.0,1.0 2.0,3.0 4.0,4.0 q 1.0,1.0 2.0,0.0 "
        );
    }

    #[test]
    fn close_resets_to_subpath_origin() {
        assert_eq!(rel("M 2 2 L 4 2 Z L 2 5"), "m 2.0,2.0 l 2.0,0.0 z l 0.0,3.0 ");
    }

    #[test]
    fn arcs_keep_their_parameters() {
        assert_eq!(
            rel("M 10 10 A 5 5 30 1 0 20 10"),
            "m 10.0,10.0 a 5.0,5.0 30.0 1 0 10.0,0.0 "
        );
    }

    #[test]
    fn empty_path_is_empty() {
        assert_eq!(rel(""), "");
    }
}
