use std::fmt;

use pcbpath_core::fmt_coord;

/// An `(x, y)` pair as written in the path text.
pub type Coord = [f64; 2];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub ctrl1: Coord,
    pub ctrl2: Coord,
    pub to: Coord,
}

/// Cubic whose first control point is the reflection of the previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothCubicSegment {
    pub ctrl2: Coord,
    pub to: Coord,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticSegment {
    pub ctrl: Coord,
    pub to: Coord,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub rx: f64,
    pub ry: f64,
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub to: Coord,
}

/// One command letter and every argument group written after it.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandKind {
    /// Pairs after the first are implicit linetos.
    MoveTo(Vec<Coord>),
    LineTo(Vec<Coord>),
    HorizontalLineTo(Vec<f64>),
    VerticalLineTo(Vec<f64>),
    CurveTo(Vec<CubicSegment>),
    SmoothCurveTo(Vec<SmoothCubicSegment>),
    QuadraticCurveTo(Vec<QuadraticSegment>),
    SmoothQuadraticCurveTo(Vec<Coord>),
    ArcTo(Vec<ArcSegment>),
    ClosePath,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// Upper-case letter in the source text.
    pub absolute: bool,
    pub kind: CommandKind,
}

impl Command {
    #[must_use]
    pub fn new(absolute: bool, kind: CommandKind) -> Self {
        Self { absolute, kind }
    }

    #[must_use]
    pub fn relative(kind: CommandKind) -> Self {
        Self::new(false, kind)
    }

    /// The command letter, upper case when absolute.
    #[must_use]
    pub fn letter(&self) -> char {
        let lower = match self.kind {
            CommandKind::MoveTo(_) => 'm',
            CommandKind::LineTo(_) => 'l',
            CommandKind::HorizontalLineTo(_) => 'h',
            CommandKind::VerticalLineTo(_) => 'v',
            CommandKind::CurveTo(_) => 'c',
            CommandKind::SmoothCurveTo(_) => 's',
            CommandKind::QuadraticCurveTo(_) => 'q',
            CommandKind::SmoothQuadraticCurveTo(_) => 't',
            CommandKind::ArcTo(_) => 'a',
            CommandKind::ClosePath => 'z',
        };
        if self.absolute {
            lower.to_ascii_uppercase()
        } else {
            lower
        }
    }

    #[must_use]
    pub fn is_moveto(&self) -> bool {
        matches!(self.kind, CommandKind::MoveTo(_))
    }

    /// Arguments as flat coordinate groups: one `[x, y]` per point, `[v]` for
    /// horizontal and vertical lines, and the seven arc parameters as a single
    /// group with flags as `0.0`/`1.0`.
    #[must_use]
    pub fn coordinate_groups(&self) -> Vec<Vec<f64>> {
        fn pairs<'a>(it: impl IntoIterator<Item = &'a Coord>) -> Vec<Vec<f64>> {
            it.into_iter().map(|c| c.to_vec()).collect()
        }
        match &self.kind {
            CommandKind::MoveTo(pts)
            | CommandKind::LineTo(pts)
            | CommandKind::SmoothQuadraticCurveTo(pts) => pairs(pts),
            CommandKind::HorizontalLineTo(vals) | CommandKind::VerticalLineTo(vals) => {
                vals.iter().map(|v| vec![*v]).collect()
            }
            CommandKind::CurveTo(segs) => {
                pairs(segs.iter().flat_map(|s| [&s.ctrl1, &s.ctrl2, &s.to]))
            }
            CommandKind::SmoothCurveTo(segs) => pairs(segs.iter().flat_map(|s| [&s.ctrl2, &s.to])),
            CommandKind::QuadraticCurveTo(segs) => {
                pairs(segs.iter().flat_map(|s| [&s.ctrl, &s.to]))
            }
            CommandKind::ArcTo(segs) => segs
                .iter()
                .map(|a| {
                    vec![
                        a.rx,
                        a.ry,
                        a.x_axis_rotation,
                        f64::from(u8::from(a.large_arc)),
                        f64::from(u8::from(a.sweep)),
                        a.to[0],
                        a.to[1],
                    ]
                })
                .collect(),
            CommandKind::ClosePath => Vec::new(),
        }
    }
}

fn write_coord(f: &mut fmt::Formatter<'_>, c: &Coord) -> fmt::Result {
    write!(f, " {},{}", fmt_coord(c[0]), fmt_coord(c[1]))
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())?;
        match &self.kind {
            CommandKind::MoveTo(pts)
            | CommandKind::LineTo(pts)
            | CommandKind::SmoothQuadraticCurveTo(pts) => {
                for p in pts {
                    write_coord(f, p)?;
                }
            }
            CommandKind::HorizontalLineTo(vals) | CommandKind::VerticalLineTo(vals) => {
                for v in vals {
                    write!(f, " {}", fmt_coord(*v))?;
                }
            }
            CommandKind::CurveTo(segs) => {
                for s in segs {
                    write_coord(f, &s.ctrl1)?;
                    write_coord(f, &s.ctrl2)?;
                    write_coord(f, &s.to)?;
                }
            }
            CommandKind::SmoothCurveTo(segs) => {
                for s in segs {
                    write_coord(f, &s.ctrl2)?;
                    write_coord(f, &s.to)?;
                }
            }
            CommandKind::QuadraticCurveTo(segs) => {
                for s in segs {
                    write_coord(f, &s.ctrl)?;
                    write_coord(f, &s.to)?;
                }
            }
            CommandKind::ArcTo(segs) => {
                for a in segs {
                    write!(
                        f,
                        " {},{} {} {} {}",
                        fmt_coord(a.rx),
                        fmt_coord(a.ry),
                        fmt_coord(a.x_axis_rotation),
                        u8::from(a.large_arc),
                        u8::from(a.sweep)
                    )?;
                    write_coord(f, &a.to)?;
                }
            }
            CommandKind::ClosePath => {}
        }
        Ok(())
    }
}

/// Render commands back to path text, one space between commands.
#[must_use]
pub fn path_to_string(commands: &[Command]) -> String {
    commands
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_follows_absolute_flag() {
        assert_eq!(Command::new(true, CommandKind::LineTo(vec![])).letter(), 'L');
        assert_eq!(Command::relative(CommandKind::ClosePath).letter(), 'z');
    }

    #[test]
    fn coordinate_groups_flatten_curve_segments() {
        let c = Command::relative(CommandKind::CurveTo(vec![CubicSegment {
            ctrl1: [1.0, 2.0],
            ctrl2: [3.0, 4.0],
            to: [5.0, 6.0],
        }]));
        assert_eq!(
            c.coordinate_groups(),
            vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]
        );
        let h = Command::new(true, CommandKind::HorizontalLineTo(vec![5.0, 6.0]));
        assert_eq!(h.coordinate_groups(), vec![vec![5.0], vec![6.0]]);
    }

    #[test]
    fn display_renders_each_group() {
        let cmds = vec![
            Command::new(true, CommandKind::MoveTo(vec![[1.0, 2.0], [3.0, 4.5]])),
            Command::relative(CommandKind::VerticalLineTo(vec![-7.0])),
            Command::relative(CommandKind::ArcTo(vec![ArcSegment {
                rx: 10.0,
                ry: 10.0,
                x_axis_rotation: 0.0,
                large_arc: false,
                sweep: true,
                to: [10.0, 10.0],
            }])),
            Command::relative(CommandKind::ClosePath),
        ];
        assert_eq!(
            path_to_string(&cmds),
            "M 1.0,2.0 3.0,4.5 v -7.0 a 10.0,10.0 0.0 0 1 10.0,10.0 z"
        );
    }
}
