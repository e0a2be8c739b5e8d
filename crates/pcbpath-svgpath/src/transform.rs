use pcbpath_core::{rotate_vec, Point};
use pcbpath_geometry::BoundingBox;
use pcbpath_parser::{
    path_to_string, ArcSegment, Command, CommandKind, Coord, CubicSegment, PathGrammar,
    QuadraticSegment, SmoothCubicSegment,
};
use serde::Serialize;

use crate::dimensions::bounding_box;
use crate::digest::ContentHash;
use crate::error::{PathError, Stage};

/// Similarity transform applied by [`crate::SvgPath::transform`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParams {
    pub scale: f64,
    /// Clockwise, in degrees.
    pub rotate_angle: f64,
    pub rotate_pivot: Point,
    pub mirror: bool,
    /// Move the first point so the bounding box is centred on the origin.
    pub center: bool,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotate_angle: 0.0,
            rotate_pivot: Point::ORIGIN,
            mirror: false,
            center: true,
        }
    }
}

impl TransformParams {
    #[must_use]
    pub fn scaled(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn rotated(mut self, angle: f64, pivot: Point) -> Self {
        self.rotate_angle = angle;
        self.rotate_pivot = pivot;
        self
    }

    #[must_use]
    pub fn mirrored(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    #[must_use]
    pub fn centered(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    pub(crate) fn cache_key(&self, relative: &str) -> ContentHash {
        // Debug formatting of f64 round-trips, so distinct parameters never
        // collide textually.
        ContentHash::of(&format!("{relative}\u{1f}{self:?}"))
    }
}

/// Result of one transform, both orientations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformRecord {
    /// Requested orientation.
    pub path: String,
    /// The other orientation.
    pub mirrored: String,
    pub width: f64,
    pub height: f64,
}

struct Similarity {
    angle: f64,
    scale: f64,
}

impl Similarity {
    /// Rotate and scale a relative offset.
    fn apply(&self, c: Coord) -> Coord {
        let r = rotate_vec(c, self.angle);
        let p = Point::new(r[0] * self.scale, r[1] * self.scale);
        [p.x(), p.y()]
    }
}

/// Transform a relative-form path.
///
/// The first point is rotated about `rotate_pivot`; every later coordinate
/// is an offset and is rotated as a vector. Horizontal and vertical lines
/// become general lines.
pub(crate) fn transform(
    grammar: &PathGrammar,
    relative: &[Command],
    first_point: Point,
    bbox: &BoundingBox,
    params: &TransformParams,
) -> Result<TransformRecord, PathError> {
    let sim = Similarity {
        angle: params.rotate_angle,
        scale: params.scale,
    };

    let start = if params.center {
        first_point - bbox.center()
    } else {
        first_point
    };
    let start = start.rotated(params.rotate_angle, params.rotate_pivot) * params.scale;

    let mut out = Vec::with_capacity(relative.len());
    for (i, cmd) in relative.iter().enumerate() {
        let kind = match &cmd.kind {
            CommandKind::MoveTo(pts) => {
                let mut mapped: Vec<Coord> = pts.iter().map(|c| sim.apply(*c)).collect();
                if i == 0 {
                    if let Some(first) = mapped.first_mut() {
                        *first = start.to_array();
                    }
                }
                CommandKind::MoveTo(mapped)
            }
            CommandKind::LineTo(pts) => {
                CommandKind::LineTo(pts.iter().map(|c| sim.apply(*c)).collect())
            }
            CommandKind::HorizontalLineTo(xs) => {
                CommandKind::LineTo(xs.iter().map(|x| sim.apply([*x, 0.0])).collect())
            }
            CommandKind::VerticalLineTo(ys) => {
                CommandKind::LineTo(ys.iter().map(|y| sim.apply([0.0, *y])).collect())
            }
            CommandKind::CurveTo(segs) => CommandKind::CurveTo(
                segs.iter()
                    .map(|s| CubicSegment {
                        ctrl1: sim.apply(s.ctrl1),
                        ctrl2: sim.apply(s.ctrl2),
                        to: sim.apply(s.to),
                    })
                    .collect(),
            ),
            CommandKind::SmoothCurveTo(segs) => CommandKind::SmoothCurveTo(
                segs.iter()
                    .map(|s| SmoothCubicSegment {
                        ctrl2: sim.apply(s.ctrl2),
                        to: sim.apply(s.to),
                    })
                    .collect(),
            ),
            CommandKind::QuadraticCurveTo(segs) => CommandKind::QuadraticCurveTo(
                segs.iter()
                    .map(|s| QuadraticSegment {
                        ctrl: sim.apply(s.ctrl),
                        to: sim.apply(s.to),
                    })
                    .collect(),
            ),
            CommandKind::SmoothQuadraticCurveTo(pts) => {
                CommandKind::SmoothQuadraticCurveTo(pts.iter().map(|c| sim.apply(*c)).collect())
            }
            CommandKind::ArcTo(_) => {
                return Err(PathError::unsupported(cmd.letter(), Stage::Transform));
            }
            CommandKind::ClosePath => CommandKind::ClosePath,
        };
        out.push(Command::relative(kind));
    }

    let text = path_to_string(&out);
    let parsed = grammar.parse(&text)?;
    let mirrored = path_to_string(&mirror_horizontally(&parsed));
    let dims = bounding_box(&parsed)?;

    let (path, mirrored) = if params.mirror {
        (mirrored, text)
    } else {
        (text, mirrored)
    };
    Ok(TransformRecord {
        path,
        mirrored,
        width: dims.width(),
        height: dims.height(),
    })
}

fn flip(c: Coord) -> Coord {
    [-c[0], c[1]]
}

/// Mirror across the y axis.
///
/// Every x is negated; horizontal line lengths flip sign while vertical ones
/// are kept. Arcs also reverse their sweep and rotation.
#[must_use]
pub fn mirror_horizontally(commands: &[Command]) -> Vec<Command> {
    commands
        .iter()
        .map(|cmd| {
            let kind = match &cmd.kind {
                CommandKind::MoveTo(pts) => CommandKind::MoveTo(pts.iter().map(|c| flip(*c)).collect()),
                CommandKind::LineTo(pts) => CommandKind::LineTo(pts.iter().map(|c| flip(*c)).collect()),
                CommandKind::HorizontalLineTo(xs) => {
                    CommandKind::HorizontalLineTo(xs.iter().map(|x| -x).collect())
                }
                CommandKind::VerticalLineTo(ys) => CommandKind::VerticalLineTo(ys.clone()),
                CommandKind::CurveTo(segs) => CommandKind::CurveTo(
                    segs.iter()
                        .map(|s| CubicSegment {
                            ctrl1: flip(s.ctrl1),
                            ctrl2: flip(s.ctrl2),
                            to: flip(s.to),
                        })
                        .collect(),
                ),
                CommandKind::SmoothCurveTo(segs) => CommandKind::SmoothCurveTo(
                    segs.iter()
                        .map(|s| SmoothCubicSegment {
                            ctrl2: flip(s.ctrl2),
                            to: flip(s.to),
                        })
                        .collect(),
                ),
                CommandKind::QuadraticCurveTo(segs) => CommandKind::QuadraticCurveTo(
                    segs.iter()
                        .map(|s| QuadraticSegment {
                            ctrl: flip(s.ctrl),
                            to: flip(s.to),
                        })
                        .collect(),
                ),
                CommandKind::SmoothQuadraticCurveTo(pts) => {
                    CommandKind::SmoothQuadraticCurveTo(pts.iter().map(|c| flip(*c)).collect())
                }
                CommandKind::ArcTo(segs) => CommandKind::ArcTo(
                    segs.iter()
                        .map(|a| ArcSegment {
                            x_axis_rotation: -a.x_axis_rotation,
                            sweep: !a.sweep,
                            to: flip(a.to),
                            ..*a
                        })
                        .collect(),
                ),
                CommandKind::ClosePath => CommandKind::ClosePath,
            };
            Command::new(cmd.absolute, kind)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Vec<Command> {
        PathGrammar::new().parse(s).unwrap()
    }

    #[test]
    fn mirror_negates_x_only() {
        let m = mirror_horizontally(&parse("m 1,2 3,4 h 5 v 6 c 1,1 2,2 3,3 z"));
        assert_eq!(
            path_to_string(&m),
            "m -1.0,2.0 -3.0,4.0 h -5.0 v 6.0 c -1.0,1.0 -2.0,2.0 -3.0,3.0 z"
        );
    }

    #[test]
    fn mirror_flips_arc_sweep() {
        let m = mirror_horizontally(&parse("M 1 0 A 5 5 30 0 1 10 0"));
        assert_eq!(path_to_string(&m), "M -1.0,0.0 A 5.0,5.0 -30.0 0 0 -10.0,0.0");
    }

    #[test]
    fn mirror_twice_is_identity() {
        let cmds = parse("m 1,2 l 3,-4 q 1,2 3,4 t 5,6 s 1,2 3,4 h 2 v 3 z");
        assert_eq!(mirror_horizontally(&mirror_horizontally(&cmds)), cmds);
    }

    #[test]
    fn uncentred_identity_keeps_geometry() {
        let rel = parse("m 1.0,2.0 h 5.0 v 3.0 z");
        let bbox = bounding_box(&rel).unwrap();
        let params = TransformParams::default().centered(false);
        let rec = transform(&PathGrammar::new(), &rel, Point::new(1.0, 2.0), &bbox, &params).unwrap();
        assert_eq!(rec.path, "m 1.0,2.0 l 5.0,0.0 l 0.0,3.0 z");
        assert_eq!(rec.width, 5.0);
        assert_eq!(rec.height, 3.0);
    }

    #[test]
    fn quarter_turn_swaps_extent() {
        let rel = parse("m 0.0,0.0 h 4.0 v 2.0");
        let bbox = bounding_box(&rel).unwrap();
        let params = TransformParams::default().rotated(90.0, Point::ORIGIN);
        let rec = transform(&PathGrammar::new(), &rel, Point::ORIGIN, &bbox, &params).unwrap();
        assert_eq!(rec.width, 2.0);
        assert_eq!(rec.height, 4.0);
    }

    #[test]
    fn arcs_cannot_be_transformed() {
        let rel = parse("m 0,0 l 1,1 a 1,1 0 0 1 1,1");
        let bbox = BoundingBox::from_point(Point::ORIGIN);
        let err = transform(
            &PathGrammar::new(),
            &rel,
            Point::ORIGIN,
            &bbox,
            &TransformParams::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PathError::Unsupported {
                command: 'a',
                stage: Stage::Transform
            }
        ));
    }
}
