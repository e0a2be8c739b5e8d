use pcbpath_parser::{path_to_string, Command, CommandKind, CubicSegment};
use serde::{Deserialize, Serialize};

use crate::error::ShapeError;
use crate::{coord, num, KAPPA};

/// Per-corner radii of a rectangle. Missing corners are sharp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CornerRadii {
    #[serde(alias = "tl")]
    pub top_left: f64,
    #[serde(alias = "tr")]
    pub top_right: f64,
    #[serde(alias = "br", alias = "bot_right")]
    pub bottom_right: f64,
    #[serde(alias = "bl", alias = "bot_left")]
    pub bottom_left: f64,
}

impl CornerRadii {
    #[must_use]
    pub fn uniform(r: f64) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }

    #[must_use]
    pub fn is_sharp(&self) -> bool {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
        .iter()
        .all(|r| *r == 0.0)
    }
}

fn h(dx: f64) -> Command {
    Command::relative(CommandKind::HorizontalLineTo(vec![num(dx)]))
}

fn v(dy: f64) -> Command {
    Command::relative(CommandKind::VerticalLineTo(vec![num(dy)]))
}

fn corner(ctrl1: (f64, f64), ctrl2: (f64, f64), to: (f64, f64)) -> Command {
    Command::relative(CommandKind::CurveTo(vec![CubicSegment {
        ctrl1: coord(ctrl1.0, ctrl1.1),
        ctrl2: coord(ctrl2.0, ctrl2.1),
        to: coord(to.0, to.1),
    }]))
}

/// Rectangle centred on the origin, drawn clockwise.
///
/// Without radii (or with all radii zero) the path starts at the top-left
/// corner. Otherwise it starts at the middle of the left edge and each
/// non-zero corner is a quarter-circle cubic.
pub fn width_and_height_to_path(
    width: f64,
    height: f64,
    radii: Option<&CornerRadii>,
) -> Result<String, ShapeError> {
    ShapeError::non_negative("width", width)?;
    ShapeError::non_negative("height", height)?;

    let (w2, h2) = (width / 2.0, height / 2.0);
    let radii = match radii {
        Some(r) if !r.is_sharp() => r,
        _ => {
            let cmds = [
                Command::relative(CommandKind::MoveTo(vec![coord(-w2, -h2)])),
                h(width),
                v(height),
                h(-width),
                v(-height),
                Command::relative(CommandKind::ClosePath),
            ];
            return Ok(path_to_string(&cmds));
        }
    };

    let limit = w2.min(h2);
    for (name, r) in [
        ("top_left radius", radii.top_left),
        ("top_right radius", radii.top_right),
        ("bottom_right radius", radii.bottom_right),
        ("bottom_left radius", radii.bottom_left),
    ] {
        ShapeError::check(
            name,
            r,
            (0.0..=limit).contains(&r),
            "between zero and half the shorter side",
        )?;
    }

    let k = KAPPA;
    let mut cmds = vec![Command::relative(CommandKind::MoveTo(vec![coord(-w2, 0.0)]))];

    let r = radii.top_left;
    if r == 0.0 {
        cmds.extend([v(-h2), h(w2)]);
    } else {
        cmds.extend([
            v(-(h2 - r)),
            corner((0.0, -k * r), (r * (1.0 - k), -r), (r, -r)),
            h(w2 - r),
        ]);
    }

    let r = radii.top_right;
    if r == 0.0 {
        cmds.extend([h(w2), v(h2)]);
    } else {
        cmds.extend([
            h(w2 - r),
            corner((k * r, 0.0), (r, r * (1.0 - k)), (r, r)),
            v(h2 - r),
        ]);
    }

    let r = radii.bottom_right;
    if r == 0.0 {
        cmds.extend([v(h2), h(-w2)]);
    } else {
        cmds.extend([
            v(h2 - r),
            corner((0.0, k * r), (-r * (1.0 - k), r), (-r, r)),
            h(-(w2 - r)),
        ]);
    }

    let r = radii.bottom_left;
    if r == 0.0 {
        cmds.extend([h(-w2), v(-h2)]);
    } else {
        cmds.extend([
            h(-(w2 - r)),
            corner((-k * r, 0.0), (-r, -r * (1.0 - k)), (-r, -r)),
            v(-(h2 - r)),
        ]);
    }

    cmds.push(Command::relative(CommandKind::ClosePath));
    Ok(path_to_string(&cmds))
}
