use pcbpath_core::Point;
use pcbpath_parser::{path_to_string, Command, CommandKind, Coord};
use serde::{Deserialize, Serialize};

use crate::coord;

/// One step of a plotter-style drawing, in board coordinates (y up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coord", rename_all = "lowercase")]
pub enum PenAction {
    Move(Point),
    Draw(Point),
}

/// Absolute `M`/`L` path for a sequence of pen actions.
///
/// The y axis is flipped into SVG orientation. Consecutive draws share one
/// `L`; every move starts its own `M` so it never turns into a line.
#[must_use]
pub fn pen_actions_to_path(actions: &[PenAction]) -> String {
    let flip = |p: &Point| -> Coord { coord(p.x(), -p.y()) };

    let mut cmds: Vec<Command> = Vec::new();
    for action in actions {
        match action {
            PenAction::Move(p) => {
                cmds.push(Command::new(true, CommandKind::MoveTo(vec![flip(p)])));
            }
            PenAction::Draw(p) => match cmds.last_mut().map(|c| &mut c.kind) {
                Some(CommandKind::LineTo(pts)) => pts.push(flip(p)),
                _ => cmds.push(Command::new(true, CommandKind::LineTo(vec![flip(p)]))),
            },
        }
    }
    path_to_string(&cmds)
}
