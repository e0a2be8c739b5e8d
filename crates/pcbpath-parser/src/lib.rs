//! SVG path data: grammar and typed command model.

pub mod command;
pub mod error;
pub mod grammar;

pub use command::{
    path_to_string, ArcSegment, Command, CommandKind, Coord, CubicSegment, QuadraticSegment,
    SmoothCubicSegment,
};
pub use error::{ParseError, ParseErrorKind};
pub use grammar::PathGrammar;
