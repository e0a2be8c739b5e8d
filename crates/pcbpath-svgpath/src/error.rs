use std::fmt;

use pcbpath_parser::ParseError;
use thiserror::Error;

/// Engine pass that met a command it has no handler for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Dimensions,
    Transform,
    Flatten,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Dimensions => "dimension",
            Stage::Transform => "transform",
            Stage::Flatten => "flattening",
        })
    }
}

#[derive(Debug, Error)]
pub enum PathError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("path has no commands")]
    Empty,

    /// The grammar accepted a command the engine cannot process. This is a
    /// defect in the engine, not bad input.
    #[error("no {stage} handler for path command '{command}'")]
    Unsupported { command: char, stage: Stage },

    #[error("cannot flatten with {steps} steps at segment length {length}")]
    InvalidSampling { steps: usize, length: f64 },
}

impl PathError {
    pub(crate) fn unsupported(command: char, stage: Stage) -> Self {
        tracing::warn!(%command, %stage, "path command has no engine handler");
        PathError::Unsupported { command, stage }
    }
}
