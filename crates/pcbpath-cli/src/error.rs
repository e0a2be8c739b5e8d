use pcbpath_core::ConfigError;
use pcbpath_parser::ParseError;
use pcbpath_shapes::ShapeError;
use pcbpath_svgpath::PathError;
use thiserror::Error;

/// Process exit statuses.
pub mod exit {
    /// Bad or conflicting command-line arguments.
    pub const USAGE: i32 = 1;
    /// Settings, path text or shape parameters were rejected.
    pub const INPUT: i32 = 2;
    /// The engine met a path it accepted but cannot process.
    pub const ENGINE: i32 = 3;
}

#[derive(Debug, Error)]
pub enum CliError {
    /// Options that parse on their own but cannot be used together.
    #[error("{0}")]
    Conflict(&'static str),

    #[error("{0:#}")]
    SettingsFile(anyhow::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("Invalid radii: {0}")]
    Radii(#[source] serde_yaml::Error),

    #[error("Could not encode output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Conflict(_) => exit::USAGE,
            CliError::Path(e) | CliError::Shape(ShapeError::Path(e)) => match e {
                PathError::Unsupported { .. } => exit::ENGINE,
                _ => exit::INPUT,
            },
            CliError::SettingsFile(_)
            | CliError::Config(_)
            | CliError::Parse(_)
            | CliError::Shape(_)
            | CliError::Radii(_) => exit::INPUT,
            CliError::Output(_) => exit::ENGINE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcbpath_svgpath::{PathCache, Stage};

    #[test]
    fn unsupported_commands_are_engine_failures() {
        let err = CliError::from(PathError::Unsupported {
            command: 'A',
            stage: Stage::Dimensions,
        });
        assert_eq!(err.exit_code(), exit::ENGINE);

        let err = CliError::from(ShapeError::Path(PathError::Unsupported {
            command: 'a',
            stage: Stage::Flatten,
        }));
        assert_eq!(err.exit_code(), exit::ENGINE);
    }

    #[test]
    fn bad_input_is_an_input_failure() {
        let err = CliError::from(PathCache::new().path("M 0 0 F").unwrap_err());
        assert_eq!(err.exit_code(), exit::INPUT);
        assert_eq!(CliError::from(PathError::Empty).exit_code(), exit::INPUT);
        assert_eq!(CliError::Conflict("nope").exit_code(), exit::USAGE);
    }
}
