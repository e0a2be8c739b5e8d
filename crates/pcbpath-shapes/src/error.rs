use pcbpath_svgpath::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("{name} must be {requirement}, got {value}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },

    /// The generated path could not be measured.
    #[error(transparent)]
    Path(#[from] PathError),
}

impl ShapeError {
    pub(crate) fn check(
        name: &'static str,
        value: f64,
        ok: bool,
        requirement: &'static str,
    ) -> Result<(), ShapeError> {
        if ok && value.is_finite() {
            Ok(())
        } else {
            Err(ShapeError::InvalidParameter {
                name,
                value,
                requirement,
            })
        }
    }

    pub(crate) fn positive(name: &'static str, value: f64) -> Result<(), ShapeError> {
        Self::check(name, value, value > 0.0, "a positive number")
    }

    pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<(), ShapeError> {
        Self::check(name, value, value >= 0.0, "zero or more")
    }
}
