//! Process-wide coordinate precision.
//!
//! Every [`crate::Point`] rounds its coordinates to this many digits after the
//! decimal point when it is built or reassigned, so two points that describe
//! the same board location compare equal without a tolerance.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::ConfigError;

pub const DEFAULT_SIGNIFICANT_DIGITS: u32 = 8;

/// Beyond this an `f64` cannot carry the requested digits for board-sized
/// coordinates and rounding turns into noise.
pub const MAX_SIGNIFICANT_DIGITS: u32 = 15;

static SIGNIFICANT_DIGITS: AtomicU32 = AtomicU32::new(DEFAULT_SIGNIFICANT_DIGITS);

#[must_use]
pub fn significant_digits() -> u32 {
    SIGNIFICANT_DIGITS.load(Ordering::Relaxed)
}

/// Strictly set the process-wide precision.
pub fn set_significant_digits(digits: u32) -> Result<(), ConfigError> {
    if digits > MAX_SIGNIFICANT_DIGITS {
        return Err(ConfigError::PrecisionOutOfRange {
            requested: digits,
            max: MAX_SIGNIFICANT_DIGITS,
        });
    }
    let previous = SIGNIFICANT_DIGITS.swap(digits, Ordering::Relaxed);
    if previous != digits {
        tracing::debug!(previous, digits, "coordinate precision changed");
    }
    Ok(())
}

/// Like [`set_significant_digits`] but falls back to the default instead of
/// failing. Returns the precision actually applied.
pub fn set_significant_digits_or_default(digits: Option<u32>) -> u32 {
    let digits = match digits {
        Some(d) if d <= MAX_SIGNIFICANT_DIGITS => d,
        Some(d) => {
            tracing::warn!(
                requested = d,
                default = DEFAULT_SIGNIFICANT_DIGITS,
                "precision out of range, using default"
            );
            DEFAULT_SIGNIFICANT_DIGITS
        }
        None => DEFAULT_SIGNIFICANT_DIGITS,
    };
    SIGNIFICANT_DIGITS.store(digits, Ordering::Relaxed);
    digits
}

/// Round `value` to `digits` places after the decimal point.
#[must_use]
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    // Already finer than an f64 can resolve at this magnitude.
    if scaled.abs() >= 1e17 {
        return value;
    }
    scaled.round() / factor
}

/// Round `value` with the process-wide precision.
#[must_use]
pub fn round(value: f64) -> f64 {
    round_to(value, significant_digits())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_keeps_requested_places() {
        assert_eq!(round_to(1.234_567_891_23, 8), 1.234_567_89);
        assert_eq!(round_to(-2.005, 1), -2.0);
        assert_eq!(round_to(3.0, 0), 3.0);
    }

    #[test]
    fn round_to_passes_non_finite_through() {
        assert!(round_to(f64::NAN, 4).is_nan());
        assert_eq!(round_to(f64::INFINITY, 4), f64::INFINITY);
    }

    #[test]
    fn round_to_leaves_huge_values_alone() {
        assert_eq!(round_to(1e300, 8), 1e300);
    }

    #[test]
    fn strict_setter_rejects_out_of_range() {
        let err = set_significant_digits(MAX_SIGNIFICANT_DIGITS + 1).unwrap_err();
        assert!(matches!(err, ConfigError::PrecisionOutOfRange { .. }));
        assert_eq!(significant_digits(), DEFAULT_SIGNIFICANT_DIGITS);
    }

    #[test]
    fn lenient_setter_falls_back_to_default() {
        assert_eq!(
            set_significant_digits_or_default(Some(99)),
            DEFAULT_SIGNIFICANT_DIGITS
        );
        assert_eq!(set_significant_digits_or_default(None), DEFAULT_SIGNIFICANT_DIGITS);
        assert_eq!(significant_digits(), DEFAULT_SIGNIFICANT_DIGITS);
    }
}
