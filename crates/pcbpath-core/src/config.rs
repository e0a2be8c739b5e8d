use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::precision::{self, DEFAULT_SIGNIFICANT_DIGITS, MAX_SIGNIFICANT_DIGITS};

pub const DEFAULT_BEZIER_STEPS: usize = 100;
/// Upper bound on curve samples; past this flattening only burns memory.
pub const MAX_BEZIER_STEPS: usize = 1_000_000;
pub const DEFAULT_SEGMENT_LENGTH: f64 = 0.1;

/// Tunables for a board-build session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Digits kept after the decimal point for every coordinate.
    pub significant_digits: u32,
    /// Fixed resolution used when sampling a curve before thinning.
    pub bezier_steps: usize,
    /// Target spacing between retained points on flattened curves.
    pub segment_length: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
            bezier_steps: DEFAULT_BEZIER_STEPS,
            segment_length: DEFAULT_SEGMENT_LENGTH,
        }
    }
}

impl Settings {
    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_yaml::from_str(input)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(input)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.significant_digits > MAX_SIGNIFICANT_DIGITS {
            return Err(ConfigError::PrecisionOutOfRange {
                requested: self.significant_digits,
                max: MAX_SIGNIFICANT_DIGITS,
            });
        }
        if !(1..=MAX_BEZIER_STEPS).contains(&self.bezier_steps) {
            return Err(ConfigError::InvalidSetting {
                key: "bezier_steps",
                message: format!(
                    "must be between 1 and {MAX_BEZIER_STEPS}, got {}",
                    self.bezier_steps
                ),
            });
        }
        if !(self.segment_length.is_finite() && self.segment_length > 0.0) {
            return Err(ConfigError::InvalidSetting {
                key: "segment_length",
                message: format!("must be a positive number, got {}", self.segment_length),
            });
        }
        Ok(())
    }

    /// Install the process-wide parts of these settings.
    pub fn apply(&self) -> Result<(), ConfigError> {
        self.validate()?;
        precision::set_significant_digits(self.significant_digits)
    }

    /// Like [`Settings::apply`], but an out-of-range precision falls back to
    /// the default (with a warning) instead of failing. The other fields are
    /// still validated.
    pub fn apply_lenient(&mut self) -> Result<(), ConfigError> {
        self.significant_digits =
            precision::set_significant_digits_or_default(Some(self.significant_digits));
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_uses_defaults() {
        let settings = Settings::from_yaml_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn yaml_overrides_fields() {
        let settings = Settings::from_yaml_str("bezier_steps: 40\nsegment_length: 0.5\n").unwrap();
        assert_eq!(settings.bezier_steps, 40);
        assert_eq!(settings.segment_length, 0.5);
        assert_eq!(settings.significant_digits, DEFAULT_SIGNIFICANT_DIGITS);
    }

    #[test]
    fn json_is_accepted() {
        let settings = Settings::from_json_str(r#"{"significant_digits": 6}"#).unwrap();
        assert_eq!(settings.significant_digits, 6);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Settings::from_yaml_str("precision: 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn lenient_apply_falls_back_to_default_precision() {
        let mut settings = Settings {
            significant_digits: MAX_SIGNIFICANT_DIGITS + 5,
            ..Settings::default()
        };
        assert!(settings.apply().is_err());
        settings.apply_lenient().unwrap();
        assert_eq!(settings.significant_digits, DEFAULT_SIGNIFICANT_DIGITS);
        assert_eq!(precision::significant_digits(), DEFAULT_SIGNIFICANT_DIGITS);

        let mut settings = Settings {
            segment_length: -1.0,
            ..Settings::default()
        };
        assert!(settings.apply_lenient().is_err());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = Settings::from_yaml_str("significant_digits: 40\n").unwrap_err();
        assert!(matches!(err, ConfigError::PrecisionOutOfRange { requested: 40, .. }));

        let err = Settings::from_json_str(r#"{"segment_length": 0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSetting { key: "segment_length", .. }
        ));

        let err = Settings::from_json_str(r#"{"bezier_steps": 0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSetting { key: "bezier_steps", .. }
        ));

        let huge = format!(r#"{{"bezier_steps": {}}}"#, usize::MAX);
        let err = Settings::from_json_str(&huge).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSetting { key: "bezier_steps", .. }
        ));
    }
}
