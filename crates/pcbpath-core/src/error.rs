use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("precision of {requested} digits exceeds the supported maximum of {max}")]
    PrecisionOutOfRange { requested: u32, max: u32 },

    #[error("failed to parse YAML settings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("setting \"{key}\" is invalid: {message}")]
    InvalidSetting { key: &'static str, message: String },
}
