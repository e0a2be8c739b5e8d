pub mod config;
pub mod error;
pub mod format;
pub mod point;
pub mod precision;

pub use config::Settings;
pub use error::ConfigError;
pub use format::fmt_coord;
pub use point::{rotate_point, rotate_vec, Point};
