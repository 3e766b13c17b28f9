// File: crates/live-widgets/src/error.rs
// Summary: Boundary errors (configuration, surfaces, encoding). The data path never fails.

use thiserror::Error;

use crate::types::MAX_CAPACITY;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("sampling time must be at least 1 ms")]
    InvalidSamplingTime,

    #[error("period must be positive, finite and cover at most {max} samples (got {0} s)", max = MAX_CAPACITY)]
    InvalidPeriod(f64),

    #[error("invalid color `{0}`; expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("surface error: {0}")]
    Surface(&'static str),

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, WidgetError>;
