//! Error types for remapping and point operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Control curve is unusable: fewer than two points, mismatched
    /// `r_vals`/`s_vals` lengths, decreasing input levels, or a level
    /// outside `[0, 255]`.
    #[error("invalid curve: {0}")]
    InvalidCurve(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Mapping configuration could not be parsed.
    #[error("config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Image buffer error (shape, channel layout, bit depth).
    #[error(transparent)]
    Core(#[from] lumen_core::Error),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
