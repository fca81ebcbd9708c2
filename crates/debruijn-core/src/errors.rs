//! Error types for the multigrid generator.

use thiserror::Error;

/// Result type for multigrid operations.
pub type Result<T> = std::result::Result<T, MultigridError>;

/// Top-level error type for the multigrid generator.
#[derive(Debug, Error)]
pub enum MultigridError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    DualMap(#[from] DualMapError),

    #[error("Work budget exceeded: {requested} candidate line pairs requested, limit is {limit}")]
    BudgetExceeded { requested: u64, limit: u64 },

    #[error("Build cancelled")]
    Cancelled,
}

/// Errors in the generator configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Parameter '{field}' must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Distance bounds must be non-negative, got min {min}, max {max}")]
    NegativeDistance { min: f64, max: f64 },

    #[error("Minimum distance {min} exceeds maximum distance {max}")]
    InvertedDistance { min: f64, max: f64 },

    #[error("Scale must be positive, got {0}")]
    InvalidScale(f64),

    #[error("Divisions {divisions} exceeds the maximum of {max}")]
    TooManyDivisions { divisions: u32, max: u32 },
}

/// Contract violations of the index-vector to point (dual) map.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DualMapError {
    #[error("Dual map called with an empty index vector")]
    EmptyIndices,

    #[error("Dual map called with an empty angle set")]
    EmptyAngles,

    #[error("Index vector has {indices} components but there are {angles} angles")]
    LengthMismatch { indices: usize, angles: usize },
}
