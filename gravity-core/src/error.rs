use thiserror::Error;

/// Result alias used across the simulation core
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors surfaced by the simulation core
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("body mass must be positive and finite, got {0}")]
    NonPositiveMass(f32),

    #[error("cannot estimate spawn velocity from an empty gesture history")]
    EmptyGestureHistory,
}
