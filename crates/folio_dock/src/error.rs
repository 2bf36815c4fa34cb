//! Dock error types
//!
//! Runtime failures (missing container, items or tooltip) are not errors:
//! the engine degrades to a no-op. Only configuration can fail.

use thiserror::Error;

/// Dock configuration errors
#[derive(Error, Debug)]
pub enum DockError {
    /// Configuration could not be parsed
    #[error("Failed to parse dock config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Failed to serialize dock config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Configuration parsed but holds unusable values
    #[error("Invalid dock config: {0}")]
    InvalidConfig(String),
}

/// Result type for dock operations
pub type Result<T> = std::result::Result<T, DockError>;
