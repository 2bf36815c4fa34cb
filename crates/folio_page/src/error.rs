//! Page error types

use thiserror::Error;

/// Errors from page settings
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Failed to parse page settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize page settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Invalid page settings: {0}")]
    InvalidSettings(String),
}

/// Result type for page operations
pub type Result<T> = std::result::Result<T, PageError>;
