//! Error types for folio_app

use folio_dock::DockError;
use folio_page::PageError;
use thiserror::Error;

/// Errors that can occur while setting up the application
#[derive(Error, Debug)]
pub enum FolioError {
    /// Configuration file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Dock settings are unusable
    #[error(transparent)]
    Dock(#[from] DockError),

    /// Page settings are unusable
    #[error(transparent)]
    Page(#[from] PageError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for FolioError {
    fn from(err: anyhow::Error) -> Self {
        FolioError::Other(err.to_string())
    }
}

/// Result type for folio_app operations
pub type Result<T> = std::result::Result<T, FolioError>;
