//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Failed to initialize platform
    #[error("Platform initialization failed: {0}")]
    InitFailed(String),

    /// A required page element could not be found
    #[error("Element not found: {0}")]
    ElementMissing(String),

    /// Failed to subscribe to a platform event source
    #[error("Failed to subscribe to {0}")]
    Subscription(String),

    /// Platform not supported on this target
    #[error("Platform not supported: {0}")]
    Unsupported(String),

    /// Generic platform error
    #[error("Platform error: {0}")]
    Other(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
