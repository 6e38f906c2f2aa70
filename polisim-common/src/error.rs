//! Error types for the PoliSim ecosystem.

use thiserror::Error;

/// Result type alias using the PoliSim error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for PoliSim crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input or request
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A required prediction or scoring capability cannot be invoked
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Baseline or interdependency data cannot be provided
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// A numeric computation escaped its expected bounds
    #[error("Numeric instability: {0}")]
    NumericInstability(String),

    /// Operation exceeded its wall-clock budget
    #[error("Operation timed out")]
    Timeout,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create an error with additional context.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Check if this error indicates bad caller input.
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this error came from an unavailable collaborator.
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::ModelUnavailable(_) | Self::DataUnavailable(_))
    }

    /// Get HTTP status code for this error.
    ///
    /// The transport layer sits outside this workspace; it maps errors
    /// through this single point.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::Timeout => 408,
            Self::ModelUnavailable(_) | Self::DataUnavailable(_) => 503,
            Self::WithContext { source, .. } => source.status_code(),
            _ => 500,
        }
    }
}

/// Extension trait for adding context to any error type.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(Error::InvalidInput("test".into()).status_code(), 400);
        assert_eq!(Error::Timeout.status_code(), 408);
        assert_eq!(Error::ModelUnavailable("test".into()).status_code(), 503);
        assert_eq!(Error::DataUnavailable("test".into()).status_code(), 503);
        assert_eq!(Error::NumericInstability("test".into()).status_code(), 500);
        assert_eq!(Error::Config("test".into()).status_code(), 500);
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::DataUnavailable("baseline missing".into());
        let with_ctx = err.with_context("loading snapshot");
        assert!(matches!(with_ctx, Error::WithContext { .. }));
        assert_eq!(with_ctx.status_code(), 503);
    }

    #[test]
    fn test_classification_helpers() {
        assert!(Error::InvalidInput("x".into()).is_invalid_input());
        assert!(!Error::Timeout.is_invalid_input());
        assert!(Error::ModelUnavailable("x".into()).is_unavailable());
        assert!(!Error::NumericInstability("x".into()).is_unavailable());
    }
}
