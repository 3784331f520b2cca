//! Error handling for the harness

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by fixtures and the harness itself
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A fixture could not be created or removed
    #[error("Failed to {action} '{}': {source}", path.display())]
    Fixture {
        /// What the fixture was doing, e.g. "create file"
        action: &'static str,
        /// Path of the fixture
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// An I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl HarnessError {
    pub(crate) fn fixture(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Fixture {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Type alias for Results from harness operations
pub type Result<T> = std::result::Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = HarnessError::fixture(
            "remove dir",
            "/tmp/missing",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(
            error.to_string(),
            "Failed to remove dir '/tmp/missing': not found"
        );
    }
}
