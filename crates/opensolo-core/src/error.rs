//! Error types for the OpenSolo landing page

use thiserror::Error;

/// Main error type for landing page operations
#[derive(Error, Debug)]
pub enum LandingError {
    /// Countdown target could not be parsed
    #[error("Invalid countdown target: {0}")]
    InvalidTarget(String),

    /// FAQ index outside the entry list
    #[error("FAQ index {index} out of range (have {len} entries)")]
    FaqIndexOutOfRange { index: usize, len: usize },

    /// Analytics record could not be encoded
    #[error("Analytics error: {0}")]
    Analytics(String),

    /// External URL could not be opened
    #[error("Failed to open {url}: {reason}")]
    LinkOpen { url: String, reason: String },

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using LandingError
pub type LandingResult<T> = Result<T, LandingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LandingError::FaqIndexOutOfRange { index: 9, len: 7 };
        assert_eq!(format!("{}", err), "FAQ index 9 out of range (have 7 entries)");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: LandingError = io_err.into();
        assert!(matches!(err, LandingError::Io(_)));
    }
}
