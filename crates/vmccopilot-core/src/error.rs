//! Error handling for VMC Copilot core types
//!
//! Covers failures raised while building and validating a machining request:
//! - Invalid numeric arguments (non-positive or non-finite values, form minimums)
//! - Unknown enum labels for kinds without a fallback (shape, tool, finish, ...)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for the core crate
#[derive(Error, Debug)]
pub enum Error {
    /// A request field holds a value the request cannot accept
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument {
        /// The offending field name.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A label did not match any variant of an enum that has no fallback
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant {
        /// The enum being parsed (e.g. "part shape").
        kind: &'static str,
        /// The label that failed to parse.
        value: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create an invalid-argument error for `field`
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument { .. } | Error::UnknownVariant { .. }
        )
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("diameter_mm", "must be > 0");
        assert_eq!(err.to_string(), "Invalid argument 'diameter_mm': must be > 0");

        let err = Error::UnknownVariant {
            kind: "part shape",
            value: "Torus".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown part shape: 'Torus'");
    }

    #[test]
    fn test_invalid_argument_classification() {
        assert!(Error::invalid_argument("x", "y").is_invalid_argument());
        assert!(Error::UnknownVariant {
            kind: "finish type",
            value: "Mirror".to_string()
        }
        .is_invalid_argument());
        assert!(!Error::other("boom").is_invalid_argument());
    }
}
