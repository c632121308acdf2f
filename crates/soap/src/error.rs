//! Error types for building and serializing SOAP elements.
//!
//! Construction is the only point where a request can be rejected: a required
//! argument is missing or a token falls outside its closed set. Serialization
//! itself has no domain failure modes, only I/O errors from the output sink.

use thiserror::Error;

/// Errors raised while constructing or serializing SOAP elements.
#[derive(Error, Debug)]
pub enum SoapError {
    /// A constructor argument was missing, blank, or outside its declared token set.
    #[error("invalid argument `{field}`: {message}")]
    InvalidArgument {
        /// The field the argument was meant for.
        field: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while writing serialized output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error message
    #[error("{0}")]
    Custom(String),
}

impl SoapError {
    /// Builds an [`SoapError::InvalidArgument`] for `field`.
    pub fn invalid_argument(field: &'static str, message: impl Into<String>) -> Self {
        SoapError::InvalidArgument {
            field,
            message: message.into(),
        }
    }

    /// Returns `true` for errors raised by argument validation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SoapError::InvalidArgument { .. })
    }
}

impl From<String> for SoapError {
    fn from(msg: String) -> Self {
        SoapError::Custom(msg)
    }
}

impl From<&str> for SoapError {
    fn from(msg: &str) -> Self {
        SoapError::Custom(msg.to_string())
    }
}

/// Result type alias for SOAP element operations
pub type Result<T> = std::result::Result<T, SoapError>;

/// Trims `value` and rejects it when nothing is left.
///
/// Required string arguments go through this so that a blank value is
/// treated the same as a missing one.
pub fn required(field: &'static str, value: impl AsRef<str>) -> Result<String> {
    let trimmed = value.as_ref().trim();
    if trimmed.is_empty() {
        return Err(SoapError::invalid_argument(field, "value is required"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        assert_eq!(required("dn", "  uid=foo ").unwrap(), "uid=foo");
    }

    #[test]
    fn test_required_rejects_blank() {
        let err = required("dn", "   ").unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "invalid argument `dn`: value is required");
    }
}
