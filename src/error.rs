//! Error types for connection resolution and session establishment.

use thiserror::Error;

/// Result type for berth operations.
pub type BerthResult<T> = Result<T, BerthError>;

/// Errors that can occur while resolving connection settings or dialing.
#[derive(Error, Debug)]
pub enum BerthError {
    /// The connection URL could not be parsed.
    #[error("malformed connection URL: {0}")]
    MalformedUrl(String),

    /// A recognized URL option carries a value that fails to parse as its
    /// expected type.
    #[error("bad value for {key}: {value}")]
    InvalidOption {
        /// The query key whose value failed to parse.
        key: String,
        /// The offending value.
        value: String,
    },

    /// A URL option outside the recognized set. Unknown options are hard
    /// failures rather than warnings: a misspelled option must not silently
    /// fall back to a default.
    #[error("unsupported connection URL option: {key}={value}")]
    UnsupportedOption {
        /// The unrecognized query key.
        key: String,
        /// The value it carried.
        value: String,
    },

    /// Configuration rejected while preparing the dial.
    #[error("configuration error: {0}")]
    Config(String),

    /// The driver failed to establish or verify a session.
    #[error("failed to establish session: {0}")]
    Dial(#[from] mongodb::error::Error),
}

impl BerthError {
    /// Create a malformed-URL error.
    pub fn malformed_url(message: impl Into<String>) -> Self {
        Self::MalformedUrl(message.into())
    }

    /// Create an invalid-option error for a recognized key.
    pub fn invalid_option(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidOption {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create an unsupported-option error for an unrecognized key.
    pub fn unsupported_option(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnsupportedOption {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a malformed-URL error.
    pub fn is_malformed_url(&self) -> bool {
        matches!(self, Self::MalformedUrl(_))
    }

    /// Check if this is an invalid-option error.
    pub fn is_invalid_option(&self) -> bool {
        matches!(self, Self::InvalidOption { .. })
    }

    /// Check if this is an unsupported-option error.
    pub fn is_unsupported_option(&self) -> bool {
        matches!(self, Self::UnsupportedOption { .. })
    }

    /// Check if this error came from the driver dial.
    pub fn is_dial(&self) -> bool {
        matches!(self, Self::Dial(_))
    }
}
