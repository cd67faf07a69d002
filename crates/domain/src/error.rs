//! Unified error type for dputils operations
//!
//! Every fallible helper returns `Result<T, UtilsError>`. Callers that want the
//! "log and swallow" behaviour route the error through the logger explicitly.

use thiserror::Error;

/// Message used on every validation failure line.
pub const INVALID_INPUT: &str = "Invalid input";

/// Error type for dputils operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UtilsError {
    /// An argument did not match the operation's contract
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl UtilsError {
    /// Creates an invalid input error.
    ///
    /// Use this whenever an argument has the wrong shape for the operation:
    /// - A cookie name containing separators
    /// - A list argument that is not an array
    /// - Malformed JSON text
    ///
    /// # Example
    /// ```
    /// use dputils_domain::UtilsError;
    ///
    /// let err = UtilsError::invalid_input("cookie name cannot be empty");
    /// assert_eq!(err.to_string(), "Invalid input: cookie name cannot be empty");
    /// ```
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for UtilsError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
