//! Primary error types for option processing.

use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Boxed error accepted from user-supplied converters and callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure raised while validating a single option.
///
/// Every failure on the setter path (a missing required option, a failed
/// type conversion, a rejected predicate, or an erroring callback) is
/// normalised into this type. When the failure originated elsewhere the
/// original error is kept as the [`source`](std::error::Error::source).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl ValidationError {
    /// Creates an error carrying only a message.
    ///
    /// # Examples
    ///
    /// ```
    /// use radio_cli::ValidationError;
    /// let err = ValidationError::new("p is required");
    /// assert_eq!(err.to_string(), "p is required");
    /// ```
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error with an explicit message and an underlying cause.
    #[must_use]
    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Wraps `source`, reusing its display text as the message.
    ///
    /// # Examples
    ///
    /// ```
    /// use radio_cli::ValidationError;
    /// let cause = "x".parse::<i32>().unwrap_err();
    /// let err = ValidationError::wrap(cause);
    /// assert_eq!(err.to_string(), "invalid digit found in string");
    /// assert!(std::error::Error::source(&err).is_some());
    /// ```
    #[must_use]
    pub fn wrap(source: impl Into<BoxError>) -> Self {
        let boxed = source.into();
        Self {
            message: boxed.to_string(),
            source: Some(boxed),
        }
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors that can occur while processing a command line.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    /// The backing parser rejected the command line.
    #[error("Failed to parse command-line arguments: {0}")]
    Parsing(#[from] Box<clap::Error>),

    /// A single option failed validation or its setter failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Several validation failures collected during one pass.
    #[error("{} command-line problems:\n{}", .0.len(), .0)]
    Aggregate(Box<AggregatedErrors>),
}
