//! Extensions for mapping errors into [`ValidationError`] concisely.
//!
//! Setter callbacks and converters may fail with any error type. These
//! helpers reduce repetitive `.map_err(ValidationError::wrap)` calls when
//! the failure should surface unchanged as the validation cause.
//!
//! # Examples
//!
//! ```
//! use radio_cli::{ValidationError, ValidationResultExt};
//!
//! fn port(raw: &str) -> Result<u16, ValidationError> {
//!     raw.parse::<u16>().into_validation()
//! }
//!
//! assert!(port("80").is_ok());
//! assert!(port("eighty").is_err());
//! ```

use crate::error::{BoxError, ValidationError};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<BoxError>`
/// into a `Result<T, ValidationError>`.
pub trait ValidationResultExt<T> {
    /// Convert the error into a [`ValidationError`] that keeps it as the
    /// source.
    ///
    /// # Errors
    ///
    /// Propagates the original error after wrapping.
    fn into_validation(self) -> Result<T, ValidationError>;
}

impl<T, E> ValidationResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn into_validation(self) -> Result<T, ValidationError> {
        self.map_err(ValidationError::wrap)
    }
}
