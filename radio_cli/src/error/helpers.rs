//! Helpers for classifying parser errors.

use clap::{Error as ClapError, error::ErrorKind};

use super::CliError;

/// Returns `true` when a [`clap::Error`] corresponds to `--help` or
/// `--version`.
///
/// Clap surfaces these requests as errors, so entry points that call
/// [`CliSpecification::parse_from`](crate::CliSpecification::parse_from)
/// should delegate to [`clap::Error::exit`] for them to keep the zero exit
/// status.
#[must_use]
pub fn is_display_request(err: &ClapError) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

impl CliError {
    /// Returns `true` when this error wraps a `--help` or `--version`
    /// request from the parser.
    #[must_use]
    pub fn is_display_request(&self) -> bool {
        matches!(self, Self::Parsing(err) if is_display_request(err))
    }
}
