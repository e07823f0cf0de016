//! Trait-based conversions between external error types and `CliError`.

use super::CliError;

impl From<clap::Error> for CliError {
    fn from(e: clap::Error) -> Self {
        Self::Parsing(Box::new(e))
    }
}
