//! Error types produced while defining, parsing, and validating options.

mod aggregate;
mod constructors;
mod conversions;
mod helpers;
mod types;

pub use aggregate::AggregatedErrors;
pub use helpers::is_display_request;
pub use types::{BoxError, CliError, ValidationError};
