//! Failures gathered during a single validation pass.

use std::{error::Error, fmt};

use super::CliError;

/// Every failure found while checking one command line.
///
/// Requiredness and radio-group checks keep going after the first failure
/// so that a user sees all problems at once. When more than one is found
/// they travel together as [`CliError::Aggregate`].
///
/// Displayed as one `- <message>` line per failure.
///
/// ```
/// use radio_cli::{CliError, ValidationError};
///
/// let err = CliError::aggregate([
///     ValidationError::new("a is required"),
///     ValidationError::new("b is required"),
/// ]);
/// let CliError::Aggregate(failures) = err else {
///     panic!("two failures aggregate");
/// };
/// assert_eq!(failures.to_string(), "- a is required\n- b is required");
/// ```
#[derive(Debug, Default)]
pub struct AggregatedErrors(Vec<CliError>);

impl AggregatedErrors {
    /// Wraps `errors` in detection order.
    #[must_use]
    pub const fn new(errors: Vec<CliError>) -> Self {
        Self(errors)
    }

    /// Iterates over the failures in detection order.
    #[must_use = "iterators are lazy"]
    pub fn iter(&self) -> std::slice::Iter<'_, CliError> {
        self.0.iter()
    }

    /// Number of failures.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when nothing failed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.0.iter();
        if let Some(first) = lines.next() {
            write!(f, "- {first}")?;
        }
        lines.try_for_each(|err| write!(f, "\n- {err}"))
    }
}

impl Error for AggregatedErrors {}

impl FromIterator<CliError> for AggregatedErrors {
    fn from_iter<I: IntoIterator<Item = CliError>>(errors: I) -> Self {
        Self(errors.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AggregatedErrors {
    type Item = &'a CliError;
    type IntoIter = std::slice::Iter<'a, CliError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for AggregatedErrors {
    type Item = CliError;
    type IntoIter = std::vec::IntoIter<CliError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
