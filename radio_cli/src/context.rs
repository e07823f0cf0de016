//! Read-only view over a parsed command line.

use clap::ArgMatches;
use clap::parser::ValueSource;

/// Parsed command line as seen by option descriptors.
///
/// Only values supplied on the command line count as present; defaults
/// injected by `clap` (such as the implicit `false` of a flag) are ignored.
/// Unknown option names are reported as absent.
#[derive(Debug, Clone)]
pub struct CliContext {
    matches: ArgMatches,
}

impl CliContext {
    /// Wraps the matches produced by `clap`.
    #[must_use]
    pub const fn new(matches: ArgMatches) -> Self {
        Self { matches }
    }

    /// Returns `true` when the option called `name` was given.
    #[must_use]
    pub fn has_option(&self, name: &str) -> bool {
        matches!(self.matches.try_contains_id(name), Ok(true))
            && self.matches.value_source(name) == Some(ValueSource::CommandLine)
    }

    /// Returns the value of the option called `name`.
    ///
    /// Flags report `"true"` or `"false"`.
    #[must_use]
    pub fn option_value(&self, name: &str) -> Option<String> {
        match self.matches.try_get_one::<String>(name) {
            Ok(value) => value.cloned(),
            Err(_) => self
                .matches
                .try_get_one::<bool>(name)
                .ok()
                .flatten()
                .map(ToString::to_string),
        }
    }

    /// Returns the underlying matches.
    #[must_use]
    pub const fn matches(&self) -> &ArgMatches {
        &self.matches
    }
}

impl From<ArgMatches> for CliContext {
    fn from(matches: ArgMatches) -> Self {
        Self::new(matches)
    }
}
