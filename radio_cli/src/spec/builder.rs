//! Builder for [`CliSpecification`].

use super::{CliSpecification, Settings};
use crate::group::RadioGroup;
use crate::option::CliOption;

/// Builder for [`CliSpecification`].
///
/// # Examples
///
/// ```rust
/// use radio_cli::{CliOption, CliSpecification, RadioGroup};
///
/// let spec = CliSpecification::builder("fetch")
///     .about("Download a resource")
///     .option(CliOption::builder("o").arg_name("file").required(true))
///     .group(RadioGroup::optional([
///         CliOption::builder("q").flag(true),
///         CliOption::builder("v").flag(true),
///     ]))
///     .build();
///
/// assert_eq!(spec.usage(), "fetch -o <file> [-q | -v]");
/// ```
#[derive(Debug, Clone)]
pub struct SpecificationBuilder {
    settings: Settings,
    options: Vec<CliOption>,
    groups: Vec<RadioGroup>,
}

impl SpecificationBuilder {
    /// Creates a builder for the program called `program`.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            settings: Settings {
                program: program.into(),
                about: None,
                version: None,
                defer_required_checks: false,
            },
            options: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Sets the summary shown at the top of `--help`.
    #[must_use]
    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.settings.about = Some(about.into());
        self
    }

    /// Sets the version reported by `--version`.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.settings.version = Some(version.into());
        self
    }

    /// Moves required-option checks from the parser to the validation pass.
    ///
    /// When enabled, every missing required option is reported together in
    /// a single `missing required options: ...` error instead of the
    /// parser's own diagnostic.
    #[must_use]
    pub const fn defer_required_checks(mut self, defer: bool) -> Self {
        self.settings.defer_required_checks = defer;
        self
    }

    /// Adds a top-level option.
    #[must_use]
    pub fn option(mut self, option: impl Into<CliOption>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Adds several top-level options.
    #[must_use]
    pub fn options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CliOption>,
    {
        self.options.extend(options.into_iter().map(Into::into));
        self
    }

    /// Adds a radio group.
    #[must_use]
    pub fn group(mut self, group: RadioGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Finalises the builder.
    #[must_use]
    pub fn build(self) -> CliSpecification {
        CliSpecification {
            settings: self.settings,
            options: self.options,
            groups: self.groups,
        }
    }
}
