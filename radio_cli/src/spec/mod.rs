//! Command-line specifications: options and groups bound to a program.
//!
//! A [`CliSpecification`] drives one full pass over a command line. It
//! registers every option with a `clap` [`Command`], parses the arguments,
//! validates requiredness and radio-group exclusivity, and finally fires the
//! setters of the options that were supplied.

mod builder;
mod registry;

pub use builder::SpecificationBuilder;

use std::ffi::OsString;

use clap::Command;

use crate::context::CliContext;
use crate::CliResult;
use crate::error::{CliError, ValidationError};
use crate::group::RadioGroup;
use crate::option::CliOption;
use registry::{GroupConstraint, RegistrationVisitor};

#[derive(Debug, Clone)]
struct Settings {
    program: String,
    about: Option<String>,
    version: Option<String>,
    defer_required_checks: bool,
}

/// Everything needed for one parse/validate/fire pass.
struct Registration {
    command: Command,
    options: Vec<CliOption>,
    constraints: Vec<GroupConstraint>,
}

/// Options and radio groups bound to a program name.
///
/// # Examples
///
/// ```rust
/// use std::{cell::RefCell, rc::Rc};
/// use radio_cli::{CliOption, CliSpecification, RadioGroup};
///
/// let format = Rc::new(RefCell::new(String::new()));
/// let json = Rc::clone(&format);
/// let yaml = Rc::clone(&format);
/// let spec = CliSpecification::builder("report")
///     .group(RadioGroup::required([
///         CliOption::builder("json").flag(true).setter(move |_| {
///             *json.borrow_mut() = "json".into();
///             Ok::<(), std::convert::Infallible>(())
///         }),
///         CliOption::builder("yaml").flag(true).setter(move |_| {
///             *yaml.borrow_mut() = "yaml".into();
///             Ok::<(), std::convert::Infallible>(())
///         }),
///     ]))
///     .build();
///
/// spec.parse_from(["report", "--yaml"]).unwrap();
/// assert_eq!(format.borrow().as_str(), "yaml");
///
/// let err = spec.parse_from(["report", "--json", "--yaml"]).unwrap_err();
/// assert_eq!(err.to_string(), "only one of -json, -yaml may be specified");
/// ```
#[derive(Debug, Clone)]
pub struct CliSpecification {
    settings: Settings,
    options: Vec<CliOption>,
    groups: Vec<RadioGroup>,
}

impl CliSpecification {
    /// Starts building a specification for `program`.
    #[must_use]
    pub fn builder(program: impl Into<String>) -> SpecificationBuilder {
        SpecificationBuilder::new(program)
    }

    /// Returns the program name.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.settings.program
    }

    /// Returns the top-level options.
    #[must_use]
    pub fn options(&self) -> &[CliOption] {
        &self.options
    }

    /// Returns the radio groups.
    #[must_use]
    pub fn groups(&self) -> &[RadioGroup] {
        &self.groups
    }

    /// Builds the `clap` command describing every option.
    ///
    /// The built-in `-h`/`--help` flag is dropped when an option claims
    /// either form, and `-V`/`--version` likewise.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when two options share a name or a
    /// flag, or when a radio group has no members.
    pub fn command(&self) -> Result<Command, ValidationError> {
        Ok(self.register()?.command)
    }

    fn register(&self) -> Result<Registration, ValidationError> {
        self.groups.iter().try_for_each(registry::check_members)?;
        let mut command = Command::new(self.settings.program.clone());
        if let Some(about) = &self.settings.about {
            command = command.about(about.clone());
        }
        if let Some(version) = &self.settings.version {
            command = command.version(version.clone());
        }
        let force_required = self.settings.defer_required_checks.then_some(false);
        for option in &self.options {
            command = option.add_to(command, force_required);
        }

        let mut visitor = RegistrationVisitor::default();
        for group in &self.groups {
            group.visit(&mut visitor, None);
        }
        tracing::debug!(
            program = %self.settings.program,
            options = self.options.len(),
            groups = self.groups.len(),
            grouped_options = visitor.options.len(),
            "registered command-line specification"
        );

        command = command.args(visitor.args);
        registry::check_unique(command.get_arguments())?;
        if registry::claims(command.get_arguments(), 'h', "help") {
            tracing::debug!("an option claims -h or --help; dropping the built-in help flag");
            command = command.disable_help_flag(true);
        }
        if registry::claims(command.get_arguments(), 'V', "version") {
            tracing::debug!("an option claims -V or --version; dropping the built-in version flag");
            command = command.disable_version_flag(true);
        }

        let mut options = self.options.clone();
        options.append(&mut visitor.options);
        Ok(Registration {
            command,
            options,
            constraints: visitor.constraints,
        })
    }

    /// Parses `args`, validates the result, and fires the setters.
    ///
    /// The first element of `args` is the program name, as with
    /// [`std::env::args_os`].
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Validation`] when the options cannot be
    /// registered (see [`CliSpecification::command`]),
    /// [`CliError::Parsing`] when `clap` rejects the arguments
    /// (including `--help` and `--version` requests), a validation error
    /// (or an aggregate of them) when required options or radio-group rules
    /// are violated, and [`CliError::Validation`] for the first setter that
    /// fails. Setters only run once validation has passed.
    pub fn parse_from<I, T>(&self, args: I) -> CliResult<CliContext>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let registration = self.register()?;
        let matches = registration
            .command
            .try_get_matches_from(args)
            .inspect_err(|err| {
                tracing::debug!(kind = ?err.kind(), "command-line parsing failed");
            })?;
        tracing::debug!(program = %self.settings.program, "parsed command line");
        let ctx = CliContext::new(matches);
        self.check(&registration.constraints, &ctx)?;
        fire(&registration.options, &ctx)?;
        Ok(ctx)
    }

    /// Validates an already parsed command line without firing setters.
    ///
    /// # Errors
    ///
    /// Returns every requiredness and radio-group failure, aggregated when
    /// there is more than one, or the registration failure described on
    /// [`CliSpecification::command`].
    pub fn validate(&self, ctx: &CliContext) -> CliResult<()> {
        self.check(&self.register()?.constraints, ctx)
    }

    /// Fires the setter of every option present in `ctx`, in registration
    /// order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first setter failure. Registration
    /// failures are reported before any setter runs.
    pub fn fire_consumers(&self, ctx: &CliContext) -> Result<(), ValidationError> {
        fire(&self.register()?.options, ctx)
    }

    fn check(&self, constraints: &[GroupConstraint], ctx: &CliContext) -> CliResult<()> {
        let mut failures = Vec::new();
        if self.settings.defer_required_checks {
            let missing: Vec<String> = self
                .options
                .iter()
                .filter(|option| option.is_enforced_required())
                .filter_map(|option| option.missing(ctx))
                .collect();
            if !missing.is_empty() {
                failures.push(ValidationError::new(format!(
                    "missing required options: {}",
                    missing.join(", ")
                )));
            }
        } else {
            failures.extend(self.options.iter().filter_map(|option| option.validate(ctx).err()));
        }
        failures.extend(constraints.iter().filter_map(|rule| rule.check(ctx).err()));

        if !failures.is_empty() {
            tracing::debug!(failures = failures.len(), "command-line validation failed");
        }
        CliError::try_aggregate(failures).map_or(Ok(()), Err)
    }

    /// Renders a one-line usage string.
    ///
    /// Required options come first as `-o <file>`, optional ones follow in
    /// brackets, and radio groups close the line.
    #[must_use]
    pub fn usage(&self) -> String {
        let options = self.options.iter().map(|option| {
            option
                .generate_usage(false)
                .unwrap_or_else(|| format!("[{}]", option.usage_token()))
        });
        let (required, optional): (Vec<String>, Vec<String>) =
            options.partition(|token| !token.starts_with('['));
        std::iter::once(self.settings.program.clone())
            .chain(required)
            .chain(optional)
            .chain(self.groups.iter().map(RadioGroup::generate_usage))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn fire(options: &[CliOption], ctx: &CliContext) -> Result<(), ValidationError> {
    for option in options {
        option.fire_consumer_if_needed(ctx)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
