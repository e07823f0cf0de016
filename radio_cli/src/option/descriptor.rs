//! Compiled, immutable option descriptors.

use std::fmt;

use clap::{Arg, ArgAction, Command};

use super::builder::OptionBuilder;
use super::setter::Setter;
use crate::context::CliContext;
use crate::error::ValidationError;

/// Runtime form of a single command-line option.
///
/// A descriptor tracks requiredness twice. The *advertised* flag mirrors the
/// builder and drives usage text; the *enforced* flag is what the parser and
/// [`CliOption::validate`] check. They only differ for descriptors compiled
/// with [`OptionBuilder::build_with_required`] or placed in a
/// [`RadioGroup`](crate::RadioGroup), where the group decides what is
/// mandatory.
#[derive(Clone)]
pub struct CliOption {
    pub(super) name: String,
    pub(super) long_name: Option<String>,
    pub(super) description: Option<String>,
    pub(super) arg_name: Option<String>,
    pub(super) flag: bool,
    pub(super) advertised_required: bool,
    pub(super) enforced_required: bool,
    pub(super) setter: Setter,
}

impl fmt::Debug for CliOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliOption")
            .field("name", &self.name)
            .field("long_name", &self.long_name)
            .field("description", &self.description)
            .field("arg_name", &self.arg_name)
            .field("flag", &self.flag)
            .field("advertised_required", &self.advertised_required)
            .field("enforced_required", &self.enforced_required)
            .field("setter", &"<setter>")
            .finish()
    }
}

impl CliOption {
    /// Starts building an option called `name`.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> OptionBuilder {
        OptionBuilder::new(name)
    }

    /// Returns the option name, which doubles as its parser id.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the long form, if one was configured.
    #[must_use]
    pub fn long_name(&self) -> Option<&str> {
        self.long_name.as_deref()
    }

    /// Returns the help text, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the value placeholder, if any.
    #[must_use]
    pub fn arg_name(&self) -> Option<&str> {
        self.arg_name.as_deref()
    }

    /// Returns `true` for options that take no value.
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        self.flag
    }

    /// Returns the requiredness advertised in usage text.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.advertised_required
    }

    /// Returns the requiredness enforced while parsing and validating.
    #[must_use]
    pub const fn is_enforced_required(&self) -> bool {
        self.enforced_required
    }

    /// Returns the setter that receives the option's value.
    #[must_use]
    pub const fn setter(&self) -> &Setter {
        &self.setter
    }

    pub(crate) const fn with_enforced_required(mut self, required: bool) -> Self {
        self.enforced_required = required;
        self
    }

    /// Renders `-<name> <<arg>>` for usage text.
    ///
    /// Returns `None` unless the option is advertised as required or `force`
    /// is set. The marker always uses a single dash and the option name, so
    /// a long-only option such as `gzip` renders as `-gzip` while it is typed
    /// as `--gzip` on the command line.
    #[must_use]
    pub fn generate_usage(&self, force: bool) -> Option<String> {
        (force || self.advertised_required).then(|| self.usage_token())
    }

    pub(crate) fn usage_token(&self) -> String {
        match &self.arg_name {
            Some(arg) => format!("-{} <{arg}>", self.name),
            None => format!("-{}", self.name),
        }
    }

    /// Builds the `clap` registration form of this option.
    ///
    /// A one-character name becomes the short flag. A longer name is used
    /// as the long flag, or as an alias of it when a long name is set.
    #[must_use]
    pub fn to_arg(&self) -> Arg {
        let mut arg = Arg::new(self.name.clone()).required(self.enforced_required);
        arg = match (short_flag(&self.name), &self.long_name) {
            (Some(short), Some(long)) => arg.short(short).long(long.clone()),
            (Some(short), None) => arg.short(short),
            (None, Some(long)) if *long == self.name => arg.long(long.clone()),
            (None, Some(long)) => arg.long(long.clone()).alias(self.name.clone()),
            (None, None) => arg.long(self.name.clone()),
        };
        if let Some(help) = &self.description {
            arg = arg.help(help.clone());
        }
        if self.flag {
            return arg.action(ArgAction::SetTrue);
        }
        arg = arg.action(ArgAction::Set).num_args(1);
        match &self.arg_name {
            Some(value_name) => arg.value_name(value_name.clone()),
            None => arg,
        }
    }

    /// Registers this option with `command`.
    ///
    /// `force_required` overrides the enforced flag for this registration
    /// only.
    #[must_use]
    pub fn add_to(&self, command: Command, force_required: Option<bool>) -> Command {
        let arg = match force_required {
            Some(required) => self.to_arg().required(required),
            None => self.to_arg(),
        };
        tracing::trace!(option = %self.name, required = arg.is_required_set(), "registering option");
        command.arg(arg)
    }

    /// Returns `true` when the option was given on the command line.
    #[must_use]
    pub fn is_present(&self, ctx: &CliContext) -> bool {
        ctx.has_option(&self.name)
    }

    /// Returns the `-<name>` marker when the option is absent.
    ///
    /// The marker follows [`CliOption::generate_usage`], not the flag
    /// spelling accepted by the parser.
    #[must_use]
    pub fn missing(&self, ctx: &CliContext) -> Option<String> {
        (!self.is_present(ctx)).then(|| format!("-{}", self.name))
    }

    /// Checks that an enforced-required option is present.
    ///
    /// The setter is not consulted; see
    /// [`CliOption::fire_consumer_if_needed`].
    ///
    /// # Errors
    ///
    /// Returns `"<name> is required"` when the option is enforced as
    /// required and absent.
    pub fn validate(&self, ctx: &CliContext) -> Result<(), ValidationError> {
        if self.enforced_required && !self.is_present(ctx) {
            return Err(ValidationError::new(format!("{} is required", self.name)));
        }
        Ok(())
    }

    /// Feeds the option's value through the setter when the option is
    /// present.
    ///
    /// Flags pass `"true"`.
    ///
    /// # Errors
    ///
    /// Propagates any conversion, predicate, or callback failure raised by
    /// the setter.
    pub fn fire_consumer_if_needed(&self, ctx: &CliContext) -> Result<(), ValidationError> {
        if !self.is_present(ctx) {
            return Ok(());
        }
        let value = ctx.option_value(&self.name).unwrap_or_default();
        tracing::trace!(option = %self.name, "firing setter");
        (self.setter)(value.as_str())
    }

    /// Returns `[name]` when present, or an empty list.
    #[must_use]
    pub fn seen_list(&self, ctx: &CliContext) -> Vec<&str> {
        if self.is_present(ctx) {
            vec![self.name.as_str()]
        } else {
            Vec::new()
        }
    }
}

fn short_flag(name: &str) -> Option<char> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(short), None) => Some(short),
        _ => None,
    }
}
