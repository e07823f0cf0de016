//! Fluent builder for command-line options.
//!
//! The builder performs no validation while it is configured. Everything it
//! collects is frozen into a [`CliOption`] by [`OptionBuilder::build`] or
//! [`OptionBuilder::build_with_required`].

use std::convert::Infallible;
use std::fmt;

use camino::Utf8PathBuf;

use super::descriptor::CliOption;
use super::setter::{self, Setter};
use crate::error::BoxError;

/// Builder for [`CliOption`].
///
/// Only one setter is kept per option: each `setter`-style call replaces
/// whatever was registered before it, so the last registration wins.
///
/// # Examples
///
/// ```rust
/// use std::{cell::Cell, rc::Rc};
/// use radio_cli::CliOption;
///
/// let threads = Rc::new(Cell::new(1));
/// let sink = Rc::clone(&threads);
/// let option = CliOption::builder("t")
///     .long_name("threads")
///     .arg_name("count")
///     .description("number of worker threads")
///     .set_to_int(move |n| sink.set(n))
///     .build();
///
/// assert_eq!(option.generate_usage(true).as_deref(), Some("-t <count>"));
/// assert!(!option.is_required());
/// ```
#[derive(Clone)]
pub struct OptionBuilder {
    name: String,
    long_name: Option<String>,
    description: Option<String>,
    arg_name: Option<String>,
    required: bool,
    flag: bool,
    setter: Setter,
}

impl fmt::Debug for OptionBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionBuilder")
            .field("name", &self.name)
            .field("long_name", &self.long_name)
            .field("description", &self.description)
            .field("arg_name", &self.arg_name)
            .field("required", &self.required)
            .field("flag", &self.flag)
            .field("setter", &"<setter>")
            .finish()
    }
}

impl OptionBuilder {
    /// Creates a builder for the option called `name`.
    ///
    /// A single-character name becomes the short flag (`-v`); longer names
    /// are matched as long flags.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            long_name: None,
            description: None,
            arg_name: None,
            required: false,
            flag: false,
            setter: setter::noop(),
        }
    }

    /// Sets the placeholder shown for the option's value in usage text.
    #[must_use]
    pub fn arg_name(mut self, arg_name: impl Into<String>) -> Self {
        self.arg_name = Some(arg_name.into());
        self
    }

    /// Sets the long form (`--name`) of the option.
    #[must_use]
    pub fn long_name(mut self, long_name: impl Into<String>) -> Self {
        self.long_name = Some(long_name.into());
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the option as required.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Marks the option as a flag that takes no value.
    #[must_use]
    pub const fn flag(mut self, flag: bool) -> Self {
        self.flag = flag;
        self
    }

    /// Registers a callback receiving the raw string value.
    ///
    /// A failing callback is reported as a
    /// [`ValidationError`](crate::ValidationError) carrying the callback's
    /// error as its source.
    #[must_use]
    pub fn setter<F, E>(self, consume: F) -> Self
    where
        F: Fn(&str) -> Result<(), E> + 'static,
        E: Into<BoxError>,
    {
        self.install(setter::plain(consume))
    }

    /// Registers a callback that only runs when `predicate` accepts the raw
    /// value.
    #[must_use]
    pub fn setter_if<P, F, E>(self, predicate: P, consume: F) -> Self
    where
        P: Fn(&str) -> bool + 'static,
        F: Fn(&str) -> Result<(), E> + 'static,
        E: Into<BoxError>,
    {
        self.install(setter::validating(
            |raw: &str| Ok::<_, Infallible>(raw.to_owned()),
            move |value: &String| predicate(value.as_str()),
            move |value: String| consume(value.as_str()),
        ))
    }

    /// Registers a callback fed with the output of `convert`.
    ///
    /// Conversion failures stop the callback from running and surface as a
    /// validation error wrapping the converter's error.
    #[must_use]
    pub fn convert_setter<T, C, CE, F, FE>(self, convert: C, consume: F) -> Self
    where
        C: Fn(&str) -> Result<T, CE> + 'static,
        CE: Into<BoxError>,
        F: Fn(T) -> Result<(), FE> + 'static,
        FE: Into<BoxError>,
    {
        self.install(setter::converting(convert, consume))
    }

    /// Registers a converting callback guarded by `predicate`.
    ///
    /// A converted value rejected by `predicate` fails with
    /// [`PREDICATE_FAILED`](super::PREDICATE_FAILED).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radio_cli::{CliOption, PREDICATE_FAILED};
    /// # use clap::Command;
    /// # use radio_cli::CliContext;
    ///
    /// let option = CliOption::builder("p")
    ///     .arg_name("port")
    ///     .validated_setter(
    ///         |raw: &str| raw.parse::<u16>(),
    ///         |port: &u16| *port >= 1024,
    ///         |_port| Ok::<(), std::convert::Infallible>(()),
    ///     )
    ///     .build();
    /// # let matches = option
    /// #     .add_to(Command::new("demo"), None)
    /// #     .try_get_matches_from(["demo", "-p", "80"])
    /// #     .unwrap();
    /// # let ctx = CliContext::new(matches);
    /// let err = option.fire_consumer_if_needed(&ctx).unwrap_err();
    /// assert_eq!(err.to_string(), PREDICATE_FAILED);
    /// ```
    #[must_use]
    pub fn validated_setter<T, C, CE, P, F, FE>(self, convert: C, predicate: P, consume: F) -> Self
    where
        C: Fn(&str) -> Result<T, CE> + 'static,
        CE: Into<BoxError>,
        P: Fn(&T) -> bool + 'static,
        F: Fn(T) -> Result<(), FE> + 'static,
        FE: Into<BoxError>,
    {
        self.install(setter::validating(convert, predicate, consume))
    }

    /// Registers a callback receiving the value as a path.
    #[must_use]
    pub fn set_to_file<F>(self, consume: F) -> Self
    where
        F: Fn(Utf8PathBuf) + 'static,
    {
        self.validated_setter(
            |raw: &str| Ok::<_, Infallible>(Utf8PathBuf::from(raw)),
            |_: &Utf8PathBuf| true,
            move |path| {
                consume(path);
                Ok::<(), Infallible>(())
            },
        )
    }

    /// Registers a callback receiving the value parsed as an `i32`.
    ///
    /// Values that do not parse fail validation with the
    /// [`ParseIntError`](std::num::ParseIntError) as the source.
    #[must_use]
    pub fn set_to_int<F>(self, consume: F) -> Self
    where
        F: Fn(i32) + 'static,
    {
        self.validated_setter(
            str::parse::<i32>,
            |_: &i32| true,
            move |value| {
                consume(value);
                Ok::<(), Infallible>(())
            },
        )
    }

    fn install(mut self, setter: Setter) -> Self {
        self.setter = setter;
        self
    }

    /// Returns the option name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the option is currently configured as required.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Compiles the builder into a [`CliOption`].
    #[must_use]
    pub fn build(&self) -> CliOption {
        self.compile(self.required)
    }

    /// Compiles the builder with `required` enforced at parse time.
    ///
    /// The builder is left untouched, and the descriptor still advertises
    /// the builder's own requiredness in usage text. Only the flag handed to
    /// the parser and checked by [`CliOption::validate`] changes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use radio_cli::CliOption;
    ///
    /// let builder = CliOption::builder("o").required(true);
    /// let option = builder.build_with_required(false);
    /// assert!(option.is_required());
    /// assert!(!option.is_enforced_required());
    /// assert!(builder.is_required());
    /// ```
    #[must_use]
    pub fn build_with_required(&self, required: bool) -> CliOption {
        self.compile(required)
    }

    fn compile(&self, enforced_required: bool) -> CliOption {
        CliOption {
            name: self.name.clone(),
            long_name: self.long_name.clone(),
            description: self.description.clone(),
            arg_name: self.arg_name.clone(),
            flag: self.flag,
            advertised_required: self.required,
            enforced_required,
            setter: self.setter.clone(),
        }
    }
}

impl From<OptionBuilder> for CliOption {
    fn from(builder: OptionBuilder) -> Self {
        builder.build()
    }
}

impl From<&OptionBuilder> for CliOption {
    fn from(builder: &OptionBuilder) -> Self {
        builder.build()
    }
}
