//! Construction of the type-erased setter stored on each option.

use std::rc::Rc;

use crate::ValidationResultExt;
use crate::error::{BoxError, ValidationError};

/// Callback invoked with an option's raw value when the option is present.
///
/// Converters, predicates, and user callbacks registered on an
/// [`OptionBuilder`](super::OptionBuilder) are folded into a single setter
/// that reports every failure as a [`ValidationError`].
pub type Setter = Rc<dyn Fn(&str) -> Result<(), ValidationError>>;

/// Message reported when a converted value is rejected by its predicate.
pub const PREDICATE_FAILED: &str = "setter did not pass validation test";

pub(super) fn noop() -> Setter {
    Rc::new(|_: &str| Ok::<(), ValidationError>(()))
}

pub(super) fn plain<F, E>(consume: F) -> Setter
where
    F: Fn(&str) -> Result<(), E> + 'static,
    E: Into<BoxError>,
{
    Rc::new(move |raw: &str| consume(raw).into_validation())
}

pub(super) fn converting<T, C, CE, F, FE>(convert: C, consume: F) -> Setter
where
    C: Fn(&str) -> Result<T, CE> + 'static,
    CE: Into<BoxError>,
    F: Fn(T) -> Result<(), FE> + 'static,
    FE: Into<BoxError>,
{
    Rc::new(move |raw: &str| {
        let value = convert(raw).into_validation()?;
        consume(value).into_validation()
    })
}

pub(super) fn validating<T, C, CE, P, F, FE>(convert: C, predicate: P, consume: F) -> Setter
where
    C: Fn(&str) -> Result<T, CE> + 'static,
    CE: Into<BoxError>,
    P: Fn(&T) -> bool + 'static,
    F: Fn(T) -> Result<(), FE> + 'static,
    FE: Into<BoxError>,
{
    Rc::new(move |raw: &str| {
        let value = convert(raw).into_validation()?;
        if !predicate(&value) {
            return Err(ValidationError::new(PREDICATE_FAILED));
        }
        consume(value).into_validation()
    })
}
