//! Traversal hooks for registering grouped options.

use clap::Arg;

use super::RadioGroup;
use crate::option::CliOption;

/// Receives the members of a [`RadioGroup`] during
/// [`RadioGroup::visit`].
///
/// Implementations typically add each visited [`Arg`] to a `clap`
/// command and record the group boundaries to enforce exclusivity after
/// parsing. Groups nest, so `pre_visit`/`post_visit` calls are balanced
/// like brackets.
pub trait OptionVisitor {
    /// Called when traversal enters `group`.
    ///
    /// `required` is the group's effective requiredness: nested groups are
    /// always visited as optional.
    fn pre_visit(&mut self, _group: &RadioGroup, _required: bool) {}

    /// Called for each leaf option of the current group.
    ///
    /// `arg` is the registration form with requiredness already cleared;
    /// `option` carries the setter to fire once the command line is parsed.
    fn visit(&mut self, arg: Arg, option: &CliOption);

    /// Called when traversal leaves `group`.
    fn post_visit(&mut self, _group: &RadioGroup) {}
}
