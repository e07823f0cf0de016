//! Option builders and the compiled descriptors they produce.
//!
//! An [`OptionBuilder`] accumulates the name, help text, requiredness, and
//! setter of one command-line option. Compiling it yields a [`CliOption`],
//! the immutable runtime form that knows how to register itself with `clap`,
//! check presence in a parsed [`CliContext`](crate::CliContext), and feed the
//! option's value through the setter.

mod builder;
mod descriptor;
mod setter;

pub use builder::OptionBuilder;
pub use descriptor::CliOption;
pub use setter::{PREDICATE_FAILED, Setter};
