//! Fluent option builders and radio groups layered over `clap`.
//!
//! Options are declared with [`CliOption::builder`], compiled into immutable
//! [`CliOption`] descriptors, and optionally combined into [`RadioGroup`]s of
//! which at most one member may be chosen. A [`CliSpecification`] binds them
//! to a program, hands the definitions to `clap` for parsing, and then
//! validates and fires the setters registered on each option.
//!
//! ```rust
//! use std::{cell::Cell, rc::Rc};
//! use radio_cli::{CliOption, CliSpecification};
//!
//! let retries = Rc::new(Cell::new(0));
//! let sink = Rc::clone(&retries);
//! let spec = CliSpecification::builder("sync")
//!     .option(
//!         CliOption::builder("r")
//!             .long_name("retries")
//!             .arg_name("count")
//!             .set_to_int(move |n| sink.set(n)),
//!     )
//!     .build();
//!
//! spec.parse_from(["sync", "--retries", "3"]).unwrap();
//! assert_eq!(retries.get(), 3);
//! ```

mod context;
mod error;
mod group;
mod option;
mod result_ext;
mod spec;

pub use context::CliContext;
pub use error::{AggregatedErrors, BoxError, CliError, ValidationError, is_display_request};
pub use group::{GroupMember, OptionVisitor, RadioGroup};
pub use option::{CliOption, OptionBuilder, PREDICATE_FAILED, Setter};
pub use result_ext::ValidationResultExt;
pub use spec::{CliSpecification, SpecificationBuilder};

/// Convenience alias for results whose error is a [`CliError`].
pub type CliResult<T> = Result<T, CliError>;
