//! Shared helpers for the integration suites.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Command;
use radio_cli::{CliContext, CliOption};

/// Shared log that setters append to.
pub type Log = Rc<RefCell<Vec<String>>>;

/// Creates an empty log.
pub fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Returns a setter that records `label=value` in `log`.
pub fn record(log: &Log, label: &'static str) -> impl Fn(&str) -> Result<(), Infallible> + 'static {
    let sink = Rc::clone(log);
    move |raw: &str| {
        sink.borrow_mut().push(format!("{label}={raw}"));
        Ok(())
    }
}

/// Parses `args` against `options`, each registered as optional.
pub fn parse_options(options: &[&CliOption], args: &[&str]) -> Result<CliContext> {
    let command = options
        .iter()
        .fold(Command::new("it"), |cmd, option| option.add_to(cmd, Some(false)));
    let matches = command
        .try_get_matches_from(args)
        .context("parse test arguments")?;
    Ok(CliContext::new(matches))
}
