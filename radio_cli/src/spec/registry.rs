//! Visitor that registers radio groups and records their constraints.

use std::collections::{HashMap, HashSet};

use clap::Arg;

use crate::context::CliContext;
use crate::error::ValidationError;
use crate::group::{OptionVisitor, RadioGroup};
use crate::option::CliOption;

/// Exclusivity rule recorded for one group.
///
/// Each member is the list of option names it covers: one name for a leaf
/// option, every nested name for a nested group.
#[derive(Debug)]
pub(crate) struct GroupConstraint {
    required: bool,
    members: Vec<Vec<String>>,
}

impl GroupConstraint {
    pub(crate) fn check(&self, ctx: &CliContext) -> Result<(), ValidationError> {
        let selected = self
            .members
            .iter()
            .filter(|names| names.iter().any(|name| ctx.has_option(name)))
            .count();
        if selected > 1 {
            return Err(ValidationError::new(format!(
                "only one of {} may be specified",
                self.labels()
            )));
        }
        if self.required && selected == 0 {
            return Err(ValidationError::new(format!(
                "one of {} is required",
                self.labels()
            )));
        }
        Ok(())
    }

    /// Labels members with the same `-<name>` markers as usage text, so a
    /// long-only option such as `gzip` reads `-gzip` even though it is
    /// typed as `--gzip`.
    fn labels(&self) -> String {
        self.members
            .iter()
            .map(|names| {
                let flags: Vec<String> = names.iter().map(|name| format!("-{name}")).collect();
                match flags.as_slice() {
                    [single] => single.clone(),
                    _ => format!("({})", flags.join(" | ")),
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Rejects argument sets that `clap` would refuse to build.
///
/// Option names are parser ids and must be unique across top-level options
/// and every group. Short flags, long flags, and long aliases must not be
/// claimed by two different options either.
pub(crate) fn check_unique<'a, I>(args: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a Arg>,
{
    let mut ids = HashSet::new();
    let mut shorts: HashMap<char, &str> = HashMap::new();
    let mut longs: HashMap<&str, &str> = HashMap::new();
    for arg in args {
        let id = arg.get_id().as_str();
        if !ids.insert(id) {
            return Err(ValidationError::new(format!(
                "option {id} is defined more than once"
            )));
        }
        if let Some(short) = arg.get_short()
            && let Some(other) = shorts.insert(short, id)
        {
            return Err(clash(&format!("-{short}"), other, id));
        }
        for long in long_forms(arg) {
            if let Some(other) = longs.insert(long, id)
                && other != id
            {
                return Err(clash(&format!("--{long}"), other, id));
            }
        }
    }
    Ok(())
}

fn clash(flag: &str, first: &str, second: &str) -> ValidationError {
    ValidationError::new(format!("{flag} is claimed by both {first} and {second}"))
}

fn long_forms(arg: &Arg) -> impl Iterator<Item = &str> {
    arg.get_long()
        .into_iter()
        .chain(arg.get_all_aliases().unwrap_or_default())
}

/// Returns `true` when any of `args` uses `short` or `long` as a flag.
pub(crate) fn claims<'a, I>(args: I, short: char, long: &str) -> bool
where
    I: IntoIterator<Item = &'a Arg>,
{
    args.into_iter()
        .any(|arg| arg.get_short() == Some(short) || long_forms(arg).any(|name| name == long))
}

/// Rejects groups, nested ones included, that have no members.
pub(crate) fn check_members(group: &RadioGroup) -> Result<(), ValidationError> {
    if group.options().is_empty() && group.groups().is_empty() {
        return Err(ValidationError::new(
            "radio group must contain at least one option",
        ));
    }
    group.groups().iter().try_for_each(check_members)
}

#[derive(Debug)]
struct Frame {
    required: bool,
    members: Vec<Vec<String>>,
}

/// Collects the arguments, setters, and constraints of visited groups.
#[derive(Debug, Default)]
pub(crate) struct RegistrationVisitor {
    pub(crate) args: Vec<Arg>,
    pub(crate) options: Vec<CliOption>,
    pub(crate) constraints: Vec<GroupConstraint>,
    frames: Vec<Frame>,
}

impl OptionVisitor for RegistrationVisitor {
    fn pre_visit(&mut self, group: &RadioGroup, required: bool) {
        tracing::trace!(
            options = group.options().len(),
            groups = group.groups().len(),
            required,
            "entering radio group"
        );
        self.frames.push(Frame {
            required,
            members: Vec::new(),
        });
    }

    fn visit(&mut self, arg: Arg, option: &CliOption) {
        if let Some(frame) = self.frames.last_mut() {
            frame.members.push(vec![option.name().to_owned()]);
        }
        self.args.push(arg);
        self.options.push(option.clone());
    }

    fn post_visit(&mut self, _group: &RadioGroup) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        if let Some(parent) = self.frames.last_mut() {
            parent.members.push(frame.members.concat());
        }
        self.constraints.push(GroupConstraint {
            required: frame.required,
            members: frame.members,
        });
    }
}
