//! Radio groups: sets of options of which at most one may be chosen.
//!
//! A [`RadioGroup`] only records intent. The group states whether one member
//! must be selected and lists its members; enforcing "exactly one" is left
//! to the [`OptionVisitor`] that registers it, such as the one driven by
//! [`CliSpecification`](crate::CliSpecification).

mod visitor;

pub use visitor::OptionVisitor;

use crate::context::CliContext;
use crate::option::{CliOption, OptionBuilder};

/// A member of a [`RadioGroup`].
#[derive(Debug, Clone)]
pub enum GroupMember {
    /// A single option.
    Option(CliOption),
    /// A nested group, selected as a whole.
    Group(RadioGroup),
}

impl From<CliOption> for GroupMember {
    fn from(option: CliOption) -> Self {
        Self::Option(option)
    }
}

impl From<OptionBuilder> for GroupMember {
    fn from(builder: OptionBuilder) -> Self {
        Self::Option(builder.build())
    }
}

impl From<RadioGroup> for GroupMember {
    fn from(group: RadioGroup) -> Self {
        Self::Group(group)
    }
}

/// Mutually exclusive set of options and nested groups.
///
/// Members keep their declaration order. When a group is nested inside
/// another, its own requiredness is cleared: only the outermost group decides
/// whether a choice is mandatory. Leaf options lose their enforced
/// requiredness for the same reason but keep the advertised flag for usage
/// text.
///
/// # Examples
///
/// ```rust
/// use radio_cli::{CliOption, GroupMember, RadioGroup};
///
/// let inner = RadioGroup::required([CliOption::builder("x"), CliOption::builder("y")]);
/// let outer = RadioGroup::optional([
///     GroupMember::from(CliOption::builder("a").build()),
///     GroupMember::from(inner),
/// ]);
///
/// assert!(!outer.is_required());
/// assert!(outer.groups().iter().all(|g| !g.is_required()));
/// assert_eq!(outer.generate_usage(), "[-a | [-x | -y]]");
/// ```
#[derive(Debug, Clone)]
pub struct RadioGroup {
    required: bool,
    options: Vec<CliOption>,
    groups: Vec<Self>,
}

impl RadioGroup {
    /// Creates a group from which one member must be chosen.
    #[must_use]
    pub fn required<I>(members: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<GroupMember>,
    {
        Self::new(true, members)
    }

    /// Creates a group from which at most one member may be chosen.
    #[must_use]
    pub fn optional<I>(members: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<GroupMember>,
    {
        Self::new(false, members)
    }

    fn new<I>(required: bool, members: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<GroupMember>,
    {
        let mut options = Vec::new();
        let mut groups = Vec::new();
        for member in members {
            match member.into() {
                GroupMember::Option(option) => options.push(option.with_enforced_required(false)),
                GroupMember::Group(mut group) => {
                    group.set_required(false);
                    groups.push(group);
                }
            }
        }
        Self {
            required,
            options,
            groups,
        }
    }

    /// Returns `true` when one member must be chosen.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Overrides whether a member must be chosen.
    pub const fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Returns the leaf options in declaration order.
    #[must_use]
    pub fn options(&self) -> &[CliOption] {
        &self.options
    }

    /// Returns the nested groups in declaration order.
    #[must_use]
    pub fn groups(&self) -> &[Self] {
        &self.groups
    }

    /// Walks the group, handing every leaf option to `visitor`.
    ///
    /// `forced_override` replaces the group's requiredness for this
    /// traversal. Nested groups are always visited with `Some(false)`.
    pub fn visit<V>(&self, visitor: &mut V, forced_override: Option<bool>)
    where
        V: OptionVisitor + ?Sized,
    {
        visitor.pre_visit(self, forced_override.unwrap_or(self.required));
        for option in &self.options {
            visitor.visit(option.to_arg().required(false), option);
        }
        for group in &self.groups {
            group.visit(visitor, Some(false));
        }
        visitor.post_visit(self);
    }

    /// Returns the names of every present option, nested groups included.
    #[must_use]
    pub fn seen_list(&self, ctx: &CliContext) -> Vec<&str> {
        let mut seen: Vec<&str> = self
            .options
            .iter()
            .flat_map(|option| option.seen_list(ctx))
            .collect();
        for group in &self.groups {
            seen.extend(group.seen_list(ctx));
        }
        seen
    }

    /// Renders the group as `(-a | -b)` when required or `[-a | -b]`
    /// otherwise.
    #[must_use]
    pub fn generate_usage(&self) -> String {
        let members = self
            .options
            .iter()
            .map(CliOption::usage_token)
            .chain(self.groups.iter().map(Self::generate_usage))
            .collect::<Vec<_>>()
            .join(" | ");
        if self.required {
            format!("({members})")
        } else {
            format!("[{members}]")
        }
    }
}
