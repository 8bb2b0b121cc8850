//! Constraint declarations, tag shapes, and constraint specifications.

use indexmap::IndexSet;

use crate::base::Name;

use super::desc::Description;
use super::ident::QualifiedIdent;

/// Which of the two constraint builder configurations produced a
/// [`Constraint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    Tag,
    Validator,
}

impl ConstraintKind {
    pub fn display(&self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::Validator => "validator",
        }
    }
}

/// A named tag or validator declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constraint {
    pub name: Name,
    pub namespace: Vec<Name>,
    /// Fixed at builder-configuration time, like [`super::DataType::built_in`].
    pub built_in: bool,
    pub kind: ConstraintKind,
    /// The reusable shape this constraint declares, if any.
    pub tag: Option<CommonTag>,
}

/// A reusable constraint/tag shape: formal parameters plus the element
/// kinds it may decorate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommonTag {
    pub name: Name,
    pub desc: Option<Description>,
    pub constr_def: Option<ConstrDef>,
    pub applies: Option<ApplyDef>,
}

/// One formal-parameter-type descriptor of a [`ConstrDef`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstrParam {
    Type(Name),
    /// The trailing `...` marker.
    Variadic,
}

/// The formal-parameter list of a constraint declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstrDef {
    pub params: Vec<ConstrParam>,
}

/// The element kinds a tag/validator may be applied to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplyDef {
    pub targets: Vec<Name>,
}

/// A parameter value bound by a [`ConstraintSpec`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpecParam {
    Ident(QualifiedIdent),
    Str(String),
    Int(i64),
}

/// A concrete invocation of a constraint with bound parameter values.
///
/// Equality and hashing cover the referenced identifier and the ordered
/// parameter list — that pair is the deduplication key within a
/// [`ConstraintSpecSet`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConstraintSpec {
    /// The referenced constraint.
    pub target: QualifiedIdent,
    pub params: Vec<SpecParam>,
}

impl ConstraintSpec {
    /// A zero-parameter invocation.
    pub fn new(target: QualifiedIdent) -> Self {
        Self {
            target,
            params: Vec::new(),
        }
    }

    pub fn with_params(target: QualifiedIdent, params: Vec<SpecParam>) -> Self {
        Self { target, params }
    }
}

/// A deduplicated set of constraint specifications.
///
/// Two specs are duplicates when their referenced identifier and ordered
/// parameter lists are equal; inserting a duplicate is an idempotent union.
/// Iteration follows insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstraintSpecSet {
    specs: IndexSet<ConstraintSpec>,
}

impl ConstraintSpecSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a spec; returns false if an equal spec was already present.
    pub fn insert(&mut self, spec: ConstraintSpec) -> bool {
        self.specs.insert(spec)
    }

    /// Union the members of `other` into this set, one by one.
    pub fn merge(&mut self, other: ConstraintSpecSet) {
        for spec in other.specs {
            self.specs.insert(spec);
        }
    }

    pub fn contains(&self, spec: &ConstraintSpec) -> bool {
        self.specs.contains(spec)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConstraintSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl FromIterator<ConstraintSpec> for ConstraintSpecSet {
    fn from_iter<I: IntoIterator<Item = ConstraintSpec>>(iter: I) -> Self {
        Self {
            specs: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ConstraintSpecSet {
    type Item = ConstraintSpec;
    type IntoIter = indexmap::set::IntoIter<ConstraintSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.into_iter()
    }
}
