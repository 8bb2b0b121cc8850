//! Qualified identifiers and classifier references.

use std::fmt;

use crate::base::{Name, Namespace};

/// An identifier paired with the namespace path in effect where it was
/// declared.
///
/// The namespace is the ambient path *read* (not searched) at the moment
/// the identifier token is reduced. Resolution to a concrete definition is
/// a downstream concern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QualifiedIdent {
    /// The raw name as written in source.
    pub name: Name,
    /// Namespace path active at the point of declaration, outermost first.
    pub namespace: Vec<Name>,
}

impl QualifiedIdent {
    /// Pair `name` with the currently active namespace path.
    pub fn new(name: impl Into<Name>, namespace: &Namespace) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.to_vec(),
        }
    }

    /// An identifier with an explicit namespace path (tests, synthetic refs).
    pub fn with_path(name: impl Into<Name>, namespace: Vec<Name>) -> Self {
        Self {
            name: name.into(),
            namespace,
        }
    }

    pub fn is_qualified(&self) -> bool {
        !self.namespace.is_empty()
    }
}

impl fmt::Display for QualifiedIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.namespace {
            write!(f, "{segment}::")?;
        }
        write!(f, "{}", self.name)
    }
}

/// The kind of classifier a [`ClassifierRef`] points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Entity,
    ExceptType,
    Service,
    DataType,
}

impl ClassKind {
    pub fn display(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::ExceptType => "exception",
            Self::Service => "service",
            Self::DataType => "data type",
        }
    }
}

/// A qualified identifier tagged with the kind of thing it refers to.
///
/// Used for extends/depends/throws lists. The kind is `None` when the
/// grammar position does not fix it (dependency lists); resolution happens
/// downstream either way.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassifierRef {
    pub target: QualifiedIdent,
    pub kind: Option<ClassKind>,
}

impl ClassifierRef {
    pub fn new(target: QualifiedIdent, kind: ClassKind) -> Self {
        Self {
            target,
            kind: Some(kind),
        }
    }

    /// A reference whose classifier kind is left for the resolver.
    pub fn unkinded(target: QualifiedIdent) -> Self {
        Self { target, kind: None }
    }
}
