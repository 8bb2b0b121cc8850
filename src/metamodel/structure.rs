//! Model root, packages, properties, and relationships.

use crate::base::Name;

use super::behavior::{ExceptionType, Service};
use super::constraints::{Constraint, ConstraintSpecSet};
use super::desc::Description;
use super::ident::QualifiedIdent;
use super::types::{DataType, Enumeration, TypeDef};

/// A top-level type declaration of a [`Model`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeDecl {
    Data(DataType),
    Enum(Enumeration),
}

/// The root of a compiled unit. Exactly one per unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Model {
    pub name: Name,
    pub desc: Option<Description>,
    /// Top-level data types and enumerations, in source order.
    pub types: Vec<TypeDecl>,
    /// Top-level constraint declarations, in source order.
    pub constraints: Vec<Constraint>,
    pub packages: Vec<Package>,
}

/// Any element a package may contain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PackageMember {
    Package(Package),
    Data(DataType),
    Enum(Enumeration),
    Constraint(Constraint),
    Exception(ExceptionType),
    Service(Service),
}

/// A recursively nestable package.
///
/// While a package's children are reduced, the ambient namespace path is
/// extended by the package's name. That push/pop is performed by the
/// driving collaborator around the builder invocation, not by the builder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Package {
    pub name: Name,
    pub desc: Option<Description>,
    pub members: Vec<PackageMember>,
}

/// Containment/opposite-end metadata attached to a property that models an
/// association.
///
/// Never constructed unless at least one of {containment, opposite-end}
/// was present; a property without association metadata carries `None`
/// instead of a default-constructed value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Relationship {
    pub containment: bool,
    pub opposite_end: Option<QualifiedIdent>,
}

/// An entity property: a typed slot with flags, optional association
/// metadata, and bound constraint specifications.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Property {
    pub type_def: Option<TypeDef>,
    pub unique: bool,
    pub ordered: bool,
    pub readonly: bool,
    pub required: bool,
    pub relationship: Option<Relationship>,
    pub specs: ConstraintSpecSet,
}

impl Property {
    /// The declared property name, held by the type reference.
    pub fn name(&self) -> Option<&Name> {
        self.type_def.as_ref().and_then(|td| td.name.as_ref())
    }
}
