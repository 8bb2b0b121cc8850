//! Data types, enumerations, and type references.

use crate::base::Name;

use super::desc::Description;
use super::ident::QualifiedIdent;

/// A named data type declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataType {
    pub name: Name,
    /// Namespace path active where the type was declared.
    pub namespace: Vec<Name>,
    pub desc: Option<Description>,
    /// Set at builder-configuration time, never inferred from the parsed
    /// text: the built-in-primitive production and the user-declared
    /// production register differently configured builders.
    pub built_in: bool,
}

/// An enumeration declaration with its literals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enumeration {
    pub name: Name,
    pub namespace: Vec<Name>,
    pub desc: Option<Description>,
    pub literals: Vec<EnumLiteral>,
}

/// One literal of an [`Enumeration`]. Name and value are mandatory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumLiteral {
    pub name: Name,
    pub value: i64,
    pub desc: Option<Description>,
}

impl EnumLiteral {
    pub fn new(name: impl Into<Name>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
            desc: None,
        }
    }
}

/// A type reference as used by properties, operations, and parameters.
///
/// Carries both the referenced base type and, where the grammar position
/// supplies one, the declared element's own name. The container flag is set
/// by a `[` marker child; the optional integer child fixes a multiplicity
/// count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeDef {
    /// The referenced base type (first identifier child).
    pub base: Option<QualifiedIdent>,
    /// The declared name (a later identifier child), if any.
    pub name: Option<Name>,
    pub container: bool,
    pub multiplicity: Option<u32>,
    pub desc: Option<Description>,
}

impl TypeDef {
    pub fn base_name(&self) -> Option<&Name> {
        self.base.as_ref().map(|ident| &ident.name)
    }
}
