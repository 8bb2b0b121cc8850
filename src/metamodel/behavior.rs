//! Operations, parameters, exception types, and services.

use indexmap::IndexSet;

use crate::base::Name;

use super::constraints::ConstraintSpecSet;
use super::desc::Description;
use super::ident::ClassifierRef;
use super::structure::Property;
use super::types::TypeDef;

/// One formal parameter of an [`Operation`].
///
/// The parameter's name lives in its type reference, like a property's.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpParam {
    pub type_def: Option<TypeDef>,
    pub desc: Option<Description>,
    pub ordered: bool,
    pub required: bool,
    pub unique: bool,
    pub specs: ConstraintSpecSet,
}

impl OpParam {
    pub fn name(&self) -> Option<&Name> {
        self.type_def.as_ref().and_then(|td| td.name.as_ref())
    }
}

/// A service operation: return type, parameters, flags, bound constraint
/// specifications, and thrown-exception references.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Operation {
    /// Return type; also carries the operation's name.
    pub type_def: Option<TypeDef>,
    pub desc: Option<Description>,
    pub ordered: bool,
    pub unique: bool,
    pub required: bool,
    pub params: Vec<OpParam>,
    pub specs: ConstraintSpecSet,
    /// Thrown-exception references, deduplicated, in source order.
    pub throws: IndexSet<ClassifierRef>,
}

impl Operation {
    pub fn name(&self) -> Option<&Name> {
        self.type_def.as_ref().and_then(|td| td.name.as_ref())
    }
}

/// A declared exception type and its properties.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExceptionType {
    pub name: Name,
    pub desc: Option<Description>,
    pub properties: Vec<Property>,
}

/// A service declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Service {
    pub name: Name,
    pub desc: Option<Description>,
    /// At most one superclass-like reference.
    pub extends: Option<ClassifierRef>,
    /// Ordered dependency references.
    pub depends: Vec<ClassifierRef>,
    pub specs: ConstraintSpecSet,
    pub operations: Vec<Operation>,
}
