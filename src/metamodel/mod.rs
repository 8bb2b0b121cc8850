//! The DMDL metamodel.
//!
//! Every type here is assembled once, by its builder in [`crate::reduce`],
//! from already-built children, and is never mutated afterwards except as a
//! child being absorbed by a parent builder. Ownership is strictly
//! tree-shaped: an entity has exactly one parent, and all cross-entity
//! references are [`QualifiedIdent`] or [`ClassifierRef`] values that a
//! downstream resolver turns into concrete definitions.

mod behavior;
mod constraints;
mod desc;
mod ident;
mod structure;
mod types;

pub use behavior::{ExceptionType, OpParam, Operation, Service};
pub use constraints::{
    ApplyDef, CommonTag, ConstrDef, ConstrParam, Constraint, ConstraintKind, ConstraintSpec,
    ConstraintSpecSet, SpecParam,
};
pub use desc::Description;
pub use ident::{ClassKind, ClassifierRef, QualifiedIdent};
pub use structure::{Model, Package, PackageMember, Property, Relationship, TypeDecl};
pub use types::{DataType, EnumLiteral, Enumeration, TypeDef};
