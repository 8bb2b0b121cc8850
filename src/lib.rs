//! # dmdl-base
//!
//! Core library for DMDL: semantic-model construction from grammar
//! reductions.
//!
//! An external grammar-driven parsing engine recognizes DMDL syntax and
//! walks its parse tree bottom-up. For each matched production it invokes
//! the builder registered for that production, passing the already-reduced
//! children in source order. This crate supplies those builders and the
//! metamodel they assemble; it owns no grammar, lexer, or file handling.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! reduce    → token filter, leaf/structural builders, builder registry
//!   ↓
//! metamodel → entity and value types (Model, Package, DataType, ...)
//!   ↓
//! base      → primitives (Name, Namespace stack + scope guard)
//! ```

/// Foundation types: Name, Namespace stack, scope guard
pub mod base;

/// Metamodel: immutable entity and value types
pub mod metamodel;

/// Reduction: builders that turn production children into metamodel nodes
pub mod reduce;

// Re-export foundation types
pub use base::{Name, Namespace, NamespaceScope};

// Re-export the reduction surface most collaborators need
pub use reduce::{Builder, BuilderRegistry, Child, ReduceContext, ReduceError};
