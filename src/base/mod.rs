//! Foundation types for the DMDL toolchain.
//!
//! This module provides the primitives used throughout the crate:
//! - [`Name`] - identifier and namespace-segment strings
//! - [`Namespace`], [`NamespaceScope`] - the lexical namespace stack
//!
//! This module has NO dependencies on other dmdl modules.

mod namespace;

pub use namespace::{Name, Namespace, NamespaceScope};
