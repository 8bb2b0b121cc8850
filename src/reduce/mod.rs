//! Reduction: turning grammar productions into metamodel nodes.
//!
//! The external parsing engine walks its parse tree bottom-up and, for each
//! matched production, invokes the builder registered for it exactly once,
//! passing the production's direct children — each already reduced to a raw
//! token or a built node — in source order, together with read access to
//! the ambient namespace path and a debug-trace flag.
//!
//! Builders never call each other; composition happens because a parent
//! builder receives its children as [`Child`] values and discriminates them
//! by variant. Dispatch is total: a builder silently ignores any child
//! variant it does not recognize, so grammar productions may grow new
//! markers without breaking existing builders.

mod build_behavior;
mod build_constraints;
mod build_members;
mod build_structure;
mod build_types;
mod child;
mod context;
mod error;
mod filter;
mod leaf;
mod registry;
mod specs;

#[cfg(test)]
mod tests;

pub use build_behavior::{build_exception, build_op_param, build_operation, build_service};
pub use build_constraints::{
    build_apply_def, build_common_tag, build_constr_def, build_constraint,
};
pub use build_members::{build_property, build_type_def};
pub use build_structure::{build_model, build_package};
pub use build_types::{build_data_type, build_enum_literal, build_enumeration};
pub use child::Child;
pub use context::{PackageScope, ReduceContext};
pub use error::ReduceError;
pub use filter::{SYNTAX_MARKERS, strip_markers};
pub use leaf::{
    build_description, build_ident, build_int, build_spec_param_string, build_string,
    build_variadic,
};
pub use registry::{Builder, BuilderRegistry};
pub use specs::{
    build_constraint_spec, build_constraint_spec_list, build_depends_def, build_extends_def,
    build_ref,
};
