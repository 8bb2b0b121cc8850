//! Constraint-specification builders and the small reference wrappers for
//! `ref`, `extends`, and `dependsOn` clauses.

use crate::metamodel::{
    ClassKind, ClassifierRef, ConstraintSpec, ConstraintSpecSet, SpecParam,
};

use super::child::Child;
use super::context::ReduceContext;

/// Build one constraint-specification invocation.
///
/// The first identifier child names the referenced constraint; every later
/// identifier, string, or integer child is a bound parameter, in order.
/// A production with no identifier at all reduces to nothing.
pub fn build_constraint_spec(ctx: &ReduceContext, children: Vec<Child>) -> Child {
    let mut target = None;
    let mut params = Vec::new();

    for child in children {
        match child {
            Child::Ident(ident) => {
                if target.is_none() {
                    target = Some(ident);
                } else {
                    params.push(SpecParam::Ident(ident));
                }
            }
            Child::Str(text) => params.push(SpecParam::Str(text)),
            Child::Int(value) => params.push(SpecParam::Int(value)),
            _ => {}
        }
    }

    let Some(target) = target else {
        return Child::Absent;
    };

    if ctx.debug() {
        tracing::trace!(target = %target, params = params.len(), "reduced constraint spec");
    }

    Child::Spec(ConstraintSpec::with_params(target, params))
}

/// Build a deduplicated set of constraint specifications.
///
/// Every spec child is inserted; a bare identifier child is interpreted as
/// a zero-parameter spec referencing that identifier. Duplicate specs —
/// equal referenced identifier and ordered parameter list — collapse
/// silently into one member.
pub fn build_constraint_spec_list(ctx: &ReduceContext, children: Vec<Child>) -> Child {
    let mut set = ConstraintSpecSet::new();

    for child in children {
        match child {
            Child::Spec(spec) => {
                set.insert(spec);
            }
            Child::Ident(ident) => {
                set.insert(ConstraintSpec::new(ident));
            }
            _ => {}
        }
    }

    if ctx.debug() {
        tracing::trace!(specs = set.len(), "reduced constraint spec list");
    }

    Child::SpecSet(set)
}

/// Wrap an opposite-end reference. Reduces to nothing when the production
/// supplied no identifier.
pub fn build_ref(_ctx: &ReduceContext, children: Vec<Child>) -> Child {
    for child in children {
        if let Child::Ident(ident) = child {
            return Child::Ref(ident);
        }
    }
    Child::Absent
}

/// Wrap the single superclass-like reference of an `extends` clause.
pub fn build_extends_def(_ctx: &ReduceContext, children: Vec<Child>) -> Child {
    for child in children {
        if let Child::Ident(ident) = child {
            return Child::Extends(ClassifierRef::new(ident, ClassKind::Entity));
        }
    }
    Child::Absent
}

/// Wrap the ordered reference list of a `dependsOn` clause.
pub fn build_depends_def(ctx: &ReduceContext, children: Vec<Child>) -> Child {
    let mut references = Vec::new();
    for child in children {
        if let Child::Ident(ident) = child {
            references.push(ClassifierRef::unkinded(ident));
        }
    }

    if ctx.debug() {
        tracing::trace!(count = references.len(), "reduced dependency list");
    }

    Child::DependsOn(references)
}
