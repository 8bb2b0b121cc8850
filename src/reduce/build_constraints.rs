//! Structural builders for constraint declarations and tag shapes.

use crate::metamodel::{ApplyDef, CommonTag, ConstrDef, ConstrParam, Constraint, ConstraintKind};

use super::child::Child;
use super::context::ReduceContext;
use super::filter::strip_markers;

/// Build a tag or validator declaration.
///
/// Like the data type builder, `built_in` and `kind` are fixed at
/// registration time: the four grammar productions (built-in/user ×
/// tag/validator) each register their own configuration.
pub fn build_constraint(
    ctx: &ReduceContext,
    children: Vec<Child>,
    built_in: bool,
    kind: ConstraintKind,
) -> Child {
    let mut constraint = Constraint {
        name: Default::default(),
        namespace: ctx.namespace().to_vec(),
        built_in,
        kind,
        tag: None,
    };

    for child in children {
        match child {
            Child::Ident(ident) => constraint.name = ident.name,
            Child::CommonTag(tag) => constraint.tag = Some(tag),
            _ => {}
        }
    }

    if ctx.debug() {
        tracing::debug!(
            name = %constraint.name,
            kind = constraint.kind.display(),
            built_in,
            "reduced constraint"
        );
    }

    Child::Constraint(constraint)
}

/// Build the reusable tag shape shared by tag and validator declarations.
pub fn build_common_tag(ctx: &ReduceContext, children: Vec<Child>) -> Child {
    let mut tag = CommonTag {
        name: Default::default(),
        desc: None,
        constr_def: None,
        applies: None,
    };

    for child in children {
        match child {
            Child::Ident(ident) => tag.name = ident.name,
            Child::ConstrDef(def) => tag.constr_def = Some(def),
            Child::ApplyDef(applies) => tag.applies = Some(applies),
            Child::Described(desc) => tag.desc = Some(desc),
            _ => {}
        }
    }

    if ctx.debug() {
        tracing::trace!(name = %tag.name, "reduced common tag");
    }

    Child::CommonTag(tag)
}

/// Build a constraint's formal-parameter list.
pub fn build_constr_def(_ctx: &ReduceContext, children: Vec<Child>) -> Child {
    let mut def = ConstrDef::default();

    for child in strip_markers(children) {
        match child {
            Child::Ident(ident) => def.params.push(ConstrParam::Type(ident.name)),
            Child::Token(keyword) => def.params.push(ConstrParam::Type(keyword)),
            Child::Variadic => def.params.push(ConstrParam::Variadic),
            _ => {}
        }
    }

    Child::ConstrDef(def)
}

/// Build the list of element kinds a tag/validator may decorate.
///
/// Iterates the unfiltered children, so the `appliesTo` keyword itself
/// lands in the target list alongside the real targets.
// TODO: confirm with the grammar owner whether the `appliesTo` marker is
// meant to be a target before stripping it here.
pub fn build_apply_def(ctx: &ReduceContext, children: Vec<Child>) -> Child {
    let mut applies = ApplyDef::default();

    for child in children {
        match child {
            Child::Token(target) => applies.targets.push(target),
            Child::Ident(ident) => applies.targets.push(ident.name),
            _ => {}
        }
    }

    if ctx.debug() {
        tracing::trace!(targets = applies.targets.len(), "reduced apply def");
    }

    Child::ApplyDef(applies)
}
