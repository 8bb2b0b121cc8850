//! Structural builders for type references and properties.

use crate::metamodel::{Property, Relationship, TypeDef};

use super::child::Child;
use super::context::ReduceContext;

/// Build a type reference.
///
/// Variant alone is ambiguous for identifier children, so position decides:
/// the first identifier is the referenced base type, a later identifier is
/// the declared element's own name. A `[` marker sets the container flag
/// and an integer child fixes the multiplicity count.
pub fn build_type_def(ctx: &ReduceContext, children: Vec<Child>) -> Child {
    let mut type_def = TypeDef::default();

    for child in children {
        match child {
            Child::Ident(ident) => {
                if type_def.base.is_none() {
                    type_def.base = Some(ident);
                } else {
                    type_def.name = Some(ident.name);
                }
            }
            Child::Token(token) if token == "[" => type_def.container = true,
            Child::Int(count) => type_def.multiplicity = u32::try_from(count).ok(),
            _ => {}
        }
    }

    if ctx.debug() {
        tracing::trace!(
            base = type_def.base.as_ref().map(|b| b.name.as_str()),
            name = type_def.name.as_deref(),
            "reduced type def"
        );
    }

    Child::TypeDef(type_def)
}

/// Build an entity property.
///
/// The relationship sub-object is created lazily, only when a containment
/// marker (`+`) or an opposite-end reference child appears; a descriptive
/// child attaches to the property's type reference.
pub fn build_property(ctx: &ReduceContext, children: Vec<Child>) -> Child {
    let mut prop = Property::default();

    for child in children {
        match child {
            Child::Token(token) => match token.as_str() {
                "unique" => prop.unique = true,
                "ordered" => prop.ordered = true,
                "readonly" => prop.readonly = true,
                "required" => prop.required = true,
                "+" => {
                    prop.relationship
                        .get_or_insert_with(Relationship::default)
                        .containment = true;
                }
                _ => {}
            },
            Child::TypeDef(type_def) => prop.type_def = Some(type_def),
            Child::Ref(opposite) => {
                prop.relationship
                    .get_or_insert_with(Relationship::default)
                    .opposite_end = Some(opposite);
            }
            Child::SpecSet(set) => {
                for spec in set {
                    prop.specs.insert(spec);
                }
            }
            Child::Described(desc) => {
                prop.type_def.get_or_insert_with(TypeDef::default).desc = Some(desc);
            }
            _ => {}
        }
    }

    if ctx.debug() {
        tracing::debug!(
            name = prop.name().map(|n| n.as_str()),
            has_relationship = prop.relationship.is_some(),
            specs = prop.specs.len(),
            "reduced property"
        );
    }

    Child::Property(prop)
}
