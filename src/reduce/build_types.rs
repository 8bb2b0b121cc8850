//! Structural builders for data types, enumerations, and enum literals.

use crate::metamodel::{DataType, EnumLiteral, Enumeration};

use super::child::Child;
use super::context::ReduceContext;
use super::error::ReduceError;

/// Build a data type declaration.
///
/// `built_in` is fixed when the builder is registered to a grammar
/// production — the built-in-primitive production and the user-declared
/// production register differently configured builders — and is never
/// inferred from the parsed children.
pub fn build_data_type(ctx: &ReduceContext, children: Vec<Child>, built_in: bool) -> Child {
    let mut data = DataType {
        name: Default::default(),
        namespace: ctx.namespace().to_vec(),
        desc: None,
        built_in,
    };

    for child in children {
        match child {
            Child::Ident(ident) => data.name = ident.name,
            Child::Described(desc) => data.desc = Some(desc),
            _ => {}
        }
    }

    if ctx.debug() {
        tracing::debug!(name = %data.name, built_in, "reduced data type");
    }

    Child::Data(data)
}

/// Build an enumeration declaration.
pub fn build_enumeration(ctx: &ReduceContext, children: Vec<Child>) -> Child {
    let mut enumeration = Enumeration {
        name: Default::default(),
        namespace: ctx.namespace().to_vec(),
        desc: None,
        literals: Vec::new(),
    };

    for child in children {
        match child {
            Child::Ident(ident) => enumeration.name = ident.name,
            Child::Described(desc) => enumeration.desc = Some(desc),
            Child::EnumLiteral(literal) => enumeration.literals.push(literal),
            _ => {}
        }
    }

    if ctx.debug() {
        tracing::debug!(
            name = %enumeration.name,
            literals = enumeration.literals.len(),
            "reduced enumeration"
        );
    }

    Child::Enum(enumeration)
}

/// Build one enumeration literal.
///
/// Name and value are mandatory; this is the one strict builder. A third,
/// descriptive child is merged in when present.
pub fn build_enum_literal(ctx: &ReduceContext, children: Vec<Child>) -> Result<Child, ReduceError> {
    const RULE: &str = "enumLiteral";

    let found = children.len();
    if found < 2 {
        return Err(ReduceError::MalformedNode {
            rule: RULE,
            expected: 2,
            found,
        });
    }

    let mut name = None;
    let mut value = None;
    let mut desc = None;
    for child in children {
        match child {
            Child::Ident(ident) if name.is_none() => name = Some(ident.name),
            Child::Int(int) if value.is_none() => value = Some(int),
            Child::Described(d) if desc.is_none() => desc = Some(d),
            _ => {}
        }
    }

    let (Some(name), Some(value)) = (name, value) else {
        return Err(ReduceError::MalformedNode {
            rule: RULE,
            expected: 2,
            found,
        });
    };

    if ctx.debug() {
        tracing::trace!(name = %name, value, "reduced enum literal");
    }

    Ok(Child::EnumLiteral(EnumLiteral { name, value, desc }))
}
