//! Leaf builders — single matched tokens, and the descriptive-element
//! builder that collapses optional description text.

use crate::metamodel::{Description, QualifiedIdent};

use super::child::Child;
use super::context::ReduceContext;
use super::error::ReduceError;
use super::filter::strip_markers;

/// Build a qualified identifier from a matched identifier token, pairing
/// the lexeme with the namespace path active at this point of the
/// reduction.
pub fn build_ident(ctx: &ReduceContext, lexeme: &str) -> Child {
    Child::Ident(QualifiedIdent::new(lexeme, ctx.namespace()))
}

/// Build an integer literal.
pub fn build_int(lexeme: &str) -> Result<Child, ReduceError> {
    lexeme
        .parse::<i64>()
        .map(Child::Int)
        .map_err(|_| ReduceError::InvalidInt(lexeme.to_string()))
}

/// Build a string literal's content.
pub fn build_string(content: &str) -> Child {
    Child::Str(content.to_string())
}

/// Build the `...` variadic marker.
pub fn build_variadic() -> Child {
    Child::Variadic
}

/// Unwrap a quoted constraint-parameter production into its string
/// content. The child sequence looks like `(") (content) (")`; the last
/// non-quote token wins, and an empty production yields an empty string.
pub fn build_spec_param_string(ctx: &ReduceContext, children: Vec<Child>) -> Child {
    let mut content = String::new();
    for child in children {
        match child {
            Child::Token(token) if token != "\"" => content = token.to_string(),
            Child::Str(text) => content = text,
            _ => {}
        }
    }

    if ctx.debug() {
        tracing::trace!(param = %content, "reduced constraint parameter string");
    }

    Child::Str(content)
}

/// Build the optional short/long description pair.
///
/// Among the non-absent string children (quote markers stripped first), the
/// first becomes the short description and a second becomes the long one.
/// When no descriptive text is present the whole value is absent — never a
/// description with two empty fields.
pub fn build_description(ctx: &ReduceContext, children: Vec<Child>) -> Child {
    let mut desc: Option<Description> = None;

    for child in strip_markers(children) {
        if let Child::Str(text) = child {
            let value = desc.get_or_insert_with(Description::default);
            if value.short.is_none() {
                value.short = Some(text);
            } else if value.long.is_none() {
                value.long = Some(text);
            }
        }
    }

    if ctx.debug() {
        tracing::trace!(present = desc.is_some(), "reduced descriptive element");
    }

    match desc {
        Some(value) => Child::Described(value),
        None => Child::Absent,
    }
}
