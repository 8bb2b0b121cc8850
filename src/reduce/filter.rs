//! Marker-token filtering.

use super::child::Child;

/// Tokens that are syntactically significant but semantically empty:
/// punctuation and the reserved keywords used only as syntax markers.
pub const SYNTAX_MARKERS: &[&str] = &["(", ")", "{", "}", ",", "\"", "appliesTo"];

pub(crate) fn is_marker(token: &str) -> bool {
    SYNTAX_MARKERS.contains(&token)
}

/// Strip marker tokens from a child sequence, preserving the order of the
/// remaining children. Pure; builders whose productions carry no markers
/// skip this step.
pub fn strip_markers(children: Vec<Child>) -> Vec<Child> {
    children
        .into_iter()
        .filter(|child| match child {
            Child::Token(token) => !is_marker(token),
            _ => true,
        })
        .collect()
}
