//! Error types for reduction.

use thiserror::Error;

/// Errors a builder can report to the driving collaborator.
///
/// Builders are permissive by design: unrecognized child variants are
/// ignored, and most under-populated productions degrade to partially
/// filled nodes. The errors here cover the few conditions where no value
/// can be produced at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReduceError {
    /// A production supplied fewer mandatory children than its builder
    /// requires.
    #[error("malformed `{rule}` node: expected at least {expected} children, found {found}")]
    MalformedNode {
        rule: &'static str,
        expected: usize,
        found: usize,
    },

    /// An integer leaf whose lexeme does not parse.
    #[error("invalid integer literal `{0}`")]
    InvalidInt(String),

    /// A reduction was requested for a production no builder is
    /// registered for.
    #[error("no builder registered for production `{0}`")]
    UnknownRule(String),
}
