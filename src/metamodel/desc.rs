//! Short/long descriptive text attached to named elements.

/// A short/long description pair.
///
/// A `Description` only exists when at least one field is set. "No
/// description" is always `Option<Description>::None`, never a value with
/// two empty fields — callers must treat the two states as distinct.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Description {
    pub short: Option<String>,
    pub long: Option<String>,
}

impl Description {
    pub fn short(text: impl Into<String>) -> Self {
        Self {
            short: Some(text.into()),
            long: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.short.is_none() && self.long.is_none()
    }
}
