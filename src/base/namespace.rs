//! Lexical namespace stack.
//!
//! The namespace path is ambient state owned by whoever drives the
//! reduction: entering a package's member list pushes that package's name,
//! leaving it pops. Builders only ever read the current path; the stack is
//! mutated exclusively at package boundaries.

use smol_str::SmolStr;

/// An identifier or namespace segment. Cheap to clone.
pub type Name = SmolStr;

/// Stack of package names in scope at the current point of the reduction.
///
/// One instance per compiled unit. Must never be shared across concurrent
/// reductions of independent units.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Namespace {
    segments: Vec<Name>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a segment. Prefer [`Namespace::enter`] where the matching pop
    /// should be guaranteed by scope.
    pub fn push(&mut self, segment: impl Into<Name>) {
        self.segments.push(segment.into());
    }

    pub fn pop(&mut self) -> Option<Name> {
        self.segments.pop()
    }

    /// Push a segment and return a guard that pops it on drop.
    pub fn enter(&mut self, segment: impl Into<Name>) -> NamespaceScope<'_> {
        self.segments.push(segment.into());
        NamespaceScope { namespace: self }
    }

    /// The currently active path, outermost first.
    pub fn path(&self) -> &[Name] {
        &self.segments
    }

    /// Snapshot of the active path, for capture into a metamodel node.
    pub fn to_vec(&self) -> Vec<Name> {
        self.segments.clone()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Join the active path and `name` with `::` for display.
    pub fn qualify(&self, name: &str) -> String {
        if self.segments.is_empty() {
            name.to_string()
        } else {
            let mut out = String::new();
            for segment in &self.segments {
                out.push_str(segment);
                out.push_str("::");
            }
            out.push_str(name);
            out
        }
    }
}

/// Scope guard returned by [`Namespace::enter`]; pops the pushed segment
/// when dropped.
pub struct NamespaceScope<'a> {
    namespace: &'a mut Namespace,
}

impl std::ops::Deref for NamespaceScope<'_> {
    type Target = Namespace;

    fn deref(&self) -> &Namespace {
        self.namespace
    }
}

impl std::ops::DerefMut for NamespaceScope<'_> {
    fn deref_mut(&mut self) -> &mut Namespace {
        self.namespace
    }
}

impl Drop for NamespaceScope<'_> {
    fn drop(&mut self) {
        self.namespace.segments.pop();
    }
}
