//! Reduction context — ambient state the driver threads through builders.

use crate::base::{Name, Namespace};

/// Ambient state for one compiled unit's reduction.
///
/// Builders receive `&ReduceContext` and only read it. The namespace stack
/// is mutated exclusively by the driving collaborator at package
/// entry/exit, via [`ReduceContext::enter_package`].
#[derive(Debug, Default, Clone)]
pub struct ReduceContext {
    namespace: Namespace,
    debug: bool,
}

impl ReduceContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context whose builders emit `tracing` events as they reduce.
    /// The flag is side-effect-only; it never influences built values.
    pub fn with_debug(debug: bool) -> Self {
        Self {
            namespace: Namespace::new(),
            debug,
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Enter a package scope. The returned guard derefs to the context so
    /// builders can be invoked while it is held, and pops the namespace
    /// segment when dropped.
    pub fn enter_package(&mut self, name: impl Into<Name>) -> PackageScope<'_> {
        self.namespace.push(name);
        PackageScope { ctx: self }
    }
}

/// Guard for a package scope; pops the namespace segment on drop.
pub struct PackageScope<'a> {
    ctx: &'a mut ReduceContext,
}

impl std::ops::Deref for PackageScope<'_> {
    type Target = ReduceContext;

    fn deref(&self) -> &ReduceContext {
        self.ctx
    }
}

impl std::ops::DerefMut for PackageScope<'_> {
    fn deref_mut(&mut self) -> &mut ReduceContext {
        self.ctx
    }
}

impl Drop for PackageScope<'_> {
    fn drop(&mut self) {
        self.ctx.namespace.pop();
    }
}
