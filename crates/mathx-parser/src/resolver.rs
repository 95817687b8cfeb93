//! Resolution of bare symbol names.

use mathx_core::{qualify, SYSTEM_CONTEXT};

/// Supplies the qualified name of a symbol written without a context.
///
/// Any `Fn(&str) -> Option<String>` closure is a resolver.
pub trait NameResolver {
    /// The fully qualified name for `name`, or `None` if it cannot be
    /// resolved.
    fn resolve_unqualified_name(&self, name: &str) -> Option<String>;
}

impl<F> NameResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve_unqualified_name(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Places every bare name in one fixed context, `System` by default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemResolver {
    context: String,
}

impl SystemResolver {
    /// A resolver using `context` instead of `System`.
    pub fn with_context(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }

    /// The context names are placed in.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl Default for SystemResolver {
    fn default() -> Self {
        Self::with_context(SYSTEM_CONTEXT)
    }
}

impl NameResolver for SystemResolver {
    fn resolve_unqualified_name(&self, name: &str) -> Option<String> {
        qualify(name, &self.context).ok()
    }
}
